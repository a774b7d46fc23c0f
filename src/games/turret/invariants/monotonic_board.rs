//! Monotonic board invariant: cells only ever move forward.

use super::super::Cell;
use super::{Invariant, Transition};

/// Invariant: each cell changes monotonically across a move.
///
/// Allowed per-cell changes are `Blank` to anything, a single-orientation
/// beam to `CrossBeam`, and no change at all. Turrets never change.
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    fn allowed(before: Cell, after: Cell) -> bool {
        before == after
            || before == Cell::Blank
            || (matches!(before, Cell::HorizontalBeam | Cell::VerticalBeam)
                && after == Cell::CrossBeam)
    }
}

impl<'a> Invariant<Transition<'a>> for MonotonicBoardInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let before = transition.before.board().cells();
        let after = transition.after.board().cells();
        before.len() == after.len()
            && before
                .iter()
                .zip(after)
                .all(|(&b, &a)| Self::allowed(b, a))
    }

    fn description() -> &'static str {
        "Board cells are monotonic (turrets permanent, beams only merge)"
    }
}
