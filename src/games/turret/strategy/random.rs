//! Uniform random play.

use super::super::rules::successors;
use super::super::types::GameState;
use super::pick_uniform;
use rand::Rng;

/// Picks uniformly among all successors.
pub fn select<R: Rng>(state: &GameState, rng: &mut R) -> Option<GameState> {
    pick_uniform(successors(state), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_selects_legal_successor() {
        let state = GameState::new(3).unwrap();
        let legal = successors(&state);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let next = select(&state, &mut rng).unwrap();
            assert!(legal.contains(&next));
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let state = GameState::new(4).unwrap();
        let a = select(&state, &mut StdRng::seed_from_u64(42));
        let b = select(&state, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
