//! Game implementations.

pub mod turret;
