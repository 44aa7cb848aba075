//! SeaORM entity definitions.
//!
//! These entities are used for database operations and are kept separate
//! from the business entities in the models module. The storage layer works
//! on these and converts to models at its boundary.

pub mod prelude;

pub mod audit_logs;
pub mod divisions;
pub mod evaluation_scores;
pub mod evaluations;
pub mod events;
pub mod indicator_snapshots;
pub mod indicators;
pub mod panitia;
pub mod periods;
pub mod prokers;
pub mod users;
