//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. `source` defines the collaborator
//! traits the aggregation engine reads through and their database implementation.

pub mod comment;
pub mod comment_like;
pub mod evaluation;
pub mod source;
pub mod user;

#[cfg(test)]
mod test;
