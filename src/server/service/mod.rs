//! Business logic layer.
//!
//! Services orchestrate repositories and collaborators, enforce domain rules and
//! return domain models to the controller layer. `fan_out` holds the concurrency
//! primitive shared by both comment aggregation levels.

pub mod comment;
pub mod fan_out;

#[cfg(test)]
mod test;
