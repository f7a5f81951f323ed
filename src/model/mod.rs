//! Wire-level DTOs shared by the HTTP layer.

pub mod api;
pub mod comment;
