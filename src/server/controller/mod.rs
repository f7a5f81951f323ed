//! HTTP handlers.
//!
//! Controllers convert DTOs to domain parameters, call into the service layer and
//! convert the results back to DTOs. No business logic lives here.

pub mod comment;
