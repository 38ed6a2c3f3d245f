//! HTTP layer: request/response DTOs, handlers, and middleware.
//!
//! This layer translates HTTP requests into repository operations and maps
//! the error taxonomy onto status codes and JSON payloads.

pub mod dto;
pub mod handlers;
pub mod middleware;
