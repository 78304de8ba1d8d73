//! # Inkwell Shared
//!
//! Wire types of the blog API. Kept free of server dependencies so clients
//! can reuse them.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
