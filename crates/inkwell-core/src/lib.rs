//! # Inkwell Core
//!
//! The domain layer of the Inkwell blogging backend: posts, their taxonomy,
//! editorial links and engagement (views and comments).
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod caller;
pub mod domain;
pub mod error;
pub mod links;
pub mod ports;
pub mod services;

pub use caller::Caller;
pub use error::DomainError;
