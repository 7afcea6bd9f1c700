//! # objdict-core
//!
//! Core types shared across the object dictionary crates.
//!
//! This crate provides:
//! - Storage records for models, fields and users
//! - View shapes returned to callers (aggregate and shallow model views)
//! - The record ↔ view translation contract
//! - Store contracts (`CommandRepository`, `QueryRepository`) and the
//!   `Conditions` equality filter they accept
//! - Cross-cutting error types

pub mod conditions;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod mapping;
pub mod repository;
pub mod views;

pub use conditions::Conditions;
pub use errors::CoreError;
pub use repository::{CommandRepository, QueryRepository};
