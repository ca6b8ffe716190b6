//! # permpack core
//!
//! Shared building blocks for the permpack enumeration engine.
//!
//! ## Core Components
//!
//! - **Errors**: [`Error`] and the [`Result`] alias used across the workspace
//! - **Configuration**: [`Config`] and [`RotationMode`]
//! - **Counters**: overflow-checked product and multinomial coefficient
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod count;
pub mod error;

// Re-exports
pub use config::{Config, RotationMode};
pub use count::{checked_product, multinomial, COUNT_LIMIT};
pub use error::{Error, Result};
