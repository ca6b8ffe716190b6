//! Command-line support for permpack.
//!
//! This crate provides:
//! - A JSON problem parser
//! - Search-space reports for a problem
//! - Bounded walks over arrangements

mod parser;
mod problem;
mod report;
mod walk;

pub use parser::{ParseError, ProblemParser};
pub use problem::Problem;
pub use report::{Report, TypeReport};
pub use walk::walk_arrangements;
