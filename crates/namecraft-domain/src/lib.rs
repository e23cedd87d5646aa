//! Namecraft Domain Layer
//!
//! This crate contains the core vocabulary shared by every other Namecraft crate.
//! It has ZERO external dependencies and defines the value objects and trait
//! interfaces that the extractor, LLM providers and CLI build on.
//!
//! ## Key Concepts
//!
//! - **Line kind**: How a single line of generated text is classified
//!   (header, list item, terminator, other)
//! - **Product title**: The validated input for a name suggestion
//! - **Providers**: Trait boundaries for LLM backends and list extraction
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure business logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod line;
pub mod product;
pub mod traits;

// Re-exports for convenience
pub use line::LineKind;
pub use product::ProductTitle;
