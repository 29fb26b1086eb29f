//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `risk` - Risk profiling engine (scores, categories, allocations, advice)

pub mod foundation;
pub mod risk;
