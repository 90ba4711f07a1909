//! Style Enforcement Tests
//!
//! Scans the `fafsa-*` crates for patterns clippy does not reject on its own.
//!
//! - `dead_code_enforcement` - no `#[allow(dead_code)]` in production code
//! - `production_panics` - no `.unwrap()`, `.expect(` or `panic!` outside test modules

#[path = "style/mod.rs"]
mod support;

#[path = "style/dead_code_enforcement.rs"]
mod dead_code_enforcement;

#[path = "style/production_panics.rs"]
mod production_panics;
