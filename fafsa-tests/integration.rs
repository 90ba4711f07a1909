//! Integration tests for the FAFSA guide
//!
//! These tests exercise the crates together: component contracts as seen by
//! pages, the axum router end to end, and the static export on disk.

#[path = "integration/component_contracts.rs"]
mod component_contracts;

#[path = "integration/router.rs"]
mod router;

#[path = "integration/static_export.rs"]
mod static_export;
