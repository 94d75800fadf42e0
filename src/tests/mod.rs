//! Unit and integration tests for the Strukturwald application.
//!
//! ## Test Modules
//!
//! - **scanner_tests**: Directory traversal, ordering, filtering and fault policy
//! - **config_tests**: Configuration loading and validation
//! - **error_tests**: Error display and conversions
//! - **export_tests**: Manifest serialization and artifact writing
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod config_tests;
