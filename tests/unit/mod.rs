//! Unit test suite for depsym
//!
//! Library-level tests that exercise several modules together without
//! spawning the binary.
//!
//! # Running Unit Tests
//!
//! ```bash
//! cargo test --test unit
//! ```
//!
//! # Test Organization
//!
//! - **naming**: Guarantees of the whole naming pipeline (uniqueness, determinism, grouping)
//! - **sample_report**: Expected names for a realistic report
//! - **properties_merge**: Properties block generation and merging

mod naming;
mod properties_merge;
mod sample_report;
