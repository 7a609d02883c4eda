//! # Lattice-Kernel Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion bodies, wired up in benches/
//! │   └── traversal.rs
//! │
//! └── integration/      # Consumer-style scenarios across crates
//!     ├── concurrency.rs
//!     ├── layout.rs
//!     └── telemetry.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lattice-tests
//!
//! # By category
//! cargo test -p lattice-tests integration::
//!
//! # Benchmarks
//! cargo bench -p lattice-tests
//! ```
