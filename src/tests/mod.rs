//! # Face Scenario Tests
//!
//! End-to-end checks that drive the engine through the event loop the way a
//! host and a companion would, plus the stdin command parser.

mod runtime_tests;
