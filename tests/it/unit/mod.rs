//! Unit tests for canvas-input.

mod emitter_tests;
mod logging_tests;
mod perf_tests;
