//! Loop Benchmarks
//!
//! Compares the traversal cost of different ways to iterate a `Vec<i32>`:
//! indexed and `while` loops, cursors, callbacks, rayon fork-join and
//! `par_iter`, and raw slice views. Each strategy visits every element once
//! with an empty body, so only the iteration mechanics are measured.
//!
//! Run with: cargo bench

pub mod config;
pub mod error;
pub mod generator;
pub mod measure;
pub mod runner;
pub mod sequence;
pub mod strategy;

pub use config::{InputSize, RunConfig, SUPPORTED_SIZES};
pub use error::{ConfigError, Result};
pub use generator::InputGenerator;
pub use measure::{measure, AllocationSnapshot, CountingAllocator, Measurement};
pub use runner::Runner;
pub use sequence::{Cursor, InputSequence};
pub use strategy::Strategy;
