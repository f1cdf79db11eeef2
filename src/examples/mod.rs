//! Canned puzzle instances used by tests and benchmarks.

pub mod classic;
