#![allow(unused)]
//! Shared test utilities for logtag integration harnesses.
//!
//! Import everything via `mod common; use common::*;` at the top of each
//! harness file.

pub mod fixtures;

pub use fixtures::*;
