//! Resolver pipeline for docvars.
//!
//! Ties manifest parsing and variable publication into the once-per-build
//! resolve step, plus emitters for templating systems that consume a file
//! instead of the in-process registry.

pub mod emit;
pub mod resolver;
