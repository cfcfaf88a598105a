//! Config composition.

pub mod service;

mod merge_policy;
