//! Dealership domain module.
//!
//! A dealership stocks vehicles built elsewhere and reports on them.

pub mod dealership;

pub use dealership::Dealership;
