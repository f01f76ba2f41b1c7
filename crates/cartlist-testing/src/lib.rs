//! Testing utilities and harness for cartlist

pub mod testing;

pub use testing::*;
