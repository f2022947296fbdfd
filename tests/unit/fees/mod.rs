//! Fee comparison unit tests

pub mod calculator_properties;
pub mod formatting;
