//! Unit tests exercising the public API module by module

pub mod fees;
