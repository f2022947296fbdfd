pub mod compare;
pub mod config;
pub mod fees;
pub mod share;
