//! Logging setup

pub mod logging;
