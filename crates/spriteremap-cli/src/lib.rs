//! spriteremap CLI library.
//!
//! Command implementations behind the `spriteremap` binary, plus logging
//! setup.

pub mod commands;
pub mod logging;
