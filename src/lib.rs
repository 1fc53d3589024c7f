//! Checks whether an OpenComponents registry can be upgraded to the latest
//! `oc` release, and which components must be republished first.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod version;
