//! percentile_export — converts country income percentile CSV data into
//! script constants for a static client page.
//!
//! Layered architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
