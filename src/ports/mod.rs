//! Port traits at the I/O seams.

pub mod artifact_port;
pub mod config_port;
pub mod source_port;
