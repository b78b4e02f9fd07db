//! Core domain types and logic.

pub mod year;
pub mod field_parser;
pub mod row;
pub mod observation;
pub mod dataset;
pub mod summary;
pub mod error;
pub mod settings;
