//! A single percentile observation for one country and year.

use crate::domain::field_parser::parse_rank;
use crate::domain::row::YearCells;
use serde::Serialize;

/// Domestic percentile plus whichever reference ranks were present.
///
/// Absent ranks are omitted from the encoded form rather than written as null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub percentile: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<i64>,
}

impl Observation {
    /// Builds an observation from one year's cells, or `None` when no
    /// reference rank parses.
    pub fn from_cells(percentile: i64, cells: &YearCells) -> Option<Self> {
        let global = parse_rank(&cells.global);
        let region = parse_rank(&cells.region);
        let income = parse_rank(&cells.income);
        if global.is_none() && region.is_none() && income.is_none() {
            return None;
        }
        Some(Self {
            percentile,
            global,
            region,
            income,
        })
    }

    pub fn has_reference_rank(&self) -> bool {
        self.global.is_some() || self.region.is_some() || self.income.is_some()
    }
}
