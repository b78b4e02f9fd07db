//! Reference years reported by the percentile dataset.

use serde::{Serialize, Serializer};
use std::fmt;

/// One of the five survey years carried in the CSV, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YearKey {
    Y1990,
    Y2000,
    Y2010,
    Y2019,
    Y2022,
}

impl YearKey {
    pub const ALL: [YearKey; 5] = [
        YearKey::Y1990,
        YearKey::Y2000,
        YearKey::Y2010,
        YearKey::Y2019,
        YearKey::Y2022,
    ];

    /// Two-character column suffix, e.g. `p_global_90`.
    pub fn suffix(self) -> &'static str {
        match self {
            YearKey::Y1990 => "90",
            YearKey::Y2000 => "00",
            YearKey::Y2010 => "10",
            YearKey::Y2019 => "19",
            YearKey::Y2022 => "22",
        }
    }

    /// Key used in the generated output.
    pub fn label(self) -> &'static str {
        match self {
            YearKey::Y1990 => "1990",
            YearKey::Y2000 => "2000",
            YearKey::Y2010 => "2010",
            YearKey::Y2019 => "2019",
            YearKey::Y2022 => "2022",
        }
    }

    pub fn from_label(label: &str) -> Option<YearKey> {
        YearKey::ALL.into_iter().find(|y| y.label() == label.trim())
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn global_column(self) -> String {
        format!("p_global_{}", self.suffix())
    }

    pub fn region_column(self) -> String {
        format!("p_region_{}", self.suffix())
    }

    pub fn income_column(self) -> String {
        format!("p_income_{}", self.suffix())
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Encodes as the year label so year-keyed maps become `{"1990": ...}`.
impl Serialize for YearKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
