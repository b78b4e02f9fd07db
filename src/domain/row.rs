//! Raw cells of one CSV row, before any numeric parsing.

use crate::domain::year::YearKey;

/// The three reference-rank cells for one year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearCells {
    pub global: String,
    pub region: String,
    pub income: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PercentileRow {
    pub country: String,
    pub region_wb: String,
    pub incomegroup: String,
    pub p_country: String,
    /// Indexed by [`YearKey::index`].
    pub years: [YearCells; 5],
}

impl PercentileRow {
    pub fn new(country: &str) -> Self {
        Self {
            country: country.to_string(),
            ..Self::default()
        }
    }

    pub fn with_meta(mut self, region_wb: &str, incomegroup: &str) -> Self {
        self.region_wb = region_wb.to_string();
        self.incomegroup = incomegroup.to_string();
        self
    }

    pub fn with_percentile(mut self, p_country: &str) -> Self {
        self.p_country = p_country.to_string();
        self
    }

    pub fn with_year(mut self, year: YearKey, global: &str, region: &str, income: &str) -> Self {
        self.years[year.index()] = YearCells {
            global: global.to_string(),
            region: region.to_string(),
            income: income.to_string(),
        };
        self
    }

    pub fn year(&self, year: YearKey) -> &YearCells {
        &self.years[year.index()]
    }
}
