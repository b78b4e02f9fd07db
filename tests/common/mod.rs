#![allow(dead_code)]

use percentile_export::domain::dataset::Dataset;
use percentile_export::domain::error::ExportError;
pub use percentile_export::domain::row::PercentileRow;
pub use percentile_export::domain::year::YearKey;
use percentile_export::ports::artifact_port::ArtifactSink;
use percentile_export::ports::source_port::RowSource;
use std::cell::RefCell;

pub const HEADER: &str = "country,region_wb,incomegroup,p_country,\
    p_global_90,p_region_90,p_income_90,\
    p_global_00,p_region_00,p_income_00,\
    p_global_10,p_region_10,p_income_10,\
    p_global_19,p_region_19,p_income_19,\
    p_global_22,p_region_22,p_income_22";

pub struct MockRowSource {
    pub rows: Vec<PercentileRow>,
    pub error: Option<String>,
}

impl MockRowSource {
    pub fn new(rows: Vec<PercentileRow>) -> Self {
        Self { rows, error: None }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            rows: Vec::new(),
            error: Some(reason.to_string()),
        }
    }
}

impl RowSource for MockRowSource {
    fn read_rows(&self) -> Result<Vec<PercentileRow>, ExportError> {
        if let Some(reason) = &self.error {
            return Err(ExportError::CsvRead {
                file: "mock.csv".into(),
                reason: reason.clone(),
            });
        }
        Ok(self.rows.clone())
    }
}

/// Records what it was asked to write instead of touching disk.
#[derive(Default)]
pub struct RecordingSink {
    pub written: RefCell<Vec<String>>,
}

impl ArtifactSink for RecordingSink {
    fn write(&self, dataset: &Dataset) -> Result<u64, ExportError> {
        let content = percentile_export::adapters::js_artifact_adapter::render(dataset)?;
        let bytes = content.len() as u64;
        self.written.borrow_mut().push(content);
        Ok(bytes)
    }
}

/// One CSV line with the given metadata, domestic percentile and per-year
/// `(global, region, income)` cells in column order.
pub fn csv_line(
    country: &str,
    region: &str,
    income_group: &str,
    p_country: &str,
    years: [(&str, &str, &str); 5],
) -> String {
    let mut cells = vec![
        country.to_string(),
        region.to_string(),
        income_group.to_string(),
        p_country.to_string(),
    ];
    for (g, r, i) in years {
        cells.extend([g.to_string(), r.to_string(), i.to_string()]);
    }
    cells.join(",")
}

pub const NO_RANKS: [(&str, &str, &str); 5] = [("", "", ""); 5];
