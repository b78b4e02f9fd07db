//! CSV file row source.

use crate::domain::error::ExportError;
use crate::domain::row::{PercentileRow, YearCells};
use crate::domain::year::YearKey;
use crate::ports::source_port::RowSource;
use csv::StringRecord;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const UTF8_BOM: char = '\u{feff}';

pub struct CsvRowSource {
    path: PathBuf,
}

impl CsvRowSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl RowSource for CsvRowSource {
    fn read_rows(&self) -> Result<Vec<PercentileRow>, ExportError> {
        let content = fs::read_to_string(&self.path).map_err(|e| ExportError::CsvRead {
            file: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        parse_rows(&content).map_err(|reason| ExportError::CsvRead {
            file: self.path.display().to_string(),
            reason,
        })
    }
}

/// Column positions resolved from the header row. Missing columns read as `""`.
struct ColumnIndex {
    country: Option<usize>,
    region_wb: Option<usize>,
    incomegroup: Option<usize>,
    p_country: Option<usize>,
    years: [[Option<usize>; 3]; 5],
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        // duplicate names resolve to the last column, like a dict-backed reader
        let positions: HashMap<&str, usize> =
            headers.iter().enumerate().map(|(i, h)| (h, i)).collect();
        let find = |name: &str| positions.get(name).copied();

        let years = YearKey::ALL.map(|year| {
            [
                find(year.global_column().as_str()),
                find(year.region_column().as_str()),
                find(year.income_column().as_str()),
            ]
        });

        Self {
            country: find("country"),
            region_wb: find("region_wb"),
            incomegroup: find("incomegroup"),
            p_country: find("p_country"),
            years,
        }
    }

    fn row(&self, record: &StringRecord) -> PercentileRow {
        let cell = |pos: Option<usize>| {
            pos.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        PercentileRow {
            country: cell(self.country),
            region_wb: cell(self.region_wb),
            incomegroup: cell(self.incomegroup),
            p_country: cell(self.p_country),
            years: self.years.map(|[global, region, income]| YearCells {
                global: cell(global),
                region: cell(region),
                income: cell(income),
            }),
        }
    }
}

/// Parses CSV text (header row first) into rows, tolerating a leading BOM
/// and rows with missing trailing cells.
pub fn parse_rows(content: &str) -> Result<Vec<PercentileRow>, String> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| format!("CSV header error: {}", e))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| format!("CSV parse error: {}", e))?;
        rows.push(columns.row(&record));
    }
    Ok(rows)
}
