//! Per-country percentile series and metadata, built in one pass over the rows.
//!
//! Countries keep the order in which they were first seen. Both output
//! mappings share that key set: a country whose rows never produced an
//! observation still has an (empty) year map.

use crate::domain::field_parser::parse_domestic_percentile;
use crate::domain::observation::Observation;
use crate::domain::row::PercentileRow;
use crate::domain::year::YearKey;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Region and income group recorded from a country's first row.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct CountryInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incomegroup: Option<String>,
}

impl CountryInfo {
    pub fn from_cells(region_wb: &str, incomegroup: &str) -> Self {
        Self {
            region: non_empty(region_wb),
            incomegroup: non_empty(incomegroup),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.incomegroup.is_none()
    }
}

fn non_empty(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub name: String,
    pub info: CountryInfo,
    /// Only years with at least one observation have an entry.
    pub series: BTreeMap<YearKey, Vec<Observation>>,
}

impl CountryRecord {
    fn new(name: String, info: CountryInfo) -> Self {
        Self {
            name,
            info,
            series: BTreeMap::new(),
        }
    }

    pub fn observation_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }
}

/// What a single row contributed during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    EmptyCountry,
    NoPercentile,
    Ingested { observations: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub rows: usize,
    pub empty_country: usize,
    pub no_percentile: usize,
    pub without_observations: usize,
}

impl IngestStats {
    fn record(&mut self, outcome: RowOutcome) {
        self.rows += 1;
        match outcome {
            RowOutcome::EmptyCountry => self.empty_country += 1,
            RowOutcome::NoPercentile => self.no_percentile += 1,
            RowOutcome::Ingested { observations: 0 } => self.without_observations += 1,
            RowOutcome::Ingested { .. } => {}
        }
    }
}

/// Accumulates rows in file order. Call [`DatasetBuilder::finish`] to sort
/// the series and obtain the immutable [`Dataset`].
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    countries: Vec<CountryRecord>,
    index: HashMap<String, usize>,
    stats: IngestStats,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, row: &PercentileRow) -> RowOutcome {
        let outcome = self.ingest_row(row);
        self.stats.record(outcome);
        outcome
    }

    fn ingest_row(&mut self, row: &PercentileRow) -> RowOutcome {
        let country = row.country.trim();
        if country.is_empty() {
            return RowOutcome::EmptyCountry;
        }

        // first row for a country decides its metadata, even if blank
        let existing = self.index.get(country).copied();
        let slot = match existing {
            Some(slot) => slot,
            None => {
                let slot = self.countries.len();
                let info = CountryInfo::from_cells(&row.region_wb, &row.incomegroup);
                self.countries
                    .push(CountryRecord::new(country.to_string(), info));
                self.index.insert(country.to_string(), slot);
                slot
            }
        };

        let Some(percentile) = parse_domestic_percentile(&row.p_country) else {
            return RowOutcome::NoPercentile;
        };

        let record = &mut self.countries[slot];
        let mut observations = 0;
        for year in YearKey::ALL {
            if let Some(obs) = Observation::from_cells(percentile, row.year(year)) {
                record.series.entry(year).or_default().push(obs);
                observations += 1;
            }
        }
        RowOutcome::Ingested { observations }
    }

    pub fn finish(mut self) -> Dataset {
        for record in &mut self.countries {
            for series in record.series.values_mut() {
                // stable: equal percentiles keep row order
                series.sort_by_key(|obs| obs.percentile);
            }
        }
        Dataset {
            countries: self.countries,
            index: self.index,
            stats: self.stats,
        }
    }
}

/// Finalized dataset: series sorted, no further mutation.
#[derive(Debug, Clone)]
pub struct Dataset {
    countries: Vec<CountryRecord>,
    index: HashMap<String, usize>,
    stats: IngestStats,
}

impl Dataset {
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a PercentileRow>,
    {
        let mut builder = DatasetBuilder::new();
        for row in rows {
            builder.ingest(row);
        }
        builder.finish()
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn country(&self, name: &str) -> Option<&CountryRecord> {
        self.index.get(name).map(|&slot| &self.countries[slot])
    }

    pub fn series(&self, name: &str, year: YearKey) -> Option<&[Observation]> {
        self.country(name)?.series.get(&year).map(Vec::as_slice)
    }

    /// Leading observations of one country/year, for spot checks.
    pub fn sample(&self, name: &str, year: YearKey, count: usize) -> Option<&[Observation]> {
        let series = self.series(name, year)?;
        Some(&series[..count.min(series.len())])
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn total_observations(&self) -> usize {
        self.countries
            .iter()
            .map(CountryRecord::observation_count)
            .sum()
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// `{country: {year: [observation, ...]}}`
    pub fn raw_data(&self) -> RawData<'_> {
        RawData(self)
    }

    /// `{country: {region?, incomegroup?}}`
    pub fn countries_info(&self) -> CountriesInfo<'_> {
        CountriesInfo(self)
    }
}

pub struct RawData<'a>(&'a Dataset);

impl Serialize for RawData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.countries.len()))?;
        for record in &self.0.countries {
            map.serialize_entry(&record.name, &record.series)?;
        }
        map.end()
    }
}

pub struct CountriesInfo<'a>(&'a Dataset);

impl Serialize for CountriesInfo<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.countries.len()))?;
        for record in &self.0.countries {
            map.serialize_entry(&record.name, &record.info)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, p_country: &str) -> PercentileRow {
        PercentileRow::new(country)
            .with_meta("South Asia", "Lower middle income")
            .with_percentile(p_country)
    }

    #[test]
    fn contact_label_row_uses_numeric_part() {
        let r = row("India", "Contact 7").with_year(YearKey::Y2019, "30", "", "");
        let ds = Dataset::from_rows([&r]);
        let series = ds.series("India", YearKey::Y2019).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].percentile, 7);
        assert_eq!(series[0].global, Some(30));
    }

    #[test]
    fn single_region_rank_gives_one_observation() {
        let r = row("X", "12").with_year(YearKey::Y2022, "", "40", "");
        let ds = Dataset::from_rows([&r]);
        assert_eq!(
            ds.series("X", YearKey::Y2022).unwrap(),
            &[Observation {
                percentile: 12,
                global: None,
                region: Some(40),
                income: None,
            }]
        );
        for year in [YearKey::Y1990, YearKey::Y2000, YearKey::Y2010, YearKey::Y2019] {
            assert!(ds.series("X", year).is_none());
        }
    }

    #[test]
    fn first_seen_metadata_wins() {
        let first = PercentileRow::new("X")
            .with_meta("Europe & Central Asia", "")
            .with_percentile("1");
        let second = PercentileRow::new("X")
            .with_meta("Latin America & Caribbean", "High income")
            .with_percentile("2");
        let ds = Dataset::from_rows([&first, &second]);
        let info = &ds.country("X").unwrap().info;
        assert_eq!(info.region.as_deref(), Some("Europe & Central Asia"));
        assert_eq!(info.incomegroup, None);
    }

    #[test]
    fn row_without_ranks_still_records_metadata() {
        let r = row("Chad", "50");
        let ds = Dataset::from_rows([&r]);
        let record = ds.country("Chad").unwrap();
        assert!(record.series.is_empty());
        assert_eq!(record.info.region.as_deref(), Some("South Asia"));
        assert_eq!(ds.country_count(), 1);
        assert_eq!(ds.total_observations(), 0);
        assert_eq!(ds.stats().without_observations, 1);
    }

    #[test]
    fn empty_country_contributes_nothing() {
        let r = row("   ", "10").with_year(YearKey::Y1990, "1", "2", "3");
        let mut builder = DatasetBuilder::new();
        assert_eq!(builder.ingest(&r), RowOutcome::EmptyCountry);
        let ds = builder.finish();
        assert_eq!(ds.country_count(), 0);
        assert_eq!(ds.stats().empty_country, 1);
    }

    #[test]
    fn missing_percentile_skips_series_but_keeps_metadata() {
        let r = row("Peru", "Contact ").with_year(YearKey::Y2010, "5", "", "");
        let mut builder = DatasetBuilder::new();
        assert_eq!(builder.ingest(&r), RowOutcome::NoPercentile);
        let ds = builder.finish();
        assert!(ds.country("Peru").unwrap().series.is_empty());
        assert!(ds.country("Peru").unwrap().info.region.is_some());
    }

    #[test]
    fn country_names_are_trimmed() {
        let a = row(" Chile", "1").with_year(YearKey::Y2000, "1", "", "");
        let b = row("Chile ", "2").with_year(YearKey::Y2000, "2", "", "");
        let ds = Dataset::from_rows([&a, &b]);
        assert_eq!(ds.country_count(), 1);
        assert_eq!(ds.series("Chile", YearKey::Y2000).unwrap().len(), 2);
    }

    #[test]
    fn series_sorted_stably_without_dedup() {
        let rows = [
            row("Y", "30").with_year(YearKey::Y2010, "1", "", ""),
            row("Y", "10").with_year(YearKey::Y2010, "2", "", ""),
            row("Y", "30").with_year(YearKey::Y2010, "3", "", ""),
            row("Y", "20").with_year(YearKey::Y2010, "4", "", ""),
        ];
        let ds = Dataset::from_rows(&rows);
        let globals: Vec<_> = ds
            .series("Y", YearKey::Y2010)
            .unwrap()
            .iter()
            .map(|o| (o.percentile, o.global.unwrap()))
            .collect();
        assert_eq!(globals, vec![(10, 2), (20, 4), (30, 1), (30, 3)]);
    }

    #[test]
    fn ingest_reports_observation_count() {
        let r = row("Z", "5")
            .with_year(YearKey::Y1990, "1", "", "")
            .with_year(YearKey::Y2022, "", "", "9");
        let mut builder = DatasetBuilder::new();
        assert_eq!(builder.ingest(&r), RowOutcome::Ingested { observations: 2 });
    }

    #[test]
    fn sample_truncates_to_available() {
        let rows: Vec<_> = (1..=5)
            .map(|p| row("India", &p.to_string()).with_year(YearKey::Y2022, "50", "", ""))
            .collect();
        let ds = Dataset::from_rows(&rows);
        assert_eq!(ds.sample("India", YearKey::Y2022, 3).unwrap().len(), 3);
        assert_eq!(ds.sample("India", YearKey::Y2022, 10).unwrap().len(), 5);
        assert!(ds.sample("India", YearKey::Y1990, 3).is_none());
        assert!(ds.sample("Nowhere", YearKey::Y2022, 3).is_none());
    }

    #[test]
    fn raw_data_encodes_in_first_seen_and_chronological_order() {
        let rows = [
            row("Brazil", "2")
                .with_year(YearKey::Y2022, "7", "", "")
                .with_year(YearKey::Y1990, "", "3", ""),
            row("Angola", "1"),
        ];
        let ds = Dataset::from_rows(&rows);
        assert_eq!(
            serde_json::to_string(&ds.raw_data()).unwrap(),
            r#"{"Brazil":{"1990":[{"percentile":2,"region":3}],"2022":[{"percentile":2,"global":7}]},"Angola":{}}"#
        );
    }

    #[test]
    fn countries_info_omits_absent_fields() {
        let rows = [
            PercentileRow::new("A").with_meta("Sub-Saharan Africa", "Low income"),
            PercentileRow::new("B").with_meta("", "High income"),
            PercentileRow::new("C").with_meta(" ", ""),
        ];
        let ds = Dataset::from_rows(&rows);
        assert!(ds.country("C").unwrap().info.is_empty());
        assert_eq!(
            serde_json::to_string(&ds.countries_info()).unwrap(),
            r#"{"A":{"region":"Sub-Saharan Africa","incomegroup":"Low income"},"B":{"incomegroup":"High income"},"C":{}}"#
        );
    }
}
