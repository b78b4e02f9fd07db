//! Run settings: file locations and the optional console sample.
//!
//! Everything has a default; an INI file beside the executable may override
//! individual keys.

use crate::domain::error::ExportError;
use crate::domain::year::YearKey;
use crate::ports::config_port::ConfigPort;
use std::path::{Path, PathBuf};

pub const INPUT_FILE: &str = "percentiledata.csv";
pub const OUTPUT_FILE: &str = "rawdata_extended.js";
pub const SETTINGS_FILE: &str = "percentile_export.ini";

pub const DEFAULT_SAMPLE_COUNTRY: &str = "India";
pub const DEFAULT_SAMPLE_YEAR: YearKey = YearKey::Y2022;
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSettings {
    pub country: String,
    pub year: YearKey,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// `None` disables the sample line.
    pub sample: Option<SampleSettings>,
}

impl Settings {
    pub fn defaults(base_dir: &Path) -> Self {
        Self {
            input: base_dir.join(INPUT_FILE),
            output: base_dir.join(OUTPUT_FILE),
            sample: Some(SampleSettings {
                country: DEFAULT_SAMPLE_COUNTRY.to_string(),
                year: DEFAULT_SAMPLE_YEAR,
                size: DEFAULT_SAMPLE_SIZE,
            }),
        }
    }

    /// Applies overrides from `config`. Relative paths resolve against `base_dir`.
    ///
    /// A key that is present but unreadable is an error, never a silent default.
    pub fn from_config(config: &dyn ConfigPort, base_dir: &Path) -> Result<Self, ExportError> {
        let mut settings = Self::defaults(base_dir);

        if let Some(input) = config
            .get_path("paths", "input")
            .map_err(invalid("paths", "input"))?
        {
            settings.input = base_dir.join(input);
        }
        if let Some(output) = config
            .get_path("paths", "output")
            .map_err(invalid("paths", "output"))?
        {
            settings.output = base_dir.join(output);
        }

        let show_sample = config
            .get_bool("report", "show_sample")
            .map_err(invalid("report", "show_sample"))?
            .unwrap_or(true);
        settings.sample = if show_sample {
            Some(sample_settings(config)?)
        } else {
            None
        };
        Ok(settings)
    }
}

fn invalid(section: &'static str, key: &'static str) -> impl Fn(String) -> ExportError {
    move |reason| ExportError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason,
    }
}

fn sample_settings(config: &dyn ConfigPort) -> Result<SampleSettings, ExportError> {
    let country = config
        .get_string("report", "sample_country")
        .unwrap_or_else(|| DEFAULT_SAMPLE_COUNTRY.to_string());

    let year = match config.get_string("report", "sample_year") {
        None => DEFAULT_SAMPLE_YEAR,
        Some(label) => YearKey::from_label(&label).ok_or_else(|| {
            invalid("report", "sample_year")(format!(
                "must be one of 1990, 2000, 2010, 2019, 2022 (got {label})"
            ))
        })?,
    };

    let size = config
        .get_int("report", "sample_size")
        .map_err(invalid("report", "sample_size"))?
        .unwrap_or(DEFAULT_SAMPLE_SIZE as i64);
    if size <= 0 {
        return Err(invalid("report", "sample_size")(
            "must be positive".to_string(),
        ));
    }

    Ok(SampleSettings {
        country,
        year,
        size: size as usize,
    })
}
