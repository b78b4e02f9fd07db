//! CLI definition and pipeline orchestration.

use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvRowSource;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::js_artifact_adapter::JsArtifactWriter;
use crate::domain::dataset::{Dataset, DatasetBuilder};
use crate::domain::error::ExportError;
use crate::domain::settings::{SETTINGS_FILE, SampleSettings, Settings};
use crate::domain::summary::Summary;
use crate::ports::artifact_port::ArtifactSink;
use crate::ports::source_port::RowSource;

const DEFAULT_LOGGING_LEVEL: &str = "warn";

/// Reads `percentiledata.csv` beside the executable and writes
/// `rawdata_extended.js` next to it.
#[derive(Parser, Debug)]
#[command(
    name = "percentile_export",
    version,
    about = "Convert country income percentile CSV into client script constants"
)]
pub struct Cli {
    /// Log debug detail to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(cli: Cli) -> ExitCode {
    init_logging(cli.verbose);
    debug!("args: {cli:?}");

    match run_export() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOGGING_LEVEL.to_string())
    };
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&filter)
        .init();
}

fn run_export() -> Result<(), ExportError> {
    let base_dir = program_dir()?;
    let settings = load_settings(&base_dir)?;
    let source = CsvRowSource::new(settings.input);
    let sink = JsArtifactWriter::new(settings.output);
    debug!("input: {}", source.path().display());
    debug!("output: {}", sink.path().display());

    let (dataset, summary) = export(&source, &sink)?;

    for line in summary_lines(sink.path(), &summary, &dataset, settings.sample.as_ref())? {
        println!("{line}");
    }
    Ok(())
}

/// Directory holding the running executable; default file locations hang off it.
pub fn program_dir() -> Result<PathBuf, ExportError> {
    let exe = std::env::current_exe().map_err(|e| ExportError::Location {
        reason: e.to_string(),
    })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ExportError::Location {
            reason: format!("{} has no parent directory", exe.display()),
        })
}

/// Defaults, overridden by `percentile_export.ini` in `base_dir` when present.
pub fn load_settings(base_dir: &Path) -> Result<Settings, ExportError> {
    let path = base_dir.join(SETTINGS_FILE);
    if !path.is_file() {
        debug!("no {} found, using defaults", path.display());
        return Ok(Settings::defaults(base_dir));
    }

    info!("loading settings from {}", path.display());
    let adapter = FileConfigAdapter::from_file(&path).map_err(|e| ExportError::ConfigParse {
        file: path.display().to_string(),
        reason: e,
    })?;
    Settings::from_config(&adapter, base_dir)
}

/// Reads every row, builds the dataset and writes the artifact.
///
/// The artifact is only created once all rows have been ingested.
pub fn export(
    source: &dyn RowSource,
    sink: &dyn ArtifactSink,
) -> Result<(Dataset, Summary), ExportError> {
    let rows = source.read_rows()?;
    debug!("read {} rows", rows.len());

    let mut builder = DatasetBuilder::new();
    for row in &rows {
        builder.ingest(row);
    }
    let dataset = builder.finish();

    let stats = dataset.stats();
    debug!(
        "rows: {} (empty country: {}, no percentile: {}, no ranks: {})",
        stats.rows, stats.empty_country, stats.no_percentile, stats.without_observations
    );

    let bytes = sink.write(&dataset)?;
    let summary = Summary::compute(&dataset, bytes);
    Ok((dataset, summary))
}

/// Console summary, one entry per line.
pub fn summary_lines(
    output: &Path,
    summary: &Summary,
    dataset: &Dataset,
    sample: Option<&SampleSettings>,
) -> Result<Vec<String>, ExportError> {
    let mut lines = vec![
        format!("Generated {}", output.display()),
        format!("  Countries: {}", summary.countries),
        format!("  Total data points: {}", summary.observations),
        format!("  File size: {} MB", summary.size_display()),
    ];

    let shown = sample.and_then(|s| {
        dataset
            .sample(&s.country, s.year, s.size)
            .map(|observations| (s, observations))
    });
    if let Some((sample, observations)) = shown {
        lines.push(format!(
            "  Sample ({} {} first {}): {}",
            sample.country,
            sample.year,
            sample.size,
            serde_json::to_string(observations)?
        ));
    }
    Ok(lines)
}
