//! Script-constant artifact writer.
//!
//! The artifact holds exactly two lines, each assigning compact JSON to a
//! constant so the client page can paste it in as-is:
//!
//! ```text
//!     const rawData = {...};
//!     const countriesInfo = {...};
//! ```

use crate::domain::dataset::Dataset;
use crate::domain::error::ExportError;
use crate::ports::artifact_port::ArtifactSink;
use std::fs;
use std::path::PathBuf;

const INDENT: &str = "    ";

pub struct JsArtifactWriter {
    path: PathBuf,
}

impl JsArtifactWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

/// Renders both declarations. Nothing touches the filesystem here, so an
/// encoding failure leaves no partial artifact.
pub fn render(dataset: &Dataset) -> Result<String, ExportError> {
    let raw = serde_json::to_string(&dataset.raw_data())?;
    let info = serde_json::to_string(&dataset.countries_info())?;
    Ok(format!(
        "{INDENT}const rawData = {raw};\n{INDENT}const countriesInfo = {info};\n"
    ))
}

impl ArtifactSink for JsArtifactWriter {
    fn write(&self, dataset: &Dataset) -> Result<u64, ExportError> {
        let content = render(dataset)?;
        fs::write(&self.path, &content)?;
        Ok(fs::metadata(&self.path)?.len())
    }
}
