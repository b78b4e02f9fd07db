//! Output artifact port trait.

use crate::domain::dataset::Dataset;
use crate::domain::error::ExportError;

/// Port for persisting a finalized dataset.
pub trait ArtifactSink {
    /// Writes the artifact and returns its size in bytes.
    fn write(&self, dataset: &Dataset) -> Result<u64, ExportError>;
}
