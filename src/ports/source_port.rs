//! Row source port trait.

use crate::domain::error::ExportError;
use crate::domain::row::PercentileRow;

pub trait RowSource {
    /// All rows in file order.
    fn read_rows(&self) -> Result<Vec<PercentileRow>, ExportError>;
}
