//! Presentación final de los resúmenes procesados.

use super::report::SummaryRecord;
use crate::error::ExifLensError;

pub fn render_summary(records: &[SummaryRecord]) -> Result<String, ExifLensError> {
    Ok(serde_json::to_string_pretty(records)?)
}
