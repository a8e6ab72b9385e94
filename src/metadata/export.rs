//! Exportacion de la metadata en JSON por archivo y resumen CSV.

use super::report::SummaryRecord;
use super::sanitize::SanitizedTagMap;
use crate::error::ExifLensError;
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;

pub const CSV_HEADERS: [&str; 12] = [
    "File Name",
    "ISO",
    "GPS Longitude",
    "GPS Latitude",
    "Camera Make",
    "Camera Model",
    "Aperture Value",
    "Max Aperture Value",
    "Exposure Time",
    "Exposure Program",
    "Exposure Bias",
    "Exposure Mode",
];

const SUMMARY_FILE_PREFIX: &str = "exif_data_summary";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv;charset=utf-8;",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }
}

/// `<archivo>_<AAAA-MM-DD>.json`
pub fn json_file_name(file_name: &str, date: NaiveDate) -> String {
    format!(
        "{file_name}_{}.{}",
        date.format("%Y-%m-%d"),
        ExportFormat::Json.extension()
    )
}

/// `exif_data_summary_<AAAA-MM-DD>.csv`
pub fn csv_file_name(date: NaiveDate) -> String {
    format!(
        "{SUMMARY_FILE_PREFIX}_{}.{}",
        date.format("%Y-%m-%d"),
        ExportFormat::Csv.extension()
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    file_name: &'a str,
    metadata: &'a SanitizedTagMap,
}

/// Documento `{ fileName, metadata }` con sangría de dos espacios.
pub fn build_json_document(file_name: &str, tags: &SanitizedTagMap) -> Result<String, ExifLensError> {
    let document = JsonDocument {
        file_name,
        metadata: tags,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Una fila de encabezado y una fila por resumen; las celdas con comas, comillas o saltos de línea van entre comillas.
pub fn build_csv_summary(records: &[SummaryRecord]) -> Result<String, ExifLensError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record(record.cells())?;
    }

    let bytes = writer.into_inner()?;
    let mut csv = String::from_utf8(bytes).map_err(|err| {
        ExifLensError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })?;
    // Las filas se separan con `\n`; la última no lleva terminador.
    if csv.ends_with('\n') {
        csv.pop();
    }
    Ok(csv)
}
