//! Decodificación, saneamiento, resumen y exportación de metadata EXIF.

pub mod decoder;
pub mod export;
pub mod renderer;
pub mod report;
pub mod sanitize;
pub mod tags;

pub use decoder::{ExifDecoder, TagDecoder};
pub use export::{ExportFormat, build_csv_summary, build_json_document, csv_file_name, json_file_name};
pub use renderer::render_summary;
pub use report::{NO_DATA, SummaryRecord};
pub use sanitize::{EXCLUDED_TAGS, SanitizedTagMap, sanitize};
pub use tags::{RawTagMap, TagValue};
