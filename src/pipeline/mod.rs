//! Ejecución completa: filtro, decodificación, saneamiento, resumen y exportación.
//!
//! Los archivos se procesan uno a uno en el orden de selección. Ningún error
//! individual detiene la ejecución: los fallos quedan en [`RunReport::errors`].

use crate::clock::Clock;
use crate::config::ExportOptions;
use crate::error::ExifLensError;
use crate::input::{InputFile, partition_jpeg_files};
use crate::metadata::{
    ExportFormat, RawTagMap, SummaryRecord, TagDecoder, build_csv_summary, build_json_document,
    csv_file_name, json_file_name, sanitize,
};
use crate::sink::ExportSink;
use tracing::{error, info, warn};

#[derive(Clone, Debug, Default)]
pub struct RunReport {
    /// Un resumen por archivo JPEG procesado, en orden de procesamiento.
    pub summaries: Vec<SummaryRecord>,
    pub skipped: Vec<String>,
    /// Nombres con los que el destino guardó cada documento.
    pub exported: Vec<String>,
    pub errors: Vec<String>,
}

impl RunReport {
    pub fn processed(&self) -> usize {
        self.summaries.len()
    }
}

pub fn run(
    files: Vec<InputFile>,
    decoder: &dyn TagDecoder,
    sink: &mut dyn ExportSink,
    clock: &dyn Clock,
    options: &ExportOptions,
) -> RunReport {
    let (accepted, skipped) = partition_jpeg_files(files);
    let mut report = RunReport {
        skipped: skipped.into_iter().map(|file| file.name).collect(),
        ..RunReport::default()
    };
    let date = clock.today();

    for file in &accepted {
        let raw = decode_or_empty(decoder, file);
        let tags = sanitize(&raw);

        if options.write_json {
            let document = build_json_document(&file.name, &tags);
            emit(
                sink,
                &mut report,
                json_file_name(&file.name, date),
                document,
                ExportFormat::Json,
            );
        }

        report.summaries.push(SummaryRecord::project(&file.name, &tags));
        info!("Procesado {} ({} etiquetas)", file.name, tags.len());
    }

    if options.write_csv && !report.summaries.is_empty() {
        let document = build_csv_summary(&report.summaries);
        emit(
            sink,
            &mut report,
            csv_file_name(date),
            document,
            ExportFormat::Csv,
        );
    }

    report
}

/// Un archivo ilegible se trata como si no tuviera etiquetas.
fn decode_or_empty(decoder: &dyn TagDecoder, file: &InputFile) -> RawTagMap {
    match decoder.decode(file) {
        Ok(tags) => tags,
        Err(error) => {
            warn!("Sin metadata EXIF para {}: {error}", file.name);
            RawTagMap::new()
        }
    }
}

fn emit(
    sink: &mut dyn ExportSink,
    report: &mut RunReport,
    file_name: String,
    document: Result<String, ExifLensError>,
    format: ExportFormat,
) {
    let outcome =
        document.and_then(|content| sink.emit(&file_name, &content, format.mime_type()));

    match outcome {
        Ok(saved_as) => report.exported.push(saved_as),
        Err(err) => {
            error!("No se pudo exportar {} {file_name}: {err}", format.label());
            report.errors.push(format!("{file_name}: {err}"));
        }
    }
}

#[cfg(test)]
mod tests;
