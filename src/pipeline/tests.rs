use super::run;
use crate::clock::FixedClock;
use crate::config::ExportOptions;
use crate::error::ExifLensError;
use crate::input::InputFile;
use crate::metadata::{NO_DATA, RawTagMap, TagDecoder, TagValue};
use crate::sink::{ExportSink, MemorySink};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Decodificador de prueba con mapas fijos por nombre de archivo.
#[derive(Default)]
struct FakeDecoder {
    tags: HashMap<String, RawTagMap>,
}

impl FakeDecoder {
    fn with(mut self, name: &str, entries: &[(&str, TagValue)]) -> Self {
        let map = entries
            .iter()
            .map(|(tag, value)| (tag.to_string(), value.clone()))
            .collect();
        self.tags.insert(name.to_string(), map);
        self
    }
}

impl TagDecoder for FakeDecoder {
    fn decode(&self, file: &InputFile) -> Result<RawTagMap, ExifLensError> {
        self.tags.get(&file.name).cloned().ok_or_else(|| {
            ExifLensError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "archivo corrupto",
            ))
        })
    }
}

/// Destino que rechaza los documentos cuyo nombre contiene un fragmento.
struct RejectingSink {
    inner: MemorySink,
    reject: &'static str,
}

impl ExportSink for RejectingSink {
    fn emit(
        &mut self,
        file_name: &str,
        content: &str,
        mime_type: &str,
    ) -> Result<String, ExifLensError> {
        if file_name.contains(self.reject) {
            return Err(ExifLensError::Io(std::io::Error::other("disco lleno")));
        }
        self.inner.emit(file_name, content, mime_type)
    }
}

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
}

fn jpeg(name: &str) -> InputFile {
    InputFile::new(name, name, "image/jpeg")
}

fn no_data() -> TagValue {
    TagValue::Text(NO_DATA.to_string())
}

#[test]
fn single_jpeg_produces_summary_json_and_csv() {
    let decoder = FakeDecoder::default().with(
        "foto.jpg",
        &[
            ("ISOSpeedRatings", 200.into()),
            ("Make", "Canon".into()),
            (
                "GPSLongitude",
                TagValue::List(vec![10.into(), 30.into(), 0.into()]),
            ),
            ("MakerNote", TagValue::Binary(vec![0; 64])),
        ],
    );
    let mut sink = MemorySink::new();

    let report = run(
        vec![jpeg("foto.jpg")],
        &decoder,
        &mut sink,
        &clock(),
        &ExportOptions::default(),
    );

    assert_eq!(report.processed(), 1);
    let summary = &report.summaries[0];
    assert_eq!(summary.iso, TagValue::Integer(200));
    assert_eq!(summary.camera_make, TagValue::Text("Canon".into()));
    assert_eq!(
        summary.gps_longitude,
        TagValue::List(vec![10.into(), 30.into(), 0.into()])
    );
    assert_eq!(summary.gps_latitude, no_data());

    assert_eq!(
        sink.file_names(),
        ["foto.jpg_2025-01-31.json", "exif_data_summary_2025-01-31.csv"]
    );
    assert_eq!(sink.documents[0].mime_type, "application/json");
    assert!(!sink.documents[0].content.contains("MakerNote"));
    assert_eq!(sink.documents[1].mime_type, "text/csv;charset=utf-8;");
    assert_eq!(report.exported, sink.file_names());
    assert!(report.errors.is_empty());
}

#[test]
fn non_jpeg_files_produce_nothing() {
    let decoder = FakeDecoder::default();
    let mut sink = MemorySink::new();

    let report = run(
        vec![InputFile::new("captura.png", "captura.png", "image/png")],
        &decoder,
        &mut sink,
        &clock(),
        &ExportOptions::default(),
    );

    assert!(report.summaries.is_empty());
    assert_eq!(report.skipped, ["captura.png"]);
    assert!(sink.documents.is_empty());
}

#[test]
fn empty_selection_skips_csv() {
    let mut sink = MemorySink::new();
    let report = run(
        Vec::new(),
        &FakeDecoder::default(),
        &mut sink,
        &clock(),
        &ExportOptions::default(),
    );

    assert!(report.summaries.is_empty());
    assert!(sink.documents.is_empty());
}

#[test]
fn summary_count_matches_jpeg_count() {
    let decoder = FakeDecoder::default()
        .with("a.jpg", &[("Model", "A".into())])
        .with("c.jpg", &[("Model", "C".into())]);
    let files = vec![
        jpeg("a.jpg"),
        InputFile::new("b.gif", "b.gif", "image/gif"),
        jpeg("c.jpg"),
        InputFile::new("d", "d", ""),
    ];
    let mut sink = MemorySink::new();

    let report = run(files, &decoder, &mut sink, &clock(), &ExportOptions::default());

    let names: Vec<_> = report.summaries.iter().map(|s| s.file_name.as_str()).collect();
    assert_eq!(names, ["a.jpg", "c.jpg"]);
    assert_eq!(report.skipped, ["b.gif", "d"]);
    assert_eq!(sink.documents.len(), 3);

    let csv = &sink.documents[2].content;
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn undecodable_file_yields_sentinel_record_and_run_continues() {
    let decoder = FakeDecoder::default().with("bien.jpg", &[("Make", "Sony".into())]);
    let mut sink = MemorySink::new();

    let report = run(
        vec![jpeg("roto.jpg"), jpeg("bien.jpg")],
        &decoder,
        &mut sink,
        &clock(),
        &ExportOptions::default(),
    );

    assert_eq!(report.processed(), 2);
    let broken = &report.summaries[0];
    assert_eq!(broken.file_name, "roto.jpg");
    assert_eq!(broken.camera_make, no_data());
    assert_eq!(report.summaries[1].camera_make, TagValue::Text("Sony".into()));

    let broken_json = &sink.documents[0];
    assert_eq!(broken_json.file_name, "roto.jpg_2025-01-31.json");
    assert!(broken_json.content.contains("\"metadata\": {}"));
}

#[test]
fn failed_emit_is_recorded_without_stopping() {
    let decoder = FakeDecoder::default()
        .with("uno.jpg", &[])
        .with("dos.jpg", &[]);
    let mut sink = RejectingSink {
        inner: MemorySink::new(),
        reject: "uno.jpg",
    };

    let report = run(
        vec![jpeg("uno.jpg"), jpeg("dos.jpg")],
        &decoder,
        &mut sink,
        &clock(),
        &ExportOptions::default(),
    );

    assert_eq!(report.processed(), 2);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("uno.jpg_2025-01-31.json"));
    assert_eq!(
        sink.inner.file_names(),
        ["dos.jpg_2025-01-31.json", "exif_data_summary_2025-01-31.csv"]
    );
}

#[test]
fn options_can_disable_each_export() {
    let decoder = FakeDecoder::default().with("a.jpg", &[]);

    let mut sink = MemorySink::new();
    let options = ExportOptions {
        write_json: false,
        ..ExportOptions::default()
    };
    run(vec![jpeg("a.jpg")], &decoder, &mut sink, &clock(), &options);
    assert_eq!(sink.file_names(), ["exif_data_summary_2025-01-31.csv"]);

    let mut sink = MemorySink::new();
    let options = ExportOptions {
        write_csv: false,
        ..ExportOptions::default()
    };
    let report = run(vec![jpeg("a.jpg")], &decoder, &mut sink, &clock(), &options);
    assert_eq!(sink.file_names(), ["a.jpg_2025-01-31.json"]);
    assert_eq!(report.processed(), 1);
}
