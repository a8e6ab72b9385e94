//! Motor de ExifLens: lee la metadata EXIF de fotos JPEG y la exporta como un
//! JSON por archivo más un resumen CSV de todas las fotos procesadas.
//!
//! ```no_run
//! use exiflens::{DirectorySink, ExifDecoder, ExportOptions, SystemClock};
//! use exiflens::input::collect_input_files;
//! use std::path::PathBuf;
//!
//! let options = ExportOptions::default();
//! let files = collect_input_files(&[PathBuf::from("fotos")], options.recursive);
//! let mut sink = DirectorySink::new(&options.output_dir);
//! let report = exiflens::run(files, &ExifDecoder::new(), &mut sink, &SystemClock, &options);
//! println!("{}", exiflens::render_summary(&report.summaries).unwrap());
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod metadata;
pub mod pipeline;
pub mod sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ExportOptions;
pub use error::ExifLensError;
pub use input::InputFile;
pub use metadata::{ExifDecoder, SummaryRecord, TagDecoder, TagValue, render_summary};
pub use pipeline::{RunReport, run};
pub use sink::{DirectorySink, ExportSink, MemorySink};
