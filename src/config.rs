//! Opciones de una ejecución de exportación.

use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Directorio donde se escriben los JSON y el CSV.
    pub output_dir: PathBuf,
    pub write_json: bool,
    pub write_csv: bool,
    /// Recorre subdirectorios al expandir directorios de entrada.
    pub recursive: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            write_json: true,
            write_csv: true,
            recursive: false,
        }
    }
}
