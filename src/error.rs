//! Errores del motor de ExifLens.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExifLensError {
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("No se pudo acceder a `{path}`: {source}")]
    Path {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No se pudo serializar JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No se pudo generar el CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("No se pudo leer la metadata EXIF: {0}")]
    Exif(#[from] exif::Error),

    #[error("`{name}` no es un JPEG (tipo declarado: `{media_type}`)")]
    UnsupportedFileType { name: String, media_type: String },
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for ExifLensError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        ExifLensError::Io(err.into_error())
    }
}
