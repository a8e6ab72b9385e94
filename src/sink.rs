//! Destinos de los documentos exportados.

use crate::error::ExifLensError;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Recibe cada documento generado junto con su nombre y tipo de contenido.
pub trait ExportSink {
    /// Devuelve el nombre con el que quedó guardado el documento.
    fn emit(
        &mut self,
        file_name: &str,
        content: &str,
        mime_type: &str,
    ) -> Result<String, ExifLensError>;
}

/// Límite de sufijos ` (n)` probados antes de rendirse.
const MAX_NAME_ATTEMPTS: usize = 10_000;

/// Escribe los documentos como archivos dentro de un directorio.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    output_dir: PathBuf,
}

impl DirectorySink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// `foto.jpg_2024-01-01.json` -> `foto.jpg_2024-01-01 (n).json`
fn numbered_name(file_name: &str, index: usize) -> String {
    if index == 0 {
        return file_name.to_string();
    }
    match file_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => format!("{stem} ({index}).{extension}"),
        _ => format!("{file_name} ({index})"),
    }
}

impl ExportSink for DirectorySink {
    /// Nunca sobrescribe: si el nombre ya existe se agrega un sufijo ` (n)`.
    fn emit(
        &mut self,
        file_name: &str,
        content: &str,
        mime_type: &str,
    ) -> Result<String, ExifLensError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExifLensError::Path {
            path: self.output_dir.clone(),
            source,
        })?;

        for index in 0..MAX_NAME_ATTEMPTS {
            let name = numbered_name(file_name, index);
            let destination = self.output_dir.join(&name);
            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&destination)
            {
                Ok(file) => file,
                Err(source) if source.kind() == ErrorKind::AlreadyExists => continue,
                Err(source) => {
                    return Err(ExifLensError::Path {
                        path: destination,
                        source,
                    });
                }
            };

            file.write_all(content.as_bytes())
                .map_err(|source| ExifLensError::Path {
                    path: destination.clone(),
                    source,
                })?;

            if index > 0 {
                warn!("`{file_name}` ya existía; guardado como `{name}`");
            }
            info!("Guardado {} ({mime_type})", destination.display());
            return Ok(name);
        }

        Err(ExifLensError::Path {
            path: self.output_dir.join(file_name),
            source: std::io::Error::new(
                ErrorKind::AlreadyExists,
                "no quedan nombres libres para el documento",
            ),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedDocument {
    pub file_name: String,
    pub content: String,
    pub mime_type: String,
}

/// Conserva en memoria todo lo emitido.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub documents: Vec<EmittedDocument>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.documents
            .iter()
            .map(|document| document.file_name.as_str())
            .collect()
    }
}

impl ExportSink for MemorySink {
    fn emit(
        &mut self,
        file_name: &str,
        content: &str,
        mime_type: &str,
    ) -> Result<String, ExifLensError> {
        self.documents.push(EmittedDocument {
            file_name: file_name.to_string(),
            content: content.to_string(),
            mime_type: mime_type.to_string(),
        });
        Ok(file_name.to_string())
    }
}
