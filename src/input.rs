//! Selección de archivos de entrada y filtro de tipos JPEG.

use crate::error::ExifLensError;
use infer::Infer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Fragmentos que identifican un tipo de contenido JPEG.
const JPEG_MARKERS: [&str; 2] = ["jpeg", "jpg"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputFile {
    pub name: String,
    pub path: PathBuf,
    /// Tipo de contenido declarado; vacío cuando no se pudo detectar.
    pub media_type: String,
}

impl InputFile {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            media_type: media_type.into(),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, path, declared_media_type(path))
    }

    pub fn is_jpeg(&self) -> bool {
        is_jpeg_media_type(&self.media_type)
    }
}

/// Detecta el tipo de contenido a partir de los primeros bytes del archivo.
pub fn declared_media_type(path: &Path) -> String {
    match Infer::new().get_from_path(path) {
        Ok(Some(kind)) => kind.mime_type().to_string(),
        Ok(None) => String::new(),
        Err(error) => {
            debug!("No se pudo inspeccionar `{}`: {error}", path.display());
            String::new()
        }
    }
}

pub fn is_jpeg_media_type(media_type: &str) -> bool {
    JPEG_MARKERS.iter().any(|marker| media_type.contains(marker))
}

/// Separa los archivos JPEG del resto conservando el orden de selección.
pub fn partition_jpeg_files(files: Vec<InputFile>) -> (Vec<InputFile>, Vec<InputFile>) {
    let (accepted, skipped): (Vec<_>, Vec<_>) = files.into_iter().partition(InputFile::is_jpeg);
    for file in &skipped {
        let reason = ExifLensError::UnsupportedFileType {
            name: file.name.clone(),
            media_type: file.media_type.clone(),
        };
        warn!("Omitiendo archivo: {reason}");
    }
    (accepted, skipped)
}

pub fn filter_jpeg_files(files: Vec<InputFile>) -> Vec<InputFile> {
    partition_jpeg_files(files).0
}

/// Expande las rutas indicadas en archivos; los directorios se listan ordenados por nombre.
pub fn collect_input_files(paths: &[PathBuf], recursive: bool) -> Vec<InputFile> {
    let mut files = Vec::new();

    for path in paths {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(error) => {
                warn!("No se pudo acceder a `{}`: {error}", path.display());
                continue;
            }
        };

        if metadata.is_dir() {
            files.extend(list_directory(path, recursive));
        } else {
            files.push(InputFile::from_path(path));
        }
    }

    files
}

fn list_directory(root: &Path, recursive: bool) -> Vec<InputFile> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!("Entrada ilegible en `{}`: {error}", root.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| InputFile::from_path(entry.path()))
        .collect()
}
