//! Lectura de etiquetas EXIF mediante `kamadak-exif`.

use super::tags::{RawTagMap, TagValue};
use crate::error::ExifLensError;
use crate::input::InputFile;
use exif::{Field, In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use tracing::debug;

/// Capacidad de obtener el mapa crudo de etiquetas de un archivo.
pub trait TagDecoder {
    fn decode(&self, file: &InputFile) -> Result<RawTagMap, ExifLensError>;
}

/// Nombres con los que se publican ciertas etiquetas que EXIF 2.3 renombró.
const TAG_ALIASES: [(Tag, &str); 2] = [
    (Tag::PhotographicSensitivity, "ISOSpeedRatings"),
    (Tag::ExposureBiasValue, "ExposureBias"),
];

/// Etiquetas enumeradas que se exportan con su descripción legible.
const DESCRIBED_TAGS: [Tag; 15] = [
    Tag::ExposureProgram,
    Tag::MeteringMode,
    Tag::LightSource,
    Tag::Flash,
    Tag::SensingMethod,
    Tag::SceneCaptureType,
    Tag::SceneType,
    Tag::CustomRendered,
    Tag::WhiteBalance,
    Tag::GainControl,
    Tag::Contrast,
    Tag::Saturation,
    Tag::Sharpness,
    Tag::SubjectDistanceRange,
    Tag::FileSource,
];

/// Versiones guardadas como cuatro caracteres ASCII en un campo UNDEFINED.
const VERSION_TAGS: [Tag; 2] = [Tag::ExifVersion, Tag::FlashpixVersion];

#[derive(Clone, Copy, Debug, Default)]
pub struct ExifDecoder;

impl ExifDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl TagDecoder for ExifDecoder {
    fn decode(&self, file: &InputFile) -> Result<RawTagMap, ExifLensError> {
        let handle = File::open(&file.path).map_err(|source| ExifLensError::Path {
            path: file.path.clone(),
            source,
        })?;
        let mut reader = BufReader::new(handle);
        let exif = exif::Reader::new().read_from_container(&mut reader)?;

        let tags: RawTagMap = exif
            .fields()
            .filter(|field| field.ifd_num == In::PRIMARY)
            .filter_map(|field| Some((tag_name(field.tag), field_value(field)?)))
            .collect();

        debug!("==> {}: {} etiquetas EXIF", file.name, tags.len());
        Ok(tags)
    }
}

pub fn tag_name(tag: Tag) -> String {
    TAG_ALIASES
        .iter()
        .find(|(aliased, _)| *aliased == tag)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| tag.to_string())
}

fn field_value(field: &Field) -> Option<TagValue> {
    if DESCRIBED_TAGS.contains(&field.tag) {
        return Some(TagValue::Text(field.display_value().to_string()));
    }
    if VERSION_TAGS.contains(&field.tag) {
        if let Value::Undefined(bytes, _) = &field.value {
            return Some(TagValue::Text(String::from_utf8_lossy(bytes).into_owned()));
        }
    }
    convert_value(&field.value)
}

/// Traduce un valor EXIF; los tipos desconocidos se descartan.
pub fn convert_value(value: &Value) -> Option<TagValue> {
    let converted = match value {
        Value::Byte(bytes) => TagValue::Binary(bytes.clone()),
        Value::SByte(bytes) => TagValue::Binary(bytes.iter().map(|b| *b as u8).collect()),
        Value::Undefined(bytes, _) => TagValue::Binary(bytes.clone()),
        Value::Ascii(strings) => TagValue::Text(
            strings
                .iter()
                .map(|s| String::from_utf8_lossy(s).trim_end().to_string())
                .collect::<Vec<_>>()
                .join(" "),
        ),
        Value::Short(values) => collapse(values.iter().map(|v| TagValue::Integer(i64::from(*v)))),
        Value::Long(values) => collapse(values.iter().map(|v| TagValue::Integer(i64::from(*v)))),
        Value::SShort(values) => collapse(values.iter().map(|v| TagValue::Integer(i64::from(*v)))),
        Value::SLong(values) => collapse(values.iter().map(|v| TagValue::Integer(i64::from(*v)))),
        Value::Rational(values) => collapse(
            values
                .iter()
                .map(|r| TagValue::rational(i64::from(r.num), i64::from(r.denom))),
        ),
        Value::SRational(values) => collapse(
            values
                .iter()
                .map(|r| TagValue::rational(i64::from(r.num), i64::from(r.denom))),
        ),
        Value::Float(values) => collapse(values.iter().map(|v| TagValue::Float(f64::from(*v)))),
        Value::Double(values) => collapse(values.iter().map(|v| TagValue::Float(*v))),
        Value::Unknown(..) => return None,
    };
    Some(converted)
}

/// Un solo componente se publica como escalar; varios como lista.
fn collapse(values: impl Iterator<Item = TagValue>) -> TagValue {
    let mut items: Vec<TagValue> = values.collect();
    match items.len() {
        0 => TagValue::Null,
        1 => items.remove(0),
        _ => TagValue::List(items),
    }
}
