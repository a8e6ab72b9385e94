//! Valores de etiquetas EXIF tal como los entrega el decodificador.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Mapa crudo `etiqueta -> valor` producido una vez por archivo.
pub type RawTagMap = BTreeMap<String, TagValue>;

/// Mayor entero representable sin pérdida en un `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Clone, Debug, PartialEq)]
pub enum TagValue {
    /// Etiqueta presente pero sin valor utilizable.
    Null,
    Integer(i64),
    Float(f64),
    Rational { numerator: i64, denominator: i64 },
    Text(String),
    List(Vec<TagValue>),
    /// Bloques binarios (miniaturas, tablas de bytes, campos UNDEFINED).
    Binary(Vec<u8>),
}

impl TagValue {
    pub fn rational(numerator: i64, denominator: i64) -> Self {
        TagValue::Rational {
            numerator,
            denominator,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TagValue::Null)
    }

    /// Cociente de un racional; `None` si el denominador es cero.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagValue::Integer(value) => Some(*value as f64),
            TagValue::Float(value) => Some(*value),
            TagValue::Rational {
                numerator,
                denominator,
            } => (*denominator != 0).then(|| *numerator as f64 / *denominator as f64),
            _ => None,
        }
    }

    /// Texto del marcador que sustituye a los bloques binarios.
    pub fn binary_placeholder(len: usize) -> String {
        format!("Binary Data ({len} bytes)")
    }
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER
}

fn serialize_number<S: Serializer>(value: Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(number) if is_integral(number) => serializer.serialize_i64(number as i64),
        Some(number) if number.is_finite() => serializer.serialize_f64(number),
        _ => serializer.serialize_unit(),
    }
}

/// Los cocientes no finitos se escriben como `null`, igual que en el JSON.
fn write_number(f: &mut fmt::Formatter<'_>, value: Option<f64>) -> fmt::Result {
    match value {
        Some(number) if is_integral(number) => write!(f, "{}", number as i64),
        Some(number) if number.is_finite() => write!(f, "{number}"),
        _ => f.write_str("null"),
    }
}

impl Serialize for TagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TagValue::Null => serializer.serialize_unit(),
            TagValue::Integer(value) => serializer.serialize_i64(*value),
            TagValue::Float(_) | TagValue::Rational { .. } => {
                serialize_number(self.as_f64(), serializer)
            }
            TagValue::Text(text) => serializer.serialize_str(text),
            TagValue::List(items) => serializer.collect_seq(items),
            TagValue::Binary(bytes) => {
                serializer.serialize_str(&TagValue::binary_placeholder(bytes.len()))
            }
        }
    }
}

/// Forma de texto usada en las celdas del CSV: las listas se escriben como JSON.
impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Null => Ok(()),
            TagValue::Integer(value) => write!(f, "{value}"),
            TagValue::Float(_) | TagValue::Rational { .. } => write_number(f, self.as_f64()),
            TagValue::Text(text) => f.write_str(text),
            TagValue::List(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
            TagValue::Binary(bytes) => f.write_str(&TagValue::binary_placeholder(bytes.len())),
        }
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        TagValue::Integer(value)
    }
}

impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        TagValue::Integer(i64::from(value))
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        TagValue::Float(value)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

impl From<Vec<TagValue>> for TagValue {
    fn from(items: Vec<TagValue>) -> Self {
        TagValue::List(items)
    }
}
