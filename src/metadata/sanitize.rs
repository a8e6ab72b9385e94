//! Descarta etiquetas voluminosas u opacas antes de exportar.

use super::tags::{RawTagMap, TagValue};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Etiquetas de fabricante y comentarios de usuario: suelen ser blobs propietarios.
pub const EXCLUDED_TAGS: [&str; 2] = ["MakerNote", "UserComment"];

/// Mapa de etiquetas sin las entradas de [`EXCLUDED_TAGS`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SanitizedTagMap(BTreeMap<String, TagValue>);

impl SanitizedTagMap {
    pub fn get(&self, tag: &str) -> Option<&TagValue> {
        self.0.get(tag)
    }

    pub fn contains_key(&self, tag: &str) -> bool {
        self.0.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TagValue)> {
        self.0.iter()
    }
}

/// Las entradas `Null` se omiten, igual que un valor indefinido en JSON.
impl Serialize for SanitizedTagMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present: Vec<_> = self.0.iter().filter(|(_, value)| !value.is_null()).collect();
        let mut map = serializer.serialize_map(Some(present.len()))?;
        for (tag, value) in present {
            map.serialize_entry(tag, value)?;
        }
        map.end()
    }
}

pub fn sanitize(raw: &RawTagMap) -> SanitizedTagMap {
    SanitizedTagMap(
        raw.iter()
            .filter(|(tag, _)| !EXCLUDED_TAGS.contains(&tag.as_str()))
            .map(|(tag, value)| (tag.clone(), value.clone()))
            .collect(),
    )
}
