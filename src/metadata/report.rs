//! Modelos compartidos para resumir la metadata de cada foto.

use super::sanitize::SanitizedTagMap;
use super::tags::TagValue;
use serde::Serialize;

/// Valor centinela para campos ausentes.
pub const NO_DATA: &str = "No data";

/// Resumen de forma fija por archivo. El orden de los campos coincide con las columnas del CSV.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub file_name: String,
    pub iso: TagValue,
    pub gps_longitude: TagValue,
    pub gps_latitude: TagValue,
    pub camera_make: TagValue,
    pub camera_model: TagValue,
    pub aperture_value: TagValue,
    pub aperture_max_value: TagValue,
    pub exposure_time: TagValue,
    pub exposure_program: TagValue,
    pub exposure_bias: TagValue,
    pub exposure_mode: TagValue,
}

impl SummaryRecord {
    /// Proyecta el subconjunto de etiquetas del resumen sin convertir unidades.
    pub fn project(file_name: impl Into<String>, tags: &SanitizedTagMap) -> Self {
        let pick = |tag: &str| -> TagValue {
            match tags.get(tag) {
                Some(value) if !value.is_null() => value.clone(),
                _ => TagValue::Text(NO_DATA.to_string()),
            }
        };

        Self {
            file_name: file_name.into(),
            iso: pick("ISOSpeedRatings"),
            gps_longitude: pick("GPSLongitude"),
            gps_latitude: pick("GPSLatitude"),
            camera_make: pick("Make"),
            camera_model: pick("Model"),
            aperture_value: pick("ApertureValue"),
            aperture_max_value: pick("MaxApertureValue"),
            exposure_time: pick("ExposureTime"),
            exposure_program: pick("ExposureProgram"),
            exposure_bias: pick("ExposureBias"),
            exposure_mode: pick("ExposureMode"),
        }
    }

    /// Celdas en el orden de las columnas del CSV.
    pub fn cells(&self) -> [String; 12] {
        [
            self.file_name.clone(),
            self.iso.to_string(),
            self.gps_longitude.to_string(),
            self.gps_latitude.to_string(),
            self.camera_make.to_string(),
            self.camera_model.to_string(),
            self.aperture_value.to_string(),
            self.aperture_max_value.to_string(),
            self.exposure_time.to_string(),
            self.exposure_program.to_string(),
            self.exposure_bias.to_string(),
            self.exposure_mode.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::sanitize::sanitize;
    use crate::metadata::tags::RawTagMap;

    fn no_data() -> TagValue {
        TagValue::Text(NO_DATA.to_string())
    }

    #[test]
    fn projects_present_tags_and_fills_missing_ones() {
        let mut raw = RawTagMap::new();
        raw.insert("ISOSpeedRatings".into(), 200.into());
        raw.insert("Make".into(), "Canon".into());
        raw.insert(
            "GPSLongitude".into(),
            TagValue::List(vec![10.into(), 30.into(), 0.into()]),
        );

        let record = SummaryRecord::project("foto.jpg", &sanitize(&raw));

        assert_eq!(record.file_name, "foto.jpg");
        assert_eq!(record.iso, TagValue::Integer(200));
        assert_eq!(record.camera_make, TagValue::Text("Canon".into()));
        assert_eq!(
            record.gps_longitude,
            TagValue::List(vec![10.into(), 30.into(), 0.into()])
        );
        assert_eq!(record.gps_latitude, no_data());
        assert_eq!(record.exposure_mode, no_data());
    }

    #[test]
    fn null_values_become_sentinel() {
        let mut raw = RawTagMap::new();
        raw.insert("Model".into(), TagValue::Null);

        let record = SummaryRecord::project("x.jpg", &sanitize(&raw));
        assert_eq!(record.camera_model, no_data());
    }

    #[test]
    fn empty_map_yields_all_sentinels() {
        let record = SummaryRecord::project("vacio.jpg", &SanitizedTagMap::default());
        let cells = record.cells();
        assert_eq!(cells[0], "vacio.jpg");
        assert!(cells[1..].iter().all(|cell| cell == NO_DATA));
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let record = SummaryRecord::project("a.jpg", &SanitizedTagMap::default());
        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert!(keys.contains(&"fileName".to_string()));
        assert!(keys.contains(&"gpsLongitude".to_string()));
        assert!(keys.contains(&"apertureMaxValue".to_string()));
        assert_eq!(keys.len(), 12);
    }
}
