use std::{
    collections::BTreeMap,
    fs::File,
    io::BufReader,
    path::Path,
};

use crate::{
    document::store::{AttributeStore, DocumentCodec, HAS_SETTINGS},
    foundation::{
        curve::{CurveChannel, ToneCurve},
        error::{DuskrError, DuskrResult},
        value::AttributeValue,
    },
};

/// JSON develop-settings document.
///
/// ```json
/// {
///   "attributes": { "HasSettings": "True", "Exposure2012": "+0.35" },
///   "tone_curves": { "composite": [[0, 0], [128, 140], [255, 255]] }
/// }
/// ```
///
/// Settings are kept as text, the way the source documents store them, and coerced on access.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DevelopSettings {
    #[serde(default)]
    attributes: BTreeMap<String, String>,
    #[serde(default)]
    tone_curves: BTreeMap<CurveChannel, ToneCurve>,
}

impl DevelopSettings {
    /// Empty (blank) document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`AttributeStore::set_attribute`].
    pub fn with_attribute(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.set_attribute(name, value.into());
        self
    }

    /// Builder-style [`AttributeStore::set_curve`].
    pub fn with_curve(mut self, channel: CurveChannel, curve: ToneCurve) -> Self {
        self.set_curve(channel, curve);
        self
    }

    /// Stored text of setting `name`, before coercion.
    pub fn raw_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DuskrResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| DuskrError::document(format!("parse develop settings JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DuskrResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DuskrError::document(format!("open develop settings '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

impl AttributeStore for DevelopSettings {
    fn has_settings(&self) -> bool {
        matches!(
            self.attribute(HAS_SETTINGS),
            Some(AttributeValue::Boolean(true))
        )
    }

    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        self.attributes.get(name).map(|raw| AttributeValue::parse(raw))
    }

    fn set_attribute(&mut self, name: &str, value: AttributeValue) {
        self.attributes.insert(name.to_owned(), value.to_text());
    }

    fn attribute_names(&self) -> Vec<String> {
        self.attributes.keys().cloned().collect()
    }

    fn curve(&self, channel: CurveChannel) -> Option<ToneCurve> {
        self.tone_curves.get(&channel).cloned()
    }

    fn set_curve(&mut self, channel: CurveChannel, curve: ToneCurve) {
        self.tone_curves.insert(channel, curve);
    }
}

impl DocumentCodec for DevelopSettings {
    fn decode(text: &str) -> DuskrResult<Self> {
        Self::from_reader(text.as_bytes())
    }

    fn encode(&self) -> DuskrResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DuskrError::document(format!("serialize develop settings JSON: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/settings.rs"]
mod tests;
