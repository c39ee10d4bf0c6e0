use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Texture manifest: where the host keeps texture files and which optional
/// files it managed to fetch. Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Directory prefix for every texture path (e.g., "assets/textures/").
    #[serde(default)]
    pub base_path: String,
    /// Texture file name → host texture id, for the files that are present.
    #[serde(default)]
    pub available: HashMap<String, u32>,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Full path for a texture file name.
    pub fn path_for(&self, file: &str) -> String {
        join_path(&self.base_path, file)
    }
}

pub(crate) fn join_path(base: &str, file: &str) -> String {
    if base.is_empty() || base.ends_with('/') {
        format!("{base}{file}")
    } else {
        format!("{base}/{file}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest() {
        let json = r#"{
            "base_path": "assets/textures/",
            "available": { "earth.jpg": 1, "saturn_rings.jpg": 2 }
        }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        assert_eq!(manifest.available.len(), 2);
        assert_eq!(manifest.available["earth.jpg"], 1);
        assert_eq!(manifest.path_for("earth.jpg"), "assets/textures/earth.jpg");
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = TextureManifest::from_json("{}").unwrap();
        assert!(manifest.available.is_empty());
        assert_eq!(manifest.path_for("sun.jpg"), "sun.jpg");
    }

    #[test]
    fn base_path_without_trailing_slash() {
        let manifest = TextureManifest::from_json(r#"{ "base_path": "tex" }"#).unwrap();
        assert_eq!(manifest.path_for("moon.jpg"), "tex/moon.jpg");
    }
}
