//! Synchronous try-load-else-fallback texture resolution.
//!
//! The async fetching lives entirely on the host side. From the core's point
//! of view a texture either exists when the scene is built or the body keeps
//! a flat color derived from its base color. Motion and picking never depend
//! on the outcome.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::assets::manifest::{join_path, TextureManifest};

/// Handle to a texture owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextureRef(pub u32);

/// Outcome of resolving one texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextureSlot {
    /// The texture is available; the material color is white.
    Loaded(TextureRef),
    /// No texture; draw with this flat 0xRRGGBB color.
    Fallback(u32),
}

impl TextureSlot {
    pub fn is_loaded(&self) -> bool {
        matches!(self, TextureSlot::Loaded(_))
    }

    /// Material color to tint with: white when textured, the base color otherwise.
    pub fn tint(&self) -> u32 {
        match self {
            TextureSlot::Loaded(_) => 0xFFFFFF,
            TextureSlot::Fallback(color) => *color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextureError {
    pub path: String,
    pub reason: String,
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture {} unavailable: {}", self.path, self.reason)
    }
}

impl std::error::Error for TextureError {}

/// Host-side texture source.
pub trait TextureLoader {
    fn load(&mut self, path: &str) -> Result<TextureRef, TextureError>;
}

/// Loader with no textures at all. Every body gets its fallback color.
#[derive(Debug, Default)]
pub struct NoTextures;

impl TextureLoader for NoTextures {
    fn load(&mut self, path: &str) -> Result<TextureRef, TextureError> {
        Err(TextureError { path: path.to_owned(), reason: "no texture source".to_owned() })
    }
}

/// Loader over a set of textures the host already holds, keyed by full path.
/// Requested file names are joined onto `base_path` before lookup.
#[derive(Debug, Default)]
pub struct PreloadedTextures {
    base_path: String,
    textures: HashMap<String, TextureRef>,
}

impl PreloadedTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the files a manifest reports as available.
    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let textures = manifest
            .available
            .iter()
            .map(|(file, &id)| (manifest.path_for(file), TextureRef(id)))
            .collect();
        Self { base_path: manifest.base_path.clone(), textures }
    }

    pub fn insert(&mut self, file: &str, texture: TextureRef) {
        self.textures.insert(join_path(&self.base_path, file), texture);
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureLoader for PreloadedTextures {
    fn load(&mut self, file: &str) -> Result<TextureRef, TextureError> {
        let path = join_path(&self.base_path, file);
        match self.textures.get(&path) {
            Some(&texture) => Ok(texture),
            None => Err(TextureError { path, reason: "not loaded".to_owned() }),
        }
    }
}

/// Loading-screen counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadProgress {
    pub loaded: u32,
    pub fallback: u32,
    pub total: u32,
}

impl LoadProgress {
    /// Fraction of textures settled (loaded or fallen back), 1.0 when none were requested.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            (self.loaded + self.fallback) as f32 / self.total as f32
        }
    }

    pub fn is_complete(&self) -> bool {
        self.loaded + self.fallback >= self.total
    }
}

/// Resolve an optional texture, falling back to `color` on absence or failure.
pub fn resolve_texture(
    loader: &mut dyn TextureLoader,
    path: Option<&str>,
    color: u32,
    progress: &mut LoadProgress,
) -> TextureSlot {
    let Some(path) = path else {
        return TextureSlot::Fallback(color);
    };
    progress.total += 1;
    match loader.load(path) {
        Ok(texture) => {
            progress.loaded += 1;
            TextureSlot::Loaded(texture)
        }
        Err(e) => {
            log::warn!("{e}; using fallback color #{color:06X}");
            progress.fallback += 1;
            TextureSlot::Fallback(color)
        }
    }
}
