use std::collections::HashMap;
use std::path::PathBuf;

use log::debug;
use style_face_buffer::TextureId;
use style_fill::{FillError, ImageSource, ResourceProvider};

use crate::EngineConfig;

/// Image resources keyed by the path stylesheets use.
///
/// Files are read lazily from the configured root, and only their dimensions
/// are taken. Each new path gets the next texture id. Images uploaded by the
/// embedder can be registered up front without touching the filesystem.
#[derive(Debug)]
pub struct ResourceRegistry {
    root: PathBuf,
    missing_is_transparent: bool,
    sources: HashMap<String, ImageSource>,
    next_texture: u32,
}

impl ResourceRegistry {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            root: config.resource_root().to_path_buf(),
            missing_is_transparent: config.missing_images_transparent(),
            sources: HashMap::new(),
            next_texture: 1,
        }
    }

    /// Register an in-memory image under `path`, keeping its texture id if the
    /// path is already known.
    pub fn register(&mut self, path: &str, width: u32, height: u32) -> ImageSource {
        let texture = match self.sources.get(path) {
            Some(existing) => existing.texture,
            None => self.allocate_texture(),
        };
        let source = ImageSource {
            texture,
            width,
            height,
        };
        self.sources.insert(path.to_owned(), source);
        debug!(target: "style_resources", "registered `{path}` as {texture:?} ({width}x{height})");
        source
    }

    #[inline]
    pub fn get(&self, path: &str) -> Option<ImageSource> {
        self.sources.get(path).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn allocate_texture(&mut self) -> TextureId {
        let texture = TextureId(self.next_texture);
        self.next_texture = self.next_texture.saturating_add(1);
        texture
    }
}

impl ResourceProvider for ResourceRegistry {
    fn require(&mut self, path: &str) -> Result<ImageSource, FillError> {
        if let Some(source) = self.get(path) {
            return Ok(source);
        }
        let file = self.root.join(path);
        let (width, height) = image::image_dimensions(&file).map_err(|error| FillError::Resource {
            path: path.to_owned(),
            reason: error.to_string(),
        })?;
        debug!(target: "style_resources", "loaded {} ({width}x{height})", file.display());
        Ok(self.register(path, width, height))
    }

    fn missing_is_transparent(&self) -> bool {
        self.missing_is_transparent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_keeps_texture_ids() {
        let mut registry = ResourceRegistry::new(&EngineConfig::default());
        let first = registry.register("a.png", 4, 4);
        let second = registry.register("b.png", 8, 8);
        let resized = registry.register("a.png", 16, 16);
        assert_ne!(first.texture, second.texture);
        assert_eq!(resized.texture, first.texture);
        assert_eq!(registry.get("a.png").map(|source| source.width), Some(16));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn registered_images_skip_the_filesystem() -> Result<(), FillError> {
        let config = EngineConfig::default().with_resource_root("/nonexistent");
        let mut registry = ResourceRegistry::new(&config);
        registry.register("ui/tile.png", 32, 16);
        let source = registry.require("ui/tile.png")?;
        assert_eq!((source.width, source.height), (32, 16));
        assert!(matches!(
            registry.require("ui/other.png"),
            Err(FillError::Resource { .. })
        ));
        Ok(())
    }
}
