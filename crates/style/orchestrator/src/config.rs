use std::path::{Path, PathBuf};

use style_fill::Colour;

/// Engine-wide settings shared by the tree and its resource registry.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Text colour of root widgets before any rule applies.
    default_text_colour: Colour,
    /// Whether an unloadable `url(...)` image paints nothing instead of
    /// failing the rule.
    missing_images_transparent: bool,
    /// Directory image paths are resolved against.
    resource_root: PathBuf,
}

impl Default for EngineConfig {
    #[inline]
    fn default() -> Self {
        Self {
            default_text_colour: Colour::BLACK,
            missing_images_transparent: false,
            resource_root: PathBuf::from("."),
        }
    }
}

impl EngineConfig {
    #[inline]
    #[must_use]
    pub fn with_default_text_colour(mut self, colour: Colour) -> Self {
        self.default_text_colour = colour;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_missing_images_transparent(mut self, transparent: bool) -> Self {
        self.missing_images_transparent = transparent;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_root = root.into();
        self
    }

    #[inline]
    pub const fn default_text_colour(&self) -> Colour {
        self.default_text_colour
    }

    #[inline]
    pub const fn missing_images_transparent(&self) -> bool {
        self.missing_images_transparent
    }

    #[inline]
    pub fn resource_root(&self) -> &Path {
        &self.resource_root
    }
}
