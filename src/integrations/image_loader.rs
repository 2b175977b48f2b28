// src/integrations/image_loader.rs
//
// Image loader backed by the `image` crate.
// Only the header is decoded; pixels are left to the recognizer.

use std::path::Path;

use crate::domain::ImageHandle;
use crate::error::AppResult;
use crate::integrations::ports::ImageLoader;

pub struct ImageCrateLoader;

impl ImageCrateLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageCrateLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader for ImageCrateLoader {
    fn load(&self, path: &Path) -> AppResult<ImageHandle> {
        let (width, height) = image::image_dimensions(path)?;
        Ok(ImageHandle::new(path.to_path_buf(), width, height))
    }
}
