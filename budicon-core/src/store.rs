//! Persistence of extracted icons as flat PNG files.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use snafu::prelude::*;

use crate::error::*;
use crate::extract::ExtractedIcon;

/// A writable output directory for icon assets.
pub struct IconStore {
    root: PathBuf,
}

impl IconStore {
    /// Opens (and creates, if needed) the output directory.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, BudiconError> {
        let root = root.into();
        std::fs::create_dir_all(&root).context(IoWriteSnafu {
            path: root.display().to_string(),
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes the icon as `{name}.png` and returns the written path.
    pub fn save(&self, icon: &ExtractedIcon) -> Result<PathBuf, BudiconError> {
        self.save_image(&icon.name, &icon.image)
    }

    pub fn save_image(&self, name: &str, image: &DynamicImage) -> Result<PathBuf, BudiconError> {
        let path = self.root.join(format!("{name}.png"));
        image
            .save_with_format(&path, ImageFormat::Png)
            .context(ImageWriteSnafu {
                path: path.display().to_string(),
            })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use glam::UVec2;
    use image::RgbImage;

    use crate::grid::rect::CellRect;

    use super::*;

    #[test]
    fn test_save_writes_named_png() {
        let dir = tempfile::tempdir().unwrap();
        let store = IconStore::create(dir.path().join("icons")).unwrap();

        let icon = ExtractedIcon {
            name: "aubepine".to_string(),
            rect: CellRect::new(UVec2::ZERO, UVec2::new(4, 3)),
            image: DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, image::Rgb([10, 20, 30]))),
        };
        let path = store.save(&icon).unwrap();

        assert_eq!(path.file_name().unwrap(), "aubepine.png");
        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.width(), 4);
        assert_eq!(reloaded.height(), 3);
        assert_eq!(reloaded.to_rgb8().get_pixel(2, 1), &image::Rgb([10, 20, 30]));
    }
}
