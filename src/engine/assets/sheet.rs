// Sprite sheet loading

use super::{AssetError, FrameRect};
use image::{GenericImageView, RgbaImage, SubImage};
use log::info;
use std::path::Path;

/// A decoded sprite sheet, read-only after load
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    /// Read and decode a sprite sheet from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy().to_string();

        if !path.exists() {
            return Err(AssetError::NotFound(path_str));
        }

        let bytes = std::fs::read(path)?;
        let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: path_str.clone(),
            source,
        })?;

        let sheet = Self::from_image(decoded.to_rgba8());
        info!(
            "Loaded sprite sheet {} ({}x{})",
            path_str,
            sheet.width(),
            sheet.height()
        );
        Ok(sheet)
    }

    /// Wrap an already decoded image
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The full RGBA pixel buffer
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Borrowed view of one frame, or None if the region leaves the sheet
    pub fn frame(&self, rect: FrameRect) -> Option<SubImage<&RgbaImage>> {
        if !rect.fits_within(self.width(), self.height()) {
            return None;
        }
        Some(self.image.view(
            rect.origin.x as u32,
            rect.origin.y as u32,
            rect.width,
            rect.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::path::PathBuf;

    fn striped_sheet() -> RgbaImage {
        // Each 32px column gets its own red value
        RgbaImage::from_fn(256, 64, |x, _| Rgba([(x / 32) as u8 * 10, 0, 0, 255]))
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sprite-animator-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_frame_view_reads_shared_pixels() {
        let sheet = SpriteSheet::from_image(striped_sheet());
        let frame = sheet.frame(FrameRect::new(96, 32, 32, 32)).unwrap();

        assert_eq!(frame.dimensions(), (32, 32));
        assert_eq!(frame.get_pixel(0, 0), Rgba([30, 0, 0, 255]));
        assert_eq!(frame.get_pixel(31, 31), Rgba([30, 0, 0, 255]));
    }

    #[test]
    fn test_frame_outside_sheet() {
        let sheet = SpriteSheet::from_image(striped_sheet());
        assert!(sheet.frame(FrameRect::new(0, 48, 32, 32)).is_none());
        assert!(sheet.frame(FrameRect::new(0, -1, 32, 32)).is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let result = SpriteSheet::load(temp_path("missing.png"));
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_load_undecodable_file() {
        let path = temp_path("garbage.png");
        std::fs::write(&path, b"not an image").unwrap();

        let result = SpriteSheet::load(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_load_png_round_trip() {
        let path = temp_path("sheet.png");
        striped_sheet().save(&path).unwrap();

        let sheet = SpriteSheet::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!((sheet.width(), sheet.height()), (256, 64));
        assert_eq!(sheet.image().get_pixel(200, 10), &Rgba([60, 0, 0, 255]));
    }
}
