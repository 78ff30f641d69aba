use image::{Rgb, RgbImage};

/// A width×height grid of 8-bit RGB triples. Thin wrapper over
/// `image::RgbImage` (the teacher's own choice of crate for pixel storage
/// and PNG encoding) — renderers write into it by `(row, col)` per spec.md
/// §4.8's `SetPixel(row=j, col=i)` convention.
pub struct Image {
    buffer: RgbImage,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn set_pixel(&mut self, row: u32, col: u32, rgb: [u8; 3]) {
        self.buffer.put_pixel(col, row, Rgb(rgb));
    }

    pub fn get_pixel(&self, row: u32, col: u32) -> [u8; 3] {
        self.buffer.get_pixel(col, row).0
    }

    pub fn into_rgb_image(self) -> RgbImage {
        self.buffer
    }

    pub fn save(&self, path: impl AsRef<std::path::Path>) -> image::ImageResult<()> {
        self.buffer.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_pixel_roundtrips() {
        let mut img = Image::new(4, 3);
        img.set_pixel(2, 1, [10, 20, 30]);
        assert_eq!(img.get_pixel(2, 1), [10, 20, 30]);
    }
}
