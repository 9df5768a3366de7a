use crate::error::{CanvasError, LoadFailure};
use async_trait::async_trait;
use image::{DynamicImage, GenericImageView};

/// A decoded image whose pixels a [`Canvas`] can extract.
pub trait DecodedImage {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

impl DecodedImage for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }
}

/// Loads and decodes images from a source locator.
///
/// A load settles exactly once: with the decoded image, or with one of the three [`LoadFailure`] kinds.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    type Image: DecodedImage + Send;

    async fn load(&self, src: &str) -> Result<Self::Image, LoadFailure>;
}

/// Draws a decoded image and hands out its pixels as row-major RGBA bytes with a top-left origin.
pub trait Canvas<I> {
    fn draw(&mut self, image: &I) -> Result<&[u8], CanvasError>;
}

/// Loads images from the filesystem, treating the source as a path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageLoader;

#[async_trait]
impl ImageLoader for FileImageLoader {
    type Image = DynamicImage;

    async fn load(&self, src: &str) -> Result<DynamicImage, LoadFailure> {
        let bytes = tokio::fs::read(src).await.map_err(|e| {
            tracing::warn!(src = src, error = %e, "Failed to read image");
            LoadFailure::LoadError { src: src.to_string() }
        })?;

        // decoding is CPU bound, keep it off the async workers
        let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .map_err(|e| {
                tracing::warn!(src = src, error = %e, "Image decoding did not complete");
                LoadFailure::Aborted { src: src.to_string() }
            })?;

        decoded.map_err(|e| {
            tracing::warn!(src = src, error = %e, "Failed to decode image");
            LoadFailure::DecodeError { src: src.to_string() }
        })
    }
}

/// A canvas that converts images to 8-bit RGBA, reusing its pixel buffer between draws.
#[derive(Debug, Default)]
pub struct RgbaCanvas {
    buffer: Vec<u8>,
}

impl RgbaCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas<DynamicImage> for RgbaCanvas {
    fn draw(&mut self, image: &DynamicImage) -> Result<&[u8], CanvasError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CanvasError::EmptyImage { width, height });
        }

        self.buffer.clear();
        match image.as_rgba8() {
            Some(rgba) => self.buffer.extend_from_slice(rgba.as_raw()),
            None => self.buffer.extend_from_slice(image.to_rgba8().as_raw()),
        }

        let expected = width as usize * height as usize * 4;
        if self.buffer.len() < expected {
            return Err(CanvasError::Extraction(format!(
                "expected {} bytes, got {}",
                expected,
                self.buffer.len()
            )));
        }

        Ok(&self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, RgbaImage};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rgba_canvas_passes_rgba_through() {
        let image = RgbaImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let mut canvas = RgbaCanvas::new();

        let pixels = canvas.draw(&DynamicImage::ImageRgba8(image)).unwrap();
        assert_eq!(pixels, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_rgba_canvas_adds_opaque_alpha() {
        let image = RgbImage::from_pixel(1, 2, Rgb([9, 8, 7]));
        let mut canvas = RgbaCanvas::new();

        let pixels = canvas.draw(&DynamicImage::ImageRgb8(image)).unwrap();
        assert_eq!(pixels, &[9, 8, 7, 255, 9, 8, 7, 255]);
    }

    #[test]
    fn test_rgba_canvas_reuses_buffer() {
        let mut canvas = RgbaCanvas::new();

        canvas
            .draw(&DynamicImage::ImageRgba8(RgbaImage::new(4, 4)))
            .unwrap();
        let pixels = canvas
            .draw(&DynamicImage::ImageRgba8(RgbaImage::new(1, 1)))
            .unwrap();

        assert_eq!(pixels.len(), 4);
    }

    #[test]
    fn test_rgba_canvas_rejects_empty_image() {
        let mut canvas = RgbaCanvas::new();

        assert_eq!(
            canvas.draw(&DynamicImage::ImageRgba8(RgbaImage::new(0, 3))),
            Err(CanvasError::EmptyImage { width: 0, height: 3 })
        );
    }

    #[tokio::test]
    async fn test_file_loader_reports_missing_file() {
        let result = FileImageLoader.load("/nonexistent/cover.png").await;

        assert_eq!(
            result.err(),
            Some(LoadFailure::LoadError {
                src: "/nonexistent/cover.png".to_string()
            })
        );
    }
}
