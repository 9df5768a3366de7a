use crate::{error::RawImageError, Color};

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    x: u32,
    y: u32,
    color: Color,
}

impl Pixel {
    pub fn new(x: u32, y: u32, color: Color) -> Self {
        Self { x, y, color }
    }

    pub fn x(self) -> u32 {
        self.x
    }

    pub fn y(self) -> u32 {
        self.y
    }

    pub fn color(self) -> Color {
        self.color
    }
}

/// A row-major grid of RGBA pixels built from a raw byte buffer.
///
/// The grid is stored flat and indexed by `y * width + x`. Resampling with [`RawImage::scale`] replaces the whole grid
/// along with the dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl RawImage {
    /// Builds the pixel grid from `buffer`, read as consecutive R, G, B, A bytes. Bytes past `width * height * 4` are
    /// ignored.
    pub fn new(buffer: &[u8], width: u32, height: u32) -> Result<Self, RawImageError> {
        if buffer.is_empty() {
            return Err(RawImageError::EmptyBuffer);
        }

        if width == 0 || height == 0 {
            return Err(RawImageError::InvalidDimensions { width, height });
        }

        let expected = width as u64 * height as u64 * BYTES_PER_PIXEL as u64;
        if expected > buffer.len() as u64 {
            return Err(RawImageError::BufferTooSmall {
                width,
                height,
                expected,
                actual: buffer.len(),
            });
        }

        let pixels = buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .take(width as usize * height as usize)
            .enumerate()
            .map(|(i, rgba)| {
                let i = i as u32;
                Pixel::new(
                    i % width,
                    i / width,
                    Color::new(rgba[0], rgba[1], rgba[2], rgba[3]),
                )
            })
            .collect();

        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> Result<Pixel, RawImageError> {
        if y >= self.height || x >= self.width {
            return Err(RawImageError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Resamples the image to the given dimensions with nearest-neighbor sampling. Does nothing if the dimensions
    /// already match.
    pub fn scale(&mut self, width: u32, height: u32) -> Result<(), RawImageError> {
        if width == 0 || height == 0 {
            return Err(RawImageError::InvalidScale { width, height });
        }

        if width == self.width && height == self.height {
            return Ok(());
        }

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            let source_y = nearest(y, height, self.height);

            for x in 0..width {
                let source_x = nearest(x, width, self.width);
                let color = self.pixels[source_y as usize * self.width as usize + source_x as usize].color();

                pixels.push(Pixel::new(x, y, color));
            }
        }

        self.pixels = pixels;
        self.width = width;
        self.height = height;

        Ok(())
    }
}

/// Maps a target coordinate to the closest source coordinate, rounding halves up and clamping to the source bounds.
fn nearest(target: u32, target_dim: u32, source_dim: u32) -> u32 {
    let source = (target as f64 / target_dim as f64 * source_dim as f64 + 0.5).floor() as u32;
    source.min(source_dim - 1)
}
