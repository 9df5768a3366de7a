use palette::{LinSrgb, Srgb};

/// Relative luminance above which black text has better contrast than white text.
const FOREGROUND_LUMINANCE_THRESHOLD: f32 = 0.179;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// A fully opaque color.
    pub fn from_rgb((red, green, blue): (u8, u8, u8)) -> Color {
        Self::new(red, green, blue, u8::MAX)
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn alpha(self) -> u8 {
        self.alpha
    }

    pub fn is_transparent(self) -> bool {
        self.alpha == 0
    }

    /// Sum of the red, green and blue channels, in `0..=765`.
    pub fn brightness(self) -> u16 {
        self.red as u16 + self.green as u16 + self.blue as u16
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// WCAG relative luminance of the color, in `0.0..=1.0`.
    pub fn relative_luminance(self) -> f32 {
        let linear: LinSrgb<f32> = Srgb::new(self.red, self.green, self.blue)
            .into_format::<f32>()
            .into_linear();

        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }
}

/// Encodes the color's RGB channels as six lowercase hex digits, without a leading `#`.
pub fn rgb_to_hex(color: Color) -> String {
    let (r, g, b) = color.rgb();
    format!("{:02x}{:02x}{:02x}", r, g, b)
}

/// Text color to draw on top of a given background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForegroundFontColor {
    White,
    Black,
}

impl ForegroundFontColor {
    pub fn for_background(background: Color) -> ForegroundFontColor {
        if background.relative_luminance() > FOREGROUND_LUMINANCE_THRESHOLD {
            ForegroundFontColor::Black
        } else {
            ForegroundFontColor::White
        }
    }

    pub fn color(self) -> Color {
        match self {
            ForegroundFontColor::White => Color::from_rgb((255, 255, 255)),
            ForegroundFontColor::Black => Color::from_rgb((0, 0, 0)),
        }
    }
}

/// The final color picked for an image, along with the values derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DominantColor {
    hex: String,
    rgb: Color,
    foreground_font_color: ForegroundFontColor,
}

impl DominantColor {
    pub fn new(rgb: Color) -> DominantColor {
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            foreground_font_color: ForegroundFontColor::for_background(rgb),
        }
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Color {
        self.rgb
    }

    pub fn foreground_font_color(&self) -> ForegroundFontColor {
        self.foreground_font_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rgb_to_hex_pads_channels() {
        assert_eq!(rgb_to_hex(Color::new(0, 10, 255, 255)), "000aff");
        assert_eq!(rgb_to_hex(Color::new(18, 52, 86, 0)), "123456");
    }

    #[test]
    fn test_brightness_sums_channels() {
        assert_eq!(Color::new(255, 255, 255, 0).brightness(), 765);
        assert_eq!(Color::new(1, 2, 3, 255).brightness(), 6);
    }

    #[test]
    fn test_transparency_only_at_zero_alpha() {
        assert!(Color::new(10, 10, 10, 0).is_transparent());
        assert!(!Color::new(10, 10, 10, 1).is_transparent());
    }

    #[test]
    fn test_foreground_font_color() {
        assert_eq!(
            ForegroundFontColor::for_background(Color::from_rgb((255, 255, 255))),
            ForegroundFontColor::Black
        );
        assert_eq!(
            ForegroundFontColor::for_background(Color::from_rgb((0, 0, 0))),
            ForegroundFontColor::White
        );
        assert_eq!(
            ForegroundFontColor::for_background(Color::from_rgb((0, 0, 255))),
            ForegroundFontColor::White
        );
        assert_eq!(
            ForegroundFontColor::for_background(Color::from_rgb((255, 255, 0))),
            ForegroundFontColor::Black
        );
    }

    #[test]
    fn test_dominant_color_derives_hex_and_foreground() {
        let color = Color::from_rgb((200, 30, 40));
        let dominant = DominantColor::new(color);

        assert_eq!(dominant.hex(), "c81e28");
        assert_eq!(dominant.rgb(), color);
        assert_eq!(
            dominant.foreground_font_color(),
            ForegroundFontColor::for_background(color)
        );
    }
}
