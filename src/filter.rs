use crate::{Color, DEFAULT_MAX_BRIGHTNESS, DEFAULT_MIN_DARKNESS};

/// A trait used to implement filters for the dominant color selection.
///
/// While picking the dominant color, every cluster centroid whose color the filter allows replaces the previous pick,
/// so the most populous allowed cluster wins. This trait allows the library consumer to implement custom filters.
///
/// See [`crate::DominantColorFinderBuilder::filter`] on how to replace the default filter.
pub trait Filter {
    /// Return whether a given color may be picked as the dominant color.
    fn is_allowed(&self, color: Color) -> bool;
}

/// The default filter of every [`crate::DominantColorFinder`].
///
/// This filter disallows colors whose channel sum is at or below `min_darkness`, or at or above `max_brightness`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessFilter {
    pub min_darkness: u16,
    pub max_brightness: u16,
}

impl Default for BrightnessFilter {
    fn default() -> Self {
        Self {
            min_darkness: DEFAULT_MIN_DARKNESS,
            max_brightness: DEFAULT_MAX_BRIGHTNESS,
        }
    }
}

impl Filter for BrightnessFilter {
    fn is_allowed(&self, color: Color) -> bool {
        let brightness = color.brightness();
        !is_too_dark(brightness, self.min_darkness) && !is_too_bright(brightness, self.max_brightness)
    }
}

fn is_too_dark(brightness: u16, min_darkness: u16) -> bool {
    brightness <= min_darkness
}

fn is_too_bright(brightness: u16, max_brightness: u16) -> bool {
    brightness >= max_brightness
}
