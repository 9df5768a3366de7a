use thiserror::Error;

/// Validation errors raised by [`crate::RawImage`]. These represent misuse of the buffer API and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RawImageError {
    #[error("Pixel buffer is empty")]
    EmptyBuffer,

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel buffer too small: {width}x{height} needs {expected} bytes, got {actual}")]
    BufferTooSmall {
        width: u32,
        height: u32,
        expected: u64,
        actual: usize,
    },

    #[error("Pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    #[error("Invalid scale dimensions: {width}x{height}")]
    InvalidScale { width: u32, height: u32 },
}

/// The three terminal failures an [`crate::ImageLoader`] can report, each naming the source it failed on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("Failed to load image: {src}")]
    LoadError { src: String },

    #[error("Failed to decode image: {src}")]
    DecodeError { src: String },

    #[error("Image loading aborted: {src}")]
    Aborted { src: String },
}

impl LoadFailure {
    pub fn src(&self) -> &str {
        match self {
            LoadFailure::LoadError { src } | LoadFailure::DecodeError { src } | LoadFailure::Aborted { src } => src,
        }
    }
}

/// Errors from creating or drawing with a [`crate::Canvas`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("Failed to create canvas: {0}")]
    Creation(String),

    #[error("Cannot draw empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Failed to extract pixels: {0}")]
    Extraction(String),
}

/// Error returned by [`crate::DominantColorFinder::get_color`].
#[derive(Debug, Error)]
pub enum DominantColorError {
    #[error("getColor requires an image src")]
    MissingSource,

    #[error(transparent)]
    Load(#[from] LoadFailure),

    #[error("Canvas unavailable: {0}")]
    CanvasCreation(#[source] CanvasError),

    #[error("Error extracting pixels from {src}: {source}")]
    Extraction {
        src: String,
        #[source]
        source: CanvasError,
    },

    #[error("Error processing {src}: {source}")]
    Processing {
        src: String,
        #[source]
        source: RawImageError,
    },

    #[error("No opaque pixels to cluster in {src}")]
    NoClusters { src: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_message() {
        assert_eq!(
            DominantColorError::MissingSource.to_string(),
            "getColor requires an image src"
        );
    }

    #[test]
    fn test_load_failure_messages_name_kind_and_source() {
        let load = LoadFailure::LoadError { src: "cover.jpg".into() };
        let decode = LoadFailure::DecodeError { src: "cover.jpg".into() };
        let abort = LoadFailure::Aborted { src: "cover.jpg".into() };

        assert_eq!(load.to_string(), "Failed to load image: cover.jpg");
        assert_eq!(decode.to_string(), "Failed to decode image: cover.jpg");
        assert_eq!(abort.to_string(), "Image loading aborted: cover.jpg");
        assert_eq!(abort.src(), "cover.jpg");
    }

    #[test]
    fn test_load_failure_is_transparent_in_dominant_color_error() {
        let error: DominantColorError = LoadFailure::DecodeError { src: "a.png".into() }.into();
        assert_eq!(error.to_string(), "Failed to decode image: a.png");
    }

    #[test]
    fn test_processing_error_names_source() {
        let error = DominantColorError::Processing {
            src: "a.png".into(),
            source: RawImageError::EmptyBuffer,
        };
        assert_eq!(error.to_string(), "Error processing a.png: Pixel buffer is empty");
    }

    #[test]
    fn test_buffer_too_small_message() {
        let error = RawImageError::BufferTooSmall {
            width: 2,
            height: 2,
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            error.to_string(),
            "Pixel buffer too small: 2x2 needs 16 bytes, got 12"
        );
    }
}
