// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract a single dominant color from artwork images, for theming a UI around them.
//!
//! The image's pixels are clustered with k-means in RGB space and the most populous cluster within a brightness band is
//! picked as the dominant color. The picked color comes with its hex encoding and the font color that contrasts best
//! with it.
//!
//! ```no_run
//! use dominance::{DominantColorFinder, FileImageLoader, RgbaCanvas};
//!
//! # async fn run() -> Result<(), dominance::DominantColorError> {
//! let finder = DominantColorFinder::new(FileImageLoader, || Ok(RgbaCanvas::new()));
//! let color = finder.get_color("cover.jpg").await?;
//!
//! println!("#{} with {:?} text", color.hex(), color.foreground_font_color());
//! # Ok(())
//! # }
//! ```

mod cluster;
mod cluster_group;
mod color;
mod error;
mod filter;
mod finder;
mod kmeans;
mod loader;
mod raw_image;

pub const DEFAULT_MAX_DIMENSION: u32 = 256;
pub const DEFAULT_MAX_CLUSTERS: usize = 4;
pub const DEFAULT_SEED_ATTEMPTS: usize = 10;
pub const DEFAULT_MAX_ITERATIONS: usize = 50;
pub const DEFAULT_MIN_DARKNESS: u16 = 100;
pub const DEFAULT_MAX_BRIGHTNESS: u16 = 655;

pub use crate::{
    cluster::Cluster,
    cluster_group::ClusterGroup,
    color::{rgb_to_hex, Color, DominantColor, ForegroundFontColor},
    error::{CanvasError, DominantColorError, LoadFailure, RawImageError},
    filter::{BrightnessFilter, Filter},
    finder::{find_dominant_color, DominantColorFinder, DominantColorFinderBuilder},
    kmeans::{find_clusters, find_clusters_with, ClusterOptions},
    loader::{Canvas, DecodedImage, FileImageLoader, ImageLoader, RgbaCanvas},
    raw_image::{Pixel, RawImage},
};
pub use image;
