use crate::{
    cluster_group::ClusterGroup,
    error::{CanvasError, DominantColorError},
    filter::{BrightnessFilter, Filter},
    kmeans::{find_clusters_with, ClusterOptions},
    loader::{Canvas, DecodedImage, ImageLoader},
    raw_image::RawImage,
    Color, DominantColor,
};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Mutex;

type CanvasFactory<C> = Box<dyn Fn() -> Result<C, CanvasError> + Send + Sync>;

/// Finds the dominant color of images fetched through an [`ImageLoader`].
///
/// The canvas used to extract pixels is created on first use and shared by every later call. If creating it fails, the
/// error is returned and the next call tries again.
pub struct DominantColorFinder<L, C> {
    loader: L,
    canvas: Mutex<Option<C>>,
    create_canvas: CanvasFactory<C>,
    options: ClusterOptions,
    seed: Option<u64>,
    filter: Box<dyn Filter + Send + Sync>,
}

pub struct DominantColorFinderBuilder<L, C> {
    loader: L,
    create_canvas: CanvasFactory<C>,
    options: ClusterOptions,
    seed: Option<u64>,
    filter: Box<dyn Filter + Send + Sync>,
}

impl<L, C> DominantColorFinder<L, C>
where
    L: ImageLoader,
    C: Canvas<L::Image>,
{
    pub fn new<F>(loader: L, create_canvas: F) -> Self
    where
        F: Fn() -> Result<C, CanvasError> + Send + Sync + 'static,
    {
        DominantColorFinderBuilder::new(loader, create_canvas).build()
    }

    pub fn builder<F>(loader: L, create_canvas: F) -> DominantColorFinderBuilder<L, C>
    where
        F: Fn() -> Result<C, CanvasError> + Send + Sync + 'static,
    {
        DominantColorFinderBuilder::new(loader, create_canvas)
    }

    pub fn options(&self) -> &ClusterOptions {
        &self.options
    }

    /// Loads the image at `src` and picks its dominant color.
    pub async fn get_color(&self, src: &str) -> Result<DominantColor, DominantColorError> {
        if src.is_empty() {
            return Err(DominantColorError::MissingSource);
        }

        let image = self.loader.load(src).await.map_err(|e| {
            tracing::warn!(src = src, error = %e, "Image failed to load");
            DominantColorError::from(e)
        })?;

        let color = self.process(src, &image)?;
        tracing::debug!(src = src, hex = color.hex(), "Found dominant color");

        Ok(color)
    }

    fn process(&self, src: &str, image: &L::Image) -> Result<DominantColor, DominantColorError> {
        let mut canvas = self.canvas.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let canvas = match &mut *canvas {
            Some(canvas) => canvas,
            empty => {
                let created = (self.create_canvas)().map_err(|e| {
                    tracing::warn!(error = %e, "Failed to create canvas");
                    DominantColorError::CanvasCreation(e)
                })?;
                empty.insert(created)
            }
        };

        let buffer = canvas.draw(image).map_err(|source| DominantColorError::Extraction {
            src: src.to_string(),
            source,
        })?;

        let processing = |source| DominantColorError::Processing {
            src: src.to_string(),
            source,
        };

        let mut raw = RawImage::new(buffer, image.width(), image.height()).map_err(processing)?;
        let clusters = match self.seed {
            Some(seed) => find_clusters_with(&mut raw, &self.options, &mut StdRng::seed_from_u64(seed)),
            None => find_clusters_with(&mut raw, &self.options, &mut StdRng::from_entropy()),
        }
        .map_err(processing)?;

        tracing::debug!(
            src = src,
            width = raw.width(),
            height = raw.height(),
            clusters = clusters.len(),
            "Clustered image"
        );

        let color = find_dominant_color(&clusters, self.filter.as_ref()).ok_or_else(|| DominantColorError::NoClusters {
            src: src.to_string(),
        })?;

        Ok(DominantColor::new(color))
    }
}

impl<L, C> DominantColorFinderBuilder<L, C> {
    pub fn new<F>(loader: L, create_canvas: F) -> Self
    where
        F: Fn() -> Result<C, CanvasError> + Send + Sync + 'static,
    {
        Self {
            loader,
            create_canvas: Box::new(create_canvas),
            options: ClusterOptions::default(),
            seed: None,
            filter: Box::new(BrightnessFilter::default()),
        }
    }

    pub fn max_dimension(self, max_dimension: u32) -> Self {
        Self {
            options: ClusterOptions {
                max_dimension,
                ..self.options
            },
            ..self
        }
    }

    pub fn max_clusters(self, max_clusters: usize) -> Self {
        Self {
            options: ClusterOptions {
                max_clusters,
                ..self.options
            },
            ..self
        }
    }

    pub fn seed_attempts(self, seed_attempts: usize) -> Self {
        Self {
            options: ClusterOptions {
                seed_attempts,
                ..self.options
            },
            ..self
        }
    }

    pub fn max_iterations(self, max_iterations: usize) -> Self {
        Self {
            options: ClusterOptions {
                max_iterations,
                ..self.options
            },
            ..self
        }
    }

    /// Seeds the random choice of the initial cluster with a fixed value, making results reproducible.
    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub fn filter<F>(self, filter: F) -> Self
    where
        F: Filter + Send + Sync + 'static,
    {
        Self {
            filter: Box::new(filter),
            ..self
        }
    }

    pub fn build(self) -> DominantColorFinder<L, C> {
        DominantColorFinder {
            loader: self.loader,
            canvas: Mutex::new(None),
            create_canvas: self.create_canvas,
            options: self.options,
            seed: self.seed,
            filter: self.filter,
        }
    }
}

/// Picks the dominant color from clusters sorted by ascending weight.
///
/// The heaviest cluster the filter allows wins. If the filter allows none, the lightest cluster is used instead.
/// Returns `None` only for an empty group.
pub fn find_dominant_color(clusters: &ClusterGroup, filter: &dyn Filter) -> Option<Color> {
    clusters.clusters().iter().fold(None, |best, cluster| {
        let color = cluster.centroid();

        if best.is_none() || filter.is_allowed(color) {
            Some(color)
        } else {
            best
        }
    })
}
