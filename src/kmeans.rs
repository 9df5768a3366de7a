use crate::{
    cluster::Cluster, cluster_group::ClusterGroup, error::RawImageError, raw_image::RawImage, DEFAULT_MAX_CLUSTERS,
    DEFAULT_MAX_DIMENSION, DEFAULT_MAX_ITERATIONS, DEFAULT_SEED_ATTEMPTS,
};
use rand::Rng;

/// Tunables of the clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterOptions {
    /// Each image dimension is shrunk to at most this many pixels before clustering.
    pub max_dimension: u32,
    pub max_clusters: usize,
    /// How many times each cluster slot samples the seed pixel before seeding gives up.
    pub seed_attempts: usize,
    pub max_iterations: usize,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            max_clusters: DEFAULT_MAX_CLUSTERS,
            seed_attempts: DEFAULT_SEED_ATTEMPTS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Clusters the image's opaque pixels with the default options, returning the clusters sorted by ascending weight.
///
/// The image is downscaled in place if either dimension exceeds [`DEFAULT_MAX_DIMENSION`].
pub fn find_clusters(image: &mut RawImage) -> Result<ClusterGroup, RawImageError> {
    find_clusters_with(image, &ClusterOptions::default(), &mut rand::thread_rng())
}

pub fn find_clusters_with<R>(
    image: &mut RawImage,
    options: &ClusterOptions,
    rng: &mut R,
) -> Result<ClusterGroup, RawImageError>
where
    R: Rng,
{
    // each axis is clamped on its own, the aspect ratio isn't kept
    let width = image.width().min(options.max_dimension);
    let height = image.height().min(options.max_dimension);
    image.scale(width, height)?;

    let mut group = seed_clusters(image, options, rng)?;

    tracing::trace!(
        width = image.width(),
        height = image.height(),
        clusters = group.len(),
        "Seeded clusters"
    );

    for iteration in 0..options.max_iterations {
        if group.is_empty() {
            break;
        }

        // column-major: x outer, y inner
        for x in 0..image.width() {
            for y in 0..image.height() {
                let color = image.pixel_at(x, y)?.color();
                if color.is_transparent() {
                    continue;
                }

                if let Some(cluster) = group.closest_mut(color) {
                    cluster.add_point(color);
                }
            }
        }

        let converged = group
            .clusters()
            .iter()
            .all(Cluster::compare_centroid_with_aggregate);

        group
            .clusters_mut()
            .iter_mut()
            .for_each(Cluster::recompute_centroid);

        if converged {
            tracing::trace!(iterations = iteration + 1, "Clusters converged");
            break;
        }
    }

    group.sort();
    Ok(group)
}

/// Seeds up to `max_clusters` clusters by sampling a single random coordinate. Since the coordinate is fixed for the
/// whole call, at most one distinct seed color can be found and the following slot always stops seeding.
fn seed_clusters<R>(image: &RawImage, options: &ClusterOptions, rng: &mut R) -> Result<ClusterGroup, RawImageError>
where
    R: Rng,
{
    let mut group = ClusterGroup::new();

    let x = rng.gen_range(0..image.width());
    let y = rng.gen_range(0..image.height());

    for _ in 0..options.max_clusters {
        let mut seeded = false;

        for _ in 0..options.seed_attempts {
            let color = image.pixel_at(x, y)?.color();
            if color.is_transparent() {
                continue;
            }

            if !group.contains_centroid(color) {
                let mut cluster = Cluster::new();
                cluster.set_centroid(color);
                group.add_cluster(cluster);

                seeded = true;
                break;
            }
        }

        if !seeded {
            break;
        }
    }

    Ok(group)
}
