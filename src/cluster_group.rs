use crate::{cluster::Cluster, Color};

/// An ordered collection of clusters produced by a single clustering run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterGroup {
    clusters: Vec<Cluster>,
}

impl ClusterGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cluster(&mut self, cluster: Cluster) {
        self.clusters.push(cluster);
    }

    pub fn contains_centroid(&self, color: Color) -> bool {
        self.clusters.iter().any(|cluster| cluster.is_at_centroid(color))
    }

    /// Returns the cluster whose centroid is nearest to the color. On ties, the cluster added first wins.
    pub fn closest(&self, color: Color) -> Option<&Cluster> {
        let i = self.closest_index(color)?;
        Some(&self.clusters[i])
    }

    pub fn closest_mut(&mut self, color: Color) -> Option<&mut Cluster> {
        let i = self.closest_index(color)?;
        Some(&mut self.clusters[i])
    }

    /// Sorts the clusters by weight, lightest first. The relative order of clusters with equal weights is not
    /// preserved.
    pub fn sort(&mut self) {
        self.clusters.sort_unstable_by_key(|cluster| cluster.weight());
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub(crate) fn clusters_mut(&mut self) -> &mut [Cluster] {
        &mut self.clusters
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    fn closest_index(&self, color: Color) -> Option<usize> {
        let mut closest = None;
        let mut min_distance = u32::MAX;

        for (i, cluster) in self.clusters.iter().enumerate() {
            let distance = cluster.distance_squared(color);

            if closest.is_none() || distance < min_distance {
                closest = Some(i);
                min_distance = distance;
            }
        }

        closest
    }
}
