use crate::Color;

/// A single k-means centroid that accumulates the colors assigned to it during one iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cluster {
    centroid: (u8, u8, u8),
    // sum of the colors added since the last recompute
    aggregate: (u64, u64, u64),
    counter: u64,
    weight: u64,
}

impl Cluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn centroid(&self) -> Color {
        Color::from_rgb(self.centroid)
    }

    /// The number of colors that made up the centroid at the last recompute.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn set_centroid(&mut self, color: Color) {
        self.centroid = color.rgb();
    }

    pub fn is_at_centroid(&self, color: Color) -> bool {
        self.centroid == color.rgb()
    }

    /// Accumulates a color into the cluster. Transparent colors are not filtered out here.
    pub fn add_point(&mut self, color: Color) {
        let (r, g, b) = color.rgb();

        self.aggregate.0 += r as u64;
        self.aggregate.1 += g as u64;
        self.aggregate.2 += b as u64;
        self.counter += 1;
    }

    /// Squared euclidean distance between the color and the centroid in RGB space.
    pub fn distance_squared(&self, color: Color) -> u32 {
        let (r, g, b) = color.rgb();
        let (cr, cg, cb) = self.centroid;

        let dr = r as i32 - cr as i32;
        let dg = g as i32 - cg as i32;
        let db = b as i32 - cb as i32;

        (dr * dr + dg * dg + db * db) as u32
    }

    /// Moves the centroid to the mean of the accumulated colors and starts a new accumulation. A cluster that received
    /// no colors keeps its centroid and weight.
    pub fn recompute_centroid(&mut self) {
        if let Some(mean) = self.aggregate_mean() {
            self.centroid = mean;
            self.aggregate = (0, 0, 0);
            self.weight = self.counter;
            self.counter = 0;
        }
    }

    /// Whether the mean of the accumulated colors equals the current centroid. Always false for a cluster that received
    /// no colors. Has to be checked before [`Cluster::recompute_centroid`] clears the accumulation.
    pub fn compare_centroid_with_aggregate(&self) -> bool {
        self.aggregate_mean() == Some(self.centroid)
    }

    fn aggregate_mean(&self) -> Option<(u8, u8, u8)> {
        if self.counter == 0 {
            return None;
        }

        let (r, g, b) = self.aggregate;
        Some((
            (r / self.counter) as u8,
            (g / self.counter) as u8,
            (b / self.counter) as u8,
        ))
    }
}
