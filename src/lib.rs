//! # decay-cluster
//!
//! Groups regions by the shape of their cumulative count curves.
//!
//! Each region's series is reduced to a two-dimensional decay profile —
//! the number of time steps back from the latest observation to when the
//! count last sat at 10% of its final value, and from there to 1% — and
//! regions are clustered by single-linkage hierarchical agglomeration.
//! The output is a linkage sequence in the standard form consumed by
//! dendrogram-drawing tools.
//!
//! ```
//! use decay_cluster::prelude::*;
//!
//! let series = vec![
//!     RegionSeries::new("Alfa", vec![0, 1, 5, 40, 90, 100]),
//!     RegionSeries::new("Bravo", vec![0, 0, 2, 20, 150, 200]),
//!     RegionSeries::new("Charlie", vec![0, 10, 10, 10, 10, 1000]),
//! ];
//! let clustering = cluster_regions(&series).unwrap();
//!
//! assert_eq!(clustering.retained_count(), 3);
//! assert_eq!(clustering.linkage.len(), 2);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod clustering;
pub mod core;
pub mod error;
pub mod features;
pub mod loader;
pub mod pipeline;

pub use error::{ClusterError, Result};

pub mod prelude {
    pub use crate::clustering::{euclidean_distance, single_linkage, MergeEvent};
    pub use crate::core::{FeaturePoint, RegionSeries};
    pub use crate::error::{ClusterError, Result};
    pub use crate::features::decay_profile;
    pub use crate::loader::load_regions;
    pub use crate::pipeline::{cluster_regions, RegionClustering};
}
