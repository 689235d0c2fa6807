//! End-to-end driver: extract decay profiles, drop unusable regions,
//! cluster the rest.

use crate::clustering::{single_linkage, MergeEvent};
use crate::core::{FeaturePoint, RegionSeries};
use crate::error::Result;
use crate::features::decay_profile;

/// Outcome of clustering a set of regions by decay profile.
#[derive(Debug, Clone)]
pub struct RegionClustering {
    /// Identifiers of regions with a valid feature, in input order.
    pub regions: Vec<String>,
    /// The feature point for each retained region.
    pub points: Vec<FeaturePoint>,
    /// Merge sequence over the retained points.
    pub linkage: Vec<MergeEvent>,
}

impl RegionClustering {
    /// Number of regions that survived feature filtering.
    pub fn retained_count(&self) -> usize {
        self.regions.len()
    }

    /// Index of the final cluster containing every retained point
    /// (`2n - 2` for `n` points), or `None` when fewer than two regions
    /// were clustered.
    pub fn final_cluster_index(&self) -> Option<usize> {
        match self.regions.len() {
            0 | 1 => None,
            n => Some(2 * n - 2),
        }
    }
}

/// Cluster regions by the decay profile of their count series.
///
/// Regions whose series yields an invalid feature (no usable decay
/// signal) are silently dropped before clustering; the survivors keep
/// their input order, which fixes the merge sequence.
pub fn cluster_regions(series: &[RegionSeries]) -> Result<RegionClustering> {
    let mut regions = Vec::new();
    let mut points = Vec::new();

    for s in series {
        let p = decay_profile(s.counts());
        if p.is_valid() {
            regions.push(s.region().to_string());
            points.push(p);
        }
    }

    let linkage = single_linkage(&points)?;
    Ok(RegionClustering {
        regions,
        points,
        linkage,
    })
}
