//! Single-linkage hierarchical clustering of decay-profile features.
//!
//! # Example
//!
//! ```
//! use decay_cluster::clustering::single_linkage;
//! use decay_cluster::core::FeaturePoint;
//!
//! let points = vec![
//!     FeaturePoint::new(1.0, 2.0),
//!     FeaturePoint::new(1.0, 3.0),
//!     FeaturePoint::new(10.0, 10.0),
//! ];
//! let linkage = single_linkage(&points).unwrap();
//!
//! // Two merges for three points; the closest pair goes first.
//! assert_eq!(linkage.len(), 2);
//! assert_eq!((linkage[0].low, linkage[0].high), (0, 1));
//! assert_eq!(linkage[0].distance, 1.0);
//! ```

pub mod distance;
pub mod linkage;

pub use distance::euclidean_distance;
pub use linkage::{single_linkage, MergeEvent};
