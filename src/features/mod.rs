//! Feature extraction for regional count series.
//!
//! # Example
//!
//! ```
//! use decay_cluster::features::decay_profile;
//!
//! // Latest count 10; the series sat at 10% of it (count 1) four steps
//! // before the end, but never at 1%.
//! let profile = decay_profile(&[1, 2, 5, 10, 10]);
//! assert_eq!(profile.x, 4.0);
//! assert!(profile.y.is_nan());
//! ```

pub mod decay;

pub use decay::decay_profile;
