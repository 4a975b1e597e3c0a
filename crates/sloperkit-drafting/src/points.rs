//! Labelled point listings
//!
//! Each garment view derives its anchor points into a dedicated struct, one
//! field per point, so a misspelled label is a compile error. The drafting
//! labels ("A2", "midBR22", ...) survive only as the listing returned by
//! [`PointSet::labelled`], which feeds construction-point overlays and the
//! CLI's point dump.

use crate::geometry::Point;
use std::collections::BTreeMap;

/// A per-view set of named anchor points
pub trait PointSet {
    /// Every point with its drafting label, in construction order
    fn labelled(&self) -> Vec<(&'static str, Point)>;

    /// Label-keyed map of every point
    fn to_map(&self) -> BTreeMap<&'static str, Point> {
        self.labelled().into_iter().collect()
    }

    /// Look a point up by drafting label
    fn point(&self, label: &str) -> Option<Point> {
        self.labelled()
            .into_iter()
            .find(|(name, _)| *name == label)
            .map(|(_, p)| p)
    }
}

/// Declare a point struct whose fields map one-to-one onto drafting labels.
macro_rules! point_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident => $label:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $crate::geometry::Point, )*
        }

        impl $crate::points::PointSet for $name {
            fn labelled(&self) -> Vec<(&'static str, $crate::geometry::Point)> {
                vec![$( ($label, self.$field), )*]
            }
        }
    };
}
