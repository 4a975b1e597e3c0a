//! Garment-view catalogue
//!
//! [`GarmentView`] names every pattern piece the engine can draft and
//! [`GarmentView::draft`] dispatches to the matching derivation.

use crate::geometry::Point;
use crate::outline::Outline;
use crate::points::PointSet;
use crate::views::{
    mens_sleeve, mens_torso, pant_front, womens_bodice, womens_skirt, womens_sleeve, Panel,
};
use serde::{Deserialize, Serialize};
use sloperkit_core::{Error, GeometryError, GeometryResult, MeasurementSet, Result};
use std::fmt;
use std::str::FromStr;

/// A draftable pattern piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentView {
    MensTorsoFront,
    MensTorsoBack,
    MensSleeve,
    WomensBodiceFront,
    WomensBodiceBack,
    WomensSleeve,
    WomensSkirtFront,
    WomensSkirtBack,
    UnisexPantFront,
}

impl GarmentView {
    pub const ALL: [GarmentView; 9] = [
        GarmentView::MensTorsoFront,
        GarmentView::MensTorsoBack,
        GarmentView::MensSleeve,
        GarmentView::WomensBodiceFront,
        GarmentView::WomensBodiceBack,
        GarmentView::WomensSleeve,
        GarmentView::WomensSkirtFront,
        GarmentView::WomensSkirtBack,
        GarmentView::UnisexPantFront,
    ];

    /// Slash-separated route, e.g. `mens/sloper/torso/front`
    pub fn route(&self) -> &'static str {
        match self {
            GarmentView::MensTorsoFront => "mens/sloper/torso/front",
            GarmentView::MensTorsoBack => "mens/sloper/torso/back",
            GarmentView::MensSleeve => "mens/sloper/sleeve",
            GarmentView::WomensBodiceFront => "womens/sloper/bodice/front",
            GarmentView::WomensBodiceBack => "womens/sloper/bodice/back",
            GarmentView::WomensSleeve => "womens/sloper/sleeve",
            GarmentView::WomensSkirtFront => "womens/sloper/skirt/front",
            GarmentView::WomensSkirtBack => "womens/sloper/skirt/back",
            GarmentView::UnisexPantFront => "unisex/sloper/pants/front",
        }
    }

    /// File-name stem, e.g. `mens_sloper_torso_front`
    pub fn file_stem(&self) -> String {
        self.route().replace('/', "_")
    }

    /// Draft this view from a measurement set.
    pub fn draft(&self, m: &MeasurementSet) -> Result<Pattern> {
        let (points, outline) = match self {
            GarmentView::MensTorsoFront => {
                let p = mens_torso::derive_points(m, Panel::Front)?;
                (p.labelled(), mens_torso::outline(&p))
            }
            GarmentView::MensTorsoBack => {
                let p = mens_torso::derive_points(m, Panel::Back)?;
                (p.labelled(), mens_torso::outline(&p))
            }
            GarmentView::MensSleeve => {
                let p = mens_sleeve::derive_points(m)?;
                (p.labelled(), mens_sleeve::outline(&p))
            }
            GarmentView::WomensBodiceFront => {
                let p = womens_bodice::derive_front_points(m)?;
                (p.labelled(), womens_bodice::front_outline(&p))
            }
            GarmentView::WomensBodiceBack => {
                let p = womens_bodice::derive_back_points(m)?;
                (p.labelled(), womens_bodice::back_outline(&p))
            }
            GarmentView::WomensSleeve => {
                let p = womens_sleeve::derive_points(m)?;
                (p.labelled(), womens_sleeve::outline(&p))
            }
            GarmentView::WomensSkirtFront => {
                let p = womens_skirt::derive_front_points(m)?;
                (p.labelled(), womens_skirt::front_outline(&p))
            }
            GarmentView::WomensSkirtBack => {
                let p = womens_skirt::derive_back_points(m)?;
                (p.labelled(), womens_skirt::back_outline(&p))
            }
            GarmentView::UnisexPantFront => {
                let p = pant_front::derive_points(m)?;
                (p.labelled(), pant_front::outline(&p))
            }
        };

        self.check_finite(&points, &outline)?;

        tracing::debug!(
            "drafted {} with {} points and {} segments",
            self,
            points.len(),
            outline.segments().len()
        );

        Ok(Pattern {
            view: *self,
            system: m.system(),
            points,
            outline,
        })
    }
}

impl GarmentView {
    /// Reject a draft whose points or outline picked up a NaN or infinity
    fn check_finite(
        &self,
        points: &[(&'static str, Point)],
        outline: &Outline,
    ) -> GeometryResult<()> {
        if let Some((label, _)) = points.iter().find(|(_, p)| !p.is_finite()) {
            return Err(GeometryError::NonFinite {
                quantity: format!("{} point {}", self, label),
            });
        }
        if !outline.all_points().all(|p| p.is_finite()) {
            return Err(GeometryError::NonFinite {
                quantity: format!("{} outline", self),
            });
        }
        Ok(())
    }
}

impl fmt::Display for GarmentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for GarmentView {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().trim_matches('/').to_lowercase();
        GarmentView::ALL
            .iter()
            .copied()
            .find(|v| v.route() == wanted || v.file_stem() == wanted)
            .ok_or_else(|| {
                let valid: Vec<String> = GarmentView::ALL.iter().map(|v| v.file_stem()).collect();
                Error::other(format!(
                    "Unknown garment view '{}'; expected one of: {}",
                    s,
                    valid.join(", ")
                ))
            })
    }
}

/// A drafted pattern piece, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    pub view: GarmentView,
    pub system: sloperkit_core::MeasurementSystem,
    /// Labelled anchor points in construction order
    pub points: Vec<(&'static str, Point)>,
    pub outline: Outline,
}

impl Pattern {
    /// Serialize the drafted points and outline as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::other(format!("Failed to serialize pattern: {}", e)))
    }
}
