//! Dart allocation table
//!
//! Skirt waist suppression is split into darts whose count and intake depend
//! on the hip-minus-waist difference. Bands are checked from the largest
//! difference down and the first band whose threshold is met wins.

use crate::views::Panel;

/// Number of darts and the intake of each
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DartSpec {
    pub count: u8,
    pub intake: f64,
}

impl DartSpec {
    pub const NONE: DartSpec = DartSpec {
        count: 0,
        intake: 0.0,
    };

    const fn new(count: u8, intake: f64) -> Self {
        Self { count, intake }
    }

    /// Total waist suppression taken out by the darts
    pub fn total_intake(&self) -> f64 {
        f64::from(self.count) * self.intake
    }
}

/// (minimum difference, allocation), largest threshold first
const FRONT_BANDS: &[(f64, DartSpec)] = &[
    (11.0, DartSpec::new(2, 0.625)),
    (10.0, DartSpec::new(2, 0.5)),
    (8.0, DartSpec::new(2, 0.375)),
    (3.0, DartSpec::new(1, 0.5)),
];

const BACK_BANDS: &[(f64, DartSpec)] = &[
    (13.0, DartSpec::new(2, 1.375)),
    (12.0, DartSpec::new(2, 1.25)),
    (11.0, DartSpec::new(2, 1.0)),
    (10.0, DartSpec::new(2, 1.25)),
    (8.0, DartSpec::new(2, 1.25)),
    (7.0, DartSpec::new(2, 0.875)),
    (6.0, DartSpec::new(2, 0.675)),
    (5.0, DartSpec::new(1, 1.0)),
    (3.0, DartSpec::new(1, 0.75)),
];

/// Look up the darts for a panel given `hip - waist`.
///
/// Differences below the smallest band (and NaN) get no darts.
pub fn dart_allocation(difference: f64, panel: Panel) -> DartSpec {
    let bands = match panel {
        Panel::Front => FRONT_BANDS,
        Panel::Back => BACK_BANDS,
    };

    let spec = bands
        .iter()
        .find(|(min, _)| difference >= *min)
        .map(|(_, spec)| *spec)
        .unwrap_or(DartSpec::NONE);

    tracing::debug!(
        "{:?} darts for difference {:.3}: {} x {:.3}",
        panel,
        difference,
        spec.count,
        spec.intake
    );
    spec
}
