//! Scroll progress to active project mapping

use crate::catalog::ProjectId;
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that band edges meet
const EDGE_EPSILON: f32 = 1e-6;

/// Vertical scroll position of the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top
    pub offset: f32,
    /// Total height of the scrollable content
    pub content_height: f32,
    /// Height of the visible viewport
    pub viewport_height: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, content_height: f32, viewport_height: f32) -> Self {
        Self {
            offset,
            content_height,
            viewport_height,
        }
    }

    /// Largest offset that still shows content
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Scroll progress in [0, 1]
    pub fn fraction(&self) -> f32 {
        let mut denominator = self.content_height - self.viewport_height;
        if denominator <= 0.0 {
            denominator = 1.0;
        }
        let fraction = self.offset / denominator;
        if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// One half-open band of scroll progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub start: f32,
    pub end: f32,
    /// Project shown while the fraction is inside this band
    pub project: Option<ProjectId>,
}

impl Band {
    pub const fn new(start: f32, end: f32, project: Option<ProjectId>) -> Self {
        Self {
            start,
            end,
            project,
        }
    }
}

/// Reasons a band table is rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BandError {
    #[error("band table is empty")]
    Empty,
    #[error("first band starts at {0}, expected 0")]
    StartsAfterZero(f32),
    #[error("last band ends at {0}, expected 1")]
    EndsBeforeOne(f32),
    #[error("band {index} starts at {found}, expected {expected}")]
    Gap {
        index: usize,
        expected: f32,
        found: f32,
    },
    #[error("band {index} is empty or inverted ({start}..{end})")]
    Inverted { index: usize, start: f32, end: f32 },
}

/// Contiguous, exhaustive partition of [0, 1] into project bands
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBands {
    bands: Vec<Band>,
}

impl Default for ProjectBands {
    fn default() -> Self {
        Self {
            bands: vec![
                Band::new(0.0, 0.82, None),
                Band::new(0.82, 0.86, Some(1)),
                Band::new(0.86, 0.90, Some(2)),
                Band::new(0.90, 0.94, Some(3)),
                Band::new(0.94, 1.0, Some(4)),
            ],
        }
    }
}

impl ProjectBands {
    /// Validate and build a band table
    pub fn new(bands: Vec<Band>) -> Result<Self, BandError> {
        let first = bands.first().ok_or(BandError::Empty)?;
        if first.start.abs() > EDGE_EPSILON {
            return Err(BandError::StartsAfterZero(first.start));
        }

        for (index, band) in bands.iter().enumerate() {
            if band.start.is_nan() || band.end.is_nan() || band.start >= band.end {
                return Err(BandError::Inverted {
                    index,
                    start: band.start,
                    end: band.end,
                });
            }
            if index > 0 {
                let expected = bands[index - 1].end;
                if (band.start - expected).abs() > EDGE_EPSILON {
                    return Err(BandError::Gap {
                        index,
                        expected,
                        found: band.start,
                    });
                }
            }
        }

        let last = bands[bands.len() - 1];
        if (last.end - 1.0).abs() > EDGE_EPSILON {
            return Err(BandError::EndsBeforeOne(last.end));
        }

        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Map a scroll fraction to the project whose band contains it.
    ///
    /// Bands are `[start, end)` except the last, which also holds 1.0.
    /// Out-of-range input is clamped first.
    pub fn map_fraction(&self, fraction: f32) -> Option<ProjectId> {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };

        let last = self.bands.len() - 1;
        self.bands
            .iter()
            .enumerate()
            .find(|(index, band)| {
                fraction >= band.start && (fraction < band.end || *index == last)
            })
            .and_then(|(_, band)| band.project)
    }
}

/// Active project as seen by the rest of the page.
///
/// `Live` follows the scroll position; `Frozen` holds the value captured
/// when the fullscreen viewer opened and ignores scrolling until thawed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveProject {
    Live(Option<ProjectId>),
    Frozen(Option<ProjectId>),
}

impl Default for ActiveProject {
    fn default() -> Self {
        Self::Live(None)
    }
}

impl ActiveProject {
    pub fn current(&self) -> Option<ProjectId> {
        match self {
            Self::Live(project) | Self::Frozen(project) => *project,
        }
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self, Self::Frozen(_))
    }

    /// Snapshot the current value
    pub fn freeze(self) -> Self {
        Self::Frozen(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod scroll_metrics {
        use super::*;

        #[test]
        fn test_fraction_midway() {
            let metrics = ScrollMetrics::new(50.0, 200.0, 100.0);
            assert_eq!(metrics.fraction(), 0.5);
        }

        #[test]
        fn test_fraction_clamps() {
            assert_eq!(ScrollMetrics::new(-10.0, 200.0, 100.0).fraction(), 0.0);
            assert_eq!(ScrollMetrics::new(500.0, 200.0, 100.0).fraction(), 1.0);
        }

        #[test]
        fn test_non_positive_denominator_uses_one() {
            // Content shorter than the viewport
            let metrics = ScrollMetrics::new(0.5, 50.0, 100.0);
            assert_eq!(metrics.fraction(), 0.5);
            let metrics = ScrollMetrics::new(3.0, 100.0, 100.0);
            assert_eq!(metrics.fraction(), 1.0);
        }

        #[test]
        fn test_non_finite_offset_is_zero() {
            let metrics = ScrollMetrics::new(f32::NAN, 200.0, 100.0);
            assert_eq!(metrics.fraction(), 0.0);
        }

        #[test]
        fn test_max_offset() {
            assert_eq!(ScrollMetrics::new(0.0, 240.0, 40.0).max_offset(), 200.0);
            assert_eq!(ScrollMetrics::new(0.0, 20.0, 40.0).max_offset(), 0.0);
        }
    }

    mod project_bands {
        use super::*;

        #[test]
        fn test_default_band_edges() {
            let bands = ProjectBands::default();
            assert_eq!(bands.map_fraction(0.0), None);
            assert_eq!(bands.map_fraction(0.81), None);
            assert_eq!(bands.map_fraction(0.82), Some(1));
            assert_eq!(bands.map_fraction(0.859), Some(1));
            assert_eq!(bands.map_fraction(0.86), Some(2));
            assert_eq!(bands.map_fraction(0.90), Some(3));
            assert_eq!(bands.map_fraction(0.94), Some(4));
            assert_eq!(bands.map_fraction(1.0), Some(4));
        }

        #[test]
        fn test_every_fraction_maps_to_known_value() {
            let bands = ProjectBands::default();
            let allowed = [None, Some(1), Some(2), Some(3), Some(4)];
            for step in 0..=1000 {
                let fraction = step as f32 / 1000.0;
                let project = bands.map_fraction(fraction);
                assert!(allowed.contains(&project), "fraction {fraction}");
                let containing = bands
                    .bands()
                    .iter()
                    .enumerate()
                    .filter(|(i, b)| {
                        fraction >= b.start && (fraction < b.end || *i == bands.bands().len() - 1)
                    })
                    .count();
                assert_eq!(containing, 1, "fraction {fraction}");
            }
        }

        #[test]
        fn test_default_table_is_valid() {
            let bands = ProjectBands::default();
            assert_eq!(ProjectBands::new(bands.bands().to_vec()), Ok(bands));
        }

        #[test]
        fn test_out_of_range_is_clamped() {
            let bands = ProjectBands::default();
            assert_eq!(bands.map_fraction(-1.0), None);
            assert_eq!(bands.map_fraction(2.0), Some(4));
            assert_eq!(bands.map_fraction(f32::NAN), None);
        }

        #[test]
        fn test_rejects_empty() {
            assert_eq!(ProjectBands::new(vec![]), Err(BandError::Empty));
        }

        #[test]
        fn test_rejects_gap() {
            let result = ProjectBands::new(vec![
                Band::new(0.0, 0.5, None),
                Band::new(0.6, 1.0, Some(1)),
            ]);
            assert!(matches!(result, Err(BandError::Gap { index: 1, .. })));
        }

        #[test]
        fn test_rejects_overlap() {
            let result = ProjectBands::new(vec![
                Band::new(0.0, 0.6, None),
                Band::new(0.5, 1.0, Some(1)),
            ]);
            assert!(matches!(result, Err(BandError::Gap { index: 1, .. })));
        }

        #[test]
        fn test_rejects_late_start_and_early_end() {
            assert!(matches!(
                ProjectBands::new(vec![Band::new(0.1, 1.0, None)]),
                Err(BandError::StartsAfterZero(_))
            ));
            assert!(matches!(
                ProjectBands::new(vec![Band::new(0.0, 0.9, None)]),
                Err(BandError::EndsBeforeOne(_))
            ));
        }

        #[test]
        fn test_rejects_inverted() {
            let result = ProjectBands::new(vec![
                Band::new(0.0, 0.5, None),
                Band::new(0.5, 0.5, Some(1)),
                Band::new(0.5, 1.0, Some(2)),
            ]);
            assert!(matches!(result, Err(BandError::Inverted { index: 1, .. })));
        }

        #[test]
        fn test_custom_band_count() {
            let bands = ProjectBands::new(vec![
                Band::new(0.0, 0.5, Some(7)),
                Band::new(0.5, 1.0, Some(8)),
            ])
            .unwrap();
            assert_eq!(bands.map_fraction(0.25), Some(7));
            assert_eq!(bands.map_fraction(0.75), Some(8));
        }
    }

    mod active_project {
        use super::*;

        #[test]
        fn test_default_is_live_none() {
            assert_eq!(ActiveProject::default(), ActiveProject::Live(None));
        }

        #[test]
        fn test_freeze_keeps_value() {
            let frozen = ActiveProject::Live(Some(3)).freeze();
            assert_eq!(frozen, ActiveProject::Frozen(Some(3)));
            assert!(frozen.is_frozen());
            assert_eq!(frozen.current(), Some(3));
        }
    }
}
