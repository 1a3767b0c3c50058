//! Layout engine: room sizing followed by wall hanging, with overflow sent to pedestals.
#![allow(dead_code)]
//!
//! # Pipeline
//! 1. `compute_dimensions_with` sizes the room from the artwork count.
//! 2. `place_on_walls` fills North → East → South → West and hands back the overflow.
//! 3. `place_on_pedestals` puts the overflow on the center ring.
//!
//! The whole thing is a pure function of its input: no I/O or shared state. The same
//! artwork list always produces the same layout. Callers recompute on every change to the
//! artwork list (see `cache` for the memoized path).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::gallery::dimensions::compute_dimensions_with;
use crate::gallery::models::{
    ArtworkDescriptor, ArtworkPlacement, GalleryDimensions, LayoutWarning, Wall,
};
use crate::gallery::params::LayoutParams;
use crate::gallery::pedestals::place_on_pedestals;
use crate::gallery::walls::place_on_walls;

/// Complete layout for one artwork list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryLayout {
    pub dimensions: GalleryDimensions,
    /// Wall placements in input order, followed by pedestal placements in input order.
    pub placements: Vec<ArtworkPlacement>,
    pub warnings: Vec<LayoutWarning>,
}

impl GalleryLayout {
    pub fn into_parts(self) -> (GalleryDimensions, Vec<ArtworkPlacement>) {
        (self.dimensions, self.placements)
    }

    /// Number of artworks that ended up on pedestals.
    pub fn pedestal_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| p.wall == Wall::Center)
            .count()
    }
}

/// Lays out `artworks` with the standard gallery constants.
pub fn layout(artworks: &[ArtworkDescriptor]) -> GalleryLayout {
    layout_with(artworks, &LayoutParams::default())
}

pub fn layout_with(artworks: &[ArtworkDescriptor], params: &LayoutParams) -> GalleryLayout {
    let dimensions = compute_dimensions_with(artworks.len(), params);

    let ids: Vec<String> = artworks.iter().map(|a| a.id.clone()).collect();
    let walls = place_on_walls(&ids, dimensions, params);
    let pedestals = place_on_pedestals(&walls.leftover, params);

    let mut placements = walls.placements;
    placements.extend(pedestals.placements);

    for w in &pedestals.warnings {
        warn!(artworks = artworks.len(), "Gallery layout: {}", w.message());
    }
    debug!(
        artworks = artworks.len(),
        width = dimensions.width,
        depth = dimensions.depth,
        pedestals = walls.leftover.len(),
        "Gallery layout computed"
    );

    GalleryLayout {
        dimensions,
        placements,
        warnings: pedestals.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::params::PedestalLayout;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn make_artworks(n: usize) -> Vec<ArtworkDescriptor> {
        (0..n)
            .map(|i| ArtworkDescriptor::new(format!("art-{i}"), 1.0))
            .collect()
    }

    /// Wall slot small enough that an 8m room has to take 20 artworks.
    fn tight_params() -> LayoutParams {
        LayoutParams {
            wall_slot: 1.0,
            ..LayoutParams::default()
        }
    }

    #[test]
    fn test_empty_layout() {
        let (dims, placements) = layout(&[]).into_parts();
        assert_eq!(
            dims,
            GalleryDimensions {
                width: 8.0,
                height: 4.0,
                depth: 8.0
            }
        );
        assert!(placements.is_empty());
    }

    #[test]
    fn test_single_artwork_on_north_wall() {
        let result = layout(&[ArtworkDescriptor::new("a", 1.0)]);
        let p = &result.placements[0];
        assert_eq!(p.id, "a");
        assert_eq!(p.wall, Wall::North);
        assert_eq!(p.position.x, 0.0);
        assert_eq!(p.position.y, 1.5);
        assert!((p.position.z - (-(result.dimensions.depth / 2.0) + 0.35)).abs() < 1e-12);
        assert_eq!(p.rotation.yaw, 0.0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_eight_artworks_all_on_walls() {
        let result = layout(&make_artworks(8));
        assert_eq!(result.dimensions.width, 8.0);
        assert_eq!(result.dimensions.depth, 8.0);
        assert_eq!(result.placements.len(), 8);
        assert_eq!(result.pedestal_count(), 0);
    }

    #[test]
    fn test_overflow_goes_to_lower_pedestals() {
        let result = layout_with(&make_artworks(20), &tight_params());
        assert_eq!(result.dimensions.width, 8.0);
        assert_eq!(result.placements.len(), 20);
        assert_eq!(result.pedestal_count(), 4);

        for p in &result.placements {
            if p.wall == Wall::Center {
                assert_eq!(p.position.y, 1.0);
            } else {
                assert_eq!(p.position.y, 1.5);
            }
        }
        // Pedestals come last and keep input order.
        let tail: Vec<&str> = result.placements[16..].iter().map(|p| p.id.as_str()).collect();
        assert_eq!(tail, vec!["art-16", "art-17", "art-18", "art-19"]);
        assert_eq!(
            result.warnings,
            vec![LayoutWarning::PedestalOverlap { overlapping: 1 }]
        );
    }

    #[test]
    fn test_radial_mode_avoids_overlap_warning() {
        let params = LayoutParams {
            pedestal_layout: PedestalLayout::Radial,
            ..tight_params()
        };
        let result = layout_with(&make_artworks(20), &params);
        assert_eq!(result.pedestal_count(), 4);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_aspect_ratio_does_not_change_layout() {
        let square = make_artworks(6);
        let mixed: Vec<ArtworkDescriptor> = square
            .iter()
            .enumerate()
            .map(|(i, a)| ArtworkDescriptor::new(a.id.clone(), 0.5 + i as f64))
            .collect();
        assert_eq!(layout(&square), layout(&mixed));
    }

    proptest! {
        #[test]
        fn prop_placements_biject_with_input(n in 0usize..300, slot in 0.5f64..4.0) {
            let params = LayoutParams { wall_slot: slot, ..LayoutParams::default() };
            let artworks = make_artworks(n);
            let result = layout_with(&artworks, &params);

            prop_assert_eq!(result.placements.len(), n);
            let placed: HashSet<&str> = result.placements.iter().map(|p| p.id.as_str()).collect();
            let input: HashSet<&str> = artworks.iter().map(|a| a.id.as_str()).collect();
            prop_assert_eq!(placed, input);
        }

        #[test]
        fn prop_layout_is_deterministic(ratios in prop::collection::vec(0.1f64..10.0, 0..80)) {
            let artworks: Vec<ArtworkDescriptor> = ratios
                .iter()
                .enumerate()
                .map(|(i, ar)| ArtworkDescriptor::new(format!("id-{i}"), *ar))
                .collect();
            let a = layout(&artworks);
            let b = layout(&artworks);
            prop_assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
            prop_assert_eq!(a, b);
        }

        /// With the standard constants the room always has room for every artwork on a wall.
        #[test]
        fn prop_default_room_never_overflows(n in 0usize..2000) {
            let result = layout(&make_artworks(n));
            prop_assert_eq!(result.pedestal_count(), 0);
        }
    }
}
