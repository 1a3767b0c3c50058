//! Pedestal overflow: artworks that did not fit on any wall stand on a ring of pedestals
//! around the room center, lower than eye level, facing outward.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec3;

use crate::gallery::models::{ArtworkPlacement, LayoutWarning, Rotation, Wall};
use crate::gallery::params::{LayoutParams, PedestalLayout};

/// Slot count of the fixed legacy ring.
pub const LEGACY_SLOTS: usize = 3;

/// Pedestal placements plus any overlap the ring could not avoid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PedestalAssignment {
    pub placements: Vec<ArtworkPlacement>,
    pub warnings: Vec<LayoutWarning>,
}

/// Places `leftover_ids` on pedestals. Never fails; overlap is reported, not rejected.
pub fn place_on_pedestals(leftover_ids: &[String], params: &LayoutParams) -> PedestalAssignment {
    let count = leftover_ids.len();
    if count == 0 {
        return PedestalAssignment::default();
    }

    let step = match params.pedestal_layout {
        PedestalLayout::Legacy => TAU / LEGACY_SLOTS as f64,
        PedestalLayout::Radial => TAU / count as f64,
    };

    let placements = leftover_ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let angle = i as f64 * step;
            ArtworkPlacement {
                id: id.clone(),
                position: DVec3::new(
                    params.pedestal_radius * angle.cos(),
                    params.pedestal_height,
                    params.pedestal_radius * angle.sin(),
                ),
                rotation: Rotation::yaw(FRAC_PI_2 - angle),
                wall: Wall::Center,
            }
        })
        .collect();

    PedestalAssignment {
        placements,
        warnings: overlap_warnings(count, params),
    }
}

fn overlap_warnings(count: usize, params: &LayoutParams) -> Vec<LayoutWarning> {
    match params.pedestal_layout {
        PedestalLayout::Legacy if count > LEGACY_SLOTS => vec![LayoutWarning::PedestalOverlap {
            overlapping: count - LEGACY_SLOTS,
        }],
        PedestalLayout::Legacy => Vec::new(),
        PedestalLayout::Radial => {
            if count < 2 {
                return Vec::new();
            }
            let chord = 2.0 * params.pedestal_radius * (std::f64::consts::PI / count as f64).sin();
            if chord < params.spacing {
                vec![LayoutWarning::PedestalCrowding { count, chord }]
            } else {
                Vec::new()
            }
        }
    }
}
