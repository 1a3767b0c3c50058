//! Wall hanging: fills North → East → South → West in order, each wall taking as many
//! artworks as its span allows, centered and evenly spaced.
#![allow(dead_code)]
//!
//! The room is centered on the origin. Along each wall, artworks run left to right as seen
//! by a viewer facing that wall, so the caller's order reads clockwise around the room.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec3;

use crate::gallery::models::{ArtworkPlacement, GalleryDimensions, Rotation, Wall};
use crate::gallery::params::LayoutParams;

/// Which room dimension a wall runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanAxis {
    Width,
    Depth,
}

/// Fixed description of one wall.
#[derive(Debug, Clone, Copy)]
struct WallSpec {
    wall: Wall,
    span: SpanAxis,
    /// Direction of increasing slot offset along the wall.
    along: DVec3,
    /// Normal pointing from the wall into the room.
    inward: DVec3,
    yaw: f64,
}

impl WallSpec {
    fn span_length(&self, dims: GalleryDimensions) -> f64 {
        match self.span {
            SpanAxis::Width => dims.width,
            SpanAxis::Depth => dims.depth,
        }
    }

    /// Half the room extent perpendicular to this wall.
    fn half_extent(&self, dims: GalleryDimensions) -> f64 {
        match self.span {
            SpanAxis::Width => dims.depth / 2.0,
            SpanAxis::Depth => dims.width / 2.0,
        }
    }

    fn capacity(&self, dims: GalleryDimensions, params: &LayoutParams) -> usize {
        (self.span_length(dims) / params.spacing).floor() as usize
    }

    fn position(&self, dims: GalleryDimensions, params: &LayoutParams, offset: f64) -> DVec3 {
        let mount = self.half_extent(dims) - params.wall_offset;
        self.along * offset - self.inward * mount + DVec3::Y * params.eye_height
    }
}

/// Filling order. Each wall's artworks face along `inward`.
const WALLS: [WallSpec; 4] = [
    WallSpec {
        wall: Wall::North,
        span: SpanAxis::Width,
        along: DVec3::X,
        inward: DVec3::Z,
        yaw: 0.0,
    },
    WallSpec {
        wall: Wall::East,
        span: SpanAxis::Depth,
        along: DVec3::Z,
        inward: DVec3::NEG_X,
        yaw: -FRAC_PI_2,
    },
    WallSpec {
        wall: Wall::South,
        span: SpanAxis::Width,
        along: DVec3::NEG_X,
        inward: DVec3::NEG_Z,
        yaw: PI,
    },
    WallSpec {
        wall: Wall::West,
        span: SpanAxis::Depth,
        along: DVec3::NEG_Z,
        inward: DVec3::X,
        yaw: FRAC_PI_2,
    },
];

/// Result of hanging artworks on the four walls.
#[derive(Debug, Clone, PartialEq)]
pub struct WallAssignment {
    /// Wall placements in input order.
    pub placements: Vec<ArtworkPlacement>,
    /// Ids that did not fit on any wall, in input order.
    pub leftover: Vec<String>,
}

/// Number of artworks the four walls of `dims` can hold at the configured spacing.
pub fn total_wall_capacity(dims: GalleryDimensions, params: &LayoutParams) -> usize {
    WALLS.iter().map(|spec| spec.capacity(dims, params)).sum()
}

/// Hangs `ids` on the walls in order. Never fails; anything past total capacity is
/// returned in `leftover`.
pub fn place_on_walls(
    ids: &[String],
    dims: GalleryDimensions,
    params: &LayoutParams,
) -> WallAssignment {
    let mut placements = Vec::with_capacity(ids.len());
    let mut remaining = ids;

    for spec in &WALLS {
        if remaining.is_empty() {
            break;
        }
        let take = spec.capacity(dims, params).min(remaining.len());
        let (on_wall, rest) = remaining.split_at(take);

        let center = (take as f64 - 1.0) / 2.0;
        for (i, id) in on_wall.iter().enumerate() {
            let offset = (i as f64 - center) * params.spacing;
            placements.push(ArtworkPlacement {
                id: id.clone(),
                position: spec.position(dims, params, offset),
                rotation: Rotation::yaw(spec.yaw),
                wall: spec.wall,
            });
        }
        remaining = rest;
    }

    WallAssignment {
        placements,
        leftover: remaining.to_vec(),
    }
}
