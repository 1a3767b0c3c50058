//! Data types shared by every stage of the gallery layout pipeline.
#![allow(dead_code)]
//!
//! All of these are derived values: they are rebuilt from the artwork list on every
//! layout request and never persisted.

use glam::DVec3;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Input
// ────────────────────────────────────────────────────────────────────────────

/// One artwork as the layout engine sees it: an id and the source image's width/height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDescriptor {
    pub id: String,
    /// Width divided by height. Non-positive or non-finite values are treated as 1.0.
    pub aspect_ratio: f64,
}

impl ArtworkDescriptor {
    pub fn new(id: impl Into<String>, aspect_ratio: f64) -> Self {
        Self {
            id: id.into(),
            aspect_ratio,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Room
// ────────────────────────────────────────────────────────────────────────────

/// Interior size of the room in meters. Width runs along X, depth along Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalleryDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Which surface an artwork is hung on. `Center` means a free-standing pedestal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wall {
    North,
    East,
    South,
    West,
    Center,
}

impl Wall {
    pub fn as_str(&self) -> &'static str {
        match self {
            Wall::North => "north",
            Wall::East => "east",
            Wall::South => "south",
            Wall::West => "west",
            Wall::Center => "center",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Euler rotation restricted to yaw (rotation about +Y, radians).
///
/// Yaw 0 faces +Z, which is "into the room" for an artwork on the north wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub yaw: f64,
}

impl Rotation {
    pub const fn yaw(yaw: f64) -> Self {
        Self { yaw }
    }

    /// Unit vector the artwork's picture plane faces.
    pub fn facing(&self) -> DVec3 {
        DVec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }
}

/// Where one artwork ends up in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkPlacement {
    pub id: String,
    /// Center of the picture plane, in meters, room centered on the origin with the floor at y=0.
    pub position: DVec3,
    pub rotation: Rotation,
    pub wall: Wall,
}

/// On-wall bounding box of an artwork's picture plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameBox {
    pub width: f64,
    pub height: f64,
}

/// Recoverable layout degradations. The layout is still complete and renderable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// Fixed three-slot pedestal ring: pedestals past the third share a position with an earlier one.
    PedestalOverlap { overlapping: usize },
    /// Pedestals spread evenly around the ring but sit closer than the minimum spacing.
    PedestalCrowding { count: usize, chord: f64 },
}

impl LayoutWarning {
    pub fn message(&self) -> String {
        match self {
            LayoutWarning::PedestalOverlap { overlapping } => {
                format!("{overlapping} artworks could not be placed without overlap")
            }
            LayoutWarning::PedestalCrowding { count, chord } => format!(
                "{count} pedestal artworks are only {chord:.2}m apart around the ring"
            ),
        }
    }
}
