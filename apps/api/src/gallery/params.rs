//! Tunable constants for room sizing, wall hanging and pedestal overflow.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_WIDTH: f64 = 8.0;
pub const MIN_DEPTH: f64 = 8.0;
pub const HEIGHT: f64 = 4.0;
/// Meters of wall reserved per artwork when sizing the room.
pub const WALL_SLOT: f64 = 2.5;
/// Minimum center-to-center distance between neighbours on a wall.
pub const SPACING: f64 = 2.0;
/// Distance from the wall plane at which artworks are mounted.
pub const WALL_OFFSET: f64 = 0.35;
pub const EYE_HEIGHT: f64 = 1.5;
pub const PEDESTAL_RADIUS: f64 = 2.0;
pub const PEDESTAL_HEIGHT: f64 = 1.0;
/// Longest edge of a rendered frame box.
pub const DEFAULT_MAX_EDGE: f64 = 2.0;

/// How overflow artworks are spread around the pedestal ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PedestalLayout {
    /// Three fixed slots at 120° steps; a fourth pedestal lands on the first slot again.
    #[default]
    Legacy,
    /// Slots spread evenly over the full circle for however many pedestals there are.
    Radial,
}

impl std::str::FromStr for PedestalLayout {
    type Err = LayoutParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(PedestalLayout::Legacy),
            "radial" => Ok(PedestalLayout::Radial),
            other => Err(LayoutParamsError::UnknownPedestalLayout(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutParamsError {
    #[error("{name} must be a finite positive number, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("unknown pedestal layout '{0}' (expected 'legacy' or 'radial')")]
    UnknownPedestalLayout(String),
}

/// Every constant the layout pipeline reads. `Default` gives the standard gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub min_width: f64,
    pub min_depth: f64,
    pub height: f64,
    pub wall_slot: f64,
    pub spacing: f64,
    pub wall_offset: f64,
    pub eye_height: f64,
    pub pedestal_radius: f64,
    pub pedestal_height: f64,
    pub pedestal_layout: PedestalLayout,
    pub frame_max_edge: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            min_width: MIN_WIDTH,
            min_depth: MIN_DEPTH,
            height: HEIGHT,
            wall_slot: WALL_SLOT,
            spacing: SPACING,
            wall_offset: WALL_OFFSET,
            eye_height: EYE_HEIGHT,
            pedestal_radius: PEDESTAL_RADIUS,
            pedestal_height: PEDESTAL_HEIGHT,
            pedestal_layout: PedestalLayout::Legacy,
            frame_max_edge: DEFAULT_MAX_EDGE,
        }
    }
}

impl LayoutParams {
    /// Rejects values that would produce empty rooms, zero-capacity walls or NaN positions.
    pub fn validate(&self) -> Result<(), LayoutParamsError> {
        let checks = [
            ("min_width", self.min_width),
            ("min_depth", self.min_depth),
            ("height", self.height),
            ("wall_slot", self.wall_slot),
            ("spacing", self.spacing),
            ("eye_height", self.eye_height),
            ("pedestal_radius", self.pedestal_radius),
            ("pedestal_height", self.pedestal_height),
            ("frame_max_edge", self.frame_max_edge),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutParamsError::NotPositive { name, value });
            }
        }
        // Zero offset hangs the artwork flush on the wall plane.
        if !self.wall_offset.is_finite() || self.wall_offset < 0.0 {
            return Err(LayoutParamsError::NotPositive {
                name: "wall_offset",
                value: self.wall_offset,
            });
        }
        Ok(())
    }
}
