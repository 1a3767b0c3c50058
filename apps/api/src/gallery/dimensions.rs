//! Room sizing from the artwork count.
#![allow(dead_code)]
//!
//! Every artwork reserves `wall_slot` meters of wall; the total is split evenly over the
//! four walls and rounded up to whole meters. Width and depth share the same formula, so
//! rooms are square. Aspect ratios are deliberately ignored here.

use crate::gallery::models::GalleryDimensions;
use crate::gallery::params::LayoutParams;

const WALL_COUNT: f64 = 4.0;

/// Room dimensions for `count` artworks using the standard constants.
pub fn compute_dimensions(count: usize) -> GalleryDimensions {
    compute_dimensions_with(count, &LayoutParams::default())
}

pub fn compute_dimensions_with(count: usize, params: &LayoutParams) -> GalleryDimensions {
    let total_wall_budget = count as f64 * params.wall_slot;
    let per_wall_budget = (total_wall_budget / WALL_COUNT).ceil();

    GalleryDimensions {
        width: params.min_width.max(per_wall_budget),
        height: params.height,
        depth: params.min_depth.max(per_wall_budget),
    }
}
