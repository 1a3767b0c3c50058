//! Axum route handlers for the Gallery API.

use std::collections::{HashMap, HashSet};

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::gallery::frame::{normalize_aspect_ratio, size_frame};
use crate::gallery::models::{
    ArtworkDescriptor, ArtworkPlacement, FrameBox, GalleryDimensions, LayoutWarning,
};
use crate::state::AppState;

/// Upper bound on artworks per layout request.
pub const MAX_ARTWORKS: usize = 1000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ArtworkInput {
    pub id: String,
    /// Missing or null is treated as square.
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub artworks: Vec<ArtworkInput>,
}

#[derive(Debug, Serialize)]
pub struct WarningView {
    #[serde(flatten)]
    pub detail: LayoutWarning,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    /// Hex digest of the request; changes whenever the artwork list does.
    pub layout_key: String,
    pub dimensions: GalleryDimensions,
    pub placements: Vec<ArtworkPlacement>,
    pub warnings: Vec<WarningView>,
    /// Frame box per placement, same order as `placements`.
    pub frames: Vec<FrameBox>,
}

#[derive(Debug, Deserialize)]
pub struct FrameRequest {
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
    /// Defaults to the configured frame max edge.
    #[serde(default)]
    pub max_edge: Option<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/gallery/layout
///
/// Computes (or fetches from cache) the room size and every artwork's placement.
/// Unusable aspect ratios are not errors; they are laid out as squares.
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(request): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, AppError> {
    let artworks = validate_artworks(request.artworks)?;

    let (key, layout) = state
        .layout_cache
        .get_or_compute(&artworks, &state.layout_params);

    let ratios: HashMap<&str, f64> = artworks
        .iter()
        .map(|a| (a.id.as_str(), a.aspect_ratio))
        .collect();
    let max_edge = state.layout_params.frame_max_edge;
    let frames = layout
        .placements
        .iter()
        .map(|p| {
            let ar = ratios.get(p.id.as_str()).copied().unwrap_or(1.0);
            size_frame(ar, max_edge)
        })
        .collect();

    let warnings = layout
        .warnings
        .iter()
        .map(|w| WarningView {
            detail: w.clone(),
            message: w.message(),
        })
        .collect();

    Ok(Json(LayoutResponse {
        layout_key: key.to_string(),
        dimensions: layout.dimensions,
        placements: layout.placements.clone(),
        warnings,
        frames,
    }))
}

/// POST /api/v1/gallery/frame
///
/// Sizes a single artwork's picture plane. Never rejects a ratio.
pub async fn handle_frame(
    State(state): State<AppState>,
    Json(request): Json<FrameRequest>,
) -> Json<FrameBox> {
    let ar = normalize_aspect_ratio(request.aspect_ratio);
    let max_edge = request
        .max_edge
        .unwrap_or(state.layout_params.frame_max_edge);
    Json(size_frame(ar, max_edge))
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Checks ids and converts inputs to descriptors with normalized aspect ratios.
fn validate_artworks(inputs: Vec<ArtworkInput>) -> Result<Vec<ArtworkDescriptor>, AppError> {
    if inputs.len() > MAX_ARTWORKS {
        return Err(AppError::Validation(format!(
            "at most {MAX_ARTWORKS} artworks per layout, got {}",
            inputs.len()
        )));
    }

    let mut seen = HashSet::with_capacity(inputs.len());
    let mut artworks = Vec::with_capacity(inputs.len());
    for (i, input) in inputs.into_iter().enumerate() {
        if input.id.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "artworks[{i}].id cannot be empty"
            )));
        }
        if !seen.insert(input.id.clone()) {
            return Err(AppError::Validation(format!(
                "duplicate artwork id '{}'",
                input.id
            )));
        }
        artworks.push(ArtworkDescriptor {
            id: input.id,
            aspect_ratio: normalize_aspect_ratio(input.aspect_ratio),
        });
    }
    Ok(artworks)
}
