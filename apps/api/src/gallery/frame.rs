//! Frame sizing: fits an artwork's aspect ratio inside a square of side `max_edge`.

use crate::gallery::models::FrameBox;
use crate::gallery::params::DEFAULT_MAX_EDGE;

/// Aspect ratio used whenever the real one is missing or unusable.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

/// Maps a missing, non-positive, NaN or infinite aspect ratio to 1.0.
pub fn normalize_aspect_ratio(aspect_ratio: Option<f64>) -> f64 {
    match aspect_ratio {
        Some(ar) if ar.is_finite() && ar > 0.0 => ar,
        _ => DEFAULT_ASPECT_RATIO,
    }
}

/// Computes the rendered picture-plane size for an artwork.
///
/// Landscape and square artworks take the full `max_edge` as width; portrait artworks
/// take it as height. Bad input never fails: the ratio falls back to 1.0 and an unusable
/// `max_edge` falls back to [`DEFAULT_MAX_EDGE`].
pub fn size_frame(aspect_ratio: f64, max_edge: f64) -> FrameBox {
    let ar = normalize_aspect_ratio(Some(aspect_ratio));
    let edge = if max_edge.is_finite() && max_edge > 0.0 {
        max_edge
    } else {
        DEFAULT_MAX_EDGE
    };

    if ar >= 1.0 {
        FrameBox {
            width: edge,
            height: edge / ar,
        }
    } else {
        FrameBox {
            width: edge * ar,
            height: edge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_takes_full_width() {
        assert_eq!(
            size_frame(2.0, 2.0),
            FrameBox {
                width: 2.0,
                height: 1.0
            }
        );
    }

    #[test]
    fn test_portrait_takes_full_height() {
        assert_eq!(
            size_frame(0.5, 2.0),
            FrameBox {
                width: 1.0,
                height: 2.0
            }
        );
    }

    #[test]
    fn test_square_fills_box() {
        let frame = size_frame(1.0, 3.0);
        assert_eq!(frame.width, 3.0);
        assert_eq!(frame.height, 3.0);
    }

    #[test]
    fn test_invalid_ratios_fall_back_to_square() {
        for bad in [0.0, -1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let frame = size_frame(bad, 2.0);
            assert_eq!(frame.width, 2.0, "ratio {bad}");
            assert_eq!(frame.height, 2.0, "ratio {bad}");
        }
    }

    #[test]
    fn test_invalid_max_edge_uses_default() {
        let frame = size_frame(1.0, -4.0);
        assert_eq!(frame.width, DEFAULT_MAX_EDGE);
    }

    #[test]
    fn test_frame_never_exceeds_max_edge() {
        for ar in [0.1, 0.75, 1.0, 1.333, 16.0 / 9.0, 10.0] {
            let frame = size_frame(ar, 2.0);
            assert!(frame.width <= 2.0 && frame.height <= 2.0, "ratio {ar}");
            assert!((frame.width / frame.height - ar).abs() < 1e-9, "ratio {ar}");
        }
    }

    #[test]
    fn test_normalize_missing_ratio() {
        assert_eq!(normalize_aspect_ratio(None), 1.0);
        assert_eq!(normalize_aspect_ratio(Some(1.5)), 1.5);
    }
}
