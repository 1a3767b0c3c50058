//! Memoized layouts keyed on the artwork list.
//!
//! A layout is pure derived data, so the key is a blake3 digest over everything that can
//! change the output: the ordered ids, their normalized aspect ratios, and the params.
//! Any change to the artwork list yields a new key; stale entries simply age out of the LRU.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;
use tracing::debug;

use crate::gallery::engine::{layout_with, GalleryLayout};
use crate::gallery::frame::normalize_aspect_ratio;
use crate::gallery::models::ArtworkDescriptor;
use crate::gallery::params::{LayoutParams, PedestalLayout};

/// Stable digest of a layout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutKey([u8; 32]);

impl LayoutKey {
    pub fn compute(artworks: &[ArtworkDescriptor], params: &LayoutParams) -> Self {
        let mut hasher = blake3::Hasher::new();

        hasher.update(&(artworks.len() as u64).to_le_bytes());
        for artwork in artworks {
            // Length prefix keeps ["ab", "c"] and ["a", "bc"] apart.
            hasher.update(&(artwork.id.len() as u64).to_le_bytes());
            hasher.update(artwork.id.as_bytes());
            let ar = normalize_aspect_ratio(Some(artwork.aspect_ratio));
            hasher.update(&ar.to_bits().to_le_bytes());
        }

        for value in [
            params.min_width,
            params.min_depth,
            params.height,
            params.wall_slot,
            params.spacing,
            params.wall_offset,
            params.eye_height,
            params.pedestal_radius,
            params.pedestal_height,
            params.frame_max_edge,
        ] {
            hasher.update(&value.to_bits().to_le_bytes());
        }
        hasher.update(match params.pedestal_layout {
            PedestalLayout::Legacy => b"legacy",
            PedestalLayout::Radial => b"radial",
        });

        LayoutKey(*hasher.finalize().as_bytes())
    }
}

impl fmt::Display for LayoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Bounded in-memory cache of computed layouts, shared across request handlers.
pub struct LayoutCache {
    entries: Mutex<LruCache<LayoutKey, Arc<GalleryLayout>>>,
}

impl LayoutCache {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(cap)),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns the cached layout for this request, computing and storing it on a miss.
    ///
    /// The layout is computed outside the lock; two racing misses compute the same value.
    pub fn get_or_compute(
        &self,
        artworks: &[ArtworkDescriptor],
        params: &LayoutParams,
    ) -> (LayoutKey, Arc<GalleryLayout>) {
        let key = LayoutKey::compute(artworks, params);

        if let Some(hit) = self.lock().get(&key) {
            debug!(%key, "Layout cache hit");
            return (key, Arc::clone(hit));
        }

        let computed = Arc::new(layout_with(artworks, params));
        self.lock().put(key, Arc::clone(&computed));
        debug!(%key, artworks = artworks.len(), "Layout cache miss");
        (key, computed)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<LayoutKey, Arc<GalleryLayout>>> {
        // Entries are immutable once inserted, so a poisoned lock still holds valid data.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_artworks(ids: &[&str]) -> Vec<ArtworkDescriptor> {
        ids.iter().map(|id| ArtworkDescriptor::new(*id, 1.0)).collect()
    }

    #[test]
    fn test_key_is_stable_and_hex() {
        let artworks = make_artworks(&["a", "b"]);
        let params = LayoutParams::default();
        let a = LayoutKey::compute(&artworks, &params);
        let b = LayoutKey::compute(&artworks, &params);
        assert_eq!(a, b);

        let hex = a.to_string();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_key_changes_with_order() {
        let params = LayoutParams::default();
        assert_ne!(
            LayoutKey::compute(&make_artworks(&["a", "b"]), &params),
            LayoutKey::compute(&make_artworks(&["b", "a"]), &params)
        );
    }

    #[test]
    fn test_key_distinguishes_id_boundaries() {
        let params = LayoutParams::default();
        assert_ne!(
            LayoutKey::compute(&make_artworks(&["ab", "c"]), &params),
            LayoutKey::compute(&make_artworks(&["a", "bc"]), &params)
        );
    }

    #[test]
    fn test_key_treats_invalid_ratio_as_square() {
        let params = LayoutParams::default();
        let square = vec![ArtworkDescriptor::new("a", 1.0)];
        let broken = vec![ArtworkDescriptor::new("a", -3.0)];
        assert_eq!(
            LayoutKey::compute(&square, &params),
            LayoutKey::compute(&broken, &params)
        );
    }

    #[test]
    fn test_key_changes_with_params() {
        let artworks = make_artworks(&["a"]);
        let radial = LayoutParams {
            pedestal_layout: PedestalLayout::Radial,
            ..LayoutParams::default()
        };
        assert_ne!(
            LayoutKey::compute(&artworks, &LayoutParams::default()),
            LayoutKey::compute(&artworks, &radial)
        );
    }

    #[test]
    fn test_cache_returns_same_arc_on_hit() {
        let cache = LayoutCache::new(4);
        let artworks = make_artworks(&["a", "b", "c"]);
        let params = LayoutParams::default();

        let (k1, first) = cache.get_or_compute(&artworks, &params);
        let (k2, second) = cache.get_or_compute(&artworks, &params);
        assert_eq!(k1, k2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_evicts_least_recent() {
        let cache = LayoutCache::new(2);
        let params = LayoutParams::default();
        let (_, first) = cache.get_or_compute(&make_artworks(&["a"]), &params);
        cache.get_or_compute(&make_artworks(&["b"]), &params);
        cache.get_or_compute(&make_artworks(&["c"]), &params);
        assert_eq!(cache.len(), 2);

        let (_, again) = cache.get_or_compute(&make_artworks(&["a"]), &params);
        assert!(!Arc::ptr_eq(&first, &again));
        assert_eq!(*first, *again);
    }

    #[test]
    fn test_zero_capacity_still_caches_one() {
        let cache = LayoutCache::new(0);
        cache.get_or_compute(&make_artworks(&["a"]), &LayoutParams::default());
        assert_eq!(cache.len(), 1);
    }
}
