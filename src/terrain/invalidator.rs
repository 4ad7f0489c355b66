//! Dirty region tracking for heightmap edits.

use crate::math::Region;

/// Tracks which heightmap regions changed and when they were resynced.
///
/// Regions are queued by [`mark_dirty`](Self::mark_dirty) and folded into
/// the synced state by [`resync`](Self::resync), mirroring a terrain system
/// that rebuilds derived data (normals, collision, LOD) lazily.
#[derive(Debug, Default)]
pub struct HeightmapInvalidator {
    /// Regions marked dirty since the last resync
    pending: Vec<Region>,
    /// Union of the regions covered by the most recent resync
    last_synced: Option<Region>,
    /// Incremented on every mark, for cache invalidation
    generation: u32,
    /// Number of resyncs performed
    sync_count: u32,
}

impl HeightmapInvalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a region for resync and bump the generation counter.
    pub fn mark_dirty(&mut self, region: Region) {
        self.pending.push(region);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Fold all pending regions into the synced state.
    ///
    /// Returns the union of the regions that were pending, if any.
    pub fn resync(&mut self) -> Option<Region> {
        let bounds = self
            .pending
            .drain(..)
            .reduce(|acc, r| acc.merged(&r));
        self.sync_count += 1;
        if bounds.is_some() {
            self.last_synced = bounds;
        }
        bounds
    }

    /// Take pending regions without resyncing.
    pub fn take_dirty_regions(&mut self) -> Vec<Region> {
        self.pending.drain(..).collect()
    }

    pub fn has_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn sync_count(&self) -> u32 {
        self.sync_count
    }

    pub fn last_synced(&self) -> Option<Region> {
        self.last_synced
    }
}
