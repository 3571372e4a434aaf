//! Uniform spatial hash for water neighbor search.
//!
//! Rebuilt from scratch every step; no entry outlives one step. Cell size
//! equals the fluid interaction radius, so any two particles in range lie
//! in the same or an adjacent cell and a 3x3 block scan is a complete
//! candidate set.

use std::collections::HashMap;

use crate::rigid_body::Vec2;

use super::ParticleView;

pub struct SpatialHash {
    cell_size: f32,
    /// Cell coordinate -> indices into the particle view slice, in
    /// insertion order
    buckets: HashMap<(i32, i32), Vec<usize>>,
}

impl SpatialHash {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            buckets: HashMap::new(),
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Retarget the cell size (follows the interaction radius). Takes
    /// effect on the next rebuild; non-positive sizes are ignored.
    pub fn set_cell_size(&mut self, cell_size: f32) {
        if cell_size > 0.0 {
            self.cell_size = cell_size;
        }
    }

    /// O(n) rebuild from the active particle snapshot.
    pub fn rebuild(&mut self, particles: &[ParticleView]) {
        self.buckets.clear();
        let cell_size = self.cell_size;

        for (index, particle) in particles.iter().enumerate() {
            let key = cell_key(cell_size, particle.position);
            self.buckets.entry(key).or_default().push(index);
        }
    }

    /// Visit every particle index in the 3x3 cell block around `position`.
    ///
    /// A superset of the true neighbors within the interaction radius;
    /// callers filter by exact distance.
    pub fn for_each_candidate<F: FnMut(usize)>(&self, position: Vec2, mut f: F) {
        let (cx, cy) = cell_key(self.cell_size, position);

        for dy in -1..=1 {
            for dx in -1..=1 {
                if let Some(bucket) = self.buckets.get(&(cx + dx, cy + dy)) {
                    for &index in bucket {
                        f(index);
                    }
                }
            }
        }
    }
}

#[inline]
fn cell_key(cell_size: f32, position: Vec2) -> (i32, i32) {
    (
        (position.x / cell_size).floor() as i32,
        (position.y / cell_size).floor() as i32,
    )
}
