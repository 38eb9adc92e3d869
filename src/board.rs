//! Playfield geometry: the viewport and the fixed grid of spawn points.

use bevy_ecs::resource::Resource;
use glam::Vec2;

use crate::constants::{playfield, BASE_SIZE};

/// The live output size. Entities are positioned in viewport coordinates;
/// a resize rebuilds positions from the reference grid without touching
/// entity state.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: BASE_SIZE.x,
            height: BASE_SIZE.y,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Viewport { width, height }
    }

    pub fn scale_x(&self) -> f32 {
        self.width / BASE_SIZE.x
    }

    pub fn scale_y(&self) -> f32 {
        self.height / BASE_SIZE.y
    }

    /// Uniform scale factor for sizes (radii, hitboxes). The smaller axis
    /// wins so nothing overflows the viewport.
    pub fn factor(&self) -> f32 {
        self.scale_x().min(self.scale_y())
    }
}

/// One hole in the ground that entities can occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub position: Vec2,
    pub radius: f32,
}

/// The spawn grid, scaled to the current viewport. Indices are stable across
/// resizes; entities store an index, never a position.
#[derive(Resource, Debug, Clone)]
pub struct SpawnPoints {
    points: Vec<SpawnPoint>,
}

impl SpawnPoints {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let scale = Vec2::new(viewport.scale_x(), viewport.scale_y());
        let radius = playfield::SPAWN_RADIUS * viewport.factor();
        let points = playfield::SPAWN_GRID
            .iter()
            .map(|&(x, y)| SpawnPoint {
                position: Vec2::new(x, y) * scale,
                radius,
            })
            .collect();
        SpawnPoints { points }
    }

    pub fn get(&self, index: usize) -> Option<&SpawnPoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &SpawnPoint)> {
        self.points.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_reference_viewport_is_identity() {
        let viewport = Viewport::default();
        assert_eq!(viewport.scale_x(), 1.0);
        assert_eq!(viewport.scale_y(), 1.0);
        assert_eq!(viewport.factor(), 1.0);

        let points = SpawnPoints::for_viewport(&viewport);
        assert_eq!(points.len(), 20);
        assert_eq!(points.get(0).unwrap().position, Vec2::new(165.0, 75.0));
        assert_eq!(points.get(0).unwrap().radius, playfield::SPAWN_RADIUS);
    }

    #[test]
    fn test_resize_scales_positions_per_axis() {
        let viewport = Viewport::new(1920.0, 540.0);
        let points = SpawnPoints::for_viewport(&viewport);

        // x doubles, y unchanged
        assert_eq!(points.get(0).unwrap().position, Vec2::new(330.0, 75.0));
        // radius follows the smaller axis
        assert_eq!(points.get(0).unwrap().radius, playfield::SPAWN_RADIUS);
    }

    #[test]
    fn test_indices_stable_across_resizes() {
        let before = SpawnPoints::for_viewport(&Viewport::default());
        let after = SpawnPoints::for_viewport(&Viewport::new(480.0, 270.0));

        assert_eq!(before.len(), after.len());
        for (index, point) in after.iter() {
            let full_size = before.get(index).unwrap();
            assert_eq!(point.position, full_size.position * 0.5);
        }
    }
}
