//! Collaborator interfaces for walkable surfaces and ground queries

use glam::Vec3;

/// External navigable-surface service (navmesh).
///
/// Construction of the surface happens outside this crate; the world only
/// asks for rebuilds around a point and snaps spawn positions onto it.
pub trait NavigableSurface {
    /// Build or rebuild the surface inside an axis-aligned box
    fn build_or_rebuild(&mut self, center: Vec3, extent: Vec3);

    /// Nearest point on the surface within `max_distance` of `point`
    fn sample_position(&self, point: Vec3, max_distance: f32) -> Option<Vec3>;
}

/// Surface that never has a walkable point. Rebuilds are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNavigation;

impl NavigableSurface for NoNavigation {
    fn build_or_rebuild(&mut self, _center: Vec3, _extent: Vec3) {}

    fn sample_position(&self, _point: Vec3, _max_distance: f32) -> Option<Vec3> {
        None
    }
}

/// Downward ground raycast
pub trait GroundProbe {
    /// Cast straight down from `origin`; returns the hit point within `max_distance`
    fn raycast_down(&self, origin: Vec3, max_distance: f32) -> Option<Vec3>;
}

/// Infinite horizontal plane at a fixed height
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatGround {
    pub height: f32,
}

impl FlatGround {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl GroundProbe for FlatGround {
    fn raycast_down(&self, origin: Vec3, max_distance: f32) -> Option<Vec3> {
        let drop = origin.y - self.height;
        if (0.0..=max_distance).contains(&drop) {
            Some(Vec3::new(origin.x, self.height, origin.z))
        } else {
            None
        }
    }
}

/// Ground probe that never hits anything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoGround;

impl GroundProbe for NoGround {
    fn raycast_down(&self, _origin: Vec3, _max_distance: f32) -> Option<Vec3> {
        None
    }
}
