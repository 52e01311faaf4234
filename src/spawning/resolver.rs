//! Spawn placement
//!
//! Resolution order: explicit wave spawn points, then a random point in a
//! random spawn area (snapped to the navigable surface or the ground), then
//! the spawner origin when no area exists.

use glam::{Quat, Vec3};
use rand::Rng;

use super::wave::{SpawnArea, WaveDefinition};
use crate::navigation::{GroundProbe, NavigableSurface};

/// Height above a candidate point that ground probes start from
pub const GROUND_PROBE_HEIGHT: f32 = 100.0;
/// Maximum length of a ground probe
pub const GROUND_PROBE_DISTANCE: f32 = 200.0;

/// Collaborators consulted while placing spawns
#[derive(Clone, Copy)]
pub struct SpawnEnvironment<'a> {
    pub ground: &'a dyn GroundProbe,
    pub navigation: &'a dyn NavigableSurface,
}

impl<'a> SpawnEnvironment<'a> {
    pub fn new(ground: &'a dyn GroundProbe, navigation: &'a dyn NavigableSurface) -> Self {
        Self { ground, navigation }
    }
}

/// Picks positions and rotations for new spawns
#[derive(Clone, Debug, Default)]
pub struct SpawnPositionResolver {
    origin: Vec3,
    areas: Vec<SpawnArea>,
}

impl SpawnPositionResolver {
    pub fn new(origin: Vec3, areas: Vec<SpawnArea>) -> Self {
        Self { origin, areas }
    }

    pub fn areas(&self) -> &[SpawnArea] {
        &self.areas
    }

    /// Placement for the next spawn of `wave`
    pub fn resolve<R: Rng>(
        &self,
        wave: &WaveDefinition,
        rng: &mut R,
        env: &SpawnEnvironment<'_>,
    ) -> (Vec3, Quat) {
        if wave.use_specific_spawn_points && !wave.spawn_points.is_empty() {
            let pick = rng.random_range(0..wave.spawn_points.len());
            if let Some(point) = wave.spawn_points[pick] {
                return (point.position, point.rotation);
            }
            log::trace!("Spawn point {} of wave '{}' is gone, using areas", pick, wave.name);
        }

        (self.random_area_position(rng, env), Quat::IDENTITY)
    }

    /// Random point inside a random spawn area, snapped as the area requests
    pub fn random_area_position<R: Rng>(&self, rng: &mut R, env: &SpawnEnvironment<'_>) -> Vec3 {
        if self.areas.is_empty() {
            log::warn!("No spawn areas defined, spawning at origin");
            return self.origin;
        }

        let area = &self.areas[rng.random_range(0..self.areas.len())];
        let candidate = area.center + random_in_unit_sphere(rng) * area.radius;

        if area.use_nav_mesh {
            match env.navigation.sample_position(candidate, area.radius) {
                Some(hit) => {
                    let mut pos = hit;
                    if area.min_height_from_ground > 0.0 {
                        pos.y = hit.y + area.min_height_from_ground;
                    }
                    pos
                }
                None => {
                    log::warn!("No navigable position near {:?}, falling back to ground probe", candidate);
                    ground_position(candidate, area, env.ground)
                }
            }
        } else if area.min_height_from_ground > 0.0 {
            ground_position(candidate, area, env.ground)
        } else {
            candidate
        }
    }
}

/// Drop a point onto the ground, keeping it unchanged on a miss
fn ground_position(position: Vec3, area: &SpawnArea, ground: &dyn GroundProbe) -> Vec3 {
    let probe_origin = position + Vec3::Y * GROUND_PROBE_HEIGHT;
    match ground.raycast_down(probe_origin, GROUND_PROBE_DISTANCE) {
        Some(hit) => Vec3::new(position.x, hit.y + area.min_height_from_ground, position.z),
        None => position,
    }
}

/// Uniform point in the unit ball
fn random_in_unit_sphere<R: Rng>(rng: &mut R) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        if v.length_squared() <= 1.0 {
            return v;
        }
    }
}
