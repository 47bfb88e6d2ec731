use glam::{Vec2, Vec3};
use serde::Serialize;

/// Candidate base locations, computed once at game start.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ExpansionSites {
    sites: Vec<Vec3>,
}

impl ExpansionSites {
    pub fn new(sites: Vec<Vec3>) -> Self {
        Self { sites }
    }

    pub fn all(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.sites.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Any site closer than `radius` to `point`, ignoring height
    pub fn any_within(&self, point: Vec2, radius: f32) -> bool {
        self.sites
            .iter()
            .any(|site| site.truncate().distance(point) < radius)
    }
}
