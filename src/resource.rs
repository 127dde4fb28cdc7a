//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vehicle_collision::domain;

#[derive(Resource)]
pub struct SceneRes(domain::Scene);

impl Deref for SceneRes {
    type Target = domain::Scene;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SceneRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::Scene> for SceneRes {
    fn from(value: domain::Scene) -> Self {
        Self(value)
    }
}

/// Overlapping pairs of the scene as of the last detection.
#[derive(Resource, Default)]
pub struct IntersectionsRes(Vec<(usize, usize)>);

impl IntersectionsRes {
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.0
    }

    pub fn set_pairs(&mut self, pairs: Vec<(usize, usize)>) {
        self.0 = pairs;
    }

    pub fn involves(&self, idx: usize) -> bool {
        self.0.iter().any(|&(i, j)| i == idx || j == idx)
    }
}

/// Index of the body controlled by the keyboard.
#[derive(Resource, Default)]
pub struct SelectionRes(usize);

impl SelectionRes {
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn select_next(&mut self, len: usize) {
        self.0 = if len == 0 { 0 } else { (self.0 + 1) % len };
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

#[derive(Resource)]
pub struct RngRes(ChaCha8Rng);

impl RngRes {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Deref for RngRes {
    type Target = ChaCha8Rng;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RngRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
