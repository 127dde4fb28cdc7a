//! Scene with many bodies, queried pairwise.

use tracing::{instrument, trace};

use super::{Body, Bounds, HasCollision, Position};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    bodies: Vec<Body>,
}

impl Scene {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, idx: usize) -> Option<&Body> {
        self.bodies.get(idx)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Appends a body and returns its index.
    pub fn push(&mut self, body: impl Into<Body>) -> usize {
        self.bodies.push(body.into());
        self.bodies.len() - 1
    }

    /// All pairs `(i, j)` with `i < j` whose bodies overlap, in lexicographic order.
    ///
    /// Every pair is tested, so this is quadratic in the number of bodies.
    #[instrument(level = "trace", skip_all, fields(bodies = self.bodies.len()))]
    pub fn intersections(&self) -> Vec<(usize, usize)> {
        let result = self
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, body)| {
                self.bodies[i + 1..]
                    .iter()
                    .enumerate()
                    .filter(move |(_, other)| body.has_collision(*other))
                    .map(move |(offset, _)| (i, i + 1 + offset))
            })
            .collect::<Vec<_>>();
        trace!(pairs = result.len(), "computed intersections");
        result
    }

    /// Indices of all other bodies overlapping the body at `idx`.
    pub fn colliding_with(&self, idx: usize) -> Vec<usize> {
        let Some(body) = self.bodies.get(idx) else {
            return vec![];
        };
        self.bodies
            .iter()
            .enumerate()
            .filter(|(i, other)| *i != idx && body.has_collision(*other))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_collision(&self, object: &dyn HasCollision) -> bool {
        self.bodies.iter().any(|b| b.has_collision(object))
    }

    pub fn set_body(&mut self, idx: usize, body: impl Into<Body>) {
        if let Some(b) = self.bodies.get_mut(idx) {
            *b = body.into();
        }
    }

    pub fn translate_body(&mut self, idx: usize, offset: Position) {
        if let Some(b) = self.bodies.get_mut(idx) {
            *b = b.translated(offset);
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bodies
            .iter()
            .filter_map(Body::bounds)
            .reduce(|a, b| a.union(&b))
    }
}
