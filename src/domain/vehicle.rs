//! Vehicles: bodies composed of circles, rectangles and other vehicles.

use thiserror::Error;
use tracing::debug;

use super::{Body, Bounds, Position};

/// Ordered collection of exclusively owned members, tested for overlap as one body.
///
/// A vehicle takes its members by value, so it can never contain itself. Members are appended
/// while the vehicle is assembled and only read afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    label: String,
    members: Vec<Body>,
    depth: usize,
    config: VehicleConfig,
}

impl Vehicle {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_config(label, VehicleConfig::default())
    }

    pub fn with_config(label: impl Into<String>, config: VehicleConfig) -> Self {
        Self {
            label: label.into(),
            members: vec![],
            depth: 1,
            config,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn members(&self) -> &[Body] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    /// Transfers ownership of `member` into the vehicle. The vehicle is left unchanged if the
    /// member would nest deeper than the configured maximum.
    pub fn add_member(&mut self, member: impl Into<Body>) -> Result<(), VehicleError> {
        let member = member.into();
        let depth = self.depth.max(member.depth() + 1);
        if depth > self.config.max_depth {
            return Err(VehicleError::NestingTooDeep {
                depth,
                max_depth: self.config.max_depth,
            });
        }
        debug!(vehicle = %self.label, depth, members = self.members.len() + 1, "added member");
        self.depth = depth;
        self.members.push(member);
        Ok(())
    }

    pub fn with_member(mut self, member: impl Into<Body>) -> Result<Self, VehicleError> {
        self.add_member(member)?;
        Ok(self)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.members
            .iter()
            .filter_map(Body::bounds)
            .reduce(|a, b| a.union(&b))
    }

    pub fn translated(&self, offset: Position) -> Self {
        Self {
            label: self.label.clone(),
            members: self
                .members
                .iter()
                .map(|m| m.translated(offset))
                .collect(),
            depth: self.depth,
            config: self.config.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VehicleError {
    #[error("nesting depth {depth} exceeds maximum of {max_depth}")]
    NestingTooDeep { depth: usize, max_depth: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct VehicleConfig {
    /// Maximum nesting depth. A vehicle made only of primitives has depth 1.
    pub max_depth: usize,
}

impl VehicleConfig {
    pub const fn new(max_depth: usize) -> Self {
        VehicleConfig { max_depth }
    }
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::new(64)
    }
}
