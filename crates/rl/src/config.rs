//! Task configuration.
//!
//! Every field is optional in the JSON form; missing fields fall back to the
//! defaults below. Component counts are only checked when the task is built,
//! so a config can be loaded and inspected before it is validated.

use crate::error::TaskError;
use crate::{DEFAULT_ACTION_REPEAT, DEFAULT_TARGET};
use physics::simulation::DEFAULT_RUNTIME;
use physics::{PhysicsError, Pose, SimParams, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lifetime of the running maximum used to normalise the distance reward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceNormalization {
    /// Keep the maximum across episodes for the lifetime of the task.
    #[default]
    Lifetime,
    /// Clear the maximum on every `reset`.
    PerEpisode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    /// `[x, y, z, roll, pitch, yaw]`
    pub init_pose: Option<Vec<f32>>,
    pub init_velocities: Option<Vec<f32>>,
    pub init_angle_velocities: Option<Vec<f32>>,
    /// Episode time limit in simulated seconds.
    pub runtime: f32,
    pub target_pos: Option<Vec<f32>>,
    pub action_repeat: usize,
    pub distance_normalization: DistanceNormalization,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            init_pose: None,
            init_velocities: None,
            init_angle_velocities: None,
            runtime: DEFAULT_RUNTIME,
            target_pos: None,
            action_repeat: DEFAULT_ACTION_REPEAT,
            distance_normalization: DistanceNormalization::default(),
        }
    }
}

impl TaskConfig {
    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Config`] on malformed JSON or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, TaskError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] if the file cannot be read and
    /// [`TaskError::Config`] if it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TaskError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The goal position, defaulting to `(0, 0, 10)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidTarget`] unless exactly three components
    /// were given.
    pub fn target(&self) -> Result<Vec3, TaskError> {
        match self.target_pos.as_deref() {
            None => Ok(DEFAULT_TARGET),
            Some(&[x, y, z]) => Ok(Vec3::new(x, y, z)),
            Some(other) => Err(TaskError::InvalidTarget { expected: 3, actual: other.len() }),
        }
    }

    /// Initial conditions for the reference simulator.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidDimension`] (wrapped) when an initial
    /// pose or velocity has the wrong number of components.
    pub fn sim_params(&self) -> Result<SimParams, TaskError> {
        let defaults = SimParams::default();
        let init_pose = match self.init_pose.as_deref() {
            None => defaults.init_pose,
            Some(values) => Pose::from_array(components("init_pose", values)?),
        };
        let init_velocities = match self.init_velocities.as_deref() {
            None => defaults.init_velocities,
            Some(values) => Vec3::from_array(components("init_velocities", values)?),
        };
        let init_angle_velocities = match self.init_angle_velocities.as_deref() {
            None => defaults.init_angle_velocities,
            Some(values) => Vec3::from_array(components("init_angle_velocities", values)?),
        };
        Ok(SimParams {
            init_pose,
            init_velocities,
            init_angle_velocities,
            runtime: self.runtime,
        })
    }
}

fn components<const N: usize>(field: &'static str, values: &[f32]) -> Result<[f32; N], PhysicsError> {
    values.try_into().map_err(|_| PhysicsError::InvalidDimension {
        field,
        expected: N,
        actual: values.len(),
    })
}
