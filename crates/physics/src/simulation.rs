//! # Physics Simulation Core
//!
//! This module defines the [`Simulator`] contract consumed by higher-level
//! environments and [`QuadcopterSim`], a small quadcopter model that
//! satisfies it. The simulator owns the ground-truth kinematic state and
//! advances it one fixed time step per call.

use crate::error::PhysicsError;
use crate::integrator::{integrate, RigidBodyState};
use crate::types::{Pose, Vec3};

/// Fixed simulation time step (s).
pub const DT: f32 = 1.0 / 50.0;
pub const DEFAULT_RUNTIME: f32 = 5.0;
/// Lower corner of the flight box. The ground sits at `z = 0`.
pub const LOWER_BOUNDS: Vec3 = Vec3::new(-150.0, -150.0, 0.0);
pub const UPPER_BOUNDS: Vec3 = Vec3::new(150.0, 150.0, 300.0);

/// A rigid-body flight simulator driven by four rotor-speed commands.
pub trait Simulator {
    /// Current position and Euler angles.
    fn pose(&self) -> Pose;

    /// Current linear velocity.
    fn velocity(&self) -> Vec3;

    /// Current Euler-angle rates.
    fn angular_velocity(&self) -> Vec3;

    /// Simulated time elapsed since the last reset.
    fn time(&self) -> f32;

    /// Advance one time step. Returns `true` once the episode has ended.
    fn advance(&mut self, rotor_speeds: &[f32; 4]) -> bool;

    /// Restore the initial configuration.
    fn reset(&mut self);
}

/// Initial conditions for a [`QuadcopterSim`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimParams {
    pub init_pose: Pose,
    pub init_velocities: Vec3,
    pub init_angle_velocities: Vec3,
    /// Episode time limit (s).
    pub runtime: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            init_pose: Pose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO),
            init_velocities: Vec3::ZERO,
            init_angle_velocities: Vec3::ZERO,
            runtime: DEFAULT_RUNTIME,
        }
    }
}

/// Quadcopter simulator integrated with a fixed step of [`DT`].
///
/// An episode ends when the elapsed time exceeds the configured runtime or
/// the airframe leaves the flight box. Leaving the box clamps the position
/// to the boundary it crossed.
#[derive(Clone, Debug)]
pub struct QuadcopterSim {
    params: SimParams,
    state: RigidBodyState,
    time: f32,
    done: bool,
}

impl QuadcopterSim {
    /// Create a simulator in its initial configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidParameter`] if the runtime is not a
    /// positive finite number or the initial state contains non-finite values.
    pub fn new(params: SimParams) -> Result<Self, PhysicsError> {
        if !(params.runtime.is_finite() && params.runtime > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "runtime must be positive, got {}",
                params.runtime
            )));
        }
        let initial = [
            params.init_pose.position,
            params.init_pose.angles,
            params.init_velocities,
            params.init_angle_velocities,
        ];
        if !initial.iter().all(|v| v.is_finite()) {
            return Err(PhysicsError::InvalidParameter(
                "initial state must be finite".to_string(),
            ));
        }

        let mut sim = Self {
            params,
            state: RigidBodyState::default(),
            time: 0.0,
            done: false,
        };
        sim.reset();
        Ok(sim)
    }

    /// Whether the most recent step ended the episode.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Clamp the position into the flight box. Returns `true` if it was outside.
    fn enforce_bounds(&mut self) -> bool {
        let pos = self.state.pose.position.to_array();
        let lower = LOWER_BOUNDS.to_array();
        let upper = UPPER_BOUNDS.to_array();
        let clamped: [f32; 3] = std::array::from_fn(|i| pos[i].clamp(lower[i], upper[i]));
        if clamped == pos {
            return false;
        }
        tracing::debug!(position = ?pos, time = self.time, "quadcopter left the flight box");
        self.state.pose.position = Vec3::from_array(clamped);
        true
    }
}

impl Simulator for QuadcopterSim {
    fn pose(&self) -> Pose {
        self.state.pose
    }

    fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    fn angular_velocity(&self) -> Vec3 {
        self.state.angular_velocity
    }

    fn time(&self) -> f32 {
        self.time
    }

    fn advance(&mut self, rotor_speeds: &[f32; 4]) -> bool {
        integrate(&mut self.state, rotor_speeds, DT);
        self.time += DT;

        let out_of_bounds = self.enforce_bounds();
        self.done = out_of_bounds || self.time > self.params.runtime;
        self.done
    }

    fn reset(&mut self) {
        self.state = RigidBodyState {
            pose: self.params.init_pose,
            velocity: self.params.init_velocities,
            angular_velocity: self.params.init_angle_velocities,
        };
        self.time = 0.0;
        self.done = false;
    }
}
