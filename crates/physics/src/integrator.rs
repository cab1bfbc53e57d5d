//! # Quadcopter Integration
//!
//! Rotor thrust model and the semi-implicit Euler step used by
//! [`crate::QuadcopterSim`]. Rotors are laid out in a `+` configuration:
//! index 0 sits on +x, 1 on +y, 2 on -x and 3 on -y. Rotors 0 and 2 spin
//! opposite to rotors 1 and 3.

use crate::types::{Pose, Vec3};
use std::f32::consts::TAU;

pub const GRAVITY: Vec3 = Vec3::new(0.0, 0.0, -9.81);
/// Airframe mass in kg.
pub const MASS: f32 = 0.958;
/// Thrust per squared rotor speed. Four rotors at ~400 balance gravity.
pub const THRUST_COEFFICIENT: f32 = 1.47e-5;
/// Distance from the centre of mass to each rotor hub (m).
pub const ARM_LENGTH: f32 = 0.17;
/// Reaction torque produced per newton of rotor thrust.
pub const YAW_MOMENT_RATIO: f32 = 0.016;
/// Diagonal of the inertia tensor (kg m²).
pub const INERTIA: Vec3 = Vec3::new(0.0112, 0.0112, 0.0194);
/// Linear drag coefficient (N s / m).
pub const LINEAR_DRAG: f32 = 0.1;
/// Per-step damping applied to angular rates.
const ANGULAR_DAMPING: f32 = 0.995;

/// Mutable kinematic state advanced by [`integrate`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RigidBodyState {
    pub pose: Pose,
    pub velocity: Vec3,
    /// Euler-angle rates (rad/s).
    pub angular_velocity: Vec3,
}

/// Thrust of each rotor. Negative speeds produce reverse thrust.
#[must_use]
pub fn rotor_thrusts(rotor_speeds: &[f32; 4]) -> [f32; 4] {
    rotor_speeds.map(|s| THRUST_COEFFICIENT * s * s.abs())
}

/// Body-frame torques produced by the given rotor thrusts.
#[must_use]
pub fn body_torques(thrusts: &[f32; 4]) -> Vec3 {
    Vec3::new(
        ARM_LENGTH * (thrusts[1] - thrusts[3]),
        ARM_LENGTH * (thrusts[2] - thrusts[0]),
        YAW_MOMENT_RATIO * (thrusts[0] - thrusts[1] + thrusts[2] - thrusts[3]),
    )
}

/// Rotates a body-z thrust of magnitude `thrust` into the world frame using
/// Z-Y-X Euler angles.
#[must_use]
pub fn thrust_to_world(thrust: f32, angles: Vec3) -> Vec3 {
    let (sin_roll, cos_roll) = angles.x.sin_cos();
    let (sin_pitch, cos_pitch) = angles.y.sin_cos();
    let (sin_yaw, cos_yaw) = angles.z.sin_cos();
    Vec3::new(
        cos_yaw * sin_pitch * cos_roll + sin_yaw * sin_roll,
        sin_yaw * sin_pitch * cos_roll - cos_yaw * sin_roll,
        cos_pitch * cos_roll,
    ) * thrust
}

/// Advance `state` by `dt` seconds under the given rotor speeds.
pub fn integrate(state: &mut RigidBodyState, rotor_speeds: &[f32; 4], dt: f32) {
    let thrusts = rotor_thrusts(rotor_speeds);
    let total_thrust: f32 = thrusts.iter().sum();

    let force = thrust_to_world(total_thrust, state.pose.angles) + state.velocity * -LINEAR_DRAG;
    let acceleration = force * (1.0 / MASS) + GRAVITY;
    state.velocity += acceleration * dt;
    state.pose.position += state.velocity * dt;

    let torque = body_torques(&thrusts);
    let angular_acceleration = Vec3::new(
        torque.x / INERTIA.x,
        torque.y / INERTIA.y,
        torque.z / INERTIA.z,
    );
    state.angular_velocity += angular_acceleration * dt;
    state.angular_velocity *= ANGULAR_DAMPING;
    state.pose.angles = (state.pose.angles + state.angular_velocity * dt).map(|a| a.rem_euclid(TAU));
}
