//! Reward shaping for the hover task.
//!
//! Each simulator sub-step is scored by two terms:
//!
//! - **distance** (`0..=1`): `1 - d / d_max`, where `d` is the L1 distance
//!   to the target and `d_max` the largest distance seen so far.
//! - **velocity alignment** (`0..=2`): `2 - Σ|norm(|p - t|) - norm(v)|`,
//!   rewarding velocities whose per-axis profile matches the per-axis
//!   distance still to cover.
//!
//! `norm` is min–max normalisation. A vector with no spread normalises to
//! zero, and a zero running maximum yields a relative distance of zero, so
//! neither term divides by zero. Non-finite poses or velocities still
//! produce a non-finite reward.

use physics::{Pose, Vec3};

/// Rescale components into `[0, 1]` via `(c - min) / (max - min)`.
///
/// Returns [`Vec3::ZERO`] only when all components are finite and equal.
/// Non-finite input yields non-finite output.
#[must_use]
pub fn min_max_normalize(v: Vec3) -> Vec3 {
    let min = v.min_element();
    let max = v.max_element();
    if max == min && v.is_finite() {
        return Vec3::ZERO;
    }
    let spread = max - min;
    if spread.is_finite() {
        return v.map(|c| (c - min) / spread);
    }
    // finite extremes whose difference overflows
    let half_spread = max / 2.0 - min / 2.0;
    v.map(|c| (c / 2.0 - min / 2.0) / half_spread)
}

/// Intermediate values of one shaped reward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardBreakdown {
    /// L1 distance between position and target.
    pub distance: f32,
    /// `distance / greatest_distance_to_target`
    pub relative_distance: f32,
    pub distance_reward: f32,
    /// L1 difference of the normalised distance and velocity profiles.
    pub velocity_mismatch: f32,
    pub velocity_reward: f32,
}

impl RewardBreakdown {
    #[must_use]
    pub fn total(&self) -> f32 {
        self.distance_reward + self.velocity_reward
    }
}

/// Scores poses against a fixed target, tracking the greatest distance seen.
#[derive(Clone, Debug)]
pub struct RewardShaper {
    target: Vec3,
    greatest_distance_to_target: f32,
}

impl RewardShaper {
    #[must_use]
    pub fn new(target: Vec3) -> Self {
        Self { target, greatest_distance_to_target: 0.0 }
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Running maximum of the L1 distance to the target.
    #[must_use]
    pub fn greatest_distance_to_target(&self) -> f32 {
        self.greatest_distance_to_target
    }

    /// Forget the running maximum.
    pub fn reset(&mut self) {
        self.greatest_distance_to_target = 0.0;
    }

    /// Score one sub-step and fold its distance into the running maximum.
    pub fn shape(&mut self, pose: &Pose, velocity: Vec3) -> RewardBreakdown {
        let distances = (pose.position - self.target).abs();
        let distance = distances.sum();
        if distance > self.greatest_distance_to_target {
            self.greatest_distance_to_target = distance;
        }

        // a positive distance has already raised the maximum to at least itself
        let relative_distance = if distance == 0.0 {
            0.0
        } else {
            distance / self.greatest_distance_to_target
        };
        let distance_reward = 1.0 - relative_distance;

        let velocity_mismatch =
            (min_max_normalize(distances) - min_max_normalize(velocity)).abs().sum();
        let velocity_reward = 2.0 - velocity_mismatch;

        let breakdown = RewardBreakdown {
            distance,
            relative_distance,
            distance_reward,
            velocity_mismatch,
            velocity_reward,
        };
        tracing::trace!(
            pose = ?pose.to_array(),
            velocity = ?velocity.to_array(),
            target = ?self.target.to_array(),
            relative_distance,
            velocity_mismatch,
            reward = breakdown.total(),
            "shaped reward"
        );
        breakdown
    }
}
