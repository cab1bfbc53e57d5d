use crate::config::{DistanceNormalization, TaskConfig};
use crate::env::Env;
use crate::error::TaskError;
use crate::reward::RewardShaper;
use crate::{ACTION_HIGH, ACTION_LOW, ACTION_SIZE};
use physics::{Pose, QuadcopterSim, Simulator, Vec3};

/// Environment for flying a quadcopter towards a fixed target position.
///
/// Every agent action is held for `action_repeat` simulator steps. The
/// observation stacks the pose after each of those steps, and the reward is
/// the sum of the shaped per-step rewards (see [`crate::reward`]).
pub struct HoverTask<S = QuadcopterSim> {
    sim: S,
    shaper: RewardShaper,
    action_repeat: usize,
    normalization: DistanceNormalization,
}

impl HoverTask<QuadcopterSim> {
    /// Build a task around the reference quadcopter simulator.
    ///
    /// # Errors
    ///
    /// Fails if the target, an initial state vector or the action repeat is
    /// malformed, or if the simulator rejects its parameters.
    pub fn new(config: &TaskConfig) -> Result<Self, TaskError> {
        let sim = QuadcopterSim::new(config.sim_params()?)?;
        Self::with_simulator(sim, config)
    }
}

impl<S: Simulator> HoverTask<S> {
    /// Build a task around an existing simulator.
    ///
    /// The initial-state fields of `config` are arity-checked but not applied;
    /// the simulator owns its own initial configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidTarget`], [`TaskError::InvalidActionRepeat`]
    /// or [`TaskError::Physics`] for a malformed initial state vector.
    pub fn with_simulator(sim: S, config: &TaskConfig) -> Result<Self, TaskError> {
        let target = config.target()?;
        config.sim_params()?;
        if config.action_repeat == 0 {
            return Err(TaskError::InvalidActionRepeat(config.action_repeat));
        }
        Ok(Self {
            sim,
            shaper: RewardShaper::new(target),
            action_repeat: config.action_repeat,
            normalization: config.distance_normalization,
        })
    }

    #[must_use]
    pub fn simulator(&self) -> &S {
        &self.sim
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.shaper.target()
    }

    #[must_use]
    pub fn action_repeat(&self) -> usize {
        self.action_repeat
    }

    /// `action_repeat × 6`
    #[must_use]
    pub fn state_size(&self) -> usize {
        self.action_repeat * Pose::LEN
    }

    #[must_use]
    pub fn distance_normalization(&self) -> DistanceNormalization {
        self.normalization
    }

    /// Largest L1 distance to the target observed so far.
    #[must_use]
    pub fn greatest_distance_to_target(&self) -> f32 {
        self.shaper.greatest_distance_to_target()
    }
}

impl<S: Simulator> Env for HoverTask<S> {
    type Error = TaskError;

    fn step(&mut self, action: &[f32]) -> Result<(Vec<f32>, f32, bool), TaskError> {
        let rotor_speeds: [f32; ACTION_SIZE] =
            action.try_into().map_err(|_| TaskError::InvalidAction {
                expected: ACTION_SIZE,
                actual: action.len(),
            })?;

        let mut reward = 0.0;
        let mut done = false;
        let mut pose_all = Vec::with_capacity(self.state_size());
        for sub_step in 0..self.action_repeat {
            done = self.sim.advance(&rotor_speeds);
            let pose = self.sim.pose();
            let shaped = self.shaper.shape(&pose, self.sim.velocity()).total();
            if !shaped.is_finite() {
                return Err(TaskError::NonFiniteReward { reward: shaped, sub_step });
            }
            reward += shaped;
            pose_all.extend_from_slice(pose.as_slice());

            if done && sub_step + 1 < self.action_repeat {
                tracing::debug!(
                    sub_step,
                    time = self.sim.time(),
                    "simulator terminated before the last repeat"
                );
            }
        }
        Ok((pose_all, reward, done))
    }

    fn reset(&mut self) -> Vec<f32> {
        self.sim.reset();
        if self.normalization == DistanceNormalization::PerEpisode {
            self.shaper.reset();
        }
        let pose = self.sim.pose();
        tracing::debug!(
            pose = ?pose.to_array(),
            greatest_distance = self.shaper.greatest_distance_to_target(),
            "episode reset"
        );
        pose.as_slice().repeat(self.action_repeat)
    }

    fn obs_size(&self) -> usize {
        self.state_size()
    }

    fn action_size(&self) -> usize {
        ACTION_SIZE
    }

    fn action_bounds(&self) -> (f32, f32) {
        (ACTION_LOW, ACTION_HIGH)
    }
}
