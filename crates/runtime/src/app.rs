//! # Episode Loop
//!
//! Drives a [`HoverTask`] through whole episodes. The policy is a seeded
//! uniform sampler over the advisory rotor-speed bounds, so two runs with
//! the same seed and config produce identical episodes.

use anyhow::Result;
use physics::Simulator;
use rl::{Env, HoverTask, TaskConfig, ACTION_SIZE};
use serde::Serialize;

pub struct RunOptions {
    pub config: TaskConfig,
    pub episodes: usize,
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episode: usize,
    pub steps: usize,
    pub total_reward: f32,
    pub final_pose: [f32; 6],
    pub sim_time: f32,
    pub greatest_distance: f32,
}

/// Uniform random rotor speeds within `[low, high]`.
pub struct RandomPolicy {
    rng: fastrand::Rng,
    low: f32,
    high: f32,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64, (low, high): (f32, f32)) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed), low, high }
    }

    pub fn act(&mut self) -> [f32; ACTION_SIZE] {
        std::array::from_fn(|_| self.low + self.rng.f32() * (self.high - self.low))
    }
}

/// Run one episode from reset until the simulator reports termination.
///
/// # Errors
///
/// Propagates any [`rl::TaskError`] raised by a step.
pub fn run_episode<S: Simulator>(
    task: &mut HoverTask<S>,
    policy: &mut RandomPolicy,
    episode: usize,
) -> Result<EpisodeSummary> {
    task.reset();
    let mut steps = 0;
    let mut total_reward = 0.0;
    loop {
        let action = policy.act();
        let (_obs, reward, done) = task.step(&action)?;
        total_reward += reward;
        steps += 1;
        if done {
            break;
        }
    }

    let sim = task.simulator();
    Ok(EpisodeSummary {
        episode,
        steps,
        total_reward,
        final_pose: sim.pose().to_array(),
        sim_time: sim.time(),
        greatest_distance: task.greatest_distance_to_target(),
    })
}

/// Run the configured number of episodes on a fresh task.
///
/// # Errors
///
/// Returns an error if the config is invalid or an episode fails.
pub fn run(options: &RunOptions) -> Result<Vec<EpisodeSummary>> {
    let mut task = HoverTask::new(&options.config)?;
    let mut policy = RandomPolicy::new(options.seed, task.action_bounds());

    tracing::info!(
        goal = ?task.target().to_array(),
        action_repeat = task.action_repeat(),
        state_size = task.state_size(),
        episodes = options.episodes,
        "starting hover task"
    );

    let mut summaries = Vec::with_capacity(options.episodes);
    for episode in 0..options.episodes {
        let summary = run_episode(&mut task, &mut policy, episode)?;
        tracing::info!(
            episode,
            steps = summary.steps,
            total_reward = summary.total_reward,
            final_position = ?&summary.final_pose[..3],
            "episode finished"
        );
        summaries.push(summary);
    }
    Ok(summaries)
}
