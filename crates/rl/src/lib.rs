#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Hover Task Environment
//!
//! Turns a rotor-driven flight [`physics::Simulator`] into a fixed-horizon
//! reinforcement learning environment.
//!
//! [`HoverTask`] holds each agent action for several simulator steps,
//! stacks the resulting poses into one observation and scores every step
//! with the shaped reward from [`reward`]. Configuration lives in
//! [`TaskConfig`], which can also be read from JSON.
//!
//! ```rust
//! use rl::{Env, HoverTask, TaskConfig};
//!
//! let mut task = HoverTask::new(&TaskConfig::default())?;
//! let obs = task.reset();
//! assert_eq!(obs.len(), 18);
//! let (obs, reward, _done) = task.step(&[400.0; 4])?;
//! assert_eq!(obs.len(), 18);
//! assert!(reward.is_finite());
//! # Ok::<(), rl::TaskError>(())
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod reward;
pub mod task;

use physics::Vec3;

pub use config::{DistanceNormalization, TaskConfig};
pub use env::Env;
pub use error::TaskError;
pub use reward::{min_max_normalize, RewardBreakdown, RewardShaper};
pub use task::HoverTask;

/// Rotor speeds per action.
pub const ACTION_SIZE: usize = 4;
pub const ACTION_LOW: f32 = 0.0;
pub const ACTION_HIGH: f32 = 900.0;
pub const DEFAULT_ACTION_REPEAT: usize = 3;
pub const DEFAULT_TARGET: Vec3 = Vec3::new(0.0, 0.0, 10.0);
