#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Quadcopter Physics
//!
//! The simulation layer underneath the hover-task environment.
//!
//! ## Key Components
//!
//! -   **Value types:** [`Vec3`] and [`Pose`] are small fixed-size vectors
//!     with the elementwise arithmetic and reductions the reward code needs.
//!     They are defined in the [`types`] module.
//! -   **Simulator contract:** the [`Simulator`] trait in the [`simulation`]
//!     module is everything an environment consumes: readable pose and
//!     velocity, a one-step `advance`, and `reset`.
//! -   **Reference model:** [`QuadcopterSim`] integrates a four-rotor
//!     airframe with a fixed step, terminating on a time limit or when it
//!     leaves the flight box.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{QuadcopterSim, SimParams, Simulator};
//!
//! let mut sim = QuadcopterSim::new(SimParams::default())?;
//! let done = sim.advance(&[400.0; 4]);
//! assert!(!done);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod error;
pub mod integrator;
pub mod simulation;
pub mod types;

pub use error::PhysicsError;
pub use integrator::RigidBodyState;
pub use simulation::{QuadcopterSim, SimParams, Simulator, DT};
pub use types::{Pose, Vec3};
