//! Monte-Carlo actor-critic policy gradient building blocks on top of burn.
//!
//! The crate provides the environment abstraction, the function approximator
//! traits, the categorical action sampler, episode rollout, and the objectives
//! used to update a policy (actor) and a state-value estimate (critic).

pub mod data;
pub mod environment;
pub mod error;
pub mod logging;
pub mod module;
pub mod objective;

pub use error::{Error, Result};
