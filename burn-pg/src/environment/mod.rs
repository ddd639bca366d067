pub type Reward = f64;
pub type Done = bool;

/// A discrete-action environment stepped one action at a time.
///
/// Observations are fixed-length numeric vectors of length
/// [`observation_size`](Environment::observation_size), actions are indices in
/// `0..n_actions()`.
pub trait Environment {
    type O: Clone + Into<Vec<f64>>;

    fn observation_size(&self) -> usize;

    fn n_actions(&self) -> usize;

    /// Starts a new episode. `Some(seed)` reseeds the environment's own random source.
    fn reset(&mut self, seed: Option<u64>) -> anyhow::Result<Self::O>;

    fn step(&mut self, action: usize) -> anyhow::Result<(Self::O, Reward, Done)>;
}

pub mod cart_pole;
#[cfg(feature = "gym-rs")]
pub mod gym_rs;
pub mod target_action;

pub use cart_pole::{CartPole, CartPoleConfig};
pub use target_action::{TargetAction, TargetActionConfig};
