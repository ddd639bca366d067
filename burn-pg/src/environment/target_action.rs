//! Fixed-horizon environment rewarding one particular action.
use anyhow::bail;
use burn::config::Config;

use super::{Done, Environment, Reward};

#[derive(Config)]
pub struct TargetActionConfig {
    #[config(default = 5)]
    pub horizon: usize,
    #[config(default = 2)]
    pub n_actions: usize,
    #[config(default = 1)]
    pub target: usize,
}

impl TargetActionConfig {
    pub fn init(&self) -> crate::Result<TargetAction> {
        if self.horizon == 0 {
            return Err(crate::Error::Config(
                "target-action horizon must be at least 1".to_string(),
            ));
        }
        if self.target >= self.n_actions {
            return Err(crate::Error::Config(format!(
                "target action {} outside of 0..{}",
                self.target, self.n_actions
            )));
        }
        Ok(TargetAction {
            horizon: self.horizon,
            n_actions: self.n_actions,
            target: self.target,
            remaining: self.horizon,
        })
    }
}

/// Every episode lasts exactly `horizon` steps. Choosing the target action
/// yields a reward of 1, any other action 0.
///
/// The observation is `[remaining steps / horizon, 1.0]`.
pub struct TargetAction {
    horizon: usize,
    n_actions: usize,
    target: usize,
    remaining: usize,
}

impl TargetAction {
    fn observation(&self) -> Vec<f64> {
        vec![self.remaining as f64 / self.horizon as f64, 1.0]
    }
}

impl Environment for TargetAction {
    type O = Vec<f64>;

    fn observation_size(&self) -> usize {
        2
    }

    fn n_actions(&self) -> usize {
        self.n_actions
    }

    fn reset(&mut self, _seed: Option<u64>) -> anyhow::Result<Self::O> {
        self.remaining = self.horizon;
        Ok(self.observation())
    }

    fn step(&mut self, action: usize) -> anyhow::Result<(Self::O, Reward, Done)> {
        if action >= self.n_actions {
            bail!("action {action} outside of 0..{}", self.n_actions);
        }
        if self.remaining == 0 {
            bail!("step called on a finished episode");
        }
        self.remaining -= 1;
        let reward = if action == self.target { 1.0 } else { 0.0 };
        Ok((self.observation(), reward, self.remaining == 0))
    }
}
