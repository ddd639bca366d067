use anyhow::bail;
use gym_rs::core::Env;

use super::{Done, Environment, Reward};

/// Adapts a `gym_rs` environment with discrete `usize` actions.
///
/// `gym_rs` environments carry no episode limit of their own, so an optional
/// step limit truncates the episode the way gym's `TimeLimit` wrapper does.
pub struct GymEnvironment<T: Env> {
    env: T,
    observation_size: usize,
    n_actions: usize,
    max_episode_steps: Option<usize>,
    elapsed_steps: usize,
}

impl<T: Env> GymEnvironment<T> {
    pub fn from(env: T, observation_size: usize, n_actions: usize) -> Self {
        GymEnvironment {
            env,
            observation_size,
            n_actions,
            max_episode_steps: None,
            elapsed_steps: 0,
        }
    }

    pub fn with_max_episode_steps(mut self, max_episode_steps: usize) -> Self {
        self.max_episode_steps = Some(max_episode_steps);
        self
    }
}

impl<T> Environment for GymEnvironment<T>
where
    T: Env<Action = usize>,
    T::Observation: Clone + Into<Vec<f64>>,
{
    type O = T::Observation;

    fn observation_size(&self) -> usize {
        self.observation_size
    }

    fn n_actions(&self) -> usize {
        self.n_actions
    }

    fn reset(&mut self, seed: Option<u64>) -> anyhow::Result<Self::O> {
        self.elapsed_steps = 0;
        let (obs, _) = self.env.reset(seed, false, None);
        Ok(obs)
    }

    fn step(&mut self, action: usize) -> anyhow::Result<(Self::O, Reward, Done)> {
        if action >= self.n_actions {
            bail!("action {action} outside of 0..{}", self.n_actions);
        }
        let action_reward = self.env.step(action);
        self.elapsed_steps += 1;
        let truncated = self
            .max_episode_steps
            .is_some_and(|limit| self.elapsed_steps >= limit);
        Ok((
            action_reward.observation,
            *action_reward.reward.as_ref(),
            action_reward.done || truncated,
        ))
    }
}

/// CartPole from `gym_rs`, limited to 200 steps like `CartPole-v0`.
pub fn cart_pole() -> GymEnvironment<gym_rs::envs::classical_control::cartpole::CartPoleEnv> {
    use gym_rs::{envs::classical_control::cartpole::CartPoleEnv, utils::renderer::RenderMode};

    GymEnvironment::from(CartPoleEnv::new(RenderMode::None), 4, 2).with_max_episode_steps(200)
}
