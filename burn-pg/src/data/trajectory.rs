use burn::tensor::{backend::Backend, Tensor};

use crate::objective::returns::compute_returns;

/// One timestep of an episode. `value` estimates the state before the action
/// was taken; both tensors stay attached to their model's autodiff graph.
pub struct TrajectoryStep<B: Backend> {
    pub reward: f64,
    pub log_prob: Tensor<B, 1>,
    pub value: Tensor<B, 1>,
}

/// Time-ordered steps of one finished episode.
pub struct EpisodeRecord<B: Backend> {
    pub steps: Vec<TrajectoryStep<B>>,
    pub episode_return: f64,
}

impl<B: Backend> EpisodeRecord<B> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            episode_return: 0.0,
        }
    }

    pub fn push(&mut self, step: TrajectoryStep<B>) {
        self.episode_return += step.reward;
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn rewards(&self) -> Vec<f64> {
        self.steps.iter().map(|step| step.reward).collect()
    }
}

impl<B: Backend> Default for EpisodeRecord<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat per-timestep data of all episodes collected during one epoch.
pub struct EpochBatch<B: Backend> {
    pub returns: Vec<f64>,
    pub log_probs: Vec<Tensor<B, 1>>,
    pub values: Vec<Tensor<B, 1>>,
    pub episode_returns: Vec<f64>,
}

impl<B: Backend> EpochBatch<B> {
    pub fn new() -> Self {
        Self {
            returns: Vec::new(),
            log_probs: Vec::new(),
            values: Vec::new(),
            episode_returns: Vec::new(),
        }
    }

    pub fn append(&mut self, episode: EpisodeRecord<B>) {
        self.returns.extend(compute_returns(&episode.rewards()));
        self.episode_returns.push(episode.episode_return);
        for step in episode.steps {
            self.log_probs.push(step.log_prob);
            self.values.push(step.value);
        }
    }

    /// Number of timesteps across all episodes.
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    pub fn n_episodes(&self) -> usize {
        self.episode_returns.len()
    }

    pub fn mean_episode_return(&self) -> f64 {
        if self.episode_returns.is_empty() {
            return 0.0;
        }
        self.episode_returns.iter().sum::<f64>() / self.episode_returns.len() as f64
    }

    /// Concatenates the batch into `(log_probs, values, returns)` tensors of length [`len`](Self::len).
    pub fn into_tensors(self, device: &B::Device) -> (Tensor<B, 1>, Tensor<B, 1>, Tensor<B, 1>) {
        let log_probs = Tensor::cat(self.log_probs, 0);
        let values = Tensor::cat(self.values, 0);
        let returns = Tensor::from_floats(self.returns.as_slice(), device);
        (log_probs, values, returns)
    }
}

impl<B: Backend> Default for EpochBatch<B> {
    fn default() -> Self {
        Self::new()
    }
}
