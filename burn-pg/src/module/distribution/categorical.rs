use burn::tensor::{backend::Backend, Tensor};
use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};

use crate::{Error, Result};

/// Categorical distribution over a discrete action set, parameterized by logits.
///
/// Normalization happens here: the largest logit is subtracted before
/// exponentiating, so equal logits of any magnitude give a uniform
/// distribution. Log-probabilities stay attached to the logits' autodiff graph.
pub struct Categorical<B: Backend> {
    log_probs: Tensor<B, 1>,
}

impl<B: Backend> Categorical<B> {
    pub fn from_logits(logits: Tensor<B, 1>) -> Self {
        let max = logits.clone().detach().max_dim(0);
        let shifted = logits - max;
        let log_normalizer = shifted.clone().exp().sum_dim(0).log();
        Self {
            log_probs: shifted - log_normalizer,
        }
    }

    pub fn n_actions(&self) -> usize {
        self.log_probs.dims()[0]
    }

    pub fn probabilities(&self) -> Result<Vec<f64>> {
        let probs: Vec<f64> = self
            .log_probs
            .clone()
            .detach()
            .exp()
            .into_data()
            .iter::<f64>()
            .collect();
        if probs.iter().any(|p| !p.is_finite()) {
            return Err(Error::Distribution(format!(
                "non-finite action probabilities {probs:?}"
            )));
        }
        Ok(probs)
    }

    /// Log-probability of `action` as a single-element tensor.
    pub fn log_prob(&self, action: usize) -> Result<Tensor<B, 1>> {
        let n_actions = self.n_actions();
        if action >= n_actions {
            return Err(Error::Distribution(format!(
                "action {action} outside of 0..{n_actions}"
            )));
        }
        Ok(self.log_probs.clone().slice([action..action + 1]))
    }

    /// Draws an action proportionally to its probability.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<(usize, Tensor<B, 1>)> {
        let probs = self.probabilities()?;
        let index = WeightedIndex::new(&probs).map_err(|e| Error::Distribution(e.to_string()))?;
        let action = index.sample(rng);
        Ok((action, self.log_prob(action)?))
    }
}
