use burn::{prelude::Backend, tensor::Tensor};

use crate::module::nn::multi_layer_perceptron::MultiLayerPerceptron;

/// Maps one observation to unnormalized per-action scores (logits).
pub trait Actor<B: Backend> {
    fn logits(&self, observation: Tensor<B, 1>) -> Tensor<B, 1>;
}

/// Maps one observation to a single-element state-value estimate.
pub trait Value<B: Backend> {
    fn v(&self, observation: Tensor<B, 1>) -> Tensor<B, 1>;
}

impl<B: Backend> Actor<B> for MultiLayerPerceptron<B> {
    fn logits(&self, observation: Tensor<B, 1>) -> Tensor<B, 1> {
        self.forward(observation)
    }
}

impl<B: Backend> Value<B> for MultiLayerPerceptron<B> {
    fn v(&self, observation: Tensor<B, 1>) -> Tensor<B, 1> {
        self.forward(observation)
    }
}
