use burn::module::Module;
use burn::nn::Linear;
use burn::prelude::*;
use nn::{LinearConfig, Relu};

use crate::Error;

/// Layer sizes `(input size, hidden size, ..., output size)`.
#[derive(Config)]
pub struct MultiLayerPerceptronConfig {
    sizes: Vec<usize>,
}

#[derive(Module, Debug)]
pub struct MultiLayerPerceptron<B: Backend> {
    linear_layers: Vec<Linear<B>>,
    activation: Relu,
}

impl MultiLayerPerceptronConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> crate::Result<MultiLayerPerceptron<B>> {
        if self.sizes.len() < 2 {
            return Err(Error::Config(format!(
                "Unable to construct MLP. Expected (input size, hidden size, ..., output size), got {:?}",
                self.sizes
            )));
        }
        if self.sizes.contains(&0) {
            return Err(Error::Config(format!(
                "MLP layer sizes must be positive, got {:?}",
                self.sizes
            )));
        }

        let linear_layers = self
            .sizes
            .windows(2)
            .map(|pair| LinearConfig::new(pair[0], pair[1]).init(device))
            .collect();

        Ok(MultiLayerPerceptron {
            linear_layers,
            activation: Relu::new(),
        })
    }
}

impl<B: Backend> MultiLayerPerceptron<B> {
    pub fn forward<const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        let mut x = input;

        match self.linear_layers.last() {
            Some(f) => {
                for layer in self.linear_layers[..self.linear_layers.len() - 1].iter() {
                    x = layer.forward(x);
                    x = self.activation.forward(x);
                }
                f.forward(x)
            }
            None => x,
        }
    }
}
