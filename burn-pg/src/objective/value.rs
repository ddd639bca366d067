use burn::{
    nn::loss::{MseLoss, Reduction},
    prelude::Backend,
    tensor::Tensor,
};

/// Mean squared error between the state-value estimates and their return targets.
pub fn value_loss<B: Backend>(values: Tensor<B, 1>, returns: Tensor<B, 1>) -> Tensor<B, 1> {
    MseLoss::new().forward(values, returns, Reduction::Mean)
}
