use burn::{prelude::Backend, tensor::Tensor};

/// Surrogate whose gradient is the negated policy-gradient estimate
/// `mean_t[grad log pi(a_t|s_t) * R_t]`.
///
/// The mean runs over every timestep in the batch, not per episode. The value
/// itself is not a predictive loss; only its gradient is meaningful.
pub fn policy_loss<B: Backend>(log_probs: Tensor<B, 1>, returns: Tensor<B, 1>) -> Tensor<B, 1> {
    (log_probs * returns).mean().neg()
}

#[cfg(test)]
mod tests {
    use burn::{
        backend::{Autodiff, NdArray},
        tensor::{ElementConversion, Tensor},
    };

    use super::policy_loss;

    #[test]
    fn test_single_timestep() {
        let device = &Default::default();
        let log_probs = Tensor::<NdArray, 1>::from_floats([-0.5], device);
        let returns = Tensor::<NdArray, 1>::from_floats([2.0], device);
        let loss: f64 = policy_loss(log_probs, returns).into_scalar().elem();
        assert!((loss - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mean_over_timesteps() {
        let device = &Default::default();
        let log_probs = Tensor::<NdArray, 1>::from_floats([-1.0, -2.0, -3.0, -4.0], device);
        let returns = Tensor::<NdArray, 1>::from_floats([1.0, 1.0, 2.0, 2.0], device);
        let loss: f64 = policy_loss(log_probs, returns).into_scalar().elem();
        // -(-1 - 2 - 6 - 8) / 4
        assert!((loss - 4.25).abs() < 1e-6);
    }

    #[test]
    fn test_gradient_sign() {
        type B = Autodiff<NdArray>;
        let device = &Default::default();
        let log_probs = Tensor::<B, 1>::from_floats([-0.5], device).require_grad();
        let returns = Tensor::<B, 1>::from_floats([2.0], device);
        let grads = policy_loss(log_probs.clone(), returns).backward();
        let grad: f64 = log_probs.grad(&grads).unwrap().into_scalar().elem();
        // Descending this gradient raises the log-probability of a positively rewarded action.
        assert!((grad + 2.0).abs() < 1e-6);
    }
}
