pub mod policy_gradient;
pub mod returns;
pub mod value;

pub use policy_gradient::policy_loss;
pub use returns::compute_returns;
pub use value::value_loss;
