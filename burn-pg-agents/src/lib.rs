pub mod actor_critic;
pub mod on_policy;
