use burn::tensor::{backend::Backend, Tensor};
use log::trace;
use rand::Rng;

use crate::{
    data::trajectory::{EpisodeRecord, TrajectoryStep},
    environment::Environment,
    module::{
        component::{Actor, Value},
        distribution::Categorical,
    },
    Result,
};

fn observation_tensor<B: Backend, O: Into<Vec<f64>>>(
    observation: O,
    device: &B::Device,
) -> Tensor<B, 1> {
    Tensor::from_floats(observation.into().as_slice(), device)
}

/// Plays one episode under the current policy until the environment reports
/// termination.
///
/// There is no step cap: an environment that never finishes never returns.
/// Environment and sampling errors end the episode and are returned as is.
pub fn run_episode<B, E, P, V, R>(
    env: &mut E,
    policy: &P,
    value: &V,
    rng: &mut R,
    device: &B::Device,
) -> Result<EpisodeRecord<B>>
where
    B: Backend,
    E: Environment,
    P: Actor<B>,
    V: Value<B>,
    R: Rng,
{
    let mut record = EpisodeRecord::new();
    let mut before = env.reset(None)?;
    loop {
        let observation = observation_tensor::<B, _>(before, device);
        let state_value = value.v(observation.clone());
        let (action, log_prob) =
            Categorical::from_logits(policy.logits(observation)).sample(rng)?;
        let (after, reward, done) = env.step(action)?;
        trace!("step {}: action {action}, reward {reward}", record.len());
        record.push(TrajectoryStep {
            reward,
            log_prob,
            value: state_value,
        });
        if done {
            return Ok(record);
        }
        before = after;
    }
}
