use std::marker::PhantomData;

use burn::{
    config::Config,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    tensor::{backend::AutodiffBackend, ElementConversion},
};
use burn_pg::{
    data::EpochBatch,
    environment::Environment,
    module::{
        component::{Actor, Value},
        nn::multi_layer_perceptron::{MultiLayerPerceptron, MultiLayerPerceptronConfig},
    },
    objective::{policy_loss, value_loss},
    Error,
};
use log::trace;
use rand::{rngs::StdRng, SeedableRng};

use crate::on_policy::{OnPolicyAgent, OnPolicyAlgorithmConfig, TrainingSummary, UpdateStatistics};

#[derive(Config)]
pub struct ActorCriticAgentConfig {
    #[config(default = 32)]
    pub hidden_size: usize,
    #[config(default = 1e-2)]
    pub policy_learning_rate: f64,
    #[config(default = 1e-2)]
    pub value_learning_rate: f64,
}

impl ActorCriticAgentConfig {
    /// Builds a policy MLP `[observation, hidden, actions]` and a value MLP
    /// `[observation, hidden, 1]` for `env`, each with its own Adam optimizer.
    #[allow(clippy::type_complexity)]
    pub fn init<B, E>(
        &self,
        env: &E,
        device: &B::Device,
    ) -> burn_pg::Result<
        ActorCriticAgent<
            B,
            MultiLayerPerceptron<B>,
            MultiLayerPerceptron<B>,
            impl Optimizer<MultiLayerPerceptron<B>, B>,
            impl Optimizer<MultiLayerPerceptron<B>, B>,
        >,
    >
    where
        B: AutodiffBackend,
        E: Environment,
    {
        let observation_size = env.observation_size();
        let policy = MultiLayerPerceptronConfig::new(vec![
            observation_size,
            self.hidden_size,
            env.n_actions(),
        ])
        .init(device)?;
        let value =
            MultiLayerPerceptronConfig::new(vec![observation_size, self.hidden_size, 1]).init(device)?;

        Ok(ActorCriticAgent::new(
            policy,
            AdamConfig::new().init(),
            self.policy_learning_rate,
            value,
            AdamConfig::new().init(),
            self.value_learning_rate,
        ))
    }
}

/// Separate actor and critic networks, each owned together with its optimizer.
pub struct ActorCriticAgent<B, P, V, PO, VO>
where
    B: AutodiffBackend,
    P: AutodiffModule<B> + Actor<B>,
    V: AutodiffModule<B> + Value<B>,
    PO: Optimizer<P, B>,
    VO: Optimizer<V, B>,
{
    policy: P,
    policy_optim: PO,
    policy_learning_rate: f64,
    value: V,
    value_optim: VO,
    value_learning_rate: f64,
    _phantom: PhantomData<B>,
}

impl<B, P, V, PO, VO> ActorCriticAgent<B, P, V, PO, VO>
where
    B: AutodiffBackend,
    P: AutodiffModule<B> + Actor<B>,
    V: AutodiffModule<B> + Value<B>,
    PO: Optimizer<P, B>,
    VO: Optimizer<V, B>,
{
    pub fn new(
        policy: P,
        policy_optim: PO,
        policy_learning_rate: f64,
        value: V,
        value_optim: VO,
        value_learning_rate: f64,
    ) -> Self {
        Self {
            policy,
            policy_optim,
            policy_learning_rate,
            value,
            value_optim,
            value_learning_rate,
            _phantom: Default::default(),
        }
    }
}

fn finite(name: &'static str, value: f64) -> burn_pg::Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteLoss { name, value })
    }
}

impl<B, P, V, PO, VO> OnPolicyAgent<B> for ActorCriticAgent<B, P, V, PO, VO>
where
    B: AutodiffBackend,
    P: AutodiffModule<B> + Actor<B>,
    V: AutodiffModule<B> + Value<B>,
    PO: Optimizer<P, B>,
    VO: Optimizer<V, B>,
{
    type PolicyModel = P;
    type ValueModel = V;

    fn policy(&self) -> &P {
        &self.policy
    }

    fn value(&self) -> &V {
        &self.value
    }

    fn update(mut self, batch: EpochBatch<B>) -> burn_pg::Result<(Self, UpdateStatistics)> {
        let Some(device) = batch.log_probs.first().map(|log_prob| log_prob.device()) else {
            return Err(Error::Config(
                "cannot update from an epoch without timesteps".to_string(),
            ));
        };
        let timesteps = batch.len();
        let (log_probs, values, returns) = batch.into_tensors(&device);
        let [n_log_probs] = log_probs.dims();
        let [n_values] = values.dims();
        if n_log_probs != timesteps || n_values != timesteps {
            return Err(Error::Config(format!(
                "expected one log-probability and one value per timestep, got {n_log_probs} and {n_values} for {timesteps} timesteps"
            )));
        }

        let policy_loss = policy_loss(log_probs, returns.clone());
        let value_loss = value_loss(values, returns);
        let policy_loss_value = finite("policy", policy_loss.clone().into_scalar().elem())?;
        let value_loss_value = finite("value", value_loss.clone().into_scalar().elem())?;
        trace!("policy loss {policy_loss_value}, value loss {value_loss_value} over {timesteps} timesteps");

        // Critic first, then actor. Each gradient set only holds its own
        // model's parameters and is consumed by that model's optimizer step.
        let grads = value_loss.backward();
        let grads = GradientsParams::from_grads(grads, &self.value);
        self.value = self.value_optim.step(self.value_learning_rate, self.value, grads);

        let grads = policy_loss.backward();
        let grads = GradientsParams::from_grads(grads, &self.policy);
        self.policy = self
            .policy_optim
            .step(self.policy_learning_rate, self.policy, grads);

        Ok((
            self,
            UpdateStatistics {
                policy_loss: policy_loss_value,
                value_loss: value_loss_value,
                timesteps,
            },
        ))
    }
}

/// Trains a fresh actor-critic agent on `env`.
///
/// Model initialization is seeded through the backend and action sampling
/// through a [`StdRng`], both from `config.seed`. One report line is printed
/// per epoch.
pub fn train<B, E>(
    env: E,
    agent_config: &ActorCriticAgentConfig,
    config: &OnPolicyAlgorithmConfig,
    device: B::Device,
) -> burn_pg::Result<TrainingSummary<impl OnPolicyAgent<B>>>
where
    B: AutodiffBackend,
    E: Environment,
{
    B::seed(config.seed);
    let agent = agent_config.init::<B, E>(&env, &device)?;
    let rng = StdRng::seed_from_u64(config.seed);
    config.init::<B, E, _, _>(env, agent, rng, device)?.train()
}
