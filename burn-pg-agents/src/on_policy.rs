use std::marker::PhantomData;

use burn::config::Config;
use burn::tensor::backend::AutodiffBackend;
use burn_pg::{
    data::{run_episode, EpochBatch},
    environment::Environment,
    logging::EpochReport,
    module::component::{Actor, Value},
    Error,
};
use log::{debug, info};
use rand::Rng;
use tqdm::tqdm;

/// Learns from episodes sampled under its own current policy.
pub trait OnPolicyAgent<B: AutodiffBackend>: Sized {
    type PolicyModel: Actor<B>;
    type ValueModel: Value<B>;

    fn policy(&self) -> &Self::PolicyModel;

    fn value(&self) -> &Self::ValueModel;

    /// Applies one parameter update from a full epoch of experience.
    fn update(self, batch: EpochBatch<B>) -> burn_pg::Result<(Self, UpdateStatistics)>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateStatistics {
    pub policy_loss: f64,
    pub value_loss: f64,
    pub timesteps: usize,
}

#[derive(Config)]
pub struct OnPolicyAlgorithmConfig {
    #[config(default = 30)]
    pub epochs: usize,
    #[config(default = 200)]
    pub episodes_per_epoch: usize,
    #[config(default = 0)]
    pub seed: u64,
    #[config(default = false)]
    pub progress_bar: bool,
}

pub struct OnPolicyAlgorithm<B, E, A, R>
where
    B: AutodiffBackend,
    E: Environment,
    A: OnPolicyAgent<B>,
    R: Rng,
{
    cfg: OnPolicyAlgorithmConfig,
    env: E,
    agent: A,
    rng: R,
    device: B::Device,
    _phantom: PhantomData<B>,
}

/// Final agent of a training run with one report per epoch.
pub struct TrainingSummary<A> {
    pub agent: A,
    pub reports: Vec<EpochReport>,
}

impl OnPolicyAlgorithmConfig {
    pub fn init<B, E, A, R>(
        &self,
        env: E,
        agent: A,
        rng: R,
        device: B::Device,
    ) -> burn_pg::Result<OnPolicyAlgorithm<B, E, A, R>>
    where
        B: AutodiffBackend,
        E: Environment,
        A: OnPolicyAgent<B>,
        R: Rng,
    {
        if self.episodes_per_epoch == 0 {
            return Err(Error::Config(
                "an epoch needs at least one episode".to_string(),
            ));
        }
        Ok(OnPolicyAlgorithm {
            cfg: self.clone(),
            env,
            agent,
            rng,
            device,
            _phantom: Default::default(),
        })
    }
}

impl<B, E, A, R> OnPolicyAlgorithm<B, E, A, R>
where
    B: AutodiffBackend,
    E: Environment,
    A: OnPolicyAgent<B>,
    R: Rng,
{
    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Samples `episodes_per_epoch` episodes with the current parameters, then
    /// updates the critic and the actor once from the whole batch.
    ///
    /// A failing episode or update fails the epoch.
    pub fn run_epoch(mut self, epoch: usize) -> burn_pg::Result<(Self, EpochReport)> {
        let n_episodes = self.cfg.episodes_per_epoch;
        let episodes: Box<dyn Iterator<Item = usize>> = if self.cfg.progress_bar {
            Box::new(tqdm(0..n_episodes))
        } else {
            Box::new(0..n_episodes)
        };

        let mut batch = EpochBatch::new();
        for episode in episodes {
            let record = run_episode::<B, _, _, _, _>(
                &mut self.env,
                self.agent.policy(),
                self.agent.value(),
                &mut self.rng,
                &self.device,
            )?;
            debug!(
                "epoch {epoch} episode {episode}: {} steps, return {:.3}",
                record.len(),
                record.episode_return
            );
            batch.append(record);
        }

        let mean_return = batch.mean_episode_return();
        let (agent, statistics) = self.agent.update(batch)?;
        self.agent = agent;

        let report = EpochReport {
            epoch,
            mean_return,
            timesteps: statistics.timesteps,
            policy_loss: statistics.policy_loss,
            value_loss: statistics.value_loss,
        };
        Ok((self, report))
    }

    /// Seeds the environment, then runs every configured epoch in order.
    pub fn train(mut self) -> burn_pg::Result<TrainingSummary<A>> {
        // Environment seeding
        self.env.reset(Some(self.cfg.seed))?;

        let mut reports = Vec::with_capacity(self.cfg.epochs);
        let mut algorithm = self;
        for epoch in 0..algorithm.cfg.epochs {
            let (next, report) = algorithm.run_epoch(epoch)?;
            algorithm = next;
            println!("{report}");
            info!(
                "epoch {epoch}: {} timesteps, policy loss {:.4}, value loss {:.4}",
                report.timesteps, report.policy_loss, report.value_loss
            );
            reports.push(report);
        }

        Ok(TrainingSummary {
            agent: algorithm.agent,
            reports,
        })
    }
}
