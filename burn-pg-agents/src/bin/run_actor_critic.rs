use burn::backend::{Autodiff, NdArray};
use burn_pg::environment::{CartPoleConfig, TargetActionConfig};
use burn_pg_agents::{
    actor_critic::{train, ActorCriticAgentConfig},
    on_policy::OnPolicyAlgorithmConfig,
};
use clap::{Parser, ValueEnum};
use log::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EnvironmentKind {
    /// Native cart-pole with a 200 step limit.
    CartPole,
    /// Five-step episodes rewarding action 1.
    TargetAction,
    /// Cart-pole from `gym_rs`.
    #[cfg(feature = "gym-rs")]
    GymCartPole,
}

/// Trains a Monte-Carlo actor-critic agent and prints the mean return of every epoch.
#[derive(Parser, Debug)]
struct Args {
    /// Number of training epochs.
    #[arg(default_value_t = 30)]
    epochs: usize,
    #[arg(long, default_value_t = 200)]
    episodes_per_epoch: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 32)]
    hidden_size: usize,
    /// Adam learning rate for both the policy and the value network.
    #[arg(long, default_value_t = 1e-2)]
    learning_rate: f64,
    #[arg(long, value_enum, default_value_t = EnvironmentKind::CartPole)]
    env: EnvironmentKind,
    /// Show a progress bar over the episodes of each epoch.
    #[arg(long)]
    progress: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    type B = Autodiff<NdArray>;
    let device = Default::default();

    let agent_config = ActorCriticAgentConfig::new()
        .with_hidden_size(args.hidden_size)
        .with_policy_learning_rate(args.learning_rate)
        .with_value_learning_rate(args.learning_rate);
    let config = OnPolicyAlgorithmConfig::new()
        .with_epochs(args.epochs)
        .with_episodes_per_epoch(args.episodes_per_epoch)
        .with_seed(args.seed)
        .with_progress_bar(args.progress);

    info!("Running actor-critic agent on {:?}", args.env);
    let reports = match args.env {
        EnvironmentKind::CartPole => {
            train::<B, _>(CartPoleConfig::new().init(), &agent_config, &config, device)?.reports
        }
        EnvironmentKind::TargetAction => train::<B, _>(
            TargetActionConfig::new().init()?,
            &agent_config,
            &config,
            device,
        )?
        .reports,
        #[cfg(feature = "gym-rs")]
        EnvironmentKind::GymCartPole => {
            train::<B, _>(burn_pg::environment::gym_rs::cart_pole(), &agent_config, &config, device)?
                .reports
        }
    };

    if let Some(last) = reports.last() {
        info!("final mean return {:.3}", last.mean_return);
    }
    Ok(())
}
