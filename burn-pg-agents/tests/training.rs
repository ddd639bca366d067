use burn::{
    backend::{Autodiff, NdArray},
    optim::AdamConfig,
};
use burn_pg::{
    environment::{CartPoleConfig, TargetActionConfig},
    logging::EpochReport,
    module::nn::multi_layer_perceptron::{MultiLayerPerceptron, MultiLayerPerceptronConfig},
};
use burn_pg_agents::{
    actor_critic::{train, ActorCriticAgent, ActorCriticAgentConfig},
    on_policy::OnPolicyAlgorithmConfig,
};
use rand::{rngs::StdRng, SeedableRng};

type B = Autodiff<NdArray>;

fn run_epochs(
    policy: MultiLayerPerceptron<B>,
    value: MultiLayerPerceptron<B>,
    epochs: usize,
    seed: u64,
) -> Vec<EpochReport> {
    let agent = ActorCriticAgent::new(
        policy,
        AdamConfig::new().init(),
        1e-2,
        value,
        AdamConfig::new().init(),
        1e-2,
    );
    let env = TargetActionConfig::new().init().unwrap();
    let mut algorithm = OnPolicyAlgorithmConfig::new()
        .with_episodes_per_epoch(20)
        .init::<B, _, _, _>(env, agent, StdRng::seed_from_u64(seed), Default::default())
        .unwrap();
    let mut reports = Vec::new();
    for epoch in 0..epochs {
        let (next, report) = algorithm.run_epoch(epoch).unwrap();
        algorithm = next;
        reports.push(report);
    }
    reports
}

#[test]
fn test_seeded_epochs_are_reproducible() {
    let device = Default::default();
    let policy = MultiLayerPerceptronConfig::new(vec![2, 16, 2])
        .init::<B>(&device)
        .unwrap();
    let value = MultiLayerPerceptronConfig::new(vec![2, 16, 1])
        .init::<B>(&device)
        .unwrap();

    let first = run_epochs(policy.clone(), value.clone(), 2, 11);
    let second = run_epochs(policy, value, 2, 11);
    assert_eq!(first, second);
}

#[test]
fn test_mean_return_improves_on_target_action() {
    let agent_config = ActorCriticAgentConfig::new()
        .with_hidden_size(16)
        .with_policy_learning_rate(5e-2)
        .with_value_learning_rate(5e-2);
    let seeds = [1, 2, 3];

    let mut early = 0.0;
    let mut late = 0.0;
    for seed in seeds {
        let env = TargetActionConfig::new().init().unwrap();
        let config = OnPolicyAlgorithmConfig::new()
            .with_epochs(25)
            .with_episodes_per_epoch(32)
            .with_seed(seed);
        let summary = train::<B, _>(env, &agent_config, &config, Default::default()).unwrap();
        assert!(summary.reports.iter().all(|r| r.timesteps == 32 * 5));

        let returns: Vec<f64> = summary.reports.iter().map(|r| r.mean_return).collect();
        early += returns[..3].iter().sum::<f64>() / 3.0;
        late += returns[returns.len() - 3..].iter().sum::<f64>() / 3.0;
    }
    early /= seeds.len() as f64;
    late /= seeds.len() as f64;
    assert!(
        late > early + 0.5,
        "returns did not improve across seeds: {early:.3} -> {late:.3}"
    );
}

#[test]
fn test_cart_pole_end_to_end() {
    let config = OnPolicyAlgorithmConfig::new()
        .with_epochs(2)
        .with_episodes_per_epoch(5);
    let summary = train::<B, _>(
        CartPoleConfig::new().init(),
        &ActorCriticAgentConfig::new(),
        &config,
        Default::default(),
    )
    .unwrap();

    assert_eq!(summary.reports.len(), 2);
    for (epoch, report) in summary.reports.iter().enumerate() {
        assert_eq!(report.epoch, epoch);
        assert!((1.0..=200.0).contains(&report.mean_return));
        // One reward per step, so timesteps equal the summed returns.
        assert!((report.mean_return * 5.0 - report.timesteps as f64).abs() < 1e-9);
        assert!(report.value_loss.is_finite() && report.policy_loss.is_finite());
    }
}
