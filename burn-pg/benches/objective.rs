use burn::backend::wgpu::WgpuDevice;
use burn::backend::{Autodiff, NdArray, Wgpu};
use burn::tensor::backend::AutodiffBackend;
use burn::tensor::{Device, Distribution, Tensor};
use burn_pg::{
    module::{
        component::{Actor, Value},
        distribution::Categorical,
        nn::multi_layer_perceptron::{MultiLayerPerceptron, MultiLayerPerceptronConfig},
    },
    objective::{policy_loss, value_loss},
};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn prepare_epoch_data<B: AutodiffBackend>(
    device: &Device<B>,
    timesteps: usize,
) -> (Tensor<B, 1>, Tensor<B, 1>, Tensor<B, 1>) {
    let log_probs = Tensor::random([timesteps], Distribution::Uniform(-2.0, 0.0), device);
    let values = Tensor::random([timesteps], Distribution::Default, device);
    let returns = Tensor::random([timesteps], Distribution::Uniform(0.0, 200.0), device);
    (log_probs, values, returns)
}

fn losses_fn<B: AutodiffBackend>(log_probs: &Tensor<B, 1>, values: &Tensor<B, 1>, returns: &Tensor<B, 1>) {
    let value = value_loss(values.clone(), returns.clone());
    let policy = policy_loss(log_probs.clone(), returns.clone());
    let _ = value.backward();
    let _ = policy.backward();
}

fn sample_fn<B: AutodiffBackend>(
    policy: &MultiLayerPerceptron<B>,
    value: &MultiLayerPerceptron<B>,
    observation: &Tensor<B, 1>,
    rng: &mut StdRng,
) {
    let _ = value.v(observation.clone());
    let _ = Categorical::from_logits(policy.logits(observation.clone())).sample(rng);
}

pub fn objective_benchmark(c: &mut Criterion) {
    // NdArray
    type B1 = Autodiff<NdArray>;
    let device: &Device<B1> = &Default::default();
    let (log_probs, values, returns) = prepare_epoch_data(device, 4_000);

    c.bench_function("losses ndarray", |b| {
        b.iter(|| losses_fn(&log_probs.clone().require_grad(), &values.clone().require_grad(), &returns))
    });

    // Wgpu
    type B2 = Autodiff<Wgpu>;
    let device: &Device<B2> = &WgpuDevice::BestAvailable;
    let (log_probs, values, returns) = prepare_epoch_data(device, 4_000);

    c.bench_function("losses wgpu", |b| {
        b.iter(|| losses_fn(&log_probs.clone().require_grad(), &values.clone().require_grad(), &returns))
    });
}

pub fn sampler_benchmark(c: &mut Criterion) {
    type B = Autodiff<NdArray>;
    let device: &Device<B> = &Default::default();
    let policy = MultiLayerPerceptronConfig::new(vec![4, 32, 2])
        .init::<B>(device)
        .expect("valid policy sizes");
    let value = MultiLayerPerceptronConfig::new(vec![4, 32, 1])
        .init::<B>(device)
        .expect("valid value sizes");
    let observation = Tensor::<B, 1>::from_floats([0.01, -0.02, 0.03, 0.0], device);
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("actor-critic step ndarray", |b| {
        b.iter(|| sample_fn(&policy, &value, &observation, &mut rng))
    });
}

criterion_group!(benches, objective_benchmark, sampler_benchmark);
criterion_main!(benches);
