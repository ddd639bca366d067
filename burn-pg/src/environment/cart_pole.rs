//! Classic-control cart-pole with the `CartPole-v0` conventions.
use anyhow::bail;
use burn::config::Config;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{Done, Environment, Reward};

const GRAVITY: f64 = 9.8;
const CART_MASS: f64 = 1.0;
const POLE_MASS: f64 = 0.1;
const POLE_HALF_LENGTH: f64 = 0.5;
const FORCE_MAG: f64 = 10.0;
const TAU: f64 = 0.02;
const X_THRESHOLD: f64 = 2.4;
const THETA_THRESHOLD: f64 = 12.0 * 2.0 * std::f64::consts::PI / 360.0;
const INIT_RANGE: f64 = 0.05;

#[derive(Config)]
pub struct CartPoleConfig {
    #[config(default = 200)]
    pub max_episode_steps: usize,
}

impl CartPoleConfig {
    pub fn init(&self) -> CartPole {
        CartPole {
            state: [0.0; 4],
            elapsed_steps: 0,
            max_episode_steps: self.max_episode_steps,
            rng: StdRng::seed_from_u64(0),
        }
    }
}

/// Cart-pole observation: `[x, x_dot, theta, theta_dot]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartPoleObservation(pub [f64; 4]);

impl From<CartPoleObservation> for Vec<f64> {
    fn from(observation: CartPoleObservation) -> Self {
        observation.0.to_vec()
    }
}

/// Action 0 pushes the cart left, action 1 pushes it right. Every step,
/// including the one that ends the episode, yields a reward of 1.
pub struct CartPole {
    state: [f64; 4],
    elapsed_steps: usize,
    max_episode_steps: usize,
    rng: StdRng,
}

impl CartPole {
    fn terminated(&self) -> bool {
        let [x, _, theta, _] = self.state;
        x.abs() > X_THRESHOLD || theta.abs() > THETA_THRESHOLD
    }
}

impl Environment for CartPole {
    type O = CartPoleObservation;

    fn observation_size(&self) -> usize {
        4
    }

    fn n_actions(&self) -> usize {
        2
    }

    fn reset(&mut self, seed: Option<u64>) -> anyhow::Result<Self::O> {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        for value in self.state.iter_mut() {
            *value = self.rng.gen_range(-INIT_RANGE..INIT_RANGE);
        }
        self.elapsed_steps = 0;
        Ok(CartPoleObservation(self.state))
    }

    fn step(&mut self, action: usize) -> anyhow::Result<(Self::O, Reward, Done)> {
        let force = match action {
            0 => -FORCE_MAG,
            1 => FORCE_MAG,
            _ => bail!("cart-pole action must be 0 or 1, got {action}"),
        };

        let [x, x_dot, theta, theta_dot] = self.state;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let total_mass = CART_MASS + POLE_MASS;
        let pole_mass_length = POLE_MASS * POLE_HALF_LENGTH;

        let temp = (force + pole_mass_length * theta_dot * theta_dot * sin_theta) / total_mass;
        let theta_acc = (GRAVITY * sin_theta - cos_theta * temp)
            / (POLE_HALF_LENGTH * (4.0 / 3.0 - POLE_MASS * cos_theta * cos_theta / total_mass));
        let x_acc = temp - pole_mass_length * theta_acc * cos_theta / total_mass;

        // Explicit Euler, position updated from the previous velocity.
        self.state = [
            x + TAU * x_dot,
            x_dot + TAU * x_acc,
            theta + TAU * theta_dot,
            theta_dot + TAU * theta_acc,
        ];
        self.elapsed_steps += 1;

        let done = self.terminated() || self.elapsed_steps >= self.max_episode_steps;
        Ok((CartPoleObservation(self.state), 1.0, done))
    }
}
