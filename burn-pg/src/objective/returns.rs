/// Credits every timestep with the undiscounted return of the whole episode.
///
/// No discounting or bootstrapping: each element is the plain sum of `rewards`.
pub fn compute_returns(rewards: &[f64]) -> Vec<f64> {
    let episode_return: f64 = rewards.iter().sum();
    vec![episode_return; rewards.len()]
}
