pub mod rollout;
pub mod trajectory;

pub use rollout::run_episode;
pub use trajectory::{EpisodeRecord, EpochBatch, TrajectoryStep};
