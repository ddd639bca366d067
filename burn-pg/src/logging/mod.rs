use std::fmt;

/// Outcome of one training epoch.
///
/// `Display` renders the one-line progress report printed after each epoch,
/// e.g. `epoch   0 	 return: 23.400`.
#[derive(Clone, Debug, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    pub mean_return: f64,
    pub timesteps: usize,
    pub policy_loss: f64,
    pub value_loss: f64,
}

impl fmt::Display for EpochReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "epoch {:>3} \t return: {:.3}", self.epoch, self.mean_return)
    }
}
