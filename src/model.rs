use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub url: String,
    pub output: Option<PathBuf>,
    pub delay: Duration,
    pub requests: u64,
    pub parallelism: usize,
}

impl Config {
    /// Never run more workers than there are requests to send.
    pub fn clamped(mut self) -> Self {
        let cap = usize::try_from(self.requests).unwrap_or(usize::MAX);
        self.parallelism = self.parallelism.min(cap);
        self
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub url: String,
    pub requests: u64,
    pub elapsed: Duration,
    pub parallelism: usize,
}
