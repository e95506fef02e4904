use crate::model::RunSummary;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::Write;
use std::path::Path;

impl RunSummary {
    pub fn render(&self, at: DateTime<Local>) -> String {
        format!(
            "{}:\nUrl: {}, Requests: {}, Elapsed: {:.3}s, Parallelism: {}\n",
            at.to_rfc2822(),
            self.url,
            self.requests,
            self.elapsed.as_secs_f64(),
            self.parallelism
        )
    }

    /// Writes the summary line to the given file, or to stdout when no path
    /// is configured.
    pub fn write(&self, output: Option<&Path>) -> Result<()> {
        let line = self.render(Local::now());
        match output {
            Some(path) => {
                let mut file = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                file.write_all(line.as_bytes())
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            None => {
                std::io::stdout()
                    .write_all(line.as_bytes())
                    .context("failed to write to stdout")?;
            }
        }
        Ok(())
    }
}
