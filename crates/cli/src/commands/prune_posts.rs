use crate::di::{Repositories, UseCases};
use driftwood_application::ports::PruneProgress;
use driftwood_domain::{Config, PruneResult};
use sqlx::SqlitePool;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Mutex;

/// Operator-facing progress lines for an interactive prune run.
pub struct ConsoleProgress<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleProgress<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn line(&self, text: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        // Progress output is best effort; a closed stdout must not abort a prune.
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }
}

impl<W: Write + Send> PruneProgress for ConsoleProgress<W> {
    fn selecting(&self, limit: u32) {
        self.line(format_args!("Running query to find up to {} old posts...", limit));
    }

    fn candidates_found(&self, count: usize) {
        self.line(format_args!("  found {}", count));
    }

    fn excluding_replies(&self) {
        self.line(format_args!("Excluding ones with replies..."));
    }

    fn eligible(&self, count: usize) {
        self.line(format_args!("  down to {} to delete", count));
    }

    fn deleted(&self, count: u64) {
        self.line(format_args!("Deleted {} posts", count));
    }
}

/// Success only when something was actually removed.
pub fn exit_code(result: &PruneResult) -> ExitCode {
    if result.is_idle() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

pub async fn run(config: &Config, pool: SqlitePool, number: u32) -> anyhow::Result<ExitCode> {
    let repos = Repositories::new(pool);
    let use_cases = UseCases::new(&repos, &config.instance);
    let policy = config.retention.policy();

    let result = use_cases
        .prune_remote_posts
        .execute(number, &policy, &ConsoleProgress::stdout())
        .await?;

    Ok(exit_code(&result))
}
