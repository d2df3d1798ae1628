use clap::Parser;

/// Shared CLI surface for the interactive REPL binary (§6).
#[derive(Clone, Debug, Parser)]
pub struct ReplOptions {
    #[arg(short, long)]
    pub rows: usize,

    #[arg(short, long)]
    pub cols: usize,

    #[arg(short = 'n', long = "aircraft")]
    pub aircraft: usize,

    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl ReplOptions {
    pub fn log_level_or_default(&self) -> String {
        self.log_level.clone().unwrap_or_else(|| "info".into())
    }
}
