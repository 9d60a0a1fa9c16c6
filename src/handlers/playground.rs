//! Playground handler with TUI interface using Ratatui.

use std::io;

use anyhow::Result;
use is_terminal::IsTerminal;

use crate::catalog::CatalogEntry;
use crate::config::Config;
use crate::engine::ExecutionLimits;
use crate::tui::run_playground;

/// Launch the interactive playground, optionally preloaded with a
/// catalog entry.
pub async fn run(preload: Option<&CatalogEntry>, limits: ExecutionLimits, cfg: &Config) -> Result<()> {
    // Check if TUI mode is available
    if !io::stdout().is_terminal() {
        eprintln!("Warning: TUI mode not available in this environment. The playground requires a proper terminal.");
        eprintln!("Try running in a terminal instead of an IDE or redirected output.");
        return Err(anyhow::anyhow!("TUI mode requires a proper terminal environment"));
    }

    run_playground(preload, limits, cfg).await
}
