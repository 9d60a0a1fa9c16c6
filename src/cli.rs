use clap::{ArgGroup, Parser};

use crate::engine::ExecutionLimits;

#[derive(Parser, Debug, Clone)]
#[command(name = "jslab", about = "JavaScript study lab in the terminal", version)]
#[command(group(ArgGroup::new("mode").args(["file", "list", "show", "check", "open", "topics"]).multiple(false)))]
#[command(group(ArgGroup::new("md_switch").args(["md", "no_md"]).multiple(false)))]
pub struct Cli {
    /// A JavaScript snippet to run directly.
    #[arg(value_name = "SNIPPET")]
    pub snippet: Option<String>,

    /// Run a snippet file (.js, .mjs, .txt).
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// List a catalog section (polyfills|hooks|questions|templates|all).
    #[arg(short = 'l', long, value_name = "SECTION")]
    pub list: Option<String>,

    /// Show a catalog entry or theory topic by id.
    #[arg(long, value_name = "ID")]
    pub show: Option<String>,

    /// Run a catalog entry and compare against its expected output.
    #[arg(long, value_name = "ID")]
    pub check: Option<String>,

    /// Open the playground preloaded with a catalog entry.
    #[arg(long, value_name = "ID")]
    pub open: Option<String>,

    /// List theory topics (javascript|react|all).
    #[arg(long, value_name = "TRACK")]
    pub topics: Option<String>,

    /// Emit results as JSON instead of colored text.
    #[arg(long)]
    pub json: bool,

    /// Prettify Markdown output when showing theory topics.
    #[arg(long)]
    pub md: bool,
    /// Disable Markdown prettifying.
    #[arg(long = "no-md")]
    pub no_md: bool,

    /// Override the sandbox loop-iteration budget.
    #[arg(long = "loop-limit", value_name = "N")]
    pub loop_limit: Option<u64>,

    /// Override the sandbox recursion-depth budget.
    #[arg(long = "recursion-limit", value_name = "N")]
    pub recursion_limit: Option<usize>,

    /// Override the sandbox timer-cascade budget.
    #[arg(long = "timer-limit", value_name = "N")]
    pub timer_limit: Option<usize>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Sandbox budgets with the CLI override flags applied on top of the
    /// given base. Every evaluation route, the playground included, runs
    /// with the result.
    pub fn apply_limit_overrides(&self, mut limits: ExecutionLimits) -> ExecutionLimits {
        if let Some(v) = self.loop_limit {
            limits.loop_iterations = v;
        }
        if let Some(v) = self.recursion_limit {
            limits.recursion_depth = v;
        }
        if let Some(v) = self.timer_limit {
            limits.timer_cascade = v;
        }
        limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_flags_override_the_base_budgets() {
        let cli = <Cli as Parser>::try_parse_from([
            "jslab",
            "--open",
            "blank",
            "--loop-limit",
            "7",
            "--timer-limit",
            "3",
        ])
        .unwrap();
        let limits = cli.apply_limit_overrides(ExecutionLimits::default());
        assert_eq!(limits.loop_iterations, 7);
        assert_eq!(limits.timer_cascade, 3);
        assert_eq!(limits.recursion_depth, ExecutionLimits::default().recursion_depth);
    }
}
