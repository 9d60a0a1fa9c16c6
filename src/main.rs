use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use std::io::{self, Read};

use jslab::{catalog, cli, config::Config, handlers};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Cli::parse();
    let cfg = Config::load();

    // Sandbox budgets: CLI overrides config, config overrides defaults
    let limits = args.apply_limit_overrides(cfg.execution_limits());

    // stdin handling (pipe support)
    let mut source_from_stdin = String::new();
    let stdin_is_tty = io::stdin().is_terminal();
    if !stdin_is_tty {
        io::stdin().read_to_string(&mut source_from_stdin)?;
    }

    // Markdown preference for theory topics
    let md = if args.no_md {
        false
    } else if args.md {
        true
    } else {
        cfg.get_bool("PRETTIFY_MARKDOWN")
    };

    // Catalog shortcuts
    if let Some(section) = &args.list {
        return handlers::catalog::list(section, args.json);
    }
    if let Some(track) = &args.topics {
        return handlers::catalog::topics(track, args.json);
    }
    if let Some(id) = &args.show {
        return handlers::catalog::show(id, md, args.json, cfg.default_color());
    }
    if let Some(id) = &args.check {
        return handlers::catalog::check(id, limits, args.json).await;
    }
    if let Some(id) = &args.open {
        let Some((_, entry)) = catalog::find_entry(id) else {
            bail!("no catalog entry with id '{}'", id);
        };
        return handlers::playground::run(Some(entry), limits, &cfg).await;
    }

    // Resolve the snippet source: stdin, file, or positional argument
    let source = if !source_from_stdin.trim().is_empty() {
        if args.snippet.is_some() || args.file.is_some() {
            bail!("piped input cannot be combined with a snippet argument or --file");
        }
        source_from_stdin
    } else if let Some(path) = &args.file {
        jslab::utils::read_source(path)?
    } else if let Some(snippet) = args.snippet.clone() {
        snippet
    } else {
        // No input at all: open the playground when on a terminal
        return handlers::playground::run(None, limits, &cfg).await;
    };

    handlers::run::run(source, limits, args.json).await
}
