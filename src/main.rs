use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use notion_shape::config::Config;
use notion_shape::host::{self, HostOptions};
use notion_shape::{Pipeline, TransformContext, TransformationRegistry};

#[derive(Parser)]
#[command(name = "notion-shape", about = "Apply Notion record transformations to a JSON lines stream")]
struct Cli {
    /// Log at debug level to stderr (overrides RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file layered over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transform records of one stream, one JSON object per line.
    Run {
        /// Stream whose pipeline to apply (users, pages, databases, blocks, comments).
        #[arg(long)]
        stream: String,
        /// Read records from this file instead of stdin.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Stream state passed to every step, as JSON.
        #[arg(long)]
        state: Option<String>,
    },
    /// Show configured streams and registered transformations.
    List,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let registry = TransformationRegistry::builtin();

    match cli.command {
        Command::Run { stream, input, state } => {
            let pipeline = Pipeline::for_stream(&config, &registry, &stream)?;

            let mut ctx = TransformContext::default();
            if let Some(raw) = state {
                let state = serde_json::from_str(&raw).context("parsing --state as JSON")?;
                ctx = ctx.with_stream_state(state);
            }

            let options = HostOptions::from(&config.host);
            let stdout = BufWriter::new(io::stdout().lock());
            let summary = match input {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("opening {}", path.display()))?;
                    host::process_lines(BufReader::new(file), stdout, &pipeline, &ctx, options)?
                }
                None => host::process_lines(io::stdin().lock(), stdout, &pipeline, &ctx, options)?,
            };
            if summary.skipped > 0 {
                tracing::warn!(skipped = summary.skipped, "some records were skipped");
            }
        }
        Command::List => {
            for (name, stream) in &config.streams {
                if stream.transformations.is_empty() {
                    println!("{name}: (no transformations)");
                } else {
                    println!("{name}: {}", stream.transformations.join(", "));
                }
            }
            println!();
            println!("registered: {}", registry.names().join(", "));
        }
    }

    Ok(())
}
