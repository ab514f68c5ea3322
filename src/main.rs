//! Terminal calculator backed by a remote evaluation service.

use anyhow::{Context, Result};
use clap::Parser;
use keypad::console::{parse_line, tape_summary, ConsoleInput};
use keypad::effects::{Calculator, HttpEvaluationService, ServiceEnv};
use keypad::logging::init_logging;
use keypad::screen::{Screen, WriterScreen};
use keypad::Config;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const DEFAULT_CONFIG_FILE: &str = "keypad.toml";
const DISPLAY_WIDTH: usize = 24;

#[derive(Debug, Parser)]
#[command(name = "keypad", version, about = "Calculator that delegates arithmetic to an evaluation service")]
struct Args {
    /// Config file (defaults to ./keypad.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Evaluation service endpoint.
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Per-request timeout in milliseconds.
    #[arg(long = "timeout-ms", value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Config::load(DEFAULT_CONFIG_FILE)?,
        None => Config::default(),
    };
    if let Some(url) = &args.url {
        config.service.url = url.clone();
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.service.timeout_ms = timeout_ms;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args).context("loading configuration")?;
    init_logging(&config.log.filter, args.verbose);

    let service = HttpEvaluationService::new(&config.service)
        .context("building evaluation client")?;
    info!(url = service.url(), "Using evaluation service");
    let env = ServiceEnv::new(Arc::new(service));

    let mut calculator = Calculator::new();
    let mut screen = WriterScreen::new(std::io::stdout(), DISPLAY_WIDTH);
    screen.render(&calculator.state().view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading input")? {
        let inputs = match parse_line(&line) {
            Ok(inputs) => inputs,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        for input in inputs {
            match input {
                ConsoleInput::Event(event) => {
                    let result = calculator.dispatch(event, &env, &mut screen).await;
                    debug!(%event, ?result, "Handled input");
                }
                ConsoleInput::History => {
                    println!("{}", tape_summary(calculator.tape()));
                    for calculation in calculator.tape().calculations() {
                        println!("{calculation}");
                    }
                }
                ConsoleInput::Quit => return Ok(()),
            }
        }
    }

    Ok(())
}
