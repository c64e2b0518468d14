use std::io::{self, Write};

use anyhow::{Context, Result};
use argh::FromArgs;
use sashi::app::{launch_config, run_session};
use sashi::core::Settings;
use sashi::render::{render_ruler, RecordingSurface};
use sashi_ipc::RulerConfig;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_TEXT_HEIGHT: i32 = 16;

/// Sashi - on-screen pixel ruler
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Session(SessionCmd),
    Config(ConfigCmd),
    Menu(MenuCmd),
    Render(RenderCmd),
    Version(VersionCmd),
}

/// Run a headless ruler: JSON events on stdin, JSON host calls on stdout
#[derive(FromArgs)]
#[argh(subcommand, name = "session")]
struct SessionCmd {
    /// label font line height in pixels
    #[argh(option, default = "DEFAULT_TEXT_HEIGHT")]
    text_height: i32,
    /// launch parameters: x y width height vertical top-most locked opacity tooltip
    #[argh(positional, greedy)]
    params: Vec<String>,
}

/// Decode launch parameters and print the resulting config
#[derive(FromArgs)]
#[argh(subcommand, name = "config")]
struct ConfigCmd {
    /// fail instead of falling back to defaults on bad parameters
    #[argh(switch)]
    strict: bool,
    /// launch parameters
    #[argh(positional, greedy)]
    params: Vec<String>,
}

/// Print the context menu for the given launch parameters
#[derive(FromArgs)]
#[argh(subcommand, name = "menu")]
struct MenuCmd {
    /// launch parameters
    #[argh(positional, greedy)]
    params: Vec<String>,
}

/// Render the ruler and print its draw operations, one per line
#[derive(FromArgs)]
#[argh(subcommand, name = "render")]
struct RenderCmd {
    /// label font line height in pixels
    #[argh(option, default = "DEFAULT_TEXT_HEIGHT")]
    text_height: i32,
    /// launch parameters
    #[argh(positional, greedy)]
    params: Vec<String>,
}

/// Show version information
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    // stdout carries JSON, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match cli.command {
        None => {
            // No subcommand - show help (simulate --help)
            let args: Vec<&str> = vec!["sashi", "--help"];
            if let Err(e) = Cli::from_args(&args[..1], &args[1..]) {
                println!("{}", e.output);
            }
            Ok(())
        }
        Some(SubCommand::Session(cmd)) => {
            tracing::info!("sashi {} session starting", VERSION);
            let stdin = io::stdin();
            run_session(
                stdin.lock(),
                io::stdout(),
                launch_config(&cmd.params),
                Settings::default(),
                cmd.text_height,
            )?;
            Ok(())
        }
        Some(SubCommand::Config(cmd)) => {
            let config = if cmd.strict && !cmd.params.is_empty() {
                RulerConfig::from_params(&cmd.params).context("invalid launch parameters")?
            } else {
                launch_config(&cmd.params)
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Some(SubCommand::Menu(cmd)) => {
            let menu = sashi_ipc::build_menu(&launch_config(&cmd.params));
            println!("{}", serde_json::to_string_pretty(&menu)?);
            Ok(())
        }
        Some(SubCommand::Render(cmd)) => {
            let config = launch_config(&cmd.params);
            let mut surface = RecordingSurface::new(cmd.text_height);
            render_ruler(&mut surface, &config);

            let stdout = io::stdout();
            let mut out = stdout.lock();
            for op in surface.ops() {
                serde_json::to_writer(&mut out, op)?;
                writeln!(out)?;
            }
            Ok(())
        }
        Some(SubCommand::Version(_)) => {
            println!("sashi {}", VERSION);
            Ok(())
        }
    }
}
