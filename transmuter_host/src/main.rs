//! Standalone host driver.
//!
//! Usage:
//!   cargo run -p transmuter_host -- [--config-dir config]
//!
//! Stands in for the game loader: initializes the mod runtime once, loads
//! the settings, and exposes them through a small interactive console so
//! they can be inspected, edited, and saved without booting the game.
//!
//! Console commands:
//!   show              - Print current settings
//!   set <key> <value> - Change a setting in memory
//!   save              - Write settings back to disk
//!   help              - List commands
//!   quit              - Exit

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use tracing::info;
use transmuter_shared::prelude::*;

fn parse_args() -> String {
    let mut config_dir = "config".to_string();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config-dir" if i + 1 < args.len() => {
                config_dir = args[i + 1].clone();
                i += 2;
            }
            _ => i += 1,
        }
    }
    config_dir
}

fn show(config: &ModConfig) {
    println!(
        "  enabled = {} (default: {})",
        config.enabled.get(),
        config.enabled.default_value()
    );
    println!(
        "  conversion-rate = {} (default: {}, range: {}..={})",
        config.conversion_rate.get(),
        config.conversion_rate.default_value(),
        config.conversion_rate.minimum().unwrap_or(f64::MIN),
        config.conversion_rate.maximum().unwrap_or(f64::MAX),
    );
}

/// Executes one console line. Returns `false` when the driver should exit.
fn exec(runtime: &mut ModRuntime, line: &str) -> anyhow::Result<bool> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&cmd, args)) = tokens.split_first() else {
        return Ok(true);
    };

    match cmd {
        "show" => show(runtime.config().get()),
        "set" => {
            if args.len() != 2 {
                bail!("usage: set <key> <value>");
            }
            let config = runtime.config().get();
            match args[0] {
                "enabled" => {
                    let value = args[1].parse().context("expected true or false")?;
                    config.enabled.set(value);
                    println!("enabled = {}", config.enabled.get());
                }
                "conversion-rate" => {
                    let value = args[1].parse().context("expected a number")?;
                    config.conversion_rate.set(value);
                    // Echo the stored value; it may have been clamped.
                    println!("conversion-rate = {}", config.conversion_rate.get());
                }
                other => bail!("unknown setting: {other}"),
            }
        }
        "save" => {
            runtime.config().save();
            println!("Settings saved.");
        }
        "help" => {
            println!("Available commands: show, set <key> <value>, save, help, quit");
        }
        "quit" | "exit" => return Ok(false),
        other => println!("Unknown command: {other}"),
    }

    Ok(true)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config_dir = parse_args();
    info!(%config_dir, "Starting host driver");

    let mut runtime = ModRuntime::initialize(config_dir.as_str());

    let config = runtime.config().get();
    info!(
        enabled = config.enabled.get(),
        conversion_rate = config.conversion_rate.get(),
        "Settings loaded"
    );

    println!("Mod '{MOD_NAME}' ready. Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("] ");
        let _ = stdout.flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("read stdin")? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match exec(&mut runtime, line) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("Error: {e}"),
        }
    }

    Ok(())
}
