//! Tickbox demo
//!
//! Builds the demo screen, replays scripted taps on every checkbox and
//! renders the result into a recording canvas.

use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tickbox_core::{DrawCommand, RecordingContext};
use tickbox_platform::{NativeBridge, NativeHaptics, NativeValue, HAPTICS_NAMESPACE};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod screen;

use config::DemoConfig;
use screen::{Screen, Target};

#[derive(Parser)]
#[command(name = "tickbox-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tickbox checkbox demo screen", long_about = None)]
struct Cli {
    /// Appearance overrides (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Taps to replay on each checkbox
    #[arg(short, long, default_value = "1")]
    taps: u32,

    /// Disable haptic feedback on every checkbox
    #[arg(long)]
    no_haptics: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if cli.no_haptics {
        config.checkbox1.haptics = Some(false);
        config.checkbox2.haptics = Some(false);
        config.labeled.appearance.haptics = Some(false);
    }

    install_desktop_haptics()?;

    let mut screen = Screen::new(&config, Rc::new(NativeHaptics::global()))
        .context("Failed to build the demo screen")?;

    for round in 1..=cli.taps {
        for target in Target::ALL {
            let center = screen.target_center(target);
            let handled = screen.tap(center);
            debug!(round, target = target.name(), handled, "tap");
        }
    }

    let mut ctx = RecordingContext::new(screen.viewport());
    screen.render(&mut ctx);
    print_summary(&screen, &ctx);

    Ok(())
}

/// Route the bridge's haptic calls to the log; desktops have no motor
fn install_desktop_haptics() -> Result<()> {
    let bridge = Arc::new(NativeBridge::new());
    for name in ["prepare", "impact"] {
        bridge.register(HAPTICS_NAMESPACE, name, move |args| {
            let style = args.first().and_then(NativeValue::as_str).unwrap_or("light");
            debug!("haptics.{}({})", name, style);
            Ok(NativeValue::Void)
        });
    }
    NativeBridge::install_global(bridge).context("Failed to install the native bridge")?;
    Ok(())
}

fn print_summary(screen: &Screen, ctx: &RecordingContext) {
    for target in Target::ALL {
        info!("{}: checked = {}", target.name(), screen.is_checked(target));
    }
    info!(
        "{} delegate notifications",
        screen.delegate().notifications()
    );

    let commands = ctx.commands();
    let text = commands
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::DrawText { .. }))
        .count();
    info!(
        "Rendered {} draw commands ({} fills, {} strokes, {} text runs)",
        commands.len(),
        ctx.fills().count(),
        ctx.strokes().count(),
        text
    );
}
