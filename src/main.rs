use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use lumina_canvas::draw::CairoContext;
use lumina_canvas::input::DrawingSurface;
use lumina_canvas::{Config, script, ui};
use std::io;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LUMINA_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "lumina-canvas")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Replay drawing gestures against a diagram surface"
)]
struct Cli {
    /// Gesture script to replay (reads stdin when omitted)
    #[arg(long, short = 's', value_name = "PATH")]
    script: Option<PathBuf>,

    /// Tool selected before the script starts
    #[arg(long, short = 't', value_name = "ID", default_value = "select")]
    tool: String,

    /// Config file (defaults to ~/.config/lumina/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the tool palette and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_tools: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list_tools {
        for line in ui::tool_palette() {
            println!("{line}");
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let (source, source_name) = match &cli.script {
        Some(path) => (
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?,
            path.display().to_string(),
        ),
        None => (
            io::read_to_string(io::stdin()).context("Failed to read script from stdin")?,
            "<stdin>".to_string(),
        ),
    };
    let commands = script::parse(&source)
        .with_context(|| format!("Invalid gesture script {source_name}"))?;

    let width = i32::try_from(config.canvas.width).context("Canvas width out of range")?;
    let height = i32::try_from(config.canvas.height).context("Canvas height out of range")?;
    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create canvas surface")?;
    let ctx = cairo::Context::new(&image).context("Failed to create cairo context")?;

    let mut surface = DrawingSurface::from_config(CairoContext::new(ctx), &config)
        .context("Invalid keybindings in config")?;
    surface.set_tool(&cli.tool);
    surface.set_content_listener(|has_content| {
        log::info!("Content changed: {has_content}");
        println!("content changed: {has_content}");
    });

    log::info!(
        "Replaying {} command(s) on a {}x{} canvas",
        commands.len(),
        width,
        height
    );
    script::run(&commands, &mut surface);

    for element in surface.elements() {
        println!("{element}");
    }
    println!("{}", ui::surface_status(&surface));

    Ok(())
}
