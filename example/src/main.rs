use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slider_bar::{Dp, Px, PxSize, SliderConfig, ThumbId, dp};

mod app;
mod host;
mod output;
mod script;

use app::App;
use script::Script;

#[derive(Parser)]
#[command(name = "slider-bar-example")]
#[command(version, about = "Drive a slider-bar widget without a window", long_about = None)]
struct Cli {
    /// Slider configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Slider width in physical pixels
    #[arg(long, default_value_t = 210.0, global = true)]
    width: f32,
    /// Slider height in physical pixels
    #[arg(long, default_value_t = 48.0, global = true)]
    height: f32,
    /// Physical pixels per dp
    #[arg(long, default_value_t = 1.0, global = true)]
    scale: f64,
    /// Override the configured thumb size, in dp
    #[arg(long, global = true)]
    thumb_size: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Snap values onto the configured range
    Snap {
        /// Values to snap
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f32>,
    },
    /// Drag a thumb to an offset, release it and let it settle
    Drag {
        /// Thumb to drag
        #[arg(value_enum)]
        thumb: ThumbArg,
        /// Target offset of the thumb, in physical pixels
        #[arg(allow_negative_numbers = true)]
        to: f32,
    },
    /// Replay a pointer script
    Replay {
        /// Script file (TOML, `[[event]]` entries)
        script: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThumbArg {
    Min,
    Max,
}

impl From<ThumbArg> for ThumbId {
    fn from(thumb: ThumbArg) -> Self {
        match thumb {
            ThumbArg::Min => ThumbId::Min,
            ThumbArg::Max => ThumbId::Max,
        }
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,slider_bar=info,slider_bar_example=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<SliderConfig> {
    let mut config = match &cli.config {
        Some(path) => SliderConfig::load(path)
            .with_context(|| format!("failed to load `{}`", path.display()))?,
        None => SliderConfig::default(),
    };
    if let Some(thumb_size) = cli.thumb_size {
        config = config.with_thumb_size(Dp(thumb_size));
    }
    Ok(config)
}

fn report(app: &App) {
    for change in &app.readout().changes {
        output::status("Changed", format!("{} - {}", change.min, change.max));
    }
    let slider = app.slider();
    output::status(
        "Offsets",
        format!(
            "min {}px, max {}px",
            slider.thumb_offset(ThumbId::Min).to_f32(),
            slider.thumb_offset(ThumbId::Max).to_f32()
        ),
    );
    if let Some(range) = slider.snapped_range() {
        output::status("Value", format!("{} - {}", range.min, range.max));
    }
    let readout = app.readout();
    if !readout.changes.is_empty() {
        output::status("Showing", format!("{} - {}", readout.text_min, readout.text_max));
    }
    if let Some(line) = app.host().last_line() {
        output::note(format!(
            "bar drawn from {}px to {}px",
            line.start.x.to_f32(),
            line.end.x.to_f32()
        ));
    }
    output::note(format!("{} redraws requested", app.host().redraws()));
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    dp::set_scale_factor(cli.scale);

    let config = load_config(&cli)?;
    let size = PxSize::new(Px(cli.width), Px(cli.height));

    match cli.command {
        Commands::Snap { values } => {
            let snapper = config.snapper().context("invalid slider configuration")?;
            for value in values {
                output::status("Snapped", format!("{value} -> {}", snapper.snap(value)));
            }
        }
        Commands::Drag { thumb, to } => {
            let mut app = App::new(config, size)?;
            app.drag(thumb.into(), Px(to))?;
            report(&app);
        }
        Commands::Replay { script } => {
            let timeline = Script::load(&script)?.timeline()?;
            let mut app = App::new(config, size)?;
            let claimed = app.replay(&timeline);
            output::status(
                "Replayed",
                format!("{} events, {claimed} claimed", timeline.len()),
            );
            report(&app);
        }
    }

    Ok(())
}
