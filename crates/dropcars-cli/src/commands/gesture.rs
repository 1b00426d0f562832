use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use dropcars_core::consts::{DEFAULT_VIEWER_HEIGHT, DEFAULT_VIEWER_WIDTH};
use dropcars_core::transform::{parse_script, ContentSize, GestureEvent, ViewportTransform};
use tracing::debug;

use crate::summary::{print_transform_header, print_transform_row};

#[derive(Args)]
pub struct GestureArgs {
    /// Gesture tokens, e.g. `pinch-begin pinch:2 pinch-end`
    pub events: Vec<String>,

    /// Read the gesture script from a file instead
    #[arg(short, long, conflicts_with = "events")]
    pub script: Option<PathBuf>,

    /// Rendered width of the image box
    #[arg(long, default_value_t = DEFAULT_VIEWER_WIDTH)]
    pub width: f32,

    /// Rendered height of the image box
    #[arg(long, default_value_t = DEFAULT_VIEWER_HEIGHT)]
    pub height: f32,
}

pub fn run(args: &GestureArgs) -> Result<()> {
    let events = load_events(args)?;
    if events.is_empty() {
        bail!("No gesture events given");
    }

    let content = ContentSize::new(args.width, args.height);
    debug!("Replaying {} events over {}x{}", events.len(), content.width(), content.height());

    let mut viewport = ViewportTransform::new(content);
    print_transform_header();
    print_transform_row(0, "start", &viewport.snapshot(), &viewport.bounds());
    for (i, event) in events.into_iter().enumerate() {
        viewport.apply(event);
        print_transform_row(i + 1, &event.to_string(), &viewport.snapshot(), &viewport.bounds());
    }
    println!();

    Ok(())
}

fn load_events(args: &GestureArgs) -> Result<Vec<GestureEvent>> {
    let script = match args.script {
        Some(ref path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => args.events.join(" "),
    };
    Ok(parse_script(&script)?)
}
