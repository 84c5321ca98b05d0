//! Ringmark command-line entry point.
//!
//! Loads a scene file, replays its color and size events (plus any given on
//! the command line) and writes the resulting ring markers as SVG.

use clap::Parser;
use ringmark_core::{Scene, SceneError, SceneEvent, render, replay};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ringmark")]
#[command(about = "Replay color and size changes over ring markers and print SVG")]
#[command(version)]
struct Cli {
    /// Scene JSON file
    scene: PathBuf,

    /// Color picker change (#RRGGBB), applied after the scene's own events
    #[arg(long)]
    color: Option<String>,

    /// Size slider changes, applied in order after the color
    #[arg(long = "size", value_name = "VALUE", allow_negative_numbers = true)]
    sizes: Vec<i32>,

    /// Skip the events stored in the scene file
    #[arg(long)]
    no_scene_events: bool,

    /// Minimum detection score, overriding the scene's config
    #[arg(long)]
    threshold: Option<f64>,

    /// Print only the ring groups, for embedding in another SVG
    #[arg(long)]
    fragment: bool,

    /// Write SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    /// Events given on the command line, color first.
    fn events(&self) -> Vec<SceneEvent> {
        self.color
            .iter()
            .cloned()
            .map(SceneEvent::Color)
            .chain(self.sizes.iter().copied().map(SceneEvent::Size))
            .collect()
    }
}

fn run(cli: &Cli) -> Result<(), SceneError> {
    let mut scene = Scene::load(&cli.scene)?;
    if let Some(threshold) = cli.threshold {
        scene.config.score_threshold = threshold;
    }
    log::info!(
        "Loaded {:?}: {} objects, slider {}..={} at {}",
        cli.scene,
        scene.objects.len(),
        scene.slider.min,
        scene.slider.max,
        scene.slider.value
    );

    let mut controller = scene.controller();
    if !cli.no_scene_events {
        replay(&mut controller, &scene.events)?;
    }
    replay(&mut controller, &cli.events())?;

    if cli.fragment {
        let markup = render::rings_markup(&controller.rings);
        match &cli.output {
            Some(path) => std::fs::write(path, markup)?,
            None => writeln!(std::io::stdout().lock(), "{}", markup)?,
        }
        return Ok(());
    }

    let polygons = scene.polygons();
    let document = render::document(
        &controller.rings,
        &polygons,
        scene.width,
        scene.height,
        scene.config.clip_corner_radius,
    );
    match &cli.output {
        Some(path) => {
            svg::save(path, &document)?;
            log::info!("Wrote {} rings to {:?}", controller.rings.len(), path);
        }
        None => svg::write(std::io::stdout().lock(), &document)?,
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        eprintln!("ringmark: {}", e);
        std::process::exit(1);
    }
}
