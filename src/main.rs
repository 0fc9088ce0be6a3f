//! Headless storyboard: scrolls a simulated page from top to bottom and logs
//! what every section shows at each step.

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use scrollstory::assets::{FsLoader, ModelLoader};
use scrollstory::engine::StoryEngine;
use scrollstory::layout::{PageLayout, StaticLayout};
use scrollstory::options::Options;
use scrollstory::particles::ParticleConfig;
use scrollstory::render::RecordingRenderer;
use scrollstory::section::SectionId;
use scrollstory::ui::RecordingUi;

/// How long to wait for model files before sweeping anyway.
const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser, Debug)]
#[command(name = "scrollstory", version, about)]
struct Cli {
    /// TOML options preset.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Viewport size as WIDTHxHEIGHT.
    #[arg(long, default_value = "1280x800", value_parser = parse_viewport)]
    viewport: (u32, u32),
    /// Number of scroll steps between top and bottom.
    #[arg(long, default_value_t = 20)]
    steps: u32,
    /// Directory holding the model files. Without it every section uses
    /// its procedural models.
    #[arg(long)]
    models: Option<PathBuf>,
    /// Print the options JSON schema and exit.
    #[arg(long)]
    dump_schema: bool,
    /// Print every particle-layer configuration and exit.
    #[arg(long)]
    dump_particles: bool,
}

fn parse_viewport(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse().map_err(|_| format!("bad width '{w}'"))?;
    let h = h.trim().parse().map_err(|_| format!("bad height '{h}'"))?;
    Ok((w, h))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
    let cli = Cli::parse();

    if cli.dump_schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())?;
        writeln!(io::stdout().lock(), "{schema}")?;
        return Ok(());
    }
    if cli.dump_particles {
        let mut layers = serde_json::Map::new();
        let _ = layers.insert(
            scrollstory::particles::BACKGROUND_ID.to_owned(),
            serde_json::to_value(ParticleConfig::background())?,
        );
        for section in SectionId::ALL {
            let _ = layers.insert(
                section.particles_id(),
                serde_json::to_value(ParticleConfig::for_section(section))?,
            );
        }
        let json = serde_json::to_string_pretty(&layers)?;
        writeln!(io::stdout().lock(), "{json}")?;
        return Ok(());
    }
    if cli.steps == 0 {
        bail!("--steps must be at least 1");
    }

    let mut options = match &cli.options {
        Some(path) => Options::load(path).with_context(|| {
            format!("loading options from {}", path.display())
        })?,
        None => Options::default(),
    };
    let fs_loader = cli.models.as_ref().map(|dir| {
        options.assets.models_path = dir.to_string_lossy().into_owned();
        FsLoader::new()
    });
    let loader: Option<&dyn ModelLoader> = match &fs_loader {
        Some(loader) => Some(loader),
        None => None,
    };

    let (width, height) = cli.viewport;
    let mut layout = StaticLayout::new(width, height);
    let mut engine = StoryEngine::new(
        &layout,
        options,
        loader,
        RecordingRenderer::new(),
        RecordingUi::default(),
    );

    let started = Instant::now();
    while engine.pending_loads() > 0 {
        if started.elapsed() > LOAD_TIMEOUT {
            warn!(
                "{} models still loading, sweeping anyway",
                engine.pending_loads()
            );
            break;
        }
        let _ = engine.frame();
        thread::sleep(Duration::from_millis(10));
    }

    let max_scroll = layout.max_scroll();
    for step in 0..=cli.steps {
        let scroll_y = max_scroll * f64::from(step) / f64::from(cli.steps);
        layout.scroll_to(scroll_y);
        let update = engine.on_scroll_or_resize(&layout.scroll_metrics());
        engine.renderer_mut().clear();
        let report = engine.frame();

        if let Some(update) = update {
            info!(
                "y={scroll_y:>7.0}  {:<8} {:.2}  drawn {}/{}",
                update.active.name(),
                update.progress,
                report.rendered.len(),
                engine.registry().len()
            );
        }
        for call in engine.renderer().calls() {
            for root in &call.roots {
                let p = root.transform.position;
                let opacity = root
                    .opacity
                    .map_or_else(|| "-".to_owned(), |o| format!("{o:.2}"));
                info!(
                    "    {:<8} {:<14} pos ({:5.2}, {:5.2}, {:5.2}) \
                     scale {:.3} opacity {opacity}",
                    call.section.name(),
                    root.name,
                    p.x,
                    p.y,
                    p.z,
                    root.transform.scale.x,
                );
            }
        }
    }
    info!(
        "done: {} section switches, {} models failed",
        engine.ui().section_switches(),
        engine.tracker().failed()
    );
    Ok(())
}
