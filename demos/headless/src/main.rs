//! headless: run one mascot on a virtual clock and report what it did.
//!
//! ```text
//! headless [CONFIG.json] [--states STATES.csv] [--trace TRACE.csv] [--seconds N]
//! ```
//!
//! The config is a JSON `MascotConfig`; missing keys take their defaults.
//! A scripted user clicks, drags, and sends the character somewhere along
//! the way so the host surface gets exercised too.  Set `RUST_LOG=debug` to
//! watch every behavior change.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mascot_anim::load_state_table_csv;
use mascot_behavior::{DialogueSink, ElementKind, PageElement, StaticPage};
use mascot_core::{Clock, Millis, Rect, SystemClock, Vec2};
use mascot_sim::{CsvTraceObserver, Mascot, MascotBuilder, MascotConfig, MascotObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SECONDS: u64 = 300;
/// Host frame interval: the demo advances the mascot in 1 s slices.
const SLICE_MS:        u64 = 1_000;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(help = "JSON MascotConfig; missing keys take their defaults")]
    config: Option<PathBuf>,

    #[arg(long, help = "CSV state table (state,frame_count,loops)")]
    states: Option<PathBuf>,

    #[arg(long, help = "Write one CSV row per physics tick here")]
    trace: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_SECONDS, help = "Simulated seconds to run")]
    seconds: u64,
}

fn load_config(args: &Args) -> Result<MascotConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))?
        }
        None => MascotConfig::default(),
    };
    if let Some(path) = &args.states {
        config.states = load_state_table_csv(path)
            .with_context(|| format!("loading states from {}", path.display()))?;
    }
    Ok(config)
}

// ── Host collaborators ────────────────────────────────────────────────────────

/// Logs dialogue requests instead of rendering a speech bubble.
struct LogDialogue;

impl DialogueSink for LogDialogue {
    fn request(&mut self, context: &str, hint: Option<&PageElement>) {
        match hint {
            Some(el) => tracing::info!(context, element = ?el.kind, x = el.bounds.x, y = el.bounds.y, "says something"),
            None     => tracing::info!(context, "says something"),
        }
    }
}

/// A landing page with a nav bar and a contact form.
fn demo_page() -> StaticPage {
    let el = |kind, x, y, w, h| PageElement::new(kind, Rect::new(x, y, w, h));
    StaticPage::new(vec![
        el(ElementKind::Link,        40.0,  20.0, 80.0, 24.0),
        el(ElementKind::Link,       140.0,  20.0, 80.0, 24.0),
        el(ElementKind::RoleButton, 1100.0, 20.0, 120.0, 32.0),
        el(ElementKind::TextInput,  400.0, 300.0, 240.0, 28.0),
        el(ElementKind::EmailInput, 400.0, 340.0, 240.0, 28.0),
        el(ElementKind::TextArea,   400.0, 380.0, 240.0, 96.0),
        el(ElementKind::SubmitInput, 400.0, 490.0, 100.0, 32.0),
        // Scrolled out of view: never observed.
        el(ElementKind::Button,     400.0, -200.0, 100.0, 32.0),
    ])
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tallies behavior starts and arrivals, forwarding ticks to an optional trace.
#[derive(Default)]
struct Summary {
    trace:    Option<CsvTraceObserver<File>>,
    starts:   BTreeMap<String, u32>,
    arrivals: u32,
    frames:   u64,
}

impl MascotObserver for Summary {
    fn on_physics_tick(&mut self, now: Millis, mascot: &Mascot) {
        if let Some(trace) = self.trace.as_mut() {
            trace.on_physics_tick(now, mascot);
        }
    }

    fn on_frame(&mut self, _now: Millis, _state: &str, _frame: u32) {
        self.frames += 1;
    }

    fn on_behavior_started(&mut self, now: Millis, behavior: &str) {
        tracing::debug!(at = %now, behavior, "behavior started");
        *self.starts.entry(behavior.to_owned()).or_default() += 1;
    }

    fn on_arrival(&mut self, now: Millis, position: Vec2) {
        tracing::debug!(at = %now, %position, "arrived");
        self.arrivals += 1;
    }
}

// ── Scripted user ─────────────────────────────────────────────────────────────

/// Host input at fixed seconds into the run.
fn script(mascot: &mut Mascot, second: u64) {
    match second {
        20 => mascot.click(),
        45 => {
            mascot.begin_drag();
            mascot.drag_to(600.0, 150.0);
        }
        46 => mascot.drag_to(700.0, 120.0),
        47 => mascot.end_drag(),
        90 => {
            let floor = mascot.physics().viewport().floor();
            let mut arrival = mascot.move_to(900.0, floor, Some("running"));
            tracing::info!(done = arrival.is_complete(), "sent to the right edge");
        }
        120 => mascot.jump(),
        150 => {
            mascot.show_emotion("happy");
        }
        _ => {}
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let seconds = args.seconds;

    let mut summary = Summary::default();
    if let Some(path) = &args.trace {
        summary.trace = Some(open_trace(path)?);
    }

    let mut mascot = MascotBuilder::new(config)
        .page(demo_page())
        .dialogue(LogDialogue)
        .build()
        .context("building mascot")?;

    let wall = SystemClock::new();
    mascot.start();
    for second in 0..seconds {
        script(&mut mascot, second);
        mascot.advance_by(SLICE_MS, &mut summary);
    }
    mascot.stop();

    if let Some(trace) = summary.trace.as_mut() {
        trace.flush().context("flushing trace")?;
        if let Some(err) = trace.take_error() {
            return Err(err).context("writing trace");
        }
        tracing::info!(rows = trace.rows(), "trace written");
    }

    let body = mascot.body();
    println!("simulated {seconds} s in {}", wall.now());
    println!("final: {} at {} facing {}", mascot.current_state(), body.position, body.facing);
    println!("frames: {}  arrivals: {}", summary.frames, summary.arrivals);
    for (name, count) in &summary.starts {
        println!("  {name:<8} started {count} times");
    }
    Ok(())
}

fn open_trace(path: &Path) -> Result<CsvTraceObserver<File>> {
    CsvTraceObserver::create(path).with_context(|| format!("creating {}", path.display()))
}
