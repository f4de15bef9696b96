use std::{
    io::Write as _,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load every segment and print the frame table.
    Inspect(InspectArgs),
    /// Evaluate one scroll position and print the resulting page state.
    Frame(FrameArgs),
    /// Plan and run a navigation jump.
    Jump(JumpArgs),
    /// Reveal the page, then scroll from top to bottom and print every change as JSON lines.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct LoadArgs {
    /// Input manifest JSON. Segment sources resolve relative to its directory.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override loader worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Full document height in pixels.
    #[arg(long, default_value_t = 20_000.0)]
    scroll_height: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    client_height: f64,

    /// Viewport width in pixels, used to pick responsive images.
    #[arg(long, default_value_t = 1280)]
    width: u32,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[command(flatten)]
    load: LoadArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    load: LoadArgs,

    #[command(flatten)]
    page: PageArgs,

    /// Vertical scroll offset in pixels.
    #[arg(long)]
    scroll_top: f64,
}

#[derive(Parser, Debug)]
struct JumpArgs {
    #[command(flatten)]
    load: LoadArgs,

    #[command(flatten)]
    page: PageArgs,

    /// Link href, for example `#about`.
    #[arg(long)]
    href: String,

    /// Simulation rate for the scroll animation.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    load: LoadArgs,

    #[command(flatten)]
    page: PageArgs,

    /// Seconds spent scrolling from top to bottom.
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Simulation rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Jump(args) => cmd_jump(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

struct Loaded {
    manifest: scrollreel::ReelManifest,
    preloaded: scrollreel::Preloaded,
    progress: Vec<scrollreel::LoadProgress>,
}

fn load(args: &LoadArgs) -> anyhow::Result<Loaded> {
    let manifest = scrollreel::ReelManifest::from_path(&args.in_path)
        .with_context(|| format!("load manifest '{}'", args.in_path.display()))?;
    let root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let source = scrollreel::FsSegmentSource::new(root);

    let progress = Mutex::new(Vec::new());
    let on_progress = |p: scrollreel::LoadProgress| {
        tracing::info!(loaded = p.loaded, total = p.total, "loading {:.0}%", p.percent());
        if let Ok(mut v) = progress.lock() {
            v.push(p);
        }
    };
    let preloaded = scrollreel::preload(&manifest.segments, &source, args.threads, &on_progress)
        .with_context(|| "preload segments")?;

    let mut progress = progress
        .into_inner()
        .map_err(|_| anyhow::anyhow!("progress log poisoned"))?;
    progress.sort_by_key(|p| p.loaded);

    Ok(Loaded {
        manifest,
        preloaded,
        progress,
    })
}

fn session(
    manifest: &scrollreel::ReelManifest,
    preloaded: &scrollreel::Preloaded,
) -> anyhow::Result<scrollreel::ScrollSession> {
    let player = scrollreel::StillPlayer::new(preloaded.table.len());
    Ok(scrollreel::ScrollSession::new(
        manifest,
        preloaded.table.clone(),
        Box::new(player),
    )?)
}

fn viewport(page: &PageArgs, scroll_top: f64) -> scrollreel::Viewport {
    scrollreel::Viewport {
        scroll_top,
        scroll_height: page.scroll_height,
        client_height: page.client_height,
    }
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).with_context(|| "write json")?;
    writeln!(out)?;
    Ok(())
}

fn print_json_line(
    out: &mut impl std::io::Write,
    value: &serde_json::Value,
) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value).with_context(|| "write json line")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let loaded = load(&args.load)?;
    let table = &loaded.preloaded.table;

    let segments: Vec<_> = loaded
        .preloaded
        .segments
        .iter()
        .enumerate()
        .map(|(i, seg)| {
            let span = table.span(scrollreel::SegmentIndex(i));
            serde_json::json!({
                "index": i,
                "source": seg.source,
                "name": seg.name,
                "fps": seg.fps,
                "frames": seg.total_frames,
                "span": span,
            })
        })
        .collect();

    print_json(&serde_json::json!({
        "total_frames": table.total_frames(),
        "segments": segments,
    }))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut loaded = load(&args.load)?;
    loaded.manifest.tuning.scrub_secs = 0.0;
    let mut session = session(&loaded.manifest, &loaded.preloaded)?;

    let update = session.on_scroll(&viewport(&args.page, args.scroll_top));
    let mut out = serde_json::to_value(&update).with_context(|| "encode frame update")?;
    out["project_images"] = serde_json::json!(session.project_sources(args.page.width));
    print_json(&out)
}

fn cmd_jump(args: JumpArgs) -> anyhow::Result<()> {
    let mut loaded = load(&args.load)?;
    loaded.manifest.tuning.scrub_secs = 0.0;
    let mut session = session(&loaded.manifest, &loaded.preloaded)?;
    session.on_scroll(&viewport(&args.page, 0.0));

    let Some(plan) = session.plan_jump(&args.href) else {
        anyhow::bail!("'{}' does not name a reachable section", args.href);
    };

    let dt = 1.0 / f64::from(args.fps.max(1));
    let mut tween = plan.tween(0.0);
    let mut last = None;
    while !tween.is_done() {
        let offset = tween.tick(dt);
        last = session.on_scroll(&viewport(&args.page, offset)).frame;
    }
    let completion = session.complete_jump(&plan);

    print_json(&serde_json::json!({
        "plan": plan,
        "landed": last,
        "completion": completion,
    }))
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let loaded = load(&args.load)?;
    let dt = 1.0 / f64::from(args.fps.max(1));
    let mut out = std::io::stdout().lock();

    let mut reveal = scrollreel::Reveal::new();
    for p in &loaded.progress {
        reveal.on_progress(*p);
    }
    reveal.all_loaded();
    let mut phase = reveal.phase();
    let mut elapsed = 0.0;
    while reveal.state().scroll_locked {
        let state = reveal.tick(dt);
        elapsed += dt;
        if state.phase != phase {
            phase = state.phase;
            print_json_line(
                &mut out,
                &serde_json::json!({ "t": elapsed, "reveal": state }),
            )?;
        }
    }

    let mut session = session(&loaded.manifest, &loaded.preloaded)?;
    let max_scroll = (args.page.scroll_height - args.page.client_height).max(0.0);
    let steps = (args.seconds.max(0.0) * f64::from(args.fps.max(1))).ceil() as u64;
    // Keep ticking after the last scroll so the scrub can settle.
    let settle_steps = (loaded.manifest.tuning.scrub_secs / dt).ceil() as u64 + 1;

    for step in 0..=steps + settle_steps {
        let t = step.min(steps) as f64 / steps.max(1) as f64;
        let scroll = session.on_scroll(&viewport(&args.page, t * max_scroll));
        let tick = session.tick(dt);
        elapsed += dt;

        for frame in scroll.frame.iter().chain(tick.frame.iter()) {
            if let Some(sw) = frame.switched {
                print_json_line(
                    &mut out,
                    &serde_json::json!({ "t": elapsed, "switch": sw, "global": frame.global }),
                )?;
            }
            for o in frame.overlays.iter().filter(|o| o.changed) {
                print_json_line(
                    &mut out,
                    &serde_json::json!({ "t": elapsed, "overlay": o.id, "visible": o.visible }),
                )?;
            }
        }
        if let Some(slide) = tick.testimonials_slide {
            print_json_line(
                &mut out,
                &serde_json::json!({ "t": elapsed, "testimonial": slide }),
            )?;
        }
        if let Some(slide) = tick.projects_slide {
            print_json_line(&mut out, &serde_json::json!({ "t": elapsed, "project": slide }))?;
        }
    }

    let end = session.seek(1.0);
    print_json_line(&mut out, &serde_json::json!({ "t": elapsed, "end": end }))?;
    Ok(())
}
