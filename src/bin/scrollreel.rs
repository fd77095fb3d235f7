use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    /// Log player decisions at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the surface at one scroll offset as a PNG.
    Frame(FrameArgs),
    /// Scrub through the whole section, writing one PNG per drawn frame.
    Scrub(ScrubArgs),
}

#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    /// Window width in px.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Window height in px.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Page offset of the section top.
    #[arg(long, default_value_t = 0.0)]
    section_top: f64,

    /// Section height. Defaults to four window heights.
    #[arg(long)]
    section_height: Option<f64>,
}

impl PageArgs {
    fn geometry(self) -> scrollreel::PageGeometry {
        let section_height = self.section_height.unwrap_or(self.height * 4.0);
        scrollreel::PageGeometry::sticky(
            scrollreel::Size::new(self.width, self.height),
            self.section_top,
            section_height,
        )
    }
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Player config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Root directory for frame locations. Defaults to the config's directory.
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Page scroll offset.
    #[arg(long)]
    scroll: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    page: PageArgs,
}

#[derive(Parser, Debug)]
struct ScrubArgs {
    /// Player config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Root directory for frame locations. Defaults to the config's directory.
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Number of evenly spaced scroll samples from section start to end.
    #[arg(long, default_value_t = 32)]
    steps: u32,

    /// Directory receiving `step_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    page: PageArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Scrub(args) => cmd_scrub(args),
    }
}

type CliPlayer = scrollreel::ScrubPlayer<scrollreel::CpuCanvas>;

fn mount(
    config_path: &Path,
    frames: Option<&Path>,
    layout: &scrollreel::PageGeometry,
) -> anyhow::Result<CliPlayer> {
    let config = scrollreel::PlayerConfig::from_path(config_path)?;
    let root = frames
        .or_else(|| config_path.parent())
        .unwrap_or_else(|| Path::new("."));
    let source = Arc::new(scrollreel::FsFrameSource::new(root));
    let canvas = scrollreel::CpuCanvas::new(scrollreel::CpuCanvasOpts {
        clear_rgba: Some([0, 0, 0, 255]),
        ..Default::default()
    });

    let mut player = scrollreel::ScrubPlayer::mount(&config, layout, source, canvas)?
        .context("page layout has no section or container")?;
    let report = player.wait_for_frames()?;
    if report.failed > 0 {
        eprintln!(
            "warning: {} of {} frames failed to load",
            report.failed,
            player.frame_count().get()
        );
    }
    Ok(player)
}

fn write_png(path: &Path, canvas: &scrollreel::CpuCanvas) -> anyhow::Result<()> {
    let frame = canvas.snapshot();
    anyhow::ensure!(
        frame.width > 0 && frame.height > 0,
        "surface is empty, nothing to write"
    );
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let layout = args.page.geometry().scrolled_to(args.scroll);
    let mut player = mount(&args.config, args.frames.as_deref(), &layout)?;
    player.on_paint();

    let update = player
        .last_update()
        .context("no scroll sample was taken")?;
    anyhow::ensure!(
        player.shown_frame() == Some(update.frame),
        "frame {} is not available",
        update.frame
    );
    write_png(&args.out, player.presenter())?;

    eprintln!(
        "wrote {} (frame {}, progress {:.3}, scale {:.3})",
        args.out.display(),
        update.frame,
        update.progress.get(),
        update.scale
    );
    Ok(())
}

fn cmd_scrub(args: ScrubArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps >= 2, "--steps must be at least 2");
    let layout = args.page.geometry();
    let start = layout.section.map(|s| s.top).unwrap_or_default();
    let end = layout
        .section_end_offset()
        .context("section is not taller than the window, nothing to scrub")?;

    let mut player = mount(
        &args.config,
        args.frames.as_deref(),
        &layout.scrolled_to(start),
    )?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0u32;
    for step in 0..args.steps {
        let t = f64::from(step) / f64::from(args.steps - 1);
        player.on_scroll(&layout.scrolled_to(start + (end - start) * t));
        let drew = matches!(player.on_paint(), scrollreel::PaintOutcome::Drawn(_));
        if drew || step == 0 {
            let path = args.out_dir.join(format!("step_{step:04}.png"));
            write_png(&path, player.presenter())?;
            written += 1;
        }
    }

    let stats = player.dispose();
    eprintln!(
        "wrote {written} images to {} ({} draws over {} scroll events)",
        args.out_dir.display(),
        stats.draws,
        stats.scroll_events
    );
    Ok(())
}
