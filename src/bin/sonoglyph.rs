use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sonoglyph", version)]
struct Cli {
    /// Config JSON. Defaults apply when omitted; `SONOGLYPH_*` env vars override either.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON to use instead of the bundled glyphs.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the characters in the catalog.
    List,
    /// Render one frame of a character as a PNG.
    Frame(FrameArgs),
    /// Render a character across a loudness x centroid grid.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Character id, display name, or index.
    #[arg(long)]
    glyph: String,

    #[arg(long, default_value_t = 0.0)]
    loudness: f64,

    #[arg(long, default_value_t = 0.0)]
    centroid: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Draw with palette colors.
    #[arg(long)]
    color: bool,

    /// Overlay the control points.
    #[arg(long)]
    points: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[arg(long)]
    glyph: String,

    /// Output directory. Defaults to the configured export dir.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 4)]
    loudness_steps: usize,

    #[arg(long, default_value_t = 3)]
    centroid_steps: usize,

    #[arg(long)]
    color: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::List => cmd_list(&cfg, cli.catalog.as_deref()),
        Command::Frame(args) => cmd_frame(&cfg, cli.catalog.as_deref(), args),
        Command::Sweep(args) => cmd_sweep(&cfg, cli.catalog.as_deref(), args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<sonoglyph::Config> {
    let cfg = match path {
        Some(p) => sonoglyph::Config::load_json(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => sonoglyph::Config::default(),
    };
    let cfg = cfg.with_env_overrides();
    cfg.validate()?;
    Ok(cfg)
}

fn load_catalog(
    cfg: &sonoglyph::Config,
    path: Option<&Path>,
) -> anyhow::Result<sonoglyph::Catalog> {
    let env = cfg.draw_env();
    Ok(match path {
        Some(p) => sonoglyph::Catalog::load_json(p, env)
            .with_context(|| format!("load catalog '{}'", p.display()))?,
        None => sonoglyph::Catalog::builtin(env),
    })
}

fn cmd_list(cfg: &sonoglyph::Config, catalog: Option<&Path>) -> anyhow::Result<()> {
    let catalog = load_catalog(cfg, catalog)?;
    for (i, ch) in catalog.characters().iter().enumerate() {
        let phonetic = ch.phonetic().unwrap_or("-");
        println!(
            "{i:>3}  {:<8} {}  {:<6} {} strokes",
            ch.id(),
            ch.name(),
            phonetic,
            ch.strokes().len()
        );
    }
    Ok(())
}

fn cmd_frame(
    cfg: &sonoglyph::Config,
    catalog: Option<&Path>,
    args: FrameArgs,
) -> anyhow::Result<()> {
    let mut catalog = load_catalog(cfg, catalog)?;
    catalog
        .select_key(&args.glyph)
        .with_context(|| format!("select glyph '{}'", args.glyph))?;
    if args.points {
        catalog.env_mut().show_control_points = true;
    }

    let sample = sonoglyph::AudioSample::new(args.loudness, args.centroid);
    let frame = sonoglyph::render_frame(
        &mut catalog,
        cfg.canvas,
        sample,
        args.color || cfg.color_mode,
        cfg.background,
    )?;

    sonoglyph::save_png(&frame, &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(
    cfg: &sonoglyph::Config,
    catalog: Option<&Path>,
    args: SweepArgs,
) -> anyhow::Result<()> {
    let mut catalog = load_catalog(cfg, catalog)?;
    catalog
        .select_key(&args.glyph)
        .with_context(|| format!("select glyph '{}'", args.glyph))?;

    let grid = sonoglyph::SweepGrid {
        loudness_steps: args.loudness_steps,
        centroid_steps: args.centroid_steps,
        ..sonoglyph::SweepGrid::default()
    };
    if grid.is_empty() {
        anyhow::bail!("sweep needs at least one loudness and one centroid step");
    }

    let dir = args.out_dir.unwrap_or_else(|| cfg.export.dir.clone());
    let mut session = sonoglyph::CaptureSession::new(cfg.export.base_name.clone(), dir);
    let paths = session.capture_sweep(
        &mut catalog,
        &grid,
        cfg.canvas,
        args.color || cfg.color_mode,
        cfg.background,
    )?;

    for p in &paths {
        eprintln!("wrote {}", p.display());
    }
    Ok(())
}
