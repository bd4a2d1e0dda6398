use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context as _;
use canvaswrap::{
    Color, EffectMode, EffectParams, InMemorySurface, ProductSize, Raster, SessionConfig,
    WrapSession,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "canvaswrap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the on-screen preview (design plus guides) as a PNG.
    Preview(WrapArgs),
    /// Render the high-DPI print artifact as a PNG.
    Export(WrapArgs),
    /// List the product size catalog.
    Sizes(SizesArgs),
}

#[derive(Parser, Debug)]
struct WrapArgs {
    /// Design image placed over the whole canvas.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Wrap effect: none, mirror, border or image-wrap.
    #[arg(long, default_value = "mirror")]
    mode: EffectMode,

    /// Product size key, e.g. 8x10.
    #[arg(long)]
    size: Option<ProductSize>,

    /// Border width in inches.
    #[arg(long)]
    border_width: Option<f64>,

    /// Solid border color as #rrggbb or #rrggbbaa.
    #[arg(long)]
    border_color: Option<Color>,

    /// Session config JSON; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SizesArgs {
    /// Session config JSON providing the DPIs and border width.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Preview(args) => cmd_preview(args),
        Command::Export(args) => cmd_export(args),
        Command::Sizes(args) => cmd_sizes(args),
    }
}

fn cmd_preview(args: WrapArgs) -> anyhow::Result<()> {
    let session = open_session(&args)?;
    let preview = session.surface().render_preview()?;
    write_png(&args.out, &preview)
}

fn cmd_export(args: WrapArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args)?;
    let key = session.dimensions().product().key();
    let raster = session.export_high_res(key)?;
    write_png(&args.out, &raster)
}

fn cmd_sizes(args: SizesArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    for product in ProductSize::ALL {
        let preview =
            canvaswrap::DimensionSpec::new(product, config.border_width_in, config.preview_dpi)?;
        let export = preview.at_dpi(config.export_dpi)?;
        let (pw, ph) = preview.total_px();
        let (ew, eh) = export.total_px();
        println!("{product:<6} preview {pw}x{ph}  export {ew}x{eh}");
    }
    Ok(())
}

fn open_session(args: &WrapArgs) -> anyhow::Result<WrapSession<InMemorySurface>> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(size) = args.size {
        config.product_size = size;
    }
    if let Some(inches) = args.border_width {
        config.border_width_in = inches;
    }
    if let Some(color) = args.border_color {
        config.border_color = color;
    }

    let design = read_design(&args.in_path)?;
    let mut session = WrapSession::new(InMemorySurface::new(), config)?;
    session.upload_image(design)?;
    // Settle the upload's change notifications before switching modes.
    session.pump(Instant::now())?;

    let params = EffectParams {
        border_color: session.config().border_color,
    };
    session.set_effect_mode(args.mode, params)?;
    Ok(session)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SessionConfig> {
    match path {
        Some(path) => Ok(SessionConfig::from_path(path)?),
        None => Ok(SessionConfig::default()),
    }
}

fn read_design(path: &Path) -> anyhow::Result<Raster> {
    let img = image::open(path)
        .with_context(|| format!("read design image '{}'", path.display()))?
        .to_rgba8();
    Ok(Raster::from_image(&img))
}

fn write_png(path: &Path, raster: &Raster) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    raster
        .to_image()?
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
