use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use duskr::{AttributeStore as _, DevelopSettings, DocumentCodec as _, Interpolator};

#[derive(Parser, Debug)]
#[command(name = "duskr", version)]
struct Cli {
    /// Log interpolation progress (overridden by `RUST_LOG`).
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a set of keyframe documents without writing anything.
    Check(CheckArgs),
    /// Write one develop-settings document per frame between the first and last keyframe.
    Interpolate(InterpolateArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Keyframe documents (JSON). The sequence number is read from each filename.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print a JSON summary instead of plain text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct InterpolateArgs {
    /// Keyframe documents (JSON). The sequence number is read from each filename.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Interpolator config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only write synthesized frames, not copies of the keyframes.
    #[arg(long, default_value_t = false)]
    skip_keyframes: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Interpolate(args) => cmd_interpolate(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_keyframes(
    engine: &mut Interpolator<DevelopSettings>,
    files: &[PathBuf],
) -> anyhow::Result<()> {
    for path in files {
        let name = file_name(path)?;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read keyframe '{}'", path.display()))?;
        engine
            .add_control_point(name, &text)
            .with_context(|| format!("register keyframe '{}'", path.display()))?;
    }
    Ok(())
}

fn file_name(path: &Path) -> anyhow::Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("'{}' has no UTF-8 file name", path.display()))
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let mut engine = Interpolator::<DevelopSettings>::new();
    load_keyframes(&mut engine, &args.files)?;
    engine.check_control_point_integrity()?;

    let registry = engine.registry();
    let numbers: Vec<u64> = registry.iter().map(|cp| cp.number()).collect();
    let (first, last) = match (numbers.first(), numbers.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => anyhow::bail!("no keyframes registered"),
    };
    let frames = last - first + 1;

    if args.json {
        let keyframes: Vec<serde_json::Value> = registry
            .iter()
            .map(|cp| {
                serde_json::json!({
                    "sequence": cp.number(),
                    "filename": cp.filename,
                    "raw_filename": cp.store.raw_filename(),
                })
            })
            .collect();
        let summary = serde_json::json!({
            "keyframes": keyframes,
            "first": first,
            "last": last,
            "frames": frames,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "ok: {} keyframes, frames {first}..={last} ({frames} total)",
            registry.len()
        );
    }
    Ok(())
}

fn cmd_interpolate(args: InterpolateArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => duskr::InterpolatorConfig::from_path(path)?,
        None => duskr::InterpolatorConfig::default(),
    };
    let mut engine = Interpolator::<DevelopSettings>::with_config(config);
    load_keyframes(&mut engine, &args.files)?;
    let collection = engine.interpolate()?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let mut written = 0usize;
    for entry in collection {
        if args.skip_keyframes && entry.is_control_point {
            continue;
        }
        let path = args.out.join(&entry.filename);
        let text = entry.store.encode()?;
        std::fs::write(&path, text).with_context(|| format!("write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote document");
        written += 1;
    }

    eprintln!("wrote {written} documents to {}", args.out.display());
    Ok(())
}
