use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use topreel::{
    FontRegistry, FrameIndex, Reel, ReelConfig, RenderThreading, combine_fingerprints,
    render_fingerprints,
};

#[derive(Parser, Debug)]
#[command(name = "topreel", version)]
struct Cli {
    /// Reel config JSON. Defaults to the built-in "Top 5" reel.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene tree of one frame as JSON.
    Frame(FrameArgs),
    /// Print scene placement on the timeline.
    Timeline,
    /// Print a fingerprint for every frame plus a combined digest.
    Digest(DigestArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DigestArgs {
    /// Evaluate frames on a rayon pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let reel = load_reel(cli.config.as_deref())?;
    match cli.cmd {
        Command::Frame(args) => cmd_frame(&reel, args),
        Command::Timeline => cmd_timeline(&reel),
        Command::Digest(args) => cmd_digest(&reel, args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_reel(path: Option<&Path>) -> anyhow::Result<Reel> {
    let config = match path {
        Some(p) => ReelConfig::from_path(p)
            .with_context(|| format!("load reel config '{}'", p.display()))?,
        None => ReelConfig::default(),
    };
    let mut fonts = FontRegistry::new();
    let reel = Reel::prepare(config, &mut fonts).context("prepare reel")?;
    tracing::info!(
        fonts = ?fonts.families(),
        duration = reel.duration().0,
        "reel ready"
    );
    Ok(reel)
}

fn cmd_frame(reel: &Reel, args: FrameArgs) -> anyhow::Result<()> {
    let tree = topreel::render(FrameIndex(args.frame), reel)
        .with_context(|| format!("evaluate frame {}", args.frame))?;
    let json = serde_json::to_string_pretty(&tree).context("encode scene tree")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_timeline(reel: &Reel) -> anyhow::Result<()> {
    let timing = reel.timing();
    println!("title 0 {}", timing.title_frames);
    for (index, movie) in reel.movies().iter().enumerate() {
        let range = timing.item_range(index);
        println!("item-{} {} {}", movie.id, range.start.0, range.len_frames());
    }
    println!("total {}", reel.duration().0);
    Ok(())
}

fn cmd_digest(reel: &Reel, args: DigestArgs) -> anyhow::Result<()> {
    let threading = RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let prints = render_fingerprints(reel, reel.frame_range(), &threading)?;
    for (f, fp) in prints.iter().enumerate() {
        println!("{f} {fp}");
    }
    println!("digest {}", combine_fingerprints(&prints));
    Ok(())
}
