//! Command-line front end: a JSON render request in, a GIF file out.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Parser, Debug)]
#[command(name = "tickgif", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a countdown GIF from a JSON render request.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input render request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Directory containing the bundled fonts.
    #[arg(long, default_value = "fonts")]
    fonts: PathBuf,

    /// Fixed RFC 3339 "now" instant; defaults to the wall clock.
    #[arg(long)]
    at: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read render request '{}'", args.in_path.display()))?;
    let cfg: tickgif::RenderConfig =
        serde_json::from_str(&raw).with_context(|| "parse render request")?;

    let now = match &args.at {
        Some(s) => OffsetDateTime::parse(s, &Rfc3339)
            .with_context(|| format!("parse --at instant '{s}'"))?,
        None => OffsetDateTime::now_utc(),
    };

    let generator = tickgif::Generator::new(args.fonts.clone())?;
    let bytes = generator.generate(&cfg, now)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write gif '{}'", args.out.display()))?;

    eprintln!("wrote {} ({} bytes)", args.out.display(), bytes.len());
    Ok(())
}
