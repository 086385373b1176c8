use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pxbreak::config::Config;
use pxbreak::surface::MeasurementSurface;
use pxbreak::{
    FontDescriptor, insert_chars_into_indices, oracle, pipeline, report, scanner, storage,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pxbreak",
    version,
    about = "Measure character widths and break text where it overflows a pixel threshold"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print (or save) the advance width of each distinct character.
    Measure(MeasureArgs),
    /// Print the char indices where the running width exceeds the threshold.
    Breaks(BreaksArgs),
    /// Insert a marker after the given char indices.
    Insert(InsertArgs),
    /// Measure, break and insert in one go.
    Wrap(WrapArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct FontArgs {
    /// Config file (JSON). Defaults to $PXBREAK_CONFIG or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Font family, or a comma-separated fallback list.
    #[arg(short, long)]
    font: Option<String>,
    /// Font size in pixels.
    #[arg(short, long)]
    size: Option<f64>,
    /// Register a font file as FAMILY=PATH (repeatable).
    #[arg(long = "font-file")]
    font_files: Vec<String>,
    /// Width table JSON to measure with instead of font files.
    #[arg(long)]
    metrics: Option<PathBuf>,
    /// Ignore fonts and tables; use the constant-ratio estimate.
    #[arg(long, default_value_t = false)]
    estimate: bool,
}

#[derive(Args, Debug)]
struct MeasureArgs {
    /// Input text, or `-` for stdin.
    text: String,
    /// Save to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    #[command(flatten)]
    font: FontArgs,
}

#[derive(Args, Debug)]
struct BreaksArgs {
    /// Input text, or `-` for stdin.
    text: String,
    /// Maximum accumulated width in pixels before a break.
    #[arg(short, long)]
    threshold: f64,
    #[command(flatten)]
    font: FontArgs,
}

#[derive(Args, Debug)]
struct InsertArgs {
    /// Input text, or `-` for stdin.
    text: String,
    /// Char indices separated by comma or semicolon (e.g., 1,3).
    #[arg(short, long, allow_hyphen_values = true)]
    indices: String,
    /// String inserted after each index.
    #[arg(short, long, default_value = "\n")]
    marker: String,
}

#[derive(Args, Debug)]
struct WrapArgs {
    /// Input text, or `-` for stdin.
    text: String,
    /// Maximum accumulated width in pixels before a break.
    #[arg(short, long)]
    threshold: f64,
    /// String inserted after each break.
    #[arg(short, long, default_value = "\n")]
    marker: String,
    /// Save a per-segment JSON report.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Print segment width statistics to stderr.
    #[arg(long, default_value_t = false)]
    stats: bool,
    #[command(flatten)]
    font: FontArgs,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn parse_indices(s: &str) -> Result<Vec<usize>> {
    s.split([',', ';'])
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(|x| {
            x.parse::<usize>()
                .with_context(|| format!("invalid index {x:?}, expected a non-negative integer"))
        })
        .collect()
}

fn read_text(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading text from stdin")?;
    let trimmed = buf
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&buf);
    Ok(trimmed.to_string())
}

impl FontArgs {
    fn resolve(&self) -> Result<(Box<dyn MeasurementSurface>, FontDescriptor)> {
        let mut cfg = Config::discover(self.config.as_deref())?;
        if let Some(f) = &self.font {
            cfg.font_family = f.clone();
        }
        if let Some(s) = self.size {
            cfg.font_size_px = s;
        }
        for entry in &self.font_files {
            let (family, path) = entry.split_once('=').ok_or_else(|| {
                anyhow::anyhow!("invalid --font-file {entry:?}, expected FAMILY=PATH")
            })?;
            cfg.fonts.insert(family.trim().to_string(), PathBuf::from(path.trim()));
        }
        if self.metrics.is_some() {
            cfg.metrics = self.metrics.clone();
        }
        if self.estimate {
            cfg.metrics = None;
            cfg.fonts.clear();
        }
        Ok((cfg.build_surface()?, cfg.font()))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Measure(args) => cmd_measure(args),
        Command::Breaks(args) => cmd_breaks(args),
        Command::Insert(args) => cmd_insert(args),
        Command::Wrap(args) => cmd_wrap(args),
    }
}

fn cmd_measure(args: MeasureArgs) -> Result<()> {
    let text = read_text(&args.text)?;
    let (mut surface, font) = args.font.resolve()?;
    let widths = oracle::measure_text_chars(&mut surface, &text, &font)?;

    match args.out.as_ref() {
        Some(path) => {
            let fmt = match args.format {
                Some(OutFormat::Csv) => "csv",
                Some(OutFormat::Json) => "json",
                None => path.extension().and_then(|e| e.to_str()).unwrap_or("json"),
            }
            .to_ascii_lowercase();
            match fmt.as_str() {
                "csv" => storage::save_widths_csv(&widths, path)?,
                "json" => storage::save_widths_json(&widths, path)?,
                other => anyhow::bail!("unsupported format: {}", other),
            }
            eprintln!("Saved {} widths to {}", widths.len(), path.display());
        }
        None => println!("{}", storage::widths_to_json(&widths)?),
    }
    Ok(())
}

fn cmd_breaks(args: BreaksArgs) -> Result<()> {
    let text = read_text(&args.text)?;
    let (mut surface, font) = args.font.resolve()?;
    let indices = scanner::get_break_indices(
        &text,
        args.threshold,
        &mut surface,
        &font.family,
        font.size_px,
    )?;
    println!("{}", serde_json::to_string(&indices)?);
    Ok(())
}

fn cmd_insert(args: InsertArgs) -> Result<()> {
    let text = read_text(&args.text)?;
    let indices = parse_indices(&args.indices)?;
    println!("{}", insert_chars_into_indices(&text, &indices, &args.marker)?);
    Ok(())
}

fn cmd_wrap(args: WrapArgs) -> Result<()> {
    let text = read_text(&args.text)?;
    let (mut surface, font) = args.font.resolve()?;
    let broken =
        pipeline::break_text_detailed(&text, args.threshold, &mut surface, &font, &args.marker)?;
    println!("{}", broken.output);

    if args.report.is_some() || args.stats {
        let segments = report::segment_report(&text, &broken.indices, &broken.widths)?;
        if let Some(path) = args.report.as_ref() {
            storage::save_report_json(&segments, path)?;
            eprintln!("Wrote {} segments to {}", segments.len(), path.display());
        }
        if args.stats {
            let s = report::summarize(&segments);
            eprintln!(
                "segments={}  min={} max={} mean={} median={}",
                s.count,
                fmt_opt(s.min),
                fmt_opt(s.max),
                fmt_opt(s.mean),
                fmt_opt(s.median)
            );
        }
    }
    Ok(())
}
