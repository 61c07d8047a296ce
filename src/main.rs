use std::{
    error::Error,
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use mlang::{Blocks, Multilang, RawHtml, Render};
use tracing_subscriber::EnvFilter;

/// Pick the right language out of `{mlang}`-tagged content.
#[derive(Debug, Parser)]
#[command(name = "mlang", version, about)]
struct Args {
    /// Input file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Language to select.
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Language to try when `--lang` has no block.
    #[arg(short, long)]
    fallback: Option<String>,

    /// Wrap the selection in a `<div>` container.
    #[arg(long)]
    html: bool,

    /// List every parsed block instead of selecting one.
    #[arg(long)]
    blocks: bool,

    /// Log selection decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let content = read_input(args.input.as_ref())?;
    let mut out = io::stdout().lock();

    if args.blocks {
        for block in Blocks::new(&content) {
            writeln!(out, "{}\t{}..{}\t{}", block.key, block.span.start, block.span.end, block.text)?;
        }
        return Ok(());
    }

    let mut builder = Multilang::builder().current_language(&args.lang);
    if let Some(fb) = args.fallback.as_deref() {
        builder = builder.fallback_language(fb);
    }
    let multilang = builder.build();

    let renderer = if args.html { RawHtml::default() } else { RawHtml::bare() };
    if let Some(rendered) = renderer.render(multilang.select(&content)) {
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}
