use std::io::Write;

use clap::Parser;
use docsift::{
    DocumentStore,
    PdfExtractor,
    cli::{Cli, Command, RankArgs, ShowArgs},
    error::{self, Error},
    ingestion::{self, RawFile},
    output::{self, RenderOptions},
    search,
    walker,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("DOCSIFT_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Rank(args) => cmd_rank(&args).await?,
        Command::Show(args) => cmd_show(&args).await?,
        Command::Completions(args) => args.generate(),
    }

    Ok(())
}

async fn cmd_rank(args: &RankArgs) -> error::Result<()> {
    let files = ingestion::retain_pdfs(walker::collect_files(&args.paths)?);
    if files.is_empty() {
        eprintln!("No PDF files found.");
    }

    let extractor = PdfExtractor::new();
    let (store, errors) =
        ingestion::ingest(files, DocumentStore::new(), &extractor).await;
    if let Some(notice) = ingestion::notice(&errors) {
        eprintln!("An error occurred: {notice}");
    }

    let view = search::listing(&store, &args.keywords);
    let options = RenderOptions {
        count: args.count,
        preview_chars: args.preview_chars,
    };

    let mut out = std::io::stdout().lock();
    if args.json {
        output::write_json(&mut out, &view, &args.keywords, options)?;
    } else if args.files {
        output::write_files(&mut out, &view, options)?;
    } else {
        output::write_human(&mut out, &store, &view, &args.keywords, options)?;
    }
    out.flush()?;

    Ok(())
}

async fn cmd_show(args: &ShowArgs) -> error::Result<()> {
    if !args.path.is_file() {
        return Err(Error::MissingPath(args.path.clone()));
    }

    let file = RawFile::from_path(&args.path);
    if !file.is_pdf() {
        return Err(Error::Config(format!(
            "not a PDF file: {}",
            args.path.display()
        )));
    }
    let name = file.name.clone();

    let extractor = PdfExtractor::new();
    let (store, errors) =
        ingestion::ingest(vec![file], DocumentStore::new(), &extractor).await;
    if let Some(err) = errors.into_iter().next() {
        return Err(err.into());
    }

    let document = store.get(&name).ok_or_else(|| Error::NotFound {
        kind: "document",
        name: name.clone(),
    })?;

    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer(&mut out, document)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", document.content())?;
    }
    out.flush()?;

    Ok(())
}
