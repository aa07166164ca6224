use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use yt_playlist_page::extractor::YtDlpExtractor;
use yt_playlist_page::{input, ExportConfig, ExportPipeline, PlaylistError};

#[derive(Parser, Debug)]
#[command(name = "yt-playlist-page")]
#[command(about = "Generate a static HTML browser for a YouTube playlist", long_about = None)]
struct Args {
    /// Playlist URL (prompted for when omitted)
    #[arg(long)]
    url: Option<String>,

    /// Page title (prompted for when omitted; empty uses the default)
    #[arg(long)]
    title: Option<String>,

    /// Directory to write the page into (default: current directory)
    #[arg(short = 'o', long)]
    output_dir: Option<String>,

    /// Extractor executable
    #[arg(long, default_value = "yt-dlp")]
    extractor: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(args) {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<PlaylistError>() {
            Some(failure) => {
                println!("{}", failure);
                std::process::exit(1);
            }
            None => Err(err),
        },
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = ExportConfig::new();
    if let Some(dir) = &args.output_dir {
        config = config.with_output_dir(PathBuf::from(shellexpand::tilde(dir).into_owned()));
    }

    let request = {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        input::collect(
            &mut stdin.lock(),
            &mut stdout,
            args.url,
            args.title,
            &config.default_title,
        )?
    };

    let extractor = YtDlpExtractor::new().with_program(shellexpand::tilde(&args.extractor).into_owned());
    let pipeline = ExportPipeline::new(config, extractor);

    println!("Fetching playlist…");
    let summary = pipeline.export(&request.url, &request.title)?;

    println!(
        "{} generated with {} videos.",
        summary.path.display(),
        summary.entry_count
    );
    println!("Open it by double-clicking or via: python3 -m http.server");

    Ok(())
}
