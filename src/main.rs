use std::path::PathBuf;

use clap::Parser;
use lingua_widgets::{Widgets, logging};
use tracing::error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with feed materials grouped by section
    #[arg(short, long)]
    feed: PathBuf,

    /// JSON file with the quiz questions and result brackets
    #[arg(short, long)]
    quiz: PathBuf,
}

fn main() {
    logging::init_tracing();
    let args = Args::parse();

    let result = Widgets::from_json(&args.feed, &args.quiz).and_then(Widgets::run);
    if let Err(e) = result {
        error!(error = %e, "lingua-widgets exited with an error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
