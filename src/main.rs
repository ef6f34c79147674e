use anyhow::{Context, Result};
use clap::Parser;

use couchfs::model::ServerConfig;

#[derive(Parser)]
#[command(name = "couchfs")]
#[command(about = "A filesystem-style shell for CouchDB", long_about = None)]
struct Cli {
    /// Server URL (defaults to the COUCH_URL environment variable)
    #[arg(long)]
    url: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let url = match cli.url {
        Some(url) => url,
        None => std::env::var("COUCH_URL").context(
            "please specify the URL of your CouchDB instance by setting a COUCH_URL environment variable (or passing --url)",
        )?,
    };
    reqwest::Url::parse(&url).with_context(|| format!("{} is not a valid URL", url))?;
    couchfs::shell::run(ServerConfig::new(&url))
}
