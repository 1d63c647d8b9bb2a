// ABOUTME: CLI binary for the memedex KnowYourMeme scraper.
// ABOUTME: Searches the site or fetches one entry page and prints extracted JSON.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use memedex_kym::{Client, DEFAULT_SEARCH_MAX, SITE_ORIGIN};

#[derive(Parser, Debug)]
#[command(name = "memedex")]
#[command(about = "Scrape KnowYourMeme search results and entry pages into JSON")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Site origin to scrape (useful for testing against a local server)
    #[arg(long, global = true, default_value = SITE_ORIGIN)]
    base_url: String,

    /// Output compact JSON instead of pretty
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the site and print matching entries as a JSON array
    Search {
        /// Search terms
        query: String,

        /// Maximum number of hits to return
        #[arg(long, default_value_t = DEFAULT_SEARCH_MAX)]
        max: usize,
    },
    /// Fetch one entry page and print its extracted details as JSON
    Get {
        /// Entry URL, e.g. https://knowyourmeme.com/memes/doge
        url: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let client = Client::builder().base_url(args.base_url.clone()).build();

    let output = match args.command {
        Command::Search { query, max } => {
            let hits = client.search(&query, max).await;
            serde_json::to_value(hits)
        }
        Command::Get { url } => match client.get_meme(&url).await {
            Some(details) => serde_json::to_value(details),
            None => {
                eprintln!("error: no meme details at {}", url);
                return ExitCode::from(1);
            }
        },
    };

    let output = match output {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error encoding output: {}", err);
            return ExitCode::from(1);
        }
    };

    let rendered = if args.compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    };

    match rendered {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error encoding output: {}", err);
            ExitCode::from(1)
        }
    }
}
