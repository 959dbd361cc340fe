use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use suggestfeed::config::{self, Config};
use suggestfeed::feed::{ExecuteContext, FeedEvent, PageTarget, SuggestionFeed, text_render};
use suggestfeed::suggestion::decode_records;

/// Page through AI marketing suggestions
#[derive(Parser, Debug)]
#[command(name = "suggestfeed", version, about)]
struct Args {
    /// Suggestion payload JSON file (reads stdin when omitted or "-")
    payload: Option<PathBuf>,

    /// Page to show: first, prev, next, last or a page number
    #[arg(long)]
    page: Option<PageTarget>,

    /// Suggestions per page (overrides the config file)
    #[arg(long)]
    page_size: Option<usize>,

    /// JSON payload whose suggestions are prepended as newest
    #[arg(long)]
    prepend: Option<PathBuf>,

    /// Mark the suggestion with this id as executed
    #[arg(long)]
    execute: Option<String>,

    /// Print the display model as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Config file (default: ~/.config/suggestfeed/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    run(args, &config)
}

fn run(args: Args, config: &Config) -> Result<()> {
    let page_size = args.page_size.unwrap_or(config.feed.page_size);
    let payload = read_payload(args.payload.as_deref())?;
    let records = decode_records(&payload).wrap_err("Failed to decode suggestion payload")?;
    log::debug!("Loaded {} suggestions", records.len());

    let mut feed = SuggestionFeed::with_records(page_size, records);
    let ctx = ExecuteContext::from(&config.execute);

    if let Some(path) = &args.prepend {
        let extra = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let new_records = decode_records(&extra).wrap_err("Failed to decode prepended payload")?;
        // Prepend oldest first so the payload's first record ends up on top
        for record in new_records.into_iter().rev() {
            feed.prepend(record);
        }
    }

    if let Some(id) = args.execute {
        let event = FeedEvent::Execute { id: id.clone().into() };
        match feed.handle_event(event, ctx) {
            Some(request) => eprintln!("{}", serde_json::to_string(&request)?),
            None => log::warn!("Nothing to execute for suggestion {}", id),
        }
    }

    if let Some(target) = args.page {
        feed.handle_event(FeedEvent::Page { target }, ctx);
    }

    let view = feed.render();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", text_render::render_text(&view));
    }

    Ok(())
}

fn read_payload(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .wrap_err("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
