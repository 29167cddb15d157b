use clap::Parser;
use indicatif::ProgressBar;
use std::time::Duration;
use tanki_ratings::display::output::{
    display_error, display_info, display_profile_summary, display_success,
};
use tanki_ratings::{AppError, Config, Language, ProfileQuery, RatingsClient};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "Tanki Ratings")]
#[command(about = "Look up a Tanki Online player's ratings profile", long_about = None)]
struct Args {
    /// Player name
    username: String,

    /// Language code: en, pl, de, ru, br, es (default: TANKI_LANG or en)
    #[arg(short, long)]
    lang: Option<String>,

    /// Print the summary as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;

    let language: Language = match &args.lang {
        Some(code) => code.parse()?,
        None => config.language,
    };
    let query = ProfileQuery::with_language(&args.username, language)?;

    let client = RatingsClient::new(config);

    if args.json {
        let summary = client.stats(&query)?;
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| AppError::RenderError(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    display_info(&format!(
        "Fetching ratings for {} ({})",
        query.username(),
        query.language()
    ));

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Contacting ratings server");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = client.stats(&query);
    spinner.finish_and_clear();

    let summary = result?;
    display_success(&format!("Found {}", summary.name));
    display_profile_summary(&summary);

    Ok(())
}
