use clap::Parser;
use crossterm::style::Stylize;
use haiku_core::persistence::{load_hashtag_table, save_bundle};
use haiku_core::{build_tweet_text, Haiku, HaikuEngine, HaikuOptions, HashtagTable, Tone, TweetFormat};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generate a wrestling haiku.
#[derive(Parser, Debug)]
#[command(name = "wcj-haiku", version, about = "Generate 5-7-5 wrestling haiku from a lexicon")]
struct Cli {
    /// Wrestler names to influence the haiku (repeatable)
    #[arg(short, long, num_args = 1..)]
    wrestlers: Vec<String>,

    /// Era to influence the haiku (e.g. "Attitude")
    #[arg(short, long)]
    era: Option<String>,

    /// Show or PPV to influence the haiku (e.g. "RAW")
    #[arg(short, long)]
    show: Option<String>,

    /// Match type (e.g. "Ladder"); reserved, does not change the lines yet
    #[arg(short, long = "match")]
    match_type: Option<String>,

    /// deadpan, nostalgic, petty or absurdist; reserved, does not change the lines yet
    #[arg(short, long)]
    tone: Option<Tone>,

    /// Chaos level (0-10); reserved, does not change the lines yet
    #[arg(long, default_value_t = 0.0)]
    chaos: f64,

    /// Seed for deterministic output; defaults to the current time in milliseconds
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Number of haikus to generate, seeded seed, seed+1, ...
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Skip hashtag generation
    #[arg(long)]
    no_hashtags: bool,

    /// Output tweet-ready text: compact or full
    #[arg(long = "share-x")]
    share_x: Option<TweetFormat>,

    /// Directory holding the six lexicon JSON files
    #[arg(long, env = "WCJ_HAIKU_DATA", default_value = "data")]
    data: PathBuf,

    /// Load the lexicon from a bundle written by --write-bundle instead of --data
    #[arg(long, conflicts_with = "write_bundle")]
    bundle: Option<PathBuf>,

    /// Compile the --data directory into a bundle file and exit
    #[arg(long)]
    write_bundle: Option<PathBuf>,

    /// JSON file replacing the built-in show/era/wrestler hashtag table
    #[arg(long)]
    hashtag_table: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    plain: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HaikuRecord {
    #[serde(flatten)]
    haiku: Haiku,
    options: HaikuOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    hashtags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tweet_text: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Some(target) = &cli.write_bundle {
        let engine = HaikuEngine::from_data_dir(&cli.data)?;
        save_bundle(engine.lexicon(), target)?;
        println!("Lexicon bundle written to '{}'", target.display());
        return Ok(());
    }

    let engine = match &cli.bundle {
        Some(path) => HaikuEngine::from_bundle(path)?,
        None => HaikuEngine::from_data_dir(&cli.data)?,
    };
    let hashtag_table = match &cli.hashtag_table {
        Some(path) => load_hashtag_table(path)?,
        None => HashtagTable::default(),
    };

    let options = HaikuOptions {
        wrestlers: (!cli.wrestlers.is_empty()).then(|| cli.wrestlers.clone()),
        era: cli.era.clone(),
        show: cli.show.clone(),
        match_type: cli.match_type.clone(),
        tone: cli.tone,
        chaos: Some(cli.chaos),
        seed: Some(cli.seed.unwrap_or_else(now_millis)),
    };
    log::debug!("generating {} haiku(s) with {:?}", cli.count, options);

    let records: Vec<HaikuRecord> = engine
        .generate_batch(&options, cli.count)?
        .into_iter()
        .map(|haiku| {
            let options = HaikuOptions { seed: Some(haiku.seed), ..options.clone() };
            let hashtags = (!cli.no_hashtags).then(|| hashtag_table.build_hashtags(&options));
            let tweet_text = cli.share_x.map(|format| {
                build_tweet_text(&haiku, &options, hashtags.as_deref().unwrap_or_default(), format)
            });
            HaikuRecord { haiku, options, hashtags, tweet_text }
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if cli.share_x.is_some() {
        for record in &records {
            println!("{}", record.tweet_text.as_deref().unwrap_or_default());
        }
    } else {
        print_haikus(&records, !cli.plain);
    }
    Ok(())
}

fn print_haikus(records: &[HaikuRecord], styled: bool) {
    for record in records {
        println!("---");
        for line in record.haiku.lines() {
            if styled {
                println!("{}", line.bold().magenta());
            } else {
                println!("{line}");
            }
        }
        if let Some(tags) = &record.hashtags {
            let tags = tags.join(" ");
            if styled {
                println!("{}", tags.dark_grey());
            } else {
                println!("{tags}");
            }
        }
    }
    println!("---");
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}
