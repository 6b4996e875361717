use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use soundalike::{
    find_language, load_dictionary_file, wiktionary_url, Config, DictionarySource, Engine,
    SearchResult, LANGUAGES,
};

/// Find dictionary words that sound like a query word or IPA string.
#[derive(Debug, Parser)]
#[command(name = "soundalike", version, about)]
struct Cli {
    /// Query word or IPA notation; omit to enter interactive mode
    query: Option<String>,

    /// Language code of the dictionary to load (see --list-languages)
    #[arg(short, long, default_value = "en_US")]
    lang: String,

    /// Load the dictionary from a local file instead of downloading
    #[arg(long, value_name = "PATH")]
    dict_file: Option<PathBuf>,

    /// Maximum number of results to print (defaults to one page)
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print a Wiktionary link next to each result where available
    #[arg(long)]
    links: bool,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// List supported language codes and exit
    #[arg(long)]
    list_languages: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_languages {
        for lang in LANGUAGES {
            println!("{:8} {}", lang.code, lang.name);
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("loading config {}: {e}", path.display()))?,
        None => Config::default(),
    };

    let dictionary = match &cli.dict_file {
        Some(path) => load_dictionary_file(path)?,
        None => {
            if find_language(&cli.lang).is_none() {
                anyhow::bail!(
                    "unknown language code \"{}\" (use --list-languages)",
                    cli.lang
                );
            }
            DictionarySource::new().fetch(&cli.lang)?
        }
    };

    eprintln!("Loaded {} words", dictionary.len());
    let page_size = config.page_size;
    let engine = Engine::new(dictionary, config);

    match &cli.query {
        Some(query) => {
            let limit = cli.limit.unwrap_or(usize::MAX);
            run_query(&engine, query, &cli, limit)
        }
        None => interactive(&engine, &cli, cli.limit.unwrap_or(page_size)),
    }
}

fn run_query(engine: &Engine, query: &str, cli: &Cli, limit: usize) -> Result<()> {
    let query = soundalike_core::utils::normalize(query);
    let results = match engine.search(&query) {
        Ok(results) => results,
        Err(e) => anyhow::bail!("{e}"),
    };

    if cli.json {
        let shown: Vec<&SearchResult> = results.iter().take(limit).collect();
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    print_results(&results, cli, limit);
    Ok(())
}

fn interactive(engine: &Engine, cli: &Cli, page_size: usize) -> Result<()> {
    println!("soundalike - phonetic word finder ({})", cli.lang);
    if let Some(lang) = find_language(&cli.lang) {
        println!("Examples: {}", lang.examples.join(", "));
    }
    println!("Type a word or IPA (e.g. /pæt/) and press Enter. Ctrl+C to exit.");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let raw = line?;
        let query = soundalike_core::utils::normalize(&raw);
        if query.is_empty() {
            continue;
        }

        match engine.search(&query) {
            Ok(results) => {
                print_results(&results, cli, page_size);
                if results.len() > page_size {
                    println!("  ... {} more (rerun with -n to see them)", results.len() - page_size);
                }
                println!();
            }
            Err(e) => {
                println!("  {e}");
                println!();
            }
        }
    }
    Ok(())
}

fn print_results(results: &[SearchResult], cli: &Cli, limit: usize) {
    if results.is_empty() {
        println!("  (no matches above threshold)");
        return;
    }
    if let Some(first) = results.first() {
        println!("  query pronunciation: {}", first.query_ipa);
    }
    for (i, result) in results.iter().take(limit).enumerate() {
        match wiktionary_url(&result.word, &cli.lang).filter(|_| cli.links) {
            Some(url) => println!(
                "  {}. {} {} ({}%)  {url}",
                i + 1,
                result.word,
                result.ipa,
                result.similarity
            ),
            None => println!(
                "  {}. {} {} ({}%)",
                i + 1,
                result.word,
                result.ipa,
                result.similarity
            ),
        }
    }
}
