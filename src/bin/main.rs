use anagram_core::config::IndexConfig;
use anagram_core::AnagramEngine;
use clap::Parser;
use crossterm::style::Stylize;
use std::io::{self, stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Interactive anagram index: store words, then ask which of them can be
/// spelled from a handful of letters.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Index file to open and save (overrides the config)
    #[arg(short, long, value_name = "FILE")]
    index: Option<PathBuf>,

    /// Word list to load at startup; may be repeated
    #[arg(short, long, value_name = "FILE")]
    wordlist: Vec<PathBuf>,

    /// Print query results as JSON arrays
    #[arg(long)]
    json: bool,

    /// Do not save the index on exit
    #[arg(long)]
    no_autosave: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn build_config(args: &Args) -> anagram_core::Result<IndexConfig> {
    let mut config = match &args.config {
        Some(path) => IndexConfig::from_file(path)?,
        None => IndexConfig::default(),
    };
    if args.index.is_some() {
        config.index_path = args.index.clone();
    }
    config.wordlists.extend(args.wordlist.iter().cloned());
    if args.no_autosave {
        config.autosave = false;
    }
    Ok(config)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(&args)?;
    let mut engine = AnagramEngine::from_config(config)?;

    println!("{}", "Anagram index. Type 'help' for commands, 'exit' to quit.".bold());
    println!("Words stored: {}", engine.index.len());

    let stdin = stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n> ");
        stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        match command {
            "" => {}
            "exit" | "quit" => break,
            "help" => print_help(),
            "add" => {
                for word in &rest {
                    match engine.index.insert(word) {
                        Ok(true) => println!("{} {}", "added".green(), word),
                        Ok(false) => println!("{} {} (anagram already stored)", "kept".yellow(), word),
                        Err(e) => println!("{} {}", "[ERROR]".red(), e),
                    }
                }
            }
            "has" => match rest.first().map(|w| engine.index.get(w)) {
                Some(Ok(Some(stored))) => println!("{} (stored as '{}')", "yes".green(), stored),
                Some(Ok(None)) => println!("{}", "no".yellow()),
                Some(Err(e)) => println!("{} {}", "[ERROR]".red(), e),
                None => println!("usage: has <word>"),
            },
            "find" => match rest.first().map(|w| engine.find(w)) {
                Some(Ok(found)) => print_words(&found, args.json)?,
                Some(Err(e)) => println!("{} {}", "[ERROR]".red(), e),
                None => println!("usage: find <letters>"),
            },
            "list" => {
                let mut words: Vec<String> = engine.index.words().map(str::to_string).collect();
                words.sort_unstable();
                print_words(&words, args.json)?;
            }
            "save" => match engine.save_index() {
                Ok(()) => match engine.index_path() {
                    Some(path) => println!("Index saved to '{}'", path.display()),
                    None => println!("No index path set, nothing saved."),
                },
                Err(e) => println!("{} {}", "[ERROR]".red(), e),
            },
            other => println!("unknown command '{}', type 'help'", other),
        }
    }

    if engine.config().autosave && engine.index_path().is_some() {
        println!("\nSaving index...");
        engine.save_index()?;
    }
    Ok(())
}

fn print_words(words: &[String], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(words)?);
    } else if words.is_empty() {
        println!("{}", "No words found.".dim());
    } else {
        for (i, word) in words.iter().enumerate() {
            println!("  {:>3}: {}", i + 1, word.as_str().cyan());
        }
    }
    Ok(())
}

fn print_help() {
    println!("  add <word>...   store words (max 8 letters, A-Z a-z)");
    println!("  has <word>      is this letter multiset stored?");
    println!("  find <letters>  stored words spelled from these letters");
    println!("  list            every stored word");
    println!("  save            write the index to disk");
    println!("  exit            save (if autosave) and quit");
}
