use clap::Parser;
use probemap::{DictLoader, ProbeMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Error, Result, Write};
use std::path::PathBuf;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let map = load_dictionary(&cli)?;
    run_shell(&map)
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "interactive dictionary backed by a fixed-capacity linear-probing hash table"
)]
struct Cli {
    /// Path to a line-oriented "key: value" dictionary file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Number of slots in the table (fixed for its whole lifetime)
    #[arg(short, long, default_value_t = 1115)]
    capacity: usize,

    /// Character separating keys from values
    #[arg(short, long, default_value_t = ':')]
    separator: char,

    /// Abort on the first malformed record instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn load_dictionary(cli: &Cli) -> Result<ProbeMap> {
    let mut map = ProbeMap::new(cli.capacity);

    let start = Instant::now();
    let reader = BufReader::new(File::open(&cli.input)?);
    let report = DictLoader::default()
        .with_separator(cli.separator)
        .with_strict(cli.strict)
        .load(&mut map, reader)
        .map_err(Error::other)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!(
        "Loaded {} records in {:.2} ms ({} skipped)",
        report.loaded, elapsed_ms, report.skipped
    );

    let stats = map.stats();
    let json = serde_json::to_string_pretty(&stats)
        .map_err(|e| Error::other(format!("Failed to format JSON: {e}")))?;
    println!("{json}");
    println!("Average probe length: {:.2}\n", stats.average_probe_length());

    Ok(map)
}

fn run_shell(map: &ProbeMap) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("Enter a word to look up (0 to exit): ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let word = line.trim();
        if word == "0" {
            break;
        }

        match map.get(word) {
            Some(meaning) => println!("{word} means: {meaning}\n"),
            None => println!("The word '{word}' is not in the dictionary.\n"),
        }
    }
    Ok(())
}
