use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use scel_reader::{ScelDict, ScelReader};

#[derive(Parser)]
#[command(name = "scel", about = "Decode a Sogou Pinyin .scel dictionary to JSON")]
struct Cli {
    /// Path to the .scel file
    #[arg(value_name = "PATH", required_unless_present = "path_flag")]
    path: Option<PathBuf>,

    /// Path to the .scel file (alternative to the positional argument)
    #[arg(short = 'p', long = "path", value_name = "PATH", conflicts_with = "path")]
    path_flag: Option<PathBuf>,

    /// Print only the pinyin keys, in file order
    #[arg(long)]
    keys_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print dictionary metadata to stderr before the output
    #[arg(long)]
    info: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = cli.path.as_ref().or(cli.path_flag.as_ref()) else {
        return Err("no input file given".into());
    };

    let dict = ScelReader::open(path)?.decode()?;

    if cli.info {
        print_info(&dict);
    }

    let output = if cli.keys_only {
        let keys: Vec<&str> = dict.words.pinyin_order().collect();
        to_json(&keys, cli.pretty)?
    } else {
        to_json(&dict.words, cli.pretty)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn print_info(dict: &ScelDict) {
    eprintln!("Dictionary Information:");
    eprintln!("  Name: {}", dict.info.name);
    eprintln!("  Category: {}", dict.info.category);
    eprintln!("  Description: {}", dict.info.description);
    eprintln!("  Examples: {}", dict.info.examples);
    eprintln!("\nStatistics:");
    eprintln!("  Pinyin syllables: {}", dict.pinyin_table.len());
    eprintln!("  Pinyin groups: {}", dict.words.len());
    eprintln!("  Words: {}", dict.word_count());
}
