use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::engine::{convert, derive_bit_info, format_digits, parse_digits, render};
use crate::ledger::HistoryLedger;
use crate::models::{ConversionRecord, Radix, Theme};
use crate::storage::FileStore;
use crate::utils::get_data_dir;

#[derive(Parser)]
#[command(name = "numconvert")]
#[command(version = "0.1.0")]
#[command(about = "Convert numbers between binary, octal, decimal and hexadecimal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value from one base to another
    Convert {
        /// Digits of the value in the source base
        value: String,
        /// Source base: 2, 8, 10, 16 or bin/oct/dec/hex
        #[arg(long)]
        from: Radix,
        /// Target base: 2, 8, 10, 16 or bin/oct/dec/hex
        #[arg(long)]
        to: Radix,
        /// Print canonical digits without display grouping
        #[arg(long)]
        raw: bool,
    },
    /// Show a value in all four bases with bit/byte info
    Table {
        /// Digits of the value in the source base
        value: String,
        /// Source base: 2, 8, 10, 16 or bin/oct/dec/hex
        #[arg(long)]
        from: Radix,
    },
    /// List or edit the conversion history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Show or set the color theme
    Theme {
        /// light or dark; omit to print the current setting
        value: Option<Theme>,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List recorded conversions, newest first
    List,
    /// Remove one entry by its list index (0 = most recent)
    Remove { index: usize },
    /// Delete every recorded conversion
    Clear,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert { value, from, to, raw }) => run_convert(&value, from, to, raw),
        Some(Commands::Table { value, from }) => run_table(&value, from),
        Some(Commands::History { action }) => run_history(action),
        Some(Commands::Theme { value }) => run_theme(value),
        None => {
            if std::io::stdout().is_terminal() {
                let store = open_store()?;
                crate::tui::run(Box::new(store))
            } else {
                println!("Use --help for usage information");
                Ok(())
            }
        }
    }
}

fn open_store() -> Result<FileStore> {
    FileStore::open(get_data_dir()?)
}

fn run_convert(value: &str, from: Radix, to: Radix, raw: bool) -> Result<()> {
    let result = convert(value, from, to)?;

    if raw {
        println!("{}", result.raw_digits);
    } else {
        println!("{}", result.formatted_digits);
    }

    // A one-shot conversion is stable by definition, so it goes straight
    // into the history
    let mut store = open_store()?;
    let mut ledger = HistoryLedger::load(&store);
    let record =
        ConversionRecord::new(value.to_ascii_uppercase(), result.raw_digits.clone(), from, to);
    ledger.append(record, &mut store)?;

    Ok(())
}

fn run_table(value: &str, from: Radix) -> Result<()> {
    let value = parse_digits(value, from)?;

    for radix in Radix::ALL {
        println!("{:<4} {}", radix.short_name(), format_digits(&render(value, radix), radix));
    }
    println!("{}", derive_bit_info(value).summary());

    Ok(())
}

fn run_history(action: Option<HistoryAction>) -> Result<()> {
    let mut store = open_store()?;
    let mut ledger = HistoryLedger::load(&store);

    match action.unwrap_or(HistoryAction::List) {
        HistoryAction::List => {
            println!("Conversion History");
            println!("==================");
            println!("Total entries: {}", ledger.len());
            for (idx, entry) in ledger.entries().iter().enumerate() {
                println!(
                    "{idx:>3}  {} {} → {} {}   {}",
                    entry.from_base.short_name(),
                    entry.from,
                    entry.to_base.short_name(),
                    entry.to,
                    entry.time.format("%Y-%m-%d %H:%M:%S"),
                );
            }
        }
        HistoryAction::Remove { index } => {
            if ledger.remove(index, &mut store)? {
                println!("Removed entry {index}");
            } else {
                eprintln!("No entry at index {index}");
            }
        }
        HistoryAction::Clear => {
            ledger.clear(&mut store)?;
            println!("History cleared");
        }
    }

    Ok(())
}

fn run_theme(value: Option<Theme>) -> Result<()> {
    let mut store = open_store()?;

    match value {
        Some(theme) => {
            theme.save(&mut store)?;
            println!("Theme set to {theme}");
        }
        None => println!("{}", Theme::load(&store)),
    }

    Ok(())
}
