//! CLI tool for card number checking.
//!
//! # Usage
//!
//! ```bash
//! # Check and classify card numbers
//! cardchecker check 4532015112830366 "6011 5144 3354 6201"
//!
//! # JSON output, textbook Luhn comparison
//! cardchecker --luhn standard check 5105105105105100 --output json
//!
//! # Checksum only
//! cardchecker luhn 4532015112830366
//!
//! # Network only
//! cardchecker network 6011514433546201
//!
//! # Print the active rule table
//! cardchecker --rules networks.json rules
//! ```

use cardchecker::batch::BatchSummary;
use cardchecker::config::ClassifierArgs;
use cardchecker::{luhn, mask, normalize, CardClassifier, ValidationResult};
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cardchecker")]
#[command(
    author,
    version,
    about = "Card number checksum and issuing network classification"
)]
struct Cli {
    #[command(flatten)]
    classifier: ClassifierArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check and classify one or more card numbers
    Check {
        /// Card numbers to check (spaces and dashes allowed)
        #[arg(required = true)]
        card_numbers: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check if a card number passes the Luhn checksum
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Classify a card number by issuing network
    Network {
        /// Card number (or leading digits)
        card_number: String,
    },

    /// Print the network rules in the order they are tried
    Rules,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let classifier = match cli.classifier.build() {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match cli.command {
        Commands::Check {
            card_numbers,
            output,
        } => cmd_check(&classifier, &card_numbers, output),
        Commands::Luhn { card_number } => cmd_luhn(&classifier, &card_number),
        Commands::Network { card_number } => cmd_network(&classifier, &card_number),
        Commands::Rules => cmd_rules(&classifier),
    }
}

fn cmd_check(classifier: &CardClassifier, card_numbers: &[String], output: OutputFormat) -> ExitCode {
    let results = classifier.check_all(card_numbers);

    for (raw, result) in card_numbers.iter().zip(&results) {
        match output {
            OutputFormat::Text => print_text(raw, result),
            OutputFormat::Json => print_json(raw, result),
        }
    }

    let summary = BatchSummary::from_results(&results);
    if card_numbers.len() > 1 {
        if let OutputFormat::Text = output {
            println!(
                "Summary: {} checked, {} valid, {} failed checksum, {} malformed",
                summary.total, summary.valid, summary.invalid, summary.malformed
            );
        }
    }

    if summary.malformed > 0 {
        ExitCode::from(2)
    } else if summary.invalid > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn print_text(raw: &str, result: &Result<ValidationResult, cardchecker::ValidationError>) {
    println!("Card: {}", mask::mask_string(raw));
    match result {
        Ok(r) => {
            println!("Valid: {}", if r.is_valid() { "yes" } else { "no" });
            println!("Network: {}", r.network().unwrap_or("Unknown"));
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
        }
    }
}

fn print_json(raw: &str, result: &Result<ValidationResult, cardchecker::ValidationError>) {
    let value = match result {
        Ok(r) => serde_json::json!({
            "card_number": raw,
            "valid": r.is_valid(),
            "network": r.network(),
        }),
        Err(e) => serde_json::json!({
            "card_number": raw,
            "error": e.to_string(),
        }),
    };
    println!("{}", value);
}

fn cmd_luhn(classifier: &CardClassifier, card_number: &str) -> ExitCode {
    match luhn::check(&normalize::normalize(card_number), classifier.luhn_mode()) {
        Ok(true) => {
            println!("Luhn check: PASS");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("Luhn check: FAIL");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn cmd_network(classifier: &CardClassifier, card_number: &str) -> ExitCode {
    let normalized = normalize::normalize(card_number);
    if normalized.is_empty() {
        eprintln!("Error: No digits provided");
        return ExitCode::from(2);
    }

    match classifier.table().matching_rule(&normalized) {
        Some(rule) => {
            println!("Network: {}", rule.network());
            println!("Matched Rule: {}", rule.spec());
        }
        None => match classifier.classify(&normalized) {
            Some(network) => {
                println!("Network: {}", network);
                println!("Matched Rule: fallback");
            }
            None => println!("Network: Unknown"),
        },
    }
    ExitCode::SUCCESS
}

fn cmd_rules(classifier: &CardClassifier) -> ExitCode {
    let table = classifier.table();
    println!("# {} rules, {} order", table.len(), table.order().name());
    for rule in table.rules() {
        println!("{}", rule);
    }
    println!(
        "{} => {} (fallback)",
        cardchecker::network::FALLBACK_PREFIX,
        cardchecker::network::FALLBACK_NETWORK
    );
    ExitCode::SUCCESS
}
