//! Command-line surface for the exercises.
//!
//! Parsing lives here (not in `main.rs`) so the casebook can drive the same
//! commands in-process. Every command evaluates to a JSON value that is then
//! rendered either as JSON or as plain text.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use tracing::debug;

use crate::core::black_jack::{self, Card, Higher};
use crate::core::collatz::CollatzCache;
use crate::core::{
    armstrong, bob, currency, darts, grains, isogram, perfect_numbers, pig_latin, raindrops,
    triangle, vocab,
};
use crate::io::config::{DEFAULT_CONFIG_FILE, DrillsConfig, load_config, render_config, write_config};

#[derive(Debug, Parser)]
#[command(name = "drills", version, about = "Introductory programming exercise drills")]
pub struct Cli {
    /// Config file with exercise constants (missing file means defaults).
    #[arg(long, global = true, env = "DRILLS_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Print results as JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate text into Pig Latin.
    PigLatin {
        /// Words to translate (joined with single spaces).
        text: Vec<String>,
    },
    /// Blackjack card scoring.
    #[command(subcommand)]
    Card(CardCommand),
    /// Reactor meltdown mitigation checks.
    #[command(subcommand)]
    Reactor(ReactorCommand),
    /// Lasagna cooking times.
    #[command(subcommand)]
    Lasagna(LasagnaCommand),
    /// Steps for each number to reach 1 under the Collatz rules.
    Collatz {
        #[arg(required = true)]
        numbers: Vec<u64>,
    },
    /// Classify a number as perfect, abundant or deficient.
    Classify { number: u64 },
    /// Check whether a number is an Armstrong number.
    Armstrong { number: u64 },
    /// Score a dart throw.
    Darts {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Ask Bob something.
    Bob {
        #[arg(default_value = "")]
        sentence: String,
    },
    /// Check whether text is an isogram.
    Isogram { text: String },
    /// Classify a triangle by its sides.
    Triangle {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Grains of wheat on a chessboard.
    #[command(subcommand)]
    Grains(GrainsCommand),
    /// Convert a number to raindrop sounds.
    Raindrops { number: u64 },
    /// Currency exchange helpers.
    #[command(subcommand)]
    Exchange(ExchangeCommand),
    /// Vocabulary prefix and suffix helpers.
    #[command(subcommand)]
    Vocab(VocabCommand),
    /// Manage the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Two cards in hand.
#[derive(Debug, Clone, Args)]
pub struct CardPair {
    pub first: Card,
    pub second: Card,
}

#[derive(Debug, Subcommand)]
pub enum CardCommand {
    /// Scoring value of one card.
    Value { card: Card },
    /// Higher-valued card (both on a tie).
    Higher(CardPair),
    /// Value an incoming ace should take.
    Ace(CardPair),
    /// Whether the hand is a natural blackjack.
    Blackjack(CardPair),
    /// Whether the hand may be split.
    Split(CardPair),
    /// Whether the hand may double down.
    DoubleDown(CardPair),
}

#[derive(Debug, Subcommand)]
pub enum ReactorCommand {
    /// Whether the reactor is critical and balanced.
    Balanced { temperature: f64, neutrons: f64 },
    /// Efficiency zone of the generated power.
    Efficiency {
        voltage: f64,
        current: f64,
        max_power: f64,
    },
    /// Fail-safe status for the current output.
    FailSafe {
        temperature: f64,
        neutrons: f64,
        threshold: f64,
    },
}

#[derive(Debug, Subcommand)]
pub enum LasagnaCommand {
    /// Oven minutes remaining.
    Remaining { elapsed: i64 },
    /// Preparation minutes for the given layers.
    Prep { layers: i64 },
    /// Total minutes spent so far.
    Elapsed { layers: i64, elapsed: i64 },
}

#[derive(Debug, Subcommand)]
pub enum GrainsCommand {
    /// Grains on one square (1-64).
    Square { number: u32 },
    /// Grains on the whole board, or on the first N squares.
    Total {
        #[arg(long)]
        board_size: Option<u32>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ExchangeCommand {
    /// Foreign currency received for a budget.
    Money { budget: f64, rate: f64 },
    /// Money left after exchanging.
    Change { budget: f64, exchanging: f64 },
    /// Total value of a stack of bills.
    BillsValue { denomination: u64, count: u64 },
    /// Whole bills obtainable for an amount.
    Bills {
        amount: f64,
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        denomination: u64,
    },
    /// Amount left over after taking whole bills.
    Leftover {
        amount: f64,
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        denomination: u64,
    },
    /// Value in whole bills after the exchange spread.
    Exchangeable {
        budget: f64,
        rate: f64,
        /// Spread in percent.
        spread: f64,
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        denomination: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum VocabCommand {
    /// Add a prefix to a word.
    Prefix {
        word: String,
        #[arg(long, default_value = "un")]
        prefix: String,
    },
    /// Build a word group from a prefix and words.
    Groups {
        prefix: String,
        words: Vec<String>,
    },
    /// Strip a "ness" suffix.
    Ness { word: String },
    /// Turn an adjective in a sentence into a verb.
    Verb {
        sentence: String,
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with the default values.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the effective config.
    Show,
}

/// State shared by the commands of one invocation or casebook case.
///
/// Owns the Collatz memo, so repeated numbers within a session are not
/// recomputed while separate sessions never share results.
#[derive(Debug, Default)]
pub struct Session {
    pub config: DrillsConfig,
    config_path: Option<PathBuf>,
    collatz: CollatzCache,
}

impl Session {
    pub fn new(config: DrillsConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Attach the config path used by `config init`.
    pub fn with_config_path(mut self, path: &Path) -> Self {
        self.config_path = Some(path.to_path_buf());
        self
    }

    pub fn collatz_cache(&self) -> &CollatzCache {
        &self.collatz
    }
}

/// Entry point for the binary: load config, execute, render.
pub fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.command {
        Command::Config(ConfigCommand::Init { .. }) => DrillsConfig::default(),
        _ => load_config(&cli.config)?,
    };
    let mut session = Session::new(config).with_config_path(&cli.config);
    let value = execute(&cli.command, &mut session)?;
    if cli.json {
        Ok(serde_json::to_string_pretty(&value)?)
    } else {
        Ok(render_text(&value))
    }
}

/// Evaluate one command against the session.
pub fn execute(command: &Command, session: &mut Session) -> Result<Value> {
    debug!(?command, "execute");
    let value = match command {
        Command::PigLatin { text } => json!(pig_latin::translate(&text.join(" "))),
        Command::Card(card) => execute_card(card),
        Command::Reactor(reactor) => execute_reactor(reactor, &session.config)?,
        Command::Lasagna(lasagna) => {
            let times = &session.config.lasagna;
            match lasagna {
                LasagnaCommand::Remaining { elapsed } => json!(times.bake_time_remaining(*elapsed)?),
                LasagnaCommand::Prep { layers } => json!(times.preparation_time_in_minutes(*layers)?),
                LasagnaCommand::Elapsed { layers, elapsed } => {
                    json!(times.elapsed_time_in_minutes(*layers, *elapsed)?)
                }
            }
        }
        Command::Collatz { numbers } => execute_collatz(numbers, &mut session.collatz)?,
        Command::Classify { number } => json!(perfect_numbers::classify(*number)?),
        Command::Armstrong { number } => json!(armstrong::is_armstrong_number(*number)),
        Command::Darts { x, y } => json!(darts::score(*x, *y)),
        Command::Bob { sentence } => json!(bob::response(sentence).as_str()),
        Command::Isogram { text } => json!(isogram::is_isogram(text)),
        Command::Triangle { a, b, c } => {
            let sides = [*a, *b, *c];
            json!({
                "equilateral": triangle::equilateral(sides),
                "isosceles": triangle::isosceles(sides),
                "scalene": triangle::scalene(sides),
            })
        }
        Command::Grains(GrainsCommand::Square { number }) => json!(grains::square(*number)?),
        Command::Grains(GrainsCommand::Total { board_size }) => match board_size {
            Some(size) => json!(grains::total_for(*size)?),
            None => json!(grains::total()),
        },
        Command::Raindrops { number } => json!(raindrops::convert(*number)),
        Command::Exchange(exchange) => execute_exchange(exchange)?,
        Command::Vocab(vocab) => execute_vocab(vocab)?,
        Command::Config(config) => execute_config(config, session)?,
    };
    Ok(value)
}

fn execute_card(command: &CardCommand) -> Value {
    match command {
        CardCommand::Value { card } => json!(card.value()),
        CardCommand::Higher(CardPair { first, second }) => {
            match black_jack::higher_card(*first, *second) {
                Higher::One(card) => json!(card),
                Higher::Both(first, second) => json!([first, second]),
            }
        }
        CardCommand::Ace(CardPair { first, second }) => {
            json!(black_jack::value_of_ace(*first, *second))
        }
        CardCommand::Blackjack(CardPair { first, second }) => {
            json!(black_jack::is_blackjack(*first, *second))
        }
        CardCommand::Split(CardPair { first, second }) => {
            json!(black_jack::can_split_pairs(*first, *second))
        }
        CardCommand::DoubleDown(CardPair { first, second }) => {
            json!(black_jack::can_double_down(*first, *second))
        }
    }
}

fn execute_reactor(command: &ReactorCommand, config: &DrillsConfig) -> Result<Value> {
    let reactor = &config.reactor;
    let value = match command {
        ReactorCommand::Balanced {
            temperature,
            neutrons,
        } => json!(reactor.is_criticality_balanced(*temperature, *neutrons)),
        ReactorCommand::Efficiency {
            voltage,
            current,
            max_power,
        } => json!(reactor.reactor_efficiency(*voltage, *current, *max_power)?),
        ReactorCommand::FailSafe {
            temperature,
            neutrons,
            threshold,
        } => json!(reactor.fail_safe(*temperature, *neutrons, *threshold)),
    };
    Ok(value)
}

/// One count for a single number; `{number, steps}` records otherwise.
fn execute_collatz(numbers: &[u64], cache: &mut CollatzCache) -> Result<Value> {
    let mut records = Vec::with_capacity(numbers.len());
    for &number in numbers {
        let steps = cache.steps(number)?;
        records.push(json!({ "number": number, "steps": steps }));
    }
    debug!(cached = cache.len(), "collatz memo size");
    if let [single] = records.as_slice() {
        return Ok(single["steps"].clone());
    }
    Ok(Value::Array(records))
}

fn execute_exchange(command: &ExchangeCommand) -> Result<Value> {
    let value = match command {
        ExchangeCommand::Money { budget, rate } => json!(currency::exchange_money(*budget, *rate)?),
        ExchangeCommand::Change { budget, exchanging } => {
            json!(currency::get_change(*budget, *exchanging)?)
        }
        ExchangeCommand::BillsValue {
            denomination,
            count,
        } => json!(currency::get_value_of_bills(*denomination, *count)?),
        ExchangeCommand::Bills {
            amount,
            denomination,
        } => json!(currency::get_number_of_bills(*amount, *denomination)?),
        ExchangeCommand::Leftover {
            amount,
            denomination,
        } => json!(currency::get_leftover_of_bills(*amount, *denomination)?),
        ExchangeCommand::Exchangeable {
            budget,
            rate,
            spread,
            denomination,
        } => json!(currency::exchangeable_value(
            *budget,
            *rate,
            *spread,
            *denomination
        )?),
    };
    Ok(value)
}

fn execute_vocab(command: &VocabCommand) -> Result<Value> {
    let value = match command {
        VocabCommand::Prefix { word, prefix } => json!(vocab::add_prefix(word, prefix)),
        VocabCommand::Groups { prefix, words } => {
            let group: Vec<&str> = std::iter::once(prefix.as_str())
                .chain(words.iter().map(String::as_str))
                .collect();
            json!(vocab::make_word_groups(&group))
        }
        VocabCommand::Ness { word } => json!(vocab::remove_suffix_ness(word)),
        VocabCommand::Verb { sentence, index } => json!(vocab::adjective_to_verb(sentence, *index)?),
    };
    Ok(value)
}

fn execute_config(command: &ConfigCommand, session: &Session) -> Result<Value> {
    match command {
        ConfigCommand::Init { force } => {
            let path = session
                .config_path
                .as_deref()
                .ok_or_else(|| anyhow!("config init requires a config path"))?;
            let written = *force || !path.exists();
            if written {
                write_config(path, &DrillsConfig::default())?;
            }
            Ok(json!({ "config": path.display().to_string(), "written": written }))
        }
        ConfigCommand::Show => Ok(json!(render_config(&session.config)?.trim_end())),
    }
}

/// Render a command result as plain text.
///
/// Strings print as-is, records as `key=value` pairs, and lists of records one
/// per line.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => {
            let separator = if items.iter().any(Value::is_object) {
                "\n"
            } else {
                " "
            };
            items
                .iter()
                .map(render_text)
                .collect::<Vec<_>>()
                .join(separator)
        }
        Value::Object(fields) => fields
            .iter()
            .map(|(key, field)| format!("{key}={}", render_text(field)))
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}
