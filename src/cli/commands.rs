use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use clap::{Parser, Subcommand};

use crate::loader::StoreSource;
use crate::logging;
use crate::models::Conversation;
use crate::tui::run_interactive;
use crate::utils::{default_store_dir, format_path_with_tilde, sanitize_for_terminal};

#[derive(Parser)]
#[command(name = "chat-store-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Read the latest locally stored ChatGPT desktop conversation", long_about = None)]
pub struct Cli {
    /// Store directory to scan [default: ~/Library/Application Support/com.openai.chat]
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Read this snapshot file instead of locating the newest one
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "dir")]
    pub file: Option<PathBuf>,

    /// Log skipped records and load details to stderr (not in tui)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Print the conversation in chronological order (default)
    Show,
    /// Show statistics about the conversation
    Stats,
    /// Write the conversation to stdout as JSON
    Export,
    /// Browse the conversation interactively
    Tui,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Show);

    logging::init(log_directive(command, cli.verbose));

    let source = resolve_source(&cli)?;

    match command {
        Commands::Show => show_conversation(&source)?,
        Commands::Stats => show_stats(&source)?,
        Commands::Export => export_json(&source)?,
        Commands::Tui => run_interactive(source)?,
    }

    Ok(())
}

/// Default log filter for `command`; `RUST_LOG` still overrides it
fn log_directive(command: Commands, verbose: bool) -> &'static str {
    match command {
        // Stderr shares the alternate screen with the TUI
        Commands::Tui => "off",
        _ => logging::default_directive(verbose),
    }
}

fn resolve_source(cli: &Cli) -> Result<StoreSource> {
    if let Some(file) = &cli.file {
        return Ok(StoreSource::File(file.clone()));
    }
    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => default_store_dir().context("Could not determine the home directory")?,
    };
    Ok(StoreSource::Directory(dir))
}

fn format_local(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn show_conversation(source: &StoreSource) -> Result<()> {
    let Some(conversation) = source.load() else {
        println!("No conversation store found in {}", format_path_with_tilde(source.path()));
        return Ok(());
    };

    if conversation.is_empty() {
        println!("No messages found in {}", format_path_with_tilde(source.path()));
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    for message in &conversation.messages {
        writeln!(
            stdout,
            "[{}] {}: {}",
            format_local(&message.created_at),
            sanitize_for_terminal(&message.author),
            sanitize_for_terminal(&message.content)
        )?;
    }

    Ok(())
}

fn show_stats(source: &StoreSource) -> Result<()> {
    let conversation = source.load();
    let empty = Conversation::default();
    let stats_for = conversation.as_ref().unwrap_or(&empty);

    println!("Conversation Store Statistics");
    println!("=============================");
    println!("Total messages: {}", stats_for.len());
    for (author, count) in stats_for.count_by_author() {
        println!("  {}: {}", sanitize_for_terminal(author), count);
    }
    println!();

    match stats_for.source.as_deref() {
        Some(path) => println!("Store file: {}", format_path_with_tilde(path)),
        None => println!("Store file: none found in {}", format_path_with_tilde(source.path())),
    }

    if let Some(oldest) = stats_for.oldest() {
        println!("Oldest message: {}", format_local(&oldest));
    }
    if let Some(newest) = stats_for.newest() {
        println!("Newest message: {}", format_local(&newest));
    }

    Ok(())
}

fn export_json(source: &StoreSource) -> Result<()> {
    let conversation = source.load().unwrap_or_default();
    let json =
        serde_json::to_string_pretty(&conversation).context("Failed to serialize conversation")?;
    println!("{}", json);
    Ok(())
}
