//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use crate::hyphenation::Hyphenator;
use crate::serialization::{
    BincodeSerializer, HyphenatorSerializer, JsonSerializer, PlainTextSerializer,
};
use crate::transcription::Transcriber;

use super::args::{Cli, Commands, OutputArgs, SerializationFormat};
use super::config::CliConfig;

/// Execute a parsed command line
pub fn execute(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Transcribe { text, output } => cmd_transcribe(&config, text, &output),
        Commands::Syllabify { text, output } => cmd_syllabify(&config, text, &output),
        Commands::Hyphenate {
            words,
            patterns,
            exceptions,
            compiled,
            format,
            separator,
        } => cmd_hyphenate(
            &words,
            patterns.as_deref(),
            exceptions.as_deref(),
            compiled.as_deref(),
            format,
            &separator,
        ),
        Commands::Compile {
            patterns,
            exceptions,
            output,
            format,
        } => cmd_compile(&patterns, exceptions.as_deref(), &output, format),
    }
}

/// Transcribe command
fn cmd_transcribe(config: &CliConfig, text: Option<String>, output: &OutputArgs) -> Result<()> {
    let transcriber = build_transcriber(config, output)?;
    let text = read_text(text)?;

    for line in text.lines() {
        let transcription = transcriber
            .transcribe(line)
            .with_context(|| format!("Failed to transcribe: {}", line))?;
        println!("{}", transcription);
    }

    Ok(())
}

/// Syllabify command
fn cmd_syllabify(config: &CliConfig, text: Option<String>, output: &OutputArgs) -> Result<()> {
    let transcriber = build_transcriber(config, output)?;
    let text = read_text(text)?;

    for line in text.lines() {
        println!("{}", transcriber.syllabify(line));
    }

    Ok(())
}

/// Hyphenate command
fn cmd_hyphenate(
    words: &[String],
    patterns: Option<&Path>,
    exceptions: Option<&Path>,
    compiled: Option<&Path>,
    format: SerializationFormat,
    separator: &str,
) -> Result<()> {
    let owned;
    let hyphenator: &Hyphenator = match (compiled, patterns) {
        (Some(path), _) => {
            owned = load_hyphenator(path, format)?;
            &owned
        }
        (None, Some(path)) => {
            owned = build_hyphenator(path, exceptions)?;
            &owned
        }
        (None, None) => Hyphenator::spanish()?,
    };

    for word in words {
        println!("{}", hyphenator.hyphenate(word).join(separator));
    }

    Ok(())
}

/// Compile command
fn cmd_compile(
    patterns: &Path,
    exceptions: Option<&Path>,
    output: &Path,
    format: SerializationFormat,
) -> Result<()> {
    let hyphenator = build_hyphenator(patterns, exceptions)?;
    println!(
        "{}  Input:  {} ({} patterns, {} exceptions)",
        "→".cyan(),
        patterns.display().to_string().yellow(),
        hyphenator.trie().pattern_count().to_string().green(),
        hyphenator.exceptions().len().to_string().green()
    );

    save_hyphenator(&hyphenator, output, format)?;
    println!(
        "{}  Output: {} ({})",
        "→".cyan(),
        output.display().to_string().yellow(),
        format.to_string().green()
    );

    println!();
    println!("{}", "Compilation complete!".green().bold());

    Ok(())
}

fn build_transcriber(config: &CliConfig, output: &OutputArgs) -> Result<Transcriber> {
    let tag = config.language(output);
    let transcriber = Transcriber::for_tag(tag)?;
    Ok(transcriber.with_separators(config.separators(output)))
}

/// Use the argument, or read all of stdin when it is absent
fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => io::read_to_string(io::stdin()).context("Failed to read from stdin"),
    }
}

/// Build a hyphenator from pattern and exception source files
pub fn build_hyphenator(patterns: &Path, exceptions: Option<&Path>) -> Result<Hyphenator> {
    let pattern_text = std::fs::read_to_string(patterns)
        .with_context(|| format!("Failed to read patterns: {}", patterns.display()))?;

    let exception_text = match exceptions {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read exceptions: {}", path.display()))?,
        None => String::new(),
    };

    Hyphenator::new(&pattern_text, &exception_text)
        .with_context(|| format!("Invalid pattern set: {}", patterns.display()))
}

/// Load a compiled hyphenator
pub fn load_hyphenator(path: &Path, format: SerializationFormat) -> Result<Hyphenator> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let hyphenator = match format {
        SerializationFormat::Bincode => BincodeSerializer::deserialize(reader),
        SerializationFormat::Json => JsonSerializer::deserialize(reader),
        SerializationFormat::Text => PlainTextSerializer::deserialize(reader),
    }
    .with_context(|| format!("Failed to load {} hyphenator: {}", format, path.display()))?;

    Ok(hyphenator)
}

/// Save a hyphenator in the given format
pub fn save_hyphenator(
    hyphenator: &Hyphenator,
    path: &Path,
    format: SerializationFormat,
) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        SerializationFormat::Bincode => BincodeSerializer::serialize(hyphenator, &mut writer),
        SerializationFormat::Json => JsonSerializer::serialize(hyphenator, &mut writer),
        SerializationFormat::Text => PlainTextSerializer::serialize(hyphenator, &mut writer),
    }
    .with_context(|| format!("Failed to save {} hyphenator: {}", format, path.display()))?;

    writer
        .flush()
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
