//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Top-level arguments
#[derive(Parser)]
#[command(name = "silabeo")]
#[command(about = "Syllabification and phonetic transcription of Spanish text")]
#[command(version)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Transcribe text to IPA (reads stdin when TEXT is omitted)
    Transcribe {
        /// Text to transcribe
        text: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Split text into stressed syllables without transcribing it
    Syllabify {
        /// Text to syllabify
        text: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Hyphenate words with the bundled or a custom pattern set
    Hyphenate {
        /// Words to hyphenate
        #[arg(required = true)]
        words: Vec<String>,

        /// Liang pattern file (whitespace-separated tokens)
        #[arg(short, long, conflicts_with = "compiled")]
        patterns: Option<PathBuf>,

        /// Exception file (hyphenated words)
        #[arg(short, long, requires = "patterns")]
        exceptions: Option<PathBuf>,

        /// Hyphenator compiled with the `compile` command
        #[arg(long)]
        compiled: Option<PathBuf>,

        /// Format of the compiled hyphenator
        #[arg(short = 'f', long, default_value = "bincode")]
        format: SerializationFormat,

        /// Separator placed between syllables
        #[arg(short, long, default_value = "-")]
        separator: String,
    },

    /// Compile a pattern set into a serialized hyphenator
    Compile {
        /// Liang pattern file
        #[arg(short, long)]
        patterns: PathBuf,

        /// Exception file
        #[arg(short, long)]
        exceptions: Option<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short = 'f', long, default_value = "bincode")]
        format: SerializationFormat,
    },
}

/// Language and separator overrides shared by `transcribe` and `syllabify`.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Language tag
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Separator between phrases
    #[arg(long)]
    pub phrase_sep: Option<char>,

    /// Separator between words
    #[arg(long)]
    pub word_sep: Option<char>,

    /// Separator between syllables
    #[arg(long)]
    pub syllable_sep: Option<char>,

    /// Mark placed before the stressed syllable
    #[arg(long)]
    pub stress_mark: Option<char>,

    /// Use an ASCII apostrophe as the stress mark
    #[arg(long, conflicts_with = "stress_mark")]
    pub ascii: bool,
}

/// On-disk format of a compiled hyphenator
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SerializationFormat {
    /// Bincode binary format
    Bincode,
    /// JSON format
    Json,
    /// Plain text (patterns, blank line, exceptions)
    Text,
}

impl fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationFormat::Bincode => write!(f, "bincode"),
            SerializationFormat::Json => write!(f, "json"),
            SerializationFormat::Text => write!(f, "text"),
        }
    }
}
