use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(author, version)]
#[command(about = "Annotate chat messages into typed rich-text spans")]
#[command(
    long_about = "Chatmark is a CLI for annotating chat messages written in WhatsApp-style \
    markup. It recognizes **bold**, _italic_, ~strikethrough~, [markdown](links), bare URLs, \
    *Label:** list labels and list markers, and emits a renderer-agnostic span document."
)]
#[command(after_help = "\
EXAMPLES:

    # Annotate a file and print JSON
    chatmark annotate message.txt

    # Annotate from stdin
    echo '**hi** www.example.com' | chatmark annotate

    # Pretty-print the JSON
    chatmark annotate --pretty message.txt

    # Inspect the span tree
    chatmark parse message.txt

CONFIGURATION:

Chatmark looks for configuration files in this order:
  1. Explicit --config path
  2. chatmark.toml or .chatmark.toml in current/parent directories
  3. ~/.config/chatmark/config.toml (XDG)
  4. Built-in defaults

Example .chatmark.toml:

    [links]
    default_scheme = \"https://\"

    [output]
    pretty = true
")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, chatmark will \
        search for .chatmark.toml or chatmark.toml in the input's directory and its parents, \
        then fall back to ~/.config/chatmark/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotate a message and print the span document as JSON
    #[command(
        long_about = "Annotate a chat message and print the resulting span document as JSON. \
        Each line becomes an array of spans; each span has a kind, a kind-specific payload and \
        its byte range within the line."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Annotate to stdout
    chatmark annotate message.txt

    # Annotate from stdin
    echo '*Nome:** João' | chatmark annotate

    # Pretty-print
    chatmark annotate --pretty message.txt

SPAN KINDS:

  - Text, Bold, Italic, Strikethrough: payload is the inner text
  - Link, Url: payload is {label, href}
  - ListBold: payload is {prefix, label}
  - ListMarker: payload is {prefix, indent}")]
    Annotate {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        #[arg(
            long_help = "Path to the input file to annotate. If not provided, reads from stdin. \
            Input must be valid UTF-8."
        )]
        file: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        #[arg(help = "Pretty-print JSON output")]
        pretty: bool,
    },
    /// Annotate and display the span tree for debugging
    #[command(
        long_about = "Annotate a message and display its span tree for debugging and \
        understanding how chatmark interprets the markup. Each line is listed with its spans \
        and hard breaks are shown between lines."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Show the span tree of a file
    chatmark parse message.txt

    # Parse from stdin
    echo '- item' | chatmark parse")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        #[arg(
            long_help = "Path to the input file to parse. If not provided, reads from stdin. \
            Input must be valid UTF-8."
        )]
        file: Option<PathBuf>,
    },
}
