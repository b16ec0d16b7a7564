//! Command-line interface for aida-fmt
//! This binary renders chat messages and chat transcripts as the HTML the AIDA chat window shows.
//!
//! Usage:
//!   aida-fmt [`<path>`] [--format `<format>`]        - Format one message (stdin when path is omitted or `-`)
//!   aida-fmt `<path>` --transcript                   - Render a JSON/YAML chat history turn by turn
//!   aida-fmt --list-formats                          - List all available formats
//!
//! Configuration is layered: built-in defaults, then `--config <file>`, then each `--set key=value`.

use aida_fmt::{FormatRegistry, Transcript, TranscriptRenderer};
use aida_fmt_config::{AidaConfig, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Read;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

fn main() {
    let matches = Command::new("aida-fmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render AIDA chat messages as HTML")
        .arg(
            Arg::new("path")
                .help("Path to the message or transcript file ('-' or omitted reads stdin)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Format for a single message (e.g., 'chat-html', 'escaped-html')")
                .default_value("chat-html"),
        )
        .arg(
            Arg::new("transcript")
                .long("transcript")
                .short('t')
                .help("Treat the input as a chat transcript (JSON, or YAML for .yaml/.yml files)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override a single configuration key (e.g., formatter.table_class=grid)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v debug, -vv trace)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let registry = FormatRegistry::with_options(&config.formatter);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let path = matches.get_one::<String>("path").map(String::as_str);
    let source = read_input(path).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("transcript") {
        handle_transcript_command(&registry, &config, &source, path);
    } else {
        let format = matches
            .get_one::<String>("format")
            .expect("format has a default value");
        handle_format_command(&registry, &source, format);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<AidaConfig, String> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        debug!(path = %path, "layering configuration file");
        loader = loader.with_file(path);
    }
    for assignment in matches.get_many::<String>("set").into_iter().flatten() {
        loader = loader
            .with_assignment(assignment)
            .map_err(|e| e.to_string())?;
    }
    loader.build().map_err(|e| e.to_string())
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

/// Handle formatting a single message
fn handle_format_command(registry: &FormatRegistry, source: &str, format: &str) {
    let output = registry.serialize(source, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for name in registry.list_formats() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle rendering a transcript
fn handle_transcript_command(
    registry: &FormatRegistry,
    config: &AidaConfig,
    source: &str,
    path: Option<&str>,
) {
    let is_yaml = path.is_some_and(|p| p.ends_with(".yaml") || p.ends_with(".yml"));
    let transcript = if is_yaml {
        Transcript::from_yaml(source)
    } else {
        Transcript::from_json(source)
    };

    let output = transcript
        .and_then(|transcript| {
            TranscriptRenderer::new(registry, config.transcript.clone()).render(&transcript)
        })
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    println!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
