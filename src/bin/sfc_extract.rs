//! Command-line interface for sfc-extract
//! This binary extracts a named block from a single-file-component document,
//! or lists the document's top-level blocks.
//!
//! Usage:
//!   sfc-extract extract `<path>` `<tag>` [--lang `<lang>`]... [--no-fallback]
//!   sfc-extract nodes `<path>` [--format `<format>`]

use clap::{Arg, ArgAction, Command};

use sfc_extract::sfc::extract::{extract, select_all, ExtractOptions};
use sfc_extract::sfc::select::LangFilter;

fn main() {
    let matches = Command::new("sfc-extract")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract a named block from a single-file-component document")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Print a block's content with line-preserving padding")
                .arg(
                    Arg::new("path")
                        .help("Path to the document")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("tag")
                        .help("Tag name of the block (e.g. 'script')")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("lang")
                        .long("lang")
                        .short('l')
                        .action(ArgAction::Append)
                        .help("Accepted value(s) of the block's lang attribute"),
                )
                .arg(
                    Arg::new("no-fallback")
                        .long("no-fallback")
                        .action(ArgAction::SetTrue)
                        .help("Disable the empty-module fallback for a missing script block"),
                ),
        )
        .subcommand(
            Command::new("nodes")
                .about("List the document's top-level blocks")
                .arg(
                    Arg::new("path")
                        .help("Path to the document")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("extract", extract_matches)) => {
            let path = extract_matches.get_one::<String>("path").unwrap();
            let tag = extract_matches.get_one::<String>("tag").unwrap();
            let langs: Vec<String> = extract_matches
                .get_many::<String>("lang")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let no_fallback = extract_matches.get_flag("no-fallback");
            handle_extract_command(path, tag, langs, no_fallback);
        }
        Some(("nodes", nodes_matches)) => {
            let path = nodes_matches.get_one::<String>("path").unwrap();
            let format = nodes_matches.get_one::<String>("format").unwrap();
            handle_nodes_command(path, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the extract command
fn handle_extract_command(path: &str, tag: &str, langs: Vec<String>, no_fallback: bool) {
    let source = read_source(path);
    let lang = match langs.len() {
        0 => None,
        1 => langs.into_iter().next().map(LangFilter::Exact),
        _ => Some(LangFilter::OneOf(langs)),
    };
    let options = ExtractOptions {
        lang,
        empty_module_fallback: !no_fallback,
        ..ExtractOptions::default()
    };

    print!("{}", extract(&source, tag, &options));
}

/// Handle the nodes command
fn handle_nodes_command(path: &str, format: &str) {
    let source = read_source(path);
    let nodes = select_all(&source);

    match format {
        "json" => {
            let output = serde_json::to_string_pretty(&nodes).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        _ => {
            for node in nodes {
                let location = node
                    .location
                    .map(|span| format!("{}..{}", span.start_tag_end, span.end_tag_start))
                    .unwrap_or_else(|| "unlocated".to_string());
                println!("{} [{}]", node.tag_name, location);
            }
        }
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}
