//! Wren CLI - resolve CSS initial values from the command line
//!
//! Reads a declaration block (as found in a `style` attribute), fills in the
//! initial value of every property it leaves unset or sets to `initial`, and
//! prints the resulting style.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use wren_common::warning::set_quiet;
use wren_css::{Resolver, StyleMap, TEXT_ALIGN};

/// Wren - initial-value resolution for CSS 2.1 properties
#[derive(Parser, Debug)]
#[command(name = "wren")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Resolve an inline declaration block
    wren --style 'direction: rtl; color: initial'

    # Resolve declarations read from a file
    wren ./element.css

    # Show only what was filled in, as JSON
    wren --style 'display: block' --only-defaulted --json

    # Print the initial-value table
    wren --table
"#)]
struct Cli {
    /// File holding a declaration block (reads stdin when omitted)
    #[arg(value_name = "FILE", conflicts_with = "style")]
    path: Option<PathBuf>,

    /// Declaration block given inline, e.g. 'direction: rtl'
    #[arg(short, long, value_name = "DECLS")]
    style: Option<String>,

    /// Print the resolved style as JSON
    #[arg(long)]
    json: bool,

    /// Print the initial-value table and exit
    #[arg(long)]
    table: bool,

    /// Print only the properties that received their initial value
    #[arg(long)]
    only_defaulted: bool,

    /// Do not print warnings about dropped declarations
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    let resolver = Resolver::new().context("failed to build the initial-value table")?;

    if cli.table {
        return print_table(&resolver, cli.json);
    }

    let declarations = read_declarations(&cli)?;
    let (mut style, _dropped) = StyleMap::parse_declarations(&declarations);

    let defaulted: HashSet<&str> = resolver.defaulted_properties(&style).into_iter().collect();
    resolver.apply_initial_values(&mut style);

    if cli.only_defaulted {
        style.retain(|name, _| defaulted.contains(name));
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&style)?);
    } else {
        for (name, value) in style.iter() {
            let line = format!("{name}: {value};");
            if defaulted.contains(name) {
                println!("{}", line.dimmed());
            } else {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Read the declaration block from `--style`, the file argument, or stdin.
fn read_declarations(cli: &Cli) -> anyhow::Result<String> {
    if let Some(ref style) = cli.style {
        Ok(style.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
    } else {
        let mut declarations = String::new();
        let _ = io::stdin()
            .read_to_string(&mut declarations)
            .context("failed to read declarations from stdin")?;
        Ok(declarations)
    }
}

/// Print every initial value in table order, then `text-align`.
fn print_table(resolver: &Resolver, json: bool) -> anyhow::Result<()> {
    let initial_values = resolver.initial_values();

    if json {
        println!("{}", serde_json::to_string_pretty(initial_values)?);
        return Ok(());
    }

    for (name, value) in initial_values.iter() {
        println!("{}: {value};", name.bold());
    }
    println!(
        "{}: {}",
        TEXT_ALIGN.bold(),
        "left if direction is ltr, right if rtl".dimmed()
    );
    Ok(())
}
