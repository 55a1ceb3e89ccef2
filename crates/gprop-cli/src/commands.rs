//! CLI command implementations.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::{load_graph, read_input, LoadedGraph};
use crate::report;
use colored::Colorize;
use gprop_core::InputFormat;
use gprop_graph::{ForestPolicy, GraphProperties, Warning};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Output format of `gprop export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Dot,
}

fn load(input: Option<&Path>, format: InputFormat) -> Result<LoadedGraph> {
    let text = read_input(input)?;
    let graph = load_graph(&text, format)?;
    report::print_warnings(graph.warnings());
    Ok(graph)
}

/// Analyze a graph and print its properties.
pub fn analyze(
    input: Option<&Path>,
    format: InputFormat,
    policy: ForestPolicy,
    json_output: bool,
) -> Result<()> {
    let graph = load(input, format)?;
    let properties = graph.properties(policy);

    if json_output {
        #[derive(Serialize)]
        struct Output<'a> {
            #[serde(flatten)]
            properties: &'a GraphProperties,
            forest_policy: ForestPolicy,
            warnings: &'a [Warning],
        }

        let output = Output {
            properties: &properties,
            forest_policy: policy,
            warnings: graph.warnings(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for line in report::property_lines(&properties) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// List every simple cycle by node names.
pub fn cycles(input: Option<&Path>, format: InputFormat, json_output: bool) -> Result<()> {
    let graph = load(input, format)?;
    let cycles = graph.named_cycles();

    if json_output {
        let output = serde_json::json!({
            "cycle_count": cycles.len(),
            "cycles": cycles,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if cycles.is_empty() {
        println!("No cycles found");
        return Ok(());
    }

    for cycle in &cycles {
        let mut path = cycle.join(" - ");
        if let Some(first) = cycle.first() {
            path.push_str(" - ");
            path.push_str(first);
        }
        println!("  {} {}", "•".cyan(), path);
    }
    println!();
    println!("Cycle count: {}", cycles.len().to_string().bold());

    Ok(())
}

/// Write the graph as JSON or DOT.
pub fn export(
    input: Option<&Path>,
    format: InputFormat,
    to: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let graph = load(input, format)?;

    let mut rendered = match to {
        ExportFormat::Json => serde_json::to_string_pretty(&graph.export())?,
        ExportFormat::Dot => graph.to_dot(),
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            eprintln!("{} Exported to {}", "✓".green(), path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Write a default config under `path`.
pub fn init(path: &Path) -> Result<()> {
    let config_path = Config::project_path(path);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    let write_err = |source: std::io::Error| CliError::Write {
        path: config_path.clone(),
        source,
    };
    if let Some(dir) = config_path.parent() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    let default_config = serde_json::to_string_pretty(&Config::default())?;
    fs::write(&config_path, default_config).map_err(write_err)?;

    println!("{} Wrote {}", "✓".green(), config_path.display());

    Ok(())
}
