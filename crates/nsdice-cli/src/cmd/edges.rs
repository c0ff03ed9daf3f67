//! `nsdice edges`: the reduced win relation, one `A > B` line per edge.

use std::io::Write;

use clap::Args;
use nsdice_core::DiceConfig;
use nsdice_graph::{Analysis, Edge};
use serde::Serialize;

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `nsdice edges`.
#[derive(Args, Debug, Default)]
pub struct EdgesArgs {}

#[derive(Debug, Serialize)]
struct EdgesOutput<'a> {
    config: DiceConfig,
    dice: usize,
    count: usize,
    edges: Vec<Edge<'a>>,
}

/// Execute `nsdice edges`.
pub fn run_edges(_args: &EdgesArgs, analysis: &Analysis, output: OutputMode) -> anyhow::Result<()> {
    let payload = EdgesOutput {
        config: analysis.config,
        dice: analysis.graph.len(),
        count: analysis.graph.edge_count(),
        edges: analysis.edges().collect(),
    };

    render_mode(output, &payload, render_edges_text, render_edges_pretty)
}

fn render_edges_text(payload: &EdgesOutput<'_>, w: &mut dyn Write) -> std::io::Result<()> {
    for edge in &payload.edges {
        writeln!(w, "{edge}")?;
    }
    Ok(())
}

fn render_edges_pretty(payload: &EdgesOutput<'_>, w: &mut dyn Write) -> std::io::Result<()> {
    let config = &payload.config;
    pretty_section(
        w,
        &format!(
            "Intransitive dice (faces {}..={}, {} sides)",
            config.min_value, config.max_value, config.sides
        ),
    )?;

    if payload.edges.is_empty() {
        writeln!(w, "No intransitive dice: every die only wins or only loses.")?;
        return Ok(());
    }

    pretty_kv(w, "dice", payload.dice.to_string())?;
    pretty_kv(w, "edges", payload.count.to_string())?;
    writeln!(w)?;
    for edge in &payload.edges {
        writeln!(w, "  {edge}")?;
    }
    Ok(())
}
