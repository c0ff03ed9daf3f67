//! `nsdice stats`: counters from every pipeline stage.

use std::io::Write;

use clap::Args;
use nsdice_graph::{Analysis, GraphStats};

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `nsdice stats`.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {}

/// Execute `nsdice stats`.
pub fn run_stats(_args: &StatsArgs, analysis: &Analysis, output: OutputMode) -> anyhow::Result<()> {
    let stats = GraphStats::from_analysis(analysis);
    render_mode(output, &stats, render_stats_text, render_stats_pretty)
}

fn stat_rows(stats: &GraphStats) -> Vec<(&'static str, String)> {
    vec![
        ("dice", stats.dice.to_string()),
        ("comparisons", stats.comparisons.to_string()),
        ("raw_nodes", stats.raw_nodes.to_string()),
        ("raw_edges", stats.raw_edges.to_string()),
        ("passes", stats.passes.to_string()),
        ("removed", stats.removed.to_string()),
        ("nodes", stats.nodes.to_string()),
        ("edges", stats.edges.to_string()),
        ("density", format!("{:.4}", stats.density)),
        ("components", stats.components.to_string()),
        ("largest_component", stats.largest_component.to_string()),
        ("triangles", stats.triangles.to_string()),
        ("content_hash", stats.content_hash.clone()),
    ]
}

fn render_stats_text(stats: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    for (key, value) in stat_rows(stats) {
        writeln!(w, "{key}={value}")?;
    }
    Ok(())
}

fn render_stats_pretty(stats: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    let config = &stats.config;
    pretty_section(
        w,
        &format!(
            "Dice family (faces {}..={}, {} sides)",
            config.min_value, config.max_value, config.sides
        ),
    )?;
    for (key, value) in stat_rows(stats) {
        pretty_kv(w, key, value)?;
    }
    Ok(())
}
