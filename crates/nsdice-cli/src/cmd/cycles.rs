//! `nsdice cycles`: strongly connected components and three-die cycles.

use std::io::Write;

use clap::Args;
use nsdice_core::Die;
use nsdice_graph::{Analysis, Triangle, find_components, find_triangles};
use serde::Serialize;

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `nsdice cycles`.
#[derive(Args, Debug, Default)]
pub struct CyclesArgs {
    /// Show at most this many triangles.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct CyclesOutput {
    components: Vec<Vec<Die>>,
    triangle_count: usize,
    triangles: Vec<Triangle>,
}

/// Execute `nsdice cycles`.
pub fn run_cycles(args: &CyclesArgs, analysis: &Analysis, output: OutputMode) -> anyhow::Result<()> {
    let payload = build_output(analysis, args.limit);
    render_mode(output, &payload, render_cycles_text, render_cycles_pretty)
}

fn build_output(analysis: &Analysis, limit: Option<usize>) -> CyclesOutput {
    let mut triangles = find_triangles(&analysis.graph);
    let triangle_count = triangles.len();
    if let Some(limit) = limit {
        triangles.truncate(limit);
    }

    CyclesOutput {
        components: find_components(&analysis.graph),
        triangle_count,
        triangles,
    }
}

fn join_dice(dice: &[Die]) -> String {
    dice.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_cycles_text(payload: &CyclesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for component in &payload.components {
        writeln!(w, "component {}", join_dice(component))?;
    }
    for triangle in &payload.triangles {
        writeln!(w, "triangle {triangle}")?;
    }
    Ok(())
}

fn render_cycles_pretty(payload: &CyclesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.components.is_empty() {
        writeln!(w, "No intransitive cycles found.")?;
        return Ok(());
    }

    pretty_section(w, &format!("Components ({})", payload.components.len()))?;
    for (idx, component) in payload.components.iter().enumerate() {
        pretty_kv(w, &format!("#{} ({} dice)", idx + 1, component.len()), join_dice(component))?;
    }

    writeln!(w)?;
    pretty_section(w, &format!("Triangles ({})", payload.triangle_count))?;
    for triangle in &payload.triangles {
        writeln!(w, "  {triangle}")?;
    }
    let hidden = payload.triangle_count - payload.triangles.len();
    if hidden > 0 {
        writeln!(w, "  ... {hidden} more")?;
    }
    Ok(())
}
