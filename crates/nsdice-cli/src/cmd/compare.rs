//! `nsdice compare`: roll two dice against each other.

use std::io::Write;

use clap::Args;
use nsdice_core::{Matchup, Outcome};

use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render_error, render_mode};

/// Arguments for `nsdice compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First die, as digits (`4400`) or comma separated (`10,4,0`).
    pub first: String,

    /// Second die, same notation and number of faces as the first.
    pub second: String,
}

/// Execute `nsdice compare`.
pub fn run_compare(args: &CompareArgs, output: OutputMode) -> anyhow::Result<()> {
    let matchup = match Matchup::parse(&args.first, &args.second) {
        Ok(matchup) => matchup,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!(err);
        }
    };

    render_mode(output, &matchup, render_compare_text, render_compare_pretty)
}

fn render_compare_text(matchup: &Matchup, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{matchup}")
}

fn render_compare_pretty(matchup: &Matchup, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("{} vs {}", matchup.first, matchup.second))?;

    let tally = &matchup.tally;
    pretty_kv(w, "pairings", tally.total().to_string())?;
    pretty_kv(w, &format!("{} higher", matchup.first), tally.wins.to_string())?;
    pretty_kv(w, &format!("{} higher", matchup.second), tally.losses.to_string())?;
    pretty_kv(w, "ties", tally.ties.to_string())?;

    let verdict = match matchup.outcome {
        Outcome::FirstWins | Outcome::SecondWins => format!("{matchup}"),
        Outcome::Tie => "neither die is better".to_string(),
    };
    pretty_kv(w, "verdict", verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matchup(first: &str, second: &str) -> Matchup {
        Matchup::parse(first, second).expect("valid matchup")
    }

    #[test]
    fn compare_args_parse_two_dice() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: CompareArgs,
        }

        let parsed = Wrapper::parse_from(["test", "3300", "2220"]);
        assert_eq!(parsed.args.first, "3300");
        assert_eq!(parsed.args.second, "2220");
        assert!(Wrapper::try_parse_from(["test", "3300"]).is_err());
    }

    #[test]
    fn text_names_the_winner_first() {
        let mut out = Vec::new();
        render_compare_text(&matchup("2210", "3300"), &mut out).expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), "3300 > 2210\n");
    }

    #[test]
    fn pretty_shows_tally_and_verdict() {
        let mut out = Vec::new();
        render_compare_pretty(&matchup("3300", "2220"), &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.starts_with("3300 vs 2220"));
        assert!(rendered.contains("pairings:"));
        assert!(rendered.trim_end().ends_with("3300 > 2220"));
    }

    #[test]
    fn pretty_reports_ties() {
        let mut out = Vec::new();
        render_compare_pretty(&matchup("40", "22"), &mut out).expect("render");
        assert!(String::from_utf8(out).expect("utf8").contains("neither die is better"));
    }

    #[test]
    fn json_carries_tally_and_outcome() {
        let value = serde_json::to_value(matchup("3300", "2220")).expect("serialize");
        assert_eq!(value["first"], serde_json::json!([3, 3, 0, 0]));
        assert_eq!(value["tally"]["wins"], 8);
        assert_eq!(value["outcome"], "first_wins");
    }
}
