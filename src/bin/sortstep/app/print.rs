use std::io::Write;

use serde::Serialize;
use sortstep::{generate, parse_symbols, Log, Snapshot};

#[derive(Serialize)]
struct PrintedLog<'a> {
    input: &'a str,
    symbols: usize,
    snapshots: &'a Log,
}

/// Writes the complete log for `input` without starting the TUI.
pub fn print_log<W: Write>(out: &mut W, input: &str, json: bool) -> anyhow::Result<()> {
    let symbols = parse_symbols(input);
    let log = generate(&symbols);
    if json {
        let printed = PrintedLog {
            input,
            symbols: symbols.len(),
            snapshots: &log,
        };
        serde_json::to_writer_pretty(&mut *out, &printed)?;
        writeln!(out)?;
        return Ok(());
    }
    if log.is_empty() {
        writeln!(
            out,
            "nothing to sort ({} {})",
            symbols.len(),
            plural(symbols.len())
        )?;
        return Ok(());
    }
    let width = log.last_index().to_string().len();
    for (index, snapshot) in log.iter().enumerate() {
        writeln!(out, "{}", format_row(index, width, snapshot))?;
    }
    writeln!(out, "done in {} steps", log.len())?;
    Ok(())
}

fn format_row(index: usize, width: usize, snapshot: &Snapshot) -> String {
    format!(
        "{index:>width$}  {}  i={} j={}",
        snapshot.sequence.join(" "),
        snapshot.i,
        snapshot.j
    )
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "character"
    } else {
        "characters"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(input: &str, json: bool) -> String {
        let mut out = Vec::new();
        print_log(&mut out, input, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_one_row_per_snapshot() {
        assert_eq!(
            printed("BA", false),
            "0  B A  i=1 j=1\n1  A B  i=1 j=0\ndone in 2 steps\n"
        );
    }

    #[test]
    fn pads_indices_to_the_widest() {
        let text = printed("DCBA", false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "0  D C B A  i=1 j=1");
        assert_eq!(lines[8], "8  A B C D  i=3 j=0");
    }

    #[test]
    fn reports_inputs_too_short_to_sort() {
        assert_eq!(printed(" x ", false), "nothing to sort (1 character)\n");
        assert_eq!(printed("", false), "nothing to sort (0 characters)\n");
    }

    #[test]
    fn json_carries_input_and_snapshots() {
        let value: serde_json::Value = serde_json::from_str(&printed("B A", true)).unwrap();
        assert_eq!(value["input"], "B A");
        assert_eq!(value["symbols"], 2);
        assert_eq!(value["snapshots"][1]["sequence"], serde_json::json!(["A", "B"]));
        assert_eq!(value["snapshots"][1]["j"], 0);
    }
}
