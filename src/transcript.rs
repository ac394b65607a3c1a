//! Plain-text dump of a run, for `--transcript`

use std::io::Write;

use crate::algorithm::StepRecord;

fn format_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write the input followed by one line per step
pub fn write_transcript<W: Write>(
    out: &mut W,
    input: &[i64],
    steps: &[StepRecord],
) -> std::io::Result<()> {
    writeln!(out, "Input: [{}]", format_values(input))?;
    for (index, step) in steps.iter().enumerate() {
        writeln!(
            out,
            "{:>4} {:<13} {}: {}",
            index + 1,
            step.label.as_str(),
            step.title,
            step.description
        )?;
    }
    if let Some(last) = steps.last() {
        writeln!(out, "Result: [{}]", format_values(&last.array))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::generate_steps;

    #[test]
    fn transcript_lists_every_step() {
        let input = [2, 1];
        let steps = generate_steps(&input);
        let mut out = Vec::new();
        write_transcript(&mut out, &input, &steps).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), steps.len() + 2);
        assert_eq!(lines[0], "Input: [2, 1]");
        assert!(lines[1].contains("comparing"));
        assert!(lines[1].contains("Comparing 2 and 1. They are out of order, will swap."));
        assert_eq!(*lines.last().unwrap(), "Result: [1, 2]");
    }
}
