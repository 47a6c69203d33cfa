//! Plain-text rendering of a report for the terminal.
use crate::problem::ProblemReport;

/// The result text, optionally followed by the numbered step trace.
///
/// Multi-line steps (matrix snapshots) are indented under their number.
pub fn render_text(report: &ProblemReport, show_steps: bool) -> String {
    let mut out = String::new();
    out.push_str(&report.result);
    out.push('\n');

    if !show_steps {
        return out;
    }

    out.push_str("\nSteps:\n");
    if report.steps.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }

    let width = report.steps.len().to_string().len();
    for (idx, step) in report.steps.iter().enumerate() {
        let text = step.text();
        let mut lines = text.lines();
        let number = format!("{:>width$}.", idx + 1, width = width);
        out.push_str(&format!("  {} {}\n", number, lines.next().unwrap_or_default()));
        for line in lines {
            out.push_str(&format!("  {} {}\n", " ".repeat(number.len()), line));
        }
    }
    out
}
