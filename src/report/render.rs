//! Plain-text rendering of to-do reports.

use super::aggregate::TodoReport;

/// Render a to-do report.
///
/// Example output:
/// ```text
///   Migrate billing (Alice, 4 messages, 2 new)
///     Status: yellow
///     Next steps:
///       - schema review
///       - load test
/// ```
pub fn render_todo(report: &TodoReport) -> String {
    let mut output = format!(
        "  {} ({}, {} messages, {} new)\n",
        report.content, report.assignee, report.comment_count, report.new_messages
    );

    for (key, values) in &report.entries {
        match values.as_slice() {
            [] => {}
            [value] => {
                output.push_str(&format!("    {}: {}\n", key, value));
            }
            values => {
                output.push_str(&format!("    {}:\n", key));
                for value in values {
                    output.push_str(&format!("      - {}\n", value));
                }
            }
        }
    }

    output
}
