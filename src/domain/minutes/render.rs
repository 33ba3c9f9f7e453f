//! Markdown rendering of minutes

use std::fmt;

use super::document::{MinutesDocument, DEFAULT_TITLE, UNASSIGNED_OWNER};

/// Shown in the due date column when the model gave none
const DUE_DATE_NOT_SET: &str = "Not set";

/// Characters with meaning in CommonMark inline syntax
const MARKDOWN_SPECIALS: &[char] = &[
    '\\', '`', '*', '_', '[', ']', '<', '>', '#', '|', '~', '!',
];

/// Characters that open a list or underline a heading at the start of a line
const LINE_START_SPECIALS: &[char] = &['-', '+', '='];

/// Escape free text so it renders literally.
///
/// Inline syntax is escaped everywhere; list markers and heading underlines
/// are escaped at the start of each line.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        escape_line(line, &mut out);
    }
    out
}

fn escape_line(line: &str, out: &mut String) {
    let body = line.trim_start();
    out.push_str(&line[..line.len() - body.len()]);

    // "1." and "1)" open an ordered list; escaping the delimiter is enough
    let digits = body.chars().take_while(char::is_ascii_digit).count();
    let ordered_marker = digits > 0 && matches!(body[digits..].chars().next(), Some('.' | ')'));

    for (i, c) in body.chars().enumerate() {
        let line_start = i == 0 && LINE_START_SPECIALS.contains(&c);
        if MARKDOWN_SPECIALS.contains(&c) || line_start || (ordered_marker && i == digits) {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Escape text for a single table cell (no line breaks allowed)
fn escape_cell(text: &str) -> String {
    let flat: String = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    escape_markdown(&flat)
}

/// Render minutes as a Markdown document.
///
/// Sections without content are left out entirely.
pub fn render_markdown(minutes: &MinutesDocument) -> String {
    MarkdownMinutes(minutes).to_string()
}

/// Markdown view over a minutes document
struct MarkdownMinutes<'a>(&'a MinutesDocument);

impl fmt::Display for MarkdownMinutes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0;

        let title = if minutes.title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            minutes.title.as_str()
        };
        writeln!(f, "# {}\n", escape_markdown(title))?;
        writeln!(f, "**Date:** {}  ", escape_markdown(&minutes.date))?;

        if !minutes.attendees.is_empty() {
            writeln!(
                f,
                "**Attendees:** {}  ",
                escape_markdown(&minutes.attendees.join(", "))
            )?;
        }

        if !minutes.summary.trim().is_empty() {
            writeln!(f, "\n## Summary\n")?;
            writeln!(f, "{}", escape_markdown(minutes.summary.trim()))?;
        }

        if !minutes.discussion_points.is_empty() {
            writeln!(f, "\n## Discussion Points\n")?;
            for point in &minutes.discussion_points {
                writeln!(f, "- **{}**", escape_cell(&point.topic))?;
                if !point.details.trim().is_empty() {
                    writeln!(f, "{}", indent(&escape_markdown(point.details.trim())))?;
                }
            }
        }

        write_bullets(f, "Decisions Made", &minutes.decisions)?;

        if !minutes.action_items.is_empty() {
            writeln!(f, "\n## Action Items\n")?;
            writeln!(f, "| Task | Owner | Due Date |")?;
            writeln!(f, "| --- | --- | --- |")?;
            for item in &minutes.action_items {
                let owner = if item.owner.trim().is_empty() {
                    UNASSIGNED_OWNER
                } else {
                    item.owner.as_str()
                };
                let due = item
                    .due_date
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or(DUE_DATE_NOT_SET);
                writeln!(
                    f,
                    "| {} | {} | {} |",
                    escape_cell(&item.task),
                    escape_cell(owner),
                    escape_cell(due)
                )?;
            }
        }

        write_bullets(f, "Next Steps", &minutes.next_steps)
    }
}

fn write_bullets(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n## {}\n", heading)?;
    for item in items {
        writeln!(f, "- {}", indent(&escape_markdown(item.trim())).trim_start())?;
    }
    Ok(())
}

/// Indent every line so it stays inside the enclosing list item
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
