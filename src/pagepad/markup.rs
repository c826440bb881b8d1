//! # Body Markup Formatting
//!
//! Page bodies are HTML fragments that the rest of the crate treats as opaque strings.
//! This module is the one place that writes tags into them, and it only knows a fixed
//! command set:
//!
//! | Command | Result around the selection |
//! |---|---|
//! | bold | `<b>…</b>` (toggles off when already wrapped) |
//! | italic | `<i>…</i>` (toggles off when already wrapped) |
//! | bullet-list | `<ul><li>…</li>…</ul>`, one item per selected line |
//! | numbered-list | `<ol><li>…</li>…</ol>`, one item per selected line |
//! | pre | `<pre>…</pre>` |
//! | h1, h2, h3 | `<hN>…</hN>`, `Heading` when nothing is selected |
//!
//! There is no document tree: text outside the selection is copied through untouched and
//! no attempt is made to reconcile overlapping or nested formatting.

use crate::error::{PagepadError, Result};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_HEADING_TEXT: &str = "Heading";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCommand {
    Bold,
    Italic,
    BulletList,
    NumberedList,
    Preformatted,
    Heading1,
    Heading2,
    Heading3,
}

impl FormatCommand {
    pub const ALL: [FormatCommand; 8] = [
        FormatCommand::Bold,
        FormatCommand::Italic,
        FormatCommand::BulletList,
        FormatCommand::NumberedList,
        FormatCommand::Preformatted,
        FormatCommand::Heading1,
        FormatCommand::Heading2,
        FormatCommand::Heading3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::BulletList => "bullet-list",
            FormatCommand::NumberedList => "numbered-list",
            FormatCommand::Preformatted => "pre",
            FormatCommand::Heading1 => "h1",
            FormatCommand::Heading2 => "h2",
            FormatCommand::Heading3 => "h3",
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            FormatCommand::Bold => "b",
            FormatCommand::Italic => "i",
            FormatCommand::BulletList => "ul",
            FormatCommand::NumberedList => "ol",
            FormatCommand::Preformatted => "pre",
            FormatCommand::Heading1 => "h1",
            FormatCommand::Heading2 => "h2",
            FormatCommand::Heading3 => "h3",
        }
    }
}

impl fmt::Display for FormatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatCommand {
    type Err = PagepadError;

    fn from_str(s: &str) -> Result<Self> {
        let cmd = match s.to_ascii_lowercase().as_str() {
            "bold" | "b" => FormatCommand::Bold,
            "italic" | "i" => FormatCommand::Italic,
            "bullet-list" | "bullets" | "ul" => FormatCommand::BulletList,
            "numbered-list" | "numbers" | "ol" => FormatCommand::NumberedList,
            "pre" | "code" => FormatCommand::Preformatted,
            "h1" => FormatCommand::Heading1,
            "h2" => FormatCommand::Heading2,
            "h3" => FormatCommand::Heading3,
            other => {
                return Err(PagepadError::Api(format!(
                    "Unknown format command: {}",
                    other
                )))
            }
        };
        Ok(cmd)
    }
}

/// Where a command applies inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Empty selection at the end of the body.
    #[default]
    Caret,
    /// Byte range `[start, end)` of the body.
    Range { start: usize, end: usize },
}

impl Selection {
    pub fn range(start: usize, end: usize) -> Self {
        Selection::Range { start, end }
    }

    /// Selects the first occurrence of `text` in `content`.
    pub fn find(content: &str, text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(PagepadError::Selection("empty selection text".to_string()));
        }
        content
            .find(text)
            .map(|start| Selection::range(start, start + text.len()))
            .ok_or_else(|| PagepadError::Selection(format!("text not found: {:?}", text)))
    }

    fn resolve(&self, content: &str) -> Result<(usize, usize)> {
        match *self {
            Selection::Caret => Ok((content.len(), content.len())),
            Selection::Range { start, end } => {
                if start > end || end > content.len() {
                    return Err(PagepadError::Selection(format!(
                        "range {}..{} outside body of {} bytes",
                        start,
                        end,
                        content.len()
                    )));
                }
                if !content.is_char_boundary(start) || !content.is_char_boundary(end) {
                    return Err(PagepadError::Selection(format!(
                        "range {}..{} splits a character",
                        start, end
                    )));
                }
                Ok((start, end))
            }
        }
    }
}

/// Applies `command` to `selection` of `content`, returning the new body.
pub fn apply_format(content: &str, command: FormatCommand, selection: Selection) -> Result<String> {
    let (start, end) = selection.resolve(content)?;
    let before = &content[..start];
    let selected = &content[start..end];
    let after = &content[end..];

    let mut out = String::with_capacity(content.len() + 32);
    match command {
        FormatCommand::Bold | FormatCommand::Italic => {
            let open = format!("<{}>", command.tag());
            let close = format!("</{}>", command.tag());
            if before.ends_with(&open) && after.starts_with(&close) {
                out.push_str(&before[..before.len() - open.len()]);
                out.push_str(selected);
                out.push_str(&after[close.len()..]);
                return Ok(out);
            }
            out.push_str(before);
            out.push_str(&open);
            out.push_str(selected);
            out.push_str(&close);
        }
        FormatCommand::BulletList | FormatCommand::NumberedList => {
            out.push_str(before);
            out.push_str(&list_markup(command.tag(), selected));
        }
        FormatCommand::Preformatted => {
            out.push_str(before);
            out.push_str(&wrap("pre", selected));
        }
        FormatCommand::Heading1 | FormatCommand::Heading2 | FormatCommand::Heading3 => {
            let text = if selected.is_empty() {
                DEFAULT_HEADING_TEXT
            } else {
                selected
            };
            out.push_str(before);
            out.push_str(&wrap(command.tag(), text));
        }
    }
    out.push_str(after);
    Ok(out)
}

fn wrap(tag: &str, inner: &str) -> String {
    format!("<{tag}>{inner}</{tag}>")
}

fn list_markup(tag: &str, selected: &str) -> String {
    let mut items: Vec<&str> = selected
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if items.is_empty() {
        items.push(selected.trim());
    }
    let body: String = items.iter().map(|item| wrap("li", item)).collect();
    wrap(tag, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_wraps_found_text() {
        let body = "<p>hello world</p>";
        let sel = Selection::find(body, "world").unwrap();
        let out = apply_format(body, FormatCommand::Bold, sel).unwrap();
        assert_eq!(out, "<p>hello <b>world</b></p>");
    }

    #[test]
    fn bold_toggles_off_when_already_wrapped() {
        let body = "<p>hello <b>world</b></p>";
        let sel = Selection::find(body, "world").unwrap();
        let out = apply_format(body, FormatCommand::Bold, sel).unwrap();
        assert_eq!(out, "<p>hello world</p>");
    }

    #[test]
    fn italic_at_caret_inserts_empty_element() {
        let out = apply_format("<p>x</p>", FormatCommand::Italic, Selection::Caret).unwrap();
        assert_eq!(out, "<p>x</p><i></i>");
    }

    #[test]
    fn bullet_list_makes_one_item_per_line() {
        let body = "milk\neggs\n\nbread";
        let sel = Selection::range(0, body.len());
        let out = apply_format(body, FormatCommand::BulletList, sel).unwrap();
        assert_eq!(out, "<ul><li>milk</li><li>eggs</li><li>bread</li></ul>");
    }

    #[test]
    fn numbered_list_on_empty_selection() {
        let out = apply_format("", FormatCommand::NumberedList, Selection::Caret).unwrap();
        assert_eq!(out, "<ol><li></li></ol>");
    }

    #[test]
    fn pre_wraps_selection() {
        let body = "<p>run cargo</p>";
        let sel = Selection::find(body, "cargo").unwrap();
        let out = apply_format(body, FormatCommand::Preformatted, sel).unwrap();
        assert_eq!(out, "<p>run <pre>cargo</pre></p>");
    }

    #[test]
    fn heading_replaces_selection() {
        let body = "Intro text";
        let sel = Selection::find(body, "Intro").unwrap();
        let out = apply_format(body, FormatCommand::Heading2, sel).unwrap();
        assert_eq!(out, "<h2>Intro</h2> text");
    }

    #[test]
    fn heading_with_no_selection_inserts_placeholder() {
        let out = apply_format("<p>a</p>", FormatCommand::Heading1, Selection::Caret).unwrap();
        assert_eq!(out, "<p>a</p><h1>Heading</h1>");
    }

    #[test]
    fn rejects_out_of_bounds_and_split_chars() {
        assert!(matches!(
            apply_format("abc", FormatCommand::Bold, Selection::range(2, 9)),
            Err(PagepadError::Selection(_))
        ));
        assert!(matches!(
            apply_format("abc", FormatCommand::Bold, Selection::range(2, 1)),
            Err(PagepadError::Selection(_))
        ));
        // "é" is two bytes
        assert!(matches!(
            apply_format("é", FormatCommand::Bold, Selection::range(0, 1)),
            Err(PagepadError::Selection(_))
        ));
    }

    #[test]
    fn find_reports_missing_text() {
        assert!(Selection::find("abc", "zzz").is_err());
        assert!(Selection::find("abc", "").is_err());
    }

    #[test]
    fn command_names_parse_back() {
        for cmd in FormatCommand::ALL {
            assert_eq!(cmd.name().parse::<FormatCommand>().unwrap(), cmd);
        }
        assert_eq!("UL".parse::<FormatCommand>().unwrap(), FormatCommand::BulletList);
        assert!("underline".parse::<FormatCommand>().is_err());
    }
}
