use chrono::{DateTime, Utc};
use colored::Colorize;
use pagepad::api::{CmdMessage, MessageLevel};
use pagepad::commands::list::page_count_label;
use pagepad::index::DisplayPage;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const SELECTED_MARKER: &str = "▸";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_full_page(dp: &DisplayPage) {
    println!(
        "{} {} {}",
        format!("{}.", dp.index).yellow(),
        dp.page.icon,
        dp.page.display_title().bold()
    );
    println!(
        "{}",
        format!(
            "id {}  ·  edited {}",
            dp.page.id,
            format_time_ago(dp.page.updated_at).trim()
        )
        .dimmed()
    );
    println!("--------------------------------");
    if dp.page.content.is_empty() {
        println!("{}", "Start writing...".dimmed());
    } else {
        println!("{}", dp.page.content);
    }
}

/// One row per page in store order, then the page count footer.
pub fn print_page_list(pages: &[DisplayPage]) {
    if pages.is_empty() {
        println!("No pages yet");
        println!("{}", page_count_label(0).dimmed());
        return;
    }

    for dp in pages {
        let marker = if dp.is_selected { SELECTED_MARKER } else { " " };
        let idx_str = format!("{}. ", dp.index);
        let icon = format!("{} ", dp.page.icon);

        let fixed_width = 2 + idx_str.width() + icon.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(dp.page.display_title(), available);
        let padding = available.saturating_sub(title_display.width());

        let title_colored = if dp.page.title.is_empty() {
            title_display.dimmed()
        } else if dp.is_selected {
            title_display.bold()
        } else {
            title_display.normal()
        };

        println!(
            "{} {}{}{}{}{}",
            marker.cyan(),
            idx_str.yellow(),
            icon,
            title_colored,
            " ".repeat(padding),
            format_time_ago(dp.page.updated_at).dimmed()
        );
    }

    println!();
    println!("{}", page_count_label(pages.len()).dimmed());
}

pub fn print_config_lines(lines: &[(String, String)]) {
    for (k, v) in lines {
        println!("{} = {}", k, v);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
