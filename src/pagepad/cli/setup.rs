use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pagepad", bin_name = "pagepad", version)]
#[command(about = "A minimal page-based note keeper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $PAGEPAD_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List pages
    #[command(alias = "ls")]
    List,

    /// Create a new page and select it
    #[command(aliases = ["n", "create"])]
    New,

    /// Select the page to edit
    #[command(alias = "s")]
    Select {
        /// Page position (1, 2, ...) or id
        page: String,
    },

    /// Delete a page
    #[command(alias = "rm")]
    Delete {
        /// Page position (1, 2, ...) or id
        page: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show a page (the selected one by default)
    #[command(alias = "v")]
    View {
        /// Page position (1, 2, ...) or id
        page: Option<String>,
    },

    /// Set the title
    Title {
        /// Target page instead of the selected one
        #[arg(short, long)]
        page: Option<String>,

        /// New title (words are joined with spaces; omit to clear)
        #[arg(num_args = 0..)]
        title: Vec<String>,
    },

    /// Replace the body markup (reads stdin when no markup is given)
    Content {
        /// Target page instead of the selected one
        #[arg(short, long)]
        page: Option<String>,

        /// HTML body
        markup: Option<String>,
    },

    /// Edit the body markup in $EDITOR
    #[command(alias = "e")]
    Edit {
        /// Target page instead of the selected one
        #[arg(short, long)]
        page: Option<String>,
    },

    /// Apply a formatting command to the body
    #[command(alias = "f")]
    Format {
        /// bold, italic, bullet-list, numbered-list, pre, h1, h2, h3
        command: String,

        /// Target page instead of the selected one
        #[arg(short, long)]
        page: Option<String>,

        /// Format the first occurrence of this text
        #[arg(short, long, conflicts_with = "range")]
        text: Option<String>,

        /// Format a byte range of the body, START:END
        #[arg(short, long, value_parser = parse_range)]
        range: Option<(usize, usize)>,
    },

    /// Change the icon (random when no glyph is given)
    Icon {
        /// Target page instead of the selected one
        #[arg(short, long)]
        page: Option<String>,

        /// Glyph to use
        icon: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, default-icon, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_range(s: &str) -> Result<(usize, usize), String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got {}", s))?;
    let start = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid range start: {}", start))?;
    let end = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid range end: {}", end))?;
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["pagepad"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn title_words_are_collected() {
        let cli = Cli::try_parse_from(["pagepad", "title", "Weekly", "plan"]).unwrap();
        match cli.command {
            Some(Commands::Title { title, page }) => {
                assert_eq!(title, vec!["Weekly", "plan"]);
                assert!(page.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn format_parses_range() {
        let cli = Cli::try_parse_from(["pagepad", "format", "bold", "--range", "3:10"]).unwrap();
        match cli.command {
            Some(Commands::Format { range, .. }) => assert_eq!(range, Some((3, 10))),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn format_rejects_text_with_range() {
        assert!(Cli::try_parse_from([
            "pagepad", "format", "bold", "--text", "x", "--range", "0:1"
        ])
        .is_err());
    }

    #[test]
    fn delete_accepts_yes_flag() {
        let cli = Cli::try_parse_from(["pagepad", "rm", "2", "-y"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Delete { yes: true, .. })
        ));
    }

    #[test]
    fn range_parser_rejects_garbage() {
        assert!(parse_range("5").is_err());
        assert!(parse_range("a:3").is_err());
        assert_eq!(parse_range(" 1 : 4 ").unwrap(), (1, 4));
    }
}
