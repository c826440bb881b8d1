//! # CLI Layer
//!
//! This module is **one possible UI client** for pagepad. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Prompts the user (delete confirmation)
//! - Launches the external editor
//! - Installs the logger
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory, loads config, opens the API
//!   (`config` skips it and only touches `config.json`)
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::print::{print_config_lines, print_full_page, print_messages, print_page_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use pagepad::api::{AssumeYes, PagepadApi, PagepadPaths};
use pagepad::commands::config::{self, ConfigAction};
use pagepad::commands::format::FormatTarget;
use pagepad::config::PagepadConfig;
use pagepad::editor::edit_markup;
use pagepad::error::{PagepadError, Result};
use pagepad::storage::fs::FileStorage;
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;

const HOME_ENV: &str = "PAGEPAD_HOME";

struct AppContext {
    api: PagepadApi<FileStorage>,
    confirm_delete: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // config only touches config.json and never opens the store
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&cli, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::List) => handle_list(&ctx),
        Some(Commands::New) => handle_new(&mut ctx),
        Some(Commands::Select { page }) => handle_select(&mut ctx, &page),
        Some(Commands::Delete { page, yes }) => handle_delete(&mut ctx, &page, yes),
        Some(Commands::View { page }) => handle_view(&ctx, page.as_deref()),
        Some(Commands::Title { page, title }) => handle_title(&mut ctx, page.as_deref(), title),
        Some(Commands::Content { page, markup }) => {
            handle_content(&mut ctx, page.as_deref(), markup)
        }
        Some(Commands::Edit { page }) => handle_edit(&mut ctx, page.as_deref()),
        Some(Commands::Format {
            command,
            page,
            text,
            range,
        }) => {
            let target = match (text, range) {
                (Some(text), _) => FormatTarget::Text(text),
                (None, Some((start, end))) => FormatTarget::Range { start, end },
                (None, None) => FormatTarget::Caret,
            };
            handle_format(&mut ctx, page.as_deref(), &command, &target)
        }
        Some(Commands::Icon { page, icon }) => handle_icon(&mut ctx, page.as_deref(), icon),
        // handled before the store is opened
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "pagepad", "pagepad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            PagepadError::Api(format!(
                "Could not determine a data directory. Set ${} or pass --data-dir.",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    log::debug!("using data dir {}", data_dir.display());

    let config = PagepadConfig::load(&data_dir)?;
    let storage = FileStorage::new(&data_dir);
    let api = PagepadApi::open(storage, &config, PagepadPaths { data_dir })?;

    Ok(AppContext {
        api,
        confirm_delete: config.confirm_delete,
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_pages()?;
    print_page_list(&result.listed_pages);
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.create_page()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_select(ctx: &mut AppContext, page: &str) -> Result<()> {
    let result = ctx.api.select_page(page)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, page: &str, yes: bool) -> Result<()> {
    let result = if yes || !ctx.confirm_delete {
        ctx.api.delete_page(page, &mut AssumeYes)?
    } else {
        ctx.api.delete_page(page, &mut prompt_confirm)?
    };
    print_messages(&result.messages);
    Ok(())
}

/// Blocking y/N prompt on the terminal. Anything but an explicit yes declines.
fn prompt_confirm(prompt: &str) -> bool {
    let term = Term::stderr();
    if term.write_str(&format!("{} [y/N] ", prompt)).is_err() {
        return false;
    }
    let _ = std::io::stderr().flush();
    match term.read_line() {
        Ok(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn handle_view(ctx: &AppContext, page: Option<&str>) -> Result<()> {
    let result = ctx.api.view_page(page)?;
    for dp in &result.listed_pages {
        print_full_page(dp);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_title(ctx: &mut AppContext, page: Option<&str>, words: Vec<String>) -> Result<()> {
    let result = ctx.api.set_title(page, words.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_content(ctx: &mut AppContext, page: Option<&str>, markup: Option<String>) -> Result<()> {
    let markup = match markup {
        Some(markup) => markup,
        None if !std::io::stdin().is_terminal() => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(PagepadError::Io)?;
            buffer.trim_end_matches(['\n', '\r']).to_string()
        }
        None => {
            return Err(PagepadError::Api(
                "No markup given. Pass it as an argument or pipe it in.".into(),
            ))
        }
    };
    let result = ctx.api.set_content(page, markup)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, page: Option<&str>) -> Result<()> {
    let viewed = ctx.api.view_page(page)?;
    let Some(dp) = viewed.listed_pages.first() else {
        print_messages(&viewed.messages);
        return Ok(());
    };

    let edited = edit_markup(&dp.page.content)?;
    if edited == dp.page.content {
        println!("No changes.");
        return Ok(());
    }

    let result = ctx.api.set_content_by_id(&dp.page.id, edited)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_format(
    ctx: &mut AppContext,
    page: Option<&str>,
    command: &str,
    target: &FormatTarget,
) -> Result<()> {
    let result = ctx.api.format_page(page, command, target)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_icon(ctx: &mut AppContext, page: Option<&str>, icon: Option<String>) -> Result<()> {
    let result = match icon {
        Some(icon) => ctx.api.set_icon(page, &icon)?,
        None => ctx.api.change_icon(page, &mut rand::rng())?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(cli: &Cli, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let paths = PagepadPaths {
        data_dir: data_dir(cli)?,
    };
    let result = config::run(&paths, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config_lines(&config.list_all());
        }
    }
    print_messages(&result.messages);
    Ok(())
}
