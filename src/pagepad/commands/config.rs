use crate::commands::{CmdMessage, CmdResult, PagepadPaths};
use crate::config::PagepadConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &PagepadPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut config = PagepadConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result.with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::tempdir;

    fn paths(dir: &std::path::Path) -> PagepadPaths {
        PagepadPaths {
            data_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn set_then_show_key() {
        let dir = tempdir().unwrap();
        let paths = paths(dir.path());

        run(&paths, ConfigAction::Set("default-icon".into(), "💡".into())).unwrap();
        let result = run(&paths, ConfigAction::ShowKey("default-icon".into())).unwrap();

        assert_eq!(result.messages[0].content, "💡");
    }

    #[test]
    fn invalid_set_reports_error_and_keeps_file_absent() {
        let dir = tempdir().unwrap();
        let paths = paths(dir.path());

        let result = run(&paths, ConfigAction::Set("confirm-delete".into(), "perhaps".into())).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_config() {
        let dir = tempdir().unwrap();
        let result = run(&paths(dir.path()), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(PagepadConfig::default()));
    }
}
