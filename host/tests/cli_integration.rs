use claims::{assert_err, assert_ok};
use host::app::build_coordinator;
use host::cli::{Command, ConfigureArgs, Toggle, execute};
use host::config::{AppSettings, load_settings};
use host::AppError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

mod helpers {
    use super::*;

    pub struct Workspace {
        pub dir: TempDir,
        pub settings: AppSettings,
    }

    impl Workspace {
        pub fn output(&self, file: &str) -> PathBuf {
            self.dir.path().join("out").join(file)
        }

        pub fn themes(&self) -> PathBuf {
            self.dir.path().join("themes")
        }

        pub fn state(&self) -> PathBuf {
            self.dir.path().join("state.toml")
        }
    }

    /// A settings file pointing every path into a fresh temp directory.
    pub fn workspace() -> Workspace {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("themes")).unwrap();

        let settings_path = root.join("chromaport.toml");
        fs::write(
            &settings_path,
            format!(
                "themes_dir = '{}'\noutput_dir = '{}'\nstate_file = '{}'\n",
                root.join("themes").display(),
                root.join("out").display(),
                root.join("state.toml").display(),
            ),
        )
        .unwrap();

        let settings = load_settings(Some(&settings_path)).unwrap();
        Workspace { dir, settings }
    }

    pub fn write_theme(dir: &Path, file: &str, json: &str) {
        fs::write(dir.join(file), json).unwrap();
    }

    pub const NORD: &str = r##"{
        "name": "Nord",
        "type": "dark",
        "colors": { "editor.background": "#2e3440", "editor.foreground": "#d8dee9" }
    }"##;
}

use helpers::*;

mod commands {
    use super::*;

    #[test]
    fn test_apply_default_theme_writes_every_surface() {
        let ws = workspace();
        let mut coordinator = build_coordinator(&ws.settings).unwrap();

        let output = assert_ok!(execute(&Command::Apply, &mut coordinator));

        assert!(output.success, "{}", output.text);
        assert!(output.text.starts_with("Theme: one_dark_pro"));
        let content = fs::read_to_string(ws.output("content.css")).unwrap();
        assert!(content.contains("#282C34"));
        assert!(content.contains(".card .hljs-comment"));
        assert!(ws.output("chrome.qss").exists());
        assert!(ws.output("restricted.css").exists());
        assert_eq!(fs::read_to_string(ws.output("mode")).unwrap(), "dark\n");
    }

    #[test]
    fn test_set_persists_theme() {
        let ws = workspace();
        write_theme(&ws.themes(), "Nord.json", NORD);
        let mut coordinator = build_coordinator(&ws.settings).unwrap();

        let output = execute(
            &Command::Set {
                theme: "nord".to_string(),
            },
            &mut coordinator,
        )
        .unwrap();

        assert!(output.success, "{}", output.text);
        let state = fs::read_to_string(ws.state()).unwrap();
        assert!(state.contains("current_theme_id = \"nord\""));

        let reopened = build_coordinator(&ws.settings).unwrap();
        assert_eq!(reopened.config().current_theme_id, "nord");
    }

    #[test]
    fn test_set_unknown_theme_is_usage_error() {
        let ws = workspace();
        let mut coordinator = build_coordinator(&ws.settings).unwrap();

        let error = assert_err!(execute(
            &Command::Set {
                theme: "missing".to_string()
            },
            &mut coordinator
        ));
        assert!(matches!(error, AppError::Usage(_)));
        assert!(!ws.state().exists());
    }

    #[test]
    fn test_configure_override_and_disable_chrome() {
        let ws = workspace();
        let override_path = ws.dir.path().join("override.css");
        fs::write(&override_path, "body { font-size: 18px; }\n").unwrap();
        let mut coordinator = build_coordinator(&ws.settings).unwrap();

        let args = ConfigureArgs {
            content: None,
            chrome: Some(Toggle::Off),
            override_file: Some(override_path),
            clear_override: false,
        };
        let output = execute(&Command::Configure(args), &mut coordinator).unwrap();

        assert!(output.success, "{}", output.text);
        let content = fs::read_to_string(ws.output("content.css")).unwrap();
        assert!(content.ends_with("body { font-size: 18px; }\n"));
        assert!(!ws.output("chrome.qss").exists());
        assert!(!coordinator.config().apply_to_chrome);
    }

    #[test]
    fn test_show_prints_artifact() {
        let ws = workspace();
        write_theme(&ws.themes(), "Nord.json", NORD);
        let mut coordinator = build_coordinator(&ws.settings).unwrap();

        let output = execute(
            &Command::Show {
                theme: "nord".to_string(),
                context: "chrome-surface".to_string(),
            },
            &mut coordinator,
        )
        .unwrap();
        assert!(output.text.starts_with("/* chromaport chrome-surface: nord */"));
        assert!(output.text.contains("#2E3440"));

        let unknown = execute(
            &Command::Show {
                theme: "nord".to_string(),
                context: "dock-surface".to_string(),
            },
            &mut coordinator,
        )
        .unwrap();
        assert!(unknown.text.is_empty());
    }

    #[test]
    fn test_list_marks_current_theme() {
        let ws = workspace();
        let mut coordinator = build_coordinator(&ws.settings).unwrap();

        let output = execute(&Command::List, &mut coordinator).unwrap();
        let current: Vec<&str> = output
            .text
            .lines()
            .filter(|line| line.starts_with('*'))
            .collect();
        assert_eq!(current.len(), 1);
        assert!(current[0].contains("one_dark_pro"));
        assert!(output.text.contains("One Light"));
    }
}

mod diagnostics {
    use super::*;

    #[test]
    fn test_check_reports_broken_files() {
        let ws = workspace();
        write_theme(&ws.themes(), "broken.json", "{ \"colors\": ");
        write_theme(
            &ws.themes(),
            "odd.json",
            r#"{ "colors": { "editor.background": "tomato" } }"#,
        );
        let mut coordinator = build_coordinator(&ws.settings).unwrap();

        let output = execute(&Command::Check, &mut coordinator).unwrap();

        assert!(!output.success);
        assert!(output.text.contains("error: failed to load theme 'broken.json'"));
        assert!(output.text.contains("warning: odd:"));
    }

    #[test]
    fn test_user_theme_replaces_bundled_one() {
        let ws = workspace();
        write_theme(
            &ws.themes(),
            "one_dark_pro.json",
            r##"{ "type": "dark", "colors": { "editor.background": "#000000" } }"##,
        );
        let mut coordinator = build_coordinator(&ws.settings).unwrap();

        let output = execute(&Command::Apply, &mut coordinator).unwrap();

        assert!(output.success);
        let chrome = fs::read_to_string(ws.output("chrome.qss")).unwrap();
        assert!(chrome.contains("#000000"));
        assert_eq!(coordinator.list_themes().len(), 2);
    }
}
