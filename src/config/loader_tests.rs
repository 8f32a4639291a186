//! Tests for configuration loading and precedence.

use super::*;
use serial_test::serial;
use std::fs;

// ===== Test Helpers =====

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("railview_config_tests");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ===== load_config_file =====

#[test]
fn missing_file_is_not_an_error() {
    let result = load_config_file("/definitely/not/here/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn valid_toml_parses_into_config_file() {
    let path = temp_config(
        "valid.toml",
        r#"
theme = "dim"
profile_name = "Alex"
"#,
    );

    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(config.theme.as_deref(), Some("dim"));
    assert_eq!(config.profile_name.as_deref(), Some("Alex"));
    assert_eq!(config.log_file_path, None);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let path = temp_config("broken.toml", "theme = [unclosed");

    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_fields_are_rejected() {
    let path = temp_config("unknown.toml", "not_a_real_field = true");

    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn keybindings_section_is_rejected_as_unknown() {
    // Bindings are not configurable; a [keybindings] table is a loud
    // parse error rather than a silently ignored section.
    let path = temp_config("keys.toml", "[keybindings]\nquit = \"q\"\n");

    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

// ===== merge_config =====

#[test]
fn merge_without_file_uses_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.theme, "dark");
    assert_eq!(resolved.profile_name, "Guest");
}

#[test]
fn merge_prefers_file_values() {
    let file = ConfigFile {
        theme: Some("light".to_string()),
        profile_name: None,
        log_file_path: Some(PathBuf::from("/tmp/rv.log")),
    };

    let resolved = merge_config(Some(file));
    assert_eq!(resolved.theme, "light");
    assert_eq!(resolved.profile_name, "Guest", "unset fields keep defaults");
    assert_eq!(resolved.log_file_path, PathBuf::from("/tmp/rv.log"));
}

// ===== env and CLI overrides =====

#[test]
#[serial(railview_env)]
fn env_overrides_theme_and_profile() {
    std::env::set_var("RAILVIEW_THEME", "dim");
    std::env::set_var("RAILVIEW_PROFILE", "Sam");

    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.theme, "dim");
    assert_eq!(resolved.profile_name, "Sam");

    std::env::remove_var("RAILVIEW_THEME");
    std::env::remove_var("RAILVIEW_PROFILE");
}

#[test]
#[serial(railview_env)]
fn env_overrides_absent_leave_config_unchanged() {
    std::env::remove_var("RAILVIEW_THEME");
    std::env::remove_var("RAILVIEW_PROFILE");

    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn cli_override_beats_everything() {
    let base = ResolvedConfig {
        theme: "light".to_string(),
        ..ResolvedConfig::default()
    };

    let resolved = apply_cli_overrides(base, Some("dim".to_string()));
    assert_eq!(resolved.theme, "dim");
}

#[test]
fn cli_override_absent_keeps_theme() {
    let base = ResolvedConfig {
        theme: "light".to_string(),
        ..ResolvedConfig::default()
    };

    let resolved = apply_cli_overrides(base, None);
    assert_eq!(resolved.theme, "light");
}

// ===== precedence chain =====

#[test]
#[serial(railview_env)]
fn explicit_path_wins_over_env_config() {
    let explicit = temp_config("explicit.toml", r#"theme = "light""#);
    let from_env = temp_config("from_env.toml", r#"theme = "dim""#);
    std::env::set_var("RAILVIEW_CONFIG", from_env.display().to_string());

    let config = load_config_with_precedence(Some(explicit)).unwrap().unwrap();
    assert_eq!(config.theme.as_deref(), Some("light"));

    std::env::remove_var("RAILVIEW_CONFIG");
}

#[test]
#[serial(railview_env)]
fn env_config_used_when_no_explicit_path() {
    let from_env = temp_config("env_only.toml", r#"theme = "dim""#);
    std::env::set_var("RAILVIEW_CONFIG", from_env.display().to_string());

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.theme.as_deref(), Some("dim"));

    std::env::remove_var("RAILVIEW_CONFIG");
}

// ===== default paths =====

#[test]
fn default_log_path_ends_with_app_file() {
    let path = default_log_path();
    assert!(path.ends_with("railview/railview.log") || path == PathBuf::from("railview.log"));
}
