//! Layered loading, sandboxed with `figment::Jail`.

use std::path::PathBuf;

use figment::Jail;
use objdict_codegen::LineEnding;
use objdict_config::{ConfigError, ObjDictConfig};
use pretty_assertions::assert_eq;

/// Drop inherited variables and point the user config dir into the jail.
fn isolate(jail: &mut Jail) {
    jail.clear_env();
    let root = jail.directory().to_path_buf();
    jail.set_env("HOME", root.display());
    jail.set_env("XDG_CONFIG_HOME", root.join(".config").display());
}

#[test]
fn defaults_without_files_or_env() {
    Jail::expect_with(|jail| {
        isolate(jail);
        let config = ObjDictConfig::load().expect("config loads");
        assert_eq!(config.store.path, PathBuf::from(".objdict/objdict.duckdb"));
        assert_eq!(config.codegen.line_ending, LineEnding::Crlf);
        assert_eq!(config.codegen.indent_width, 4);
        assert!(!config.codegen.strict);
        Ok(())
    });
}

#[test]
fn inherited_env_is_ignored_after_isolation() {
    Jail::expect_with(|jail| {
        jail.set_env("OBJDICT_CODEGEN__INDENT_WIDTH", "0");
        isolate(jail);
        let config = ObjDictConfig::load().expect("config loads");
        assert_eq!(config.codegen.indent_width, 4);
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_sits_below_project_config() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_dir(".config/objdict")?;
        jail.create_file(
            ".config/objdict/config.toml",
            "[codegen]\nindent_width = 2\nline_ending = \"lf\"\n",
        )?;
        jail.create_dir(".objdict")?;
        jail.create_file(".objdict/config.toml", "[codegen]\nindent_width = 3\n")?;

        let config = ObjDictConfig::load().expect("config loads");
        assert_eq!(config.codegen.indent_width, 3);
        assert_eq!(config.codegen.line_ending, LineEnding::Lf);
        Ok(())
    });
}

#[test]
fn project_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_dir(".objdict")?;
        jail.create_file(
            ".objdict/config.toml",
            r#"
[store]
path = "data/dictionary.duckdb"

[codegen]
indent_width = 2
line_ending = "crlf"
strict = true
"#,
        )?;

        let config = ObjDictConfig::load().expect("config loads");
        assert_eq!(config.store.path, PathBuf::from("data/dictionary.duckdb"));
        assert_eq!(config.codegen.indent_width, 2);
        assert_eq!(config.codegen.line_ending, LineEnding::Crlf);
        assert!(config.codegen.strict);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_dir(".objdict")?;
        jail.create_file(".objdict/config.toml", "[codegen]\nindent_width = 2\n")?;
        jail.set_env("OBJDICT_CODEGEN__INDENT_WIDTH", "8");
        jail.set_env("OBJDICT_STORE__PATH", "/tmp/other.duckdb");

        let config = ObjDictConfig::load().expect("config loads");
        assert_eq!(config.codegen.indent_width, 8);
        assert_eq!(config.store.path, PathBuf::from("/tmp/other.duckdb"));
        Ok(())
    });
}

#[test]
fn out_of_range_indent_is_invalid() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.set_env("OBJDICT_CODEGEN__INDENT_WIDTH", "0");
        let err = ObjDictConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn unknown_line_ending_fails_extraction() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.set_env("OBJDICT_CODEGEN__LINE_ENDING", "cr");
        let err = ObjDictConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
