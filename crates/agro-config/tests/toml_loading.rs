//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use agro_config::AgroConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
url = "https://farm.example.co"
anon_key = "anon-123"

[database]
url = "libsql://farm.turso.io"
auth_token = "db-token"

[general]
default_limit = 50
"#,
        )?;

        let config: AgroConfig = Figment::from(Serialized::defaults(AgroConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.backend.is_configured());
        assert_eq!(config.backend.anon_key, "anon-123");
        assert!(config.database.is_remote());
        assert_eq!(config.database.path, ".agrosalud/agrosalud.db");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn project_toml_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".agrosalud")?;
        jail.create_file(
            ".agrosalud/config.toml",
            r#"
[database]
path = "data/farm.db"
"#,
        )?;

        let config: AgroConfig = AgroConfig::figment_in(jail.directory()).extract()?;
        assert_eq!(config.database.path, "data/farm.db");
        assert!(!config.backend.is_configured());
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[backend]\nurl = \"https://x.co\"\n")?;

        let config: AgroConfig = Figment::from(Serialized::defaults(AgroConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backend.url, "https://x.co");
        assert!(config.backend.anon_key.is_empty());
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}
