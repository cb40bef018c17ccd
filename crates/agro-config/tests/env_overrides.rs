use agro_config::AgroConfig;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("AGROSALUD_BACKEND__URL", "https://env.example.co");
        jail.set_env("AGROSALUD_BACKEND__ANON_KEY", "env-anon");
        jail.set_env("AGROSALUD_GENERAL__DEFAULT_LIMIT", "5");

        let config = AgroConfig::load().expect("config loads");
        assert_eq!(config.backend.url, "https://env.example.co");
        assert!(config.backend.is_configured());
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".agrosalud")?;
        jail.create_file(
            ".agrosalud/config.toml",
            "[database]\npath = \"from-toml.db\"\n",
        )?;
        jail.set_env("AGROSALUD_DATABASE__PATH", "from-env.db");

        let config: AgroConfig = AgroConfig::figment_in(jail.directory()).extract()?;
        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}
