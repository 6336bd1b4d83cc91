//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use reef_config::ReefConfig;

#[test]
fn loads_layout_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[layout]
width = 800.0
height = 500.0
iterations = 350
seed = 7
damping = 0.9
"#,
        )?;

        let config: ReefConfig = Figment::from(Serialized::defaults(ReefConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!((config.layout.width - 800.0).abs() < f64::EPSILON);
        assert!((config.layout.height - 500.0).abs() < f64::EPSILON);
        assert_eq!(config.layout.iterations, 350);
        assert_eq!(config.layout.seed, 7);
        assert!((config.layout.node_radius - 24.0).abs() < f64::EPSILON);
        assert!(config.layout.validate().is_ok());
        Ok(())
    });
}

#[test]
fn loads_dataset_path_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[dataset]
path = "/srv/reef/traits.json"
"#,
        )?;

        let config: ReefConfig = Figment::from(Serialized::defaults(ReefConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.dataset.path, "/srv/reef/traits.json");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[layout]
iterations = 100
"#,
        )?;
        jail.set_env("REEFCOMPAT_LAYOUT__ITERATIONS", "450");
        jail.set_env("REEFCOMPAT_GENERAL__DEFAULT_LIMIT", "5");

        let config: ReefConfig = Figment::from(Serialized::defaults(ReefConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("REEFCOMPAT_").split("__"))
            .extract()?;

        assert_eq!(config.layout.iterations, 450);
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".reefcompat")?;
        jail.create_file(
            ".reefcompat/config.toml",
            r#"
[dataset]
path = "local-traits.json"
"#,
        )?;

        let config = ReefConfig::load().expect("config loads");
        assert_eq!(config.dataset.path, "local-traits.json");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_layout() {
    Jail::expect_with(|jail| {
        jail.set_env("REEFCOMPAT_LAYOUT__DAMPING", "1.5");
        let err = ReefConfig::load().expect_err("damping above one is invalid");
        assert!(err.to_string().contains("layout.damping"));
        Ok(())
    });
}
