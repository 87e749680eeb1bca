//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Environment variable holding the gateway API key
pub const API_KEY_ENV: &str = "GRAPH_API_KEY";

/// Prefix for `ONCHAIN_LENS_<SECTION>__<FIELD>` overrides
pub const ENV_PREFIX: &str = "ONCHAIN_LENS_";

const API_KEY_FIELD: &str = "subgraph.api_key";

const PROJECT_FILES: [&str; 2] = ["lens.toml", ".lens.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment (`GRAPH_API_KEY`, `ONCHAIN_LENS_SUBGRAPH__*`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./lens.toml` or `./.lens.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/onchain-lens/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            // Missing files are silently skipped by figment; an explicit
            // path that does not exist should be reported instead.
            figment = figment.merge(Toml::file_exact(path));
        }

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Defaults plus environment, no files (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Environment overrides; the API key is merged verbatim as a string.
    ///
    /// `Env` parses values, so an all-digit key would otherwise become an
    /// integer. Blank key variables are ignored.
    fn with_env(figment: Figment) -> Figment {
        let figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .ignore(&[API_KEY_FIELD]),
        );

        [format!("{}SUBGRAPH__API_KEY", ENV_PREFIX), API_KEY_ENV.to_string()]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .filter(|key| !key.trim().is_empty())
            .fold(figment, |figment, key| {
                figment.merge(Serialized::default(API_KEY_FIELD, key))
            })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/onchain-lens/config.toml if set,
    /// otherwise falls back to ~/.config/onchain-lens/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("onchain-lens").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        let env_state = if std::env::var_os(API_KEY_ENV).is_some() {
            "[FOUND]"
        } else {
            "[     ]"
        };
        println!("  {} Env:     {}", env_state, API_KEY_ENV);

        if let Some(path) = config_path {
            let state = if path.exists() { "[FOUND]" } else { "[MISSING]" };
            println!("  {} Explicit: {}", state, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./lens.toml or ./.lens.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileOutputFormat;
    use figment::Jail;

    /// Keep the developer's real global config and key out of the jail.
    fn isolate(jail: &mut Jail) {
        let dir = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", dir.display());
        jail.set_env(API_KEY_ENV, "");
    }

    #[test]
    fn test_load_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            let config = ConfigLoader::load(None).unwrap();

            assert!(config.subgraph.credential().is_none());
            assert_eq!(config.subgraph.gateway_url, "https://gateway.thegraph.com");
            assert_eq!(config.output.format, FileOutputFormat::Card);
            Ok(())
        });
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "lens.toml",
                r#"
[subgraph]
timeout_secs = 10

[output]
color = false
"#,
            )?;

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.subgraph.timeout_secs, Some(10));
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_global_file_is_overridden_by_project_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            std::fs::create_dir_all(jail.directory().join("onchain-lens"))
                .map_err(|e| e.to_string())?;
            jail.create_file(
                "onchain-lens/config.toml",
                r#"
[subgraph]
gateway_url = "http://global.example"
timeout_secs = 30
"#,
            )?;
            jail.create_file(".lens.toml", "[subgraph]\ntimeout_secs = 5\n")?;

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.subgraph.gateway_url, "http://global.example");
            assert_eq!(config.subgraph.timeout_secs, Some(5));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("lens.toml", "[subgraph]\napi_key = \"from-file\"\n")?;
            jail.set_env(API_KEY_ENV, "from-env");
            jail.set_env("ONCHAIN_LENS_SUBGRAPH__NOUNS_SUBGRAPH_ID", "nouns-fork");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.subgraph.credential(), Some("from-env"));
            assert_eq!(config.subgraph.nouns_subgraph_id, "nouns-fork");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_beats_project_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("lens.toml", "[output]\nformat = \"card\"\n")?;
            jail.create_file("custom.toml", "[output]\nformat = \"json\"\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.output.format, FileOutputFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        Jail::expect_with(|jail| {
            isolate(jail);
            assert!(ConfigLoader::load(Some(Path::new("nope.toml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_all_digit_key_stays_a_string() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.set_env(API_KEY_ENV, "12345678901234567890");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.subgraph.credential(), Some("12345678901234567890"));
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_key_is_read_as_string() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.set_env("ONCHAIN_LENS_SUBGRAPH__API_KEY", "000123");

            let config = ConfigLoader::load_without_files().unwrap();
            assert_eq!(config.subgraph.credential(), Some("000123"));
            Ok(())
        });
    }

    #[test]
    fn test_graph_api_key_beats_prefixed_key() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.set_env("ONCHAIN_LENS_SUBGRAPH__API_KEY", "prefixed");
            jail.set_env(API_KEY_ENV, "plain");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.subgraph.credential(), Some("plain"));
            Ok(())
        });
    }

    #[test]
    fn test_blank_env_key_keeps_file_key() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("lens.toml", "[subgraph]\napi_key = \"from-file\"\n")?;

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.subgraph.credential(), Some("from-file"));
            Ok(())
        });
    }

    #[test]
    fn test_without_files_still_reads_key() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("lens.toml", "[subgraph]\ntimeout_secs = 10\n")?;
            jail.set_env(API_KEY_ENV, "from-env");

            let config = ConfigLoader::load_without_files().unwrap();
            assert_eq!(config.subgraph.credential(), Some("from-env"));
            assert_eq!(config.subgraph.timeout_secs, None);
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("onchain-lens"));
    }
}
