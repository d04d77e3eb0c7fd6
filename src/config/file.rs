use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::utils::error::{Result, ServiceError};

/// Optional TOML configuration. Any value present here overrides the
/// corresponding command-line flag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerSection>,
    #[cfg(feature = "weather")]
    pub database: Option<DatabaseSection>,
    #[cfg(feature = "weather")]
    pub observation: Option<ObservationSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[cfg(feature = "weather")]
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub url: Option<String>,
}

#[cfg(feature = "weather")]
#[derive(Debug, Clone, Deserialize)]
pub struct ObservationSection {
    pub city: Option<String>,
    pub temp: Option<i32>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let content = substitute_env_vars(content);
        toml::from_str(&content).map_err(|e| ServiceError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replace `${VAR}` references with environment values. Unresolved
/// references stay verbatim so the failure names the missing variable.
fn substitute_env_vars(content: &str) -> String {
    let re = Regex::new(r"\$\{([^}]+)\}").expect("valid literal pattern");

    re.replace_all(content, |caps: &regex::Captures| {
        let name = &caps[1];
        std::env::var(name).unwrap_or_else(|_| format!("${{{}}}", name))
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_server_section() {
        let config = FileConfig::from_toml_str(
            r#"
[server]
host = "127.0.0.1"
port = 8080
"#,
        )
        .unwrap();

        let server = config.server.unwrap();
        assert_eq!(server.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(server.port, Some(8080));
    }

    #[test]
    fn missing_sections_stay_none() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.server.is_none());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(FileConfig::from_toml_str("[server\nhost = ").is_err());
    }

    #[test]
    fn substitutes_env_vars() {
        std::env::set_var("NETLAB_TEST_HOST", "10.0.0.7");

        let config = FileConfig::from_toml_str(
            r#"
[server]
host = "${NETLAB_TEST_HOST}"
"#,
        )
        .unwrap();
        assert_eq!(config.server.unwrap().host.as_deref(), Some("10.0.0.7"));

        std::env::remove_var("NETLAB_TEST_HOST");
    }

    #[test]
    fn unresolved_env_vars_stay_verbatim() {
        let config = FileConfig::from_toml_str(
            r#"
[server]
host = "${NETLAB_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.server.unwrap().host.as_deref(),
            Some("${NETLAB_TEST_UNSET_VAR}")
        );
    }

    #[test]
    fn loads_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 9000\n")
            .unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.unwrap().port, Some(9000));
    }

    #[cfg(feature = "weather")]
    #[test]
    fn file_values_override_flags() {
        use crate::config::WeatherServerConfig;
        use clap::Parser;

        let mut config = WeatherServerConfig::parse_from(["weather-server"]);
        let file = FileConfig::from_toml_str(
            r#"
[database]
host = "db.internal"
password = "secret"

[observation]
city = "OSLO"
temp = -3
"#,
        )
        .unwrap();

        config.merge_file(&file);

        assert_eq!(config.db_host, "db.internal");
        assert_eq!(config.db_password, "secret");
        assert_eq!(config.db_user, "root"); // untouched flag keeps its default
        assert_eq!(config.city, "OSLO");
        assert_eq!(config.temp, -3);
    }
}
