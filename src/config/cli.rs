use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[cfg(feature = "weather")]
use crate::config::DatabaseConfig;
use crate::config::FileConfig;
#[cfg(feature = "weather")]
use crate::domain::model::Observation;
use crate::utils::error::{Result, ServiceError};
#[cfg(feature = "weather")]
use crate::utils::validation::validate_database_url;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};

#[cfg(feature = "matrix")]
#[derive(Debug, Clone, Parser)]
#[command(name = "matrix-server")]
#[command(about = "Fixed 2x2 matrix arithmetic over HTTP")]
pub struct MatrixServerConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Optional TOML config file; values present there win over flags.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON log lines")]
    pub log_json: bool,

    #[arg(long, help = "Log periodic process stats while serving")]
    pub monitor: bool,
}

#[cfg(feature = "matrix")]
impl MatrixServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        parse_bind_addr(&self.host, self.port)
    }

    pub fn merge_file(&mut self, file: &FileConfig) {
        if let Some(server) = &file.server {
            if let Some(host) = &server.host {
                self.host = host.clone();
            }
            if let Some(port) = server.port {
                self.port = port;
            }
        }
    }
}

#[cfg(feature = "matrix")]
impl Validate for MatrixServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}

#[cfg(feature = "weather")]
#[derive(Debug, Clone, Parser)]
#[command(name = "weather-server")]
#[command(about = "Inserts one fixed observation row per request")]
pub struct WeatherServerConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Optional TOML config file; values present there win over flags.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "mysql_cont", help = "Database host (container name on the lab network)")]
    pub db_host: String,

    #[arg(long, default_value = "3306")]
    pub db_port: u16,

    #[arg(long, default_value = "root")]
    pub db_user: String,

    #[arg(long, default_value = "12345678")]
    pub db_password: String,

    #[arg(long, default_value = "demodb")]
    pub db_name: String,

    /// Full `mysql://` DSN; overrides the discrete db flags when set.
    #[arg(long)]
    pub database_url: Option<String>,

    #[arg(long, default_value = "NEW YORK", help = "City written on every insert")]
    pub city: String,

    #[arg(long, default_value = "25", allow_hyphen_values = true, help = "Temperature written on every insert")]
    pub temp: i32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON log lines")]
    pub log_json: bool,

    #[arg(long, help = "Log periodic process stats while serving")]
    pub monitor: bool,
}

#[cfg(feature = "weather")]
impl WeatherServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        parse_bind_addr(&self.host, self.port)
    }

    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
        }
    }

    pub fn observation(&self) -> Observation {
        Observation {
            city: self.city.clone(),
            temp: self.temp,
        }
    }

    pub fn merge_file(&mut self, file: &FileConfig) {
        if let Some(server) = &file.server {
            if let Some(host) = &server.host {
                self.host = host.clone();
            }
            if let Some(port) = server.port {
                self.port = port;
            }
        }

        if let Some(database) = &file.database {
            if let Some(host) = &database.host {
                self.db_host = host.clone();
            }
            if let Some(port) = database.port {
                self.db_port = port;
            }
            if let Some(user) = &database.user {
                self.db_user = user.clone();
            }
            if let Some(password) = &database.password {
                self.db_password = password.clone();
            }
            if let Some(name) = &database.database {
                self.db_name = name.clone();
            }
            if let Some(url) = &database.url {
                self.database_url = Some(url.clone());
            }
        }

        if let Some(observation) = &file.observation {
            if let Some(city) = &observation.city {
                self.city = city.clone();
            }
            if let Some(temp) = observation.temp {
                self.temp = temp;
            }
        }
    }
}

#[cfg(feature = "weather")]
impl Validate for WeatherServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;

        if let Some(url) = &self.database_url {
            validate_database_url("database_url", url)?;
        } else {
            validate_non_empty_string("db_host", &self.db_host)?;
            validate_range("db_port", self.db_port, 1, u16::MAX)?;
            validate_non_empty_string("db_user", &self.db_user)?;
            validate_non_empty_string("db_name", &self.db_name)?;
        }

        validate_non_empty_string("city", &self.city)?;
        Ok(())
    }
}

fn parse_bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let addr = format!("{}:{}", host, port);
    addr.parse().map_err(|e: std::net::AddrParseError| {
        ServiceError::InvalidConfigValue {
            field: "host".to_string(),
            value: addr.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "matrix")]
    #[test]
    fn matrix_defaults_validate() {
        let config = MatrixServerConfig::parse_from(["matrix-server"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr().unwrap().port(), 5000);
    }

    #[cfg(feature = "matrix")]
    #[test]
    fn rejects_empty_host() {
        let config = MatrixServerConfig::parse_from(["matrix-server", "--host", " "]);
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "matrix")]
    #[test]
    fn rejects_unparseable_bind_addr() {
        let config = MatrixServerConfig::parse_from(["matrix-server", "--host", "not-an-ip"]);
        assert!(config.bind_addr().is_err());
    }

    #[cfg(feature = "weather")]
    #[test]
    fn weather_defaults_match_lab_deployment() {
        let config = WeatherServerConfig::parse_from(["weather-server"]);
        assert!(config.validate().is_ok());

        let database = config.database();
        assert_eq!(database.host, "mysql_cont");
        assert_eq!(database.port, 3306);
        assert_eq!(database.user, "root");
        assert_eq!(database.database, "demodb");

        let observation = config.observation();
        assert_eq!(observation.city, "NEW YORK");
        assert_eq!(observation.temp, 25);
    }

    #[cfg(feature = "weather")]
    #[test]
    fn negative_temperature_is_accepted() {
        let config = WeatherServerConfig::parse_from(["weather-server", "--temp", "-12"]);
        assert_eq!(config.temp, -12);
    }

    #[cfg(feature = "weather")]
    #[test]
    fn dsn_must_use_mysql_scheme() {
        let config = WeatherServerConfig::parse_from([
            "weather-server",
            "--database-url",
            "postgres://root@db/demodb",
        ]);
        assert!(config.validate().is_err());
    }
}
