use std::{env, fs, path::Path};

use crate::error::Error;

const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const ALLOW_ALL_ORIGINS: &str = "*";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Build from a key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST")
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_owned());

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|e| {
                Error::ConfigurationError(format!("PORT '{}': {}", port, e))
            })?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| ALLOW_ALL_ORIGINS.to_owned())
            .split(',')
            .map(|item| item.trim().to_owned())
            .filter(|item| !item.is_empty())
            .collect::<Vec<String>>();

        if allowed_origins.is_empty() {
            return Err(Error::ConfigurationError(String::from(
                "ALLOWED_ORIGINS must list at least one origin or '*'",
            )));
        }

        Ok(Config {
            server_host,
            port,
            allowed_origins,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ALLOW_ALL_ORIGINS)
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    Config::from_lookup(|key| env::var(key).ok())
}

/// Seed the process environment from `.env` next to the crate manifest.
/// Variables already set in the environment win; a missing file is fine.
pub fn set_configuration() -> Result<(), Error> {
    let path = format!("{}/.env", env!("CARGO_MANIFEST_DIR"));
    if !Path::new(&path).is_file() {
        return Ok(());
    }

    let config_string = fs::read_to_string(path)?;
    for (key, value) in parse_config_string(&config_string) {
        if env::var_os(&key).is_none() {
            env::set_var(key, value);
        }
    }

    Ok(())
}

fn parse_config_string(config: &str) -> Vec<(String, String)> {
    config
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let value = value.trim().trim_matches('"');
            Some((key.trim().to_owned(), value.to_owned()))
        })
        .collect()
}
