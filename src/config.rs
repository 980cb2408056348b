use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

pub const API_URL_VAR: &str = "POSTBOOK_API_URL";
pub const DATA_DIR_VAR: &str = "POSTBOOK_DATA_DIR";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Base of every endpoint path. Always ends with `/`
    pub api_url: Url,
    /// Where the repository keeps its files. Falls back to the platform
    /// config directory
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn new(api_url: &str) -> Result<Self> {
        let mut api_url =
            Url::parse(api_url).map_err(|e| Error::Config(format!("Invalid API url {api_url}: {e}")))?;
        if api_url.cannot_be_a_base() {
            return Err(Error::Config(format!("API url {api_url} cannot be a base")));
        }
        // `Url::join` replaces the last segment unless the path ends in a slash
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }
        Ok(Self {
            api_url,
            data_dir: None,
        })
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    pub fn from_env() -> Result<Self> {
        let url = std::env::var(API_URL_VAR)
            .map_err(|_| Error::Config(format!("{API_URL_VAR} is not set")))?;
        let config = Self::new(&url)?;
        Ok(match std::env::var_os(DATA_DIR_VAR) {
            Some(dir) => config.with_data_dir(dir),
            None => config,
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.api_url
            .join(path)
            .map_err(|e| Error::Config(format!("Invalid endpoint {path}: {e}")))
    }
}
