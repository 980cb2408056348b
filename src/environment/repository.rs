use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{from_slice, to_string_pretty};

use crate::error::{Error, Result};

const CREDENTIALS_PATH: &str = "credentials.json";

#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
struct StoredCredentials {
    access: String,
}

/// Files that outlive the process. Currently only the access token
#[derive(Clone, Debug)]
pub struct Repository {
    directory: PathBuf,
}

impl Repository {
    /// Use `directory`, creating it if necessary
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        if !directory.exists() {
            std::fs::create_dir_all(&directory).map_err(|e| {
                Error::Storage(format!(
                    "Could not create directory {}: {e:?}",
                    directory.display()
                ))
            })?;
        }
        Ok(Self { directory })
    }

    /// Use the platform config directory
    pub fn in_config_directory() -> Result<Self> {
        use directories_next::ProjectDirs;
        let Some(proj_dirs) = ProjectDirs::from("com", "postbook", "postbook") else {
            return Err(Error::Storage("Couldn't find a folder to save data".to_string()));
        };
        Self::new(proj_dirs.config_dir())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn access_token(&self) -> Option<String> {
        match read::<StoredCredentials>(&self.directory.join(CREDENTIALS_PATH)) {
            Ok(stored) => stored.map(|e| e.access),
            Err(e) => {
                log::error!("Could not load credentials: {e}");
                None
            }
        }
    }

    pub fn save_access_token(&self, access: &str) -> Result<()> {
        let stored = StoredCredentials {
            access: access.to_string(),
        };
        write(&self.directory.join(CREDENTIALS_PATH), &stored)
    }

    pub fn remove_access_token(&self) -> Result<()> {
        let path = self.directory.join(CREDENTIALS_PATH);
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_file(&path)
            .map_err(|e| Error::Storage(format!("Could not remove {}: {e:?}", path.display())))
    }
}

fn read<T: DeserializeOwned>(data_path: &Path) -> Result<Option<T>> {
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(data_path)
        .map_err(|e| Error::Storage(format!("Could not read {}: {e:?}", data_path.display())))?;
    let obj: T = from_slice(&data)
        .map_err(|e| Error::Storage(format!("Could not parse {}: {e:?}", data_path.display())))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(data_path: &Path, value: &T) -> Result<()> {
    let data = to_string_pretty(&value)
        .map_err(|e| Error::Storage(format!("Could not parse value:{e:?}")))?;
    std::fs::write(data_path, data)
        .map_err(|e| Error::Storage(format!("Could not write to {}: {e:?}", data_path.display())))?;
    Ok(())
}
