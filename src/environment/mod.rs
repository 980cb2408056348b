pub mod model;
pub mod repository;
pub mod session;
pub mod types;

pub use model::Model;
pub use repository::Repository;
pub use session::Session;

use crate::config::Config;
use crate::error::Result;

#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    pub session: Session,
    pub repository: Option<Repository>,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    /// An environment without persistence. The session starts out empty
    pub fn new(config: Config) -> Self {
        let session = Session::default();
        Self {
            model: Model::new(config, session.clone()),
            session,
            repository: None,
        }
    }

    /// Open the repository for `config` and restore a previously saved token
    pub fn restore(config: Config) -> Result<Self> {
        let repository = match config.data_dir {
            Some(ref dir) => Repository::new(dir)?,
            None => Repository::in_config_directory()?,
        };
        let session = Session::new(repository.access_token());
        log::debug!(
            "Restored session from {} authenticated: {}",
            repository.directory().display(),
            session.is_authenticated()
        );
        Ok(Self {
            model: Model::new(config, session.clone()),
            session,
            repository: Some(repository),
        })
    }

    pub fn update_token(&self, access: &str) {
        self.session.set(access.to_string());
        if let Some(ref repository) = self.repository {
            if let Err(e) = repository.save_access_token(access) {
                log::error!("Could not save access token: {e}");
            }
        }
    }

    pub fn clear_token(&self) {
        self.session.clear();
        if let Some(ref repository) = self.repository {
            if let Err(e) = repository.remove_access_token() {
                log::error!("Could not remove access token: {e}");
            }
        }
    }
}
