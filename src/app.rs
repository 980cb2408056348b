use crate::components::auth::{AuthAction, AuthState, AuthStore};
use crate::components::post::{PostAction, PostStore, State as PostState};
use crate::config::Config;
use crate::environment::types::Credentials;
use crate::environment::Environment;
use crate::error::Result;

const EMAIL_VAR: &str = "POSTBOOK_EMAIL";
const PASSWORD_VAR: &str = "POSTBOOK_PASSWORD";

/// Both stores, sharing one environment and therefore one session
#[derive(Clone)]
pub struct App {
    pub auth: AuthStore,
    pub post: PostStore,
}

impl App {
    pub fn new(environment: Environment) -> Self {
        Self {
            auth: AuthStore::new(AuthState::default(), environment.clone()),
            post: PostStore::new(PostState::default(), environment),
        }
    }

    pub fn environment(&self) -> &Environment {
        self.auth.environment()
    }

    /// Log in, then load everything the home screen shows
    pub async fn sign_in(&self, credentials: Credentials) -> Result<()> {
        self.auth.dispatch(AuthAction::FetchCredStart).await?;
        let result = self.auth.dispatch(AuthAction::Login(credentials)).await;
        self.auth.dispatch(AuthAction::FetchCredEnd).await?;
        result?;
        self.auth.dispatch(AuthAction::ResetOpenSignIn).await?;
        self.load().await
    }

    pub async fn load(&self) -> Result<()> {
        self.auth.dispatch(AuthAction::GetMyProfile).await?;
        self.auth.dispatch(AuthAction::GetProfiles).await?;
        self.post.dispatch(PostAction::FetchPostStart).await?;
        let posts = self.post.dispatch(PostAction::GetPosts).await;
        let comments = self.post.dispatch(PostAction::GetComments).await;
        self.post.dispatch(PostAction::FetchPostEnd).await?;
        posts.and(comments)
    }
}

pub fn init_logging() {
    use env_logger::Env;
    use std::io::Write;
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .try_init();
}

pub async fn run() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        log::trace!("No .env file: {e}");
    }
    init_logging();

    let config = Config::from_env()?;
    log::info!("Using {}", config.api_url);
    let app = App::new(Environment::restore(config)?);

    let credentials = match (std::env::var(EMAIL_VAR), std::env::var(PASSWORD_VAR)) {
        (Ok(email), Ok(password)) => Some(Credentials { email, password }),
        _ => None,
    };

    match credentials {
        Some(credentials) => app.sign_in(credentials).await?,
        None if app.environment().session.is_authenticated() => app.load().await?,
        None => {
            log::info!("Not logged in. Set {EMAIL_VAR} and {PASSWORD_VAR}");
            return Ok(());
        }
    }

    let nick_name = app.auth.with(|s| s.my_profile().nick_name.clone());
    let profiles = app.auth.with(|s| s.profiles().len());
    let (posts, comments) = app.post.with(|s| (s.posts().len(), s.comments().len()));
    log::info!("Logged in as {nick_name}: {profiles} profiles, {posts} posts, {comments} comments");
    Ok(())
}
