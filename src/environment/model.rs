use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use strum_macros::{Display, IntoStaticStr};

use super::types::*;
use super::Session;
use crate::config::Config;
use crate::error::{Error, Result};

/// Every backend call this crate makes
#[derive(IntoStaticStr, Display, Debug, Clone, Copy, Eq, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Endpoint {
    TokenIssue,
    Register,
    ProfileCreate,
    ProfileUpdate(ProfileId),
    MyProfile,
    Profiles,
    Posts,
    PostCreate,
    PostPartialUpdate(PostId),
    PostReplace(PostId),
    Comments,
    CommentCreate,
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::TokenIssue => "authen/jwt/create".to_string(),
            Endpoint::Register => "api/register/".to_string(),
            Endpoint::ProfileCreate | Endpoint::Profiles => "api/profile/".to_string(),
            Endpoint::ProfileUpdate(id) => format!("api/profile/{id}/"),
            Endpoint::MyProfile => "api/myprofile/".to_string(),
            Endpoint::Posts | Endpoint::PostCreate => "api/post/".to_string(),
            Endpoint::PostPartialUpdate(id) | Endpoint::PostReplace(id) => {
                format!("api/post/{id}/")
            }
            Endpoint::Comments | Endpoint::CommentCreate => "api/comment/".to_string(),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::MyProfile | Endpoint::Profiles | Endpoint::Posts | Endpoint::Comments => {
                Method::GET
            }
            Endpoint::TokenIssue
            | Endpoint::Register
            | Endpoint::ProfileCreate
            | Endpoint::PostCreate
            | Endpoint::CommentCreate => Method::POST,
            Endpoint::ProfileUpdate(_) | Endpoint::PostReplace(_) => Method::PUT,
            Endpoint::PostPartialUpdate(_) => Method::PATCH,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Endpoint::TokenIssue | Endpoint::Register)
    }
}

/// The network client. Cheap to clone, clones share the connection pool
/// and the session.
#[derive(Clone)]
pub struct Model {
    config: Config,
    session: Session,
    client: reqwest::Client,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("url", &self.config.api_url.as_str())
            .finish()
    }
}

impl Model {
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            config,
            session,
            client: reqwest::Client::new(),
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<TokenPair> {
        log::trace!("Login {}", credentials.email);
        let endpoint = Endpoint::TokenIssue;
        let request = self.request(endpoint)?.json(credentials);
        self.send(endpoint, request).await.logged()
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<RegisteredUser> {
        log::trace!("Register {}", credentials.email);
        let endpoint = Endpoint::Register;
        let request = self.request(endpoint)?.json(credentials);
        self.send(endpoint, request).await.logged()
    }

    pub async fn create_profile(&self, profile: &NewProfile) -> Result<Profile> {
        log::trace!("Create Profile");
        let endpoint = Endpoint::ProfileCreate;
        let request = self.request(endpoint)?.json(profile);
        self.send(endpoint, request).await.logged()
    }

    pub async fn update_profile(&self, profile: &ProfileUpdate) -> Result<Profile> {
        log::trace!("Update Profile {}", profile.id);
        let endpoint = Endpoint::ProfileUpdate(profile.id);
        let mut form = Form::new().text("nickName", profile.nick_name.clone());
        if let Some(ref img) = profile.img {
            form = form.part("img", image_part(img)?);
        }
        let request = self.request(endpoint)?.multipart(form);
        self.send(endpoint, request).await.logged()
    }

    pub async fn my_profile(&self) -> Result<Profile> {
        log::trace!("My Profile");
        let endpoint = Endpoint::MyProfile;
        let request = self.request(endpoint)?;
        // the backend filters the profile list by owner, so a single
        // profile arrives as a one element collection
        let profiles: Vec<Profile> = self.send(endpoint, request).await.logged()?;
        profiles.into_iter().next().ok_or_else(|| {
            let error = Error::EmptyCollection {
                endpoint: endpoint.into(),
            };
            log::error!("{error}");
            error
        })
    }

    pub async fn profiles(&self) -> Result<Vec<Profile>> {
        log::trace!("Profiles");
        let endpoint = Endpoint::Profiles;
        let request = self.request(endpoint)?;
        self.send(endpoint, request).await.logged()
    }

    pub async fn posts(&self) -> Result<Vec<Post>> {
        log::trace!("Posts");
        let endpoint = Endpoint::Posts;
        let request = self.request(endpoint)?;
        self.send(endpoint, request).await.logged()
    }

    pub async fn new_post(&self, post: &NewPost) -> Result<Post> {
        log::trace!("New Post");
        let endpoint = Endpoint::PostCreate;
        let mut form = Form::new().text("title", post.title.clone());
        if let Some(ref img) = post.img {
            form = form.part("img", image_part(img)?);
        }
        let request = self.request(endpoint)?.multipart(form);
        self.send(endpoint, request).await.logged()
    }

    /// PATCH the liker list. An empty `liked` sends no field at all, which
    /// the backend treats as "unchanged"; use `replace_post` to clear it
    pub async fn patch_post_liked(&self, id: PostId, liked: &[UserId]) -> Result<Post> {
        log::trace!("Patch Liked {id} {liked:?}");
        let endpoint = Endpoint::PostPartialUpdate(id);
        let form = liked
            .iter()
            .fold(Form::new(), |form, user| form.text("liked", user.to_string()));
        let request = self.request(endpoint)?.multipart(form);
        self.send(endpoint, request).await.logged()
    }

    /// PUT the post with only its title, which resets the liker list to empty
    pub async fn replace_post(&self, id: PostId, title: &str) -> Result<Post> {
        log::trace!("Replace Post {id}");
        let endpoint = Endpoint::PostReplace(id);
        let form = Form::new().text("title", title.to_string());
        let request = self.request(endpoint)?.multipart(form);
        self.send(endpoint, request).await.logged()
    }

    pub async fn comments(&self) -> Result<Vec<Comment>> {
        log::trace!("Comments");
        let endpoint = Endpoint::Comments;
        let request = self.request(endpoint)?;
        self.send(endpoint, request).await.logged()
    }

    pub async fn new_comment(&self, comment: &NewComment) -> Result<Comment> {
        log::trace!("New Comment on {}", comment.post);
        let endpoint = Endpoint::CommentCreate;
        let request = self.request(endpoint)?.json(comment);
        self.send(endpoint, request).await.logged()
    }

    fn request(&self, endpoint: Endpoint) -> Result<RequestBuilder> {
        let url = self.config.endpoint(&endpoint.path())?;
        let builder = self.client.request(endpoint.method(), url);
        if !endpoint.is_authenticated() {
            return Ok(builder);
        }
        match self.session.authorization() {
            Some(value) => Ok(builder.header(AUTHORIZATION, value)),
            None => {
                log::warn!("{endpoint} without an access token");
                Ok(builder)
            }
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T> {
        let name: &'static str = endpoint.into();
        let response = request.send().await.map_err(|e| Error::Http {
            endpoint: name,
            message: e.to_string(),
        })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                endpoint: name,
                status: status.as_u16(),
                body,
            });
        }
        response.json::<T>().await.map_err(|e| Error::Decode {
            endpoint: name,
            message: e.to_string(),
        })
    }
}

fn image_part(image: &Attachment) -> Result<Part> {
    let part = Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
    match image.mime {
        Some(ref mime) => part
            .mime_str(mime)
            .map_err(|e| Error::Attachment(format!("Invalid mime type {mime}: {e}"))),
        None => Ok(part),
    }
}

trait ResultExt {
    fn logged(self) -> Self;
}

impl<T> ResultExt for Result<T> {
    fn logged(self) -> Self {
        if let Err(ref e) = self {
            log::error!("{e}");
        }
        self
    }
}
