use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub type ProfileId = i64;
pub type PostId = i64;
pub type CommentId = i64;
pub type UserId = i64;

/// Entities that are merged into collections by their id
pub trait Identified {
    fn id(&self) -> i64;
}

// Api Types

#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(rename = "nickName")]
    pub nick_name: String,
    #[serde(rename = "userProfile")]
    pub user_profile: UserId,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub img: Option<String>,
}

#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(rename = "userPost")]
    pub user_post: UserId,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub img: Option<String>,
    /// Ids of the users who liked the post, in the order the server keeps them
    #[serde(default)]
    pub liked: Vec<UserId>,
}

#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    #[serde(rename = "userComment")]
    pub user_comment: UserId,
    pub post: PostId,
}

impl Identified for Profile {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Post {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Comment {
    fn id(&self) -> i64 {
        self.id
    }
}

// Request Types

#[derive(Clone, Eq, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish()
    }
}

#[derive(Clone, Eq, PartialEq, Deserialize)]
pub struct TokenPair {
    #[serde(default)]
    pub refresh: String,
    pub access: String,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair").finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub email: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NewProfile {
    #[serde(rename = "nickName")]
    pub nick_name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileUpdate {
    pub id: ProfileId,
    pub nick_name: String,
    pub img: Option<Attachment>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub img: Option<Attachment>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NewComment {
    pub text: String,
    pub post: PostId,
}

/// A like button press by `new` on the post `id`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LikeToggle {
    pub id: PostId,
    pub title: String,
    pub current: Vec<UserId>,
    pub new: UserId,
}

impl LikeToggle {
    pub fn new(post: &Post, user: UserId) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            current: post.liked.clone(),
            new: user,
        }
    }
}

/// An image that is uploaded as a multipart file field
#[derive(Clone, Eq, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first()
            .map(|m| m.essence_str().to_string());
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    pub async fn read(path: &Path) -> Result<Self> {
        let Some(file_name) = path.file_name().and_then(|e| e.to_str()) else {
            return Err(Error::Attachment(format!("Invalid Path {}", path.display())));
        };
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::Attachment(format!("Could not read {}: {e:?}", path.display())))?;
        Ok(Self::new(file_name, bytes))
    }
}
