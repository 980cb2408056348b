use crate::environment::types::{Comment, LikeToggle, NewComment, NewPost, Post};
use crate::error::Error;

#[derive(Clone, Debug)]
pub enum PostAction {
    FetchPostStart,
    FetchPostEnd,
    SetOpenNewPost,
    ResetOpenNewPost,

    GetPosts,
    GetPostsDone(Result<Vec<Post>, Error>),
    NewPost(NewPost),
    NewPostDone(Result<Post, Error>),
    ToggleLike(LikeToggle),
    ToggleLikeDone(Result<Post, Error>),

    GetComments,
    GetCommentsDone(Result<Vec<Comment>, Error>),
    NewComment(NewComment),
    NewCommentDone(Result<Comment, Error>),
}
