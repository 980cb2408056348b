use crate::environment::types::{Comment, Post, PostId};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// A post or comment request is running
    pub is_loading_post: bool,
    pub open_new_post: bool,
    pub posts: im::Vector<Post>,
    pub comments: im::Vector<Comment>,
}

impl State {
    pub fn is_loading_post(&self) -> bool {
        self.is_loading_post
    }

    pub fn open_new_post(&self) -> bool {
        self.open_new_post
    }

    pub fn posts(&self) -> &im::Vector<Post> {
        &self.posts
    }

    pub fn comments(&self) -> &im::Vector<Comment> {
        &self.comments
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn comments_for(&self, post: PostId) -> impl Iterator<Item = &Comment> {
        self.comments.iter().filter(move |comment| comment.post == post)
    }
}
