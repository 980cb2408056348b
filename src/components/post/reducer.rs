use crate::environment::Environment;
use crate::helper::{append, replace_all, replace_by_id};
use crate::store::Effect;

use super::{LikeUpdate, PostAction, State};

pub fn reduce(action: PostAction, state: &mut State, environment: &Environment) -> Effect<PostAction> {
    log::trace!("{action:?}");
    let model = environment.model.clone();
    match action {
        PostAction::FetchPostStart => {
            state.is_loading_post = true;
            Effect::NONE
        }
        PostAction::FetchPostEnd => {
            state.is_loading_post = false;
            Effect::NONE
        }
        PostAction::SetOpenNewPost => {
            state.open_new_post = true;
            Effect::NONE
        }
        PostAction::ResetOpenNewPost => {
            state.open_new_post = false;
            Effect::NONE
        }
        PostAction::GetPosts => {
            Effect::future(async move { model.posts().await }, PostAction::GetPostsDone)
        }
        PostAction::GetPostsDone(result) => match result {
            Ok(posts) => {
                log::debug!("Loaded {} posts", posts.len());
                state.posts = replace_all(posts);
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
        PostAction::NewPost(post) => Effect::future(
            async move { model.new_post(&post).await },
            PostAction::NewPostDone,
        ),
        PostAction::NewPostDone(result) => match result {
            Ok(post) => {
                state.posts = append(&state.posts, post);
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
        PostAction::ToggleLike(toggle) => {
            let update = LikeUpdate::new(&toggle);
            log::debug!("Like toggle {} by {}: {update:?}", toggle.id, toggle.new);
            Effect::future(
                async move { update.send(&model).await },
                PostAction::ToggleLikeDone,
            )
        }
        PostAction::ToggleLikeDone(result) => match result {
            Ok(post) => {
                state.posts = replace_by_id(&state.posts, &post);
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
        PostAction::GetComments => Effect::future(
            async move { model.comments().await },
            PostAction::GetCommentsDone,
        ),
        PostAction::GetCommentsDone(result) => match result {
            Ok(comments) => {
                log::debug!("Loaded {} comments", comments.len());
                state.comments = replace_all(comments);
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
        PostAction::NewComment(comment) => Effect::future(
            async move { model.new_comment(&comment).await },
            PostAction::NewCommentDone,
        ),
        PostAction::NewCommentDone(result) => match result {
            Ok(comment) => {
                state.comments = append(&state.comments, comment);
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
    }
}
