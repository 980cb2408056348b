use crate::environment::model::Model;
use crate::environment::types::{LikeToggle, Post, PostId, UserId};
use crate::error::Result;

/// The request that persists a like button press.
///
/// A PATCH with zero `liked` fields leaves the list untouched on the
/// backend, so un-liking as the last liker has to PUT the post instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LikeUpdate {
    /// Full replace with the title and no likers
    Replace { id: PostId, title: String },
    /// Partial update carrying the complete new liker list
    Partial { id: PostId, liked: Vec<UserId> },
}

impl LikeUpdate {
    pub fn new(toggle: &LikeToggle) -> Self {
        let overlapped = toggle.current.contains(&toggle.new);
        let mut liked: Vec<UserId> = toggle
            .current
            .iter()
            .copied()
            .filter(|user| *user != toggle.new)
            .collect();

        if !overlapped {
            liked.push(toggle.new);
        } else if liked.is_empty() {
            return LikeUpdate::Replace {
                id: toggle.id,
                title: toggle.title.clone(),
            };
        }

        LikeUpdate::Partial {
            id: toggle.id,
            liked,
        }
    }

    pub fn id(&self) -> PostId {
        match self {
            LikeUpdate::Replace { id, .. } | LikeUpdate::Partial { id, .. } => *id,
        }
    }

    /// The liker list the post will have afterwards
    pub fn liked(&self) -> &[UserId] {
        match self {
            LikeUpdate::Replace { .. } => &[],
            LikeUpdate::Partial { liked, .. } => liked,
        }
    }

    pub async fn send(&self, model: &Model) -> Result<Post> {
        match self {
            LikeUpdate::Replace { id, title } => model.replace_post(*id, title).await,
            LikeUpdate::Partial { id, liked } => model.patch_post_liked(*id, liked).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(current: &[UserId], new: UserId) -> LikeToggle {
        LikeToggle {
            id: 3,
            title: "Sunset".to_string(),
            current: current.to_vec(),
            new,
        }
    }

    #[test]
    fn last_liker_unlikes_with_full_replace() {
        let update = LikeUpdate::new(&toggle(&[5], 5));
        assert_eq!(
            update,
            LikeUpdate::Replace {
                id: 3,
                title: "Sunset".to_string()
            }
        );
        assert!(update.liked().is_empty());
    }

    #[test]
    fn unlike_among_others_is_partial_without_requester() {
        let update = LikeUpdate::new(&toggle(&[5, 7], 5));
        assert_eq!(
            update,
            LikeUpdate::Partial {
                id: 3,
                liked: vec![7]
            }
        );

        let update = LikeUpdate::new(&toggle(&[1, 5, 7, 9], 5));
        assert_eq!(update.liked(), &[1, 7, 9]);
        assert!(!update.liked().contains(&5));
    }

    #[test]
    fn like_appends_requester_once() {
        let update = LikeUpdate::new(&toggle(&[7], 5));
        assert_eq!(
            update,
            LikeUpdate::Partial {
                id: 3,
                liked: vec![7, 5]
            }
        );

        let update = LikeUpdate::new(&toggle(&[], 5));
        assert_eq!(update.liked(), &[5]);
    }

    #[test]
    fn duplicate_requester_entries_are_all_removed() {
        let update = LikeUpdate::new(&toggle(&[5, 5], 5));
        assert_eq!(
            update,
            LikeUpdate::Replace {
                id: 3,
                title: "Sunset".to_string()
            }
        );

        let update = LikeUpdate::new(&toggle(&[5, 7, 5], 5));
        assert_eq!(update.liked(), &[7]);
    }

    #[test]
    fn every_toggle_flips_membership() {
        for current in [vec![], vec![1], vec![1, 2], vec![2, 1, 3]] {
            for user in [1, 2, 4] {
                let update = LikeUpdate::new(&toggle(&current, user));
                let was_liked = current.contains(&user);
                assert_eq!(update.liked().contains(&user), !was_liked);
                assert_eq!(update.id(), 3);
                let others: Vec<_> = current.iter().copied().filter(|u| *u != user).collect();
                let kept: Vec<_> = update.liked().iter().copied().filter(|u| *u != user).collect();
                assert_eq!(kept, others);
                assert_eq!(
                    matches!(update, LikeUpdate::Replace { .. }),
                    was_liked && others.is_empty()
                );
            }
        }
    }
}
