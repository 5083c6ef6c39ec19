//! Batched relation loading.
//!
//! Every relation is fetched with one `IN (...)` query per relation kind and then
//! attached from a map, so loading a page costs a fixed number of queries no matter
//! how many rows it holds.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        beatmapset::{BeatmapRepository, BeatmapsetRepository},
        discussion::DiscussionRepository,
        discussion_post::DiscussionPostRepository,
        user::UserRepository,
    },
    model::{
        beatmapset::BeatmapsetWithUser,
        discussion::DiscussionWithRelations,
        event::EventWithRelations,
        kudosu::{KudosuSource, KudosuWithRelations, DISCUSSION_KUDOSUABLE},
        post::PostWithRelations,
        user::User,
        vote::VoteWithRelations,
    },
};

/// Relations to attach to discussions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscussionIncludes {
    pub beatmap: bool,
    pub beatmapset: bool,
    pub beatmapset_user: bool,
    pub starting_post: bool,
    pub user: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PostIncludes {
    pub user: bool,
    pub discussion: Option<DiscussionIncludes>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EventIncludes {
    pub user: bool,
    pub beatmapset: bool,
    pub beatmapset_user: bool,
    pub discussion: Option<DiscussionIncludes>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VoteIncludes {
    pub user: bool,
    pub discussion: Option<DiscussionIncludes>,
}

pub struct RelationLoader<'a> {
    db: &'a DatabaseConnection,
    with_trashed_beatmapsets: bool,
    with_trashed_discussions: bool,
}

impl<'a> RelationLoader<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            with_trashed_beatmapsets: false,
            with_trashed_discussions: false,
        }
    }

    /// Also attach soft-deleted beatmapsets.
    pub fn with_trashed_beatmapsets(mut self, with_trashed: bool) -> Self {
        self.with_trashed_beatmapsets = with_trashed;
        self
    }

    /// Also attach soft-deleted discussions.
    pub fn with_trashed_discussions(mut self, with_trashed: bool) -> Self {
        self.with_trashed_discussions = with_trashed;
        self
    }

    pub async fn users(
        &self,
        ids: impl IntoIterator<Item = Option<i32>>,
    ) -> Result<HashMap<i32, User>, DbErr> {
        UserRepository::new(self.db)
            .find_by_ids(&distinct(ids))
            .await
    }

    async fn beatmapsets(
        &self,
        ids: impl IntoIterator<Item = Option<i32>>,
        with_user: bool,
    ) -> Result<HashMap<i32, BeatmapsetWithUser>, DbErr> {
        let beatmapsets = BeatmapsetRepository::new(self.db)
            .find_by_ids(&distinct(ids), self.with_trashed_beatmapsets)
            .await?;

        let owners = if with_user {
            self.users(beatmapsets.values().map(|set| Some(set.user_id)))
                .await?
        } else {
            HashMap::new()
        };

        Ok(beatmapsets
            .into_iter()
            .map(|(id, beatmapset)| {
                let user = owners.get(&beatmapset.user_id).cloned();
                (id, BeatmapsetWithUser { beatmapset, user })
            })
            .collect())
    }

    /// Attaches the requested relations to each discussion, keeping order.
    pub async fn discussions(
        &self,
        discussions: Vec<entity::beatmap_discussion::Model>,
        includes: DiscussionIncludes,
    ) -> Result<Vec<DiscussionWithRelations>, DbErr> {
        let beatmaps = if includes.beatmap {
            BeatmapRepository::new(self.db)
                .find_by_ids(&distinct(discussions.iter().map(|d| d.beatmap_id)))
                .await?
        } else {
            HashMap::new()
        };
        let beatmapsets = if includes.beatmapset {
            self.beatmapsets(
                discussions.iter().map(|d| Some(d.beatmapset_id)),
                includes.beatmapset_user,
            )
            .await?
        } else {
            HashMap::new()
        };
        let mut starting_posts = if includes.starting_post {
            DiscussionPostRepository::new(self.db)
                .starting_posts(&distinct(discussions.iter().map(|d| Some(d.id))))
                .await?
        } else {
            HashMap::new()
        };
        let users = if includes.user {
            self.users(discussions.iter().map(|d| d.user_id)).await?
        } else {
            HashMap::new()
        };

        Ok(discussions
            .into_iter()
            .map(|discussion| {
                let mut loaded = DiscussionWithRelations::new(discussion);
                let discussion = &loaded.discussion;

                // Several discussions may share a beatmapset
                loaded.beatmapset = beatmapsets.get(&discussion.beatmapset_id).cloned();
                loaded.beatmap = discussion.beatmap_id.and_then(|id| beatmaps.get(&id).cloned());
                loaded.starting_post = starting_posts.remove(&discussion.id);
                loaded.user = discussion.user_id.and_then(|id| users.get(&id).cloned());
                loaded
            })
            .collect())
    }

    /// Loads discussions by id with relations, keyed by id.
    async fn discussions_by_id(
        &self,
        ids: impl IntoIterator<Item = Option<i32>>,
        includes: DiscussionIncludes,
    ) -> Result<HashMap<i32, DiscussionWithRelations>, DbErr> {
        let discussions = DiscussionRepository::new(self.db)
            .find_by_ids(&distinct(ids), self.with_trashed_discussions)
            .await?;

        Ok(self
            .discussions(discussions.into_values().collect(), includes)
            .await?
            .into_iter()
            .map(|loaded| (loaded.discussion.id, loaded))
            .collect())
    }

    pub async fn posts(
        &self,
        posts: Vec<entity::beatmap_discussion_post::Model>,
        includes: PostIncludes,
    ) -> Result<Vec<PostWithRelations>, DbErr> {
        let users = if includes.user {
            self.users(posts.iter().map(|p| p.user_id)).await?
        } else {
            HashMap::new()
        };
        let discussions = match includes.discussion {
            Some(discussion_includes) => {
                self.discussions_by_id(
                    posts.iter().map(|p| Some(p.beatmap_discussion_id)),
                    discussion_includes,
                )
                .await?
            }
            None => HashMap::new(),
        };

        Ok(posts
            .into_iter()
            .map(|post| PostWithRelations {
                user: post.user_id.and_then(|id| users.get(&id).cloned()),
                discussion: discussions.get(&post.beatmap_discussion_id).cloned(),
                post,
            })
            .collect())
    }

    pub async fn events(
        &self,
        events: Vec<entity::beatmapset_event::Model>,
        includes: EventIncludes,
    ) -> Result<Vec<EventWithRelations>, DbErr> {
        let users = if includes.user {
            self.users(events.iter().map(|e| e.user_id)).await?
        } else {
            HashMap::new()
        };
        let beatmapsets = if includes.beatmapset {
            self.beatmapsets(
                events.iter().map(|e| Some(e.beatmapset_id)),
                includes.beatmapset_user,
            )
            .await?
        } else {
            HashMap::new()
        };
        let discussions = match includes.discussion {
            Some(discussion_includes) => {
                self.discussions_by_id(
                    events.iter().map(|e| e.beatmap_discussion_id),
                    discussion_includes,
                )
                .await?
            }
            None => HashMap::new(),
        };

        Ok(events
            .into_iter()
            .map(|event| EventWithRelations {
                user: event.user_id.and_then(|id| users.get(&id).cloned()),
                beatmapset: beatmapsets.get(&event.beatmapset_id).cloned(),
                discussion: event
                    .beatmap_discussion_id
                    .and_then(|id| discussions.get(&id).cloned()),
                event,
            })
            .collect())
    }

    pub async fn votes(
        &self,
        votes: Vec<entity::beatmap_discussion_vote::Model>,
        includes: VoteIncludes,
    ) -> Result<Vec<VoteWithRelations>, DbErr> {
        let users = if includes.user {
            self.users(votes.iter().map(|v| Some(v.user_id))).await?
        } else {
            HashMap::new()
        };
        let discussions = match includes.discussion {
            Some(discussion_includes) => {
                self.discussions_by_id(
                    votes.iter().map(|v| Some(v.beatmap_discussion_id)),
                    discussion_includes,
                )
                .await?
            }
            None => HashMap::new(),
        };

        Ok(votes
            .into_iter()
            .map(|vote| VoteWithRelations {
                user: users.get(&vote.user_id).cloned(),
                discussion: discussions.get(&vote.beatmap_discussion_id).cloned(),
                vote,
            })
            .collect())
    }

    /// Attaches the giver and the discussion a kudosu change was awarded for.
    pub async fn kudosu(
        &self,
        history: Vec<entity::kudosu_history::Model>,
    ) -> Result<Vec<KudosuWithRelations>, DbErr> {
        let givers = self.users(history.iter().map(|h| h.giver_id)).await?;

        let discussion_ids = history
            .iter()
            .filter(|h| h.kudosuable_type == DISCUSSION_KUDOSUABLE)
            .map(|h| Some(h.kudosuable_id));
        let discussions = DiscussionRepository::new(self.db)
            .find_by_ids(&distinct(discussion_ids), self.with_trashed_discussions)
            .await?;
        let beatmapsets = self
            .beatmapsets(discussions.values().map(|d| Some(d.beatmapset_id)), false)
            .await?;

        Ok(history
            .into_iter()
            .map(|history| {
                let source = (history.kudosuable_type == DISCUSSION_KUDOSUABLE)
                    .then(|| discussions.get(&history.kudosuable_id))
                    .flatten()
                    .map(|discussion| KudosuSource {
                        beatmapset: beatmapsets.get(&discussion.beatmapset_id).cloned(),
                        discussion: discussion.clone(),
                    });

                KudosuWithRelations {
                    giver: history.giver_id.and_then(|id| givers.get(&id).cloned()),
                    source,
                    history,
                }
            })
            .collect())
    }
}

/// Sorted distinct non-null ids.
fn distinct(ids: impl IntoIterator<Item = Option<i32>>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.into_iter().flatten().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
