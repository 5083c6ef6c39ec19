//! Modding history service.
//!
//! Runs the searches behind each modding history page and attaches the relations
//! each page displays.

use chrono::{DateTime, Months, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        beatmapset_event::BeatmapsetEventRepository, discussion::DiscussionRepository,
        discussion_post::DiscussionPostRepository, discussion_vote::DiscussionVoteRepository,
        kudosu_history::KudosuHistoryRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        discussion::{CurrentUserAttributes, DiscussionWithRelations},
        event::EventWithRelations,
        kudosu::{KudosuPageParams, KudosuWithRelations, RECENT_KUDOSU_PER_PAGE},
        modding::{ModdingContext, ModdingHistory},
        pagination::{ModdingPage, Paginated},
        post::PostWithRelations,
        privilege::Privileges,
        search::SortOrder,
        vote::{VoteWithRelations, SUMMARY_MONTHS},
    },
    service::{
        loader::{DiscussionIncludes, EventIncludes, PostIncludes, RelationLoader, VoteIncludes},
        user::UserService,
    },
};

/// Rows per section on the overview.
pub const OVERVIEW_LIMIT: u64 = 10;

pub struct ModdingHistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModdingHistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn loader(&self, context: &ModdingContext) -> RelationLoader<'a> {
        RelationLoader::new(self.db).with_trashed_discussions(context.params.with_deleted)
    }

    /// Builds the overview of a user's modding history.
    ///
    /// Each section shows the latest records, deleted ones included for moderators.
    /// Vote summaries cover the last three months.
    pub async fn index(&self, mut context: ModdingContext) -> Result<ModdingHistory, AppError> {
        context.params.limit = OVERVIEW_LIMIT;
        context.params.sort = SortOrder::IdDesc;
        context.params.with_deleted = context.privileges.is_moderator;

        let loader = self.loader(&context);
        let params = &context.params;
        let user_id = context.user.id;

        let (discussions, _) = DiscussionRepository::new(self.db).search(params).await?;
        let mut discussions = loader
            .discussions(
                discussions,
                DiscussionIncludes {
                    beatmap: true,
                    beatmapset: true,
                    starting_post: true,
                    ..Default::default()
                },
            )
            .await?;
        self.attach_current_user_attributes(&mut discussions, &context.privileges)
            .await?;

        let (posts, _) = DiscussionPostRepository::new(self.db).search(params).await?;
        let posts = loader
            .posts(
                posts,
                PostIncludes {
                    user: false,
                    discussion: Some(DiscussionIncludes {
                        beatmap: true,
                        beatmapset: true,
                        ..Default::default()
                    }),
                },
            )
            .await?;

        let (events, _) = BeatmapsetEventRepository::new(self.db).search(params).await?;
        let events = self
            .loader(&context)
            .with_trashed_beatmapsets(context.privileges.is_moderator)
            .events(
                events,
                EventIncludes {
                    user: true,
                    beatmapset: true,
                    beatmapset_user: true,
                    discussion: Some(DiscussionIncludes {
                        starting_post: true,
                        ..Default::default()
                    }),
                },
            )
            .await?;

        let since = summary_cutoff(Utc::now());
        let vote_repo = DiscussionVoteRepository::new(self.db);
        let votes_given = vote_repo.recently_given_by_user(user_id, since).await?;
        let votes_received = vote_repo.recently_received_by_user(user_id, since).await?;

        let referenced_ids = discussions
            .iter()
            .map(|d| d.discussion.user_id)
            .chain(posts.iter().map(|p| p.post.user_id))
            .chain(posts.iter().map(|p| p.post.last_editor_id))
            .chain(events.iter().map(|e| e.event.user_id))
            .chain(votes_given.iter().map(|v| v.user_id))
            .chain(votes_received.iter().map(|v| v.user_id))
            .collect::<Vec<_>>();
        let mut users: Vec<_> = loader
            .users(referenced_ids)
            .await?
            .into_values()
            .filter(|user| user.has_profile_visible())
            .collect();
        users.sort_by_key(|user| user.id);

        let kudosu = KudosuHistoryRepository::new(self.db)
            .received_by_user(user_id, RECENT_KUDOSU_PER_PAGE + 1, 0)
            .await?;
        let recently_received_kudosu = loader.kudosu(kudosu).await?;

        let profile = UserService::new(self.db).profile(context.user).await?;

        tracing::debug!(
            "Loaded modding overview for user {}: {} discussions, {} posts, {} events",
            user_id,
            discussions.len(),
            posts.len(),
            events.len()
        );

        Ok(ModdingHistory {
            profile,
            discussions,
            events,
            posts,
            votes_given,
            votes_received,
            users,
            recently_received_kudosu,
        })
    }

    /// Discussions started by the user.
    pub async fn discussions(
        &self,
        context: ModdingContext,
    ) -> Result<ModdingPage<DiscussionWithRelations>, AppError> {
        let (discussions, total) = DiscussionRepository::new(self.db)
            .search(&context.params)
            .await?;
        let discussions = self
            .loader(&context)
            .discussions(
                discussions,
                DiscussionIncludes {
                    user: true,
                    beatmapset: true,
                    starting_post: true,
                    ..Default::default()
                },
            )
            .await?;

        Ok(page(context, discussions, total))
    }

    /// Beatmapset events performed by the user.
    ///
    /// Moderators also see events on deleted beatmapsets with the beatmapset
    /// attached.
    pub async fn events(
        &self,
        context: ModdingContext,
    ) -> Result<ModdingPage<EventWithRelations>, AppError> {
        let (events, total) = BeatmapsetEventRepository::new(self.db)
            .search(&context.params)
            .await?;
        let events = self
            .loader(&context)
            .with_trashed_beatmapsets(context.privileges.is_moderator)
            .events(
                events,
                EventIncludes {
                    user: true,
                    beatmapset: true,
                    beatmapset_user: true,
                    discussion: None,
                },
            )
            .await?;

        Ok(page(context, events, total))
    }

    /// Discussion posts written by the user.
    pub async fn posts(
        &self,
        context: ModdingContext,
    ) -> Result<ModdingPage<PostWithRelations>, AppError> {
        let (posts, total) = DiscussionPostRepository::new(self.db)
            .search(&context.params)
            .await?;
        let posts = self
            .loader(&context)
            .posts(
                posts,
                PostIncludes {
                    user: true,
                    discussion: Some(DiscussionIncludes {
                        beatmapset: true,
                        user: true,
                        starting_post: true,
                        ..Default::default()
                    }),
                },
            )
            .await?;

        Ok(page(context, posts, total))
    }

    /// Votes cast by the user.
    pub async fn votes_given(
        &self,
        context: ModdingContext,
    ) -> Result<ModdingPage<VoteWithRelations>, AppError> {
        self.votes(context).await
    }

    /// Votes cast on the user's discussions by anyone.
    pub async fn votes_received(
        &self,
        mut context: ModdingContext,
    ) -> Result<ModdingPage<VoteWithRelations>, AppError> {
        context.params.receiver = Some(context.user.id);
        context.params.user = None;

        self.votes(context).await
    }

    async fn votes(
        &self,
        context: ModdingContext,
    ) -> Result<ModdingPage<VoteWithRelations>, AppError> {
        let (votes, total) = DiscussionVoteRepository::new(self.db)
            .search(&context.params)
            .await?;
        let votes = self
            .loader(&context)
            .votes(
                votes,
                VoteIncludes {
                    user: true,
                    discussion: Some(DiscussionIncludes {
                        user: true,
                        beatmapset: true,
                        starting_post: true,
                        ..Default::default()
                    }),
                },
            )
            .await?;

        Ok(page(context, votes, total))
    }

    /// Kudosu received by the user, newest first, for paging past the overview.
    pub async fn kudosu(
        &self,
        context: &ModdingContext,
        paging: KudosuPageParams,
    ) -> Result<Vec<KudosuWithRelations>, AppError> {
        let history = KudosuHistoryRepository::new(self.db)
            .received_by_user(context.user.id, paging.limit, paging.offset)
            .await?;

        Ok(self.loader(context).kudosu(history).await?)
    }

    /// Fills in the viewer's vote and permissions on each discussion.
    async fn attach_current_user_attributes(
        &self,
        discussions: &mut [DiscussionWithRelations],
        privileges: &Privileges,
    ) -> Result<(), AppError> {
        let Some(viewer_id) = privileges.viewer_id else {
            return Ok(());
        };

        let ids: Vec<i32> = discussions.iter().map(|d| d.discussion.id).collect();
        let scores = DiscussionVoteRepository::new(self.db)
            .scores_by_user(viewer_id, &ids)
            .await?;

        for loaded in discussions.iter_mut() {
            let owner = loaded.beatmapset.as_ref().map(|set| set.beatmapset.user_id);
            let score = scores.get(&loaded.discussion.id).copied().unwrap_or(0);

            loaded.current_user_attributes =
                CurrentUserAttributes::for_viewer(&loaded.discussion, owner, privileges, score);
        }

        Ok(())
    }
}

fn page<T>(context: ModdingContext, items: Vec<T>, total: u64) -> ModdingPage<T> {
    let results = Paginated::new(items, total, &context.params);
    ModdingPage { context, results }
}

/// Start of the vote summary timeframe.
fn summary_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(SUMMARY_MONTHS))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
