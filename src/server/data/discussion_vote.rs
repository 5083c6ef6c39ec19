//! Discussion vote repository.
//!
//! Besides the paged search this provides the per-user vote summaries shown on the
//! modding history overview.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::model::{search::SearchParams, vote::VoteSummary};

#[derive(Debug, FromQueryResult)]
struct VoteSummaryRow {
    user_id: Option<i32>,
    score: i64,
    count: i64,
}

pub struct DiscussionVoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscussionVoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches votes and returns one page with the total match count.
    ///
    /// `user` filters on the voter and `receiver` on the author of the voted
    /// discussion.
    ///
    /// # Returns
    /// - `Ok((votes, total))` - Requested page and the un-paged count
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        params: &SearchParams,
    ) -> Result<(Vec<entity::beatmap_discussion_vote::Model>, u64), DbErr> {
        let mut query = entity::prelude::BeatmapDiscussionVote::find();

        if let Some(user_id) = params.user {
            query = query.filter(entity::beatmap_discussion_vote::Column::UserId.eq(user_id));
        }
        if let Some(score) = params.score {
            query = query.filter(entity::beatmap_discussion_vote::Column::Score.eq(score));
        }
        if let Some(discussion_id) = params.beatmapset_discussion_id {
            query = query.filter(
                entity::beatmap_discussion_vote::Column::BeatmapDiscussionId.eq(discussion_id),
            );
        }

        if params.receiver.is_some() || !params.with_deleted {
            query = join_discussion(query);
        }
        if let Some(receiver_id) = params.receiver {
            query = query.filter(entity::beatmap_discussion::Column::UserId.eq(receiver_id));
        }
        if !params.with_deleted {
            query = query.filter(entity::beatmap_discussion::Column::DeletedAt.is_null());
        }

        let paginator = query
            .order_by(entity::beatmap_discussion_vote::Column::Id, params.sort.order())
            .paginate(self.db, params.limit);

        let total = paginator.num_items().await?;
        let votes = paginator.fetch_page(params.page - 1).await?;

        Ok((votes, total))
    }

    /// Votes cast by a user since `since`, summed per discussion author.
    pub async fn recently_given_by_user(
        &self,
        user_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<VoteSummary>, DbErr> {
        let query = join_discussion(entity::prelude::BeatmapDiscussionVote::find())
            .filter(entity::beatmap_discussion_vote::Column::UserId.eq(user_id))
            .select_only()
            .column_as(entity::beatmap_discussion::Column::UserId, "user_id")
            .group_by(entity::beatmap_discussion::Column::UserId);

        self.summarize(query, since).await
    }

    /// Votes cast on a user's discussions since `since`, summed per voter.
    pub async fn recently_received_by_user(
        &self,
        user_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<VoteSummary>, DbErr> {
        let query = join_discussion(entity::prelude::BeatmapDiscussionVote::find())
            .filter(entity::beatmap_discussion::Column::UserId.eq(user_id))
            .select_only()
            .column_as(entity::beatmap_discussion_vote::Column::UserId, "user_id")
            .group_by(entity::beatmap_discussion_vote::Column::UserId);

        self.summarize(query, since).await
    }

    /// Gets a voter's score on each of the given discussions, keyed by discussion id.
    pub async fn scores_by_user(
        &self,
        user_id: i32,
        discussion_ids: &[i32],
    ) -> Result<HashMap<i32, i32>, DbErr> {
        if discussion_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::BeatmapDiscussionVote::find()
            .filter(entity::beatmap_discussion_vote::Column::UserId.eq(user_id))
            .filter(
                entity::beatmap_discussion_vote::Column::BeatmapDiscussionId
                    .is_in(discussion_ids.to_vec()),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(|vote| (vote.beatmap_discussion_id, vote.score))
            .collect())
    }

    /// Adds the score and count aggregates to a grouped vote query.
    ///
    /// Votes on deleted discussions are left out. Summaries are ordered by score,
    /// highest first.
    async fn summarize(
        &self,
        query: Select<entity::beatmap_discussion_vote::Entity>,
        since: DateTime<Utc>,
    ) -> Result<Vec<VoteSummary>, DbErr> {
        let rows = query
            .column_as(
                Expr::expr(Func::sum(Expr::col((
                    entity::prelude::BeatmapDiscussionVote,
                    entity::beatmap_discussion_vote::Column::Score,
                )))),
                "score",
            )
            .column_as(
                Expr::expr(Func::count(Expr::col((
                    entity::prelude::BeatmapDiscussionVote,
                    entity::beatmap_discussion_vote::Column::Id,
                )))),
                "count",
            )
            .filter(entity::beatmap_discussion_vote::Column::CreatedAt.gt(since))
            .filter(entity::beatmap_discussion::Column::DeletedAt.is_null())
            .into_model::<VoteSummaryRow>()
            .all(self.db)
            .await?;

        let mut summaries: Vec<VoteSummary> = rows
            .into_iter()
            .map(|row| VoteSummary {
                user_id: row.user_id,
                score: row.score,
                count: row.count,
            })
            .collect();
        summaries.sort_by(|a, b| b.score.cmp(&a.score).then(a.user_id.cmp(&b.user_id)));

        Ok(summaries)
    }
}

fn join_discussion(
    query: Select<entity::beatmap_discussion_vote::Entity>,
) -> Select<entity::beatmap_discussion_vote::Entity> {
    query.join(
        JoinType::InnerJoin,
        entity::beatmap_discussion_vote::Relation::BeatmapDiscussion.def(),
    )
}
