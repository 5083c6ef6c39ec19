use std::collections::HashMap;

use sea_orm::{
    sea_query::{Expr, Func, Query, SelectStatement},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{post::normalize_post_types, search::SearchParams};

pub struct DiscussionPostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscussionPostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches discussion posts and returns one page with the total match count.
    ///
    /// Post types are `first` (the post that opened a discussion), `reply` and
    /// `system`. Only replies are returned when no known type is requested. Without
    /// `with_deleted`, posts in deleted discussions are excluded too.
    ///
    /// # Returns
    /// - `Ok((posts, total))` - Requested page and the un-paged count
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        params: &SearchParams,
    ) -> Result<(Vec<entity::beatmap_discussion_post::Model>, u64), DbErr> {
        let mut query = entity::prelude::BeatmapDiscussionPost::find();

        if let Some(user_id) = params.user {
            query = query.filter(entity::beatmap_discussion_post::Column::UserId.eq(user_id));
        }
        if let Some(discussion_id) = params.beatmapset_discussion_id {
            query = query.filter(
                entity::beatmap_discussion_post::Column::BeatmapDiscussionId.eq(discussion_id),
            );
        }

        let mut types = Condition::any();
        for post_type in normalize_post_types(&params.types) {
            types = types.add(match post_type {
                "first" => Condition::all()
                    .add(entity::beatmap_discussion_post::Column::Id.in_subquery(starting_post_ids())),
                "system" => Condition::all()
                    .add(entity::beatmap_discussion_post::Column::System.eq(true)),
                _ => Condition::all()
                    .add(entity::beatmap_discussion_post::Column::System.eq(false))
                    .add(
                        entity::beatmap_discussion_post::Column::Id
                            .not_in_subquery(starting_post_ids()),
                    ),
            });
        }
        query = query.filter(types);

        if !params.with_deleted {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::beatmap_discussion_post::Relation::BeatmapDiscussion.def(),
                )
                .filter(entity::beatmap_discussion_post::Column::DeletedAt.is_null())
                .filter(entity::beatmap_discussion::Column::DeletedAt.is_null());
        }

        let paginator = query
            .order_by(entity::beatmap_discussion_post::Column::Id, params.sort.order())
            .paginate(self.db, params.limit);

        let total = paginator.num_items().await?;
        let posts = paginator.fetch_page(params.page - 1).await?;

        Ok((posts, total))
    }

    /// Gets the first post of each discussion, keyed by discussion id.
    pub async fn starting_posts(
        &self,
        discussion_ids: &[i32],
    ) -> Result<HashMap<i32, entity::beatmap_discussion_post::Model>, DbErr> {
        if discussion_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut first_ids = starting_post_ids();
        first_ids.and_where(
            entity::beatmap_discussion_post::Column::BeatmapDiscussionId
                .is_in(discussion_ids.to_vec()),
        );

        Ok(entity::prelude::BeatmapDiscussionPost::find()
            .filter(entity::beatmap_discussion_post::Column::Id.in_subquery(first_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|post| (post.beatmap_discussion_id, post))
            .collect())
    }
}

/// Ids of the lowest-id post of every discussion.
fn starting_post_ids() -> SelectStatement {
    Query::select()
        .expr(Func::min(Expr::col(entity::beatmap_discussion_post::Column::Id)))
        .from(entity::prelude::BeatmapDiscussionPost)
        .group_by_col(entity::beatmap_discussion_post::Column::BeatmapDiscussionId)
        .to_owned()
}
