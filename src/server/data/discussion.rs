use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::search::SearchParams;

pub struct DiscussionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscussionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches discussions and returns one page with the total match count.
    ///
    /// # Arguments
    /// - `params` - Filters, page and sort order
    ///
    /// # Returns
    /// - `Ok((discussions, total))` - Requested page and the un-paged count
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        params: &SearchParams,
    ) -> Result<(Vec<entity::beatmap_discussion::Model>, u64), DbErr> {
        let mut query = entity::prelude::BeatmapDiscussion::find();

        if let Some(user_id) = params.user {
            query = query.filter(entity::beatmap_discussion::Column::UserId.eq(user_id));
        }
        if let Some(beatmapset_id) = params.beatmapset_id {
            query =
                query.filter(entity::beatmap_discussion::Column::BeatmapsetId.eq(beatmapset_id));
        }
        if let Some(beatmap_id) = params.beatmap_id {
            query = query.filter(entity::beatmap_discussion::Column::BeatmapId.eq(beatmap_id));
        }
        if !params.message_types.is_empty() {
            query = query.filter(
                entity::beatmap_discussion::Column::MessageType.is_in(params.message_types.clone()),
            );
        }
        if params.only_unresolved {
            query = query.filter(entity::beatmap_discussion::Column::Resolved.eq(false));
        }
        if !params.with_deleted {
            query = query.filter(entity::beatmap_discussion::Column::DeletedAt.is_null());
        }

        let paginator = query
            .order_by(entity::beatmap_discussion::Column::Id, params.sort.order())
            .paginate(self.db, params.limit);

        let total = paginator.num_items().await?;
        let discussions = paginator.fetch_page(params.page - 1).await?;

        Ok((discussions, total))
    }

    /// Gets discussions by id, keyed by id.
    ///
    /// Soft-deleted discussions are only included when `with_trashed` is set.
    pub async fn find_by_ids(
        &self,
        ids: &[i32],
        with_trashed: bool,
    ) -> Result<HashMap<i32, entity::beatmap_discussion::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut query = entity::prelude::BeatmapDiscussion::find()
            .filter(entity::beatmap_discussion::Column::Id.is_in(ids.to_vec()));
        if !with_trashed {
            query = query.filter(entity::beatmap_discussion::Column::DeletedAt.is_null());
        }

        Ok(query
            .all(self.db)
            .await?
            .into_iter()
            .map(|discussion| (discussion.id, discussion))
            .collect())
    }
}
