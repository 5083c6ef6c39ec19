use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    event::{hidden_event_types, requested_event_types},
    search::SearchParams,
};

pub struct BeatmapsetEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BeatmapsetEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches beatmapset events and returns one page with the total match count.
    ///
    /// `min_date` and `max_date` are inclusive whole days in UTC. Moderation-only
    /// event types are removed for viewers without the matching privilege, even
    /// when requested explicitly.
    ///
    /// # Returns
    /// - `Ok((events, total))` - Requested page and the un-paged count
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        params: &SearchParams,
    ) -> Result<(Vec<entity::beatmapset_event::Model>, u64), DbErr> {
        let mut query = entity::prelude::BeatmapsetEvent::find();

        if let Some(user_id) = params.user {
            query = query.filter(entity::beatmapset_event::Column::UserId.eq(user_id));
        }
        if let Some(beatmapset_id) = params.beatmapset_id {
            query = query.filter(entity::beatmapset_event::Column::BeatmapsetId.eq(beatmapset_id));
        }

        let requested = requested_event_types(params);
        if !requested.is_empty() {
            query = query.filter(entity::beatmapset_event::Column::EventType.is_in(requested));
        }
        let hidden = hidden_event_types(params);
        if !hidden.is_empty() {
            query = query.filter(entity::beatmapset_event::Column::EventType.is_not_in(hidden));
        }

        if let Some(min_date) = params.min_date {
            query = query.filter(entity::beatmapset_event::Column::CreatedAt.gte(start_of(min_date)));
        }
        if let Some(day_after) = params.max_date.and_then(|date| date.succ_opt()) {
            query = query.filter(entity::beatmapset_event::Column::CreatedAt.lt(start_of(day_after)));
        }

        let paginator = query
            .order_by(entity::beatmapset_event::Column::Id, params.sort.order())
            .paginate(self.db, params.limit);

        let total = paginator.num_items().await?;
        let events = paginator.fetch_page(params.page - 1).await?;

        Ok((events, total))
    }
}

fn start_of(date: NaiveDate) -> chrono::DateTime<chrono::Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
