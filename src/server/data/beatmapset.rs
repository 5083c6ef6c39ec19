use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct BeatmapsetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BeatmapsetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets beatmapsets by id, keyed by id.
    ///
    /// Soft-deleted beatmapsets are only included when `with_trashed` is set.
    pub async fn find_by_ids(
        &self,
        ids: &[i32],
        with_trashed: bool,
    ) -> Result<HashMap<i32, entity::beatmapset::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut query = entity::prelude::Beatmapset::find()
            .filter(entity::beatmapset::Column::Id.is_in(ids.to_vec()));
        if !with_trashed {
            query = query.filter(entity::beatmapset::Column::DeletedAt.is_null());
        }

        Ok(query
            .all(self.db)
            .await?
            .into_iter()
            .map(|beatmapset| (beatmapset.id, beatmapset))
            .collect())
    }

    /// `approved` state of every non-deleted beatmapset owned by a user.
    pub async fn states_owned_by(&self, user_id: i32) -> Result<Vec<i16>, DbErr> {
        entity::prelude::Beatmapset::find()
            .select_only()
            .column(entity::beatmapset::Column::Approved)
            .filter(entity::beatmapset::Column::UserId.eq(user_id))
            .filter(entity::beatmapset::Column::DeletedAt.is_null())
            .into_tuple::<i16>()
            .all(self.db)
            .await
    }
}

pub struct BeatmapRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BeatmapRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets non-deleted beatmaps by id, keyed by id.
    pub async fn find_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, entity::beatmap::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Beatmap::find()
            .filter(entity::beatmap::Column::Id.is_in(ids.to_vec()))
            .filter(entity::beatmap::Column::DeletedAt.is_null())
            .all(self.db)
            .await?
            .into_iter()
            .map(|beatmap| (beatmap.id, beatmap))
            .collect())
    }
}
