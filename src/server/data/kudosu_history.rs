use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct KudosuHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KudosuHistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Kudosu changes received by a user, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Receiving user
    /// - `limit` - Maximum number of rows
    /// - `offset` - Rows to skip
    pub async fn received_by_user(
        &self,
        user_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::kudosu_history::Model>, DbErr> {
        entity::prelude::KudosuHistory::find()
            .filter(entity::kudosu_history::Column::ReceiverId.eq(user_id))
            .order_by_desc(entity::kudosu_history::Column::ExchangeId)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }
}
