use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Change types shown publicly. Reverts and inactive-name releases are hidden.
pub const VISIBLE_CHANGE_TYPES: &[&str] = &["support", "paid", "admin"];

pub struct UsernameChangeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsernameChangeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Most recent visible change away from `username`.
    ///
    /// Used to follow links that still carry a user's old name.
    pub async fn latest_visible_from(
        &self,
        username: &str,
    ) -> Result<Option<entity::username_change_history::Model>, DbErr> {
        entity::prelude::UsernameChangeHistory::find()
            .filter(entity::username_change_history::Column::UsernameLast.eq(username))
            .filter(
                entity::username_change_history::Column::ChangeType
                    .is_in(VISIBLE_CHANGE_TYPES.iter().copied()),
            )
            .order_by_desc(entity::username_change_history::Column::ChangeId)
            .one(self.db)
            .await
    }

    /// Visible changes of a user, oldest first.
    pub async fn visible_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::username_change_history::Model>, DbErr> {
        entity::prelude::UsernameChangeHistory::find()
            .filter(entity::username_change_history::Column::UserId.eq(user_id))
            .filter(
                entity::username_change_history::Column::ChangeType
                    .is_in(VISIBLE_CHANGE_TYPES.iter().copied()),
            )
            .order_by_asc(entity::username_change_history::Column::Timestamp)
            .order_by_asc(entity::username_change_history::Column::ChangeId)
            .all(self.db)
            .await
    }
}
