//! User factory for creating test users, their groups and username changes.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("peppy")
///     .groups(&["gmt"])
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    user_type: i16,
    user_warnings: i16,
    playmode: String,
    kudosu_total: i32,
    kudosu_available: i32,
    groups: Vec<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"User {id}"` where id is auto-incremented
    /// - active, unrestricted, `osu` playmode, no kudosu, no groups
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("User {}", id),
            user_type: 0,
            user_warnings: 0,
            playmode: "osu".to_string(),
            kudosu_total: 0,
            kudosu_available: 0,
            groups: Vec::new(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Marks the user as restricted.
    pub fn restricted(mut self, restricted: bool) -> Self {
        self.user_warnings = if restricted { 1 } else { 0 };
        self
    }

    /// Marks the account as inactive.
    pub fn inactive(mut self, inactive: bool) -> Self {
        self.user_type = if inactive { 1 } else { 0 };
        self
    }

    pub fn playmode(mut self, playmode: impl Into<String>) -> Self {
        self.playmode = playmode.into();
        self
    }

    pub fn kudosu(mut self, total: i32, available: i32) -> Self {
        self.kudosu_total = total;
        self.kudosu_available = available;
        self
    }

    /// Sets the group identifiers (`gmt`, `nat`, `bng`, `bot`, ...) the user belongs to.
    pub fn groups(mut self, groups: &[&str]) -> Self {
        self.groups = groups.iter().map(|g| g.to_string()).collect();
        self
    }

    /// Builds and inserts the user and its group memberships.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username_clean: ActiveValue::Set(self.username.to_lowercase()),
            username: ActiveValue::Set(self.username),
            user_type: ActiveValue::Set(self.user_type),
            user_warnings: ActiveValue::Set(self.user_warnings),
            playmode: ActiveValue::Set(self.playmode),
            country_acronym: ActiveValue::Set("AU".to_string()),
            kudosu_total: ActiveValue::Set(self.kudosu_total),
            kudosu_available: ActiveValue::Set(self.kudosu_available),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for group in self.groups {
            entity::user_group::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                group_identifier: ActiveValue::Set(group),
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user belonging to a single group.
///
/// # Example
///
/// ```rust,ignore
/// let moderator = create_user_in_group(&db, "nat").await?;
/// ```
pub async fn create_user_in_group(
    db: &DatabaseConnection,
    group: &str,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).groups(&[group]).build().await
}

/// Records a username change from `username_last` to the user's current name.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - User who changed their name
/// - `username_last` - The previous username
/// - `change_type` - `support`, `paid`, `admin`, `revert` or `inactive`
/// - `timestamp` - When the change happened
pub async fn create_username_change(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    username_last: &str,
    change_type: &str,
    timestamp: DateTime<Utc>,
) -> Result<entity::username_change_history::Model, DbErr> {
    entity::username_change_history::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        username: ActiveValue::Set(user.username.clone()),
        username_last: ActiveValue::Set(username_last.to_string()),
        change_type: ActiveValue::Set(change_type.to_string()),
        timestamp: ActiveValue::Set(timestamp),
        ..Default::default()
    }
    .insert(db)
    .await
}
