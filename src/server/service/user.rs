use sea_orm::DatabaseConnection;

use crate::server::{
    data::{beatmapset::BeatmapsetRepository, username_change::UsernameChangeRepository},
    error::AppError,
    model::user::{previous_usernames, BeatmapsetCounts, User, UserProfile},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the profile extras shown with a user's modding history.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - User with public previous usernames and beatmapset counts
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn profile(&self, user: User) -> Result<UserProfile, AppError> {
        let changes = UsernameChangeRepository::new(self.db)
            .visible_for_user(user.id)
            .await?;
        let states = BeatmapsetRepository::new(self.db)
            .states_owned_by(user.id)
            .await?;

        Ok(UserProfile {
            previous_usernames: previous_usernames(changes, &user.username),
            beatmapset_counts: BeatmapsetCounts::from_states(&states),
            user,
        })
    }
}
