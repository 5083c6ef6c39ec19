use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        modding::{ModdingAction, ModdingContext},
        privilege::Privileges,
        search::SearchParams,
    },
};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod modding_history;
mod user;

/// Builds the context the guard would hand to the service for `user_id`.
async fn context(
    db: &DatabaseConnection,
    user_id: i32,
    action: ModdingAction,
    privileges: Privileges,
    query: &[(&str, &str)],
) -> Result<ModdingContext, DbErr> {
    let user = UserRepository::new(db)
        .lookup_by_id(user_id, true)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("user {user_id}")))?;
    let pairs: Vec<(String, String)> = query
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Ok(ModdingContext {
        action,
        params: SearchParams::from_query(&pairs, user.id, &privileges),
        user,
        privileges,
    })
}

fn viewer(user_id: i32, is_moderator: bool) -> Privileges {
    Privileges {
        viewer_id: Some(user_id),
        is_moderator,
        is_kudosu_moderator: is_moderator,
    }
}
