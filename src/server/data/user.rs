//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading users and their group
//! memberships. Users are always returned with their groups attached, converted to
//! the `User` domain model at this boundary.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Select,
};

use crate::server::{model::user::User, util::parse::parse_id};

/// Repository providing read access to users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by id regardless of account state.
    ///
    /// # Arguments
    /// - `id` - User id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found, with groups
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut groups = self.groups_for(&[id]).await?;

        Ok(Some(User::from_entity(
            entity,
            groups.remove(&id).unwrap_or_default(),
        )))
    }

    /// Finds a user from a route parameter holding an id or a username.
    ///
    /// All-digit values are tried as an id first and then as a username. Usernames
    /// match either the display name or the lower-cased clean name, treating spaces
    /// and underscores as interchangeable. An exact display name match wins over
    /// the variants, which otherwise resolve to the oldest account.
    ///
    /// # Arguments
    /// - `value` - Raw id or username
    /// - `find_all` - Also match inactive and restricted users
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Matching user, with groups
    /// - `Ok(None)` - Empty value or no match
    /// - `Err(DbErr)` - Database error during query
    pub async fn lookup(&self, value: &str, find_all: bool) -> Result<Option<User>, DbErr> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }

        if value.bytes().all(|b| b.is_ascii_digit()) {
            if let Some(id) = parse_id(value) {
                if let Some(user) = self.lookup_by_id(id, find_all).await? {
                    return Ok(Some(user));
                }
            }
        }

        let exact = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(value));
        if let Some(entity) = only_visible(exact, find_all).one(self.db).await? {
            return self.with_groups(Some(entity)).await;
        }

        let mut variants = vec![
            value.to_string(),
            value.replace(' ', "_"),
            value.replace('_', " "),
        ];
        variants.sort();
        variants.dedup();
        let clean_variants: Vec<String> = variants.iter().map(|v| v.to_lowercase()).collect();

        let query = entity::prelude::User::find().filter(
            Condition::any()
                .add(entity::user::Column::Username.is_in(variants))
                .add(entity::user::Column::UsernameClean.is_in(clean_variants)),
        );
        let entity = only_visible(query, find_all)
            .order_by_asc(entity::user::Column::Id)
            .one(self.db)
            .await?;

        self.with_groups(entity).await
    }

    /// Finds a user by id, limited to active unrestricted users unless `find_all`.
    pub async fn lookup_by_id(&self, id: i32, find_all: bool) -> Result<Option<User>, DbErr> {
        let query = entity::prelude::User::find_by_id(id);
        let entity = only_visible(query, find_all).one(self.db).await?;

        self.with_groups(entity).await
    }

    /// Gets users by id, keyed by id.
    ///
    /// Missing ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, User>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        let mut groups = self.groups_for(ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let user_groups = groups.remove(&entity.id).unwrap_or_default();
                (entity.id, User::from_entity(entity, user_groups))
            })
            .collect())
    }

    /// Gets group identifiers for each of the given users.
    pub async fn groups_for(&self, ids: &[i32]) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let memberships = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::UserId.is_in(ids.to_vec()))
            .order_by_asc(entity::user_group::Column::GroupIdentifier)
            .all(self.db)
            .await?;

        let mut groups: HashMap<i32, Vec<String>> = HashMap::new();
        for membership in memberships {
            groups
                .entry(membership.user_id)
                .or_default()
                .push(membership.group_identifier);
        }

        Ok(groups)
    }

    async fn with_groups(&self, entity: Option<entity::user::Model>) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity else {
            return Ok(None);
        };

        let mut groups = self.groups_for(&[entity.id]).await?;
        let user_groups = groups.remove(&entity.id).unwrap_or_default();

        Ok(Some(User::from_entity(entity, user_groups)))
    }
}

/// Limits a query to active, unrestricted users unless every user should match.
fn only_visible(query: Select<entity::user::Entity>, find_all: bool) -> Select<entity::user::Entity> {
    if find_all {
        return query;
    }

    query
        .filter(entity::user::Column::UserType.eq(0))
        .filter(entity::user::Column::UserWarnings.eq(0))
}
