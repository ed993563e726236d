use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use buntubuild_core::errors::{DatabaseError, Error};
use buntubuild_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use buntubuild_core::Result;

use super::model::{GoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }

    fn next_position(conn: &mut SqliteConnection, owner: &str) -> Result<i32> {
        let max: Option<i32> = goals::table
            .filter(goals::user_id.eq(owner))
            .select(diesel::dsl::max(goals::position))
            .first(conn)
            .map_err(StorageError::from)?;
        Ok(max.map_or(0, |p| p + 1))
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = goals::table
            .filter(goals::user_id.eq(user_id))
            .order(goals::position.asc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Goal::from).collect())
    }

    fn count_goals(&self, user_id: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        goals::table
            .filter(goals::user_id.eq(user_id))
            .count()
            .get_result(&mut conn)
            .map_err(|e| StorageError::from(e).into())
    }

    async fn insert_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let position = Self::next_position(conn, &owner)?;
                let new_goal_db = NewGoalDB {
                    id: new_goal.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    user_id: owner,
                    name: new_goal.name,
                    amount: new_goal.amount.to_string(),
                    position,
                };
                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update_goal(&self, user_id: &str, update: GoalUpdate) -> Result<Goal> {
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let updated = diesel::update(
                    goals::table
                        .find(&update.id)
                        .filter(goals::user_id.eq(&owner)),
                )
                .set((
                    goals::name.eq(&update.name),
                    goals::amount.eq(update.amount.to_string()),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Goal {} not found",
                        update.id
                    ))));
                }
                let result_db = goals::table
                    .find(&update.id)
                    .first::<GoalDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    /// The last-goal guard runs inside the write transaction: a delete that
    /// would empty the ledger errors and rolls back, so concurrent removals
    /// cannot slip past a stale count.
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        let owner = user_id.to_string();
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let count: i64 = goals::table
                    .filter(goals::user_id.eq(&owner))
                    .count()
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                let deleted = diesel::delete(
                    goals::table
                        .find(&goal_id)
                        .filter(goals::user_id.eq(&owner)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted > 0 && count - deleted as i64 == 0 {
                    return Err(Error::ConstraintViolation(
                        "A savings plan must keep at least one goal".to_string(),
                    ));
                }
                Ok(deleted)
            })
            .await
    }

    async fn replace_goals(&self, user_id: &str, template: Vec<NewGoal>) -> Result<Vec<Goal>> {
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<Goal>> {
                diesel::delete(goals::table.filter(goals::user_id.eq(&owner)))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let rows: Vec<NewGoalDB> = template
                    .into_iter()
                    .enumerate()
                    .map(|(i, g)| NewGoalDB {
                        id: g.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                        user_id: owner.clone(),
                        name: g.name,
                        amount: g.amount.to_string(),
                        position: i as i32,
                    })
                    .collect();
                diesel::insert_into(goals::table)
                    .values(&rows)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let result_db = goals::table
                    .filter(goals::user_id.eq(&owner))
                    .order(goals::position.asc())
                    .load::<GoalDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db.into_iter().map(Goal::from).collect())
            })
            .await
    }
}
