use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::food::{Food, FoodChanges, NewFood};

/// Access to the food collection.
///
/// Every mutating call persists exactly one change, or none when the id does
/// not resolve.
#[async_trait]
pub trait FoodStore: Send + Sync {
    async fn insert(&self, food: NewFood) -> anyhow::Result<Food>;

    /// All entries in store order. No sort is promised.
    async fn find_all(&self) -> anyhow::Result<Vec<Food>>;

    /// Returns the entry as it is after the update.
    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        changes: FoodChanges,
    ) -> anyhow::Result<Option<Food>>;

    /// Returns the entry as it was before removal.
    async fn find_by_id_and_delete(&self, id: Uuid) -> anyhow::Result<Option<Food>>;

    async fn ping(&self) -> anyhow::Result<()>;
}

pub struct PgFoodStore {
    pool: PgPool,
}

impl PgFoodStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodStore for PgFoodStore {
    async fn insert(&self, food: NewFood) -> anyhow::Result<Food> {
        let food = sqlx::query_as::<_, Food>(
            "INSERT INTO foods (id, food_name, days_since_i_ate)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&food.food_name)
        .bind(food.days_since_i_ate)
        .fetch_one(&self.pool)
        .await?;
        Ok(food)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Food>> {
        // v7 ids sort by creation time
        let foods = sqlx::query_as::<_, Food>("SELECT * FROM foods ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(foods)
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        changes: FoodChanges,
    ) -> anyhow::Result<Option<Food>> {
        let food = sqlx::query_as::<_, Food>(
            "UPDATE foods
             SET food_name = COALESCE($1, food_name),
                 days_since_i_ate = COALESCE($2, days_since_i_ate),
                 updated_at = NOW()
             WHERE id = $3
             RETURNING *",
        )
        .bind(&changes.food_name)
        .bind(changes.days_since_i_ate)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(food)
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> anyhow::Result<Option<Food>> {
        let food = sqlx::query_as::<_, Food>("DELETE FROM foods WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(food)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
