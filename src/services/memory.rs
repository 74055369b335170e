use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    models::food::{Food, FoodChanges, NewFood},
    services::foods::FoodStore,
};

/// Process-local store. Entries are kept in insertion order.
#[derive(Default)]
pub struct MemoryFoodStore {
    foods: RwLock<Vec<Food>>,
}

impl MemoryFoodStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FoodStore for MemoryFoodStore {
    async fn insert(&self, food: NewFood) -> anyhow::Result<Food> {
        let now = Utc::now();
        let food = Food {
            id: Uuid::now_v7(),
            food_name: food.food_name,
            days_since_i_ate: food.days_since_i_ate,
            created_at: now,
            updated_at: now,
        };
        self.foods.write().await.push(food.clone());
        Ok(food)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Food>> {
        Ok(self.foods.read().await.clone())
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        changes: FoodChanges,
    ) -> anyhow::Result<Option<Food>> {
        let mut foods = self.foods.write().await;
        let Some(food) = foods.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };
        if let Some(name) = changes.food_name {
            food.food_name = name;
        }
        if let Some(days) = changes.days_since_i_ate {
            food.days_since_i_ate = days;
        }
        food.updated_at = Utc::now();
        Ok(Some(food.clone()))
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> anyhow::Result<Option<Food>> {
        let mut foods = self.foods.write().await;
        Ok(foods
            .iter()
            .position(|f| f.id == id)
            .map(|idx| foods.remove(idx)))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
