use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub food_name: String,
    pub days_since_i_ate: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFood {
    pub food_name: String,
    pub days_since_i_ate: i64,
}

/// A validated partial update; at least one field is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodChanges {
    pub food_name: Option<String>,
    pub days_since_i_ate: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertFoodRequest {
    pub food_name: Option<String>,
    pub days_since_i_ate: Option<i64>,
}

impl InsertFoodRequest {
    pub fn validate(self) -> Result<NewFood, AppError> {
        match (self.food_name, self.days_since_i_ate) {
            (Some(food_name), Some(days_since_i_ate)) if !food_name.is_empty() => Ok(NewFood {
                food_name,
                days_since_i_ate,
            }),
            _ => Err(AppError::Validation(
                "foodName and daysSinceIAte are required",
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodRequest {
    /// Only read by `PUT /update`; the path-addressed route ignores it.
    pub id: Option<String>,
    pub new_food_name: Option<String>,
    pub days_since_i_ate: Option<i64>,
}

impl UpdateFoodRequest {
    pub fn into_changes(self) -> Result<FoodChanges, AppError> {
        let changes = FoodChanges {
            food_name: self.new_food_name.filter(|name| !name.is_empty()),
            days_since_i_ate: self.days_since_i_ate,
        };
        if changes.food_name.is_none() && changes.days_since_i_ate.is_none() {
            return Err(AppError::Validation(
                "Provide newFoodName or daysSinceIAte to update",
            ));
        }
        Ok(changes)
    }
}
