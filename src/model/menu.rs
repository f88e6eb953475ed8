//! Menu domain models: lenient JSON meal payloads, the published day, and the
//! assembled public day view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::{
    comment::{Comment, CommentDto},
    vote::{DailyRankingEntry, Meal, ProteinKey, VoteCounts},
};

/// One meal's stored payload: a mapping from field names to free-text
/// descriptions.
///
/// Payloads are opaque at write time; unknown fields are preserved verbatim
/// and simply ignored by readers that don't recognize them. A field that is
/// absent or empty means "not served".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealContent(serde_json::Map<String, Value>);

impl MealContent {
    /// Parses a stored meal column, treating anything unusable as an empty
    /// meal.
    ///
    /// `None`, blank text, invalid JSON and non-object JSON all yield an
    /// empty payload so one corrupt day cannot break the weekly view.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Self(map),
            Ok(_) | Err(_) => {
                if !raw.trim().is_empty() {
                    tracing::warn!(raw, "Discarding unparseable meal payload");
                }
                Self::default()
            }
        }
    }

    /// Looks up the dish text stored under a protein slot.
    ///
    /// # Returns
    /// - `Some(&str)` - Non-empty dish text for the slot
    /// - `None` - Slot absent, not a string, or empty
    pub fn dish(&self, key: ProteinKey) -> Option<&str> {
        self.0
            .get(key.as_str())
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// The payload as a JSON value for API responses.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// The set of three meals published for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDay {
    pub date: NaiveDate,
    pub breakfast: MealContent,
    pub lunch: MealContent,
    pub dinner: MealContent,
}

impl MenuDay {
    /// Converts an entity model to a menu domain model.
    ///
    /// Conversion is infallible: corrupt meal columns degrade to empty meals
    /// rather than propagating an error.
    pub fn from_entity(entity: entity::menu_day::Model) -> Self {
        Self {
            date: entity.date,
            breakfast: MealContent::parse_lenient(entity.breakfast.as_deref()),
            lunch: MealContent::parse_lenient(entity.lunch.as_deref()),
            dinner: MealContent::parse_lenient(entity.dinner.as_deref()),
        }
    }

    /// The payload of one votable meal.
    pub fn meal(&self, meal: Meal) -> &MealContent {
        match meal {
            Meal::Lunch => &self.lunch,
            Meal::Dinner => &self.dinner,
        }
    }

    /// Converts the menu to its API representation.
    ///
    /// # Returns
    /// - `MenuDto` - The three meal payloads as JSON values
    pub fn into_dto(self) -> MenuDto {
        MenuDto {
            breakfast: self.breakfast.to_value(),
            lunch: self.lunch.to_value(),
            dinner: self.dinner.to_value(),
        }
    }
}

/// Parameters for publishing or replacing one day's menus.
#[derive(Debug, Clone)]
pub struct UpsertMenuParam {
    pub date: NaiveDate,
    pub breakfast: Value,
    pub lunch: Value,
    pub dinner: Value,
}

impl From<UpsertMenuDto> for UpsertMenuParam {
    fn from(dto: UpsertMenuDto) -> Self {
        Self {
            date: dto.date,
            breakfast: dto.breakfast,
            lunch: dto.lunch,
            dinner: dto.dinner,
        }
    }
}

/// Fully assembled public view of one day: menu, visible comments, vote
/// tallies and the daily ranking.
#[derive(Debug, Clone)]
pub struct DayView {
    pub date: NaiveDate,
    pub menu: MenuDay,
    pub comments: Vec<Comment>,
    pub vote_counts: VoteCounts,
    pub daily_ranking: Vec<DailyRankingEntry>,
}

impl DayView {
    /// Converts the day view to its API representation.
    pub fn into_dto(self) -> DayDto {
        DayDto {
            date: self.date,
            menu: self.menu.into_dto(),
            comments: self
                .comments
                .into_iter()
                .map(Comment::into_public_dto)
                .collect(),
            vote_counts: self.vote_counts,
            daily_ranking: self.daily_ranking,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpsertMenuDto {
    pub date: NaiveDate,
    /// Field-name to description mapping, stored verbatim.
    #[schema(value_type = Object)]
    #[serde(default)]
    pub breakfast: Value,
    #[schema(value_type = Object)]
    #[serde(default)]
    pub lunch: Value,
    #[schema(value_type = Object)]
    #[serde(default)]
    pub dinner: Value,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MenuDto {
    #[schema(value_type = Object)]
    pub breakfast: Value,
    #[schema(value_type = Object)]
    pub lunch: Value,
    #[schema(value_type = Object)]
    pub dinner: Value,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DayDto {
    pub date: NaiveDate,
    pub menu: MenuDto,
    pub comments: Vec<CommentDto>,
    pub vote_counts: VoteCounts,
    pub daily_ranking: Vec<DailyRankingEntry>,
}
