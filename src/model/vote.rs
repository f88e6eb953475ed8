//! Vote domain models: typed meal/slot/polarity enums, dense per-day vote
//! counts, and the daily ranking derived from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{internal::InternalError, AppError},
    model::menu::MenuDay,
};

/// A meal eligible for protein voting. Breakfast has no protein slots and is
/// deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Lunch,
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 2] = [Meal::Lunch, Meal::Dinner];

    /// The stored string form of the meal name.
    pub fn as_str(self) -> &'static str {
        match self {
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
        }
    }

    /// Parses a stored meal name back into the enum.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meal| meal.as_str() == value)
    }
}

/// One of the three fixed protein slots within a votable meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProteinKey {
    #[serde(rename = "protein_1")]
    Protein1,
    #[serde(rename = "protein_2")]
    Protein2,
    #[serde(rename = "vegetarian")]
    Vegetarian,
}

impl ProteinKey {
    pub const ALL: [ProteinKey; 3] = [
        ProteinKey::Protein1,
        ProteinKey::Protein2,
        ProteinKey::Vegetarian,
    ];

    /// The stored string form of the slot name, which doubles as the field
    /// name looked up inside a meal's JSON payload.
    pub fn as_str(self) -> &'static str {
        match self {
            ProteinKey::Protein1 => "protein_1",
            ProteinKey::Protein2 => "protein_2",
            ProteinKey::Vegetarian => "vegetarian",
        }
    }

    /// Parses a stored slot name back into the enum.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }
}

/// Vote polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Like,
    Dislike,
}

impl Polarity {
    /// The stored string form of the polarity.
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Like => "like",
            Polarity::Dislike => "dislike",
        }
    }

    /// Parses a stored polarity back into the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "like" => Some(Polarity::Like),
            "dislike" => Some(Polarity::Dislike),
            _ => None,
        }
    }
}

/// An active vote with all stored strings parsed into typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinVote {
    pub id: i32,
    pub date: NaiveDate,
    pub meal: Meal,
    pub protein_key: ProteinKey,
    pub voter_id: String,
    pub polarity: Polarity,
}

impl ProteinVote {
    /// Converts an entity model to a vote domain model at the repository
    /// boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(ProteinVote)` - The converted vote
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - A stored meal,
    ///   slot or polarity string is not one the application writes
    pub fn from_entity(entity: entity::protein_vote::Model) -> Result<Self, AppError> {
        let meal = Meal::parse(&entity.meal).ok_or(InternalError::UnknownStoredValue {
            column: "meal",
            value: entity.meal.clone(),
        })?;
        let protein_key =
            ProteinKey::parse(&entity.protein_key).ok_or(InternalError::UnknownStoredValue {
                column: "protein_key",
                value: entity.protein_key.clone(),
            })?;
        let polarity =
            Polarity::parse(&entity.polarity).ok_or(InternalError::UnknownStoredValue {
                column: "polarity",
                value: entity.polarity.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            date: entity.date,
            meal,
            protein_key,
            voter_id: entity.voter_id,
            polarity,
        })
    }
}

/// Like/dislike tally for a single protein slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlotCounts {
    pub likes: u64,
    pub dislikes: u64,
}

/// Tallies for the three protein slots of one meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealCounts {
    pub protein_1: SlotCounts,
    pub protein_2: SlotCounts,
    pub vegetarian: SlotCounts,
}

impl MealCounts {
    fn slot_mut(&mut self, key: ProteinKey) -> &mut SlotCounts {
        match key {
            ProteinKey::Protein1 => &mut self.protein_1,
            ProteinKey::Protein2 => &mut self.protein_2,
            ProteinKey::Vegetarian => &mut self.vegetarian,
        }
    }

    fn slot(&self, key: ProteinKey) -> &SlotCounts {
        match key {
            ProteinKey::Protein1 => &self.protein_1,
            ProteinKey::Protein2 => &self.protein_2,
            ProteinKey::Vegetarian => &self.vegetarian,
        }
    }
}

/// Dense vote tallies for one date.
///
/// Every one of the six (meal x protein-slot) cells is always present and
/// defaults to zero, so callers never have to handle a missing key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VoteCounts {
    pub lunch: MealCounts,
    pub dinner: MealCounts,
}

impl VoteCounts {
    pub fn slot(&self, meal: Meal, key: ProteinKey) -> &SlotCounts {
        match meal {
            Meal::Lunch => self.lunch.slot(key),
            Meal::Dinner => self.dinner.slot(key),
        }
    }

    pub fn slot_mut(&mut self, meal: Meal, key: ProteinKey) -> &mut SlotCounts {
        match meal {
            Meal::Lunch => self.lunch.slot_mut(key),
            Meal::Dinner => self.dinner.slot_mut(key),
        }
    }

    /// Tallies one vote into the matching cell.
    pub fn record(&mut self, meal: Meal, key: ProteinKey, polarity: Polarity) {
        let slot = self.slot_mut(meal, key);
        match polarity {
            Polarity::Like => slot.likes += 1,
            Polarity::Dislike => slot.dislikes += 1,
        }
    }

    /// Computes the daily ranking over these counts.
    ///
    /// Returns every (meal, slot) cell whose like count equals the maximum
    /// non-zero like count across all six cells, in (lunch, dinner) x
    /// (protein_1, protein_2, vegetarian) order. Ties are all included; the
    /// result is empty when no slot has any like.
    pub fn daily_ranking(&self) -> Vec<RankedSlot> {
        let mut ranking: Vec<RankedSlot> = Vec::new();
        let mut max_likes = 0;

        for meal in Meal::ALL {
            for key in ProteinKey::ALL {
                let likes = self.slot(meal, key).likes;
                if likes == 0 {
                    continue;
                }
                if likes > max_likes {
                    max_likes = likes;
                    ranking.clear();
                }
                if likes == max_likes {
                    ranking.push(RankedSlot { meal, key, likes });
                }
            }
        }

        ranking
    }
}

/// One (meal, slot) cell holding the day's maximum like count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedSlot {
    pub meal: Meal,
    pub key: ProteinKey,
    pub likes: u64,
}

/// Daily ranking entry decorated with the dish name from the day's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyRankingEntry {
    pub meal: Meal,
    pub key: ProteinKey,
    pub likes: u64,
    /// Dish text resolved from the menu, or `"(<slot key>)"` when the menu or
    /// slot text is unavailable.
    pub name: String,
}

impl DailyRankingEntry {
    /// Decorates ranked slots with dish names from the day's menu.
    ///
    /// A missing menu or empty slot text falls back to the parenthesized slot
    /// key so the ranking stays renderable.
    pub fn resolve(ranked: Vec<RankedSlot>, menu: Option<&MenuDay>) -> Vec<DailyRankingEntry> {
        ranked
            .into_iter()
            .map(|slot| {
                let name = menu
                    .and_then(|menu| menu.meal(slot.meal).dish(slot.key))
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("({})", slot.key.as_str()));

                DailyRankingEntry {
                    meal: slot.meal,
                    key: slot.key,
                    likes: slot.likes,
                    name,
                }
            })
            .collect()
    }
}

/// State transition applied by a vote toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    /// No vote existed for the (date, meal, voter) triple; one was inserted.
    Created,
    /// An identical vote existed and was deleted (retraction).
    Removed,
    /// A differing vote existed and was rewritten to the new protein/polarity.
    Switched,
}

impl VoteAction {
    /// Human-readable confirmation for the vote response.
    pub fn message(self) -> &'static str {
        match self {
            VoteAction::Created => "Vote recorded.",
            VoteAction::Removed => "Vote removed.",
            VoteAction::Switched => "Vote changed.",
        }
    }
}

/// Parameters for a vote toggle.
#[derive(Debug, Clone)]
pub struct ToggleVoteParam {
    pub date: NaiveDate,
    pub meal: Meal,
    pub protein_key: ProteinKey,
    pub polarity: Polarity,
    pub voter_id: String,
}

impl From<VoteRequestDto> for ToggleVoteParam {
    fn from(dto: VoteRequestDto) -> Self {
        Self {
            date: dto.date,
            meal: dto.meal,
            protein_key: dto.protein_key,
            polarity: dto.polarity,
            voter_id: dto.voter_id,
        }
    }
}

/// One entry of the weekly top-5, aggregated by resolved dish name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyRankingEntry {
    pub name: String,
    pub total_likes: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VoteRequestDto {
    pub date: NaiveDate,
    pub meal: Meal,
    pub protein_key: ProteinKey,
    pub polarity: Polarity,
    pub voter_id: String,
}

/// The voter's vote for the targeted meal after the toggle, if any remains.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActiveVoteDto {
    pub meal: Meal,
    pub protein_key: ProteinKey,
    pub polarity: Polarity,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VoteResponseDto {
    pub message: String,
    pub counts: VoteCounts,
    pub daily_ranking: Vec<DailyRankingEntry>,
    pub active_vote: Option<ActiveVoteDto>,
}
