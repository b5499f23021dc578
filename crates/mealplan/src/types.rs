use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Dishes served at every meal event.
pub const MEALS_PER_EVENT: usize = 2;

/// Eating occasion a pair of dishes is served at.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum MealLabel {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealLabel {
    /// Lower-cased label used as the stored key.
    pub fn key(&self) -> String {
        self.as_ref().to_lowercase()
    }
}

/// Number of meal events in the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MealCount {
    One,
    Two,
    Three,
}

impl MealCount {
    pub fn labels(&self) -> &'static [MealLabel] {
        match self {
            MealCount::One => &[MealLabel::Dinner],
            MealCount::Two => &[MealLabel::Breakfast, MealLabel::Lunch],
            MealCount::Three => &[MealLabel::Breakfast, MealLabel::Lunch, MealLabel::Dinner],
        }
    }

    pub fn events(&self) -> usize {
        self.labels().len()
    }

    pub fn dishes(&self) -> usize {
        self.events() * MEALS_PER_EVENT
    }
}

impl TryFrom<u8> for MealCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MealCount::One),
            2 => Ok(MealCount::Two),
            3 => Ok(MealCount::Three),
            other => Err(format!("meal count must be 1, 2 or 3, got {other}")),
        }
    }
}

impl From<MealCount> for u8 {
    fn from(value: MealCount) -> Self {
        value.events() as u8
    }
}
