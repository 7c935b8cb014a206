//! Fixed-option selections offered by the activity details step.

use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Shared contract for enums rendered as a single-choice list.
pub trait Choice: Copy + Sized + 'static {
    /// Every option in display order.
    const ALL: &'static [Self];

    /// Human readable label, also used as the serialized value.
    fn label(self) -> &'static str;

    /// Resolves a label case-insensitively, ignoring surrounding whitespace.
    fn from_label(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(needle))
    }

    /// Labels for every option, in display order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.label()).collect()
    }
}

/// Raised when free text does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub input: String,
}

impl ParseChoiceError {
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

impl fmt::Display for ParseChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid {}", self.input.trim(), self.kind)
    }
}

impl Error for ParseChoiceError {}

/// Best-fit category describing an activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Adventure & Games")]
    AdventureAndGames,
    #[serde(rename = "Creative Expression")]
    CreativeExpression,
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
    #[serde(rename = "Learning & Development")]
    LearningAndDevelopment,
    #[serde(rename = "Sports and Fitness")]
    SportsAndFitness,
    Volunteering,
    /// Sentinel selection that requires a free-text override.
    Other,
}

impl Choice for Category {
    const ALL: &'static [Self] = &[
        Category::AdventureAndGames,
        Category::CreativeExpression,
        Category::FoodAndDrink,
        Category::LearningAndDevelopment,
        Category::SportsAndFitness,
        Category::Volunteering,
        Category::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Category::AdventureAndGames => "Adventure & Games",
            Category::CreativeExpression => "Creative Expression",
            Category::FoodAndDrink => "Food & Drink",
            Category::LearningAndDevelopment => "Learning & Development",
            Category::SportsAndFitness => "Sports and Fitness",
            Category::Volunteering => "Volunteering",
            Category::Other => "Other",
        }
    }
}

/// Where the activity happens physically (or not at all).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityType {
    Indoor,
    Outdoor,
    Virtual,
}

impl Choice for ActivityType {
    const ALL: &'static [Self] = &[
        ActivityType::Indoor,
        ActivityType::Outdoor,
        ActivityType::Virtual,
    ];

    fn label(self) -> &'static str {
        match self {
            ActivityType::Indoor => "Indoor",
            ActivityType::Outdoor => "Outdoor",
            ActivityType::Virtual => "Virtual",
        }
    }
}

/// Whose premises host the activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LocationType {
    #[serde(rename = "Provider Location")]
    Provider,
    #[serde(rename = "User Location")]
    User,
}

impl Choice for LocationType {
    const ALL: &'static [Self] = &[LocationType::Provider, LocationType::User];

    fn label(self) -> &'static str {
        match self {
            LocationType::Provider => "Provider Location",
            LocationType::User => "User Location",
        }
    }
}

macro_rules! choice_traits {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = ParseChoiceError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty>::from_label(s).ok_or_else(|| ParseChoiceError::new($kind, s))
                }
            }
        )*
    };
}

choice_traits!(
    Category => "category",
    ActivityType => "activity type",
    LocationType => "location type",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(
            "sports and fitness".parse::<Category>(),
            Ok(Category::SportsAndFitness)
        );
        assert_eq!(" Virtual ".parse::<ActivityType>(), Ok(ActivityType::Virtual));
        assert_eq!(
            "user location".parse::<LocationType>(),
            Ok(LocationType::User)
        );
    }

    #[test]
    fn unknown_label_reports_kind() {
        let err = "Knitting".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "`Knitting` is not a valid category");
    }

    #[test]
    fn categories_keep_display_order_with_other_last() {
        let labels = Category::labels();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels.first(), Some(&"Adventure & Games"));
        assert_eq!(labels.last(), Some(&"Other"));
    }

    #[test]
    fn serialized_value_matches_label() {
        let json = serde_json::to_string(&LocationType::Provider).unwrap();
        assert_eq!(json, "\"Provider Location\"");
        let parsed: Category = serde_json::from_str("\"Food & Drink\"").unwrap();
        assert_eq!(parsed, Category::FoodAndDrink);
    }
}
