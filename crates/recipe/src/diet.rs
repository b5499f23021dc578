use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Diet vocabulary a recipe is tagged with.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DietTag {
    Vegan,
    Vegetarian,
    Keto,
    Paleo,
    #[default]
    Anything,
}

/// What a caller asks for: one tag, or `anything`, which stands for a
/// configured list of tags rather than the `anything` tag itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DietSelection {
    Anything,
    Only(DietTag),
}

impl DietSelection {
    pub fn expand(&self, anything: &[DietTag]) -> Vec<DietTag> {
        match self {
            DietSelection::Anything => anything.to_vec(),
            DietSelection::Only(tag) => vec![*tag],
        }
    }
}

impl FromStr for DietSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "anything" {
            return Ok(DietSelection::Anything);
        }

        DietTag::from_str(&s)
            .map(DietSelection::Only)
            .map_err(|_| format!("unknown diet '{s}'"))
    }
}

impl TryFrom<String> for DietSelection {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DietSelection> for String {
    fn from(value: DietSelection) -> Self {
        match value {
            DietSelection::Anything => "anything".to_owned(),
            DietSelection::Only(tag) => tag.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anything_expands_to_configured_tags() {
        let selection: DietSelection = "anything".parse().unwrap();
        let tags = selection.expand(&[DietTag::Vegan, DietTag::Keto, DietTag::Paleo]);

        assert_eq!(tags, vec![DietTag::Vegan, DietTag::Keto, DietTag::Paleo]);
        assert!(!tags.contains(&DietTag::Anything));
    }

    #[test]
    fn test_single_tag_selection() {
        let selection: DietSelection = " Keto ".parse().unwrap();

        assert_eq!(selection, DietSelection::Only(DietTag::Keto));
        assert_eq!(selection.expand(&[DietTag::Vegan]), vec![DietTag::Keto]);
    }

    #[test]
    fn test_unknown_diet_is_rejected() {
        assert!("carnivore".parse::<DietSelection>().is_err());
        assert!(serde_json::from_str::<DietSelection>("\"carnivore\"").is_err());
    }

    #[test]
    fn test_tag_round_trips_as_snake_case() {
        assert_eq!(DietTag::Vegetarian.to_string(), "vegetarian");
        assert_eq!(
            serde_json::to_string(&DietSelection::Only(DietTag::Paleo)).unwrap(),
            "\"paleo\""
        );
    }
}
