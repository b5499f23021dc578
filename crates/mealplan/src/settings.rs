use macroplan_recipe::DietTag;
use serde::Deserialize;

/// Tunables of the generation pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlannerSettings {
    /// Allowed absolute deviation, in kcal, between an event and its target.
    #[serde(default = "default_calorie_margin")]
    pub calorie_margin: f64,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Smallest candidate pool worth sampling from.
    #[serde(default = "default_min_candidates")]
    pub min_candidates: usize,

    /// Tags an `anything` request stands for.
    #[serde(default = "default_anything_diets")]
    pub anything_diets: Vec<DietTag>,
}

fn default_calorie_margin() -> f64 {
    330.0
}

fn default_max_attempts() -> u32 {
    7
}

fn default_min_candidates() -> usize {
    3
}

fn default_anything_diets() -> Vec<DietTag> {
    vec![DietTag::Vegan, DietTag::Keto, DietTag::Paleo]
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            calorie_margin: default_calorie_margin(),
            max_attempts: default_max_attempts(),
            min_candidates: default_min_candidates(),
            anything_diets: default_anything_diets(),
        }
    }
}

impl PlannerSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !self.calorie_margin.is_finite() || self.calorie_margin <= 0.0 {
            return Err("Planner calorie_margin must be a positive number".to_string());
        }

        if self.max_attempts == 0 {
            return Err("Planner max_attempts must be greater than 0".to_string());
        }

        if self.min_candidates == 0 {
            return Err("Planner min_candidates must be at least 1".to_string());
        }

        if self.anything_diets.is_empty() {
            return Err("Planner anything_diets cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PlannerSettings::default();

        assert_eq!(settings.calorie_margin, 330.0);
        assert_eq!(settings.max_attempts, 7);
        assert_eq!(settings.min_candidates, 3);
        assert!(!settings.anything_diets.contains(&DietTag::Anything));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = PlannerSettings {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        settings.max_attempts = 7;
        settings.calorie_margin = f64::NAN;
        assert!(settings.validate().is_err());

        settings.calorie_margin = 330.0;
        settings.anything_diets.clear();
        assert!(settings.validate().is_err());
    }
}
