use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

use crate::{Candidate, MEALS_PER_EVENT, MealCount, MealLabel, ScaledMeal, scale_to_target};

/// One eating occasion and the two dishes served at it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealEvent {
    pub label: MealLabel,
    pub meals: [ScaledMeal; MEALS_PER_EVENT],
}

impl MealEvent {
    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(|meal| meal.scaled_calories).sum()
    }

    pub fn is_within(&self, target: f64, margin: f64) -> bool {
        (self.total_calories() - target).abs() <= margin
    }
}

/// Outcome of the sampling loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Assembly {
    Accepted { events: Vec<MealEvent>, attempts: u32 },
    Exhausted { attempts: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assembler {
    pub calorie_margin: f64,
    pub max_attempts: u32,
}

impl Assembler {
    /// Shuffles the pool, pairs the first picks into events in label order
    /// and scales every dish towards half the per-event target. Stops at the
    /// first draw where each event lands within the calorie margin.
    pub fn assemble<R: Rng + ?Sized>(
        &self,
        candidates: &[Candidate],
        meal_count: MealCount,
        target_per_meal: f64,
        rng: &mut R,
    ) -> Assembly {
        let needed = meal_count.dishes();
        let dish_target = target_per_meal / MEALS_PER_EVENT as f64;
        let mut pool = candidates.to_vec();

        for attempt in 1..=self.max_attempts {
            pool.shuffle(rng);

            if pool.len() < needed {
                tracing::debug!(attempt, pool = pool.len(), needed, "not enough picks");
                continue;
            }

            let events = meal_count
                .labels()
                .iter()
                .zip(pool[..needed].chunks_exact(MEALS_PER_EVENT))
                .map(|(label, pair)| MealEvent {
                    label: *label,
                    meals: [
                        scale_to_target(&pair[0], dish_target),
                        scale_to_target(&pair[1], dish_target),
                    ],
                })
                .collect::<Vec<_>>();

            if events
                .iter()
                .all(|event| event.is_within(target_per_meal, self.calorie_margin))
            {
                tracing::debug!(attempt, "meal events accepted");

                return Assembly::Accepted {
                    events,
                    attempts: attempt,
                };
            }

            tracing::debug!(
                attempt,
                totals = ?events.iter().map(MealEvent::total_calories).collect::<Vec<_>>(),
                "meal events outside calorie margin"
            );
        }

        Assembly::Exhausted {
            attempts: self.max_attempts,
        }
    }
}
