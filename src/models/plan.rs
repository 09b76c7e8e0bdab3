// ABOUTME: Diet and workout plan models backing the dashboard page

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub calories: u32,
    /// Grams per day.
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub time: String,
    pub items: Vec<String>,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl Meal {
    /// One-line macro summary shown under each meal card.
    pub fn macro_summary(&self) -> String {
        format!(
            "{} cal  P: {}g  C: {}g  F: {}g",
            self.calories, self.protein, self.carbs, self.fats
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub name: String,
    pub duration: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub muscle_group: String,
    pub sets: u32,
    pub reps: String,
    pub rest: String,
}

impl Exercise {
    pub fn prescription(&self) -> String {
        format!("{} sets  {} reps  Rest: {}", self.sets, self.reps, self.rest)
    }
}
