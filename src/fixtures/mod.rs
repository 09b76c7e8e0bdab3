// ABOUTME: Static read-only datasets that populate every page in place of live services

use crate::models::{DietPlan, Exercise, FormFeedback, Meal, Profile, ProgressPoint, WorkoutPlan};
use serde::{Deserialize, Serialize};

/// The full mock dataset, built once at startup and injected into `AppState`.
/// Pages only ever borrow from it; nothing here mutates after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    pub diet_plan: DietPlan,
    pub workout_plan: WorkoutPlan,
    /// Daily calorie intake for the current week, dashboard chart.
    pub weekly_calories: Vec<ProgressPoint>,
    /// Bodyweight in kg per week, progress page chart.
    pub weight_trend: Vec<ProgressPoint>,
    pub profile: Profile,
    pub water_goal_litres: f64,
    /// Assistant message seeding the coach transcript at mount.
    pub coach_greeting: String,
    /// Canned reply substituted for real inference, appended after the fixed delay.
    pub coach_reply: String,
    /// The three feedback entries shown when a form check completes, fixed order.
    pub form_feedback: Vec<FormFeedback>,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            diet_plan: diet_plan(),
            workout_plan: workout_plan(),
            weekly_calories: weekly_calories(),
            weight_trend: weight_trend(),
            profile: profile(),
            water_goal_litres: 2.5,
            coach_greeting: "Hey! I'm your AI fitness coach. Ask me anything about training, \
                             nutrition, or recovery and I'll help you hit your goals."
                .to_string(),
            coach_reply: "I'm a mock AI coach for now. Once a real AI provider is wired up, \
                          I'll give personalized fitness and nutrition advice based on your data!"
                .to_string(),
            form_feedback: form_feedback(),
        }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

fn diet_plan() -> DietPlan {
    DietPlan {
        calories: 2450,
        protein: 180,
        carbs: 260,
        fats: 75,
        meals: vec![
            Meal {
                name: "Breakfast".to_string(),
                time: "7:30 AM".to_string(),
                items: vec![
                    "Oatmeal".to_string(),
                    "Greek yogurt".to_string(),
                    "Blueberries".to_string(),
                ],
                calories: 550,
                protein: 35,
                carbs: 70,
                fats: 14,
            },
            Meal {
                name: "Lunch".to_string(),
                time: "12:30 PM".to_string(),
                items: vec![
                    "Grilled chicken".to_string(),
                    "Brown rice".to_string(),
                    "Broccoli".to_string(),
                ],
                calories: 720,
                protein: 55,
                carbs: 80,
                fats: 18,
            },
            Meal {
                name: "Snack".to_string(),
                time: "4:00 PM".to_string(),
                items: vec!["Protein shake".to_string(), "Banana".to_string()],
                calories: 380,
                protein: 40,
                carbs: 45,
                fats: 6,
            },
            Meal {
                name: "Dinner".to_string(),
                time: "7:30 PM".to_string(),
                items: vec![
                    "Salmon".to_string(),
                    "Sweet potato".to_string(),
                    "Mixed greens".to_string(),
                ],
                calories: 800,
                protein: 50,
                carbs: 65,
                fats: 37,
            },
        ],
    }
}

fn workout_plan() -> WorkoutPlan {
    WorkoutPlan {
        name: "Upper Body Strength".to_string(),
        duration: "45 min".to_string(),
        exercises: vec![
            Exercise {
                name: "Bench Press".to_string(),
                muscle_group: "Chest".to_string(),
                sets: 4,
                reps: "8".to_string(),
                rest: "90s".to_string(),
            },
            Exercise {
                name: "Bent-Over Row".to_string(),
                muscle_group: "Back".to_string(),
                sets: 4,
                reps: "10".to_string(),
                rest: "90s".to_string(),
            },
            Exercise {
                name: "Overhead Press".to_string(),
                muscle_group: "Shoulders".to_string(),
                sets: 3,
                reps: "10".to_string(),
                rest: "60s".to_string(),
            },
            Exercise {
                name: "Pull-Up".to_string(),
                muscle_group: "Back".to_string(),
                sets: 3,
                reps: "8".to_string(),
                rest: "90s".to_string(),
            },
            Exercise {
                name: "Plank".to_string(),
                muscle_group: "Core".to_string(),
                sets: 3,
                reps: "60s hold".to_string(),
                rest: "45s".to_string(),
            },
        ],
    }
}

fn weekly_calories() -> Vec<ProgressPoint> {
    vec![
        ProgressPoint::new("Mon", 2380),
        ProgressPoint::new("Tue", 2450),
        ProgressPoint::new("Wed", 2290),
        ProgressPoint::new("Thu", 2510),
        ProgressPoint::new("Fri", 2440),
        ProgressPoint::new("Sat", 2620),
        ProgressPoint::new("Sun", 2350),
    ]
}

fn weight_trend() -> Vec<ProgressPoint> {
    vec![
        ProgressPoint::new("W1", 84),
        ProgressPoint::new("W2", 83),
        ProgressPoint::new("W3", 83),
        ProgressPoint::new("W4", 82),
        ProgressPoint::new("W5", 82),
        ProgressPoint::new("W6", 81),
        ProgressPoint::new("W7", 81),
        ProgressPoint::new("W8", 80),
    ]
}

fn profile() -> Profile {
    Profile {
        name: "Alex Carter".to_string(),
        age: 29,
        height_cm: 178,
        weight_kg: 80.4,
        goal: "Lean bulk to 84 kg".to_string(),
    }
}

fn form_feedback() -> Vec<FormFeedback> {
    vec![
        FormFeedback::good(
            "Good Back Position",
            "Your spine stays properly aligned through the movement",
        ),
        FormFeedback::warning("Knee Tracking", "Try to keep knees aligned over toes"),
        FormFeedback::good("Depth Achieved", "Excellent depth on your squat"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedbackSeverity;

    #[test]
    fn test_form_feedback_is_two_good_one_warning_in_fixed_order() {
        let fixtures = Fixtures::new();

        let severities: Vec<FeedbackSeverity> =
            fixtures.form_feedback.iter().map(|f| f.severity).collect();
        assert_eq!(
            severities,
            vec![
                FeedbackSeverity::Good,
                FeedbackSeverity::Warning,
                FeedbackSeverity::Good
            ]
        );

        let titles: Vec<&str> =
            fixtures.form_feedback.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Good Back Position", "Knee Tracking", "Depth Achieved"]
        );
    }

    #[test]
    fn test_diet_plan_meals_are_ordered_and_nonempty() {
        let fixtures = Fixtures::new();

        assert!(!fixtures.diet_plan.meals.is_empty());
        assert_eq!(fixtures.diet_plan.meals[0].name, "Breakfast");
        assert_eq!(fixtures.diet_plan.meals.last().unwrap().name, "Dinner");
    }

    #[test]
    fn test_weekly_series_covers_seven_days() {
        let fixtures = Fixtures::new();
        assert_eq!(fixtures.weekly_calories.len(), 7);
    }

    #[test]
    fn test_fixtures_serialize_to_json() {
        let fixtures = Fixtures::new();
        let json = serde_json::to_string(&fixtures).unwrap();
        assert!(json.contains("\"calories\":2450"));
    }
}
