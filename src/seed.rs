//! Fixture data
//!
//! Static seed arrays standing in for a real backend. Seeded meals carry
//! their cached totals as-is; day totals always sum cached values.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, Weekday};

use crate::models::{
    Exercise, Food, MacroTotals, Meal, MealFoodEntry, MealType, NutritionPlan, Portion, Routine,
    RoutineExercise, ScheduledWorkout, WorkoutStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn time(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).expect("valid fixture time")
}

fn portions(entries: &[(&str, f64, &str)]) -> BTreeMap<String, Portion> {
    entries
        .iter()
        .map(|(key, multiplier, name)| (key.to_string(), Portion::new(*multiplier, *name)))
        .collect()
}

/// Food catalog fixtures (macro values per 100 g)
pub fn seed_foods() -> Vec<Food> {
    vec![
        Food {
            id: 1,
            name: "Chicken Breast".to_string(),
            category: "Proteins".to_string(),
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
            fiber: 0.0,
            sugar: 0.0,
            portions: portions(&[
                ("100g", 1.0, "100 grams"),
                ("150g", 1.5, "150 grams (large portion)"),
                ("80g", 0.8, "80 grams (small portion)"),
            ]),
        },
        Food {
            id: 2,
            name: "Brown Rice".to_string(),
            category: "Carbohydrates".to_string(),
            calories: 111.0,
            protein: 2.6,
            carbs: 22.0,
            fat: 0.9,
            fiber: 1.8,
            sugar: 0.4,
            portions: portions(&[
                ("100g", 1.0, "100 grams"),
                ("80g", 0.8, "80 grams (1/2 cup)"),
                ("150g", 1.5, "150 grams (3/4 cup)"),
            ]),
        },
        Food {
            id: 3,
            name: "Avocado".to_string(),
            category: "Healthy Fats".to_string(),
            calories: 160.0,
            protein: 2.0,
            carbs: 9.0,
            fat: 15.0,
            fiber: 7.0,
            sugar: 0.7,
            portions: portions(&[
                ("100g", 1.0, "100 grams"),
                ("50g", 0.5, "1/2 medium avocado"),
                ("25g", 0.25, "1/4 medium avocado"),
            ]),
        },
        Food {
            id: 4,
            name: "Banana".to_string(),
            category: "Fruits".to_string(),
            calories: 89.0,
            protein: 1.1,
            carbs: 23.0,
            fat: 0.3,
            fiber: 2.6,
            sugar: 12.0,
            portions: portions(&[
                ("100g", 1.0, "100 grams"),
                ("120g", 1.2, "1 medium banana"),
                ("80g", 0.8, "1 small banana"),
            ]),
        },
        Food {
            id: 5,
            name: "Oats".to_string(),
            category: "Carbohydrates".to_string(),
            calories: 389.0,
            protein: 17.0,
            carbs: 66.0,
            fat: 7.0,
            fiber: 11.0,
            sugar: 1.0,
            portions: portions(&[
                ("40g", 0.4, "40g (standard portion)"),
                ("50g", 0.5, "50g (large portion)"),
                ("30g", 0.3, "30g (small portion)"),
            ]),
        },
        Food {
            id: 6,
            name: "Salmon".to_string(),
            category: "Proteins".to_string(),
            calories: 208.0,
            protein: 25.0,
            carbs: 0.0,
            fat: 12.0,
            fiber: 0.0,
            sugar: 0.0,
            portions: portions(&[
                ("100g", 1.0, "100 grams"),
                ("150g", 1.5, "150 grams (large fillet)"),
                ("120g", 1.2, "120 grams (medium fillet)"),
            ]),
        },
        Food {
            id: 7,
            name: "Broccoli".to_string(),
            category: "Vegetables".to_string(),
            calories: 34.0,
            protein: 2.8,
            carbs: 7.0,
            fat: 0.4,
            fiber: 2.6,
            sugar: 1.5,
            portions: portions(&[
                ("100g", 1.0, "100 grams"),
                ("150g", 1.5, "150 grams (1 cup)"),
                ("80g", 0.8, "80 grams (3/4 cup)"),
            ]),
        },
        Food {
            id: 8,
            name: "Almonds".to_string(),
            category: "Healthy Fats".to_string(),
            calories: 579.0,
            protein: 21.0,
            carbs: 22.0,
            fat: 50.0,
            fiber: 12.0,
            sugar: 4.0,
            portions: portions(&[
                ("30g", 0.3, "30g (small handful)"),
                ("40g", 0.4, "40g (large handful)"),
                ("20g", 0.2, "20g (1 tablespoon)"),
            ]),
        },
    ]
}

/// Logged meal fixtures
///
/// Each entry snapshots its food from the catalog fixtures. Cached totals
/// are the fixture values, not recomputed.
pub fn seed_meals() -> Vec<Meal> {
    let foods = seed_foods();
    let food = |id: i64| {
        foods
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .expect("fixture food id")
    };

    vec![
        Meal {
            id: 1,
            date: date(2025, 10, 1),
            meal_type: MealType::Breakfast,
            entries: vec![
                MealFoodEntry::new(food(5), "40g", 1.0),
                MealFoodEntry::new(food(4), "120g", 1.0),
            ],
            notes: "Post-workout breakfast".to_string(),
            totals: MacroTotals::new(262.4, 8.12, 54.6, 3.16),
        },
        Meal {
            id: 2,
            date: date(2025, 10, 1),
            meal_type: MealType::Lunch,
            entries: vec![
                MealFoodEntry::new(food(1), "150g", 1.0),
                MealFoodEntry::new(food(2), "100g", 1.0),
                MealFoodEntry::new(food(7), "150g", 1.0),
            ],
            notes: "Complete balanced lunch".to_string(),
            totals: MacroTotals::new(408.5, 50.7, 32.5, 6.0),
        },
    ]
}

/// Nutrition plan fixtures
pub fn seed_plans() -> Vec<NutritionPlan> {
    let distribution = |values: [(MealType, f64); 5]| values.into_iter().collect::<BTreeMap<_, _>>();

    vec![
        NutritionPlan {
            id: 1,
            name: "Cutting Plan".to_string(),
            objective: "Fat loss".to_string(),
            targets: MacroTotals::new(1800.0, 140.0, 180.0, 60.0),
            duration: "8 weeks".to_string(),
            description: "Hypocaloric plan for muscle definition while keeping lean mass"
                .to_string(),
            calorie_distribution: distribution([
                (MealType::Breakfast, 25.0),
                (MealType::MidMorning, 10.0),
                (MealType::Lunch, 35.0),
                (MealType::Snack, 10.0),
                (MealType::Dinner, 20.0),
            ]),
            recommended_foods: vec![1, 2, 6, 7, 8],
            foods_to_avoid: vec![
                "Processed food".to_string(),
                "Refined sugar".to_string(),
                "Fried food".to_string(),
            ],
        },
        NutritionPlan {
            id: 2,
            name: "Bulking Plan".to_string(),
            objective: "Muscle gain".to_string(),
            targets: MacroTotals::new(2500.0, 180.0, 300.0, 80.0),
            duration: "12 weeks".to_string(),
            description: "Hypercaloric plan to maximize muscle gain".to_string(),
            calorie_distribution: distribution([
                (MealType::Breakfast, 20.0),
                (MealType::MidMorning, 15.0),
                (MealType::Lunch, 30.0),
                (MealType::Snack, 15.0),
                (MealType::Dinner, 20.0),
            ]),
            recommended_foods: vec![1, 2, 4, 5, 6, 8],
            foods_to_avoid: vec!["Junk food".to_string(), "Excess alcohol".to_string()],
        },
    ]
}

/// Exercise catalog fixtures
pub fn seed_exercises() -> Vec<Exercise> {
    let exercise = |id: i64, name: &str, muscle_group: &str, description: &str| Exercise {
        id,
        name: name.to_string(),
        muscle_group: muscle_group.to_string(),
        description: description.to_string(),
    };

    vec![
        exercise(101, "Biceps Curl", "Biceps", "Standing dumbbell curl to strengthen the biceps"),
        exercise(102, "Triceps Pushdown", "Triceps", "Straight-bar cable pushdown to define the triceps"),
        exercise(103, "Hammer Curl", "Biceps", "Dumbbell hammer curl working biceps and forearms"),
        exercise(104, "Bench Press", "Chest", "Basic barbell press for chest development"),
        exercise(105, "Push-ups", "Chest", "Bodyweight exercise for chest and arms"),
        exercise(106, "Pull-ups", "Back", "Pulling exercise for the upper back"),
        exercise(107, "Squats", "Legs", "Compound exercise for quads and glutes"),
        exercise(108, "Overhead Press", "Shoulders", "Barbell press for shoulders and core"),
    ]
}

fn prescription(
    exercise_id: i64,
    name: &str,
    muscle_group: &str,
    description: &str,
    sets: u32,
    reps: u32,
    weight_kg: f64,
) -> RoutineExercise {
    RoutineExercise {
        exercise_id,
        name: name.to_string(),
        muscle_group: muscle_group.to_string(),
        description: description.to_string(),
        sets,
        reps,
        weight_kg,
    }
}

/// Routine fixtures
pub fn seed_routines() -> Vec<Routine> {
    vec![
        Routine {
            id: 1,
            title: "Biceps and Triceps".to_string(),
            days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            exercises: vec![
                prescription(
                    101,
                    "Biceps Curl",
                    "Biceps",
                    "Standing dumbbell curl to strengthen the biceps",
                    3,
                    12,
                    6.0,
                ),
                prescription(
                    103,
                    "Hammer Curl",
                    "Biceps",
                    "Dumbbell hammer curl working biceps and forearms",
                    3,
                    12,
                    8.0,
                ),
                prescription(
                    102,
                    "Triceps Pushdown",
                    "Triceps",
                    "Straight-bar cable pushdown to define the triceps",
                    4,
                    10,
                    12.0,
                ),
            ],
        },
        Routine {
            id: 2,
            title: "Chest and Back".to_string(),
            days: vec![Weekday::Tue, Weekday::Thu, Weekday::Sat],
            exercises: vec![
                prescription(
                    104,
                    "Bench Press",
                    "Chest",
                    "Basic barbell press for chest development",
                    4,
                    8,
                    40.0,
                ),
                prescription(
                    105,
                    "Push-ups",
                    "Chest",
                    "Bodyweight exercise for chest and arms",
                    3,
                    15,
                    0.0,
                ),
                prescription(
                    106,
                    "Pull-ups",
                    "Back",
                    "Pulling exercise for the upper back",
                    3,
                    8,
                    0.0,
                ),
            ],
        },
    ]
}

/// Scheduled workout fixtures
///
/// Workout 4 snapshots a legs routine that is no longer in the registry;
/// the embedded copy keeps it renderable.
pub fn seed_scheduled_workouts() -> Vec<ScheduledWorkout> {
    let routines = seed_routines();
    let routine = |id: i64| {
        routines
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .expect("fixture routine id")
    };

    let legs_routine = Routine {
        id: 3,
        title: "Full Legs".to_string(),
        days: vec![],
        exercises: vec![
            prescription(107, "Squats", "Legs", "Compound exercise for quads and glutes", 4, 12, 20.0),
            prescription(109, "Deadlift", "Legs", "Hip hinge with barbell", 3, 10, 30.0),
            prescription(110, "Leg Extension", "Legs", "Machine quad isolation", 3, 15, 15.0),
        ],
    };

    vec![
        ScheduledWorkout {
            id: 1,
            date: date(2025, 10, 1),
            time: time(8, 0),
            routine_id: 1,
            routine: routine(1),
            status: WorkoutStatus::Scheduled,
            notes: "Train at the main gym".to_string(),
            completed_at: None,
        },
        ScheduledWorkout {
            id: 2,
            date: date(2025, 10, 2),
            time: time(18, 30),
            routine_id: 2,
            routine: routine(2),
            status: WorkoutStatus::Completed,
            notes: "Excellent session".to_string(),
            completed_at: None,
        },
        ScheduledWorkout {
            id: 3,
            date: date(2025, 10, 3),
            time: time(7, 30),
            routine_id: 1,
            routine: routine(1),
            status: WorkoutStatus::Scheduled,
            notes: String::new(),
            completed_at: None,
        },
        ScheduledWorkout {
            id: 4,
            date: date(2025, 10, 3),
            time: time(19, 0),
            routine_id: 3,
            routine: legs_routine,
            status: WorkoutStatus::Scheduled,
            notes: "Intense leg session".to_string(),
            completed_at: None,
        },
        ScheduledWorkout {
            id: 5,
            date: date(2025, 10, 4),
            time: time(9, 0),
            routine_id: 2,
            routine: routine(2),
            status: WorkoutStatus::Scheduled,
            notes: "Morning session".to_string(),
            completed_at: None,
        },
    ]
}
