use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use weekly_budget_rs::budget::{
    generate_initial_budget_on, redistribute_calories, MACRO_ROUNDING_TOLERANCE,
    MIN_DAILY_CALORIES,
};
use weekly_budget_rs::models::{DailyGoal, DayBudget, WeekBudget};
use weekly_budget_rs::RedistributeError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Seven identical future days at 2000 kcal.
fn uniform_week() -> WeekBudget {
    generate_initial_budget_on(
        &DailyGoal::new(2000, 150, 200, 67),
        date(2025, 3, 9),
        0,
        date(2025, 3, 1),
    )
}

fn total(days: &[DayBudget]) -> i64 {
    days.iter().map(|d| d.calories as i64).sum()
}

#[test]
fn test_increase_one_day_lowers_the_rest() {
    let days = uniform_week();
    let result = redistribute_calories(&days, 0, 2500, 120).unwrap();

    assert_eq!(result[0].calories, 2500);
    for day in &result[1..] {
        assert!(day.calories < 2000, "{} should drop below 2000", day.day_label);
    }
    assert!((total(&result) - 14000).abs() <= 1);
}

#[test]
fn test_locked_days_keep_calories() {
    let mut days = uniform_week();
    days[1].locked = true;
    days[2].locked = true;

    let result = redistribute_calories(&days, 0, 2500, 120).unwrap();

    assert_eq!(result[1].calories, 2000);
    assert_eq!(result[2].calories, 2000);
    assert_eq!(result[1], days[1]);
    assert_eq!(result[2], days[2]);
    // 500 kcal across the four unlocked days.
    assert!(result[3..].iter().all(|d| d.calories == 1875));
}

#[test]
fn test_past_days_keep_calories() {
    let days = generate_initial_budget_on(
        &DailyGoal::new(2000, 150, 200, 67),
        date(2025, 3, 9),
        0,
        date(2025, 3, 12),
    );

    let result = redistribute_calories(&days, 5, 1700, 120).unwrap();

    assert_eq!(&result[..3], &days[..3]);
    assert_eq!(result[5].calories, 1700);
    assert_eq!(total(&result), 14000);
}

#[test]
fn test_all_others_locked_is_infeasible() {
    let mut days = uniform_week();
    for day in days.iter_mut().skip(1) {
        day.locked = true;
    }

    assert_eq!(
        redistribute_calories(&days, 0, 2500, 120),
        Err(RedistributeError::NoAdjustableDays)
    );
}

#[test]
fn test_decrease_one_day_raises_the_rest() {
    let days = uniform_week();
    let result = redistribute_calories(&days, 6, 1400, 120).unwrap();

    assert_eq!(result[6].calories, 1400);
    assert!(result[..6].iter().all(|d| d.calories == 2100));
}

#[test]
fn test_proportional_to_current_share() {
    let mut days = uniform_week();
    days[1].calories = 3000;
    days[2].calories = 1000;
    days[3].calories = 2000;
    days[4].calories = 2000;
    days[5].calories = 2000;
    days[6].calories = 2000;

    // Others hold 12000; take 1200 from them (10% each).
    let result = redistribute_calories(&days, 0, 3200, 120).unwrap();

    assert_eq!(result[1].calories, 2700);
    assert_eq!(result[2].calories, 900);
    assert_eq!(result[3].calories, 1800);
}

#[test]
fn test_floor_pins_small_days_and_shifts_load() {
    let mut days = uniform_week();
    days[1].calories = 1000;
    days[2].calories = 1000;
    days[3].calories = 3000;
    days[4].calories = 3000;
    days[5].calories = 2000;
    days[6].calories = 2000;

    // Others hold 12000, must give up 3000. A straight 25% cut would put
    // days 1 and 2 at 750.
    let result = redistribute_calories(&days, 0, 5000, 120).unwrap();

    assert_eq!(result[1].calories, MIN_DAILY_CALORIES);
    assert_eq!(result[2].calories, MIN_DAILY_CALORIES);
    assert_eq!(total(&result), total(&days));
    assert!(result.iter().all(|d| d.calories >= MIN_DAILY_CALORIES));
}

#[test]
fn test_input_is_not_mutated() {
    let mut days = uniform_week();
    days[4].locked = true;
    let snapshot = days.clone();

    let _ = redistribute_calories(&days, 0, 3000, 120).unwrap();
    let _ = redistribute_calories(&days, 0, 20000, 120);

    assert_eq!(days, snapshot);
}

#[test]
fn test_recalculated_macros_are_consistent() {
    let days = uniform_week();
    let result = redistribute_calories(&days, 3, 2800, 120).unwrap();

    for day in &result {
        assert!(day.protein >= 120);
        assert!(
            day.macro_mismatch() <= MACRO_ROUNDING_TOLERANCE,
            "{}: {} kcal from macros vs {} target",
            day.day_label,
            day.macro_calories(),
            day.calories
        );
    }
}

#[test]
fn test_protein_floor_applied_to_changed_days() {
    let days = generate_initial_budget_on(
        &DailyGoal::new(2000, 90, 280, 67),
        date(2025, 3, 9),
        0,
        date(2025, 3, 1),
    );

    let result = redistribute_calories(&days, 0, 2300, 110).unwrap();
    assert!(result.iter().all(|d| d.protein == 110));
}

#[test]
fn test_high_protein_days_squeezed_to_floor_stay_consistent() {
    let days = uniform_week();
    // 150 g protein is 600 kcal; the usual 30% fat no longer fits 800 kcal.
    let result = redistribute_calories(&days, 0, 9200, 120).unwrap();

    for day in &result[1..] {
        assert_eq!(day.calories, MIN_DAILY_CALORIES);
        assert_eq!(day.protein, 150);
        assert!(
            day.macro_mismatch() <= MACRO_ROUNDING_TOLERANCE,
            "{}: P{} C{} F{} is {} kcal",
            day.day_label,
            day.protein,
            day.carbs,
            day.fat,
            day.macro_calories()
        );
    }
}

#[test]
fn test_protein_too_high_for_day_is_rejected() {
    let days = uniform_week();
    assert!(matches!(
        redistribute_calories(&days, 0, 9200, 200),
        Err(RedistributeError::MacrosDoNotFit { calories: 800, .. })
    ));
}

/// Random week; protein ranges high enough that some squeezed days cannot
/// hold it.
fn random_week(rng: &mut StdRng) -> WeekBudget {
    let mut days = uniform_week();
    for day in days.iter_mut() {
        let calories: u32 = rng.gen_range(1200..=3500);
        let protein: u32 = rng.gen_range(50..=250);
        let fat_pct: f64 = rng.gen_range(0.15..0.35);
        let fat = (calories as f64 * fat_pct / 9.0).round() as u32;
        let carbs = calories.saturating_sub(protein * 4 + fat * 9) / 4;

        day.calories = calories;
        day.protein = protein;
        day.fat = fat;
        day.carbs = carbs;
        day.locked = rng.gen_bool(0.25);
        day.is_past = rng.gen_bool(0.15);
    }
    days
}

#[test]
fn test_randomized_invariants() {
    weekly_budget_rs::logging::init_test();
    let mut rng = StdRng::seed_from_u64(7);
    let mut feasible = 0;
    let mut macro_rejections = 0;

    for _ in 0..2000 {
        let days = random_week(&mut rng);
        let snapshot = days.clone();
        let index = rng.gen_range(0..7);
        let new_calories: u32 = rng.gen_range(800..=6000);
        let protein_floor: u32 = rng.gen_range(40..=200);

        let outcome = redistribute_calories(&days, index, new_calories, protein_floor);
        assert_eq!(days, snapshot);

        let others_fixed = days
            .iter()
            .enumerate()
            .all(|(i, d)| i == index || !d.is_adjustable());
        if others_fixed && new_calories != days[index].calories && days[index].is_adjustable() {
            assert_eq!(outcome, Err(RedistributeError::NoAdjustableDays));
        }

        if let Err(RedistributeError::MacrosDoNotFit { index: i, calories }) = outcome {
            assert!(calories >= MIN_DAILY_CALORIES);
            assert!(i == index || days[i].is_adjustable());
            macro_rejections += 1;
            continue;
        }
        let Ok(result) = outcome else { continue };
        feasible += 1;

        assert!((total(&result) - total(&days)).abs() <= 1);
        assert_eq!(result[index].calories, new_calories);

        for (i, (before, after)) in days.iter().zip(result.iter()).enumerate() {
            if i != index && !before.is_adjustable() {
                assert_eq!(before, after);
            }
            if after.calories != before.calories {
                assert!(after.calories >= MIN_DAILY_CALORIES);
                assert!(after.protein >= protein_floor);
                assert!(
                    after.macro_mismatch() <= MACRO_ROUNDING_TOLERANCE,
                    "day {}: P{} C{} F{} is {} kcal vs {}",
                    i,
                    after.protein,
                    after.carbs,
                    after.fat,
                    after.macro_calories(),
                    after.calories
                );
            }
        }
    }

    assert!(feasible > 100, "only {} feasible edits", feasible);
    assert!(macro_rejections > 0, "no edit hit a protein-heavy day");
}
