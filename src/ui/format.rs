//! Human-readable workout formatting.

use crate::model::{Workout, WorkoutDetails};

use super::table::{Align, Table};
use super::TrailogTheme;

/// Format a metric with one decimal place.
pub fn format_metric(value: f64) -> String {
    format!("{:.1}", value)
}

/// Build a listing table for `workouts`, in the order given.
pub fn workout_table(workouts: &[Workout], theme: &TrailogTheme) -> Table {
    let mut table = Table::new(&[
        "ID",
        "Workout",
        "Type",
        "Distance (km)",
        "Duration (min)",
        "Pace / Speed",
        "Cadence / Elev.",
    ])
    .align(3, Align::Right)
    .align(4, Align::Right)
    .align(5, Align::Right)
    .align(6, Align::Right);

    for workout in workouts {
        let kind = workout.kind();
        let (rate, metric) = rate_and_metric(workout.details());
        table.add_row([
            workout.id().to_string(),
            workout.label().to_string(),
            theme.kind_style(kind).apply_to(kind.as_str()).to_string(),
            format_metric(workout.distance()),
            format_metric(workout.duration()),
            rate,
            metric,
        ]);
    }

    table
}

/// Lines describing a single workout in full.
pub fn describe_workout(workout: &Workout) -> Vec<String> {
    let coords = workout.coordinates();
    let mut lines = vec![
        format!("id:          {}", workout.id()),
        format!("type:        {}", workout.kind()),
        format!(
            "date:        {}",
            workout.created_at().format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!(
            "location:    {:.5}, {:.5}",
            coords.latitude, coords.longitude
        ),
        format!("distance:    {} km", format_metric(workout.distance())),
        format!("duration:    {} min", format_metric(workout.duration())),
    ];

    match workout.details() {
        WorkoutDetails::Running { cadence, pace } => {
            lines.push(format!("cadence:     {} spm", format_metric(*cadence)));
            lines.push(format!("pace:        {} min/km", format_metric(*pace)));
        }
        WorkoutDetails::Cycling {
            elevation_gain,
            speed,
        } => {
            lines.push(format!("elevation:   {} m", format_metric(*elevation_gain)));
            lines.push(format!("speed:       {} km/h", format_metric(*speed)));
        }
    }

    lines
}

fn rate_and_metric(details: &WorkoutDetails) -> (String, String) {
    match details {
        WorkoutDetails::Running { cadence, pace } => (
            format!("{} min/km", format_metric(*pace)),
            format!("{} spm", format_metric(*cadence)),
        ),
        WorkoutDetails::Cycling {
            elevation_gain,
            speed,
        } => (
            format!("{} km/h", format_metric(*speed)),
            format!("{} m", format_metric(*elevation_gain)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinates, WorkoutId, WorkoutKind};
    use chrono::{TimeZone, Utc};

    fn running() -> Workout {
        Workout::create_at(
            WorkoutId::from("0000000001"),
            Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
            WorkoutKind::Running,
            Coordinates::new(51.5, -0.1).unwrap(),
            5.0,
            25.0,
            170.0,
        )
        .unwrap()
    }

    fn cycling() -> Workout {
        Workout::create_at(
            WorkoutId::from("0000000002"),
            Utc.with_ymd_and_hms(2024, 3, 6, 10, 0, 0).unwrap(),
            WorkoutKind::Cycling,
            Coordinates::new(51.5, -0.1).unwrap(),
            20.0,
            60.0,
            300.0,
        )
        .unwrap()
    }

    #[test]
    fn format_metric_rounds_to_one_decimal() {
        assert_eq!(format_metric(5.0), "5.0");
        assert_eq!(format_metric(4.26), "4.3");
    }

    #[test]
    fn table_lists_each_workout() {
        let table = workout_table(&[running(), cycling()], &TrailogTheme::plain());
        assert_eq!(table.row_count(), 2);

        let output = table.render();
        assert!(output.contains("Running on March 5"));
        assert!(output.contains("5.0 min/km"));
        assert!(output.contains("170.0 spm"));
        assert!(output.contains("Cycling on March 6"));
        assert!(output.contains("20.0 km/h"));
        assert!(output.contains("300.0 m"));
    }

    #[test]
    fn describe_running_shows_pace() {
        let lines = describe_workout(&running());
        assert!(lines.iter().any(|l| l.contains("0000000001")));
        assert!(lines.iter().any(|l| l.contains("5.0 min/km")));
        assert!(!lines.iter().any(|l| l.contains("km/h")));
    }

    #[test]
    fn describe_cycling_shows_speed() {
        let lines = describe_workout(&cycling());
        assert!(lines.iter().any(|l| l.contains("20.0 km/h")));
        assert!(lines.iter().any(|l| l.contains("300.0 m")));
    }
}
