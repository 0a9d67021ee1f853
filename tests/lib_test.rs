//! Library integration tests.

use trailog::{Coordinates, TrailogError, WorkoutKind};

#[test]
fn error_types_are_public() {
    let err = TrailogError::NotFound {
        id: "1234567890".into(),
    };
    assert!(err.to_string().contains("1234567890"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> trailog::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn model_types_are_public() {
    use trailog::{Workout, WorkoutDetails};

    let here = Coordinates::new(-33.92, 18.42).unwrap();
    let run = Workout::create_running(here, 5.2, 24.0, 178.0).unwrap();

    assert_eq!(run.kind(), WorkoutKind::Running);
    assert!(matches!(run.details(), WorkoutDetails::Running { .. }));
    assert!(run.label().starts_with("Running on "));
}

#[test]
fn kind_parses_from_user_input() {
    assert_eq!("Cycling".parse::<WorkoutKind>().unwrap(), WorkoutKind::Cycling);
    assert!(matches!(
        "swimming".parse::<WorkoutKind>(),
        Err(TrailogError::UnknownKind { .. })
    ));
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use trailog::cli::{Cli, Commands};

    let cli = Cli::parse_from(["trailog", "show", "1234567890", "--json"]);

    if let Commands::Show(args) = cli.command {
        assert_eq!(args.id, "1234567890");
        assert!(args.json);
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn store_works_with_boxed_storage() {
    use trailog::{KeyValueStorage, MemoryStorage, WorkoutStore};

    let storage: Box<dyn KeyValueStorage> = Box::new(MemoryStorage::new());
    let mut store = WorkoutStore::new(storage);
    let here = Coordinates::new(0.0, 0.0).unwrap();

    store
        .create(WorkoutKind::Cycling, here, 12.0, 30.0, 80.0)
        .unwrap();

    assert_eq!(store.len(), 1);
    assert!(store.storage().get_item("workouts").unwrap().is_some());
}
