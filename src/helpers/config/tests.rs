use super::*;

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("raidfire")
        .chain(list.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn defaults() {
    let fs = MockFilesystem::new();
    let conf = build_config_with(&fs, &args(&[])).unwrap();
    assert!(!conf.happy_exit);
    assert_eq!(conf.game.max_game_time, Some(60.0));
    assert_eq!(conf.game.play_area, Dimensions::new(800.0, 600.0));
    assert_eq!(conf.game.ticks_per_second, 30.0);
    assert_eq!(conf.game.min_sleep, 0.0);
    assert_eq!(conf.game.hostile_spawn_interval, Some(45));
}

#[test]
fn can_config_play_area_in_toml() {
    let fs = MockFilesystem::new().add_file("raidfire.toml", "play_width = 1024\nplay_height = 768.0");
    let conf = build_config_with(&fs, &args(&[])).unwrap();
    assert_eq!(conf.game.play_area, Dimensions::new(1024.0, 768.0));
}

#[test]
fn zero_max_game_seconds_runs_forever() {
    let fs = MockFilesystem::new().add_file("raidfire.toml", "max_game_seconds = 0");
    let conf = build_config_with(&fs, &args(&[])).unwrap();
    assert_eq!(conf.game.max_game_time, None);
}

#[test]
fn zero_spawn_interval_disables_waves() {
    let fs = MockFilesystem::new();
    let conf = build_config_with(&fs, &args(&["--hostile-spawn-interval", "0"])).unwrap();
    assert_eq!(conf.game.hostile_spawn_interval, None);
}

#[test]
fn args_override_toml() {
    let fs = MockFilesystem::new().add_file("raidfire.toml", "ticks_per_second = 60");
    let conf = build_config_with(&fs, &args(&["--ticks-per-second", "20"])).unwrap();
    assert_eq!(conf.game.ticks_per_second, 20.0);
}

#[test]
fn help_flag_without_value() {
    let fs = MockFilesystem::new();
    let conf = build_config_with(&fs, &args(&["--help"])).unwrap();
    assert!(conf.happy_exit);
}

#[test]
fn negative_dimensions_are_rejected() {
    let fs = MockFilesystem::new();
    assert!(build_config_with(&fs, &args(&["--play-width", "-3"])).is_err());
}

#[test]
fn zero_tick_rate_is_rejected() {
    let fs = MockFilesystem::new().add_file("raidfire.toml", "ticks_per_second = 0");
    assert!(build_config_with(&fs, &args(&[])).is_err());
}

#[test]
fn unknown_toml_option_is_rejected() {
    let fs = MockFilesystem::new().add_file("raidfire.toml", "difficulty = 3");
    let err = build_config_with(&fs, &args(&[])).unwrap_err();
    assert!(err.to_string().contains("difficulty"));
}

#[test]
fn wrong_toml_type_is_rejected() {
    let fs = MockFilesystem::new().add_file("raidfire.toml", "play_width = \"wide\"");
    assert!(build_config_with(&fs, &args(&[])).is_err());
}

#[test]
fn unknown_arg_is_rejected() {
    let fs = MockFilesystem::new();
    assert!(build_config_with(&fs, &args(&["--fast"])).is_err());
}

#[test]
fn arg_with_multiple_values_is_rejected() {
    let fs = MockFilesystem::new();
    assert!(build_config_with(&fs, &args(&["--play-width", "3", "4"])).is_err());
}

#[test]
fn value_before_any_option_is_rejected() {
    let fs = MockFilesystem::new();
    assert!(build_config_with(&fs, &args(&["800"])).is_err());
}

#[test]
fn float_arg_needs_a_value() {
    let fs = MockFilesystem::new();
    assert!(build_config_with(&fs, &args(&["--min-sleep"])).is_err());
}

#[test]
fn tick_rate_too_slow_for_a_frame_duration_is_rejected() {
    let fs = MockFilesystem::new();
    let err = build_config_with(&fs, &args(&["--ticks-per-second", "1e-300"])).unwrap_err();
    assert!(err.to_string().contains("--ticks-per-second"));
}

#[test]
fn min_sleep_too_long_for_a_duration_is_rejected() {
    let fs = MockFilesystem::new().add_file("raidfire.toml", "min_sleep = 1e300");
    let err = build_config_with(&fs, &args(&[])).unwrap_err();
    assert!(err.to_string().contains("min_sleep"));
}

#[test]
fn very_fast_tick_rate_is_accepted() {
    let fs = MockFilesystem::new();
    let conf = build_config_with(&fs, &args(&["--ticks-per-second", "1e9"])).unwrap();
    assert_eq!(conf.game.ticks_per_second, 1e9);
}

#[test]
fn negative_min_sleep_arg_is_a_value() {
    let fs = MockFilesystem::new();
    let err = build_config_with(&fs, &args(&["--min-sleep", "-1"])).unwrap_err();
    assert!(err.to_string().contains("should not be negative"));
}

#[test]
fn toml_string_for_a_number_names_the_file() {
    let fs = MockFilesystem::new().add_file("raidfire.toml", "ticks_per_second = \"fast\"");
    let err = build_config_with(&fs, &args(&[])).unwrap_err();
    assert!(err.to_string().contains("ticks_per_second in raidfire.toml"));
}
