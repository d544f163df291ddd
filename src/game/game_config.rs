use super::*;

use std::time::Duration;

/// Parameters of a play session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// The number of in-game seconds before the session ends
    pub max_game_time: Option<f64>,
    pub play_area: Dimensions,
    pub ticks_per_second: f64,
    /// Seconds each frame sleeps for at minimum, even when running behind
    pub min_sleep: f64,
    /// Frames between waves of demo hostiles
    pub hostile_spawn_interval: Option<u64>,
}

impl Default for GameConfig {
    /// NOTE: the real defaults come from game_config_entries(), this is just a placeholder
    fn default() -> Self {
        Self {
            max_game_time: None,
            play_area: Dimensions::new(1.0, 1.0),
            ticks_per_second: 1.0,
            min_sleep: 0.0,
            hostile_spawn_interval: None,
        }
    }
}

impl GameConfig {
    /// Seconds per frame
    pub fn tick_duration(&self) -> f64 {
        1.0 / self.ticks_per_second
    }
}

fn positive(name: &str, value: f64, source: Option<&str>) -> Result<f64, Box<dyn Error>> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(format!(
            "{} ({}) must be positive",
            source.unwrap_or(name),
            value
        )
        .into())
    }
}

/// Checks that the metronome can sleep for this many seconds
fn as_duration(name: &str, secs: f64, source: Option<&str>) -> Result<f64, Box<dyn Error>> {
    match Duration::try_from_secs_f64(secs) {
        Ok(_) => Ok(secs),
        Err(e) => Err(format!("{} gives {}s per frame: {}", source.unwrap_or(name), secs, e).into()),
    }
}

/// Applied in order of returned vec (NOT in the order the user specifies the entry). All entries are always applied.
pub fn game_config_entries() -> Vec<Box<dyn ConfigEntry>> {
    vec![
        <dyn ConfigEntry>::new_float(
            "max_game_seconds",
            "seconds to run the game before exiting, or 0 to run until process is killed",
            60.0,
            |conf, time, source| {
                if time > 0.0 {
                    conf.game.max_game_time = Some(time);
                    Ok(())
                } else if time == 0.0 {
                    conf.game.max_game_time = None;
                    Ok(())
                } else {
                    Err(format!("{} should not be negative", source.unwrap_or("max_game_seconds")).into())
                }
            },
        ),
        <dyn ConfigEntry>::new_float(
            "play_width",
            "width of the play area",
            800.0,
            |conf, width, source| {
                conf.game.play_area.width = positive("play_width", width, source)?;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_float(
            "play_height",
            "height of the play area",
            600.0,
            |conf, height, source| {
                conf.game.play_area.height = positive("play_height", height, source)?;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_float(
            "ticks_per_second",
            "frames simulated per second",
            30.0,
            |conf, rate, source| {
                let rate = positive("ticks_per_second", rate, source)?;
                as_duration("ticks_per_second", 1.0 / rate, source)?;
                conf.game.ticks_per_second = rate;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_float(
            "min_sleep",
            "seconds to sleep each frame even if the game is running behind",
            0.0,
            |conf, min_sleep, source| {
                if min_sleep >= 0.0 {
                    conf.game.min_sleep = as_duration("min_sleep", min_sleep, source)?;
                    Ok(())
                } else {
                    Err(format!("{} should not be negative", source.unwrap_or("min_sleep")).into())
                }
            },
        ),
        <dyn ConfigEntry>::new_int(
            "hostile_spawn_interval",
            "frames between waves of hostiles, or 0 to spawn none",
            45,
            |conf, frames, source| {
                if frames > 0 {
                    conf.game.hostile_spawn_interval = Some(frames as u64);
                    Ok(())
                } else if frames == 0 {
                    conf.game.hostile_spawn_interval = None;
                    Ok(())
                } else {
                    Err(format!(
                        "{} should not be negative",
                        source.unwrap_or("hostile_spawn_interval")
                    )
                    .into())
                }
            },
        ),
    ]
}
