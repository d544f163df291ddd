//! A small set of concrete entities and game rules, enough for the binary to run a headless session

use super::*;

mod bolt;
mod drone;
mod fighter;
mod hits;
mod waves;
mod wreck;

pub use bolt::Bolt;
pub use drone::{Drone, DRONE_RADIUS};
pub use fighter::{Fighter, FIGHTER_RADIUS};
pub use hits::resolve_hits;
pub use waves::{spawn_wave, WAVE_SIZE};
pub use wreck::Wreck;

/// A session with a fighter for the player, drone waves (if enabled) and hit resolution
pub fn new_demo_game(config: &GameConfig) -> Game {
    let area = config.play_area;
    let mut game = Game::new(
        config,
        Box::new(FixedDimensions::new(area.width, area.height)),
        Box::new(TraceCanvas::default()),
        Box::new(|position: Point2<f64>| -> Box<dyn PlayerEntity> {
            Box::new(Fighter::new(position))
        }),
    );
    if let Some(interval) = config.hostile_spawn_interval {
        game.on_tick(move |registry, frame| {
            if frame % interval == 0 {
                spawn_wave(registry, area, frame);
            }
        });
    }
    game.on_tick(|registry, _| {
        resolve_hits(registry).or_log_warn("failed to resolve hits");
    });
    game
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(hostile_spawn_interval: Option<u64>) -> GameConfig {
        GameConfig {
            max_game_time: None,
            play_area: Dimensions::new(800.0, 600.0),
            ticks_per_second: 30.0,
            min_sleep: 0.0,
            hostile_spawn_interval,
        }
    }

    #[test]
    fn first_frame_spawns_a_wave() {
        let mut game = new_demo_game(&config(Some(10)));
        game.step();
        assert_eq!(game.registry().category_len(Category::Hostiles), WAVE_SIZE);
    }

    #[test]
    fn waves_follow_the_interval() {
        let mut game = new_demo_game(&config(Some(10)));
        for _ in 0..10 {
            game.step();
        }
        assert_eq!(game.registry().category_len(Category::Hostiles), WAVE_SIZE);
        game.step();
        assert_eq!(game.registry().category_len(Category::Hostiles), WAVE_SIZE * 2);
    }

    #[test]
    fn no_waves_when_disabled() {
        let mut game = new_demo_game(&config(None));
        for _ in 0..20 {
            game.step();
        }
        assert_eq!(game.registry().category_len(Category::Hostiles), 0);
        assert!(game.registry().category_len(Category::PlayerArmaments) > 0);
    }

    #[test]
    fn long_session_keeps_count_consistent() {
        let mut game = new_demo_game(&config(Some(15)));
        for _ in 0..600 {
            game.step();
        }
        let registry = game.registry();
        let total: usize = Category::ALL.iter().map(|c| registry.category_len(*c)).sum();
        assert_eq!(registry.size(), total);
        assert!(registry.category_len(Category::Player) <= 1);
    }
}
