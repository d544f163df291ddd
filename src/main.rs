#[macro_use]
extern crate log;
#[macro_use(new_key_type)]
extern crate slotmap;

mod demo;
mod game;
mod helpers;
mod registry;

use cgmath::*;
use std::{
    error::Error,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use game::*;
use helpers::*;
use registry::*;

fn run(config: MasterConfig) -> Result<(), Box<dyn Error>> {
    let quit = Arc::new(AtomicBool::new(false));
    {
        let quit = quit.clone();
        ctrlc::set_handler(move || quit.store(true, Ordering::SeqCst))?;
    }

    let mut game = demo::new_demo_game(&config.game);
    game.registry();
    info!("session started with {} entities", game.size());

    while !quit.load(Ordering::SeqCst) && game.tick() {
        if game.registry().player().is_none() {
            info!("player is out of lives");
            break;
        }
    }

    for hostile in game.entities_by_category(Some(&[Category::Hostiles])) {
        let position = hostile.entity.position();
        debug!("{:?} left at ({:.1}, {:.1})", hostile, position.x, position.y);
    }
    info!(
        "session over after {} frames ({:.1}s of game time), {} hostiles left",
        game.frames(),
        game.game_time(),
        game.registry().category_len(Category::Hostiles)
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match build_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    if config.happy_exit {
        return;
    }

    trace!("configuration: {:?}", config);
    if let Err(e) = run(config) {
        error!("{}", e);
        std::process::exit(1);
    }
}
