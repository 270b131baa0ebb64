use wasm_bindgen::prelude::*;

mod config;
mod frame;
mod game;
mod line_body;
mod monitor;
mod session;
mod stroke;

use game::EmojiGoal;

inkroll_web::export_game!(EmojiGoal, "emoji-goal", vectors);
