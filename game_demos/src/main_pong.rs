//! Single player Pong: one paddle, one ball, three walls

use game_demos::{pong::PongGame, settings};
use macroquad::window::Conf;

fn window_conf() -> Conf {
    settings::window_conf(&settings::load_or_default(PongGame::TITLE))
}

#[macroquad::main(window_conf)]
async fn main() {
    game_demos::run(PongGame::TITLE, PongGame::new()).await;
}
