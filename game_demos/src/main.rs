//! Side-scrolling space shooter: an animated ship over two parallax star fields

use game_demos::{settings, space_shooter::SpaceShooter};
use macroquad::window::Conf;

fn window_conf() -> Conf {
    settings::window_conf(&settings::load_or_default(SpaceShooter::TITLE))
}

#[macroquad::main(window_conf)]
async fn main() {
    game_demos::run(SpaceShooter::TITLE, SpaceShooter::new()).await;
}
