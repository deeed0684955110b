//! Scene tasks. Each is an `async fn` driven by the scheduler and talking to
//! the world only through its [`Director`](crate::Director) handle.

mod debris;
mod epoch;
mod explosion;
mod game_over;
mod projectile;
mod ship;
mod stars;

pub(crate) use debris::{fill_orbit_with_garbage, fly_debris};
pub(crate) use epoch::advance_years;
pub(crate) use explosion::explode;
pub(crate) use game_over::show_game_over;
pub(crate) use projectile::fly_projectile;
pub(crate) use ship::animate_ship;
pub(crate) use stars::blink;
