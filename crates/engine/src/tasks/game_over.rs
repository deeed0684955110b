use anyhow::Result;
use space_garbage_core::Frame;
use space_garbage_types::{GlyphStyle, GAME_OVER_BANNER};

use crate::canvas::{draw_frame, Ink};
use crate::director::Director;
use crate::scheduler::next_tick;

/// Keep the banner centred on screen until the process exits.
pub(crate) async fn show_game_over(director: Director) -> Result<()> {
    let banner = Frame::new("game_over", GAME_OVER_BANNER.trim_start_matches('\n'));
    loop {
        director.with_world(|world| {
            let (rows, cols) = world.bounds();
            let x = (f64::from(cols) - banner.width() as f64) / 2.0;
            let y = (f64::from(rows) - banner.height() as f64) / 2.0;
            draw_frame(world.canvas.as_mut(), x, y, &banner, Ink::Draw(GlyphStyle::Bold));
        });
        next_tick().await;
    }
}
