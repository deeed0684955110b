use anyhow::Result;
use space_garbage_types::GlyphStyle;

use crate::canvas::{draw_frame, Ink};
use crate::director::Director;
use crate::scheduler::next_tick;

/// Play the explosion frames centred on `(center_x, center_y)`, then finish.
pub(crate) async fn explode(director: Director, center_x: f64, center_y: f64) -> Result<()> {
    let frames = director.assets().explosion.clone();
    for frame in frames {
        let x = center_x - frame.width() as f64 / 2.0;
        let y = center_y - frame.height() as f64 / 2.0;
        director.with_world(|world| {
            draw_frame(world.canvas.as_mut(), x, y, &frame, Ink::Draw(GlyphStyle::Bold))
        });
        next_tick().await;
        director.with_world(|world| draw_frame(world.canvas.as_mut(), x, y, &frame, Ink::Erase));
        next_tick().await;
    }
    Ok(())
}
