use std::rc::Rc;

use anyhow::Result;
use space_garbage_core::{Entity, Frame};
use space_garbage_types::{GlyphStyle, STAR_PHASE_MAX_TICKS, STAR_PHASE_MIN_TICKS};

use crate::canvas::{draw_frame, Ink};
use crate::director::Director;
use crate::scheduler::sleep;

const PHASES: [GlyphStyle; 4] = [
    GlyphStyle::Dim,
    GlyphStyle::Normal,
    GlyphStyle::Bold,
    GlyphStyle::Normal,
];

/// Twinkle one star forever. Stars are scenery: they are never registered in
/// the scene and never collide.
pub(crate) async fn blink(director: Director, row: i64, col: i64, symbol: char) -> Result<()> {
    let star = Entity::new(Rc::new(Frame::glyph(symbol)), col as f64, row as f64);
    loop {
        for style in PHASES {
            let hold = director.with_world(|world| {
                let (x, y) = star.position();
                draw_frame(world.canvas.as_mut(), x, y, star.frame(), Ink::Draw(style));
                world.rng.ticks(STAR_PHASE_MIN_TICKS..=STAR_PHASE_MAX_TICKS)
            });
            sleep(hold).await;
        }
    }
}
