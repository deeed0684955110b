use anyhow::Result;
use space_garbage_core::{milestone, status_line};
use space_garbage_types::GlyphStyle;
use tracing::{debug, info};

use crate::canvas::draw_text;
use crate::director::Director;
use crate::scheduler::next_tick;

/// Show the year on the bottom interior row and advance it every
/// `ticks_per_year` ticks, forever.
pub(crate) async fn advance_years(director: Director) -> Result<()> {
    let ticks_per_year = director.config().ticks_per_year;
    let mut shown_len = 0;
    loop {
        for _ in 0..ticks_per_year {
            director.with_world(|world| {
                let (rows, _) = world.bounds();
                let line = status_line(world.year);
                let len = line.chars().count();
                // Pad so a shorter line erases the tail of the previous one.
                let padded = format!("{line:<width$}", width = shown_len.max(len));
                draw_text(world.canvas.as_mut(), i64::from(rows) - 2, 2, &padded, GlyphStyle::Normal);
                shown_len = len;
            });
            next_tick().await;
        }

        let year = director.with_world(|world| {
            world.year += 1;
            world.year
        });
        match milestone(year) {
            Some(text) => info!(year, text, "milestone"),
            None => debug!(year, "new year"),
        }
    }
}
