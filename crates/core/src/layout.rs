//! Placement of cards, buttons and text rows on the canvas.

use crate::{
    config::LayoutConfig,
    geometry::{Point, Rect},
    models::Preset,
};

/// Rows reserved at the top of the play screen for the score line and moves line.
pub const HUD_ROWS: u16 = 2;
/// Horizontal inset of the HUD text from the canvas edges.
pub const HUD_INSET: u16 = 2;
/// Row of the large heading on the menu and game-over screens.
pub const TITLE_ROW: u16 = 2;
/// Row of the menu subtitle.
pub const SUBTITLE_ROW: u16 = 5;
/// Top row of the first difficulty button.
pub const MENU_FIRST_BUTTON_ROW: u16 = 8;
/// First row of the game-over statistics.
pub const STATS_ROW: u16 = 6;
/// Top row of the first game-over button.
pub const GAME_OVER_FIRST_BUTTON_ROW: u16 = 11;
/// Empty rows between stacked buttons.
pub const BUTTON_GAP: u16 = 1;

/// Width and height of the card grid for a preset.
///
/// Computed in `u32` so oversized layouts can be measured and rejected.
pub fn grid_size(preset: Preset, layout: &LayoutConfig) -> (u32, u32) {
    let width = span(preset.cols, layout.card_width, layout.card_margin);
    let height = span(preset.rows, layout.card_height, layout.card_margin);
    (width, height)
}

fn span(count: u16, size: u16, margin: u16) -> u32 {
    let stride = u32::from(size) + u32::from(margin);
    u32::from(count)
        .saturating_mul(stride)
        .saturating_sub(u32::from(margin))
}

fn clamp_cells(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Card rectangles for a preset in row-major order, centred on the canvas.
pub fn card_rects(preset: Preset, layout: &LayoutConfig) -> Vec<Rect> {
    let (total_width, total_height) = grid_size(preset, layout);
    let start_x = layout.canvas_width.saturating_sub(clamp_cells(total_width)) / 2;
    let start_y = layout.canvas_height.saturating_sub(clamp_cells(total_height)) / 2;
    let stride_x = layout.card_width.saturating_add(layout.card_margin);
    let stride_y = layout.card_height.saturating_add(layout.card_margin);

    let mut rects = Vec::with_capacity(preset.card_count());
    for row in 0..preset.rows {
        for col in 0..preset.cols {
            rects.push(Rect::new(
                start_x.saturating_add(col.saturating_mul(stride_x)),
                start_y.saturating_add(row.saturating_mul(stride_y)),
                layout.card_width,
                layout.card_height,
            ));
        }
    }
    rects
}

/// `count` buttons stacked from `first_row`, horizontally centred.
pub fn button_column(layout: &LayoutConfig, first_row: u16, count: u16) -> Vec<Rect> {
    let x = layout.canvas_width.saturating_sub(layout.button_width) / 2;
    (0..count)
        .map(|idx| {
            Rect::new(
                x,
                first_row.saturating_add(
                    idx.saturating_mul(layout.button_height.saturating_add(BUTTON_GAP)),
                ),
                layout.button_width,
                layout.button_height,
            )
        })
        .collect()
}

/// Row just below the last button of a column.
pub fn button_column_bottom(layout: &LayoutConfig, first_row: u16, count: u16) -> u32 {
    u32::from(first_row) + span(count, layout.button_height, BUTTON_GAP)
}

/// Horizontal centre of the canvas on a given row.
pub fn centered(layout: &LayoutConfig, row: u16) -> Point {
    Point::new(layout.canvas_width / 2, row)
}

/// Left edge of the game-over statistics block, aligned with the buttons.
pub fn stats_column(layout: &LayoutConfig) -> u16 {
    (layout.canvas_width / 2).saturating_sub(layout.button_width / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    #[test]
    fn cards_are_row_major_and_centred() {
        let layout = LayoutConfig::default();
        let preset = Difficulty::Easy.preset();
        let rects = card_rects(preset, &layout);
        assert_eq!(rects.len(), 12);

        let (width, height) = grid_size(preset, &layout);
        let left = rects[0].x;
        let right = layout.canvas_width - rects[3].right();
        assert!(left.abs_diff(right) <= 1);
        assert_eq!(u32::from(rects[11].right() - rects[0].x), width);
        assert_eq!(u32::from(rects[11].bottom() - rects[0].y), height);

        assert_eq!(rects[1].y, rects[0].y);
        assert!(rects[1].x > rects[0].x);
        assert!(rects[4].y > rects[0].y);
        assert_eq!(rects[4].x, rects[0].x);
    }

    #[test]
    fn cards_never_overlap() {
        let layout = LayoutConfig::default();
        for difficulty in Difficulty::ALL {
            let rects = card_rects(difficulty.preset(), &layout);
            for (idx, a) in rects.iter().enumerate() {
                assert!(a.right() <= layout.canvas_width && a.bottom() <= layout.canvas_height);
                for b in &rects[idx + 1..] {
                    assert!(!a.intersects(b), "{difficulty}: {a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn buttons_stack_with_gap() {
        let layout = LayoutConfig::default();
        let rects = button_column(&layout, MENU_FIRST_BUTTON_ROW, 3);
        assert_eq!(rects[0].y, MENU_FIRST_BUTTON_ROW);
        assert_eq!(rects[1].y, rects[0].bottom() + BUTTON_GAP);
        assert_eq!(
            button_column_bottom(&layout, MENU_FIRST_BUTTON_ROW, 3),
            u32::from(rects[2].bottom())
        );
    }

    #[test]
    fn oversized_cards_measure_without_overflow() {
        let layout = LayoutConfig {
            card_width: u16::MAX,
            card_height: u16::MAX,
            ..LayoutConfig::default()
        };
        let (width, height) = grid_size(Difficulty::Hard.preset(), &layout);
        assert!(width > u32::from(u16::MAX));
        assert!(height > u32::from(u16::MAX));
        assert_eq!(card_rects(Difficulty::Hard.preset(), &layout).len(), 20);
    }
}
