//! Feed ↔ grid switching driven by simulated scrolling.
//!
//! The host's visibility callbacks are replaced by exact frame arithmetic:
//! each scroll step reports every grid cell's old and new `min_y` relative
//! to the viewport top, the way a geometry observer would.

use zengrid::*;

const PHONE: Size = Size::new(363.0, 780.0);

fn phone_grid() -> GridLayoutEngine {
    GridLayoutEngine::new(AspectRatio::new(120.0, 214.0).unwrap(), 3.0, 2, 3).unwrap()
}

/// Scroll the grid from `from` to `to` in 1pt steps, reporting frame moves.
fn scroll_grid(anchor: &mut ScrollAnchor, engine: &mut GridLayoutEngine, count: u64, from: f64, to: f64) {
    let tops: Vec<f64> = engine
        .place_all(PHONE.width, count)
        .map(|(_, p)| p.origin.y)
        .collect();
    let step = if to >= from { 1.0 } else { -1.0 };
    let mut offset = from;
    while (to - offset).abs() >= 1.0 {
        let next = offset + step;
        for (i, &y) in tops.iter().enumerate() {
            anchor.frame_moved(i as u64, y - offset, y - next);
        }
        offset = next;
    }
}

#[test]
fn feed_page_becomes_grid_scroll_target() {
    let feed = FeedLayout::new();
    let mut engine = phone_grid();
    let mut anchor = ScrollAnchor::new();
    let count = 1201;

    // Page through the feed to item 17.
    let offset = feed.offset_of(17, PHONE);
    let page = feed.page_at(offset, PHONE, count).unwrap();
    anchor.item_appeared(page);

    let target = anchor.toggle().unwrap();
    assert_eq!(anchor.mode(), LayoutMode::Grid);
    assert_eq!(target, 17);

    // 17 + diff = 18 → line 6, column 0.
    let p = engine.place(target as i64, PHONE.width).unwrap();
    assert_eq!(p.origin.x, 0.0);
    assert_eq!(p.origin.y, 321.0 + 6.0 * 3.0 + 5.0 * 213.0);
}

#[test]
fn grid_scroll_picks_top_line_for_feed() {
    let mut engine = phone_grid();
    let mut anchor = ScrollAnchor::new();
    let count = 60;
    anchor.toggle();

    // Past line 1 (y=324) and line 2 (y=540), stopping inside line 2.
    scroll_grid(&mut anchor, &mut engine, count, 0.0, 600.0);
    let crossed = anchor.crossed().unwrap();
    let line_top = engine.place(crossed as i64, PHONE.width).unwrap().origin.y;
    assert_eq!(line_top, 540.0);

    assert_eq!(anchor.toggle(), Some(crossed));
    assert_eq!(anchor.mode(), LayoutMode::List);
}

#[test]
fn scrolling_back_up_reports_the_line_that_reappears() {
    let mut engine = phone_grid();
    let mut anchor = ScrollAnchor::new();
    let count = 60;
    anchor.toggle();

    scroll_grid(&mut anchor, &mut engine, count, 0.0, 1000.0);
    scroll_grid(&mut anchor, &mut engine, count, 1000.0, 500.0);
    let crossed = anchor.crossed().unwrap();
    // Going up, line 2 (y=540) is the last top edge to come back into view.
    assert_eq!(engine.place(crossed as i64, PHONE.width).unwrap().origin.y, 540.0);
}

#[test]
fn zoom_stage_drives_column_count() {
    let stages = ZoomStages::new(DeviceClass::Phone, Orientation::from_dimensions(PHONE.width, PHONE.height));
    let ratio = AspectRatio::new(120.0, 214.0).unwrap();

    let mut prev_height = f64::INFINITY;
    for i in 1..stages.len() as i64 {
        let columns = stages.stage_at(i);
        let first = stages.stage_at(i - 1);
        let mut engine = GridLayoutEngine::new(ratio, 3.0, first, columns).unwrap();
        let h = engine.measure(PHONE.width, 120);
        assert!(h < prev_height, "more columns should need less height");
        prev_height = h;
    }
}
