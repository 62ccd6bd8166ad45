//! Property-based tests for the layout cursor and grid.

use proptest::prelude::*;
use stackstage_layout::{Frame, GridSpec, LayoutCursor, Point, approx_text_width, fit_text};

#[derive(Debug, Clone)]
enum Step {
    Block(f32),
    Inline(f32, f32),
    Advance(f32),
    NewRow,
    PageBreak,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (-10.0f32..200.0).prop_map(Step::Block),
        (0.0f32..300.0, 0.0f32..80.0).prop_map(|(w, h)| Step::Inline(w, h)),
        (-10.0f32..200.0).prop_map(Step::Advance),
        Just(Step::NewRow),
        Just(Step::PageBreak),
    ]
}

proptest! {
    #[test]
    fn cursor_never_moves_backwards(steps in proptest::collection::vec(arb_step(), 0..40)) {
        let mut cursor = LayoutCursor::new(Frame::new(595.0, 1200.0, 40.0));
        let mut last = cursor.position();
        for step in steps {
            let _ = match step {
                Step::Block(h) => cursor.reserve_block(h).map(|_| ()),
                Step::Inline(w, h) => cursor.reserve_inline(w, h).map(|_| ()),
                Step::Advance(h) => cursor.advance(h),
                Step::NewRow => {
                    cursor.new_row();
                    Ok(())
                }
                Step::PageBreak => {
                    cursor.page_break();
                    Ok(())
                }
            };
            let now = cursor.position();
            prop_assert!(now >= last, "cursor moved from {:?} to {:?}", last, now);
            prop_assert!(now.y <= 1200.0 + 0.01);
            last = now;
        }
    }

    #[test]
    fn reserved_regions_never_overlap(heights in proptest::collection::vec(0.0f32..150.0, 1..20)) {
        let mut cursor = LayoutCursor::new(Frame::new(595.0, 1500.0, 40.0));
        let mut previous_bottom = 0.0f32;
        for h in heights {
            if let Ok(region) = cursor.reserve_region(h) {
                prop_assert!(region.bounds.y >= previous_bottom - 0.01);
                previous_bottom = region.bounds.bottom();
            }
        }
    }

    #[test]
    fn grid_cell_matches_formula(index in 0usize..64, bx in 0.0f32..100.0, by in 0.0f32..100.0) {
        let grid = GridSpec::two_column(Point::new(bx, by), 250.0, 80.0);
        let cell = grid.cell(index);
        prop_assert_eq!(cell.x, bx + (index % 2) as f32 * 250.0);
        prop_assert_eq!(cell.y, by + (index / 2) as f32 * 80.0);
    }

    #[test]
    fn fitted_text_fits(text in ".{0,80}", width in 0.0f32..400.0, size in 6.0f32..24.0) {
        let fitted = fit_text(&text, width, size);
        prop_assert!(approx_text_width(&fitted, size) <= width + 0.01);
    }
}
