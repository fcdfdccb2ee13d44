use chart_txt::render::{TextAlign, TextAnchor, TextCanvas};
use proptest::prelude::*;

proptest! {
    #[test]
    fn put_inside_bounds_shows_up_after_render(
        width in 1usize..40,
        height in 1usize..20,
        x_seed in 0usize..1_000,
        y_seed in 0usize..1_000,
        ch in proptest::char::range('!', '~')
    ) {
        let x = x_seed % width;
        let y = y_seed % height;
        let mut canvas = TextCanvas::new(width, height).expect("canvas");
        canvas.put(x as i32, y as i32, ch);

        let rendered = canvas.render();
        let row = rendered.lines().nth(y).expect("row");
        prop_assert_eq!(row.chars().nth(x), Some(ch));
    }

    #[test]
    fn put_outside_bounds_leaves_output_unchanged(
        width in 1usize..40,
        height in 1usize..20,
        dx in 0i32..100,
        dy in 0i32..100,
        corner in 0u8..4
    ) {
        let mut canvas = TextCanvas::new(width, height).expect("canvas");
        canvas.text(0, 0, "seed", TextAlign::START);
        let before = canvas.render();

        let (w, h) = (width as i32, height as i32);
        let (x, y) = match corner {
            0 => (-1 - dx, dy),
            1 => (w + dx, dy),
            2 => (dx, -1 - dy),
            _ => (dx, h + dy),
        };
        canvas.put(x, y, '#');

        prop_assert_eq!(canvas.render(), before);
    }

    #[test]
    fn render_always_has_height_rows_of_width_chars(
        width in 1usize..40,
        height in 1usize..20,
        x0 in -50i32..50,
        y0 in -50i32..50,
        x1 in -50i32..50,
        y1 in -50i32..50
    ) {
        let mut canvas = TextCanvas::new(width, height).expect("canvas");
        canvas.line(x0, y0, x1, y1, '*');
        canvas.rect(x1, y1, x0 - x1, y0 - y1, 1, Some('.'));
        canvas.text(x0, y1, "some label", TextAlign::CENTER);

        let rendered = canvas.render();
        prop_assert_eq!(rendered.lines().count(), height);
        prop_assert!(rendered.lines().all(|line| line.chars().count() == width));
        prop_assert_eq!(rendered, canvas.render());
    }

    #[test]
    fn full_range_coordinates_keep_the_grid_shape(
        x0 in any::<i32>(),
        y0 in any::<i32>(),
        x1 in any::<i32>(),
        y1 in any::<i32>()
    ) {
        let mut canvas = TextCanvas::new(12, 6).expect("canvas");
        canvas.line(x0, y0, x1, y1, '*');
        canvas.rect(x0, y0, x1, y1, 2, Some('.'));
        canvas.frame(x0, y1, x1, y0, 1, None);
        canvas.text(x0, y0, "label", TextAlign::END);
        canvas.text(x1, y1, "label", TextAlign::vertical(TextAnchor::Center));

        let rendered = canvas.render();
        prop_assert_eq!(rendered.lines().count(), 6);
        prop_assert!(rendered.lines().all(|line| line.chars().count() == 12));
    }

    #[test]
    fn line_paints_both_endpoints(
        x0 in 0i32..30,
        y0 in 0i32..15,
        x1 in 0i32..30,
        y1 in 0i32..15
    ) {
        let mut canvas = TextCanvas::new(30, 15).expect("canvas");
        canvas.line(x0, y0, x1, y1, '#');

        prop_assert_eq!(canvas.get(x0, y0), Some('#'));
        prop_assert_eq!(canvas.get(x1, y1), Some('#'));
        let painted = canvas.render().chars().filter(|c| *c == '#').count();
        let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
        prop_assert_eq!(painted, expected);
    }

    #[test]
    fn negative_rect_matches_normalized_rect(
        x in -5i32..25,
        y in -5i32..15,
        w in -12i32..12,
        h in -8i32..8,
        border in 0u32..3
    ) {
        let mut flipped = TextCanvas::new(24, 14).expect("canvas");
        flipped.rect(x, y, w, h, border, Some('.'));

        let (nx, nw) = if w < 0 { (x + w, -w) } else { (x, w) };
        let (ny, nh) = if h < 0 { (y + h, -h) } else { (y, h) };
        let mut normalized = TextCanvas::new(24, 14).expect("canvas");
        normalized.rect(nx, ny, nw, nh, border, Some('.'));

        prop_assert_eq!(flipped.render(), normalized.render());
    }
}
