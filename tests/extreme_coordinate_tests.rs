use chart_txt::core::{
    BarInfo, BoxStats, ErrorPoint, Key, KeyEntry, LabelPlacement, PlotStyle, Range, Style, Wedge,
};
use chart_txt::render::{Graphics, TextAlign, TextAnchor, TextCanvas, TextGraphics};
use std::f64::consts::TAU;

fn canvas(width: usize, height: usize) -> TextCanvas {
    TextCanvas::new(width, height).expect("canvas")
}

fn graphics(width: usize, height: usize) -> TextGraphics {
    let mut graphics = TextGraphics::new(width, height).expect("text graphics");
    graphics.begin();
    graphics
}

fn blank(width: usize, height: usize) -> String {
    format!("{}\n", " ".repeat(width)).repeat(height)
}

#[test]
fn text_anchored_at_i32_limits_is_dropped() {
    let mut canvas = canvas(6, 3);
    canvas.text(i32::MAX, 0, "ab", TextAlign::START);
    canvas.text(i32::MIN, 1, "ab", TextAlign::END);
    canvas.text(i32::MIN, 2, "ab", TextAlign::CENTER);
    canvas.text(0, i32::MAX, "ab", TextAlign::vertical(TextAnchor::Start));
    canvas.text(0, i32::MIN, "ab", TextAlign::vertical(TextAnchor::End));

    assert_eq!(canvas.render(), blank(6, 3));
}

#[test]
fn line_between_i32_limits_is_clipped_to_the_grid() {
    let mut canvas = canvas(10, 2);
    canvas.line(i32::MIN, 0, i32::MAX, 1, '*');
    assert_eq!(canvas.row(0).expect("row"), "          ");
    assert_eq!(canvas.row(1).expect("row"), "**********");

    let mut diagonal = crate::canvas(4, 4);
    diagonal.line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, '\\');
    for i in 0..4 {
        assert_eq!(diagonal.get(i, i), Some('\\'));
    }
    assert_eq!(diagonal.render().chars().filter(|c| *c == '\\').count(), 4);
}

#[test]
fn far_off_grid_horizontal_line_fills_the_visible_row() {
    let mut canvas = canvas(10, 2);
    canvas.line(-200_000_000, 0, 200_000_000, 0, '-');
    canvas.line(i32::MIN, 1, i32::MAX, 1, '=');

    assert_eq!(canvas.render(), "----------\n==========\n");
}

#[test]
fn far_off_grid_vertical_line_fills_the_visible_column() {
    let mut canvas = canvas(3, 4);
    canvas.line(1, i32::MAX, 1, i32::MIN, '|');

    assert_eq!(canvas.render(), " | \n | \n | \n | \n");
}

#[test]
fn rect_with_i32_limit_sizes_does_not_overflow() {
    let mut canvas = canvas(4, 3);
    canvas.rect(0, 0, i32::MIN, 1, 1, None);
    assert_eq!(canvas.render(), "+   \n+   \n    \n");

    let mut wide = crate::canvas(4, 3);
    wide.rect(i32::MAX, 0, i32::MIN, 2, 2, Some('.'));
    assert_eq!(wide.render(), "====\n....\n====\n");

    let mut huge = crate::canvas(4, 3);
    huge.rect(i32::MIN, i32::MIN, i32::MAX, i32::MAX, 1, Some('.'));
    huge.rect(i32::MAX, i32::MAX, i32::MAX, i32::MAX, 1, Some('.'));
    assert_eq!(huge.render(), blank(4, 3));
}

#[test]
fn renderer_rect_with_i32_limits_is_clipped() {
    let mut graphics = graphics(10, 5);
    graphics.rect(i32::MIN, 0, i32::MAX, 3, &Style::default());
    assert_eq!(graphics.render(), blank(10, 5));

    graphics.rect(-5, 0, i32::MAX, 3, &Style::default().with_symbol('#'));
    assert_eq!(graphics.canvas().row(0).expect("row"), "##########");
    assert_eq!(graphics.canvas().row(1).expect("row"), "          ");
    assert_eq!(graphics.canvas().row(2).expect("row"), "##########");

    graphics.rect(i32::MAX, i32::MAX, i32::MIN, i32::MIN, &Style::default());
}

#[test]
fn wide_error_bar_only_touches_the_visible_row() {
    let mut graphics = graphics(10, 2);
    let point = ErrorPoint::new(5.0, 0.0).with_delta_x(4.0e8);
    graphics.scatter(&[point], PlotStyle::POINTS, &Style::default().with_symbol('*'));

    assert_eq!(graphics.render(), "-----*----\n          \n");
}

#[test]
fn huge_whiskers_stop_at_the_grid_edge() {
    let mut graphics = graphics(11, 12);
    let stats = BoxStats::new(5.0, 8.0, 3.0).with_whiskers(4.0e9, -4.0e9);
    graphics.boxes(&[stats], 3, &Style::default());

    for y in (0..3).chain(9..12) {
        assert_eq!(graphics.canvas().get(5, y), Some('|'), "row {y}");
    }
}

#[test]
fn huge_box_width_spans_the_grid() {
    let mut graphics = graphics(11, 12);
    graphics.boxes(&[BoxStats::new(5.0, 8.0, 3.0)], i32::MAX, &Style::default());

    assert_eq!(graphics.canvas().row(3).expect("row"), "-----------");
    assert_eq!(graphics.canvas().row(8).expect("row"), "-----------");
    assert_eq!(graphics.canvas().row(5).expect("row"), "           ");
}

#[test]
fn axis_with_a_huge_screen_span_draws_the_visible_baseline() {
    let mut graphics = graphics(10, 3);
    let range = Range::new(0.0, 1.0, -2_000_000_000, 2_000_000_000).with_show_zero(true);
    graphics.x_axis(&range, 1, i32::MIN);
    assert_eq!(graphics.canvas().row(1).expect("row"), "----------");

    let mut vertical = crate::graphics(3, 4);
    vertical.y_axis(&range, 1, i32::MAX);
    assert_eq!(vertical.render(), " | \n | \n | \n | \n");
}

#[test]
fn bars_and_key_at_i32_limits_do_not_overflow() {
    let mut graphics = graphics(8, 4);
    let bars = [
        BarInfo::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX).with_label("a", LabelPlacement::Center),
        BarInfo::new(i32::MIN, i32::MIN, i32::MIN, i32::MIN).with_label("b", LabelPlacement::Outside),
    ];
    graphics.bars(&bars, &Style::default());

    let key = Key::new(vec![KeyEntry::new("series", Style::default(), PlotStyle::LINES_POINTS)]);
    graphics.key(i32::MAX, i32::MAX, &key);
    graphics.key(i32::MIN, i32::MIN, &key);

    assert_eq!(graphics.render(), blank(8, 4));
}

#[test]
fn rings_with_a_huge_radius_finish() {
    let mut graphics = graphics(20, 8);
    let wedges = [Wedge::new(0.0, TAU / 3.0), Wedge::new(TAU / 3.0, TAU).with_label("rest")];
    graphics.rings(&wedges, 10, 4, i32::MAX, i32::MAX - 1);

    let rendered = graphics.render();
    assert_eq!(rendered.lines().count(), 8);
}

#[test]
fn arc_of_a_far_off_center_still_reaches_the_grid() {
    let mut graphics = graphics(10, 5);
    let wedge = Wedge::new(0.0, TAU).with_style(Style::default().with_symbol('#'));
    // Rightmost point of the circle lands near column 5 of row 2.
    graphics.rings(&[wedge], -2_699_995, 2, 1_000_000, 0);

    assert!(graphics.render().contains('#'));
}
