use chart_txt::ChartError;
use chart_txt::render::{TextAlign, TextAnchor, TextCanvas};

fn canvas(width: usize, height: usize) -> TextCanvas {
    TextCanvas::new(width, height).expect("canvas")
}

fn count(canvas: &TextCanvas, ch: char) -> usize {
    canvas.render().chars().filter(|c| *c == ch).count()
}

#[test]
fn new_canvas_renders_blank_rows() {
    let canvas = canvas(4, 2);
    assert_eq!(canvas.render(), "    \n    \n");
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let err = TextCanvas::new(0, 3).expect_err("zero width");
    assert!(matches!(
        err,
        ChartError::InvalidCanvasSize {
            width: 0,
            height: 3
        }
    ));
    assert!(TextCanvas::new(3, 0).is_err());
}

#[test]
fn put_inside_bounds_is_visible_at_row_and_column() {
    let mut canvas = canvas(4, 3);
    canvas.put(2, 1, 'x');

    assert_eq!(canvas.get(2, 1), Some('x'));
    let rendered = canvas.render();
    let row = rendered.lines().nth(1).expect("second row");
    assert_eq!(row.chars().nth(2), Some('x'));
    assert_eq!(row, "  x ");
}

#[test]
fn put_outside_bounds_is_dropped() {
    let mut canvas = canvas(4, 2);
    let before = canvas.render();

    canvas.put(-1, 0, 'x');
    canvas.put(4, 0, 'x');
    canvas.put(0, 2, 'x');
    canvas.put(0, -5, 'x');
    canvas.put(i32::MAX, i32::MIN, 'x');

    assert_eq!(canvas.render(), before);
    assert_eq!(canvas.get(-1, 0), None);
}

#[test]
fn control_characters_are_not_stored() {
    let mut canvas = canvas(3, 1);
    canvas.put(0, 0, '\n');
    canvas.put(1, 0, '\t');
    assert_eq!(canvas.render(), "   \n");
}

#[test]
fn zero_length_line_writes_one_cell() {
    let mut canvas = canvas(5, 3);
    canvas.line(2, 1, 2, 1, '*');

    assert_eq!(count(&canvas, '*'), 1);
    assert_eq!(canvas.get(2, 1), Some('*'));
}

#[test]
fn horizontal_line_fills_the_row_prefix() {
    let mut canvas = canvas(8, 2);
    canvas.line(0, 0, 4, 0, '-');

    assert_eq!(canvas.row(0).as_deref(), Some("-----   "));
    assert_eq!(canvas.row(1).as_deref(), Some("        "));
}

#[test]
fn reversed_vertical_line_covers_both_ends() {
    let mut canvas = canvas(3, 5);
    canvas.line(1, 3, 1, 0, '|');

    for y in 0..=3 {
        assert_eq!(canvas.get(1, y), Some('|'), "row {y}");
    }
    assert_eq!(canvas.get(1, 4), Some(' '));
}

#[test]
fn diagonal_line_steps_one_cell_per_row() {
    let mut canvas = canvas(5, 5);
    canvas.line(0, 0, 3, 3, '\\');

    for i in 0..=3 {
        assert_eq!(canvas.get(i, i), Some('\\'));
    }
    assert_eq!(count(&canvas, '\\'), 4);
}

#[test]
fn shallow_line_hits_every_column_once() {
    let mut canvas = canvas(8, 4);
    canvas.line(0, 0, 6, 2, 'o');

    assert_eq!(canvas.get(0, 0), Some('o'));
    assert_eq!(canvas.get(6, 2), Some('o'));
    for x in 0..=6 {
        let hits = (0..4).filter(|&y| canvas.get(x, y) == Some('o')).count();
        assert_eq!(hits, 1, "column {x}");
    }
    assert_eq!(count(&canvas, 'o'), 7);
}

#[test]
fn line_partly_outside_is_clipped() {
    let mut canvas = canvas(5, 1);
    canvas.line(-3, 0, 2, 0, '=');
    assert_eq!(canvas.render(), "===  \n");
}

#[test]
fn rect_with_single_border() {
    let mut canvas = canvas(6, 5);
    canvas.rect(1, 1, 3, 2, 1, None);

    assert_eq!(
        canvas.render(),
        "      \n +--+ \n |  | \n +--+ \n      \n"
    );
}

#[test]
fn rect_with_double_border() {
    let mut canvas = canvas(6, 4);
    canvas.rect(1, 0, 3, 2, 2, None);

    assert_eq!(canvas.row(0).as_deref(), Some(" +==+ "));
    assert_eq!(canvas.row(1).as_deref(), Some(" \"  \" "));
    assert_eq!(canvas.row(2).as_deref(), Some(" +==+ "));
}

#[test]
fn rect_fill_without_border_covers_only_the_interior() {
    let mut canvas = canvas(4, 4);
    canvas.rect(0, 0, 3, 3, 0, Some('#'));

    assert_eq!(canvas.render(), "    \n ## \n ## \n    \n");
}

#[test]
fn rect_border_and_fill_are_independent() {
    let mut bordered = canvas(5, 4);
    bordered.rect(0, 0, 4, 3, 1, Some('.'));

    assert_eq!(bordered.row(1).as_deref(), Some("|...|"));
    assert_eq!(bordered.row(0).as_deref(), Some("+---+"));
}

#[test]
fn rect_with_negative_size_matches_normalized_rect() {
    let mut flipped = canvas(8, 6);
    flipped.rect(5, 4, -3, -2, 1, Some('.'));

    let mut normalized = canvas(8, 6);
    normalized.rect(2, 2, 3, 2, 1, Some('.'));

    assert_eq!(flipped.render(), normalized.render());
}

#[test]
fn text_start_begins_at_anchor() {
    let mut canvas = canvas(10, 1);
    canvas.text(5, 0, "hi", TextAlign::START);
    assert_eq!(canvas.render(), "     hi   \n");
}

#[test]
fn text_end_finishes_at_anchor() {
    let mut canvas = canvas(10, 1);
    canvas.text(5, 0, "hi", TextAlign::END);
    assert_eq!(canvas.get(5, 0), Some('i'));
    assert_eq!(canvas.render(), "    hi    \n");
}

#[test]
fn text_center_rounds_toward_start_on_ties() {
    let mut even = canvas(10, 1);
    even.text(5, 0, "hi", TextAlign::CENTER);
    assert_eq!(even.render(), "    hi    \n");

    let mut odd = canvas(10, 1);
    odd.text(5, 0, "abc", TextAlign::CENTER);
    assert_eq!(odd.render(), "    abc   \n");
}

#[test]
fn text_is_clipped_at_the_edges() {
    let mut canvas = canvas(10, 1);
    canvas.text(8, 0, "hello", TextAlign::START);
    canvas.text(1, 0, "world", TextAlign::END);
    assert_eq!(canvas.render(), "ld      he\n");
}

#[test]
fn vertical_text_runs_downward() {
    let mut canvas = canvas(1, 5);
    canvas.text(0, 2, "abc", TextAlign::vertical(TextAnchor::Center));
    assert_eq!(canvas.render(), " \na\nb\nc\n \n");
}

#[test]
fn render_has_fixed_shape_and_is_idempotent() {
    let mut canvas = canvas(7, 3);
    canvas.line(-2, -1, 12, 5, '#');
    canvas.text(3, 1, "label", TextAlign::CENTER);

    let first = canvas.render();
    let second = canvas.render();
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 3);
    assert!(first.lines().all(|line| line.chars().count() == 7));
    assert_eq!(first, canvas.to_string());
}

#[test]
fn clear_resets_every_cell() {
    let mut canvas = canvas(3, 2);
    canvas.fill(0, 0, 2, 1, '#');
    canvas.clear();
    assert_eq!(canvas.render(), "   \n   \n");
}

#[test]
fn outline_accepts_corners_in_any_order() {
    let mut a = canvas(5, 4);
    a.outline(3, 2, 0, 0, '*');
    let mut b = canvas(5, 4);
    b.outline(0, 0, 3, 2, '*');

    assert_eq!(a.render(), b.render());
    assert_eq!(a.row(1).as_deref(), Some("*  * "));
}
