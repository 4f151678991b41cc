use blackboard_designer::{
    Canvas, Circle, Direction, Figure, FigureError, FillMode, GlyphShape, Line, Position,
    Rectangle, Shape, Triangle,
};
use proptest::prelude::*;

fn painted(figure: &Figure, width: usize, height: usize) -> Vec<(i64, i64)> {
    let mut canvas = Canvas::new(width, height);
    figure.rasterize(&mut canvas);
    let mut cells = Vec::new();
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            if canvas.glyph_at(x, y) != Some(' ') {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[test]
fn test_filled_circle_covers_disk() {
    let fig = Figure::new(
        Circle::new(3).unwrap(),
        Position::new(10, 10),
        "red",
        FillMode::Fill,
    );
    assert!(fig.contains_point(10, 10));
    assert!(fig.contains_point(10, 7));
    assert!(fig.contains_point(13, 10));
    assert!(fig.contains_point(12, 12));
    assert!(!fig.contains_point(13, 11));
    assert!(!fig.contains_point(14, 10));

    let cells = painted(&fig, 20, 20);
    assert!(cells.contains(&(7, 10)));
    assert!(!cells.contains(&(13, 13)));
}

#[test]
fn test_framed_circle_is_a_ring() {
    let fig = Figure::new(
        Circle::new(3).unwrap(),
        Position::new(10, 10),
        "blue",
        FillMode::Frame,
    );
    assert!(fig.contains_point(10, 7));
    assert!(fig.contains_point(12, 12));
    assert!(!fig.contains_point(10, 10));
    assert!(!fig.contains_point(12, 11));
}

#[test]
fn test_rectangle_frame_and_fill() {
    let frame = Figure::new(
        Rectangle::new(4, 3).unwrap(),
        Position::new(1, 1),
        "green",
        FillMode::Frame,
    );
    assert!(frame.contains_point(1, 1));
    assert!(frame.contains_point(4, 1));
    assert!(frame.contains_point(1, 3));
    assert!(frame.contains_point(4, 3));
    assert!(!frame.contains_point(2, 2));
    assert!(!frame.contains_point(5, 1));
    assert_eq!(painted(&frame, 10, 10).len(), 10);

    let fill = Figure::new(
        Rectangle::new(4, 3).unwrap(),
        Position::new(1, 1),
        "green",
        FillMode::Fill,
    );
    assert!(fill.contains_point(2, 2));
    assert_eq!(painted(&fill, 10, 10).len(), 12);
}

#[test]
fn test_line_ignores_fill_mode() {
    for fill in [FillMode::Fill, FillMode::Frame] {
        let fig = Figure::new(
            Line::new(4, Direction::Horizontal).unwrap(),
            Position::new(2, 2),
            "white",
            fill,
        );
        assert_eq!(painted(&fig, 10, 5), vec![(2, 2), (3, 2), (4, 2), (5, 2)]);
    }

    let vertical = Figure::new(
        Line::new(3, Direction::Vertical).unwrap(),
        Position::new(0, 1),
        "",
        FillMode::Frame,
    );
    assert_eq!(painted(&vertical, 5, 5), vec![(0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_triangle_rows_widen_from_apex() {
    let fill = Figure::new(
        Triangle::new(3).unwrap(),
        Position::new(5, 0),
        "yellow",
        FillMode::Fill,
    );
    assert_eq!(
        painted(&fill, 12, 5),
        vec![
            (5, 0),
            (4, 1),
            (5, 1),
            (6, 1),
            (3, 2),
            (4, 2),
            (5, 2),
            (6, 2),
            (7, 2)
        ]
    );

    let frame = Figure::new(
        Triangle::new(3).unwrap(),
        Position::new(5, 0),
        "yellow",
        FillMode::Frame,
    );
    assert!(!frame.contains_point(5, 1));
    assert!(frame.contains_point(4, 1));
    assert!(frame.contains_point(5, 2));
}

#[test]
fn test_glyph_from_color() {
    let mut fig = Figure::new(
        Circle::new(1).unwrap(),
        Position::new(0, 0),
        "Red",
        FillMode::Fill,
    );
    assert_eq!(fig.glyph(), 'r');
    fig.set_color("");
    assert_eq!(fig.glyph(), 'O');

    let rect = Figure::new(Rectangle::new(1, 1).unwrap(), Position::new(0, 0), "", FillMode::Fill);
    let line = Figure::new(
        Line::new(1, Direction::Vertical).unwrap(),
        Position::new(0, 0),
        "",
        FillMode::Fill,
    );
    let tri = Figure::new(Triangle::new(1).unwrap(), Position::new(0, 0), "", FillMode::Fill);
    assert_eq!(rect.glyph(), '#');
    assert_eq!(line.glyph(), '*');
    assert_eq!(tri.glyph(), '^');
}

#[test]
fn test_invalid_dimensions_rejected() {
    assert!(matches!(
        Circle::new(0),
        Err(FigureError::InvalidDimension { name: "radius", value: 0 })
    ));
    assert!(Rectangle::new(3, -1).is_err());
    assert!(Line::new(-4, Direction::Horizontal).is_err());
    assert!(Triangle::new(0).is_err());
}

#[test]
fn test_edit_keeps_variant_and_rejects_bad_params() {
    let mut shape = Shape::from(Rectangle::new(4, 3).unwrap());
    shape.edit(&["6", "2"]).unwrap();
    assert_eq!(shape, Shape::Rectangle(Rectangle::new(6, 2).unwrap()));

    assert!(matches!(
        shape.edit(&["5"]),
        Err(FigureError::ParameterCount {
            expected: 2,
            found: 1,
            ..
        })
    ));
    assert!(shape.edit(&["5", "zero"]).is_err());
    assert_eq!(shape, Shape::Rectangle(Rectangle::new(6, 2).unwrap()));

    let mut line = Shape::from(Line::new(3, Direction::Horizontal).unwrap());
    line.edit(&["7", "v"]).unwrap();
    assert_eq!(line.params(), vec!["7".to_string(), "V".to_string()]);
}

#[test]
fn test_equality_ignores_only_id() {
    let a = Figure::new(Circle::new(3).unwrap(), Position::new(1, 1), "red", FillMode::Fill);
    let b = a.clone();
    assert!(a.is_equal(&b));

    let mut other_color = a.clone();
    other_color.set_color("blue");
    assert!(!a.is_equal(&other_color));

    let other_fill = Figure::new(Circle::new(3).unwrap(), Position::new(1, 1), "red", FillMode::Frame);
    assert!(!a.is_equal(&other_fill));
}

#[test]
fn test_describe_format() {
    let fig = Figure::new(
        Line::new(5, Direction::Vertical).unwrap(),
        Position::new(2, 3),
        "green",
        FillMode::Frame,
    );
    assert_eq!(fig.describe(), "Line 0 2 3 5 V frame green");
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (1i64..8).prop_map(|r| Shape::from(Circle::new(r).unwrap())),
        (1i64..10, 1i64..10).prop_map(|(w, h)| Shape::from(Rectangle::new(w, h).unwrap())),
        (1i64..12, any::<bool>()).prop_map(|(len, horizontal)| {
            let direction = if horizontal {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            Shape::from(Line::new(len, direction).unwrap())
        }),
        (1i64..8).prop_map(|h| Shape::from(Triangle::new(h).unwrap())),
    ]
}

proptest! {
    #[test]
    fn prop_hit_test_matches_raster(
        shape in shape_strategy(),
        x in -5i32..25,
        y in -5i32..15,
        filled in any::<bool>(),
    ) {
        let fill = if filled { FillMode::Fill } else { FillMode::Frame };
        let figure = Figure::new(shape, Position::new(x, y), "magenta", fill);
        let mut canvas = Canvas::new(20, 10);
        figure.rasterize(&mut canvas);

        for cy in 0..10i32 {
            for cx in 0..20i32 {
                let drawn = canvas.glyph_at(cx as i64, cy as i64) == Some('m');
                prop_assert_eq!(drawn, figure.contains_point(cx, cy), "cell ({}, {})", cx, cy);
            }
        }
    }
}
