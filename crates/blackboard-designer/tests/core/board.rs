use blackboard_designer::{
    Board, BoardError, Circle, Direction, Figure, FigureError, FillMode, Line, Position,
    Rectangle, Shape, Triangle,
};

fn circle(x: i32, y: i32, r: i64, color: &str, fill: FillMode) -> Figure {
    Figure::new(Circle::new(r).unwrap(), Position::new(x, y), color, fill)
}

fn rectangle(x: i32, y: i32, w: i64, h: i64, color: &str) -> Figure {
    Figure::new(Rectangle::new(w, h).unwrap(), Position::new(x, y), color, FillMode::Fill)
}

/// Board with a red disk at (10, 10) under a blue square covering it.
fn overlapping_board() -> Board {
    let mut board = Board::new(80, 25);
    board
        .add_figure(circle(10, 10, 2, "red", FillMode::Fill))
        .unwrap();
    board.add_figure(rectangle(5, 5, 12, 12, "blue")).unwrap();
    board
}

fn assert_canvas_matches_redraw(board: &Board) {
    let mut fresh = board.clone();
    fresh.redraw();
    assert_eq!(board.rows(), fresh.rows());
}

#[test]
fn test_add_paints_disk() {
    let mut board = Board::new(80, 25);
    let id = board
        .add_figure(circle(10, 10, 3, "red", FillMode::Fill))
        .unwrap();
    assert_eq!(id, 1);
    assert_eq!(board.len(), 1);
    assert_eq!(board.glyph_at(10, 10), Some('r'));
    assert_eq!(board.glyph_at(13, 10), Some('r'));
    assert_eq!(board.glyph_at(10, 7), Some('r'));
    assert_eq!(board.glyph_at(14, 10), Some(' '));
    assert_eq!(board.glyph_at(13, 13), Some(' '));
}

#[test]
fn test_ids_are_monotonic_until_clear() {
    let mut board = Board::new(80, 25);
    assert_eq!(board.add_figure(circle(5, 5, 1, "a", FillMode::Fill)), Ok(1));
    assert_eq!(board.add_figure(circle(9, 5, 1, "b", FillMode::Fill)), Ok(2));
    board.remove_figure(2).unwrap();
    assert_eq!(board.add_figure(circle(13, 5, 1, "c", FillMode::Fill)), Ok(3));

    // Rejected figures do not consume an id.
    assert_eq!(
        board.add_figure(circle(-50, -50, 1, "d", FillMode::Fill)),
        Err(BoardError::OutOfBounds)
    );
    assert_eq!(board.next_id(), 4);

    board.clear_all();
    assert!(board.is_empty());
    assert!(board.rows().iter().all(|row| row.trim().is_empty()));
    assert_eq!(board.add_figure(circle(5, 5, 1, "a", FillMode::Fill)), Ok(1));
}

#[test]
fn test_duplicate_rejected() {
    let mut board = Board::new(80, 25);
    board
        .add_figure(circle(10, 10, 3, "blue", FillMode::Frame))
        .unwrap();
    assert_eq!(
        board.add_figure(circle(10, 10, 3, "blue", FillMode::Frame)),
        Err(BoardError::Duplicate)
    );
    assert_eq!(board.len(), 1);

    // Any differing attribute makes it a distinct figure.
    assert_eq!(
        board.add_figure(circle(10, 10, 3, "green", FillMode::Frame)),
        Ok(2)
    );
}

#[test]
fn test_partially_visible_figures_accepted_and_clipped() {
    let mut board = Board::new(10, 5);
    board
        .add_figure(circle(0, 0, 3, "red", FillMode::Fill))
        .unwrap();
    assert_eq!(board.glyph_at(0, 0), Some('r'));

    let line = Figure::new(
        Line::new(20, Direction::Horizontal).unwrap(),
        Position::new(-5, 4),
        "green",
        FillMode::Frame,
    );
    board.add_figure(line).unwrap();
    assert_eq!(board.rows()[4], "gggggggggg");

    let off = Figure::new(
        Triangle::new(3).unwrap(),
        Position::new(5, 5),
        "yellow",
        FillMode::Fill,
    );
    assert_eq!(board.add_figure(off), Err(BoardError::OutOfBounds));
    assert_eq!(board.len(), 2);
}

#[test]
fn test_later_figures_paint_on_top() {
    let board = overlapping_board();
    assert_eq!(board.glyph_at(10, 10), Some('b'));
    assert_canvas_matches_redraw(&board);
}

#[test]
fn test_select_at_prefers_most_recent() {
    let mut board = overlapping_board();
    let selected = board.select_at(10, 10).unwrap();
    assert_eq!(selected.id(), 2);
    assert_eq!(board.selected_id(), Some(2));
}

#[test]
fn test_select_at_miss_keeps_selection() {
    let mut board = overlapping_board();
    board.select_figure(1).unwrap();
    assert_eq!(
        board.select_at(70, 20).map(|f| f.id()),
        Err(BoardError::NoShapeAt { x: 70, y: 20 })
    );
    assert_eq!(board.selected_id(), Some(1));
}

#[test]
fn test_select_by_id_and_deselect() {
    let mut board = overlapping_board();
    assert_eq!(
        board.select_figure(9).map(|f| f.id()),
        Err(BoardError::NotFound(9))
    );
    assert_eq!(board.selected_id(), None);

    assert_eq!(board.select_figure(1).unwrap().color, "red");
    assert_eq!(board.selected().map(Figure::id), Some(1));
    assert_eq!(board.deselect(), Some(1));
    assert_eq!(board.deselect(), None);
}

#[test]
fn test_mutations_need_selection() {
    let mut board = overlapping_board();
    assert_eq!(board.remove_selected().map(|f| f.id()), Err(BoardError::NoSelection));
    assert_eq!(board.move_selected(1, 1).map(|f| f.id()), Err(BoardError::NoSelection));
    assert_eq!(board.paint_selected("green").map(|f| f.id()), Err(BoardError::NoSelection));
    assert_eq!(board.edit_selected(&["1"]).map(|f| f.id()), Err(BoardError::NoSelection));
}

#[test]
fn test_move_promotes_to_top() {
    let mut board = overlapping_board();
    board.select_figure(1).unwrap();
    let moved = board.move_selected(10, 10).unwrap();
    assert_eq!(moved.id(), 1);

    let order: Vec<u64> = board.figures().iter().map(Figure::id).collect();
    assert_eq!(order, vec![2, 1]);
    assert_eq!(board.glyph_at(10, 10), Some('r'));
    assert_eq!(board.selected_id(), Some(1));
    assert_canvas_matches_redraw(&board);
}

#[test]
fn test_move_out_of_bounds_keeps_attempted_position() {
    let mut board = Board::new(80, 25);
    board
        .add_figure(circle(10, 10, 3, "red", FillMode::Fill))
        .unwrap();
    board.select_figure(1).unwrap();
    let before = board.rows();

    assert_eq!(
        board.move_selected(1000, 1000).map(|f| f.id()),
        Err(BoardError::OutOfBounds)
    );
    assert_eq!(board.figure(1).unwrap().position, Position::new(1000, 1000));
    assert_eq!(board.rows(), before);

    // The stale display catches up on the next full redraw.
    board.redraw();
    assert_eq!(board.glyph_at(10, 10), Some(' '));
}

#[test]
fn test_paint_changes_glyph() {
    let mut board = overlapping_board();
    board.select_figure(2).unwrap();
    board.paint_selected("Yellow").unwrap();
    assert_eq!(board.glyph_at(10, 10), Some('y'));
    assert_eq!(board.figure(2).unwrap().color, "Yellow");
    assert_canvas_matches_redraw(&board);
}

#[test]
fn test_edit_resizes_and_redraws() {
    let mut board = Board::new(80, 25);
    board.add_figure(rectangle(2, 2, 4, 4, "green")).unwrap();
    board.select_figure(1).unwrap();

    board.edit_selected(&["2", "2"]).unwrap();
    assert_eq!(board.glyph_at(3, 3), Some('g'));
    assert_eq!(board.glyph_at(5, 5), Some(' '));
    assert_canvas_matches_redraw(&board);
}

#[test]
fn test_edit_with_bad_params_is_rejected() {
    let mut board = Board::new(80, 25);
    board.add_figure(rectangle(2, 2, 4, 4, "green")).unwrap();
    board.select_figure(1).unwrap();

    assert!(matches!(
        board.edit_selected(&["3"]).map(|f| f.id()),
        Err(BoardError::Figure(FigureError::ParameterCount { .. }))
    ));
    assert!(matches!(
        board.edit_selected(&["3", "-3"]).map(|f| f.id()),
        Err(BoardError::Figure(FigureError::InvalidDimension { .. }))
    ));
    assert_eq!(
        board.figure(1).unwrap().shape,
        Shape::from(Rectangle::new(4, 4).unwrap())
    );
}

#[test]
fn test_edit_out_of_bounds_keeps_new_params() {
    let mut board = Board::new(80, 25);
    board.add_figure(rectangle(-5, 0, 6, 1, "green")).unwrap();
    board.select_figure(1).unwrap();
    let before = board.rows();

    assert_eq!(
        board.edit_selected(&["2", "1"]).map(|f| f.id()),
        Err(BoardError::OutOfBounds)
    );
    assert_eq!(
        board.figure(1).unwrap().shape,
        Shape::from(Rectangle::new(2, 1).unwrap())
    );
    assert_eq!(board.rows(), before);
}

#[test]
fn test_remove_selected_clears_cursor() {
    let mut board = overlapping_board();
    board.select_figure(2).unwrap();
    let removed = board.remove_selected().unwrap();
    assert_eq!(removed.id(), 2);
    assert_eq!(board.selected_id(), None);
    assert_eq!(board.glyph_at(10, 10), Some('r'));
    assert_eq!(board.glyph_at(5, 5), Some(' '));
    assert_canvas_matches_redraw(&board);
}

#[test]
fn test_remove_last() {
    let mut board = overlapping_board();
    board.select_figure(2).unwrap();
    assert_eq!(board.remove_last().unwrap().id(), 2);
    assert_eq!(board.selected_id(), None);
    assert_eq!(board.remove_last().unwrap().id(), 1);
    assert_eq!(board.remove_last().map(|f| f.id()), Err(BoardError::EmptyBoard));
}

#[test]
fn test_redraw_is_idempotent() {
    let mut board = overlapping_board();
    board
        .add_figure(Figure::new(
            Triangle::new(4).unwrap(),
            Position::new(40, 2),
            "",
            FillMode::Frame,
        ))
        .unwrap();
    let incremental = board.rows();
    board.redraw();
    let once = board.rows();
    board.redraw();
    assert_eq!(incremental, once);
    assert_eq!(once, board.rows());
}

#[test]
fn test_list_figures_in_draw_order() {
    let board = overlapping_board();
    assert_eq!(
        board.list_figures(),
        vec![
            "Circle 1 10 10 2 fill red".to_string(),
            "Rectangle 2 5 5 12 12 fill blue".to_string(),
        ]
    );
}

#[test]
fn test_longest_line_is_clipped_to_canvas() {
    let mut board = Board::new(80, 25);
    let started = std::time::Instant::now();

    let line = Figure::new(
        Line::new(i32::MAX as i64, Direction::Horizontal).unwrap(),
        Position::new(0, 0),
        "green",
        FillMode::Frame,
    );
    board.add_figure(line).unwrap();
    let vertical = Figure::new(
        Line::new(i32::MAX as i64, Direction::Vertical).unwrap(),
        Position::new(79, 0),
        "blue",
        FillMode::Frame,
    );
    board.add_figure(vertical).unwrap();
    board.select_figure(1).unwrap();
    board.paint_selected("red").unwrap();
    board.redraw();

    assert!(
        started.elapsed() < std::time::Duration::from_secs(1),
        "drawing took {:?}",
        started.elapsed()
    );
    let rows = board.rows();
    assert_eq!(rows[0], format!("{}b", "r".repeat(79)));
    assert!(rows[1..].iter().all(|row| row.ends_with('b')));
    assert_eq!(board.glyph_at(0, 1), Some(' '));
    assert_eq!(board.select_at(5000, 0).map(|f| f.id()), Ok(1));
}
