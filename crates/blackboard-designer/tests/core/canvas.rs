use blackboard_designer::{Board, Canvas};

#[test]
fn test_new_canvas_is_blank() {
    let canvas = Canvas::new(80, 25);
    assert_eq!(canvas.width(), 80);
    assert_eq!(canvas.height(), 25);
    assert!(canvas.is_blank());
    assert_eq!(canvas.glyph_at(79, 24), Some(' '));
    assert_eq!(canvas.glyph_at(80, 0), None);
    assert_eq!(canvas.glyph_at(0, -1), None);
}

#[test]
fn test_rows_have_exact_dimensions() {
    let mut canvas = Canvas::new(7, 3);
    canvas.paint(6, 2, 'z');
    let rows = canvas.rows();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.chars().count() == 7));
    assert_eq!(rows[2], "      z");
}

#[test]
fn test_empty_board_renders_blank_grid() {
    let board = Board::new(5, 2);
    assert_eq!(board.render(), "     \n     \n");
    assert_eq!(board.rows(), vec!["     ".to_string(), "     ".to_string()]);

    let default_board = Board::default();
    assert_eq!((default_board.width(), default_board.height()), (80, 25));
}
