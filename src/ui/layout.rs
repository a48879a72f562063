use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the screen into (sidebar, page).
pub fn main(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(40)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits the prediction page into (header, form, submit, result, hint).
pub fn predict(area: Rect, form_rows: u16, show_details: bool) -> [Rect; 5] {
    let result_height = if show_details { 12 } else { 6 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(form_rows * 3 + 2),
            Constraint::Length(3),
            Constraint::Min(result_height),
            Constraint::Length(1),
        ])
        .split(area);

    [rows[0], rows[1], rows[2], rows[3], rows[4]]
}

/// Splits a panel into two equal columns.
pub fn columns(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    (cols[0], cols[1])
}

/// Stacks `n` rows of height `height` from the top of `area`.
pub fn stack(area: Rect, n: usize, height: u16) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(height); n];
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    rows[..n].to_vec()
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
