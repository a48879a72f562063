use ratatui::{layout::Rect, widgets::Block, Frame};

use super::app::{App, Page};
use super::theme::Theme;
use super::{layout, widgets};

/// Draws the entire UI.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (sidebar_area, page_area) = layout::main(area);
    f.render_widget(widgets::sidebar(app.page()), sidebar_area);

    match app.page() {
        Page::Home => {
            let (body, hint) = split_hint(page_area);
            f.render_widget(widgets::home(), layout::centered_rect(80, 80, body));
            f.render_widget(widgets::hint(Page::Home), hint);
        }
        Page::Predict => draw_predict(f, app, page_area),
    }
}

fn draw_predict(f: &mut Frame, app: &App, area: Rect) {
    let form = app.form();
    let left_len = form.left_column_len();
    let rows = left_len.max(form.fields().len() - left_len) as u16;

    let [header, form_area, submit, result, hint] =
        layout::predict(area, rows, app.presenter().show_model_details());

    f.render_widget(widgets::header(), header);

    let panel = widgets::form_panel();
    let inner = panel.inner(form_area);
    f.render_widget(panel, form_area);

    let (left, right) = layout::columns(inner);
    let (left_fields, right_fields) = form.fields().split_at(left_len);
    for (column, fields, offset) in [(left, left_fields, 0), (right, right_fields, left_len)] {
        let slots = layout::stack(column, fields.len(), 3);
        for (idx, (field, slot)) in fields.iter().zip(slots).enumerate() {
            let focused = form.focus() == offset + idx;
            f.render_widget(widgets::field(field, focused), slot);
        }
    }

    f.render_widget(widgets::submit_button(), submit);
    f.render_widget(
        widgets::result(app.state(), app.presenter(), app.identity()),
        result,
    );
    f.render_widget(widgets::hint(Page::Predict), hint);
}

fn split_hint(area: Rect) -> (Rect, Rect) {
    let body = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let hint = Rect {
        y: area.y + body.height,
        height: area.height.min(1),
        ..area
    };
    (body, hint)
}
