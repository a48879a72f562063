use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presenter::ResultPresenter;
use crate::types::prediction::ModelIdentity;

use super::app::{Outcome, Page, SubmissionState};
use super::form::FormField;
use super::theme::Theme;

const LOGO: &str = r#"
   ______
  /|_||_\`.__
 (   _    _ _\
 =`-(_)--(_)-'
"#;

pub fn sidebar(current: Page) -> Paragraph<'static> {
    let mut lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l, Theme::title())))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Navigation", Theme::dim())));

    for page in Page::ALL {
        let (prefix, style) = if page == current {
            ("▶ ", Theme::title())
        } else {
            ("  ", Theme::dim())
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(page.title(), style),
        ]));
    }

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Theme::border()),
    )
}

pub fn home() -> Paragraph<'static> {
    let bullet = |text: &'static str| {
        Line::from(vec![Span::styled("  • ", Theme::dim()), Span::styled(text, Theme::text())])
    };

    let lines = vec![
        Line::from(Span::styled("Welcome to Car Price Predictor", Theme::title())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Predict the estimated ", Theme::text()),
            Span::styled("selling price", Theme::title()),
            Span::styled(" of a used car based on its specifications.", Theme::text()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "The prediction comes from models trained on historical car data, using:",
            Theme::text(),
        )),
        bullet("Car brand and model"),
        bullet("Year of manufacture"),
        bullet("Fuel type and transmission"),
        bullet("Ownership and mileage"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter (or Tab) to open Predict Price.",
            Theme::warn(),
        )),
    ];

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" HOME ")
                .title_style(Theme::title()),
        )
        .wrap(Wrap { trim: true })
}

pub fn header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled("Car Price Prediction Form", Theme::title())),
        Line::from(Span::styled("Please fill in your car details:", Theme::dim())),
    ])
}

pub fn form_panel() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_active())
        .title(" CAR DETAILS ")
        .title_style(Theme::title())
}

/// One labelled input: label line over the value line
pub fn field(field: &FormField, focused: bool) -> Paragraph<'static> {
    let value = match field {
        FormField::Select(select) => select.value().to_string(),
        FormField::Number(number) => number.display(),
    };
    let style = if focused {
        Theme::field_focused()
    } else {
        Theme::field()
    };

    let mut value_line = vec![Span::styled(format!(" {value} "), style)];
    if focused {
        value_line.push(Span::styled(" ◀ ▶", Theme::dim()));
    }
    if let FormField::Number(number) = field {
        value_line.push(Span::styled(
            format!("  [{}..{}]", number.range.min, number.range.max),
            Theme::muted(),
        ));
    }

    let label_style = if focused { Theme::title() } else { Theme::dim() };
    Paragraph::new(vec![
        Line::from(Span::styled(field.label(), label_style)),
        Line::from(value_line),
    ])
}

pub fn submit_button() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled("  Predict Now (Enter)  ", Theme::button())))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE))
}

pub fn result(
    state: &SubmissionState,
    presenter: &ResultPresenter,
    identity: &ModelIdentity,
) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" PREDICTION RESULTS ")
        .title_style(Theme::title());

    let lines = match state {
        SubmissionState::AwaitingSubmission => vec![Line::from(Span::styled(
            "Fill in the form and press Enter to predict.",
            Theme::muted(),
        ))],
        SubmissionState::ShowingResult(Outcome::Failure(message)) => vec![
            Line::from(Span::styled("Prediction failed", Theme::error())),
            Line::from(Span::styled(message.clone(), Theme::text())),
        ],
        SubmissionState::ShowingResult(Outcome::Success(result)) => {
            let mut lines = vec![
                Line::from(Span::styled("Prediction Successful!", Theme::ok())),
                Line::from(""),
            ];
            let metrics = presenter.metrics(result);
            lines.push(Line::from(
                metrics
                    .iter()
                    .flat_map(|m| {
                        [
                            Span::styled(format!("{}: ", m.label), Theme::dim()),
                            Span::styled(format!("{}    ", m.value), Theme::metric()),
                        ]
                    })
                    .collect::<Vec<_>>(),
            ));

            let details = presenter.model_details(identity);
            if !details.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("Model Details", Theme::title())));
                lines.extend(
                    details
                        .into_iter()
                        .map(|d| Line::from(Span::styled(d, Theme::dim()))),
                );
            }
            lines
        }
    };

    Paragraph::new(lines).block(block).wrap(Wrap { trim: true })
}

pub fn hint(page: Page) -> Paragraph<'static> {
    let keys: &[(&'static str, &'static str)] = match page {
        Page::Home => &[("enter", "open form"), ("tab", "switch page"), ("q", "quit")],
        Page::Predict => &[
            ("↑↓", "field"),
            ("←→ pgup pgdn", "change"),
            ("0-9 / a-z", "type"),
            ("enter", "predict"),
            ("esc", "home"),
        ],
    };

    let spans = keys
        .iter()
        .flat_map(|(key, what)| {
            [
                Span::styled(*key, Theme::dim()),
                Span::styled(format!("  {what}    "), Theme::muted()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
