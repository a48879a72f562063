//! Application state: page navigation and the submission state machine

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::models::InferenceEngine;
use crate::presenter::ResultPresenter;
use crate::reference::InputDomains;
use crate::types::prediction::{ModelIdentity, PredictionResult};

use super::form::{FormEvent, PredictForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Predict,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Predict];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Predict => "Predict Price",
        }
    }
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(PredictionResult),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    AwaitingSubmission,
    ShowingResult(Outcome),
}

pub enum Action {
    None,
    Quit,
}

pub struct App {
    page: Page,
    form: PredictForm,
    state: SubmissionState,
    engine: InferenceEngine,
    presenter: ResultPresenter,
    identity: ModelIdentity,
}

impl App {
    pub fn new(engine: InferenceEngine, domains: &InputDomains, presenter: ResultPresenter) -> Self {
        let identity = engine.identity();
        Self {
            page: Page::Home,
            form: PredictForm::new(domains),
            state: SubmissionState::AwaitingSubmission,
            engine,
            presenter,
            identity,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn form(&self) -> &PredictForm {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn presenter(&self) -> &ResultPresenter {
        &self.presenter
    }

    pub fn identity(&self) -> &ModelIdentity {
        &self.identity
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        if key.code == KeyCode::Tab {
            self.page = match self.page {
                Page::Home => Page::Predict,
                Page::Predict => Page::Home,
            };
            return Action::None;
        }

        match self.page {
            Page::Home => match key.code {
                KeyCode::Enter => {
                    self.page = Page::Predict;
                    Action::None
                }
                KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            },
            Page::Predict => {
                if key.code == KeyCode::Esc {
                    self.page = Page::Home;
                    return Action::None;
                }
                match self.form.handle_key(key.code) {
                    FormEvent::Submit => self.submit(),
                    FormEvent::Edited => self.state = SubmissionState::AwaitingSubmission,
                    FormEvent::Unchanged | FormEvent::Ignored => {}
                }
                Action::None
            }
        }
    }

    /// Run the pipeline on the form's record and show the outcome
    pub fn submit(&mut self) {
        let record = self.form.submit();
        let outcome = match self.engine.predict(&record) {
            Ok(result) => {
                info!(
                    name = %record.name,
                    price = result.price,
                    label = %result.label,
                    cluster = result.cluster,
                    "Prediction successful"
                );
                Outcome::Success(result)
            }
            Err(e) => {
                warn!(name = %record.name, error = %e, "Prediction failed");
                Outcome::Failure(e.to_string())
            }
        };
        self.state = SubmissionState::ShowingResult(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bundle::tests::linear_bundle;
    use crate::types::prediction::PriceLabel;
    use crate::ui::form::tests::domains;
    use std::sync::Arc;

    fn app() -> App {
        let engine = InferenceEngine::new(Arc::new(linear_bundle()));
        App::new(engine, &domains(), ResultPresenter::default())
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation() {
        let mut app = app();
        assert_eq!(app.page(), Page::Home);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.page(), Page::Predict);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.page(), Page::Home);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.page(), Page::Predict);

        assert!(matches!(press(&mut app, KeyCode::Char('q')), Action::None));
        assert!(matches!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        ));
    }

    #[test]
    fn test_failed_submission_keeps_form_usable() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        // Honda City, 2011, 75000, Diesel, Manual, Individual, First Owner
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state(), &SubmissionState::ShowingResult(Outcome::Success(
            PredictionResult {
                // scaled: [-1, -0.25, 0.75, -1, 1, 1, -1]
                price: 400000.0 - 10000.0 - 12500.0 - 30000.0 - 30000.0 - 5000.0 - 60000.0 + 20000.0,
                label: PriceLabel::Low,
                cluster: 0,
            }
        )));

        // Hyundai Verna is not in the encoder
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state(), &SubmissionState::AwaitingSubmission);
        press(&mut app, KeyCode::Enter);
        match app.state() {
            SubmissionState::ShowingResult(Outcome::Failure(message)) => {
                assert!(message.contains("Hyundai Verna 1.6 SX"))
            }
            other => panic!("expected a failed submission, got {other:?}"),
        }

        // back to a known name and the form predicts again
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.state(),
            SubmissionState::ShowingResult(Outcome::Success(_))
        ));
    }

    #[test]
    fn test_focus_move_keeps_result() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.state(), SubmissionState::ShowingResult(_)));

        press(&mut app, KeyCode::Down);
        assert!(matches!(app.state(), SubmissionState::ShowingResult(_)));
    }
}
