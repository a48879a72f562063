//! The prediction form: seven fields restricted to the input domains

use crossterm::event::KeyCode;

use crate::reference::{InputDomains, NumericRange};
use crate::types::car::{CarRecord, CategoricalField, NumericField};

/// Longest digit buffer a number field accepts
const MAX_DIGITS: usize = 12;

/// A select box over the sorted options of a categorical column.
#[derive(Debug, Clone)]
pub struct SelectField {
    pub field: CategoricalField,
    pub options: Vec<String>,
    pub selected: usize,
}

impl SelectField {
    pub fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn cycle(&mut self, forward: bool) {
        let n = self.options.len();
        if n == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % n
        } else {
            (self.selected + n - 1) % n
        };
    }

    /// Jump to the next option starting with `ch`, wrapping around
    fn jump_to(&mut self, ch: char) -> bool {
        let n = self.options.len();
        let target = ch.to_lowercase().collect::<String>();
        let hit = (1..=n)
            .map(|offset| (self.selected + offset) % n)
            .find(|&idx| self.options[idx].to_lowercase().starts_with(&target));
        match hit {
            Some(idx) if idx != self.selected => {
                self.selected = idx;
                true
            }
            _ => false,
        }
    }
}

/// A bounded integer input with a pending digit buffer.
#[derive(Debug, Clone)]
pub struct NumberField {
    pub field: NumericField,
    pub range: NumericRange,
    pub value: i64,
    /// Digits typed since the last commit
    pub buffer: Option<String>,
}

impl NumberField {
    fn step(&self) -> i64 {
        match self.field {
            NumericField::Year => 1,
            NumericField::KmDriven => 1000,
        }
    }

    fn set(&mut self, value: i64) -> bool {
        let value = self.range.clamp(value);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    fn nudge(&mut self, steps: i64) -> bool {
        let commit = self.commit();
        let target = self.value.saturating_add(steps.saturating_mul(self.step()));
        self.set(target) || commit
    }

    /// Parse and clamp the digit buffer. An empty or unparsable buffer keeps
    /// the previous value.
    pub fn commit(&mut self) -> bool {
        match self.buffer.take() {
            Some(digits) => match digits.parse::<i64>() {
                Ok(value) => self.set(value),
                Err(_) => false,
            },
            None => false,
        }
    }

    /// What the field shows: the pending buffer, else the committed value
    pub fn display(&self) -> String {
        match &self.buffer {
            Some(digits) => digits.clone(),
            None => self.value.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FormField {
    Select(SelectField),
    Number(NumberField),
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Select(select) => select.field.label(),
            FormField::Number(number) => number.field.label(),
        }
    }
}

/// What a key press did to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Ignored,
    /// Handled (focus move, no-op step) without changing any value
    Unchanged,
    /// A field value or digit buffer changed
    Edited,
    Submit,
}

#[derive(Debug, Clone)]
pub struct PredictForm {
    fields: Vec<FormField>,
    focus: usize,
}

impl PredictForm {
    /// Build the form with every select on its first option and every
    /// number on its median default.
    pub fn new(domains: &InputDomains) -> Self {
        let select = |field: CategoricalField| {
            FormField::Select(SelectField {
                field,
                options: domains.options(field).to_vec(),
                selected: 0,
            })
        };
        let number = |field: NumericField| {
            let range = domains.range(field);
            FormField::Number(NumberField {
                field,
                range,
                value: range.default,
                buffer: None,
            })
        };

        // left column, then right column
        let fields = vec![
            select(CategoricalField::Name),
            number(NumericField::Year),
            select(CategoricalField::Fuel),
            select(CategoricalField::Transmission),
            number(NumericField::KmDriven),
            select(CategoricalField::SellerType),
            select(CategoricalField::Owner),
        ];

        Self { fields, focus: 0 }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Fields shown in the left column; the rest go right
    pub fn left_column_len(&self) -> usize {
        4
    }

    pub fn handle_key(&mut self, key: KeyCode) -> FormEvent {
        match key {
            KeyCode::Enter => FormEvent::Submit,
            KeyCode::Up | KeyCode::BackTab => self.move_focus(false),
            KeyCode::Down => self.move_focus(true),
            _ => {
                let edited = match &mut self.fields[self.focus] {
                    FormField::Select(select) => Self::select_key(select, key),
                    FormField::Number(number) => Self::number_key(number, key),
                };
                match edited {
                    Some(true) => FormEvent::Edited,
                    Some(false) => FormEvent::Unchanged,
                    None => FormEvent::Ignored,
                }
            }
        }
    }

    /// `None` if the key means nothing to a select, else whether it changed
    fn select_key(select: &mut SelectField, key: KeyCode) -> Option<bool> {
        let before = select.selected;
        match key {
            KeyCode::Left => select.cycle(false),
            KeyCode::Right => select.cycle(true),
            KeyCode::Home => select.selected = 0,
            KeyCode::End => select.selected = select.options.len().saturating_sub(1),
            KeyCode::Char(ch) if !ch.is_control() => return Some(select.jump_to(ch)),
            _ => return None,
        }
        Some(select.selected != before)
    }

    fn number_key(number: &mut NumberField, key: KeyCode) -> Option<bool> {
        let changed = match key {
            KeyCode::Left => number.nudge(-1),
            KeyCode::Right => number.nudge(1),
            KeyCode::PageDown => number.nudge(-10),
            KeyCode::PageUp => number.nudge(10),
            KeyCode::Home => {
                number.buffer = None;
                number.set(number.range.min)
            }
            KeyCode::End => {
                number.buffer = None;
                number.set(number.range.max)
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                let buffer = number.buffer.get_or_insert_with(String::new);
                if buffer.len() >= MAX_DIGITS {
                    return Some(false);
                }
                buffer.push(ch);
                true
            }
            KeyCode::Backspace => {
                let current = number.display();
                let buffer = number.buffer.get_or_insert(current);
                buffer.pop().is_some()
            }
            _ => return None,
        };
        Some(changed)
    }

    fn move_focus(&mut self, forward: bool) -> FormEvent {
        let edited = self.commit_focused();
        let n = self.fields.len();
        self.focus = if forward {
            (self.focus + 1) % n
        } else {
            (self.focus + n - 1) % n
        };
        if edited {
            FormEvent::Edited
        } else {
            FormEvent::Unchanged
        }
    }

    fn commit_focused(&mut self) -> bool {
        match &mut self.fields[self.focus] {
            FormField::Number(number) => number.commit(),
            FormField::Select(_) => false,
        }
    }

    /// Commit pending input and collect the fully-populated record
    pub fn submit(&mut self) -> CarRecord {
        for field in &mut self.fields {
            if let FormField::Number(number) = field {
                number.commit();
            }
        }
        self.record()
    }

    /// The record as currently committed
    pub fn record(&self) -> CarRecord {
        let mut record = CarRecord {
            name: String::new(),
            year: 0,
            km_driven: 0,
            fuel: String::new(),
            seller_type: String::new(),
            transmission: String::new(),
            owner: String::new(),
        };

        for field in &self.fields {
            match field {
                FormField::Select(select) => {
                    let value = select.value().to_string();
                    match select.field {
                        CategoricalField::Name => record.name = value,
                        CategoricalField::Fuel => record.fuel = value,
                        CategoricalField::SellerType => record.seller_type = value,
                        CategoricalField::Transmission => record.transmission = value,
                        CategoricalField::Owner => record.owner = value,
                    }
                }
                FormField::Number(number) => match number.field {
                    NumericField::Year => record.year = number.value,
                    NumericField::KmDriven => record.km_driven = number.value,
                },
            }
        }

        record
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::reference::{Listing, ReferenceDataset};

    pub(crate) fn domains() -> InputDomains {
        let listing = |name: &str, year, km_driven, fuel: &str, owner: &str| Listing {
            name: name.to_string(),
            year,
            km_driven,
            fuel: fuel.to_string(),
            seller_type: "Individual".to_string(),
            transmission: "Manual".to_string(),
            owner: owner.to_string(),
        };
        ReferenceDataset::from_listings(vec![
            listing("Maruti Swift Dzire VDI", 2015, 50000, "Diesel", "First Owner"),
            listing("Hyundai Verna 1.6 SX", 2012, 100000, "Diesel", "Second Owner"),
            listing("Honda City 1.5 V AT", 2010, 80000, "Petrol", "First Owner"),
            listing("Maruti 800 AC", 2007, 70000, "Petrol", "Third Owner"),
        ])
        .unwrap()
        .domains()
    }

    fn press(form: &mut PredictForm, keys: &[KeyCode]) -> Vec<FormEvent> {
        keys.iter().map(|&key| form.handle_key(key)).collect()
    }

    #[test]
    fn test_defaults() {
        let mut form = PredictForm::new(&domains());
        let record = form.submit();

        assert_eq!(record.name, "Honda City 1.5 V AT");
        assert_eq!(record.fuel, "Diesel");
        assert_eq!(record.owner, "First Owner");
        // medians of [2007, 2010, 2012, 2015] and [50000, 70000, 80000, 100000]
        assert_eq!(record.year, 2011);
        assert_eq!(record.km_driven, 75000);
    }

    #[test]
    fn test_select_cycles_and_wraps() {
        let mut form = PredictForm::new(&domains());

        assert_eq!(form.handle_key(KeyCode::Left), FormEvent::Edited);
        assert_eq!(form.record().name, "Maruti Swift Dzire VDI");
        form.handle_key(KeyCode::Right);
        assert_eq!(form.record().name, "Honda City 1.5 V AT");
        form.handle_key(KeyCode::End);
        assert_eq!(form.record().name, "Maruti Swift Dzire VDI");
    }

    #[test]
    fn test_type_to_jump() {
        let mut form = PredictForm::new(&domains());

        form.handle_key(KeyCode::Char('m'));
        assert_eq!(form.record().name, "Maruti 800 AC");
        form.handle_key(KeyCode::Char('M'));
        assert_eq!(form.record().name, "Maruti Swift Dzire VDI");
        assert_eq!(form.handle_key(KeyCode::Char('z')), FormEvent::Unchanged);
    }

    #[test]
    fn test_year_steps_are_clamped() {
        let mut form = PredictForm::new(&domains());
        form.handle_key(KeyCode::Down);

        form.handle_key(KeyCode::Right);
        assert_eq!(form.record().year, 2012);
        form.handle_key(KeyCode::PageUp);
        assert_eq!(form.record().year, 2015);
        assert_eq!(form.handle_key(KeyCode::Right), FormEvent::Unchanged);
        form.handle_key(KeyCode::Home);
        assert_eq!(form.record().year, 2007);
    }

    #[test]
    fn test_km_typing_commits_on_focus_change() {
        let mut form = PredictForm::new(&domains());
        press(&mut form, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(form.fields()[form.focus()].label(), "Kilometers Driven");

        press(&mut form, &[KeyCode::Char('9'), KeyCode::Char('0'), KeyCode::Char('0')]);
        // not committed yet
        assert_eq!(form.record().km_driven, 75000);

        assert_eq!(form.handle_key(KeyCode::Down), FormEvent::Edited);
        // 900 is below the observed minimum
        assert_eq!(form.record().km_driven, 50000);
    }

    #[test]
    fn test_km_step_and_submit_commits_buffer() {
        let mut form = PredictForm::new(&domains());
        press(&mut form, &[KeyCode::Up, KeyCode::Up, KeyCode::Up]);

        form.handle_key(KeyCode::Right);
        assert_eq!(form.record().km_driven, 76000);

        // "76000" -> "760" -> "76050"
        press(
            &mut form,
            &[KeyCode::Backspace, KeyCode::Backspace, KeyCode::Char('5'), KeyCode::Char('0')],
        );
        assert_eq!(form.handle_key(KeyCode::Enter), FormEvent::Submit);
        assert_eq!(form.submit().km_driven, 76050);
    }

    #[test]
    fn test_empty_buffer_keeps_value() {
        let mut form = PredictForm::new(&domains());
        form.handle_key(KeyCode::Down);

        for _ in 0..4 {
            form.handle_key(KeyCode::Backspace);
        }
        assert_eq!(form.submit().year, 2011);
    }

    #[test]
    fn test_every_option_is_from_the_dataset() {
        let domains = domains();
        let form = PredictForm::new(&domains);

        for field in form.fields() {
            if let FormField::Select(select) = field {
                assert_eq!(select.options, domains.options(select.field));
            }
        }
    }
}
