// Form state for interactive mode
use crate::analysis::compute;
use crate::models::{InputField, InputSet, ResultSet};

#[derive(Debug, Clone, PartialEq)]
pub enum EditMode {
    Browsing,
    Editing { buffer: String },
}

/// Editable input set plus the results derived from it.
///
/// `inputs` and `results` are private so that every change to the inputs
/// goes through a method that ends in `recompute`.
#[derive(Debug, Clone)]
pub struct FormState {
    inputs: InputSet,
    results: ResultSet,
    pub selected: usize,
    pub mode: EditMode,
    pub show_help: bool,
    defaults: InputSet,
}

impl FormState {
    pub fn new(defaults: InputSet) -> Self {
        let results = compute(&defaults);
        Self {
            inputs: defaults.clone(),
            results,
            selected: 0,
            mode: EditMode::Browsing,
            show_help: false,
            defaults,
        }
    }

    pub fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn selected_field(&self) -> InputField {
        InputField::ALL[self.selected]
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % InputField::ALL.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + InputField::ALL.len() - 1) % InputField::ALL.len();
    }

    /// Enter on a numeric field opens the editor; on the mode field it toggles
    pub fn activate(&mut self) {
        let field = self.selected_field();
        if field.is_numeric() {
            self.mode = EditMode::Editing {
                buffer: self.inputs.display_value(field),
            };
        } else {
            self.toggle_cost_mode();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let EditMode::Editing { buffer } = &mut self.mode {
            if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') {
                buffer.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let EditMode::Editing { buffer } = &mut self.mode {
            buffer.pop();
        }
    }

    /// Store the edit buffer into the selected field
    pub fn commit(&mut self) {
        if let EditMode::Editing { buffer } = std::mem::replace(&mut self.mode, EditMode::Browsing) {
            let field = self.selected_field();
            self.inputs.set_lenient(field, &buffer);
            tracing::debug!(field = field.key(), value = %buffer, "input changed");
            self.recompute();
        }
    }

    pub fn cancel(&mut self) {
        self.mode = EditMode::Browsing;
    }

    pub fn toggle_cost_mode(&mut self) {
        self.inputs.human_cost_mode = self.inputs.human_cost_mode.toggled();
        self.recompute();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn reset(&mut self) {
        self.inputs = self.defaults.clone();
        self.mode = EditMode::Browsing;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.results = compute(&self.inputs);
        tracing::debug!(
            total_api_cost = self.results.total_api_cost,
            total_human_cost = self.results.total_human_cost,
            net_savings = self.results.net_savings,
            finite = self.results.is_finite(),
            "recomputed roi results"
        );
    }
}
