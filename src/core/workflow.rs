//! Drives one exercise through the six steps.
//!
//! The controller holds a buffer with the eight fields of the selected row.
//! Edits go to the buffer and, one field at a time, through the store.
//! Moving between steps only changes what is shown and editable, with one
//! exception: going from Reconstruct to Corrections seeds the corrections
//! with the rewrite.

use crate::core::jumble::{Jumble, note_lines};
use crate::core::store::{ExerciseStore, StoreEvent};
use crate::db::session::SessionState;
use crate::errors::AppResult;
use crate::models::exercise::Exercise;
use crate::models::field::Field;
use crate::models::step::Step;
use rand::Rng;

/// Asked before replacing non-empty corrections with the rewrite.
pub trait OverwritePrompt {
    fn confirm_overwrite(&mut self) -> bool;
}

/// A fixed answer.
impl OverwritePrompt for bool {
    fn confirm_overwrite(&mut self) -> bool {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Written,
    /// Same value as stored: nothing persisted.
    Unchanged,
    /// The field is hidden or read-only in the current step.
    NotEditable,
    NoSelection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub field: Field,
    pub editable: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub step: Step,
    pub selected: Option<usize>,
    pub panels: Vec<PanelView>,
}

#[derive(Debug, Default)]
pub struct WorkflowController {
    selected: Option<usize>,
    step: Step,
    buffer: Exercise,
}

impl WorkflowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// The fields of the selected row as last loaded or edited.
    pub fn buffer(&self) -> &Exercise {
        &self.buffer
    }

    /// Load row `offset` and go back to the first step.
    /// An offset past the end clears the selection and returns `false`.
    pub fn select(&mut self, store: &ExerciseStore, offset: usize) -> AppResult<bool> {
        match store.get_row(offset)? {
            Some(row) => {
                self.buffer = row;
                self.selected = Some(offset);
                self.step = Step::TakeNotes;
                Ok(true)
            }
            None => {
                self.clear();
                Ok(false)
            }
        }
    }

    fn clear(&mut self) {
        self.selected = None;
        self.buffer = Exercise::default();
    }

    /// Rebuild the controller from a persisted session without running any
    /// step transition.
    pub fn restore(&mut self, store: &ExerciseStore, state: SessionState) -> AppResult<()> {
        match state.row {
            Some(offset) => {
                self.select(store, offset)?;
            }
            None => self.clear(),
        }
        self.step = state.step;
        Ok(())
    }

    pub fn session_state(&self) -> SessionState {
        SessionState {
            row: self.selected,
            step: self.step,
        }
    }

    /// Switch to `step`. No step is gated on another.
    pub fn enter_step<P>(
        &mut self,
        store: &mut ExerciseStore,
        step: Step,
        prompt: &mut P,
    ) -> AppResult<StepView>
    where
        P: OverwritePrompt + ?Sized,
    {
        let previous = self.step;
        self.step = step;

        if step == Step::Corrections
            && previous == Step::Reconstruct
            && let Some(offset) = self.selected
            && (self.buffer.correction.is_empty() || prompt.confirm_overwrite())
        {
            let rewrite = self.buffer.rewrite.clone();
            store.set_field(offset, Field::Correction, &rewrite)?;
            self.buffer.correction = rewrite;
        }

        Ok(self.view())
    }

    /// Edit one field of the selected row and write it through the store.
    pub fn edit(
        &mut self,
        store: &mut ExerciseStore,
        field: Field,
        value: &str,
    ) -> AppResult<EditOutcome> {
        let Some(offset) = self.selected else {
            return Ok(EditOutcome::NoSelection);
        };
        if !self.step.is_editable(field) {
            return Ok(EditOutcome::NotEditable);
        }

        self.buffer.set(field, value.to_string());
        if store.set_field(offset, field, value)? {
            Ok(EditOutcome::Written)
        } else {
            Ok(EditOutcome::Unchanged)
        }
    }

    pub fn view(&self) -> StepView {
        let panels = if self.selected.is_some() {
            self.step
                .panels()
                .iter()
                .map(|p| PanelView {
                    field: p.field,
                    editable: p.editable,
                    text: self.buffer.get(p.field).to_string(),
                })
                .collect()
        } else {
            Vec::new()
        };

        StepView {
            step: self.step,
            selected: self.selected,
            panels,
        }
    }

    /// Keep the selected offset in line with positional compaction.
    pub fn on_store_event(&mut self, event: &StoreEvent) {
        if let StoreEvent::RowRemoved { offset } = *event {
            match self.selected {
                Some(s) if s == offset => self.clear(),
                Some(s) if s > offset => self.selected = Some(s - 1),
                _ => {}
            }
        }
    }

    /// Shuffle the notes of the selected row.
    pub fn jumble<R: Rng + ?Sized>(&self, rng: &mut R) -> Jumble {
        Jumble::from_notes(&self.buffer.notes, rng)
    }

    /// Notes lines in original order.
    pub fn reveal(&self) -> Vec<String> {
        note_lines(&self.buffer.notes)
    }
}
