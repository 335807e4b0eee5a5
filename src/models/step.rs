use crate::models::field::Field;
use serde::Serialize;

/// The six stages of the exercise. Any stage can be entered from any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Step {
    #[default]
    TakeNotes,
    Reconstruct,
    Corrections,
    AsPoetry,
    BackToProse,
    Jumble,
}

/// A field shown while a step is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub field: Field,
    pub editable: bool,
}

const fn edit(field: Field) -> Panel {
    Panel {
        field,
        editable: true,
    }
}

const fn read(field: Field) -> Panel {
    Panel {
        field,
        editable: false,
    }
}

impl Step {
    /// 1-based step number as shown to the user.
    pub fn number(&self) -> u8 {
        match self {
            Step::TakeNotes => 1,
            Step::Reconstruct => 2,
            Step::Corrections => 3,
            Step::AsPoetry => 4,
            Step::BackToProse => 5,
            Step::Jumble => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Step::TakeNotes),
            2 => Some(Step::Reconstruct),
            3 => Some(Step::Corrections),
            4 => Some(Step::AsPoetry),
            5 => Some(Step::BackToProse),
            6 => Some(Step::Jumble),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::TakeNotes => "1. Take Notes",
            Step::Reconstruct => "2. Reconstruct",
            Step::Corrections => "3. Corrections",
            Step::AsPoetry => "4. As Poetry",
            Step::BackToProse => "5. Back to Prose",
            Step::Jumble => "6. Jumble",
        }
    }

    /// Fields visible in this step, in display order. Everything else is hidden.
    pub fn panels(&self) -> &'static [Panel] {
        const TAKE_NOTES: [Panel; 4] = [
            edit(Field::Author),
            edit(Field::Source),
            edit(Field::Original),
            edit(Field::Notes),
        ];
        const RECONSTRUCT: [Panel; 2] = [read(Field::Notes), edit(Field::Rewrite)];
        const CORRECTIONS: [Panel; 2] = [read(Field::Original), edit(Field::Correction)];
        const AS_POETRY: [Panel; 2] = [read(Field::Correction), edit(Field::Poetry)];
        const BACK_TO_PROSE: [Panel; 2] = [read(Field::Poetry), edit(Field::Prose)];

        match self {
            Step::TakeNotes => &TAKE_NOTES,
            Step::Reconstruct => &RECONSTRUCT,
            Step::Corrections => &CORRECTIONS,
            Step::AsPoetry => &AS_POETRY,
            Step::BackToProse => &BACK_TO_PROSE,
            Step::Jumble => &[],
        }
    }

    pub fn is_editable(&self, field: Field) -> bool {
        self.panels().iter().any(|p| p.field == field && p.editable)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
