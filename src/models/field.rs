use serde::Serialize;

/// One of the eight fixed text columns of an exercise row.
/// The discriminant is the column index in the `FranklinExercise` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Author = 0,
    Source = 1,
    Original = 2,
    Notes = 3,
    Rewrite = 4,
    Correction = 5,
    Poetry = 6,
    Prose = 7,
}

impl Field {
    /// All fields in column order.
    pub const ALL: [Field; 8] = [
        Field::Author,
        Field::Source,
        Field::Original,
        Field::Notes,
        Field::Rewrite,
        Field::Correction,
        Field::Poetry,
        Field::Prose,
    ];

    /// Column name in the database (also used as header text).
    pub fn name(&self) -> &'static str {
        match self {
            Field::Author => "Author",
            Field::Source => "Source",
            Field::Original => "Original",
            Field::Notes => "Notes",
            Field::Rewrite => "Rewrite",
            Field::Correction => "Correction",
            Field::Poetry => "Poetry",
            Field::Prose => "Prose",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a field name typed by the user (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "author" => Some(Field::Author),
            "source" => Some(Field::Source),
            "original" => Some(Field::Original),
            "notes" => Some(Field::Notes),
            "rewrite" => Some(Field::Rewrite),
            "correction" | "corrections" => Some(Field::Correction),
            "poetry" => Some(Field::Poetry),
            "prose" => Some(Field::Prose),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
