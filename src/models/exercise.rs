//! One row of the exercise table.

use crate::models::field::Field;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub author: String,
    pub source: String,
    pub original: String,
    pub notes: String,
    pub rewrite: String,
    pub correction: String,
    pub poetry: String,
    pub prose: String,
}

impl Exercise {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Author => &self.author,
            Field::Source => &self.source,
            Field::Original => &self.original,
            Field::Notes => &self.notes,
            Field::Rewrite => &self.rewrite,
            Field::Correction => &self.correction,
            Field::Poetry => &self.poetry,
            Field::Prose => &self.prose,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Author => &mut self.author,
            Field::Source => &mut self.source,
            Field::Original => &mut self.original,
            Field::Notes => &mut self.notes,
            Field::Rewrite => &mut self.rewrite,
            Field::Correction => &mut self.correction,
            Field::Poetry => &mut self.poetry,
            Field::Prose => &mut self.prose,
        };
        *slot = value;
    }

    /// Values in column order, as written by the CSV export.
    pub fn values(&self) -> [&str; 8] {
        Field::ALL.map(|f| self.get(f))
    }
}
