//! Durable table of exercises with positional access and change
//! notifications.
//!
//! Every mutating call commits before it returns. Precondition failures
//! (offset out of range, insert not at the end, unchanged value) are not
//! errors: they return `false` and leave the table and the listeners alone.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::exercise::Exercise;
use crate::models::field::Field;

/// What changed in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// Exactly one field of one row was rewritten.
    FieldChanged { offset: usize, field: Field },
    /// A row was appended at `offset`. Emitted before the commit.
    RowInserted { offset: usize },
    /// The row at `offset` was deleted; later rows moved up by one.
    /// Emitted before the commit.
    RowRemoved { offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct ExerciseStore {
    pool: DbPool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ExerciseStore {
    /// Wrap an opened database, creating the schema if needed.
    pub fn open(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            listeners: Vec::new(),
            next_id: 0,
        })
    }

    pub fn open_path(path: &str) -> AppResult<Self> {
        Self::open(DbPool::new(path)?)
    }

    /// Underlying connection, for the audit log and session table.
    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }

    pub fn row_count(&self) -> AppResult<usize> {
        Ok(queries::count_rows(&self.pool.conn)?)
    }

    pub fn get_row(&self, offset: usize) -> AppResult<Option<Exercise>> {
        Ok(queries::load_row(&self.pool.conn, offset)?)
    }

    pub fn get_field(&self, offset: usize, field: Field) -> AppResult<Option<String>> {
        Ok(queries::load_field(&self.pool.conn, offset, field)?)
    }

    /// All rows in positional order.
    pub fn rows(&self) -> AppResult<Vec<Exercise>> {
        Ok(queries::load_all(&self.pool.conn)?)
    }

    /// Write one field. Returns `false` when the row does not exist or the
    /// value is already stored.
    pub fn set_field(&mut self, offset: usize, field: Field, value: &str) -> AppResult<bool> {
        match queries::load_field(&self.pool.conn, offset, field)? {
            None => return Ok(false),
            Some(current) if current == value => return Ok(false),
            Some(_) => {}
        }

        queries::update_field(&self.pool.conn, offset, field, value)?;
        self.notify(&StoreEvent::FieldChanged { offset, field });
        Ok(true)
    }

    /// Append an empty row. Only legal at `offset == row_count()`.
    pub fn insert_row(&mut self, offset: usize) -> AppResult<bool> {
        if offset != self.row_count()? {
            return Ok(false);
        }

        let tx = self.pool.conn.transaction()?;
        queries::insert_default(&tx)?;
        Self::notify_all(&mut self.listeners, &StoreEvent::RowInserted { offset });
        tx.commit()?;
        Ok(true)
    }

    /// Delete the row at `offset`. Only legal for `offset < row_count()`.
    pub fn remove_row(&mut self, offset: usize) -> AppResult<bool> {
        if offset >= self.row_count()? {
            return Ok(false);
        }

        let tx = self.pool.conn.transaction()?;
        queries::delete_at(&tx, offset)?;
        Self::notify_all(&mut self.listeners, &StoreEvent::RowRemoved { offset });
        tx.commit()?;
        Ok(true)
    }

    /// Register a listener called for every subsequent event.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: &StoreEvent) {
        Self::notify_all(&mut self.listeners, event);
    }

    // Takes the listener list only: insert/remove call it while the
    // transaction holds `self.pool`.
    fn notify_all(listeners: &mut [(SubscriptionId, Listener)], event: &StoreEvent) {
        for (_, listener) in listeners.iter_mut() {
            listener(event);
        }
    }
}
