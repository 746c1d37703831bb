//! List-screen state
//!
//! A `TableView` holds the fetched rows of one screen and the current search
//! text. A deleted row is dropped only after upstream confirms the delete.

use crate::api::ApiResponse;
use std::future::Future;

/// Fetch state of a screen's data
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<ApiResponse<T>> for LoadState<T> {
    fn from(response: ApiResponse<T>) -> Self {
        match response.into_result() {
            Ok(data) => LoadState::Loaded(data),
            Err(message) => LoadState::Failed(message),
        }
    }
}

/// Rows that can be filtered by the search box and removed by id
pub trait Searchable {
    fn row_id(&self) -> String;

    /// Text fields matched against the search term
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Result of a delete action on a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The confirmation was declined; nothing was sent
    Cancelled,
    Deleted,
    /// Upstream refused; the row stays and the message is shown to the user
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct TableView<T> {
    state: LoadState<Vec<T>>,
    search: String,
}

impl<T> Default for TableView<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Loading,
            search: String::new(),
        }
    }
}

impl<T: Searchable> TableView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(rows: Vec<T>) -> Self {
        Self {
            state: LoadState::Loaded(rows),
            search: String::new(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            state: LoadState::Failed(message.into()),
            search: String::new(),
        }
    }

    pub fn from_response(response: ApiResponse<Vec<T>>) -> Self {
        Self {
            state: response.into(),
            search: String::new(),
        }
    }

    pub fn state(&self) -> &LoadState<Vec<T>> {
        &self.state
    }

    pub fn rows(&self) -> &[T] {
        match &self.state {
            LoadState::Loaded(rows) => rows,
            _ => &[],
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Rows matching the search term, in fetch order
    pub fn visible_rows(&self) -> Vec<&T> {
        self.rows()
            .iter()
            .filter(|row| row.matches(&self.search))
            .collect()
    }

    pub fn remove(&mut self, id: &str) -> bool {
        match &mut self.state {
            LoadState::Loaded(rows) => {
                let before = rows.len();
                rows.retain(|row| row.row_id() != id);
                rows.len() != before
            }
            _ => false,
        }
    }

    /// Delete a row after the user confirmed. The row is removed locally
    /// only when upstream reports success.
    pub async fn delete<F, Fut>(&mut self, id: &str, confirmed: bool, delete: F) -> DeleteOutcome
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = ApiResponse<()>>,
    {
        if !confirmed {
            return DeleteOutcome::Cancelled;
        }

        match delete(id.to_string()).await {
            ApiResponse::Success { .. } => {
                self.remove(id);
                DeleteOutcome::Deleted
            }
            ApiResponse::Failure { message } => {
                tracing::warn!(id, "Delete failed: {}", message);
                DeleteOutcome::Failed(message)
            }
        }
    }
}
