//! The in-memory mirror of the remote task collection.

use crate::error::TodoError;
use crate::store::StoreError;
use crate::task::Task;

/// Everything a rendering layer needs: the tasks, whether the initial fetch is
/// still outstanding, and at most one error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoState {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for TodoState {
    /// The state right after mount: loading, nothing fetched yet.
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl TodoState {
    /// A settled state holding `tasks`, as if the initial fetch had succeeded.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            loading: false,
            error: None,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies the outcome of the list fetch. On failure the collection is left
    /// empty and the error slot is filled.
    pub fn finish_load(&mut self, result: Result<Vec<Task>, StoreError>) -> Result<(), TodoError> {
        self.loading = false;
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                Ok(())
            }
            Err(e) => {
                let error = TodoError::Load(e);
                self.tasks.clear();
                self.fail(&error);
                Err(error)
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Overwrites the error slot with the message of `error`.
    pub fn fail(&mut self, error: &TodoError) {
        tracing::error!("{}", error);
        self.error = Some(error.to_string());
    }

    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Tasks to render, or `None` while the initial fetch is outstanding.
    pub fn visible_tasks(&self) -> Option<&[Task]> {
        if self.loading {
            None
        } else {
            Some(&self.tasks)
        }
    }
}

/// Single owner of a [`TodoState`].
///
/// Updates go through a closure so that no borrow of the state is held while
/// a request is in flight.
pub trait StateHolder {
    fn update<R>(&mut self, f: impl FnOnce(&mut TodoState) -> R) -> R;
}

impl StateHolder for TodoState {
    fn update<R>(&mut self, f: impl FnOnce(&mut TodoState) -> R) -> R {
        f(self)
    }
}
