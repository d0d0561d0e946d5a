//! # Task-list state machine
//!
//! [`TaskListState`] is everything the task view knows: the cached list, the
//! add-form draft, the edit buffer, what is in flight, and the last error.
//! It never talks to the network. Each operation is split in two:
//!
//! - `begin_*` checks what can be checked locally (session present, fields
//!   filled in), marks the operation in flight and hands back a [`Ticket`]
//!   plus the request to send. A local refusal records the error and
//!   returns `Err`; nothing is sent.
//! - `finish_*` takes the ticket and the gateway's answer and applies it.
//!   Successful create/update apply the server's copy of the task, never the
//!   local draft. Failures leave the list untouched and record the message.
//!
//! ## Stale responses
//!
//! Every ticket is stamped with the state's epoch. [`TaskListState::set_session`]
//! (sign-out, or a different user) advances the epoch, and `finish_*` with an
//! older ticket is a no-op that returns `false`. Component-scoped tasks are
//! also dropped on unmount, so a response for a view that no longer exists is
//! never applied.
//!
//! ## In-flight tracking
//!
//! List fetch, create and save count towards [`is_loading`](TaskListState::is_loading),
//! which disables the add/edit form. Toggle and delete mark only their own row
//! busy, so other rows stay interactive. Concurrent edits to the same task
//! from elsewhere are last-write-wins; there is no version check.

use std::collections::BTreeSet;

use api::ApiError;
use store::{NewTask, Session, Task, TaskFields, TaskPatch};

/// Proof that a request was started under a given session and epoch.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticket {
    epoch: u64,
    session: Session,
}

impl Ticket {
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Scratch copy of one task's editable fields.
#[derive(Clone, Debug, PartialEq)]
pub struct EditBuffer {
    pub id: String,
    pub fields: TaskFields,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskListState {
    session: Option<Session>,
    tasks: Vec<Task>,
    /// Add-form fields.
    pub draft: TaskFields,
    editing: Option<EditBuffer>,
    pending: usize,
    loaded: bool,
    busy: BTreeSet<String>,
    error: Option<String>,
    epoch: u64,
}

impl TaskListState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// A fetch, create or save is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// The first fetch has come back (successfully or not).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// A toggle or delete for this row is in flight.
    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.contains(id)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn editing(&self) -> Option<&EditBuffer> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id == id)
    }

    /// Fields of the task being edited, for binding to inputs.
    pub fn edit_fields_mut(&mut self) -> Option<&mut TaskFields> {
        self.editing.as_mut().map(|e| &mut e.fields)
    }

    /// Switch to another session (or none). Drops everything tied to the old
    /// one and invalidates outstanding tickets.
    pub fn set_session(&mut self, session: Option<Session>) {
        let epoch = self.epoch + 1;
        *self = Self {
            session,
            epoch,
            ..Self::default()
        };
    }

    fn ticket(&self) -> Result<Ticket, ApiError> {
        let session = self.session.clone().ok_or(ApiError::NotSignedIn)?;
        Ok(Ticket {
            epoch: self.epoch,
            session,
        })
    }

    fn refuse<T>(&mut self, err: ApiError) -> Result<T, ApiError> {
        tracing::debug!("Refused locally: {}", err);
        self.error = Some(err.to_string());
        Err(err)
    }

    fn accept(&self, ticket: &Ticket) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!("Discarding response from a previous session");
            return false;
        }
        true
    }

    fn fail(&mut self, err: ApiError) {
        self.error = Some(err.to_string());
    }

    fn replace(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task,
            None => tracing::debug!("Task {} is no longer listed; ignoring update", task.id),
        }
    }

    fn find(&self, id: &str) -> Result<&Task, ApiError> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::Invalid("That task is no longer in the list".to_string()))
    }

    pub fn begin_load(&mut self) -> Result<Ticket, ApiError> {
        let ticket = match self.ticket() {
            Ok(ticket) => ticket,
            Err(e) => return self.refuse(e),
        };
        self.pending += 1;
        Ok(ticket)
    }

    pub fn finish_load(&mut self, ticket: &Ticket, result: Result<Vec<Task>, ApiError>) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        self.pending = self.pending.saturating_sub(1);
        self.loaded = true;
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error = None;
            }
            Err(e) => self.fail(e),
        }
        true
    }

    /// Validate the draft and build the create request.
    pub fn begin_create(&mut self) -> Result<(Ticket, NewTask), ApiError> {
        let ticket = match self.ticket() {
            Ok(ticket) => ticket,
            Err(e) => return self.refuse(e),
        };
        let fields = match self.draft.validate() {
            Ok(fields) => fields,
            Err(e) => return self.refuse(e.into()),
        };
        self.pending += 1;
        let task = NewTask {
            fields,
            user_id: ticket.session.user_id().to_string(),
        };
        Ok((ticket, task))
    }

    /// Append the server's task and clear the draft.
    pub fn finish_create(&mut self, ticket: &Ticket, result: Result<Task, ApiError>) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        self.pending = self.pending.saturating_sub(1);
        match result {
            Ok(task) => {
                self.tasks.push(task);
                self.draft = TaskFields::default();
                self.error = None;
            }
            Err(e) => self.fail(e),
        }
        true
    }

    /// Enter edit mode for `id`, seeding the buffer from the listed task.
    pub fn start_edit(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            return false;
        };
        self.editing = Some(EditBuffer {
            id: task.id.clone(),
            fields: task.fields(),
        });
        true
    }

    /// Leave edit mode without sending anything.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validate the edit buffer and build the update request.
    pub fn begin_save(&mut self) -> Result<(Ticket, String, TaskPatch), ApiError> {
        let ticket = match self.ticket() {
            Ok(ticket) => ticket,
            Err(e) => return self.refuse(e),
        };
        let Some(buffer) = self.editing.as_ref() else {
            return self.refuse(ApiError::Invalid("No task is being edited".to_string()));
        };
        let id = buffer.id.clone();
        let fields = match buffer.fields.validate() {
            Ok(fields) => fields,
            Err(e) => return self.refuse(e.into()),
        };
        self.pending += 1;
        Ok((ticket, id, TaskPatch::fields(fields)))
    }

    /// Replace the edited row with the server's copy and leave edit mode.
    pub fn finish_save(&mut self, ticket: &Ticket, id: &str, result: Result<Task, ApiError>) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        self.pending = self.pending.saturating_sub(1);
        match result {
            Ok(task) => {
                self.replace(task);
                if self.is_editing(id) {
                    self.editing = None;
                }
                self.error = None;
            }
            Err(e) => self.fail(e),
        }
        true
    }

    /// Build a patch that flips `completed` relative to the listed value.
    pub fn begin_toggle(&mut self, id: &str) -> Result<(Ticket, TaskPatch), ApiError> {
        let ticket = match self.ticket() {
            Ok(ticket) => ticket,
            Err(e) => return self.refuse(e),
        };
        let completed = match self.find(id) {
            Ok(task) => task.completed,
            Err(e) => return self.refuse(e),
        };
        if !self.busy.insert(id.to_string()) {
            return self.refuse(ApiError::Invalid(
                "That task is still being updated".to_string(),
            ));
        }
        Ok((ticket, TaskPatch::completed(!completed)))
    }

    pub fn finish_toggle(&mut self, ticket: &Ticket, id: &str, result: Result<Task, ApiError>) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        self.busy.remove(id);
        match result {
            Ok(task) => {
                self.replace(task);
                self.error = None;
            }
            Err(e) => self.fail(e),
        }
        true
    }

    pub fn begin_delete(&mut self, id: &str) -> Result<Ticket, ApiError> {
        let ticket = match self.ticket() {
            Ok(ticket) => ticket,
            Err(e) => return self.refuse(e),
        };
        if let Err(e) = self.find(id) {
            return self.refuse(e);
        }
        if !self.busy.insert(id.to_string()) {
            return self.refuse(ApiError::Invalid(
                "That task is still being updated".to_string(),
            ));
        }
        Ok(ticket)
    }

    /// Drop the row, but only once the server confirmed.
    pub fn finish_delete(&mut self, ticket: &Ticket, id: &str, result: Result<(), ApiError>) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        self.busy.remove(id);
        match result {
            Ok(()) => {
                self.tasks.retain(|t| t.id != id);
                if self.is_editing(id) {
                    self.editing = None;
                }
                self.error = None;
            }
            Err(e) => self.fail(e),
        }
        true
    }
}
