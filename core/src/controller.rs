//! Keeps the screen's employee list in step with the remote collection.
//!
//! # Design
//! `CollectionSyncController` owns two independent pieces of state: the
//! collection cache (the last successfully fetched list, replaced wholesale)
//! and the edit buffer. Every operation takes `&mut self` and blocks on the
//! gateway, so operations on one controller never overlap; a follow-up
//! refresh is only issued once the mutation before it has succeeded.
//!
//! Failures are logged, kept as `last_error` for the screen to show, and
//! returned. They never touch state the failed call did not own.

use crate::buffer::EditBuffer;
use crate::error::ApiError;
use crate::gateway::EmployeeGateway;
use crate::notifier::Notifier;
use crate::types::{Employee, EmployeeId};

pub const CREATED_MESSAGE: &str = "Employee created successfully!";
pub const UPDATED_MESSAGE: &str = "Employee updated successfully!";
pub const DELETED_MESSAGE: &str = "Employee deleted successfully!";
pub const DELETE_PROMPT: &str = "Confirm Delete: Are you sure you want to delete this employee?";

pub struct CollectionSyncController<G, N> {
    gateway: G,
    notifier: N,
    employees: Vec<Employee>,
    buffer: EditBuffer,
    last_error: Option<String>,
}

impl<G: EmployeeGateway, N: Notifier> CollectionSyncController<G, N> {
    /// An empty cache in blank Create mode. Nothing is fetched until
    /// [`start`](Self::start).
    pub fn new(gateway: G, notifier: N) -> Self {
        Self {
            gateway,
            notifier,
            employees: Vec::new(),
            buffer: EditBuffer::default(),
            last_error: None,
        }
    }

    /// Initial load of the screen.
    pub fn start(&mut self) -> Result<(), ApiError> {
        self.refresh()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// Form inputs write through here.
    pub fn buffer_mut(&mut self) -> &mut EditBuffer {
        &mut self.buffer
    }

    /// Description of the most recent failure, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn refresh(&mut self) -> Result<(), ApiError> {
        let employees = self
            .gateway
            .list_all()
            .map_err(|err| self.report("refresh", err))?;
        tracing::debug!(count = employees.len(), "collection replaced");
        self.employees = employees;
        self.last_error = None;
        Ok(())
    }

    pub fn select(&mut self, id: &EmployeeId) -> Result<(), ApiError> {
        let employee = self
            .gateway
            .get_one(id)
            .map_err(|err| self.report("select", err))?;
        tracing::debug!(%id, "employee selected for edit");
        self.buffer.load(employee);
        self.last_error = None;
        Ok(())
    }

    /// Create or update depending on the buffer's mode. On failure the buffer
    /// (and selection) stay as they were so the user can retry.
    pub fn submit(&mut self) -> Result<(), ApiError> {
        let fields = self.buffer.fields();
        match self.buffer.selected().cloned() {
            None => {
                let ack = self
                    .gateway
                    .create(&fields)
                    .map_err(|err| self.report("create", err))?;
                tracing::info!(name = %fields.name, data = ?ack.data, "employee created");
                self.buffer.clear();
                self.notifier.notify(CREATED_MESSAGE);
            }
            Some(id) => {
                let ack = self
                    .gateway
                    .update(&id, &fields)
                    .map_err(|err| self.report("update", err))?;
                tracing::info!(%id, data = ?ack.data, "employee updated");
                self.buffer.clear();
                self.notifier.notify(UPDATED_MESSAGE);
            }
        }
        self.last_error = None;
        self.refresh_after_mutation();
        Ok(())
    }

    /// Leave Update mode without sending anything.
    pub fn cancel_edit(&mut self) {
        self.buffer.clear();
    }

    /// Ask first; delete only on explicit confirmation. Returns whether the
    /// user confirmed.
    pub fn request_delete(&mut self, id: &EmployeeId) -> Result<bool, ApiError> {
        if !self.notifier.confirm(DELETE_PROMPT) {
            tracing::debug!(%id, "delete cancelled");
            return Ok(false);
        }
        self.delete(id)?;
        Ok(true)
    }

    /// On failure the cache keeps the entry until the next successful refresh.
    pub fn delete(&mut self, id: &EmployeeId) -> Result<(), ApiError> {
        self.gateway
            .delete(id)
            .map_err(|err| self.report("delete", err))?;
        tracing::info!(%id, "employee deleted");
        self.notifier.notify(DELETED_MESSAGE);
        self.last_error = None;
        self.refresh_after_mutation();
        Ok(())
    }

    fn refresh_after_mutation(&mut self) {
        // The mutation already succeeded; a failed reload is recorded in
        // `last_error` and the stale list stays up.
        let _ = self.refresh();
    }

    fn report(&mut self, operation: &'static str, err: ApiError) -> ApiError {
        tracing::warn!(operation, error = %err, "employee operation failed");
        self.last_error = Some(format!("{operation} failed: {err}"));
        err
    }
}
