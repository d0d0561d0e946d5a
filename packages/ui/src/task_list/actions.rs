//! Async drivers that pair a [`TaskListState`] transition with a gateway call.
//!
//! Each action takes the state through a [`TaskListCell`] so the state is
//! only borrowed around the synchronous `begin_*` / `finish_*` steps and never
//! across an `.await`.

use api::TaskGateway;
use dioxus::prelude::*;

use super::state::TaskListState;

/// Somewhere a [`TaskListState`] can be updated in place.
pub trait TaskListCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut TaskListState) -> R) -> R;
}

impl TaskListCell for TaskListState {
    fn update<R>(&mut self, f: impl FnOnce(&mut TaskListState) -> R) -> R {
        f(self)
    }
}

impl TaskListCell for Signal<TaskListState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut TaskListState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }
}

pub async fn load_tasks<G: TaskGateway, C: TaskListCell>(gateway: &G, cell: &mut C) {
    let Ok(ticket) = cell.update(|s| s.begin_load()) else {
        return;
    };
    let result = gateway.list_tasks(ticket.session()).await;
    if let Err(e) = &result {
        tracing::warn!("Loading tasks failed: {:?}", e);
    }
    cell.update(|s| s.finish_load(&ticket, result));
}

pub async fn add_task<G: TaskGateway, C: TaskListCell>(gateway: &G, cell: &mut C) {
    let Ok((ticket, task)) = cell.update(|s| s.begin_create()) else {
        return;
    };
    let result = gateway.create_task(ticket.session(), &task).await;
    if let Err(e) = &result {
        tracing::warn!("Creating task failed: {:?}", e);
    }
    cell.update(|s| s.finish_create(&ticket, result));
}

pub async fn save_edit<G: TaskGateway, C: TaskListCell>(gateway: &G, cell: &mut C) {
    let Ok((ticket, id, patch)) = cell.update(|s| s.begin_save()) else {
        return;
    };
    let result = gateway.update_task(ticket.session(), &id, &patch).await;
    if let Err(e) = &result {
        tracing::warn!("Updating task {} failed: {:?}", id, e);
    }
    cell.update(|s| s.finish_save(&ticket, &id, result));
}

pub async fn toggle_task<G: TaskGateway, C: TaskListCell>(gateway: &G, cell: &mut C, id: &str) {
    let Ok((ticket, patch)) = cell.update(|s| s.begin_toggle(id)) else {
        return;
    };
    let result = gateway.update_task(ticket.session(), id, &patch).await;
    if let Err(e) = &result {
        tracing::warn!("Toggling task {} failed: {:?}", id, e);
    }
    cell.update(|s| s.finish_toggle(&ticket, id, result));
}

pub async fn delete_task<G: TaskGateway, C: TaskListCell>(gateway: &G, cell: &mut C, id: &str) {
    let Ok(ticket) = cell.update(|s| s.begin_delete(id)) else {
        return;
    };
    let result = gateway.delete_task(ticket.session(), id).await;
    if let Err(e) = &result {
        tracing::warn!("Deleting task {} failed: {:?}", id, e);
    }
    cell.update(|s| s.finish_delete(&ticket, id, result));
}
