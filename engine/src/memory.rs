//! In-memory host and router implementations.
//!
//! These back the test suite and the headless smoke driver. `MemoryHost`
//! keeps appended fragments in insertion order and records every dismissal;
//! `MemoryRouter` resolves against a [`RouteTable`] and records every push.

use std::sync::{Mutex, PoisonError};
use std::sync::atomic::{AtomicBool, Ordering};

use vestibule_types::{AlertId, RouteDescriptor, RouteName};

use crate::host::{AlertHost, Router};
use crate::routes::RouteTable;

/// Alert container standing in for the host document.
#[derive(Debug)]
pub struct MemoryHost {
    container_present: AtomicBool,
    alerts: Mutex<Vec<(AlertId, String)>>,
    dismissed: Mutex<Vec<AlertId>>,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            container_present: AtomicBool::new(true),
            alerts: Mutex::new(Vec::new()),
            dismissed: Mutex::new(Vec::new()),
        }
    }

    /// Simulate a document without the well-known container.
    #[must_use]
    pub fn without_container() -> Self {
        let host = Self::new();
        host.container_present.store(false, Ordering::SeqCst);
        host
    }

    /// Ids currently present, in append order.
    #[must_use]
    pub fn alert_ids(&self) -> Vec<AlertId> {
        lock(&self.alerts).iter().map(|(id, _)| id.clone()).collect()
    }

    /// Whether an alert with this id is still in the container.
    #[must_use]
    pub fn contains_alert(&self, id: &AlertId) -> bool {
        lock(&self.alerts).iter().any(|(alert_id, _)| alert_id == id)
    }

    /// Markup of the alert with this id, if still present.
    #[must_use]
    pub fn markup_of(&self, id: &AlertId) -> Option<String> {
        lock(&self.alerts)
            .iter()
            .find(|(alert_id, _)| alert_id == id)
            .map(|(_, markup)| markup.clone())
    }

    /// Every dismissal that went through the toolkit boundary.
    #[must_use]
    pub fn dismissed_ids(&self) -> Vec<AlertId> {
        lock(&self.dismissed).clone()
    }
}

impl AlertHost for MemoryHost {
    fn append(&self, id: &AlertId, markup: &str) -> bool {
        if !self.container_present.load(Ordering::SeqCst) {
            return false;
        }
        lock(&self.alerts).push((id.clone(), markup.to_owned()));
        true
    }

    fn contains(&self, id: &AlertId) -> bool {
        self.contains_alert(id)
    }

    fn dismiss(&self, id: &AlertId) {
        let mut alerts = lock(&self.alerts);
        let before = alerts.len();
        alerts.retain(|(alert_id, _)| alert_id != id);
        if alerts.len() < before {
            lock(&self.dismissed).push(id.clone());
        }
    }
}

/// Route-table-backed router that records pushes instead of navigating.
#[derive(Debug)]
pub struct MemoryRouter {
    table: RouteTable,
    pushes: Mutex<Vec<RouteDescriptor>>,
}

impl MemoryRouter {
    #[must_use]
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            pushes: Mutex::new(Vec::new()),
        }
    }

    /// Every navigation requested so far, oldest first.
    #[must_use]
    pub fn pushed(&self) -> Vec<RouteDescriptor> {
        lock(&self.pushes).clone()
    }
}

impl Router for MemoryRouter {
    fn push_to(&self, route: &RouteDescriptor) {
        lock(&self.pushes).push(route.clone());
    }

    fn resolve_route_by_name(&self, name: &RouteName) -> Option<RouteDescriptor> {
        self.table.resolve(name).cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
