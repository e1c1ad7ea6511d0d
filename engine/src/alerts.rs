//! Transient alert management.
//!
//! Each alert is rendered as a self-contained markup fragment keyed by a
//! fresh [`AlertId`] and appended under the host's alert container. Auto-
//! expiring alerts own one scheduled expiry task; at fire time the task
//! re-checks that the element still exists before dismissing, so a manual
//! close racing the timer is harmless.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable};
use tracing::debug;

use vestibule_types::{AlertId, NotifyOptions, Severity};

use crate::host::AlertHost;

/// Creates, renders, and expires alerts through an [`AlertHost`].
///
/// Cloning shares the pending-expiry registry, so any clone can cancel a
/// timer started by another.
#[derive(Clone)]
pub struct AlertManager {
    host: Arc<dyn AlertHost>,
    ttl: Duration,
    pending: Arc<Mutex<HashMap<AlertId, AbortHandle>>>,
}

impl AlertManager {
    #[must_use]
    pub fn new(host: Arc<dyn AlertHost>, ttl: Duration) -> Self {
        Self {
            host,
            ttl,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Render an alert and, unless opted out, schedule its expiry.
    ///
    /// Always returns the allocated id. When the host reports the container
    /// missing the call degrades to a logged no-op: alert display is
    /// best-effort and must never propagate an error to the caller.
    pub fn notify(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        options: NotifyOptions,
    ) -> AlertId {
        let id = AlertId::random();
        let markup = render_alert(&id, severity, title, message, options.dismissible);

        if !self.host.append(&id, &markup) {
            debug!(id = %id, "alert container missing; dropping notification");
            return id;
        }

        if options.auto_expire {
            self.schedule_expiry(id.clone());
        }
        id
    }

    /// Dismiss immediately, cancelling any pending expiry for the id.
    ///
    /// Safe to call for ids that already expired or were closed by the user.
    pub fn dismiss_now(&self, id: &AlertId) {
        if let Some(handle) = self.lock_pending().remove(id) {
            handle.abort();
        }
        if self.host.contains(id) {
            self.host.dismiss(id);
        }
    }

    /// Number of alerts with a live expiry task. Exposed for tests and
    /// shutdown diagnostics.
    #[must_use]
    pub fn pending_expiries(&self) -> usize {
        self.lock_pending().len()
    }

    fn schedule_expiry(&self, id: AlertId) {
        let (abort_handle, registration) = AbortHandle::new_pair();
        self.lock_pending().insert(id.clone(), abort_handle);

        let host = Arc::clone(&self.host);
        let pending = Arc::clone(&self.pending);
        let ttl = self.ttl;

        tokio::spawn(async move {
            let expire = async {
                tokio::time::sleep(ttl).await;
                // The user may have closed the alert already; firing into a
                // missing element is a no-op.
                if host.contains(&id) {
                    host.dismiss(&id);
                }
            };
            let _ = Abortable::new(expire, registration).await;
            pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&id);
        });
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, HashMap<AlertId, AbortHandle>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for AlertManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertManager")
            .field("ttl", &self.ttl)
            .field("pending", &self.pending_expiries())
            .finish_non_exhaustive()
    }
}

/// Build the toolkit-shaped alert fragment.
///
/// Mirrors the contextual alert markup the toolkit animates: severity picks
/// the `alert-*` class, `dismissible` controls both the close button and the
/// `alert-dismissible` class.
fn render_alert(
    id: &AlertId,
    severity: Severity,
    title: &str,
    message: &str,
    dismissible: bool,
) -> String {
    let dismissible_class = if dismissible { " alert-dismissible" } else { "" };
    let mut markup = format!(
        "<div id=\"{id}\" class=\"alert alert-{severity}{dismissible_class} fade show\" role=\"alert\">\n  \
         <strong>{title}</strong> {message}"
    );
    if dismissible {
        markup.push_str(
            "\n  <button aria-label=\"Close\" class=\"btn-close\" data-bs-dismiss=\"alert\" type=\"button\"></button>",
        );
    }
    markup.push_str("\n</div>");
    markup
}
