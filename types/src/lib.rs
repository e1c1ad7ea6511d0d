//! Core domain types for Vestibule.
//!
//! This crate contains the shared vocabulary of the shell: alert identity and
//! presentation options, route names and descriptors, and the guard decision
//! types. Everything here can be used from any layer of the application.

mod alert;
mod ids;
mod route;

pub use alert::{NotifyOptions, Severity};
pub use ids::AlertId;
pub use route::{GuardDecision, GuardPolicy, RouteDescriptor, RouteName};
