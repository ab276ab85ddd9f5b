//! Client core for the employee directory screen.
//!
//! # Overview
//! `CollectionSyncController` keeps a local list of employees and a single
//! edit form in step with a remote REST collection. The screen renders the
//! controller's state and forwards user events to it; everything remote goes
//! through an `EmployeeGateway`.
//!
//! # Design
//! - `EmployeeClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO), so the service's
//!   wire quirks are testable without a server.
//! - `Transport` executes one request; `UreqTransport` is the blocking
//!   production implementation.
//! - `HttpGateway` glues client and transport behind the `EmployeeGateway`
//!   trait the controller is generic over.
//! - Toasts and confirmation prompts are injected through `Notifier`.

pub mod buffer;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod http;
pub mod notifier;
pub mod transport;
pub mod types;

pub use buffer::{EditBuffer, EditMode};
pub use client::EmployeeClient;
pub use config::ClientConfig;
pub use controller::CollectionSyncController;
pub use error::ApiError;
pub use gateway::{EmployeeGateway, HttpGateway};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notifier::{Notifier, TracingNotifier};
pub use transport::{Transport, UreqTransport};
pub use types::{Acknowledgement, Employee, EmployeeFields, EmployeeId};
