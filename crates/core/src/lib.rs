//! # Clinic Core
//!
//! Core business logic for the skin clinic record keeper.
//!
//! This crate contains the data model and flat-file persistence:
//! - Treatment catalogue with fixed prices
//! - Patient records and the appointments they own
//! - The in-memory registry and its lookups
//! - Load/save of the registry to the comma-delimited records file
//! - The admin session gate
//!
//! **No console concerns**: prompts, menus, and process exit belong in the
//! `clinic` binary.

pub mod config;
pub mod constants;
pub mod error;
pub mod patient;
pub mod registry;
pub mod session;
pub mod store;
pub mod treatment;

pub use config::{resolve_records_path, CoreConfig, RowGrouping};
pub use error::{ClinicError, ClinicResult};
pub use patient::{Appointment, Patient};
pub use registry::Clinic;
pub use session::AdminSession;
pub use store::RecordStore;
pub use treatment::Treatment;
