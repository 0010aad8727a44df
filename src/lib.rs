//! In-memory live-show tracker: an ordered show collection, derived display labels,
//! and the controllers the list, create and edit screens drive.
//!
//! State lives only in process memory and is lost on restart.
//!
//! # Examples
//!
//! Synchronous usage with [`core::store::ShowStore`]:
//! ```
//! use chrono::NaiveDate;
//! use showlog::{
//!     core::store::ShowStore,
//!     show::ShowDraft,
//!     types::{DayPeriod, EventStatus},
//!     view::{event_status_on, time_of_day},
//! };
//!
//! let mut store = ShowStore::new();
//! let record = ShowDraft {
//!     title: "Band A".to_string(),
//!     date: "01/01/2099".to_string(),
//!     time: "20:00".to_string(),
//!     city: "Metropolis".to_string(),
//!     venue_address: "123 Main St".to_string(),
//!     banner_image_ref: "img://1".to_string(),
//! }
//! .validate()
//! .expect("complete draft");
//!
//! let index = store.add(record);
//! assert_eq!(index, 0);
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let show = &store.list()[0];
//! assert_eq!(event_status_on(show.date(), today), EventStatus::Active);
//! assert_eq!(time_of_day(show.time()), DayPeriod::Night);
//! ```
//!
//! Shared usage through the single-writer runtime:
//! ```no_run
//! use showlog::{
//!     core::store::ShowStore,
//!     runtime::handle::{spawn_showlog, RuntimeConfig},
//!     screens::{form::ShowForm, list::ListScreen},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handle = spawn_showlog(ShowStore::new(), RuntimeConfig::default());
//! let list = ListScreen::new(handle.clone());
//!
//! let mut form = ShowForm::create(handle.clone());
//! form.draft_mut().title = "Band A".to_string();
//! assert!(form.submit().await.is_err());
//!
//! let cards = list.cards().await.expect("cards");
//! assert!(cards.is_empty());
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Core in-memory show store.
pub mod core;
/// Single-writer runtime handle and events.
pub mod runtime;
/// Screen controllers for list, create and edit.
pub mod screens;
/// Show record, draft, and validation types.
pub mod show;
/// Tracing subscriber setup.
pub mod telemetry;
/// Shared primitive types and label enums.
pub mod types;
/// Derived-view functions and list card model.
pub mod view;
