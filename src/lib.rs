//! Mock business-OS demo: a brief is matched to one of three sample scenarios,
//! which are then browsed through interchangeable views.
//!
//! Everything in this crate is host-testable. The browser front-end lives in
//! `crates/luklak_web` and the terminal inspector in `crates/luklak_cli`.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod detail;
pub mod error;
pub mod fixtures;
pub mod generation;
pub mod icons;
pub mod model;
pub mod store;
pub mod structure;
pub mod switchboard;
pub mod tone;

pub use classify::{classify, classify_industry, Industry};
pub use config::UiConfig;
pub use error::{Error, Result};
pub use icons::Icon;
pub use model::{
    ChatMessage, ChatThread, CustomField, FieldKind, FunctionId, ObjectId, Priority, Scenario,
    ScenarioFunction, ScenarioObject, ViewTypeHint,
};
pub use store::{AppView, SessionStore};
pub use switchboard::ViewMode;
