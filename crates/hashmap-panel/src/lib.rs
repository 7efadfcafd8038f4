//! Hashmap Rating Admin Panel
//!
//! Pages of the hashmap rating module: the services index, service and
//! field detail tabs, the self-handling entity forms and the batch delete
//! actions. Every page is rendered as a JSON view model; all data lives in
//! the rating API and is reached through `HashmapApi`.

pub mod dto;
pub mod forms;
pub mod handlers;
pub mod tables;
pub mod tabs;
pub mod urls;

pub use handlers::{configure, PanelState};
pub use urls::{Route, Urls};
