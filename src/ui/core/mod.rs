//! Core UI functionality for the Trivialist application.
//!
//! This module contains the building blocks the components share: the
//! action vocabulary, the component trait, the application context, terminal
//! event polling and background request management.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and own their state
//! 2. **Actions** carry intents upward and results back down
//! 3. **Context** hands the backend, icons and logger to the root component
//! 4. **Events** are polled by the [`EventHandler`]
//! 5. **Requests** run on the [`TaskManager`] and report back as actions

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, RequestSeq, View};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
