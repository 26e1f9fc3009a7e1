//! Trivialist - A Terminal User Interface (TUI) for a trivia question catalog
//!
//! This library provides a terminal-based client for browsing, searching,
//! adding and deleting trivia questions served by a catalog REST API. The
//! interface is built with Ratatui; requests run in the background on Tokio.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`backend`] - Catalog API client and the backend trait
//! * [`config`] - Application configuration management
//! * [`trivia`] - Questions, categories and the add-form draft
//! * [`ui`] - Terminal user interface components

/// Backend abstraction layer over the catalog API
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Trivia catalog data types and wire formats
pub mod trivia;

/// Terminal user interface components and rendering
pub mod ui;
