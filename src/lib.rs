//! # Registra Architecture
//!
//! Registra is a UI-agnostic course catalog library with an interactive
//! console client. The layering mirrors that split:
//!
//! ```text
//! CLI layer (view/console.rs, args.rs, wired by main.rs)
//!   - terminal I/O, prompts, menu and listing rendering
//!           │
//!           ▼
//! Controller (controller.rs)
//!   - the menu loop; maps every operation failure to a displayed
//!     message and keeps looping until the exit option
//!           │
//!           ▼
//! API facade (api.rs)
//!   - dispatch + input normalization (raw id strings → UUIDs)
//!           │
//!           ▼
//! Command layer (commands/*.rs)
//!   - business logic per operation, no I/O assumptions
//!           │
//!           ▼
//! Storage layer (store/)
//!   - CourseStore trait; FileStore (production), InMemoryStore (tests)
//! ```
//!
//! The controller talks to the user exclusively through the [`view::CourseView`]
//! trait, so tests drive whole menu sessions with a scripted double instead
//! of a terminal. From `api` inward nothing writes to stdout/stderr, calls
//! `std::process::exit`, or assumes a terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: entry point for all catalog operations
//! - [`commands`]: add / list / get / update / delete logic
//! - [`controller`]: the interactive menu loop
//! - [`store`]: storage abstraction and implementations
//! - [`view`]: console I/O abstraction (menu, prompts, rendering)
//! - [`model`]: core data types (`Course`, `CourseDraft`)
//! - [`validation`]: the pre-save course checks
//! - [`config`]: data-directory configuration
//! - [`error`]: error types
//! - `args`: clap flag parsing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;
