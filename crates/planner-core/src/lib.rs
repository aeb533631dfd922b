//! # Planner Core Library
//!
//! Task scheduling with a small, strict recurrence language.
//!
//! ## Features
//!
//! - **Recurrence Engine**: `"d <n>"` (every n days, 1..=400) and `"y"`
//!   (every year) rules, computing the first occurrence strictly after a
//!   reference date
//! - **Strict Dates**: `YYYYMMDD` parsing and formatting with full calendar
//!   validation
//! - **Task Store**: SQLite persistence with sqlx and embedded migrations
//! - **Lifecycle Rules**: anchor normalization on creation, reschedule or
//!   remove on completion
//!
//! ## Core Modules
//!
//! - [`recurrence`]: Rule parsing and next-date computation
//! - [`date`]: `YYYYMMDD` codec and timezone-aware "today"
//! - [`db`]: Database connection and migration management
//! - [`models`]: Core data structures and transfer objects
//! - [`repository`]: Data access layer with Repository pattern
//! - [`error`]: Error types for the engine and the store
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use planner_core::recurrence::next_date;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! assert_eq!(next_date(now, "20240110", "d 5").unwrap(), "20240120");
//! assert_eq!(next_date(now, "20230310", "y").unwrap(), "20240310");
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
