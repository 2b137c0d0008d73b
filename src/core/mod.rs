//! Shared data model plus calendar and formatting helpers.

pub mod calendar;
pub mod format;
pub mod model;
