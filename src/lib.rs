//! Client-side localization engine for the Deadhand landing page.
//!
//! The crate keeps a catalog of translated strings, tracks and persists the
//! visitor's chosen language, and rewrites a rendered [`document::Document`]
//! to match. See [`i18n::LocalizationService`] for the entry point.

pub mod config;
pub mod document;
pub mod i18n;
pub mod page;
pub mod site;
pub mod storage;
