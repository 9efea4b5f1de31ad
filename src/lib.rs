//! Stroke risk screening: feature assembly, classifier inference and the web form.
/// Application directory resolution.
pub mod app_dirs;
/// Server settings.
pub mod config;
/// Patient input and feature rows.
pub mod features;
/// Tracing setup.
pub mod logging;
/// Binary classifiers and the loaded model handle.
pub mod ml;
/// Risk scoring and verdicts.
pub mod scoring;
/// HTTP routes and pages.
pub mod web;
