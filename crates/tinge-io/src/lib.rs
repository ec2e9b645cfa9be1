//! tinge-io: Browser I/O and Dioxus component library.
//!
//! Handles file intake (drag-and-drop and picker), data-URL previews,
//! Blob downloads, and analytics events, and provides the reusable UI
//! components for the tinge web application.

pub mod analytics;
pub mod components;
pub mod data_url;
pub mod download;
pub mod media;

pub use components::{ApplyPanel, DownloadPanel, FilterPicker, FileUpload, Preview, VintageControls};
