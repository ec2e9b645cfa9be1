//! Dioxus UI components for tinge.
//!
//! Provides the drag-and-drop upload zone, filter picker grid, vintage
//! parameter sliders, image preview panes, the apply control with its
//! busy indicator, and the download panel.

mod apply_panel;
mod download_panel;
mod filter_picker;
mod preview;
mod upload;
mod vintage_controls;

pub use apply_panel::ApplyPanel;
pub use download_panel::DownloadPanel;
pub use filter_picker::FilterPicker;
pub use preview::Preview;
pub use upload::FileUpload;
pub use vintage_controls::VintageControls;
