//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod banner;
pub mod detail;
pub mod input;
pub mod list;
pub mod tabs;

pub use banner::render_banner;
pub use detail::render_detail;
pub use input::render_input;
pub use list::render_list;
pub use tabs::render_tabs;
