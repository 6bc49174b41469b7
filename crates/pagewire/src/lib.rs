//! pagewire
//!
//! Interaction layer for a single landing page: modal window, smooth-scroll
//! button, tabbed panel, nav hover fade, sticky header, section reveal,
//! lazy-loaded images and a testimonial carousel.
//!
//! The host parses the markup, reports layout boxes and drives the page
//! with events, scroll positions, image loads and clock ticks.
//!
//! # Example
//! ```rust,ignore
//! use pagewire::{Layout, Page, PageConfig, Viewport};
//!
//! let document = pagewire_html::parse(html)?;
//! let layout = Layout::new(Viewport::new(1280.0, 800.0)).with_rect(nav, nav_box);
//! let mut page = Page::new(document, layout, PageConfig::default());
//!
//! page.click(open_account);
//! page.set_scroll(1200.0);
//! page.advance_time(5000);
//! for request in page.take_image_requests() {
//!     // fetch request.url, then:
//!     page.complete_image_load(request.target);
//! }
//! ```

pub mod behaviors;
mod config;
mod elements;
mod error;
mod page;
pub mod surface;

pub use behaviors::{Behavior, Context, LazyImageState};
pub use config::{
    CarouselConfig, LazyImageConfig, ModalConfig, NavConfig, PageConfig, RevealConfig, ScrollToConfig,
    StickyConfig, TabsConfig,
};
pub use elements::PageElements;
pub use error::SetupError;
pub use page::Page;
pub use surface::{
    Event, EventType, ImageRequest, Key, Layout, ScrollBehavior, ScrollRequest, UnitId, Viewport,
};

// Re-export sub-crates for advanced usage
pub use pagewire_dom as dom;
pub use pagewire_html as html;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
