//! Page configuration
//!
//! The markup contract: which selectors each behavior looks up and which
//! marker classes it toggles. Defaults match the landing page markup; every
//! field can be overridden, including from JSON.

use serde::{Deserialize, Serialize};

/// Page configuration options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub modal: ModalConfig,
    pub scroll_to: ScrollToConfig,
    pub tabs: TabsConfig,
    pub nav: NavConfig,
    pub sticky: StickyConfig,
    pub reveal: RevealConfig,
    pub lazy_images: LazyImageConfig,
    pub carousel: CarouselConfig,
}

/// Modal window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub modal: String,
    pub overlay: String,
    pub close_button: String,
    /// Every element matching this opens the modal
    pub open_buttons: String,
    pub hidden_class: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal: ".modal".into(),
            overlay: ".overlay".into(),
            close_button: ".btn--close-modal".into(),
            open_buttons: ".btn--show-modal".into(),
            hidden_class: "hidden".into(),
        }
    }
}

/// "Learn more" smooth-scroll button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollToConfig {
    pub button: String,
    /// Attribute on the button holding the target selector
    pub target_attribute: String,
}

impl Default for ScrollToConfig {
    fn default() -> Self {
        Self {
            button: ".btn--scroll-to".into(),
            target_attribute: "data-scroll-to".into(),
        }
    }
}

/// Tabbed operations panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub container: String,
    pub tab: String,
    /// `dataset` key on a tab holding its identifier (`data-tab`)
    pub id_key: String,
    /// Tab `<id>` carries class `<tab_prefix><id>`
    pub tab_prefix: String,
    /// Pane `<id>` carries class `<content_prefix><id>`
    pub content_prefix: String,
    pub tab_active_class: String,
    pub content_active_class: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            container: ".operations__tab-container".into(),
            tab: ".operations__tab".into(),
            id_key: "tab".into(),
            tab_prefix: "operations__tab--".into(),
            content_prefix: "operations__content--".into(),
            tab_active_class: "operations__tab--active".into(),
            content_active_class: "operations__content--active".into(),
        }
    }
}

/// Navigation bar (hover fade; also the sticky target)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub nav: String,
    pub logo: String,
    pub link_class: String,
    /// Opacity for the logo and non-hovered links
    pub dim_opacity: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            nav: ".nav".into(),
            logo: ".nav__logo".into(),
            link_class: "nav__link".into(),
            dim_opacity: 0.5,
        }
    }
}

/// Sticky navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickyConfig {
    /// Sentinel observed against the viewport
    pub header: String,
    pub sticky_class: String,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            header: ".header".into(),
            sticky_class: "sticky".into(),
        }
    }
}

/// Section reveal on scroll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub section: String,
    pub hidden_class: String,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section: ".section".into(),
            hidden_class: "section--hidden".into(),
            threshold: 0.2,
        }
    }
}

/// Lazy-loaded images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyImageConfig {
    pub image: String,
    /// Attribute holding the full-resolution source
    pub source_attribute: String,
    /// Blur marker removed once the real image has loaded
    pub placeholder_class: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for LazyImageConfig {
    fn default() -> Self {
        Self {
            image: "img[data-src]".into(),
            source_attribute: "data-src".into(),
            placeholder_class: "lazy-img".into(),
            threshold: 0.5,
            root_margin: "0px".into(),
        }
    }
}

/// Testimonial carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub slide: String,
    pub button_left: String,
    pub button_right: String,
    pub dot_container: String,
    pub dot_class: String,
    pub dot_active_class: String,
    /// `dataset` key on a generated dot holding its slide index (`data-slide`)
    pub slide_key: String,
    /// Autoplay period; 0 disables autoplay
    pub autoplay_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide: ".slide".into(),
            button_left: ".slider__btn--left".into(),
            button_right: ".slider__btn--right".into(),
            dot_container: ".dots".into(),
            dot_class: "dots__dot".into(),
            dot_active_class: "dots__dot--active".into(),
            slide_key: "slide".into(),
            autoplay_ms: 5000,
        }
    }
}
