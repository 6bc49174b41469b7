//! Element resolution
//!
//! Every unit's handles are looked up once, before any unit attaches. A unit
//! whose lookup fails keeps its error here and is skipped.

use pagewire_dom::Document;

use crate::behaviors::{
    CarouselElements, LazyImageElements, ModalElements, NavElements, RevealElements, ScrollToElements,
    StickyElements, TabElements,
};
use crate::config::PageConfig;
use crate::error::SetupError;

/// Resolved handles, one result per unit
#[derive(Debug, Clone)]
pub struct PageElements {
    pub modal: Result<ModalElements, SetupError>,
    pub scroll_to: Result<ScrollToElements, SetupError>,
    pub tabs: Result<TabElements, SetupError>,
    pub nav: Result<NavElements, SetupError>,
    pub sticky: Result<StickyElements, SetupError>,
    pub reveal: Result<RevealElements, SetupError>,
    pub lazy_images: Result<LazyImageElements, SetupError>,
    pub carousel: Result<CarouselElements, SetupError>,
}

impl PageElements {
    pub fn resolve(document: &Document, config: &PageConfig) -> Self {
        Self {
            modal: ModalElements::resolve(document, &config.modal),
            scroll_to: ScrollToElements::resolve(document, &config.scroll_to),
            tabs: TabElements::resolve(document, &config.tabs),
            nav: NavElements::resolve(document, &config.nav),
            sticky: StickyElements::resolve(document, &config.nav, &config.sticky),
            reveal: RevealElements::resolve(document, &config.reveal),
            lazy_images: LazyImageElements::resolve(document, &config.lazy_images),
            carousel: CarouselElements::resolve(document, &config.carousel),
        }
    }
}
