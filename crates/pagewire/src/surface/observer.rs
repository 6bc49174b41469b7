//! Intersection Observer
//!
//! Observe element visibility against the (margin-adjusted) viewport.
//! Entries are produced by `check_intersections` whenever the host reports
//! new geometry; each target reports on its first check and afterwards only
//! when its threshold state changes.

use std::collections::HashMap;
use std::fmt;

use pagewire_dom::{DOMRect, NodeId};

use super::UnitId;

/// One side of a root margin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(px) = s.strip_suffix("px") {
            px.trim().parse().ok().map(Self::Px)
        } else if let Some(pct) = s.strip_suffix('%') {
            pct.trim().parse().ok().map(Self::Percent)
        } else {
            // Bare zero is the only unitless length
            s.parse::<f64>().ok().filter(|v| *v == 0.0).map(Self::Px)
        }
    }

    fn resolve(self, basis: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => basis * p / 100.0,
        }
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// CSS-margin-style root margin: top, right, bottom, left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

/// Root margin parse error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid root margin `{0}`: expected 1 to 4 px or % lengths")]
pub struct RootMarginError(pub String);

impl RootMargin {
    /// Same length on all four sides
    pub fn uniform(length: MarginLength) -> Self {
        Self { top: length, right: length, bottom: length, left: length }
    }

    /// Parse 1 to 4 lengths with margin shorthand expansion
    pub fn parse(s: &str) -> Result<Self, RootMarginError> {
        let parts = s
            .split_whitespace()
            .map(MarginLength::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| RootMarginError(s.to_string()))?;

        let (top, right, bottom, left) = match parts.as_slice() {
            [a] => (*a, *a, *a, *a),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => return Err(RootMarginError(s.to_string())),
        };
        Ok(Self { top, right, bottom, left })
    }

    /// Apply to a root rect: positive margins grow it, negative shrink it
    pub fn apply(&self, root: DOMRect) -> DOMRect {
        root.expand(
            self.top.resolve(root.height),
            self.right.resolve(root.width),
            self.bottom.resolve(root.height),
            self.left.resolve(root.width),
        )
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::uniform(MarginLength::Px(0.0))
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Intersection observer options
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionObserverOptions {
    /// Root margin around the viewport
    pub root_margin: RootMargin,
    /// Visible-ratio thresholds, sorted ascending on construction
    pub threshold: Vec<f64>,
}

impl IntersectionObserverOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold: vec![threshold], ..Self::default() }
    }

    pub fn root_margin(mut self, margin: RootMargin) -> Self {
        self.root_margin = margin;
        self
    }
}

impl Default for IntersectionObserverOptions {
    fn default() -> Self {
        Self {
            root_margin: RootMargin::default(),
            threshold: vec![0.0],
        }
    }
}

/// Intersection observer entry
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionObserverEntry {
    pub target: NodeId,
    pub bounding_client_rect: DOMRect,
    pub intersection_rect: DOMRect,
    pub root_bounds: DOMRect,
    pub intersection_ratio: f64,
    /// Visible ratio has reached the observer's lowest threshold
    pub is_intersecting: bool,
    pub time: f64,
}

/// Observer handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub(crate) u32);

/// Per-target bookkeeping
#[derive(Debug, Clone, Copy, Default)]
struct TargetState {
    /// Number of thresholds reached at the last notification
    last_index: Option<usize>,
}

/// Intersection observer
#[derive(Debug)]
pub struct IntersectionObserver {
    id: ObserverId,
    owner: UnitId,
    options: IntersectionObserverOptions,
    /// Observed targets in observe() order
    observed: Vec<(NodeId, TargetState)>,
    pending_entries: Vec<IntersectionObserverEntry>,
}

impl IntersectionObserver {
    fn new(id: ObserverId, owner: UnitId, mut options: IntersectionObserverOptions) -> Self {
        if options.threshold.is_empty() {
            options.threshold.push(0.0);
        }
        for t in &mut options.threshold {
            *t = t.clamp(0.0, 1.0);
        }
        options.threshold.sort_by(f64::total_cmp);
        options.threshold.dedup();
        Self {
            id,
            owner,
            options,
            observed: Vec::new(),
            pending_entries: Vec::new(),
        }
    }

    pub fn id(&self) -> ObserverId {
        self.id
    }

    pub fn owner(&self) -> UnitId {
        self.owner
    }

    pub fn options(&self) -> &IntersectionObserverOptions {
        &self.options
    }

    /// Observe an element; observing twice is a no-op
    pub fn observe(&mut self, target: NodeId) {
        if !self.is_observing(target) {
            self.observed.push((target, TargetState::default()));
        }
    }

    /// Stop observing; queued entries for the target are dropped too
    pub fn unobserve(&mut self, target: NodeId) {
        self.observed.retain(|(id, _)| *id != target);
        self.pending_entries.retain(|e| e.target != target);
    }

    pub fn is_observing(&self, target: NodeId) -> bool {
        self.observed.iter().any(|(id, _)| *id == target)
    }

    /// How many thresholds a ratio has reached. A zero threshold needs a
    /// strictly positive visible ratio.
    fn threshold_index(&self, ratio: f64) -> usize {
        self.options
            .threshold
            .iter()
            .filter(|&&t| if t == 0.0 { ratio > 0.0 } else { ratio >= t })
            .count()
    }

    /// Queue entries for targets whose threshold state changed
    pub fn check_intersections(
        &mut self,
        viewport: DOMRect,
        element_rects: &HashMap<NodeId, DOMRect>,
        time: f64,
    ) {
        let root = self.options.root_margin.apply(viewport);

        for i in 0..self.observed.len() {
            let (node, state) = self.observed[i];
            // Targets without a layout box are not rendered
            let Some(rect) = element_rects.get(&node).copied() else {
                continue;
            };

            let intersection = rect.intersection(&root);
            let ratio = match intersection {
                Some(hit) if rect.area() > 0.0 => hit.area() / rect.area(),
                Some(_) if rect.area() == 0.0 => 1.0,
                _ => 0.0,
            };
            let index = self.threshold_index(ratio);

            if state.last_index == Some(index) {
                continue;
            }
            self.observed[i].1.last_index = Some(index);
            self.pending_entries.push(IntersectionObserverEntry {
                target: node,
                bounding_client_rect: rect,
                intersection_rect: intersection.unwrap_or_default(),
                root_bounds: root,
                intersection_ratio: ratio,
                is_intersecting: index > 0,
                time,
            });
        }
    }

    /// Take pending entries
    pub fn take_entries(&mut self) -> Vec<IntersectionObserverEntry> {
        std::mem::take(&mut self.pending_entries)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_entries.is_empty()
    }
}

/// Intersection observer manager
#[derive(Debug, Default)]
pub struct IntersectionObserverManager {
    observers: Vec<IntersectionObserver>,
    next_id: u32,
}

impl IntersectionObserverManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create observer owned by a unit
    pub fn create(&mut self, owner: UnitId, options: IntersectionObserverOptions) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push(IntersectionObserver::new(id, owner, options));
        id
    }

    pub fn get_mut(&mut self, id: ObserverId) -> Option<&mut IntersectionObserver> {
        self.observers.iter_mut().find(|o| o.id() == id)
    }

    /// Run every observer, in creation order, and collect their entries
    pub fn process(
        &mut self,
        viewport: DOMRect,
        element_rects: &HashMap<NodeId, DOMRect>,
        time: f64,
    ) -> Vec<(ObserverId, UnitId, Vec<IntersectionObserverEntry>)> {
        let mut results = Vec::new();
        for observer in &mut self.observers {
            observer.check_intersections(viewport, element_rects, time);
            if observer.has_pending() {
                results.push((observer.id(), observer.owner(), observer.take_entries()));
            }
        }
        results
    }
}
