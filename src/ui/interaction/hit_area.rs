//! Hit areas for clickable regions.
//!
//! Render code registers a rect per button on every frame; the event loop
//! asks the registry what was clicked and which button the pointer is over.

use ratatui::layout::Rect;
use ratatui::style::Style;

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// The footer's Previous button
    PreviousPage,
    /// The footer's Next button
    NextPage,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction, hover_style: Option<Style>) -> Self {
        Self {
            rect,
            action,
            hover_style,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry of the hit areas drawn in the current frame.
///
/// Areas are cleared at the start of each render. The last pointer position
/// survives the clear, so a button that is redrawn under a resting pointer
/// keeps its hover style.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registered areas; later registrations sit on top
    areas: Vec<HitArea>,
    /// Last known pointer position
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registered areas. Call at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea::new(rect, action, hover_style));
    }

    /// Action of the topmost area containing the point, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|idx| self.areas[idx].action)
    }

    /// Record the pointer position.
    ///
    /// Returns true if the hovered action changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_action();
        self.pointer = Some((x, y));
        before != self.hovered_action()
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    fn hovered(&self) -> Option<&HitArea> {
        let (x, y) = self.pointer?;
        self.find_index(x, y).map(|idx| &self.areas[idx])
    }

    fn hovered_action(&self) -> Option<ClickAction> {
        self.hovered().map(|area| area.action)
    }

    /// Hover style for `rect` if it is the hovered area.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let hovered = self.hovered()?;
        if hovered.rect == rect {
            hovered.hover_style
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
