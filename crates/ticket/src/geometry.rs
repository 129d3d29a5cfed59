use serde::{Deserialize, Serialize};

/// Page or document dimensions in points (1/72").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A position on the page in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate2d {
    pub x: f32,
    pub y: f32,
}

impl Coordinate2d {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The sub-region of a page the printer can mark, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintableArea {
    pub origin: Coordinate2d,
    pub size: Size,
}

impl PrintableArea {
    pub const fn new(origin: Coordinate2d, size: Size) -> Self {
        Self { origin, size }
    }

    /// An area covering the whole page.
    pub const fn full_page(page_size: Size) -> Self {
        Self::new(Coordinate2d::new(0.0, 0.0), page_size)
    }

    /// Returns the area constrained to lie within the page bounds.
    pub fn clamped_to(self, page_size: Size) -> Self {
        let x = self.origin.x.clamp(0.0, page_size.width);
        let y = self.origin.y.clamp(0.0, page_size.height);
        let width = self.size.width.min(page_size.width - x).max(0.0);
        let height = self.size.height.min(page_size.height - y).max(0.0);
        Self::new(Coordinate2d::new(x, y), Size::new(width, height))
    }
}

/// One of the four page margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarginSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl MarginSide {
    pub const ALL: [MarginSide; 4] = [
        MarginSide::Top,
        MarginSide::Right,
        MarginSide::Bottom,
        MarginSide::Left,
    ];
}

/// Four-sided margin measurements in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same measurement on every side.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn get(&self, side: MarginSide) -> f32 {
        match side {
            MarginSide::Top => self.top,
            MarginSide::Right => self.right,
            MarginSide::Bottom => self.bottom,
            MarginSide::Left => self.left,
        }
    }

    pub fn set(&mut self, side: MarginSide, value: f32) {
        match side {
            MarginSide::Top => self.top = value,
            MarginSide::Right => self.right = value,
            MarginSide::Bottom => self.bottom = value,
            MarginSide::Left => self.left = value,
        }
    }
}
