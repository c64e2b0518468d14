use serde::{Deserialize, Serialize};

use super::{Point, Size};

/// Compass flags for the part of the border band under the cursor.
/// Corners are the union of two adjacent edges; N+S and E+W never combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeRegion(u8);

impl ResizeRegion {
    pub const NONE: Self = Self(0);
    pub const N: Self = Self(1);
    pub const E: Self = Self(2);
    pub const S: Self = Self(4);
    pub const W: Self = Self(8);
    pub const NE: Self = Self(1 | 2);
    pub const SE: Self = Self(4 | 2);
    pub const SW: Self = Self(4 | 8);
    pub const NW: Self = Self(1 | 8);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    pub fn intersects(self, other: ResizeRegion) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn union(self, other: ResizeRegion) -> Self {
        Self(self.0 | other.0)
    }

    pub fn flag_count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn affects_height(self) -> bool {
        self.intersects(Self::N) || self.intersects(Self::S)
    }

    pub fn affects_width(self) -> bool {
        self.intersects(Self::E) || self.intersects(Self::W)
    }

    pub fn cursor(self) -> CursorIcon {
        match self {
            Self::N | Self::S => CursorIcon::VerticalResize,
            Self::E | Self::W => CursorIcon::HorizontalResize,
            Self::NW | Self::SE => CursorIcon::DiagonalNwse,
            Self::NE | Self::SW => CursorIcon::DiagonalNesw,
            _ => CursorIcon::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorIcon {
    #[default]
    Default,
    HorizontalResize,
    VerticalResize,
    DiagonalNwse,
    DiagonalNesw,
}

/// Maps window-local cursor positions onto the border band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionDetector {
    border: i32,
}

impl RegionDetector {
    pub fn new(border: i32) -> Self {
        Self { border }
    }

    /// True when the cursor is inside the window but outside the window
    /// shrunk by the border thickness.
    pub fn in_border_band(&self, size: Size, cursor: Point) -> bool {
        let client = super::Rect::new(0, 0, size.width, size.height);
        let inner = client.inflate(-self.border, -self.border);
        client.contains(cursor) && !inner.contains(cursor)
    }

    /// Region under the cursor, or `NONE` outside the border band.
    pub fn detect(&self, size: Size, cursor: Point) -> ResizeRegion {
        if !self.in_border_band(size, cursor) {
            return ResizeRegion::NONE;
        }
        self.classify(size, cursor)
    }

    /// Raw per-axis classification with no band gate: anything in the
    /// middle rows is W or E.
    pub fn classify(&self, size: Size, cursor: Point) -> ResizeRegion {
        let b = self.border;
        let horizontal = if cursor.x <= b {
            ResizeRegion::W
        } else if cursor.x >= size.width - b {
            ResizeRegion::E
        } else {
            ResizeRegion::NONE
        };

        if cursor.y <= b {
            ResizeRegion::N.union(horizontal)
        } else if cursor.y >= size.height - b {
            ResizeRegion::S.union(horizontal)
        } else if cursor.x <= b {
            ResizeRegion::W
        } else {
            ResizeRegion::E
        }
    }
}

impl Default for RegionDetector {
    fn default() -> Self {
        Self::new(super::DEFAULT_BORDER_WIDTH)
    }
}
