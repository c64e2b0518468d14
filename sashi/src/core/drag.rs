use super::{CursorIcon, Point, Rect, RegionDetector, ResizeRegion, Size};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    None,
    Move,
    Resize,
}

/// Reference frame captured at mouse-down, valid until mouse-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub mode: DragMode,
    pub region: ResizeRegion,
    pub anchor_rect: Rect,
    pub anchor_cursor: Point,
    /// Global cursor minus window origin at mouse-down.
    pub offset: Point,
}

/// What a mouse-move asks the window to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragUpdate {
    Nothing,
    SetBounds(Rect),
    SetCursor(CursorIcon),
}

/// Idle / Moving / Resizing state machine for one window.
#[derive(Debug, Clone)]
pub struct DragController {
    detector: RegionDetector,
    min_size: Size,
    gesture: Option<Gesture>,
    hover_cursor: CursorIcon,
}

impl DragController {
    pub fn new(detector: RegionDetector, min_size: Size) -> Self {
        Self {
            detector,
            min_size,
            gesture: None,
            hover_cursor: CursorIcon::Default,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.gesture.map(|g| g.mode).unwrap_or_default()
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn hover_cursor(&self) -> CursorIcon {
        self.hover_cursor
    }

    /// Open a gesture. Resizing starts only for an unlocked window with the
    /// cursor in the border band; anything else is a move.
    pub fn mouse_down(
        &mut self,
        bounds: Rect,
        local: Point,
        global: Point,
        locked: bool,
    ) -> DragMode {
        let region = self.detector.detect(bounds.size(), local);
        let mode = if !locked && !region.is_none() {
            DragMode::Resize
        } else {
            DragMode::Move
        };

        self.gesture = Some(Gesture {
            mode,
            region: if mode == DragMode::Resize {
                region
            } else {
                ResizeRegion::NONE
            },
            anchor_rect: bounds,
            anchor_cursor: global,
            offset: global - bounds.origin(),
        });

        tracing::debug!(
            "Drag start: mode={:?}, region={:?}, anchor={:?}",
            mode,
            region,
            bounds
        );
        mode
    }

    pub fn mouse_move(
        &mut self,
        bounds: Rect,
        local: Point,
        global: Point,
        locked: bool,
    ) -> DragUpdate {
        let Some(gesture) = self.gesture else {
            return self.hover(bounds.size(), local, locked);
        };

        let new_bounds = match gesture.mode {
            DragMode::Move => {
                // Same as `global - offset`, without the offset saturating
                // for windows near the coordinate limits.
                let origin = gesture.anchor_rect.origin() + (global - gesture.anchor_cursor);
                Rect::new(origin.x, origin.y, bounds.width, bounds.height)
            }
            DragMode::Resize => {
                // Lock may be toggled mid-drag
                if locked {
                    return DragUpdate::Nothing;
                }
                resize_bounds(&gesture, bounds, global, self.min_size)
            }
            DragMode::None => return DragUpdate::Nothing,
        };

        if new_bounds == bounds {
            DragUpdate::Nothing
        } else {
            DragUpdate::SetBounds(new_bounds)
        }
    }

    /// Close the gesture, if any.
    pub fn mouse_up(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            tracing::debug!("Drag end: mode={:?}", gesture.mode);
        }
    }

    fn hover(&mut self, size: Size, local: Point, locked: bool) -> DragUpdate {
        let cursor = if locked {
            CursorIcon::Default
        } else {
            self.detector.detect(size, local).cursor()
        };

        if cursor == self.hover_cursor {
            return DragUpdate::Nothing;
        }
        self.hover_cursor = cursor;
        DragUpdate::SetCursor(cursor)
    }
}

/// Apply the resize math of one mouse-move. Axes the region does not touch
/// keep their current values. When North or West runs into the minimum size
/// the opposite edge stays pinned at its anchor position.
pub fn resize_bounds(gesture: &Gesture, current: Rect, cursor: Point, min_size: Size) -> Rect {
    let region = gesture.region;
    let anchor = gesture.anchor_rect;
    let mut bounds = current;
    let delta = cursor - gesture.anchor_cursor;
    let (mut dx, mut dy) = (delta.x, delta.y);

    if region.intersects(ResizeRegion::N) {
        bounds.y = cursor.y;
        dy = dy.saturating_neg();
    }
    if region.intersects(ResizeRegion::W) {
        bounds.x = cursor.x;
        dx = dx.saturating_neg();
    }

    if region.affects_height() {
        let height = anchor.height.saturating_add(dy);
        if height < min_size.height {
            bounds.height = min_size.height;
            if region.intersects(ResizeRegion::N) {
                bounds.y = anchor.bottom().saturating_sub(min_size.height);
            }
        } else {
            bounds.height = height;
        }
    }

    if region.affects_width() {
        let width = anchor.width.saturating_add(dx);
        if width < min_size.width {
            bounds.width = min_size.width;
            if region.intersects(ResizeRegion::W) {
                bounds.x = anchor.right().saturating_sub(min_size.width);
            }
        } else {
            bounds.width = width;
        }
    }

    bounds
}
