/// Platform-neutral integer rectangle.
///
/// Screen-space pixel coordinates. A confirmed selection always satisfies `left <= right` and
/// `top <= bottom`; rectangles loaded from presets are taken as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// `right - left`, widened so any pair of `i32` edges fits.
    #[inline]
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    #[inline]
    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    /// Construct a normalized rectangle from two points.
    #[inline]
    pub fn from_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    /// True if the rectangle has no positive area (zero or inverted on either axis).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// `(x1, y1, x2, y2)` in the order presets store them.
    #[inline]
    pub fn to_tuple(self) -> (i32, i32, i32, i32) {
        (self.left, self.top, self.right, self.bottom)
    }
}

impl From<(i32, i32, i32, i32)> for RectI32 {
    #[inline]
    fn from((left, top, right, bottom): (i32, i32, i32, i32)) -> Self {
        Self::new(left, top, right, bottom)
    }
}

/// Handle of the on-screen selection marker.
///
/// Allocated when the marker is created; every later update/removal addresses the same marker
/// through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(u32);

impl MarkerId {
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Marker geometry while dragging.
///
/// Unlike [`RectI32`] this keeps the anchor corner where the drag started, so it may be
/// un-normalized. Painters normalize on draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRect {
    pub anchor_x: i32,
    pub anchor_y: i32,
    pub x: i32,
    pub y: i32,
}

impl MarkerRect {
    #[inline]
    fn at(x: i32, y: i32) -> Self {
        Self {
            anchor_x: x,
            anchor_y: y,
            x,
            y,
        }
    }

    #[inline]
    pub fn normalized(&self) -> RectI32 {
        RectI32::from_points(self.anchor_x, self.anchor_y, self.x, self.y)
    }
}

/// High-level selection phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Pointer is pressed and the marker follows it.
    Dragging { marker: MarkerId, rect: MarkerRect },
}

/// Input actions (pure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Primary button pressed (overlay-local coordinates).
    MouseDown { x: i32, y: i32 },
    /// Pointer moved.
    MouseMove { x: i32, y: i32 },
    /// Primary button released. The release point is the final drag position.
    MouseUp { x: i32, y: i32 },
    /// Host reset back to idle (e.g. overlay cancelled).
    ResetToIdle,
}

/// Effects requested by the core (executed by the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Show a new marker. The rect starts zero-sized at the press point.
    CreateMarker { marker: MarkerId, rect: MarkerRect },
    /// Move the marker's free corner.
    UpdateMarker { marker: MarkerId, rect: MarkerRect },
    /// Remove the marker from the surface.
    RemoveMarker { marker: MarkerId },
    /// Selection finished; hand the rectangle to the capture pipeline.
    Confirm { selection: RectI32 },
}

/// Selection state machine model.
#[derive(Debug, Default)]
pub struct Model {
    phase: Phase,
    next_marker: u32,
}

impl Model {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Marker currently on screen, if any.
    pub fn active_marker(&self) -> Option<(MarkerId, MarkerRect)> {
        match self.phase {
            Phase::Idle => None,
            Phase::Dragging { marker, rect } => Some((marker, rect)),
        }
    }

    fn allocate_marker(&mut self) -> MarkerId {
        self.next_marker = self.next_marker.wrapping_add(1);
        MarkerId(self.next_marker)
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::MouseDown { x, y } => {
                let mut effects = Vec::new();

                // A second press without a release replaces the stale marker.
                if let Phase::Dragging { marker, .. } = self.phase {
                    effects.push(Effect::RemoveMarker { marker });
                }

                let marker = self.allocate_marker();
                let rect = MarkerRect::at(x, y);
                self.phase = Phase::Dragging { marker, rect };
                effects.push(Effect::CreateMarker { marker, rect });
                effects
            }

            Action::MouseMove { x, y } => {
                let Phase::Dragging { marker, rect } = &mut self.phase else {
                    return Vec::new();
                };

                if rect.x == x && rect.y == y {
                    return Vec::new();
                }

                rect.x = x;
                rect.y = y;
                vec![Effect::UpdateMarker {
                    marker: *marker,
                    rect: *rect,
                }]
            }

            Action::MouseUp { x, y } => {
                let Phase::Dragging { marker, mut rect } = self.phase else {
                    return Vec::new();
                };

                rect.x = x;
                rect.y = y;
                self.phase = Phase::Idle;

                vec![
                    Effect::RemoveMarker { marker },
                    Effect::Confirm {
                        selection: rect.normalized(),
                    },
                ]
            }

            Action::ResetToIdle => {
                let effects = match self.phase {
                    Phase::Dragging { marker, .. } => vec![Effect::RemoveMarker { marker }],
                    Phase::Idle => Vec::new(),
                };
                self.phase = Phase::Idle;
                effects
            }
        }
    }
}
