use glam::Vec2;
use smallvec::SmallVec;

/// Touch points of one touch event, in page coordinates.
pub type TouchPoints = SmallVec<[Vec2; 2]>;

/// A pointer event reduced to the coordinates the engine cares about.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerSample {
    /// Mouse move, viewport (client) coordinates.
    Mouse { client: Vec2 },
    TouchStart { touches: TouchPoints },
    TouchMove { touches: TouchPoints },
}

impl PointerSample {
    pub fn mouse(x: f32, y: f32) -> Self {
        PointerSample::Mouse {
            client: Vec2::new(x, y),
        }
    }

    /// Convert to one surface-local position by subtracting the surface
    /// `origin`. Returns `None` for shapes the engine ignores: empty touch
    /// lists, multi-finger touch starts, non-finite coordinates.
    pub fn normalize(&self, origin: Vec2) -> Option<Vec2> {
        let p = match self {
            PointerSample::Mouse { client } => *client,
            PointerSample::TouchStart { touches } if touches.len() == 1 => touches[0],
            PointerSample::TouchStart { .. } => return None,
            PointerSample::TouchMove { touches } => *touches.first()?,
        };
        p.is_finite().then(|| p - origin)
    }
}
