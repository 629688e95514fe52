//! Integer grid coordinates and the unobstructed Manhattan walk.
//!
//! Airports sit on cells of a `width × height` grid.  Planes move between
//! them one cell at a time, closing the horizontal gap first and the vertical
//! gap second.  There are no obstacles.

/// A cell on the simulation grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|` to `other`.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// One unit step toward `target`: x first while it differs, then y.
    ///
    /// Returns `self` unchanged when already at `target`.
    #[inline]
    pub fn step_toward(self, target: GridPos) -> GridPos {
        if self.x != target.x {
            GridPos::new(self.x + (target.x - self.x).signum(), self.y)
        } else if self.y != target.y {
            GridPos::new(self.x, self.y + (target.y - self.y).signum())
        } else {
            self
        }
    }

    /// Take up to `steps` unit steps toward `target`, stopping on arrival.
    pub fn advance_toward(self, target: GridPos, steps: u32) -> GridPos {
        let mut pos = self;
        for _ in 0..steps {
            if pos == target {
                break;
            }
            pos = pos.step_toward(target);
        }
        pos
    }

    /// `true` if the cell lies inside a `width × height` grid anchored at 0.
    #[inline]
    pub fn within(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
