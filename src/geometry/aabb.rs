use core::fmt;

/// An integer axis-aligned rectangle with its origin at `(x, y)`.
///
/// Boxes with a non-positive width or height are empty and never intersect anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Aabb2 {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Aabb2 {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Aabb2 {
        Aabb2 { x, y, w, h }
    }
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
    pub fn set_size(&mut self, w: i32, h: i32) {
        self.w = w;
        self.h = h;
    }
    /// Right edge, saturating at [i32::MAX].
    pub fn max_x(&self) -> i32 {
        self.x.saturating_add(self.w)
    }
    pub fn max_y(&self) -> i32 {
        self.y.saturating_add(self.h)
    }
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Whether the interiors overlap. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb2) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.max_x() > self.x
            && other.max_y() > self.y
            && self.max_x() > other.x
            && self.max_y() > other.y
    }

    /// The overlapping region. Sizes are clamped to zero when the boxes are disjoint.
    pub fn intersection(&self, other: &Aabb2) -> Aabb2 {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let w = self.max_x().min(other.max_x()).saturating_sub(x).max(0);
        let h = self.max_y().min(other.max_y()).saturating_sub(y).max(0);
        Aabb2::new(x, y, w, h)
    }
}

impl fmt::Display for Aabb2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Aabb2[x={}, y={}, width={}, height={}]",
            self.x, self.y, self.w, self.h
        )
    }
}

/// The 3D counterpart of [Aabb2], with depth `d` along z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Aabb3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
    pub h: i32,
    pub d: i32,
}

impl Aabb3 {
    pub const fn new(x: i32, y: i32, z: i32, w: i32, h: i32, d: i32) -> Aabb3 {
        Aabb3 { x, y, z, w, h, d }
    }
    pub fn set_position(&mut self, x: i32, y: i32, z: i32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }
    pub fn set_size(&mut self, w: i32, h: i32, d: i32) {
        self.w = w;
        self.h = h;
        self.d = d;
    }
    pub fn max_x(&self) -> i32 {
        self.x.saturating_add(self.w)
    }
    pub fn max_y(&self) -> i32 {
        self.y.saturating_add(self.h)
    }
    pub fn max_z(&self) -> i32 {
        self.z.saturating_add(self.d)
    }
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0 || self.d <= 0
    }

    pub fn intersects(&self, other: &Aabb3) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.max_x() > self.x
            && other.max_y() > self.y
            && other.max_z() > self.z
            && self.max_x() > other.x
            && self.max_y() > other.y
            && self.max_z() > other.z
    }

    pub fn intersection(&self, other: &Aabb3) -> Aabb3 {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let z = self.z.max(other.z);
        let w = self.max_x().min(other.max_x()).saturating_sub(x).max(0);
        let h = self.max_y().min(other.max_y()).saturating_sub(y).max(0);
        let d = self.max_z().min(other.max_z()).saturating_sub(z).max(0);
        Aabb3::new(x, y, z, w, h, d)
    }
}

impl fmt::Display for Aabb3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Aabb3[x={}, y={}, z={}, width={}, height={}, depth={}]",
            self.x, self.y, self.z, self.w, self.h, self.d
        )
    }
}
