// File: crates/ticker-core/src/geometry.rs
// Summary: Integer pixel math: points and Bresenham line stepping.

/// Pixel coordinate; `x` is the column, `y` the row (row 0 at the top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointI32 {
    pub x: i32,
    pub y: i32,
}

impl PointI32 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for PointI32 {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Pixels of the segment `from -> to`, endpoints included, in stepping order.
/// Integer-only; handles every octant. A zero-length segment yields one point.
pub fn line_points(from: PointI32, to: PointI32) -> LineIter {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    LineIter {
        cur: from,
        end: to,
        dx,
        dy,
        sx: if from.x < to.x { 1 } else { -1 },
        sy: if from.y < to.y { 1 } else { -1 },
        err: dx + dy,
        done: false,
    }
}

/// Iterator state for [`line_points`].
#[derive(Clone, Debug)]
pub struct LineIter {
    cur: PointI32,
    end: PointI32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl Iterator for LineIter {
    type Item = PointI32;

    fn next(&mut self) -> Option<PointI32> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.end {
            self.done = true;
            return Some(p);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.cur.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(p)
    }
}
