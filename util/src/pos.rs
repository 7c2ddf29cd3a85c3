use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl Pos {
  pub const fn zero() -> Self {
    Self { x: 0, y: 0 }
  }

  /// True if `other` is one of the 8 cells surrounding this one.
  pub fn touches(&self, other: Pos) -> bool {
    *self != other && (*self - other).king_len() == 1
  }
}

impl Sub for Pos {
  type Output = Diff;

  fn sub(self, rhs: Self) -> Diff {
    Diff { x: self.x - rhs.x, y: self.y - rhs.y }
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

impl AddAssign<Diff> for Pos {
  fn add_assign(&mut self, rhs: Diff) {
    self.x += rhs.x;
    self.y += rhs.y;
  }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Diff {
  pub x: i32,
  pub y: i32,
}

impl Diff {
  /// The four directions that, together with their negations, make up the
  /// 8-neighborhood. Each unordered pair of touching cells is reached exactly
  /// once by walking these from every cell.
  pub const FORWARD_NEIGHBORS: [Diff; 4] =
    [Diff { x: 1, y: 0 }, Diff { x: -1, y: 1 }, Diff { x: 0, y: 1 }, Diff { x: 1, y: 1 }];

  /// Number of king moves needed to cover this offset.
  pub fn king_len(&self) -> u32 {
    self.x.unsigned_abs().max(self.y.unsigned_abs())
  }
}

impl Mul<Diff> for i32 {
  type Output = Diff;

  fn mul(self, rhs: Diff) -> Diff {
    Diff { x: self * rhs.x, y: self * rhs.y }
  }
}
