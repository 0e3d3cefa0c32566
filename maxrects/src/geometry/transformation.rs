use std::ops::{Add, Mul};

use ordered_float::NotNan;

use crate::geometry::primitives::Point;

//See https://pages.mtu.edu/~shene/COURSES/cs3621/NOTES/geometry/geo-tran.html

/// Affine transformation (rotations and translations) in matrix form.
/// Transformations are composed by chaining: `t.rotate(a).translate(d)` first rotates, then translates.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformation {
    matrix: [[NotNan<f64>; 3]; 3],
}

impl Transformation {
    pub const fn empty() -> Self {
        Self {
            matrix: EMPTY_MATRIX,
        }
    }

    pub fn from_translation((tx, ty): (f64, f64)) -> Self {
        Self {
            matrix: transl_m((tx, ty)),
        }
    }

    /// Rotation in degrees around the origin
    pub fn rotate(mut self, degrees: f64) -> Self {
        self.matrix = dot_prod(&rot_m(degrees), &self.matrix);
        self
    }

    pub fn translate(mut self, (tx, ty): (f64, f64)) -> Self {
        self.matrix = dot_prod(&transl_m((tx, ty)), &self.matrix);
        self
    }

    /// Rotation in degrees around `pivot`
    pub fn rotate_around(self, degrees: f64, pivot: Point) -> Self {
        let Point(px, py) = pivot;
        self.translate((-px, -py))
            .rotate(degrees)
            .translate((px, py))
    }

    /// Appends `other` to `self`: the result first applies `self`, then `other`.
    pub fn transform(mut self, other: &Self) -> Self {
        self.matrix = dot_prod(&other.matrix, &self.matrix);
        self
    }

    /// True if axis-aligned rectangles remain axis-aligned under this transformation
    pub fn is_axis_aligned(&self) -> bool {
        let m = &self.matrix;
        (m[0][1] == _0 && m[1][0] == _0) || (m[0][0] == _0 && m[1][1] == _0)
    }

    pub fn apply(&self, Point(x, y): Point) -> Point {
        let m = &self.matrix;
        let t_x = m[0][0].into_inner() * x + m[0][1].into_inner() * y + m[0][2].into_inner();
        let t_y = m[1][0].into_inner() * x + m[1][1].into_inner() * y + m[1][2].into_inner();
        Point(t_x, t_y)
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::empty()
    }
}

const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
const _1: NotNan<f64> = unsafe { NotNan::new_unchecked(1.0) };

const EMPTY_MATRIX: [[NotNan<f64>; 3]; 3] = [[_1, _0, _0], [_0, _1, _0], [_0, _0, _1]];

/// Sine and cosine of an angle in degrees.
/// Multiples of 90° are exact, so that quarter turns swap widths and heights without drift.
fn sin_cos_deg(degrees: f64) -> (f64, f64) {
    let quarters = degrees / 90.0;
    if quarters == quarters.trunc() {
        match (quarters as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        degrees.to_radians().sin_cos()
    }
}

fn rot_m(degrees: f64) -> [[NotNan<f64>; 3]; 3] {
    let (sin, cos) = sin_cos_deg(degrees);
    let cos = NotNan::new(cos).expect("cos is NaN");
    let sin = NotNan::new(sin).expect("sin is NaN");

    [[cos, -sin, _0], [sin, cos, _0], [_0, _0, _1]]
}

fn transl_m((tx, ty): (f64, f64)) -> [[NotNan<f64>; 3]; 3] {
    let h = NotNan::new(tx).expect("tx is NaN");
    let k = NotNan::new(ty).expect("ty is NaN");

    [[_1, _0, h], [_0, _1, k], [_0, _0, _1]]
}

#[inline(always)]
fn dot_prod<T>(l: &[[T; 3]; 3], r: &[[T; 3]; 3]) -> [[T; 3]; 3]
where
    T: Add<Output = T> + Mul<Output = T> + Copy,
{
    [
        [
            l[0][0] * r[0][0] + l[0][1] * r[1][0] + l[0][2] * r[2][0],
            l[0][0] * r[0][1] + l[0][1] * r[1][1] + l[0][2] * r[2][1],
            l[0][0] * r[0][2] + l[0][1] * r[1][2] + l[0][2] * r[2][2],
        ],
        [
            l[1][0] * r[0][0] + l[1][1] * r[1][0] + l[1][2] * r[2][0],
            l[1][0] * r[0][1] + l[1][1] * r[1][1] + l[1][2] * r[2][1],
            l[1][0] * r[0][2] + l[1][1] * r[1][2] + l[1][2] * r[2][2],
        ],
        [
            l[2][0] * r[0][0] + l[2][1] * r[1][0] + l[2][2] * r[2][0],
            l[2][0] * r[0][1] + l[2][1] * r[1][1] + l[2][2] * r[2][1],
            l[2][0] * r[0][2] + l[2][1] * r[1][2] + l[2][2] * r[2][2],
        ],
    ]
}
