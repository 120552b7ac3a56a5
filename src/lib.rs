//! 2次元・3次元の座標を表す不変の値型を提供するライブラリ。
//!
//! 成分の数値型は `i32`・`i64`・`f32`・`f64` の4種類で、次元と数値型の組み合わせごとに
//! [`Coordinate2d`] や [`Coordinate3i`] などの別名が用意されています。
//!
//! ```
//! use maths_coord::{Coordinate3i, Vector3};
//!
//! let coord = Coordinate3i::new(1, 2, 3);
//! let moved = coord.move_by(Vector3::new(4, -2, 0));
//!
//! assert_eq!(moved, Coordinate3i::new(5, 0, 3));
//! assert_eq!(moved.to_string(), "{x: 5, y: 0, z: 3}");
//! ```

/// 座標型と、その成分・変位を表すトレイトを定義。
mod coordinate;

pub use nalgebra::{Vector2, Vector3};

pub use coordinate::{
    Coordinate, Coordinate2d, Coordinate2f, Coordinate2i, Coordinate2l, Coordinate3d,
    Coordinate3f, Coordinate3i, Coordinate3l, component::Component, displacement::Displacement,
};
