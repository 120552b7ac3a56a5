use std::fmt;

use crate::coordinate::{Coordinate, component::Component};

const AXES: [&str; 3] = ["x", "y", "z"];

impl<K: Component, const N: usize> fmt::Display for Coordinate<K, N> {
    /// `Coordinate` を文字列形式で表示します。
    ///
    /// 形式は `"{x: 1, y: 2}"`、3次元の場合は `"{x: 1, y: 2, z: 3}"` です。
    /// デバッグ向けの表現であり、バージョン間での互換性は保証しません。
    ///
    /// ```
    /// # use maths_coord::{Coordinate2f, Coordinate3i};
    /// assert_eq!(Coordinate3i::new(1, -2, 3).to_string(), "{x: 1, y: -2, z: 3}");
    /// assert_eq!(Coordinate2f::new(0.5, f32::NAN).to_string(), "{x: 0.5, y: NaN}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (axis, value)) in AXES.iter().zip(&self.components).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{axis}: {value}")?;
        }
        f.write_str("}")
    }
}

/// 次元数と数値型の記号に対応する別名を返す。
fn type_name<K: Component, const N: usize>() -> &'static str {
    match (N, K::KIND) {
        (2, 'd') => "Coordinate2d",
        (3, 'd') => "Coordinate3d",
        (2, 'f') => "Coordinate2f",
        (3, 'f') => "Coordinate3f",
        (2, 'i') => "Coordinate2i",
        (3, 'i') => "Coordinate3i",
        (2, 'l') => "Coordinate2l",
        (3, 'l') => "Coordinate3l",
        _ => "Coordinate",
    }
}

impl<K: Component, const N: usize> fmt::Debug for Coordinate<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct(type_name::<K, N>());
        for (axis, value) in AXES.iter().zip(&self.components) {
            debug.field(axis, value);
        }
        debug.finish()
    }
}
