//! 2次元・3次元の座標を表す不変の値型。
//!
//! 座標は次元数 `N`（2 または 3）と成分の数値型 `K` を型パラメータに持つ
//! [`Coordinate`] ひとつで表現され、よく使う8通りの組み合わせには別名が用意されています。

use std::hash::{Hash, Hasher};

/// 座標の成分となる数値型を表すトレイト。
pub mod component;

/// 平行移動に使うベクトル型のトレイト定義と実装。
pub mod displacement;

/// 配列・タプルとの相互変換。
mod convert;

/// `Display` / `Debug` による文字列表現。
mod format;

/// ランダムな座標の生成。
#[cfg(any(test, feature = "random"))]
mod random;

#[cfg(test)]
mod tests;

use component::Component;
use displacement::Displacement;

/// `N` 次元空間上の位置を表す座標。
///
/// 成分はx, y(, z) の順に保持され、構築後に変更されることはありません。
/// 平行移動 [`Coordinate::move_by`] は常に新しい座標を返します。
///
/// 等価性は成分ごとの `==` による厳密な比較です。浮動小数点型でも許容誤差は使わないため、
/// 丸め誤差だけ異なる座標は等しくなく、NaN を含む座標は自分自身とも等しくなりません。
/// 整数型の座標は [`Eq`] も実装しており、`HashSet` や `HashMap` のキーとして使えます。
///
/// 直接この型を書く代わりに、[`Coordinate2d`] や [`Coordinate3i`] などの別名を使うのが一般的です。
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Coordinate<K, const N: usize> {
    components: [K; N],
}

/// `f64` 成分の2次元座標。
pub type Coordinate2d = Coordinate<f64, 2>;
/// `f64` 成分の3次元座標。
pub type Coordinate3d = Coordinate<f64, 3>;
/// `f32` 成分の2次元座標。
pub type Coordinate2f = Coordinate<f32, 2>;
/// `f32` 成分の3次元座標。
pub type Coordinate3f = Coordinate<f32, 3>;
/// `i32` 成分の2次元座標。
pub type Coordinate2i = Coordinate<i32, 2>;
/// `i32` 成分の3次元座標。
pub type Coordinate3i = Coordinate<i32, 3>;
/// `i64` 成分の2次元座標。
pub type Coordinate2l = Coordinate<i64, 2>;
/// `i64` 成分の3次元座標。
pub type Coordinate3l = Coordinate<i64, 3>;

impl<K: Component> Coordinate<K, 2> {
    /// x, y 成分から2次元座標を生成する。
    ///
    /// 値の検証は行わず、負の値や極端な値、NaN や無限大もそのまま受け入れます。
    ///
    /// # Examples
    /// ```
    /// # use maths_coord::Coordinate2i;
    /// let coord = Coordinate2i::new(3, -4);
    ///
    /// assert_eq!(coord.x(), 3);
    /// assert_eq!(coord.y(), -4);
    /// ```
    pub const fn new(x: K, y: K) -> Self {
        Self { components: [x, y] }
    }

    /// x 成分を返す。
    pub fn x(&self) -> K {
        self.components[0]
    }

    /// y 成分を返す。
    pub fn y(&self) -> K {
        self.components[1]
    }
}

impl<K: Component> Coordinate<K, 3> {
    /// x, y, z 成分から3次元座標を生成する。
    ///
    /// # Examples
    /// ```
    /// # use maths_coord::Coordinate3d;
    /// let coord = Coordinate3d::new(1.0, 2.5, f64::INFINITY);
    ///
    /// assert_eq!(coord.x(), 1.0);
    /// assert_eq!(coord.y(), 2.5);
    /// assert_eq!(coord.z(), f64::INFINITY);
    /// ```
    pub const fn new(x: K, y: K, z: K) -> Self {
        Self {
            components: [x, y, z],
        }
    }

    /// x 成分を返す。
    pub fn x(&self) -> K {
        self.components[0]
    }

    /// y 成分を返す。
    pub fn y(&self) -> K {
        self.components[1]
    }

    /// z 成分を返す。
    pub fn z(&self) -> K {
        self.components[2]
    }
}

impl<K: Component, const N: usize> Coordinate<K, N> {
    /// 指定したベクトルだけ平行移動した新しい座標を返す。
    ///
    /// 各成分は `K` 本来の加算で計算されます。
    /// * 整数型（`i32`, `i64`）はオーバーフロー時に2の補数で折り返します。
    /// * 浮動小数点型（`f32`, `f64`）は IEEE-754 に従い、NaN や無限大もそのまま伝播します。
    ///
    /// `self` は変更されません。
    ///
    /// # Examples
    /// ```
    /// # use maths_coord::{Coordinate2i, Coordinate3i, Vector2, Vector3};
    /// let coord = Coordinate3i::new(1, 2, 3);
    /// let moved = coord.move_by(Vector3::new(4, -2, 0));
    ///
    /// assert_eq!(moved, Coordinate3i::new(5, 0, 3));
    /// assert_eq!(coord, Coordinate3i::new(1, 2, 3));
    ///
    /// // i32::MAX + 1 は i32::MIN に折り返す
    /// let wrapped = Coordinate2i::new(i32::MAX, 0).move_by(Vector2::new(1, 0));
    /// assert_eq!(wrapped.x(), i32::MIN);
    /// ```
    pub fn move_by<V: Displacement<K, N>>(&self, vector: V) -> Self {
        let by = vector.components();
        Self {
            components: std::array::from_fn(|i| self.components[i].translate(by[i])),
        }
    }

    /// 成分を x, y(, z) の順に並べた配列を返す。
    pub fn to_array(&self) -> [K; N] {
        self.components
    }
}

impl<K: Component, const N: usize> Hash for Coordinate<K, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in &self.components {
            component.hash_component(state);
        }
    }
}
