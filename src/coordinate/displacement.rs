use nalgebra::SVector;

use crate::coordinate::component::Component;

/// 座標を平行移動させる変位（ベクトル）として扱える型。
///
/// [`Coordinate::move_by`](crate::Coordinate::move_by) は引数から各成分を読み取るだけで、
/// 変位そのものを変更したり参照を保持したりはしません。
/// 成分の型は座標と同じ `K` でなければならず、`f64` の座標に `f32` のベクトルを渡すことはできません。
///
/// `nalgebra` の [`Vector2`](nalgebra::Vector2)・[`Vector3`](nalgebra::Vector3) と、
/// 成分を並べた配列 `[K; N]` に対して実装されています。
pub trait Displacement<K: Component, const N: usize> {
    /// x, y(, z) の順に成分を返す。
    fn components(&self) -> [K; N];
}

impl<K: Component, const N: usize> Displacement<K, N> for SVector<K, N> {
    fn components(&self) -> [K; N] {
        std::array::from_fn(|i| self[i])
    }
}

impl<K: Component, const N: usize> Displacement<K, N> for [K; N] {
    fn components(&self) -> [K; N] {
        *self
    }
}
