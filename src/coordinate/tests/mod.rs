use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

pub mod construct;

/// `HashSet` などと同じ手順で値のハッシュを計算するヘルパー関数
/// テスト以外では使用しないため、ここに定義
#[cfg(any(test))]
pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// NaN や無限大を含まない浮動小数点数の範囲
/// 等価性の法則を検証する際に使用する
#[cfg(any(test))]
pub const FINITE_F64: std::ops::Range<f64> = -1.0e12..1.0e12;

#[cfg(any(test))]
pub const FINITE_F32: std::ops::Range<f32> = -1.0e6..1.0e6;
