use std::{
    fmt,
    hash::{Hash, Hasher},
};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// 座標の成分として使用できる数値型。
///
/// `i32`・`i64`・`f32`・`f64` の4種類のみに実装されており、外部から実装を追加することはできません。
/// 加算とハッシュはそれぞれの数値型の本来の挙動に従います。
///
/// | 型    | 記号 | 加算                         |
/// |-------|------|------------------------------|
/// | `i32` | `i`  | 2の補数によるラップアラウンド |
/// | `i64` | `l`  | 2の補数によるラップアラウンド |
/// | `f32` | `f`  | IEEE-754 の加算               |
/// | `f64` | `d`  | IEEE-754 の加算               |
pub trait Component: Copy + PartialEq + fmt::Debug + fmt::Display + sealed::Sealed + 'static {
    /// 型名の末尾に付く記号（`Coordinate2i` の `i` など）。
    const KIND: char;

    /// `by` だけ平行移動した値を返す。
    ///
    /// 整数型はオーバーフロー時に折り返し、ビルドの種類に関わらずパニックしません。
    /// 浮動小数点型は NaN や無限大をそのまま伝播します。
    ///
    /// ```
    /// # use maths_coord::Component;
    /// assert_eq!(i32::MAX.translate(1), i32::MIN);
    /// assert_eq!(1.5_f64.translate(2.0), 3.5);
    /// assert!(f32::NAN.translate(1.0).is_nan());
    /// ```
    fn translate(self, by: Self) -> Self;

    /// `==` と整合するように成分をハッシュする。
    fn hash_component<H: Hasher>(&self, state: &mut H);
}

macro_rules! impl_integer_component {
    ($ty:ty, $kind:literal) => {
        impl Component for $ty {
            const KIND: char = $kind;

            fn translate(self, by: Self) -> Self {
                self.wrapping_add(by)
            }

            fn hash_component<H: Hasher>(&self, state: &mut H) {
                self.hash(state);
            }
        }
    };
}

macro_rules! impl_float_component {
    ($ty:ty, $kind:literal) => {
        impl Component for $ty {
            const KIND: char = $kind;

            fn translate(self, by: Self) -> Self {
                self + by
            }

            fn hash_component<H: Hasher>(&self, state: &mut H) {
                // 0.0 == -0.0 なので符号ビットを揃えてからハッシュする
                let value = if *self == 0.0 { 0.0 } else { *self };
                value.to_bits().hash(state);
            }
        }
    };
}

impl_integer_component!(i32, 'i');
impl_integer_component!(i64, 'l');
impl_float_component!(f32, 'f');
impl_float_component!(f64, 'd');
