#[cfg(any(test))]
use proptest::{arbitrary::Arbitrary, prelude::Strategy};
use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

use crate::coordinate::{Coordinate, component::Component};

impl<K: Component, const N: usize> Coordinate<K, N>
where
    Self: From<[K; N]>,
    StandardUniform: Distribution<K>,
{
    /// 各成分をランダムに選んだ [`Coordinate`] を生成します。
    ///
    /// 整数型は値域全体から、浮動小数点型は `[0, 1)` から一様に選ばれます。
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng)
    }

    /// 外部の乱数生成器を使用してランダムな [`Coordinate`] を生成します。
    ///
    /// シードを固定した乱数生成器を渡せば、同じ座標列を再現できます。
    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        let components: [K; N] = std::array::from_fn(|_| rng.random());
        Self::from(components)
    }

    /// 各成分を `K` の値域全体から選ぶ proptest の戦略を返します。
    #[cfg(any(test))]
    pub fn arb() -> impl Strategy<Value = Self>
    where
        K: Arbitrary,
        K::Strategy: Clone,
    {
        Self::arb_within(proptest::arbitrary::any::<K>())
    }

    /// 各成分を `component` から選ぶ proptest の戦略を返します。
    #[cfg(any(test))]
    pub fn arb_within<S>(component: S) -> impl Strategy<Value = Self>
    where
        S: Strategy<Value = K> + Clone,
    {
        proptest::array::uniform(component)
            .prop_map(|components: [K; N]| Self::from(components))
    }
}
