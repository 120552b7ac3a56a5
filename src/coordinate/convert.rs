use crate::coordinate::{Coordinate, component::Component};

impl<K: Component> From<[K; 2]> for Coordinate<K, 2> {
    fn from(value: [K; 2]) -> Self {
        Coordinate::<K, 2>::new(value[0], value[1])
    }
}

impl<K: Component> From<(K, K)> for Coordinate<K, 2> {
    fn from(value: (K, K)) -> Self {
        Coordinate::<K, 2>::new(value.0, value.1)
    }
}

impl<K: Component> From<[K; 3]> for Coordinate<K, 3> {
    fn from(value: [K; 3]) -> Self {
        Coordinate::<K, 3>::new(value[0], value[1], value[2])
    }
}

impl<K: Component> From<(K, K, K)> for Coordinate<K, 3> {
    fn from(value: (K, K, K)) -> Self {
        Coordinate::<K, 3>::new(value.0, value.1, value.2)
    }
}

impl<K: Component, const N: usize> From<Coordinate<K, N>> for [K; N] {
    fn from(value: Coordinate<K, N>) -> Self {
        value.to_array()
    }
}
