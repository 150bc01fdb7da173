/// Creates an [OrderedSmallSet](crate::OrderedSmallSet) from a list of elements.
///
/// `smallset!{4; a, b}` stores up to 4 elements inline.
#[macro_export]
macro_rules! smallset {
    ($n:literal; $($x:expr),* $(,)?) => {
        <$crate::OrderedSmallSet<_, { $n }>>::from([$($x),*])
    };
    ($($x:expr),* $(,)?) => {
        <$crate::OrderedSmallSet<_>>::from([$($x),*])
    };
}

/// Creates an [OrderedSmallMap](crate::OrderedSmallMap) from `key => value` pairs.
///
/// `smallmap!{4; k => v}` stores up to 4 entries inline.
#[macro_export]
macro_rules! smallmap {
    ($n:literal; $($key:expr => $value:expr),* $(,)?) => {
        <$crate::OrderedSmallMap<_, _, { $n }>>::from([$(($key, $value)),*])
    };
    ($($key:expr => $value:expr),* $(,)?) => {
        <$crate::OrderedSmallMap<_, _>>::from([$(($key, $value)),*])
    };
}
