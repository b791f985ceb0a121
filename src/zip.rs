use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::map::map;
use crate::sequence::Sequence;

/// Sequence combinator pairing two sources positionally
///
/// Stops as soon as either source is exhausted, so a finite input always
/// bounds an infinite or longer one. Higher arities (`zip3`..`zip9`) are
/// composed from this binary form with flattening maps; `zip_all` is the
/// arbitrary-arity fallback over homogeneous sources.
pub struct Zip<A, B> {
    left: A,
    right: B,
}

impl<A, B> Zip<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Zip { left, right }
    }
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);
    type Cursor<'a>
        = ZipCursor<'a, A, B>
    where
        Self: 'a;

    fn cursor(&self) -> ZipCursor<'_, A, B> {
        ZipCursor {
            left: self.left.cursor(),
            right: self.right.cursor(),
        }
    }
}

pub struct ZipCursor<'a, A: Sequence + 'a, B: Sequence + 'a> {
    left: A::Cursor<'a>,
    right: B::Cursor<'a>,
}

impl<'a, A: Sequence + 'a, B: Sequence + 'a> Cursor for ZipCursor<'a, A, B> {
    type Item = (A::Item, B::Item);

    fn has_more(&mut self) -> bool {
        self.left.has_more() && self.right.has_more()
    }

    fn take_next(&mut self) -> Result<(A::Item, B::Item), LazicombError> {
        if !self.has_more() {
            return Err(LazicombError::Exhausted);
        }
        Ok((self.left.take_next()?, self.right.take_next()?))
    }
}

/// Convenience function to zip two sequences
pub fn zip<A: Sequence, B: Sequence>(left: A, right: B) -> Zip<A, B> {
    Zip::new(left, right)
}

/// Extension trait to add .zip() method support for sequences
pub trait ZipExt: Sequence + Sized {
    fn zip<B: Sequence>(self, other: B) -> Zip<Self, B> {
        Zip::new(self, other)
    }
}

impl<S: Sequence> ZipExt for S {}

pub fn zip3<A, B, C>(a: A, b: B, c: C) -> impl Sequence<Item = (A::Item, B::Item, C::Item)>
where
    A: Sequence,
    B: Sequence,
    C: Sequence,
{
    map(zip(a, zip(b, c)), |(a, (b, c))| (a, b, c))
}

pub fn zip4<A, B, C, D>(
    a: A,
    b: B,
    c: C,
    d: D,
) -> impl Sequence<Item = (A::Item, B::Item, C::Item, D::Item)>
where
    A: Sequence,
    B: Sequence,
    C: Sequence,
    D: Sequence,
{
    map(zip(a, zip3(b, c, d)), |(a, (b, c, d))| (a, b, c, d))
}

pub fn zip5<A, B, C, D, E>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
) -> impl Sequence<Item = (A::Item, B::Item, C::Item, D::Item, E::Item)>
where
    A: Sequence,
    B: Sequence,
    C: Sequence,
    D: Sequence,
    E: Sequence,
{
    map(zip(a, zip4(b, c, d, e)), |(a, (b, c, d, e))| (a, b, c, d, e))
}

pub fn zip6<A, B, C, D, E, F>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
    f: F,
) -> impl Sequence<Item = (A::Item, B::Item, C::Item, D::Item, E::Item, F::Item)>
where
    A: Sequence,
    B: Sequence,
    C: Sequence,
    D: Sequence,
    E: Sequence,
    F: Sequence,
{
    map(zip(a, zip5(b, c, d, e, f)), |(a, (b, c, d, e, f))| {
        (a, b, c, d, e, f)
    })
}

pub fn zip7<A, B, C, D, E, F, G>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
    f: F,
    g: G,
) -> impl Sequence<Item = (A::Item, B::Item, C::Item, D::Item, E::Item, F::Item, G::Item)>
where
    A: Sequence,
    B: Sequence,
    C: Sequence,
    D: Sequence,
    E: Sequence,
    F: Sequence,
    G: Sequence,
{
    map(zip(a, zip6(b, c, d, e, f, g)), |(a, (b, c, d, e, f, g))| {
        (a, b, c, d, e, f, g)
    })
}

pub fn zip8<A, B, C, D, E, F, G, H>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
    f: F,
    g: G,
    h: H,
) -> impl Sequence<
    Item = (
        A::Item,
        B::Item,
        C::Item,
        D::Item,
        E::Item,
        F::Item,
        G::Item,
        H::Item,
    ),
>
where
    A: Sequence,
    B: Sequence,
    C: Sequence,
    D: Sequence,
    E: Sequence,
    F: Sequence,
    G: Sequence,
    H: Sequence,
{
    map(
        zip(a, zip7(b, c, d, e, f, g, h)),
        |(a, (b, c, d, e, f, g, h))| (a, b, c, d, e, f, g, h),
    )
}

pub fn zip9<A, B, C, D, E, F, G, H, I>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
    f: F,
    g: G,
    h: H,
    i: I,
) -> impl Sequence<
    Item = (
        A::Item,
        B::Item,
        C::Item,
        D::Item,
        E::Item,
        F::Item,
        G::Item,
        H::Item,
        I::Item,
    ),
>
where
    A: Sequence,
    B: Sequence,
    C: Sequence,
    D: Sequence,
    E: Sequence,
    F: Sequence,
    G: Sequence,
    H: Sequence,
    I: Sequence,
{
    map(
        zip(a, zip8(b, c, d, e, f, g, h, i)),
        |(a, (b, c, d, e, f, g, h, i))| (a, b, c, d, e, f, g, h, i),
    )
}

/// Arbitrary-arity zip over homogeneous sources, one `Vec` per position
pub struct ZipAll<S> {
    seqs: Vec<S>,
}

impl<S: Sequence> Sequence for ZipAll<S> {
    type Item = Vec<S::Item>;
    type Cursor<'a>
        = ZipAllCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> ZipAllCursor<'_, S> {
        ZipAllCursor {
            cursors: self.seqs.iter().map(|seq| seq.cursor()).collect(),
            // Zero inputs yield nothing rather than an endless empty tuple
            empty: self.seqs.is_empty(),
        }
    }
}

pub struct ZipAllCursor<'a, S: Sequence + 'a> {
    cursors: Vec<S::Cursor<'a>>,
    empty: bool,
}

impl<'a, S: Sequence + 'a> Cursor for ZipAllCursor<'a, S> {
    type Item = Vec<S::Item>;

    fn has_more(&mut self) -> bool {
        !self.empty && self.cursors.iter_mut().all(|cursor| cursor.has_more())
    }

    fn take_next(&mut self) -> Result<Vec<S::Item>, LazicombError> {
        if !self.has_more() {
            return Err(LazicombError::Exhausted);
        }
        self.cursors.iter_mut().map(|cursor| cursor.take_next()).collect()
    }
}

/// Convenience function to zip any number of homogeneous sequences
pub fn zip_all<S: Sequence>(seqs: Vec<S>) -> ZipAll<S> {
    ZipAll { seqs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::items;
    use crate::repeat::repeat;

    #[test]
    fn test_zip_truncates_to_shorter() {
        let seq = zip(items(vec![1, 2, 3]), items(vec!["a", "b"]));
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_zip_finite_bounds_infinite() {
        let seq = zip(items(vec![1, 2]), repeat("x"));
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![(1, "x"), (2, "x")]);
    }

    #[test]
    fn test_zip_empty_side() {
        let seq = zip(items(Vec::<i32>::new()), items(vec![1, 2]));
        let mut cursor = seq.cursor();
        assert!(!cursor.has_more());
        assert_eq!(cursor.take_next(), Err(LazicombError::Exhausted));
    }

    #[test]
    fn test_zip_preserves_supply_order() {
        let seq = items(vec!["l"]).zip(items(vec!["r"]));
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![("l", "r")]);
    }

    #[test]
    fn test_zip_cursors_are_independent() {
        let seq = zip(items(vec![1, 2]), items(vec![3, 4]));
        let mut first = seq.cursor();
        let mut second = seq.cursor();
        assert_eq!(first.take_next().unwrap(), (1, 3));
        assert_eq!(second.take_next().unwrap(), (1, 3));
        assert_eq!(first.take_next().unwrap(), (2, 4));
    }

    #[test]
    fn test_zip3_flat_tuples() {
        let seq = zip3(items(vec![1, 2]), items(vec!["a", "b"]), items(vec![true, false]));
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![(1, "a", true), (2, "b", false)]
        );
    }

    #[test]
    fn test_zip4_truncates() {
        let seq = zip4(
            items(vec![1, 2, 3]),
            items(vec![10, 20, 30]),
            items(vec![100, 200]),
            items(vec![1000, 2000, 3000]),
        );
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![(1, 10, 100, 1000), (2, 20, 200, 2000)]
        );
    }

    #[test]
    fn test_zip9_arity() {
        let one = |x: i32| items(vec![x]);
        let seq = zip9(
            one(1),
            one(2),
            one(3),
            one(4),
            one(5),
            one(6),
            one(7),
            one(8),
            one(9),
        );
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![(1, 2, 3, 4, 5, 6, 7, 8, 9)]
        );
    }

    #[test]
    fn test_zip_all_positions() {
        let seq = zip_all(vec![
            items(vec![1, 2, 3]),
            items(vec![4, 5]),
            items(vec![6, 7, 8]),
        ]);
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![vec![1, 4, 6], vec![2, 5, 7]]
        );
    }

    #[test]
    fn test_zip_all_no_inputs_is_empty() {
        let seq = zip_all(Vec::<crate::items::Items<i32>>::new());
        let mut cursor = seq.cursor();
        assert!(!cursor.has_more());
        assert_eq!(cursor.take_next(), Err(LazicombError::Exhausted));
    }

    #[test]
    fn test_zip_all_is_re_iterable() {
        let seq = zip_all(vec![items(vec![1, 2]), items(vec![3, 4])]);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![vec![1, 3], vec![2, 4]]);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![vec![1, 3], vec![2, 4]]);
    }
}
