use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::map::map;
use crate::sequence::Sequence;

/// Sequence combinator enumerating the cross product of two sources
///
/// The first source varies slowest, the second fastest. Each time the outer
/// cursor advances, a fresh inner cursor is re-derived from the second
/// sequence, which is why every nested source must support fresh-cursor
/// restart. An empty second source is detected when the cursor is created,
/// so an infinite first source cannot livelock on an empty product. Outer
/// elements are cloned once per inner pass; the fastest-varying source never
/// needs `Clone`.
pub struct Product<A, B> {
    slow: A,
    fast: B,
}

impl<A, B> Product<A, B> {
    pub fn new(slow: A, fast: B) -> Self {
        Product { slow, fast }
    }
}

impl<A, B> Sequence for Product<A, B>
where
    A: Sequence,
    B: Sequence,
    A::Item: Clone,
{
    type Item = (A::Item, B::Item);
    type Cursor<'a>
        = ProductCursor<'a, A, B>
    where
        Self: 'a;

    fn cursor(&self) -> ProductCursor<'_, A, B> {
        let fast_is_empty = !self.fast.cursor().has_more();
        ProductCursor {
            outer: self.slow.cursor(),
            fast_seq: &self.fast,
            current: None,
            inner: None,
            done: fast_is_empty,
        }
    }
}

pub struct ProductCursor<'a, A: Sequence + 'a, B: Sequence + 'a> {
    outer: A::Cursor<'a>,
    fast_seq: &'a B,
    current: Option<A::Item>,
    inner: Option<B::Cursor<'a>>,
    done: bool,
}

impl<'a, A, B> ProductCursor<'a, A, B>
where
    A: Sequence + 'a,
    B: Sequence + 'a,
    A::Item: Clone,
{
    fn prime(&mut self) {
        loop {
            if self.done {
                return;
            }
            if self.current.is_some() {
                let inner_alive = match &mut self.inner {
                    Some(inner) => inner.has_more(),
                    None => false,
                };
                if inner_alive {
                    return;
                }
                // Inner pass finished; advance the outer loop
                self.current = None;
                self.inner = None;
            } else if !self.outer.has_more() {
                self.done = true;
                return;
            } else {
                match self.outer.take_next() {
                    Ok(value) => {
                        self.current = Some(value);
                        self.inner = Some(self.fast_seq.cursor());
                    }
                    Err(_) => {
                        self.done = true;
                        return;
                    }
                }
            }
        }
    }
}

impl<'a, A, B> Cursor for ProductCursor<'a, A, B>
where
    A: Sequence + 'a,
    B: Sequence + 'a,
    A::Item: Clone,
{
    type Item = (A::Item, B::Item);

    fn has_more(&mut self) -> bool {
        self.prime();
        !self.done
    }

    fn take_next(&mut self) -> Result<(A::Item, B::Item), LazicombError> {
        self.prime();
        if self.done {
            return Err(LazicombError::Exhausted);
        }
        let fast = match &mut self.inner {
            Some(inner) => inner.take_next()?,
            None => return Err(LazicombError::Exhausted),
        };
        let slow = self.current.clone().ok_or(LazicombError::Exhausted)?;
        Ok((slow, fast))
    }
}

/// Convenience function for the binary cartesian product
pub fn cartesian_product<A, B>(slow: A, fast: B) -> Product<A, B>
where
    A: Sequence,
    B: Sequence,
    A::Item: Clone,
{
    Product::new(slow, fast)
}

/// Extension trait to add .cartesian_product() method support for sequences
pub trait ProductExt: Sequence + Sized {
    fn cartesian_product<B: Sequence>(self, other: B) -> Product<Self, B>
    where
        Self::Item: Clone,
    {
        Product::new(self, other)
    }
}

impl<S: Sequence> ProductExt for S {}

pub fn product3<A, B, C>(a: A, b: B, c: C) -> impl Sequence<Item = (A::Item, B::Item, C::Item)>
where
    A: Sequence,
    B: Sequence,
    C: Sequence,
    A::Item: Clone,
    B::Item: Clone,
{
    map(cartesian_product(a, cartesian_product(b, c)), |(a, (b, c))| {
        (a, b, c)
    })
}

pub fn product4<A, B, C, D>(
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
    A::Item: Clone,
    B::Item: Clone,
    C::Item: Clone,
{
    map(cartesian_product(a, product3(b, c, d)), |(a, (b, c, d))| {
        (a, b, c, d)
    })
}

pub fn product5<A, B, C, D, E>(
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
    A::Item: Clone,
    B::Item: Clone,
    C::Item: Clone,
    D::Item: Clone,
{
    map(
        cartesian_product(a, product4(b, c, d, e)),
        |(a, (b, c, d, e))| (a, b, c, d, e),
    )
}

pub fn product6<A, B, C, D, E, F>(
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
    A::Item: Clone,
    B::Item: Clone,
    C::Item: Clone,
    D::Item: Clone,
    E::Item: Clone,
{
    map(
        cartesian_product(a, product5(b, c, d, e, f)),
        |(a, (b, c, d, e, f))| (a, b, c, d, e, f),
    )
}

pub fn product7<A, B, C, D, E, F, G>(
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
    A::Item: Clone,
    B::Item: Clone,
    C::Item: Clone,
    D::Item: Clone,
    E::Item: Clone,
    F::Item: Clone,
{
    map(
        cartesian_product(a, product6(b, c, d, e, f, g)),
        |(a, (b, c, d, e, f, g))| (a, b, c, d, e, f, g),
    )
}

pub fn product8<A, B, C, D, E, F, G, H>(
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
    A::Item: Clone,
    B::Item: Clone,
    C::Item: Clone,
    D::Item: Clone,
    E::Item: Clone,
    F::Item: Clone,
    G::Item: Clone,
{
    map(
        cartesian_product(a, product7(b, c, d, e, f, g, h)),
        |(a, (b, c, d, e, f, g, h))| (a, b, c, d, e, f, g, h),
    )
}

pub fn product9<A, B, C, D, E, F, G, H, I>(
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
    A::Item: Clone,
    B::Item: Clone,
    C::Item: Clone,
    D::Item: Clone,
    E::Item: Clone,
    F::Item: Clone,
    G::Item: Clone,
    H::Item: Clone,
{
    map(
        cartesian_product(a, product8(b, c, d, e, f, g, h, i)),
        |(a, (b, c, d, e, f, g, h, i))| (a, b, c, d, e, f, g, h, i),
    )
}

/// Arbitrary-arity cartesian product over homogeneous sources
///
/// Odometer enumeration: the last slot varies fastest. The first tuple is
/// assembled lazily on the cursor's first pull.
pub struct ProductAll<S> {
    seqs: Vec<S>,
}

impl<S> Sequence for ProductAll<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;
    type Cursor<'a>
        = ProductAllCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> ProductAllCursor<'_, S> {
        ProductAllCursor {
            seqs: &self.seqs,
            cursors: Vec::new(),
            current: Vec::new(),
            started: false,
            done: false,
        }
    }
}

pub struct ProductAllCursor<'a, S: Sequence + 'a> {
    seqs: &'a [S],
    cursors: Vec<S::Cursor<'a>>,
    current: Vec<S::Item>,
    started: bool,
    done: bool,
}

impl<'a, S> ProductAllCursor<'a, S>
where
    S: Sequence + 'a,
    S::Item: Clone,
{
    fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        let seqs = self.seqs;
        if seqs.is_empty() {
            self.done = true;
            return;
        }
        for seq in seqs {
            let mut cursor = seq.cursor();
            if !cursor.has_more() {
                // One empty input empties the whole product
                self.done = true;
                return;
            }
            match cursor.take_next() {
                Ok(value) => {
                    self.cursors.push(cursor);
                    self.current.push(value);
                }
                Err(_) => {
                    self.done = true;
                    return;
                }
            }
        }
    }

    fn advance(&mut self) {
        let mut slot = self.cursors.len();
        loop {
            if slot == 0 {
                self.done = true;
                return;
            }
            slot -= 1;
            if !self.cursors[slot].has_more() {
                continue;
            }
            match self.cursors[slot].take_next() {
                Ok(value) => self.current[slot] = value,
                Err(_) => {
                    self.done = true;
                    return;
                }
            }
            // Re-derive every faster-varying slot from scratch
            for reset in slot + 1..self.seqs.len() {
                let mut cursor = self.seqs[reset].cursor();
                match cursor.take_next() {
                    Ok(value) => {
                        self.cursors[reset] = cursor;
                        self.current[reset] = value;
                    }
                    Err(_) => {
                        self.done = true;
                        return;
                    }
                }
            }
            return;
        }
    }
}

impl<'a, S> Cursor for ProductAllCursor<'a, S>
where
    S: Sequence + 'a,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn has_more(&mut self) -> bool {
        self.start();
        !self.done
    }

    fn take_next(&mut self) -> Result<Vec<S::Item>, LazicombError> {
        self.start();
        if self.done {
            return Err(LazicombError::Exhausted);
        }
        let tuple = self.current.clone();
        self.advance();
        Ok(tuple)
    }
}

/// Convenience function for the arbitrary-arity cartesian product
pub fn product_all<S>(seqs: Vec<S>) -> ProductAll<S>
where
    S: Sequence,
    S::Item: Clone,
{
    ProductAll { seqs }
}
