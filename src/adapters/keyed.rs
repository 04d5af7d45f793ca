use crate::traits::OrderedSequence;

/// Adapts a slice of records by projecting each one to a numeric key
///
/// Records are ordered by `key(a) < key(b)` and swapped whole, so sorting
/// through a `ByKey` reorders the underlying slice. Equal keys keep their
/// original relative order.
///
/// ```
/// use percentile::adapters::ByKey;
/// use percentile::engine::median;
///
/// let mut requests = [("GET /", 120u32), ("GET /a", 30), ("POST /b", 75)];
/// let p50 = median(&mut ByKey::new(&mut requests, |r| r.1 as f64)).unwrap();
/// assert_eq!(p50, 75.0);
/// assert_eq!(requests[0].0, "GET /a");
/// ```
pub struct ByKey<'a, T, F> {
    items: &'a mut [T],
    key: F,
}

impl<'a, T, F> ByKey<'a, T, F>
where
    F: Fn(&T) -> f64,
{
    /// Wrap `items`, ordering and projecting them through `key`
    pub fn new(items: &'a mut [T], key: F) -> Self {
        Self { items, key }
    }

    /// Read access to the records in their current order
    pub fn items(&self) -> &[T] {
        self.items
    }

    /// Give the slice back
    pub fn into_inner(self) -> &'a mut [T] {
        self.items
    }
}

impl<T, F> OrderedSequence for ByKey<'_, T, F>
where
    F: Fn(&T) -> f64,
{
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (self.key)(&self.items[i]) < (self.key)(&self.items[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    #[inline]
    fn value_at(&self, i: usize) -> f64 {
        (self.key)(&self.items[i])
    }
}

impl<T: core::fmt::Debug, F> core::fmt::Debug for ByKey<'_, T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByKey").field("items", &self.items).finish()
    }
}
