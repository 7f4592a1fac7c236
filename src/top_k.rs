/// Keeps the `capacity` greatest values inserted so far, greatest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopK<T> {
    capacity: usize,
    items: Vec<T>,
}

impl<T: Ord> TopK<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    /// Walks from the greatest value down and puts `x` ahead of the first one
    /// it is not smaller than. Whatever falls past `capacity` is dropped.
    pub fn insert(&mut self, x: T) {
        let pos = self
            .items
            .iter()
            .position(|item| x >= *item)
            .unwrap_or(self.items.len());

        if pos >= self.capacity {
            return;
        }

        self.items.insert(pos, x);
        self.items.truncate(self.capacity);
    }

    pub fn with(mut self, x: T) -> Self {
        self.insert(x);
        self
    }
}

impl<T> TopK<T> {
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Ord> Extend<T> for TopK<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}
