use rust_decimal::Decimal;

/// Sales summed per key. Keys are remembered in the order they were first
/// added.
#[derive(Debug, Clone)]
pub struct Rollup<K> {
    entries: Vec<(K, Decimal)>,
    index: std::collections::HashMap<K, usize>,
    sum: Decimal,
}

impl<K> Default for Rollup<K> {
    fn default() -> Self {
        Self {
            entries: Default::default(),
            index: Default::default(),
            sum: Default::default(),
        }
    }
}

impl<K> PartialEq for Rollup<K>
where
    K: Eq + std::hash::Hash,
{
    /// Two roll-ups are equal if they hold the same sums, regardless of key
    /// order.
    fn eq(&self, other: &Self) -> bool {
        self.sum == other.sum
            && self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k) == Some(*v))
    }
}

impl<K> Eq for Rollup<K> where K: Eq + std::hash::Hash {}

impl<K> Rollup<K> {
    pub fn sum(&self) -> Decimal {
        self.sum
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn add(&mut self, key: K, value: Decimal)
    where
        K: Clone + Eq + std::hash::Hash,
    {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
        self.sum += value;
    }

    pub fn get<Q>(&self, key: &Q) -> Option<Decimal>
    where
        K: std::borrow::Borrow<Q> + Eq + std::hash::Hash,
        Q: Eq + std::hash::Hash + ?Sized,
    {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    /// Entries in ascending key order.
    pub fn sorted_by_key(&self) -> Vec<(K, Decimal)>
    where
        K: Clone + Ord,
    {
        let mut v = self.entries.clone();
        v.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        v
    }

    /// The `n` entries with the largest sums, largest first. Equal sums keep
    /// first-seen order.
    pub fn top(&self, n: usize) -> Vec<(K, Decimal)>
    where
        K: Clone,
    {
        let mut v = self.entries.clone();
        v.sort_by(|(_, a), (_, b)| b.cmp(a));
        v.truncate(n);
        v
    }
}

impl<K> FromIterator<(K, Decimal)> for Rollup<K>
where
    K: Clone + Eq + std::hash::Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, Decimal)>>(iter: T) -> Self {
        let mut rollup = Rollup::<K>::default();
        for (k, v) in iter {
            rollup.add(k, v);
        }
        rollup
    }
}
