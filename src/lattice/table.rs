use std::fmt::Debug;

/// Binary operator over a finite set of elements, tabulated at construction.
///
/// `calc` is evaluated once for every pair of elements of `domain`;
/// afterwards applying the operator is a table lookup.
#[derive(Debug, Clone)]
pub struct FullTable<E> {
    domain: Vec<E>,
    table: Vec<Vec<E>>,
}

impl<E: Clone + Debug + PartialEq> FullTable<E> {
    pub fn new<F>(domain: Vec<E>, calc: F) -> Self
    where
        F: Fn(&E, &E) -> E,
    {
        let table = domain
            .iter()
            .map(|l| domain.iter().map(|r| calc(l, r)).collect())
            .collect();
        Self { domain, table }
    }

    fn index(&self, e: &E) -> usize {
        match self.domain.iter().position(|x| x == e) {
            Some(i) => i,
            None => panic!("{:?} is not in the table domain", e),
        }
    }

    /// # Panics
    ///
    /// Panics if either argument is not in the table domain.
    pub fn apply(&self, l: &E, r: &E) -> E {
        self.table[self.index(l)][self.index(r)].clone()
    }

    pub fn domain(&self) -> &[E] {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table() {
        let table = FullTable::new(vec![0, 1, 2], |a, b| (a + b) % 3);
        assert_eq!(table.apply(&1, &1), 2);
        assert_eq!(table.apply(&2, &2), 1);
        assert_eq!(table.apply(&0, &2), 2);
        assert_eq!(table.domain(), &[0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "is not in the table domain")]
    fn test_full_table_outside_domain() {
        let table = FullTable::new(vec![0, 1], |a, b| a * b);
        table.apply(&0, &5);
    }
}
