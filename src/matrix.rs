use bit_set::BitSet;
use std::fmt;

/// Dense row major boolean matrix. A set bit means `true`.
///
/// Either dimension may be zero, which is the case for the vertical walls of a
/// one column maze or the horizontal walls of a one row maze.
#[derive(Clone, PartialEq, Eq)]
pub struct BoolMatrix {
    bits: BitSet,
    rows: usize,
    columns: usize,
}

impl BoolMatrix {
    pub fn new(rows: usize, columns: usize) -> BoolMatrix {
        BoolMatrix {
            bits: BitSet::with_capacity(rows * columns),
            rows,
            columns,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at (row, column). Out of bounds reads are `false`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.index(row, column).map_or(false, |i| self.bits.contains(i))
    }

    /// Panics if (row, column) is out of bounds.
    pub fn set(&mut self, row: usize, column: usize, value: bool) {
        let i = self.index(row, column)
            .unwrap_or_else(|| panic!("({}, {}) outside {}x{} matrix", row, column, self.rows, self.columns));
        if value {
            self.bits.insert(i);
        } else {
            self.bits.remove(i);
        }
    }

    /// Number of `true` entries.
    #[inline]
    pub fn count_true(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn all(&self) -> bool {
        self.count_true() == self.len()
    }

    /// Every entry as `(row, column, value)` in row major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let columns = self.columns;
        (0..self.len()).map(move |i| (i / columns, i % columns, self.bits.contains(i)))
    }

    /// Nested `Vec` copy, row by row.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|r| (0..self.columns).map(|c| self.get(r, c)).collect())
            .collect()
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }
}

impl fmt::Debug for BoolMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BoolMatrix {}x{} {:?}", self.rows, self.columns, self.to_rows())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn starts_all_false() {
        let m = BoolMatrix::new(2, 3);
        assert_eq!(m.len(), 6);
        assert_eq!(m.count_true(), 0);
        assert_eq!(m.to_rows(), vec![vec![false; 3]; 2]);
    }

    #[test]
    fn set_and_clear() {
        let mut m = BoolMatrix::new(2, 3);
        m.set(1, 2, true);
        m.set(0, 0, true);
        assert!(m.get(1, 2));
        assert!(m.get(0, 0));
        assert!(!m.get(0, 2));
        assert_eq!(m.count_true(), 2);

        m.set(1, 2, false);
        assert!(!m.get(1, 2));
        assert_eq!(m.count_true(), 1);
    }

    #[test]
    fn out_of_bounds_reads_are_false() {
        let mut m = BoolMatrix::new(1, 1);
        m.set(0, 0, true);
        assert!(!m.get(0, 1));
        assert!(!m.get(1, 0));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_write_panics() {
        let mut m = BoolMatrix::new(1, 1);
        m.set(1, 0, true);
    }

    #[test]
    fn zero_sized() {
        let m = BoolMatrix::new(3, 0);
        assert!(m.is_empty());
        assert!(m.all());
        assert_eq!(m.iter().count(), 0);
        assert_eq!(m.to_rows(), vec![Vec::<bool>::new(); 3]);
    }

    #[test]
    fn iter_is_row_major() {
        let mut m = BoolMatrix::new(2, 2);
        m.set(1, 0, true);
        let entries = m.iter().collect::<Vec<_>>();
        assert_eq!(entries,
                   vec![(0, 0, false), (0, 1, false), (1, 0, true), (1, 1, false)]);
    }
}
