use nalgebra::Point3;

/// Bit position of the special-bonding index inside an encoded neighbor entry.
pub const SBBITS: u32 = 30;
/// Mask selecting the particle index of an encoded neighbor entry.
pub const NEIGHMASK: u32 = 0x3FFF_FFFF;

/// A neighbor index tagged with its special-bonding class.
///
/// Class 0 is an ordinary non-bonded pair; classes 1, 2 and 3 mark 1-2, 1-3 and 1-4
/// bonded neighbors whose interactions are scaled by [`SpecialBonds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighborEntry(u32);

impl NeighborEntry {
    pub fn new(index: usize, special: u8) -> Self {
        debug_assert!(index as u32 <= NEIGHMASK, "neighbor index overflows mask");
        debug_assert!(special < 4, "special class must be 0..=3");
        Self((index as u32 & NEIGHMASK) | ((special as u32 & 3) << SBBITS))
    }

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        (self.0 & NEIGHMASK) as usize
    }

    #[inline]
    pub fn special(self) -> usize {
        (self.0 >> SBBITS) as usize
    }
}

/// Scale factors applied to bonded neighbors, indexed by special class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialBonds {
    pub lj: [f64; 4],
    pub coul: [f64; 4],
}

impl SpecialBonds {
    pub fn new(lj: [f64; 3], coul: [f64; 3]) -> Self {
        Self {
            lj: [1.0, lj[0], lj[1], lj[2]],
            coul: [1.0, coul[0], coul[1], coul[2]],
        }
    }
}

impl Default for SpecialBonds {
    /// Bonded 1-2, 1-3 and 1-4 neighbors are fully excluded.
    fn default() -> Self {
        Self::new([0.0; 3], [0.0; 3])
    }
}

/// Per-particle neighbor lists for the owned particles of one partition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeighborList {
    ilist: Vec<usize>,
    neighbors: Vec<Vec<NeighborEntry>>,
}

impl NeighborList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, i: usize, entries: Vec<NeighborEntry>) {
        self.ilist.push(i);
        self.neighbors.push(entries);
    }

    pub fn len(&self) -> usize {
        self.ilist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ilist.is_empty()
    }

    pub fn num_pairs(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[NeighborEntry])> + '_ {
        self.ilist
            .iter()
            .copied()
            .zip(self.neighbors.iter().map(Vec::as_slice))
    }

    /// Builds a half list by checking every pair, storing each pair once on its lower index.
    ///
    /// Only owned particles (`i < nlocal`) receive lists. Every pair is class 0 unless
    /// `special` reports otherwise. Intended for small systems and tests.
    pub fn half_brute_force<F>(
        positions: &[Point3<f64>],
        nlocal: usize,
        cutoff: f64,
        special: F,
    ) -> Self
    where
        F: Fn(usize, usize) -> u8,
    {
        let cutsq = cutoff * cutoff;
        let mut list = Self::new();
        for i in 0..nlocal.min(positions.len()) {
            let entries = ((i + 1)..positions.len())
                .filter(|&j| (positions[i] - positions[j]).norm_squared() < cutsq)
                .map(|j| NeighborEntry::new(j, special(i, j)))
                .collect();
            list.push(i, entries);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_encodes_index_and_special_class() {
        let entry = NeighborEntry::new(12345, 2);
        assert_eq!(entry.index(), 12345);
        assert_eq!(entry.special(), 2);
        assert_eq!(entry.raw(), 12345 | (2 << 30));
    }

    #[test]
    fn entry_without_special_bits_is_plain_index() {
        let entry = NeighborEntry::from_raw(77);
        assert_eq!(entry.index(), 77);
        assert_eq!(entry.special(), 0);
    }

    #[test]
    fn default_special_bonds_exclude_bonded_neighbors() {
        let special = SpecialBonds::default();
        assert_eq!(special.lj, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(special.coul, [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn special_bonds_new_keeps_non_bonded_factor_at_one() {
        let special = SpecialBonds::new([0.0, 0.0, 0.5], [0.0, 0.0, 0.8333]);
        assert_eq!(special.lj[0], 1.0);
        assert_eq!(special.lj[3], 0.5);
        assert_eq!(special.coul[3], 0.8333);
    }

    #[test]
    fn half_brute_force_stores_each_pair_once() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        ];
        let list = NeighborList::half_brute_force(&positions, 4, 1.5, |_, _| 0);

        assert_eq!(list.len(), 4);
        assert_eq!(list.num_pairs(), 2);
        let lists: Vec<Vec<usize>> = list
            .iter()
            .map(|(_, js)| js.iter().map(|e| e.index()).collect())
            .collect();
        assert_eq!(lists[0], vec![1]);
        assert_eq!(lists[1], vec![2]);
        assert!(lists[2].is_empty());
    }

    #[test]
    fn half_brute_force_includes_ghosts_only_as_neighbors() {
        let positions = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.5, 0.0, 0.0)];
        let list = NeighborList::half_brute_force(&positions, 1, 1.0, |_, j| (j == 1) as u8);
        assert_eq!(list.len(), 1);
        let (i, js) = list.iter().next().unwrap();
        assert_eq!(i, 0);
        assert_eq!(js, &[NeighborEntry::new(1, 1)]);
    }
}
