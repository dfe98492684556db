/// Position into a displayed list.
///
/// Stored zero-based; user-facing values are one-based, so `0` is not a valid
/// one-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based)
    }

    /// Returns `None` for `0`.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::Index;

    #[test]
    fn converts_between_bases() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
        assert_eq!(Index::from_zero_based(2), index);
        assert_eq!(Index::from_one_based(0), None);
    }
}
