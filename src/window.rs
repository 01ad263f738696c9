/// How many leading entries of a list an operation looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    #[default]
    All,
    First(usize),
}

impl Limit {
    /// The leading sub-list this limit selects. `First(n)` past the end is clamped.
    pub fn window<S>(self, items: &[S]) -> &[S] {
        match self {
            Limit::All => items,
            Limit::First(n) => &items[..n.min(items.len())],
        }
    }
}

impl From<Option<usize>> for Limit {
    fn from(n: Option<usize>) -> Self {
        n.map(Limit::First).unwrap_or_default()
    }
}
