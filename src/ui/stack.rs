//! Uniform spacing between consecutive rendered items.
//!
//! Templates cannot express "every child but the first gets a top margin"
//! without repeating the rule at every call site, so the transformation is
//! done here as data: each item is annotated with the gap to insert before
//! it, and templates only have to emit `gap_before` as a margin.

/// One renderable entry together with the space that precedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spaced<T> {
    /// Pixels of space before this item. Always 0 for the first item.
    pub gap_before: u16,
    pub item: T,
}

/// Annotate an ordered sequence with a uniform gap between consecutive
/// items. The first item gets no leading gap.
pub fn space_between<T>(items: impl IntoIterator<Item = T>, gap: u16) -> Vec<Spaced<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| Spaced {
            gap_before: if i == 0 { 0 } else { gap },
            item,
        })
        .collect()
}
