use std::collections::HashSet;
use std::hash::Hash;

/// Builds a set from an optional sequence of optional elements.
///
/// Returns an empty set when the sequence is absent, empty, or contains only
/// `None` entries. Otherwise every element becomes a member, explicit `None`
/// entries included, with duplicates collapsed.
pub fn set_of<E>(elements: Option<Vec<Option<E>>>) -> HashSet<Option<E>>
where
    E: Eq + Hash,
{
    match elements {
        Some(items) if !items.iter().all(Option::is_none) => items.into_iter().collect(),
        _ => HashSet::new(),
    }
}

/// Builds an ordered sequence from an optional sequence of optional elements.
///
/// Same degeneracy rules as [`set_of`]: absent, empty, or all-`None` input
/// yields an empty vec. Otherwise the elements come back in input order,
/// duplicates and `None` entries preserved. The returned vec is owned by the
/// caller and therefore freely mutable.
pub fn list_of<E>(elements: Option<Vec<Option<E>>>) -> Vec<Option<E>> {
    match elements {
        Some(items) if !items.iter().all(Option::is_none) => items,
        _ => Vec::new(),
    }
}

/// Builds an ordered sequence with a different degenerate-input contract than
/// [`list_of`]: an absent argument yields `[None]` (a single absent element),
/// while a present argument yields exactly its elements, even when empty or
/// all-`None`. The asymmetry is contractual.
pub fn mutable_list_of<E>(elements: Option<Vec<Option<E>>>) -> Vec<Option<E>> {
    match elements {
        Some(items) => items,
        None => vec![None],
    }
}

/// First element in iteration order, or `None` for an absent or empty
/// collection.
pub fn first_element<I>(collection: Option<I>) -> Option<I::Item>
where
    I: IntoIterator,
{
    collection.and_then(|c| c.into_iter().next())
}

pub fn is_none_or_empty<I>(collection: Option<I>) -> bool
where
    I: IntoIterator,
{
    match collection {
        Some(c) => c.into_iter().next().is_none(),
        None => true,
    }
}

pub fn not_none_or_empty<I>(collection: Option<I>) -> bool
where
    I: IntoIterator,
{
    !is_none_or_empty(collection)
}
