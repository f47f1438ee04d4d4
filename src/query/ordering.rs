use std::cmp::Ordering;

use crate::document::DocumentRecord;
use crate::types::view::{SortField, SortOrder};

/// Stable sort by plain string comparison on `field`.
///
/// Descending negates the comparison instead of reversing the output, so
/// documents with equal keys keep their incoming relative order both ways.
pub fn sort<'a, I>(docs: I, field: SortField, order: SortOrder) -> Vec<&'a DocumentRecord>
where
    I: IntoIterator<Item = &'a DocumentRecord>,
{
    let mut sorted: Vec<&DocumentRecord> = docs.into_iter().collect();
    sorted.sort_by(|a, b| compare(a, b, field, order));

    debug_assert!(sorted
        .windows(2)
        .all(|w| compare(w[0], w[1], field, order) != Ordering::Greater));

    sorted
}

fn compare(a: &DocumentRecord, b: &DocumentRecord, field: SortField, order: SortOrder) -> Ordering {
    let cmp = field.value(a).cmp(field.value(b));
    match order {
        SortOrder::Asc => cmp,
        SortOrder::Desc => cmp.reverse(),
    }
}
