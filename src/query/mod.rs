pub mod filters;
pub mod ordering;

use crate::registry::{DerivedStats, Registry};
use crate::types::view::{RegistryView, ViewQuery, ViewSummary};
pub use filters::{filter_by_department, filter_by_status, search};
pub use ordering::sort;

/// Department counts over the whole registry, independent of any filter.
pub fn stats(registry: &Registry) -> DerivedStats {
    registry.stats()
}

/// Derive a view in the fixed order: department, search, status, then sort.
pub fn apply<'a>(registry: &'a Registry, query: &ViewQuery) -> RegistryView<'a> {
    // 1. Department
    let by_department = filter_by_department(registry, &query.department);

    // 2. Search
    let searched = search(by_department, &query.search);

    // 3. Status
    let by_status = filter_by_status(searched, query.status);

    // 4. Sorting last, so no later step can reorder
    let documents = sort(by_status, query.sort_field, query.sort_order);

    let summary = ViewSummary {
        documents_total: registry.len(),
        documents_shown: documents.len(),
        departments: registry.stats(),
    };

    RegistryView { documents, summary }
}
