use crate::document::DocumentRecord;
use crate::registry::Registry;
use crate::types::view::{DepartmentFilter, StatusFilter};

/// Exact department match. `All` keeps every document. Registry order is preserved.
pub fn filter_by_department<'a>(
    registry: &'a Registry,
    department: &DepartmentFilter,
) -> Vec<&'a DocumentRecord> {
    match department {
        DepartmentFilter::All => registry.iter().collect(),
        DepartmentFilter::Named(name) => registry
            .iter()
            .filter(|doc| doc.department == *name)
            .collect(),
    }
}

/// Filters on the latest version's processing flag.
pub fn filter_by_status<'a, I>(docs: I, status: StatusFilter) -> Vec<&'a DocumentRecord>
where
    I: IntoIterator<Item = &'a DocumentRecord>,
{
    docs.into_iter()
        .filter(|doc| match status {
            StatusFilter::All => true,
            StatusFilter::Processed => doc.is_processed(),
            StatusFilter::Pending => !doc.is_processed(),
        })
        .collect()
}

/// Case-insensitive substring match on title or doc_id. A blank term matches everything.
pub fn search<'a, I>(docs: I, term: &str) -> Vec<&'a DocumentRecord>
where
    I: IntoIterator<Item = &'a DocumentRecord>,
{
    if term.trim().is_empty() {
        return docs.into_iter().collect();
    }

    let needle = term.to_lowercase();
    docs.into_iter()
        .filter(|doc| {
            doc.title.to_lowercase().contains(&needle)
                || doc.doc_id.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}
