pub mod identifiers;
pub mod view;

pub use identifiers::{DocId, RegistryRevision};
pub use view::{
    DepartmentFilter, RegistryView, SortField, SortOrder, StatusFilter, ViewQuery, ViewSummary,
    ALL, UNCLASSIFIED,
};
