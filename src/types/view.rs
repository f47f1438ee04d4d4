use serde::{Deserialize, Serialize};

use crate::document::DocumentRecord;
use crate::registry::DerivedStats;

/// Department filter value meaning "no filter applied".
pub const ALL: &str = "all";

/// Department bucket for documents with an absent or empty department.
pub const UNCLASSIFIED: &str = "unclassified";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum DepartmentFilter {
    #[default]
    All,
    Named(String),
}

impl DepartmentFilter {
    pub fn named(name: impl Into<String>) -> Self {
        DepartmentFilter::Named(name.into())
    }
}

impl From<&str> for DepartmentFilter {
    /// The `ALL` sentinel maps to `DepartmentFilter::All`, anything else is an exact name.
    fn from(s: &str) -> Self {
        if s == ALL {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Named(s.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    /// Latest version has been AI-processed.
    Processed,
    /// Latest version has not been AI-processed.
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    DocId,
    Title,
    Department,
    Category,
}

impl SortField {
    pub fn value<'a>(&self, doc: &'a DocumentRecord) -> &'a str {
        match self {
            SortField::DocId => doc.doc_id.as_str(),
            SortField::Title => &doc.title,
            SortField::Department => &doc.department,
            SortField::Category => &doc.category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The full set of view parameters.
/// A view is always a pure function of (registry, ViewQuery).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewQuery {
    pub department: DepartmentFilter,
    pub search: String,
    pub status: StatusFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_department(mut self, department: impl Into<DepartmentFilter>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }

    /// Clicking the active column flips the order; a new column starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Asc;
        }
    }
}

/// Counts describing a derived view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSummary {
    pub documents_total: usize,
    pub documents_shown: usize,
    pub departments: DerivedStats,
}

/// A filtered, searched and sorted view borrowing from a registry snapshot.
#[derive(Debug, Clone)]
pub struct RegistryView<'a> {
    pub documents: Vec<&'a DocumentRecord>,
    pub summary: ViewSummary,
}

impl<'a> RegistryView<'a> {
    pub fn doc_ids(&self) -> Vec<&'a str> {
        self.documents.iter().map(|d| d.doc_id.as_str()).collect()
    }
}
