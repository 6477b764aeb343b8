use std::cmp::Ordering;

use crate::models::Document;
use crate::query::collation::Collation;
use crate::query::compiled::SortSpec;

/// Compare two documents by the sort fields in order, then by sortable id.
///
/// Missing keywords compare as the empty string. The direction applies to
/// the tie-break as well.
pub fn compare_documents(
    left: &Document,
    right: &Document,
    sort: &SortSpec,
    collation: &dyn Collation,
) -> Ordering {
    for field in &sort.fields {
        let ordering = collation.compare(left.keyword(field), right.keyword(field));
        if ordering != Ordering::Equal {
            return sort.order.apply(ordering);
        }
    }
    sort.order.apply(left.sortable_id.cmp(&right.sortable_id))
}

/// Rank recalls in place. The sort is stable.
pub fn rank(recalls: &mut [&Document], sort: &SortSpec, collation: &dyn Collation) {
    recalls.sort_by(|left, right| compare_documents(left, right, sort, collation));
}
