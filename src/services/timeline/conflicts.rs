//! Double-booking detection.
//!
//! Two orders conflict when they sit on the same work center and their date
//! spans overlap as closed intervals: an order ending on the 5th and another
//! starting on the 5th do conflict. Orders are told apart by id only, so two
//! copies of the same order never conflict with each other.
//!
//! Pairwise and quadratic in the number of orders.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::models::work_order::WorkOrder;

type Span = (NaiveDate, NaiveDate);

/// Closed-interval overlap: `start_a <= end_b && end_a >= start_b`.
pub fn spans_overlap(a: Span, b: Span) -> bool {
    a.0 <= b.1 && a.1 >= b.0
}

fn clash(a: &WorkOrder, a_span: Span, b: &WorkOrder, b_span: Span) -> bool {
    a.id != b.id && a.work_center_id == b.work_center_id && spans_overlap(a_span, b_span)
}

/// Ids of every order involved in at least one conflicting pair.
///
/// Orders with unreadable dates are left out of the comparison.
pub fn detect_conflicts(orders: &[WorkOrder]) -> HashSet<String> {
    let spans: Vec<(&WorkOrder, Span)> = orders
        .iter()
        .filter_map(|order| order.date_range().map(|span| (order, span)))
        .collect();

    let mut conflicts = HashSet::new();
    for (i, &(a, a_span)) in spans.iter().enumerate() {
        for &(b, b_span) in &spans[i + 1..] {
            if clash(a, a_span, b, b_span) {
                conflicts.insert(a.id.clone());
                conflicts.insert(b.id.clone());
            }
        }
    }

    log::debug!(
        "Conflict scan over {} orders found {} conflicting",
        orders.len(),
        conflicts.len()
    );
    conflicts
}

/// Existing orders that `candidate` would overlap.
///
/// Orders sharing the candidate's id are skipped, so an order being edited
/// in place is never reported against its stored self.
pub fn find_overlaps<'a>(candidate: &WorkOrder, existing: &'a [WorkOrder]) -> Vec<&'a WorkOrder> {
    let Some(span) = candidate.date_range() else {
        return Vec::new();
    };

    existing
        .iter()
        .filter(|other| {
            other
                .date_range()
                .is_some_and(|other_span| clash(candidate, span, other, other_span))
        })
        .collect()
}

/// Whether saving `candidate` would double-book its work center.
pub fn check_overlap(candidate: &WorkOrder, existing: &[WorkOrder]) -> bool {
    let Some(span) = candidate.date_range() else {
        return false;
    };

    existing.iter().any(|other| {
        other
            .date_range()
            .is_some_and(|other_span| clash(candidate, span, other, other_span))
    })
}

/// Short warning for the edit form, or `None` when there is no overlap.
pub fn overlap_warning(candidate: &WorkOrder, existing: &[WorkOrder]) -> Option<String> {
    match find_overlaps(candidate, existing).as_slice() {
        [] => None,
        [single] => Some(format!("Overlaps with \"{}\"", single.name)),
        many => Some(format!("Overlaps with {} other orders", many.len())),
    }
}
