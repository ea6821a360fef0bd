//! Display values derived from one fetched campaign record.
//!
//! Everything here is a pure function of its inputs and is recomputed per
//! render; there is no cached state to go stale.

use crate::campaign::Donation;
use crate::config::DonationOrder;

/// Percentage of the funding goal reached.
///
/// A zero goal yields a non-finite value; render it through
/// [`display_percent`] instead of formatting the raw number.
pub fn funding_percent(amount_raised: f64, goal: f64) -> f64 {
    amount_raised / goal * 100.0
}

/// Format a funding percentage, clamping the no-goal case to a placeholder.
pub fn display_percent(percent: f64) -> String {
    if percent.is_finite() {
        format!("{percent:.0}%")
    } else {
        "—".to_string()
    }
}

/// The donation with the greatest amount, or `None` for an empty list.
/// Equal amounts resolve to the earliest entry.
pub fn top_donor(donations: &[Donation]) -> Option<&Donation> {
    donations.iter().fold(None, |best, donation| match best {
        Some(current) if donation.amount > current.amount => Some(donation),
        None => Some(donation),
        _ => best,
    })
}

/// A re-ordered copy of `donations`. The sort is stable, so entries with
/// equal keys keep their input order; the input itself is untouched.
pub fn sorted_donations(donations: &[Donation], order: DonationOrder) -> Vec<Donation> {
    let mut sorted = donations.to_vec();
    match order {
        DonationOrder::Newest => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        DonationOrder::Top => sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
    }
    sorted
}

/// The `page_index`-th slice of `page_size` items, clamped to the collection
/// bounds. A page past the end is empty, not an error.
pub fn paginate<T>(items: &[T], page_size: usize, page_index: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn donation(name: &str, amount: f64, day: u32) -> Donation {
        Donation {
            donor_name: name.to_string(),
            amount,
            date: Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_funding_percent() {
        assert_eq!(funding_percent(50.0, 200.0), 25.0);
        assert_eq!(funding_percent(0.0, 100.0), 0.0);
        assert!(!funding_percent(10.0, 0.0).is_finite());
    }

    #[test]
    fn test_display_percent_clamps_no_goal() {
        assert_eq!(display_percent(25.0), "25%");
        assert_eq!(display_percent(funding_percent(10.0, 0.0)), "—");
        assert_eq!(display_percent(funding_percent(0.0, 0.0)), "—");
    }

    #[test]
    fn test_top_donor_is_maximal() {
        let donations = vec![
            donation("Grace", 10.0, 1),
            donation("Ada", 75.0, 2),
            donation("Edsger", 30.0, 3),
        ];
        let top = top_donor(&donations).unwrap();
        assert_eq!(top.donor_name, "Ada");
        assert!(donations.iter().all(|d| d.amount <= top.amount));
    }

    #[test]
    fn test_top_donor_empty_is_none() {
        assert!(top_donor(&[]).is_none());
    }

    #[test]
    fn test_top_donor_tie_keeps_first_occurrence() {
        let donations = vec![
            donation("first", 50.0, 1),
            donation("second", 50.0, 2),
            donation("small", 5.0, 3),
        ];
        assert_eq!(top_donor(&donations).unwrap().donor_name, "first");
    }

    #[test]
    fn test_top_donor_all_zero_amounts() {
        // Zero-amount entries still have a top donor; only emptiness is None.
        let donations = vec![donation("a", 0.0, 1), donation("b", 0.0, 2)];
        assert_eq!(top_donor(&donations).unwrap().donor_name, "a");
    }

    #[test]
    fn test_sorted_by_amount_is_stable_permutation() {
        let donations = vec![
            donation("a", 20.0, 1),
            donation("b", 50.0, 2),
            donation("c", 20.0, 3),
            donation("d", 80.0, 4),
        ];
        let sorted = sorted_donations(&donations, DonationOrder::Top);

        assert_eq!(sorted.len(), donations.len());
        assert!(sorted.windows(2).all(|w| w[0].amount >= w[1].amount));
        // Equal amounts keep their input order.
        assert_eq!(sorted[2].donor_name, "a");
        assert_eq!(sorted[3].donor_name, "c");
        // The input is untouched.
        assert_eq!(donations[0].donor_name, "a");
        assert_eq!(donations[3].donor_name, "d");
    }

    #[test]
    fn test_sorted_by_date_newest_first() {
        let donations = vec![
            donation("old", 10.0, 1),
            donation("new", 10.0, 9),
            donation("mid", 10.0, 5),
        ];
        let sorted = sorted_donations(&donations, DonationOrder::Newest);
        let names: Vec<&str> = sorted.iter().map(|d| d.donor_name.as_str()).collect();
        assert_eq!(names, ["new", "mid", "old"]);
    }

    #[test]
    fn test_paginate_reconstructs_collection() {
        let items: Vec<u32> = (0..10).collect();
        let mut rebuilt = Vec::new();
        for page in 0..items.len().div_ceil(3) {
            rebuilt.extend_from_slice(paginate(&items, 3, page));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_paginate_clamps_last_page() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(paginate(&items, 3, 3), &[9]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(paginate(&items, 3, 4).is_empty());
        assert!(paginate(&items, 3, usize::MAX).is_empty());
        assert!(paginate::<u32>(&[], 3, 0).is_empty());
    }
}
