/*
 * feed/ranking.rs
 *
 * mvpboard-core - Product validation marketplace service
 * Copyright (C) 2019-2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use super::ListingMetric;

/// Orders metrics by rating count, most rated first, and keeps `top_n`.
///
/// The sort is stable, so listings with equal counts stay in fetch order.
pub fn rank(metrics: &[ListingMetric], top_n: usize) -> Vec<ListingMetric> {
    let mut ranked = metrics.to_vec();
    ranked.sort_by(|a, b| b.rating_count().cmp(&a.rating_count()));
    ranked.truncate(top_n);
    ranked
}

#[test]
fn ranking() {
    use crate::types::ListingId;

    fn metrics(counts: &[usize]) -> Vec<ListingMetric> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let id = ListingId::from_raw(i as i64 + 1);

                ListingMetric::from_scores(id, vec![3; count])
            })
            .collect()
    }

    fn ids(metrics: &[ListingMetric]) -> Vec<i64> {
        metrics.iter().map(|m| m.listing_id().to_i64()).collect()
    }

    // A, B, C, D
    let input = metrics(&[3, 5, 5, 1]);
    assert_eq!(ids(&rank(&input, 5)), vec![2, 3, 1, 4]);
    assert_eq!(ids(&rank(&input, 2)), vec![2, 3]);
    assert_eq!(ids(&rank(&input, 0)), Vec::<i64>::new());

    // Input isn't touched
    assert_eq!(ids(&input), vec![1, 2, 3, 4]);

    let input = metrics(&[0, 0, 2, 0, 0, 0, 0]);
    assert_eq!(ids(&rank(&input, 5)), vec![3, 1, 2, 4, 5]);

    assert!(rank(&[], 5).is_empty());
}
