/*
 * feed/metrics.rs
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

use crate::models::{Listing, Rating};
use crate::types::ListingId;
use std::collections::HashMap;

/// Rating summary for a single listing, recomputed on every feed load.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct ListingMetric {
    listing_id: ListingId,
    rating_count: u32,
    mean_rating: f32,
}

impl ListingMetric {
    /// Summarizes the given scores.
    /// With no scores, the mean is `0.0` rather than undefined.
    pub fn from_scores<I>(listing_id: ListingId, scores: I) -> Self
    where
        I: IntoIterator<Item = i16>,
    {
        let (count, sum) = scores
            .into_iter()
            .fold((0u32, 0i64), |(count, sum), score| {
                (count + 1, sum + i64::from(score))
            });

        let mean_rating = if count == 0 {
            0.0
        } else {
            sum as f32 / count as f32
        };

        ListingMetric {
            listing_id,
            rating_count: count,
            mean_rating,
        }
    }

    #[inline]
    pub fn listing_id(&self) -> ListingId {
        self.listing_id
    }

    #[inline]
    pub fn rating_count(&self) -> u32 {
        self.rating_count
    }

    #[inline]
    pub fn mean_rating(&self) -> f32 {
        self.mean_rating
    }

    #[inline]
    pub fn has_ratings(&self) -> bool {
        self.rating_count > 0
    }

    /// The mean as shown on a listing card.
    pub fn rating_label(&self) -> String {
        if self.has_ratings() {
            format!("{:.1}", self.mean_rating)
        } else {
            "No ratings yet".into()
        }
    }
}

/// Computes one metric per listing, in the order the listings were given.
///
/// Ratings are grouped in a single pass. Any rating pointing at a listing
/// which isn't present is left out of every metric.
pub fn aggregate(listings: &[Listing], ratings: &[Rating]) -> Vec<ListingMetric> {
    let mut groups: HashMap<ListingId, Vec<i16>> = HashMap::new();

    for rating in ratings {
        groups
            .entry(rating.listing_id())
            .or_insert_with(Vec::new)
            .push(rating.score());
    }

    let metrics = listings
        .iter()
        .map(|listing| {
            let scores = groups.remove(&listing.id()).unwrap_or_default();

            ListingMetric::from_scores(listing.id(), scores)
        })
        .collect();

    for (listing_id, scores) in groups {
        warn!(
            "Ignoring {} rating(s) for listing ID {} which wasn't fetched",
            scores.len(),
            listing_id,
        );
    }

    metrics
}
