/*
 * feed/mod.rs
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

//! Joins listings with their ratings to build the browsing feed.
//!
//! Everything here is a pure transform of what was fetched. Nothing is
//! cached between loads, so the metrics always reflect the latest ratings.

mod metrics;
mod ranking;
mod search;

use crate::client::{FetchClient, ListingFilter, RatingFilter};
use crate::models::{Listing, Rating};
use crate::types::ListingId;
use crate::Result;

pub use self::metrics::{aggregate, ListingMetric};
pub use self::ranking::rank;
pub use self::search::{matches, search};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FeedConfig {
    /// How many listings the "most tested" ranking shows.
    pub top_n: usize,
}

impl Default for FeedConfig {
    #[inline]
    fn default() -> Self {
        FeedConfig { top_n: 5 }
    }
}

/// A listing along with its rating summary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedEntry {
    listing: Listing,
    metric: ListingMetric,
}

impl FeedEntry {
    #[inline]
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    #[inline]
    pub fn metric(&self) -> &ListingMetric {
        &self.metric
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Feed {
    entries: Vec<FeedEntry>,
    top: Vec<FeedEntry>,
}

impl Feed {
    pub fn build(listings: Vec<Listing>, ratings: &[Rating], config: &FeedConfig) -> Self {
        let metrics = aggregate(&listings, ratings);
        let ranked = rank(&metrics, config.top_n);

        let entries: Vec<FeedEntry> = listings
            .into_iter()
            .zip(metrics)
            .map(|(listing, metric)| FeedEntry { listing, metric })
            .collect();

        let top = ranked
            .iter()
            .filter_map(|metric| {
                entries
                    .iter()
                    .find(|entry| entry.listing.id() == metric.listing_id())
                    .cloned()
            })
            .collect();

        debug!(
            "Built feed with {} listings from {} ratings",
            entries.len(),
            ratings.len(),
        );

        Feed { entries, top }
    }

    /// Every listing, in fetch order.
    #[inline]
    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    /// The most tested listings, most ratings first.
    #[inline]
    pub fn top(&self) -> &[FeedEntry] {
        &self.top
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, listing_id: ListingId) -> Option<&FeedEntry> {
        self.entries
            .iter()
            .find(|entry| entry.listing.id() == listing_id)
    }

    /// Filters the full feed by a search term. Metrics are unaffected.
    pub fn search(&self, term: &str) -> Vec<&FeedEntry> {
        self.entries
            .iter()
            .filter(|entry| matches(&entry.listing, term))
            .collect()
    }

    /// Like `search()`, but drops the non-matching entries in place.
    /// The top ranking is left as it was.
    pub fn retain_matching(&mut self, term: &str) {
        self.entries.retain(|entry| matches(&entry.listing, term));
    }
}

/// Fetches every listing and rating, and aggregates them.
pub async fn load_feed<C>(client: &C, config: &FeedConfig) -> Result<Feed>
where
    C: FetchClient<Listing, Filter = ListingFilter>
        + FetchClient<Rating, Filter = RatingFilter>
        + ?Sized,
{
    info!("Loading listing feed");

    let listings = FetchClient::<Listing>::list(client, None).await?;
    let ratings = FetchClient::<Rating>::list(client, None).await?;

    Ok(Feed::build(listings, &ratings, config))
}
