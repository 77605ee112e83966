/*
 * server/listing.rs
 *
 * mvpboard - Product validation marketplace service
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

use super::Server;
use crate::manager_prelude::*;
use mvpboard_core::client::ListingFilter;
use mvpboard_core::feed::ListingMetric;

/// Everything shown on a listing's own page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingDetails {
    listing: Listing,
    ratings: Vec<Rating>,
    metric: ListingMetric,
}

impl ListingDetails {
    #[inline]
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Every rating left on the listing, oldest first.
    #[inline]
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    #[inline]
    pub fn metric(&self) -> &ListingMetric {
        &self.metric
    }
}

impl Server {
    /// Creates a new listing, returning its ID.
    #[inline]
    pub async fn create_listing(&self, record: &NewListing) -> Result<ListingId> {
        self.listing.create(record).await
    }

    /// Gets the listing with the given ID.
    pub async fn get_listing(&self, id: ListingId) -> Result<Listing> {
        match self.listing.get(id).await? {
            Some(listing) => Ok(listing),
            None => {
                warn!("No listing with ID {}", id);

                Err(Error::ListingNotFound)
            }
        }
    }

    /// Gets all listings, oldest first. Optionally only those of one owner.
    #[inline]
    pub async fn get_listings(&self, filter: Option<&ListingFilter>) -> Result<Vec<Listing>> {
        self.listing.get_all(filter).await
    }

    /// Gets a listing along with its ratings and their summary.
    pub async fn listing_details(&self, id: ListingId) -> Result<ListingDetails> {
        info!("Getting details for listing ID {}", id);

        let listing = self.get_listing(id).await?;
        let ratings = self.rating.get_for_listing(id).await?;
        let metric = ListingMetric::from_scores(id, ratings.iter().map(Rating::score));

        Ok(ListingDetails {
            listing,
            ratings,
            metric,
        })
    }
}
