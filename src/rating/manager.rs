/*
 * rating/manager.rs
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

use super::models::NewRatingRow;
use crate::manager_prelude::*;
use mvpboard_core::client::RatingFilter;

pub struct RatingManager {
    conn: Arc<PgConnection>,
}

impl RatingManager {
    #[inline]
    pub fn new(conn: &Arc<PgConnection>) -> Self {
        debug!("Creating rating-manager service");

        let conn = Arc::clone(conn);
        RatingManager { conn }
    }

    /// Stores a new rating. Ratings are never replaced, each call adds one.
    pub async fn create(&self, record: &NewRating) -> Result<RatingId> {
        info!(
            "Adding rating of {} for listing ID {} by user ID {}",
            record.rating, record.listing_id, record.user_id,
        );

        self.transaction(async {
            use diesel::dsl::{exists, select};

            let listing_id: i64 = record.listing_id.into();
            let listing_exists = select(exists(listings::table.find(listing_id)))
                .get_result::<bool>(&*self.conn)?;

            if !listing_exists {
                warn!("Cannot rate listing ID {}, it doesn't exist", listing_id);
                return Err(Error::ListingNotFound);
            }

            let model = NewRatingRow::from(record);
            let rating_id = diesel::insert_into(ratings::table)
                .values(&model)
                .returning(ratings::dsl::rating_id)
                .get_result::<RatingId>(&*self.conn)?;

            Ok(rating_id)
        })
        .await
    }

    /// Gets the ratings matching the filter, oldest first.
    pub async fn get_all(&self, filter: Option<&RatingFilter>) -> Result<Vec<Rating>> {
        debug!("Getting all ratings (filter {:?})", filter);

        let filter = filter.copied().unwrap_or_default();
        let mut query = ratings::table.into_boxed();

        if let Some(listing_id) = filter.listing {
            let listing_id: i64 = listing_id.into();
            query = query.filter(ratings::listing_id.eq(listing_id));
        }

        if let Some(author) = filter.author {
            let author: i64 = author.into();
            query = query.filter(ratings::user_id.eq(author));
        }

        let result = query
            .order_by((ratings::created_at.asc(), ratings::rating_id.asc()))
            .load::<Rating>(&*self.conn)?;

        Ok(result)
    }

    #[inline]
    pub async fn get_for_listing(&self, listing_id: ListingId) -> Result<Vec<Rating>> {
        let filter = RatingFilter {
            listing: Some(listing_id),
            author: None,
        };

        self.get_all(Some(&filter)).await
    }
}

impl_async_transaction!(RatingManager);

impl Debug for RatingManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RatingManager")
            .field("conn", &"PgConnection { .. }")
            .finish()
    }
}
