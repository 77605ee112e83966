/*
 * listing/manager.rs
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

use super::models::NewListingRow;
use crate::manager_prelude::*;
use mvpboard_core::client::ListingFilter;

pub struct ListingManager {
    conn: Arc<PgConnection>,
}

impl ListingManager {
    #[inline]
    pub fn new(conn: &Arc<PgConnection>) -> Self {
        debug!("Creating listing-manager service");

        let conn = Arc::clone(conn);
        ListingManager { conn }
    }

    pub async fn create(&self, record: &NewListing) -> Result<ListingId> {
        info!(
            "Creating new listing '{}' for user ID {}",
            record.title, record.user_id,
        );

        self.transaction(async {
            let model = NewListingRow::from(record);
            let listing_id = diesel::insert_into(listings::table)
                .values(&model)
                .returning(listings::dsl::listing_id)
                .get_result::<ListingId>(&*self.conn)?;

            Ok(listing_id)
        })
        .await
    }

    pub async fn get(&self, id: ListingId) -> Result<Option<Listing>> {
        info!("Getting listing for ID {}", id);

        let id: i64 = id.into();
        let result = listings::table
            .find(id)
            .first::<Listing>(&*self.conn)
            .optional()?;

        Ok(result)
    }

    /// Gets every listing, in the order they were created.
    pub async fn get_all(&self, filter: Option<&ListingFilter>) -> Result<Vec<Listing>> {
        debug!("Getting all listings (filter {:?})", filter);

        let mut query = listings::table.into_boxed();

        if let Some(owner) = filter.and_then(|filter| filter.owner) {
            let owner: i64 = owner.into();
            query = query.filter(listings::user_id.eq(owner));
        }

        let result = query
            .order_by((listings::created_at.asc(), listings::listing_id.asc()))
            .load::<Listing>(&*self.conn)?;

        Ok(result)
    }
}

impl_async_transaction!(ListingManager);

impl Debug for ListingManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ListingManager")
            .field("conn", &"PgConnection { .. }")
            .finish()
    }
}
