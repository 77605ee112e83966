/*
 * server/rating.rs
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
use mvpboard_core::client::RatingFilter;

impl Server {
    /// Adds a rating to a listing. The listing must exist.
    #[inline]
    pub async fn add_rating(&self, record: &NewRating) -> Result<RatingId> {
        self.rating.create(record).await
    }

    /// Gets the ratings matching the filter, oldest first.
    #[inline]
    pub async fn get_ratings(&self, filter: Option<&RatingFilter>) -> Result<Vec<Rating>> {
        self.rating.get_all(filter).await
    }
}
