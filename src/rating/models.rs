/*
 * rating/models.rs
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

use crate::schema::ratings;
use mvpboard_core::models::NewRating;

#[derive(Debug, Insertable)]
#[table_name = "ratings"]
pub struct NewRatingRow<'a> {
    pub listing_id: i64,
    pub user_id: i64,
    pub rating: i16,
    pub feedback: &'a str,
}

impl<'a> From<&'a NewRating> for NewRatingRow<'a> {
    fn from(record: &'a NewRating) -> Self {
        let NewRating {
            listing_id,
            user_id,
            rating,
            ref feedback,
        } = *record;

        NewRatingRow {
            listing_id: listing_id.into(),
            user_id: user_id.into(),
            rating,
            feedback,
        }
    }
}
