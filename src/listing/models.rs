/*
 * listing/models.rs
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

use crate::schema::listings;
use mvpboard_core::models::NewListing;
use ref_map::*;

#[derive(Debug, Insertable)]
#[table_name = "listings"]
pub struct NewListingRow<'a> {
    pub user_id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub test_link: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub location: Option<&'a str>,
    pub instructions: &'a str,
    pub limitations: &'a str,
    pub objectives: &'a str,
}

impl<'a> From<&'a NewListing> for NewListingRow<'a> {
    fn from(record: &'a NewListing) -> Self {
        NewListingRow {
            user_id: record.user_id.into(),
            title: &record.title,
            description: &record.description,
            test_link: record.test_link.ref_map(|s| s.as_str()),
            image_url: record.image_url.ref_map(|s| s.as_str()),
            location: record.location.ref_map(|s| s.as_str()),
            instructions: &record.instructions,
            limitations: &record.limitations,
            objectives: &record.objectives,
        }
    }
}
