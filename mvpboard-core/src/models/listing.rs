/*
 * models/listing.rs
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

use super::prelude::*;

/// A published MVP looking for testers.
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    listing_id: ListingId,
    user_id: UserId,
    title: String,
    description: String,
    test_link: Option<String>,
    image_url: Option<String>,
    location: Option<String>,
    instructions: String,
    limitations: String,
    objectives: String,
    created_at: DateTime<Utc>,
}

impl Listing {
    /// Builds the stored form of a listing from the record that was submitted.
    pub fn from_record(id: ListingId, record: NewListing, created_at: DateTime<Utc>) -> Self {
        let NewListing {
            user_id,
            title,
            description,
            test_link,
            image_url,
            location,
            instructions,
            limitations,
            objectives,
        } = record;

        Listing {
            listing_id: id,
            user_id,
            title,
            description,
            test_link,
            image_url,
            location,
            instructions,
            limitations,
            objectives,
            created_at,
        }
    }

    #[inline]
    pub fn id(&self) -> ListingId {
        self.listing_id
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn test_link(&self) -> Option<&str> {
        self.test_link.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn location(&self) -> Option<&str> {
        self.location.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    #[inline]
    pub fn limitations(&self) -> &str {
        &self.limitations
    }

    #[inline]
    pub fn objectives(&self) -> &str {
        &self.objectives
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A finished listing record, ready to be handed to a submission client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub test_link: Option<String>,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub instructions: String,
    pub limitations: String,
    pub objectives: String,
}
