/*
 * test/factory.rs
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

use crate::prelude::*;
use chrono::prelude::*;

pub fn listing(id: i64, owner: i64, title: &str) -> Listing {
    let record = NewListing {
        user_id: UserId::from_raw(owner),
        title: title.into(),
        description: format!("Looking for testers for {}", title),
        test_link: None,
        image_url: None,
        location: None,
        instructions: String::new(),
        limitations: String::new(),
        objectives: String::new(),
    };

    Listing::from_record(ListingId::from_raw(id), record, Utc::now())
}

pub fn listing_at(id: i64, title: &str, location: &str) -> Listing {
    let record = NewListing {
        user_id: UserId::from_raw(1),
        title: title.into(),
        description: format!("Looking for testers for {}", title),
        test_link: None,
        image_url: None,
        location: Some(location.into()),
        instructions: String::new(),
        limitations: String::new(),
        objectives: String::new(),
    };

    Listing::from_record(ListingId::from_raw(id), record, Utc::now())
}

pub fn rating(id: i64, listing_id: i64, author: i64, score: i16) -> Rating {
    let record = NewRating {
        listing_id: ListingId::from_raw(listing_id),
        user_id: UserId::from_raw(author),
        rating: score,
        feedback: "Tested it".into(),
    };

    Rating::from_record(RatingId::from_raw(id), record, Utc::now())
}

/// Gives each listing id the given number of ratings, all scored `score`.
pub fn ratings_with_counts(counts: &[(i64, usize)], score: i16) -> Vec<Rating> {
    let mut ratings = Vec::new();

    for &(listing_id, count) in counts {
        for _ in 0..count {
            let id = ratings.len() as i64 + 1;
            ratings.push(rating(id, listing_id, 100 + id, score));
        }
    }

    ratings
}
