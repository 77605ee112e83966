/*
 * profile.rs
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

//! Activity counters shown on a user's profile.

use crate::feed::{aggregate, ListingMetric};
use crate::models::{Listing, Rating};
use crate::types::{ListingId, UserId};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileStats {
    user_id: UserId,
    created_listings: u32,
    tested_listings: u32,
    feedback_given: u32,
    listings: Vec<ListingMetric>,
}

impl ProfileStats {
    /// Derives the stats for one user from the full listing and rating sets.
    ///
    /// Rating the same listing twice counts as two pieces of feedback,
    /// but only one tested listing.
    pub fn compute(user_id: UserId, listings: &[Listing], ratings: &[Rating]) -> Self {
        let owned: Vec<Listing> = listings
            .iter()
            .filter(|listing| listing.user_id() == user_id)
            .cloned()
            .collect();

        let given: Vec<&Rating> = ratings
            .iter()
            .filter(|rating| rating.user_id() == user_id)
            .collect();

        let tested: HashSet<ListingId> = given.iter().map(|rating| rating.listing_id()).collect();

        let received: Vec<Rating> = ratings
            .iter()
            .filter(|rating| owned.iter().any(|listing| listing.id() == rating.listing_id()))
            .cloned()
            .collect();

        ProfileStats {
            user_id,
            created_listings: owned.len() as u32,
            tested_listings: tested.len() as u32,
            feedback_given: given.len() as u32,
            listings: aggregate(&owned, &received),
        }
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn created_listings(&self) -> u32 {
        self.created_listings
    }

    #[inline]
    pub fn tested_listings(&self) -> u32 {
        self.tested_listings
    }

    #[inline]
    pub fn feedback_given(&self) -> u32 {
        self.feedback_given
    }

    /// Metrics for each listing this user created.
    #[inline]
    pub fn listings(&self) -> &[ListingMetric] {
        &self.listings
    }

    /// Mean score across every rating the user's listings received.
    pub fn average_received(&self) -> Option<f32> {
        let (count, sum) = self.listings.iter().fold((0, 0.0), |(count, sum), metric| {
            let n = metric.rating_count();

            (count + n, sum + metric.mean_rating() * n as f32)
        });

        if count == 0 {
            None
        } else {
            Some(sum / count as f32)
        }
    }
}

#[test]
fn profile_stats() {
    use crate::test::*;

    let listings = vec![
        listing(1, 10, "Habit tracker"),
        listing(2, 10, "Recipe swap"),
        listing(3, 20, "Parking finder"),
    ];

    let ratings = vec![
        rating(1, 3, 10, 4),
        rating(2, 3, 10, 5),
        rating(3, 1, 20, 2),
        rating(4, 1, 30, 4),
        rating(5, 2, 20, 3),
    ];

    let stats = ProfileStats::compute(UserId::from_raw(10), &listings, &ratings);
    assert_eq!(stats.created_listings(), 2);
    assert_eq!(stats.tested_listings(), 1);
    assert_eq!(stats.feedback_given(), 2);
    assert_eq!(stats.listings().len(), 2);
    assert_eq!(stats.listings()[0].rating_count(), 2);
    assert_eq!(stats.listings()[1].rating_count(), 1);
    assert_eq!(stats.average_received(), Some(3.0));

    let stats = ProfileStats::compute(UserId::from_raw(20), &listings, &ratings);
    assert_eq!(stats.created_listings(), 1);
    assert_eq!(stats.tested_listings(), 2);
    assert_eq!(stats.feedback_given(), 2);
    assert_eq!(stats.listings()[0].rating_count(), 2);
    assert_eq!(stats.average_received(), Some(4.5));

    let stats = ProfileStats::compute(UserId::from_raw(99), &listings, &ratings);
    assert_eq!(stats.created_listings(), 0);
    assert_eq!(stats.tested_listings(), 0);
    assert_eq!(stats.feedback_given(), 0);
    assert_eq!(stats.average_received(), None);
}
