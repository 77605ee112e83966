/*
 * feed/search.rs
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

use crate::models::Listing;

/// Whether the listing's title, description or location contains the term.
/// Matching ignores case, and an empty term matches everything.
pub fn matches(listing: &Listing, term: &str) -> bool {
    let term = term.trim().to_lowercase();

    if term.is_empty() {
        return true;
    }

    let contains = |text: &str| text.to_lowercase().contains(&term);

    contains(listing.title())
        || contains(listing.description())
        || listing.location().map(contains).unwrap_or(false)
}

/// Keeps the matching listings, in their original order.
pub fn search<'a>(listings: &'a [Listing], term: &str) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| matches(listing, term))
        .collect()
}

#[test]
fn listing_search() {
    use crate::test::*;

    let listings = vec![
        listing_at(1, "Gamified Fitness", "Lisbon"),
        listing_at(2, "Vegan Delivery", "Mumbai, India"),
        listing(3, 1, "Plant Watering Reminders"),
    ];

    macro_rules! check {
        ($term:expr, $expected:expr) => {{
            let found: Vec<i64> = search(&listings, $term)
                .iter()
                .map(|listing| listing.id().to_i64())
                .collect();

            assert_eq!(found, $expected, "Search results for {:?}", $term);
        }};
    }

    check!("", vec![1, 2, 3]);
    check!("   ", vec![1, 2, 3]);
    check!("fitness", vec![1]);
    check!("VEGAN", vec![2]);
    check!("india", vec![2]);
    check!("testers for plant", vec![3]);
    check!("e", vec![1, 2, 3]);
    check!("blockchain", Vec::<i64>::new());
}
