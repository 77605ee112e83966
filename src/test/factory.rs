/*
 * test/factory.rs
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

use super::prelude::*;
use crate::schema::users;
use diesel::prelude::*;
use std::cell::RefCell;

/// Keeps every route it's sent to.
#[derive(Debug, Default)]
pub struct Recorder {
    routes: RefCell<Vec<Route>>,
}

impl Recorder {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for Recorder {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

// User
pub fn create_user(server: &Server, email: &str, user_type: UserType) -> UserId {
    println!("Creating test user '{}'", email);

    diesel::insert_into(users::table)
        .values((
            users::email.eq(email),
            users::first_name.eq("Jenny"),
            users::last_name.eq("Person"),
            users::country.eq("Portugal"),
            users::user_type.eq(user_type.name()),
            users::interests.eq(vec![String::from("games")]),
        ))
        .returning(users::user_id)
        .get_result::<UserId>(server.connection())
        .expect("Unable to create user")
}

// Listing
pub fn new_listing(owner: UserId, title: &str) -> NewListing {
    NewListing {
        user_id: owner,
        title: title.into(),
        description: format!("Looking for testers for {}", title),
        test_link: Some(String::from("https://example.com/demo")),
        image_url: None,
        location: None,
        instructions: String::from("Sign up and try the main flow"),
        limitations: String::new(),
        objectives: String::from("Is onboarding clear?"),
    }
}

pub async fn create_listing(server: &Server, owner: UserId, title: &str) -> ListingId {
    server
        .create_listing(&new_listing(owner, title))
        .await
        .expect("Unable to create listing")
}

// Rating
pub async fn rate(server: &Server, listing_id: ListingId, author: UserId, score: i16) -> RatingId {
    let record = NewRating {
        listing_id,
        user_id: author,
        rating: score,
        feedback: String::from("Tested it"),
    };

    server
        .add_rating(&record)
        .await
        .expect("Unable to add rating")
}
