/*
 * test/listing.rs
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

#[test]
fn listing_wizard() {
    run(|server| task::block_on(listing_wizard_internal(server)));
}

async fn listing_wizard_internal(server: &Server) {
    let owner = create_user(server, "founder@example.com", UserType::Developer);
    let navigator = Recorder::default();
    let controller = FormController::new(ListingForm::new(owner));

    controller.set("title", "Vegan delivery").unwrap();
    controller
        .set("description", "Indian vegan food, delivered in Mumbai")
        .unwrap();
    controller.next_section().expect("Basics section didn't pass");

    controller.set("test_link", "https://vegan.example.com").unwrap();
    controller.set("location", "Mumbai, India").unwrap();
    controller.next_section().expect("Testing section didn't pass");

    controller.set("objectives", "Is checkout clear?").unwrap();

    let listing_id = controller
        .submit(server, &navigator)
        .await
        .expect("Unable to submit listing");

    assert_eq!(navigator.routes(), vec![Route::Listing(listing_id)]);

    let listing = server
        .get_listing(listing_id)
        .await
        .expect("Unable to get listing");

    assert_eq!(listing.id(), listing_id);
    assert_eq!(listing.user_id(), owner);
    assert_eq!(listing.title(), "Vegan delivery");
    assert_eq!(listing.test_link(), Some("https://vegan.example.com"));
    assert_eq!(listing.image_url(), None);
    assert_eq!(listing.location(), Some("Mumbai, India"));
    assert_eq!(listing.objectives(), "Is checkout clear?");

    let filter = ListingFilter { owner: Some(owner) };
    let owned = server
        .get_listings(Some(&filter))
        .await
        .expect("Unable to get listings by owner");

    assert_eq!(owned, vec![listing]);
}

#[test]
fn missing_listing() {
    run(|server| task::block_on(missing_listing_internal(server)));
}

async fn missing_listing_internal(server: &Server) {
    let navigator = Recorder::default();
    let error = server
        .get_listing(ListingId::from_raw(-1))
        .await
        .expect_err("Found listing which doesn't exist");

    assert_eq!(error.fixed_name(), Error::ListingNotFound.fixed_name());

    let notice = recover(&error, &navigator);
    assert!(notice.is_some());
    assert_eq!(navigator.routes(), vec![Route::Feed]);

    server
        .listing_details(ListingId::from_raw(-1))
        .await
        .expect_err("Got details for listing which doesn't exist");
}

#[test]
fn feedback() {
    run(|server| task::block_on(feedback_internal(server)));
}

async fn feedback_internal(server: &Server) {
    let owner = create_user(server, "owner@example.com", UserType::Company);
    let tester = create_user(server, "tester@example.com", UserType::Tester);
    let listing_id = create_listing(server, owner, "Gamified fitness").await;

    let navigator = Recorder::default();
    let controller = FormController::new(FeedbackForm::new(listing_id, tester));

    // Untouched star picker
    controller.set("rating", "0").unwrap();
    controller.set("feedback", "Great flow").unwrap();

    match controller.submit(server, &navigator).await {
        Err(Error::Validation(errors)) => {
            assert_eq!(errors.get("rating"), Some(forms::RATING_REQUIRED));
        }
        other => panic!("Zero star rating was accepted: {:?}", other),
    }

    controller.set("rating", "4").unwrap();
    let rating_id = controller
        .submit(server, &navigator)
        .await
        .expect("Unable to submit feedback");

    assert_eq!(navigator.routes(), vec![Route::TestListing(listing_id)]);

    let details = server
        .listing_details(listing_id)
        .await
        .expect("Unable to get listing details");

    assert_eq!(details.listing().id(), listing_id);
    assert_eq!(details.ratings().len(), 1);
    assert_eq!(details.metric().rating_count(), 1);
    assert_eq!(details.metric().mean_rating(), 4.0);

    let rating = &details.ratings()[0];
    assert_eq!(rating.id(), rating_id);
    assert_eq!(rating.user_id(), tester);
    assert_eq!(rating.score(), 4);
    assert_eq!(rating.feedback(), "Great flow");

    // Ratings are never replaced
    rate(server, listing_id, tester, 1).await;
    let details = server
        .listing_details(listing_id)
        .await
        .expect("Unable to get listing details");

    assert_eq!(details.metric().rating_count(), 2);
    assert_eq!(details.metric().rating_label(), "2.5");
}

#[test]
fn rate_missing_listing() {
    run(|server| task::block_on(rate_missing_listing_internal(server)));
}

async fn rate_missing_listing_internal(server: &Server) {
    let tester = create_user(server, "lost@example.com", UserType::Tester);
    let navigator = Recorder::default();
    let controller = FormController::new(FeedbackForm::new(ListingId::from_raw(-1), tester));

    controller.set("rating", "5").unwrap();
    controller.set("feedback", "Couldn't find it").unwrap();

    let error = controller
        .submit(server, &navigator)
        .await
        .expect_err("Rated a listing which doesn't exist");

    assert_eq!(error.to_string(), Error::ListingNotFound.to_string());
    assert_eq!(controller.state(), FormState::Editing);
    assert_eq!(controller.notice(), Some(error.to_string()));
    assert!(navigator.routes().is_empty());
}
