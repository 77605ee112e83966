/*
 * forms/test.rs
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

use super::*;
use crate::client::SubmissionClient;
use crate::prelude::*;
use crate::test::*;
use crate::Result;
use async_std::task;
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};

/// Holds every create call until the gate is opened.
#[derive(Debug)]
struct GatedStore {
    store: MemoryStore,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    calls: Cell<usize>,
}

#[async_trait(?Send)]
impl SubmissionClient<NewRating> for GatedStore {
    type Id = RatingId;

    async fn create(&self, record: &NewRating) -> Result<RatingId> {
        self.calls.set(self.calls.get() + 1);

        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.store.create(record).await
    }
}

fn store_with_listing() -> MemoryStore {
    MemoryStore::with_data(vec![listing(1, 9, "Gamified fitness")], vec![])
}

fn feedback_controller() -> FormController<FeedbackForm> {
    FormController::new(FeedbackForm::new(ListingId::from_raw(1), UserId::from_raw(2)))
}

fn expect_field_errors(result: Result<impl std::fmt::Debug>) -> FieldErrors {
    match result {
        Err(Error::Validation(errors)) => errors,
        other => panic!("Expected validation errors, got {:?}", other),
    }
}

#[test]
fn feedback_without_rating() {
    let store = store_with_listing();
    let navigator = RecordingNavigator::default();
    let controller = feedback_controller();

    controller.set("rating", "0").unwrap();
    controller.set("feedback", "Nice onboarding").unwrap();

    let errors = expect_field_errors(task::block_on(controller.submit(&store, &navigator)));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("rating"), Some(RATING_REQUIRED));
    assert_eq!(store.create_calls(), 0);
    assert!(navigator.routes().is_empty());
    assert_eq!(controller.state(), FormState::Editing);
    assert_eq!(controller.errors(), errors);
}

#[test]
fn feedback_reports_every_field() {
    let store = store_with_listing();
    let navigator = RecordingNavigator::default();
    let controller = feedback_controller();

    controller.set("feedback", "   ").unwrap();

    let errors = expect_field_errors(task::block_on(controller.submit(&store, &navigator)));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("rating"), Some(RATING_REQUIRED));
    assert_eq!(errors.get("feedback"), Some(COMMENT_REQUIRED));
    assert_eq!(store.create_calls(), 0);
}

#[test]
fn feedback_submits_once() {
    let store = store_with_listing();
    let navigator = RecordingNavigator::default();
    let controller = feedback_controller();

    controller.set("rating", "4").unwrap();
    controller.set("feedback", "Great flow").unwrap();

    let rating_id = task::block_on(controller.submit(&store, &navigator))
        .expect("Unable to submit feedback");

    assert_eq!(store.create_calls(), 1);

    let ratings = store.ratings();
    assert_eq!(ratings.len(), 1);

    let rating = &ratings[0];
    assert_eq!(rating.id(), rating_id);
    assert_eq!(rating.score(), 4);
    assert_eq!(rating.feedback(), "Great flow");
    assert_eq!(rating.listing_id(), ListingId::from_raw(1));
    assert_eq!(rating.user_id(), UserId::from_raw(2));

    assert_eq!(
        navigator.routes(),
        vec![Route::TestListing(ListingId::from_raw(1))],
    );

    // Draft is cleared and the controller is finished
    assert_eq!(controller.state(), FormState::Completed);
    assert_eq!(controller.get("feedback").unwrap(), "");
    assert!(matches!(
        controller.set("rating", "5"),
        Err(Error::FormCompleted)
    ));
    assert!(matches!(
        task::block_on(controller.submit(&store, &navigator)),
        Err(Error::FormCompleted)
    ));
    assert_eq!(store.create_calls(), 1);
}

#[test]
fn double_submit_is_ignored() {
    let (sender, receiver) = oneshot::channel();
    let store = GatedStore {
        store: store_with_listing(),
        gate: RefCell::new(Some(receiver)),
        calls: Cell::new(0),
    };

    let navigator = RecordingNavigator::default();
    let controller = feedback_controller();

    controller.set("rating", "5").unwrap();
    controller.set("feedback", "Loved the checkout").unwrap();

    let (first, second, _) = task::block_on(async {
        futures::join!(
            controller.submit(&store, &navigator),
            controller.submit(&store, &navigator),
            async move {
                sender.send(()).expect("Gate was dropped");
            },
        )
    });

    first.expect("First submission failed");
    assert!(matches!(second, Err(Error::SubmissionPending)));
    assert_eq!(store.calls.get(), 1);
    assert_eq!(store.store.ratings().len(), 1);
    assert_eq!(navigator.routes().len(), 1);
}

#[test]
fn failed_submission_can_retry() {
    let store = store_with_listing();
    let navigator = RecordingNavigator::default();
    let controller = feedback_controller();

    controller.set("rating", "3").unwrap();
    controller.set("feedback", "Crashed on login").unwrap();

    store.fail_with("connection reset by peer");

    let error = task::block_on(controller.submit(&store, &navigator))
        .expect_err("Submission succeeded against a failing store");

    match error {
        Error::SubmissionFailed(ref message) => {
            assert!(message.contains("connection reset by peer"));
        }
        _ => panic!("Unexpected error: {}", error),
    }

    assert_eq!(controller.state(), FormState::Editing);
    assert_eq!(controller.notice(), Some(error.to_string()));
    assert_eq!(controller.get("feedback").unwrap(), "Crashed on login");
    assert!(navigator.routes().is_empty());

    // No automatic retry, the user submits again
    store.recover();
    task::block_on(controller.submit(&store, &navigator)).expect("Retry failed");

    assert_eq!(store.create_calls(), 2);
    assert_eq!(controller.notice(), None);
    assert_eq!(navigator.routes().len(), 1);
}

#[test]
fn unknown_listing_is_reported() {
    let store = MemoryStore::default();
    let navigator = RecordingNavigator::default();
    let controller = feedback_controller();

    controller.set("rating", "2").unwrap();
    controller.set("feedback", "Link is broken").unwrap();

    let error = task::block_on(controller.submit(&store, &navigator))
        .expect_err("Rated a listing which doesn't exist");

    assert_eq!(
        error.to_string(),
        Error::ListingNotFound.to_string(),
    );
}

#[test]
fn unknown_field() {
    let controller = feedback_controller();

    assert!(matches!(
        controller.set("stars", "5"),
        Err(Error::UnknownField(_))
    ));
    assert!(controller.get("stars").is_err());
}

#[test]
fn listing_wizard() {
    let store = MemoryStore::default();
    let navigator = RecordingNavigator::default();
    let controller = FormController::new(ListingForm::new(UserId::from_raw(5)));

    assert_eq!(controller.section_count(), 3);
    assert_eq!(controller.section(), 0);

    // Can't leave the first section without a title
    let errors = expect_field_errors(controller.next_section());
    assert!(errors.contains("title"));
    assert!(errors.contains("description"));
    assert_eq!(controller.section(), 0);

    controller.set("title", "Vegan delivery").unwrap();
    controller
        .set("description", "Indian vegan food, delivered in Mumbai")
        .unwrap();

    controller.next_section().expect("Basics section didn't pass");
    assert_eq!(controller.section(), 1);

    controller.set("test_link", "not a link").unwrap();
    let errors = expect_field_errors(controller.next_section());
    assert_eq!(errors.len(), 1);
    assert!(errors.contains("test_link"));

    controller.set("test_link", "https://vegan.example.com").unwrap();
    controller.set("location", "Mumbai, India").unwrap();
    controller.next_section().expect("Testing section didn't pass");
    assert!(controller.is_last_section());
    assert!(controller.next_section().is_err());

    controller.previous_section();
    assert_eq!(controller.section(), 1);
    assert_eq!(controller.get("title").unwrap(), "Vegan delivery");

    controller.set("objectives", "Is checkout clear?").unwrap();

    let id = task::block_on(controller.submit(&store, &navigator))
        .expect("Unable to submit listing");

    let listings = store.listings();
    assert_eq!(listings.len(), 1);

    let listing = &listings[0];
    assert_eq!(listing.id(), id);
    assert_eq!(listing.user_id(), UserId::from_raw(5));
    assert_eq!(listing.title(), "Vegan delivery");
    assert_eq!(listing.test_link(), Some("https://vegan.example.com"));
    assert_eq!(listing.image_url(), None);
    assert_eq!(listing.location(), Some("Mumbai, India"));
    assert_eq!(listing.instructions(), "");
    assert_eq!(listing.objectives(), "Is checkout clear?");

    assert_eq!(navigator.routes(), vec![Route::Listing(id)]);
    assert_eq!(controller.section(), 0);
}

#[test]
fn account_wizard() {
    let store = MemoryStore::default();
    let navigator = RecordingNavigator::default();
    let controller = FormController::new(AccountForm);

    assert_eq!(controller.progress() as u32, 50);

    controller.set("email", "jenny@example").unwrap();
    controller.set("password", "hunter").unwrap();
    controller.set("first_name", "J").unwrap();
    controller.set("last_name", "Person").unwrap();
    controller.set("age", "0").unwrap();
    controller.set("country", "Brazil").unwrap();

    let errors = expect_field_errors(controller.next_section());
    let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, vec!["email", "first_name", "age"]);
    assert_eq!(errors.get("age"), Some("Age must be a valid number"));

    controller.set("email", "jenny@example.net").unwrap();
    controller.set("first_name", "Jenny").unwrap();
    controller.set("age", "29").unwrap();
    controller.next_section().expect("Account section didn't pass");
    assert_eq!(controller.progress() as u32, 100);

    // The preferences step still needs a user type
    let errors = expect_field_errors(task::block_on(controller.submit(&store, &navigator)));
    assert_eq!(errors.len(), 1);
    assert!(errors.contains("user_type"));

    controller.set("user_type", "tester").unwrap();
    controller.set("interests", "games, ai-tools").unwrap();

    task::block_on(controller.submit(&store, &navigator)).expect("Unable to create account");

    let accounts = store.accounts();
    assert_eq!(accounts.len(), 1);

    let account = &accounts[0];
    assert_eq!(account.email, "jenny@example.net");
    assert_eq!(account.password, "hunter");
    assert_eq!(account.age, 29);
    assert_eq!(account.user_type, UserType::Tester);
    assert_eq!(account.interests, vec!["games", "ai-tools"]);
    assert!(!format!("{:?}", account).contains("hunter"));

    assert_eq!(navigator.routes(), vec![Route::Feed]);
    assert_eq!(controller.get("email").unwrap(), "");
}

#[test]
fn question_form() {
    let store = MemoryStore::default();
    let navigator = RecordingNavigator::default();
    let controller = FormController::new(QuestionForm::new(UserId::from_raw(4)));

    let errors = expect_field_errors(task::block_on(controller.submit(&store, &navigator)));
    assert_eq!(errors.get("question"), Some("Please write your question"));

    controller
        .set("question", "How do I run an A/B test?")
        .unwrap();

    task::block_on(controller.submit(&store, &navigator)).expect("Unable to ask question");
    assert_eq!(navigator.routes(), vec![Route::QAndA]);
}

#[test]
fn short_question() {
    let store = MemoryStore::default();
    let navigator = RecordingNavigator::default();
    let controller = FormController::new(QuestionForm::new(UserId::from_raw(4)));

    controller.set("question", "Why?").unwrap();
    task::block_on(controller.submit(&store, &navigator)).expect("Unable to ask short question");

    let questions = store.questions();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question(), "Why?");
    assert_eq!(questions[0].user_id(), UserId::from_raw(4));
}

#[test]
fn account_email_normalized() {
    let store = MemoryStore::default();
    let navigator = RecordingNavigator::default();
    let controller = FormController::new(AccountForm);

    controller.set("email", "  Jenny@Example.net ").unwrap();
    controller.set("password", "hunter2").unwrap();
    controller.set("first_name", " Jenny").unwrap();
    controller.set("last_name", "Person").unwrap();
    controller.set("age", "29").unwrap();
    controller.set("country", "Brazil ").unwrap();
    controller.next_section().expect("Account section didn't pass");

    controller.set("user_type", "developer").unwrap();
    task::block_on(controller.submit(&store, &navigator)).expect("Unable to create account");

    let account = &store.accounts()[0];
    assert_eq!(account.email, "jenny@example.net");
    assert_eq!(account.first_name, "Jenny");
    assert_eq!(account.country, "Brazil");
}
