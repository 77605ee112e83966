/*
 * test/mod.rs
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

extern crate color_backtrace;

mod factory;
mod listing;

mod prelude {
    pub use super::factory::*;
    pub use super::run;
    pub use crate::forms::{self, FeedbackForm, ListingForm, QuestionForm};
    pub use crate::prelude::*;
    pub use async_std::task;
}

use crate::prelude::*;
use std::env;

/// Runs a test against the database at `DATABASE_TEST_URL`.
///
/// Everything happens inside a transaction which is rolled back afterwards.
/// If the variable isn't set the test is skipped.
pub fn run<F: FnOnce(&Server)>(f: F) {
    color_backtrace::install();

    let database_url = match env::var("DATABASE_TEST_URL") {
        Ok(url) => url,
        Err(_) => {
            println!("No DATABASE_TEST_URL specified, skipping database test");
            return;
        }
    };

    let server = Server::new(Config::new(database_url)).expect("Unable to create mvpboard server");

    server.test_transaction(|| {
        f(&server);
        Ok(())
    });
}
