/*
 * forms/mod.rs
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

//! Declarative form validation, and the controller which submits a form.

mod account;
mod controller;
mod feedback;
mod listing;
mod question;
mod rule;
mod schema;

#[cfg(test)]
mod test;

use crate::route::Route;
use crate::Result;
use std::fmt::Debug;

pub use self::account::AccountForm;
pub use self::controller::{FormController, FormState};
pub use self::feedback::{FeedbackForm, COMMENT_REQUIRED, RATING_REQUIRED};
pub use self::listing::ListingForm;
pub use self::question::QuestionForm;
pub use self::rule::Rule;
pub use self::schema::{Field, FieldErrors, Schema, Section, ValidValues, Value};

/// A concrete form: what it asks for, and what it produces.
pub trait Form {
    /// The finished record handed to the submission client.
    type Record: Debug;

    /// The identifier the submission client returns.
    type Id: Copy + Debug;

    fn schema(&self) -> &Schema;

    /// Builds the record from values which already passed validation.
    fn build(&self, values: &ValidValues) -> Result<Self::Record>;

    /// Where to go once the record has been created.
    fn success_route(&self, id: Self::Id) -> Route;
}
