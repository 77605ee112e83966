/*
 * forms/listing.rs
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

use super::{Field, Form, Rule, Schema, Section, ValidValues};
use crate::models::NewListing;
use crate::route::Route;
use crate::types::{ListingId, UserId};
use crate::Result;

lazy_static! {
    static ref SCHEMA: Schema = Schema::new(vec![
        Section::new(
            "basics",
            vec![
                Field::new("title")
                    .rule_with_message(Rule::Required, "Give your MVP a title")
                    .rule(Rule::MinLength(3)),
                Field::new("description")
                    .rule_with_message(Rule::Required, "Describe what your MVP does")
                    .rule(Rule::MinLength(10)),
            ],
        ),
        Section::new(
            "testing",
            vec![
                Field::new("test_link").rule(Rule::Url),
                Field::new("image_url").rule(Rule::Url),
                Field::new("location"),
            ],
        ),
        Section::new(
            "guidance",
            vec![
                Field::new("instructions"),
                Field::new("limitations"),
                Field::new("objectives"),
            ],
        ),
    ]);
}

/// The "publish your MVP" wizard.
#[derive(Debug, Copy, Clone)]
pub struct ListingForm {
    user_id: UserId,
}

impl ListingForm {
    #[inline]
    pub fn new(user_id: UserId) -> Self {
        ListingForm { user_id }
    }
}

impl Form for ListingForm {
    type Record = NewListing;
    type Id = ListingId;

    #[inline]
    fn schema(&self) -> &Schema {
        &SCHEMA
    }

    fn build(&self, values: &ValidValues) -> Result<NewListing> {
        Ok(NewListing {
            user_id: self.user_id,
            title: values.text("title")?,
            description: values.text("description")?,
            test_link: values.optional_text("test_link")?,
            image_url: values.optional_text("image_url")?,
            location: values.optional_text("location")?,
            instructions: values.text_or_empty("instructions")?,
            limitations: values.text_or_empty("limitations")?,
            objectives: values.text_or_empty("objectives")?,
        })
    }

    #[inline]
    fn success_route(&self, id: ListingId) -> Route {
        Route::Listing(id)
    }
}
