/*
 * forms/account.rs
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
use crate::models::{NewAccount, UserType, INTERESTS};
use crate::route::Route;
use crate::types::UserId;
use crate::{Error, Result};
use std::convert::TryFrom;

lazy_static! {
    static ref SCHEMA: Schema = Schema::new(vec![
        Section::new(
            "account",
            vec![
                Field::new("email")
                    .rule(Rule::Required)
                    .rule(Rule::Email),
                Field::new("password")
                    .rule(Rule::Required)
                    .rule_with_message(
                        Rule::MinLength(6),
                        "Password must be at least 6 characters",
                    ),
                Field::new("first_name")
                    .rule(Rule::Required)
                    .rule_with_message(
                        Rule::MinLength(2),
                        "First name must be at least 2 characters",
                    ),
                Field::new("last_name")
                    .rule(Rule::Required)
                    .rule_with_message(
                        Rule::MinLength(2),
                        "Last name must be at least 2 characters",
                    ),
                Field::new("age")
                    .rule(Rule::Required)
                    .rule_with_message(
                        Rule::Number {
                            min: Some(1),
                            max: Some(i64::from(u16::max_value())),
                        },
                        "Age must be a valid number",
                    ),
                Field::new("country")
                    .rule_with_message(Rule::Required, "Country is required")
                    .rule_with_message(Rule::MinLength(2), "Country is required"),
            ],
        ),
        Section::new(
            "preferences",
            vec![
                Field::new("user_type")
                    .rule_with_message(
                        Rule::Required,
                        "Please select how you will use the platform",
                    )
                    .rule(Rule::OneOf(UserType::NAMES)),
                Field::new("interests").rule(Rule::SubsetOf(INTERESTS)),
            ],
        ),
    ]);
}

/// Sign-up wizard: account details first, then preferences.
///
/// Both steps share one draft, which lives until the final submit succeeds.
#[derive(Debug, Copy, Clone, Default)]
pub struct AccountForm;

impl Form for AccountForm {
    type Record = NewAccount;
    type Id = UserId;

    #[inline]
    fn schema(&self) -> &Schema {
        &SCHEMA
    }

    fn build(&self, values: &ValidValues) -> Result<NewAccount> {
        let age = u16::try_from(values.number("age")?)
            .map_err(|_| Error::StaticMsg("age doesn't fit into u16"))?;

        let user_type = {
            let name = values.text("user_type")?;

            UserType::try_from(name.as_str()).map_err(|_| Error::StaticMsg("unknown user type"))?
        };

        Ok(NewAccount {
            email: values.text("email")?.to_ascii_lowercase(),
            password: values.text("password")?,
            first_name: values.text("first_name")?,
            last_name: values.text("last_name")?,
            age,
            country: values.text("country")?,
            user_type,
            interests: values.list("interests")?,
        })
    }

    #[inline]
    fn success_route(&self, _: UserId) -> Route {
        Route::Feed
    }
}
