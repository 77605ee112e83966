/*
 * forms/rule.rs
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

use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").unwrap();
    static ref URL_REGEX: Regex = Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap();
}

/// A single constraint on a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The value must not be blank.
    Required,

    /// At least this many characters, after trimming.
    MinLength(usize),

    /// An integer within the given bounds, both inclusive.
    Number { min: Option<i64>, max: Option<i64> },

    /// Looks like an email address.
    Email,

    /// An absolute `http` or `https` URL.
    Url,

    /// Exactly one of the given options.
    OneOf(&'static [&'static str]),

    /// A comma-separated selection from the given options.
    SubsetOf(&'static [&'static str]),
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        let value = value.trim();

        match *self {
            Rule::Required => !value.is_empty(),
            Rule::MinLength(length) => value.chars().count() >= length,
            Rule::Number { min, max } => match value.parse::<i64>() {
                Ok(number) => {
                    min.map(|min| number >= min).unwrap_or(true)
                        && max.map(|max| number <= max).unwrap_or(true)
                }
                Err(_) => false,
            },
            Rule::Email => EMAIL_REGEX.is_match(value),
            Rule::Url => URL_REGEX.is_match(value),
            Rule::OneOf(options) => options.contains(&value),
            Rule::SubsetOf(options) => split_list(value).all(|item| options.contains(&item)),
        }
    }

    pub fn default_message(&self) -> String {
        match *self {
            Rule::Required => "This field is required".into(),
            Rule::MinLength(length) => format!("Must be at least {} characters", length),
            Rule::Number {
                min: Some(min),
                max: Some(max),
            } => format!("Must be a number between {} and {}", min, max),
            Rule::Number {
                min: Some(min),
                max: None,
            } => format!("Must be a number no less than {}", min),
            Rule::Number {
                min: None,
                max: Some(max),
            } => format!("Must be a number no greater than {}", max),
            Rule::Number {
                min: None,
                max: None,
            } => "Must be a number".into(),
            Rule::Email => "Invalid email address".into(),
            Rule::Url => "Must be a link starting with http:// or https://".into(),
            Rule::OneOf(_) => "Please select one of the options".into(),
            Rule::SubsetOf(_) => "Contains an unknown option".into(),
        }
    }
}

/// Splits a multi-select value into its items, ignoring blanks.
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
}

#[test]
fn rules() {
    macro_rules! check {
        ($rule:expr, $value:expr, $expected:expr) => {
            assert_eq!(
                $rule.check($value),
                $expected,
                "Rule {:?} on {:?}",
                $rule,
                $value,
            );
        };
    }

    check!(Rule::Required, "", false);
    check!(Rule::Required, "   ", false);
    check!(Rule::Required, "x", true);

    check!(Rule::MinLength(2), "a", false);
    check!(Rule::MinLength(2), " a ", false);
    check!(Rule::MinLength(2), "ab", true);
    check!(Rule::MinLength(2), "çã", true);

    let age = Rule::Number {
        min: Some(1),
        max: None,
    };
    check!(age, "0", false);
    check!(age, "-4", false);
    check!(age, "twelve", false);
    check!(age, "12", true);

    let stars = Rule::Number {
        min: Some(1),
        max: Some(5),
    };
    check!(stars, "0", false);
    check!(stars, "1", true);
    check!(stars, "5", true);
    check!(stars, "6", false);

    check!(Rule::Email, "jenny@example.net", true);
    check!(Rule::Email, "jenny@example", false);
    check!(Rule::Email, "jenny example.net", false);
    check!(Rule::Email, "@example.net", false);

    check!(Rule::Url, "https://my-mvp.app", true);
    check!(Rule::Url, "http://localhost:3000/demo", true);
    check!(Rule::Url, "my-mvp.app", false);
    check!(Rule::Url, "ftp://my-mvp.app", false);

    const OPTIONS: &[&str] = &["games", "social"];
    check!(Rule::OneOf(OPTIONS), "games", true);
    check!(Rule::OneOf(OPTIONS), "chess", false);
    check!(Rule::SubsetOf(OPTIONS), "games, social", true);
    check!(Rule::SubsetOf(OPTIONS), "games,chess", false);
    check!(Rule::SubsetOf(OPTIONS), "", true);
}
