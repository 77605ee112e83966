/*
 * forms/schema.rs
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

use super::rule::{split_list, Rule};
use crate::{Error, Result, StdResult};
use map_vec::Map;
use std::fmt::{self, Display};

/// An accepted, typed field value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An optional field left blank.
    Missing,
    Text(String),
    Number(i64),
    List(Vec<String>),
}

/// A field's declared rules.
///
/// A field without [`Rule::Required`] is optional: if blank it's accepted
/// as [`Value::Missing`] and none of its other rules are checked.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    rules: Vec<(Rule, Option<&'static str>)>,
}

impl Field {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Field {
            name,
            rules: Vec::new(),
        }
    }

    /// Adds a rule which reports its default message.
    #[inline]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push((rule, None));
        self
    }

    /// Adds a rule which reports the given message instead of its default.
    #[inline]
    pub fn rule_with_message(mut self, rule: Rule, message: &'static str) -> Self {
        self.rules.push((rule, Some(message)));
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|(rule, _)| *rule == Rule::Required)
    }

    /// Checks a candidate value against every rule in order.
    /// The first failing rule determines the error message.
    pub fn validate(&self, value: &str) -> StdResult<Value, String> {
        if value.trim().is_empty() && !self.is_required() {
            return Ok(Value::Missing);
        }

        for (rule, message) in &self.rules {
            if !rule.check(value) {
                let message = match message {
                    Some(message) => (*message).to_string(),
                    None => rule.default_message(),
                };

                return Err(message);
            }
        }

        Ok(self.convert(value))
    }

    fn convert(&self, value: &str) -> Value {
        for (rule, _) in &self.rules {
            match *rule {
                Rule::Number { .. } => {
                    // Already checked, so the parse can't fail
                    if let Ok(number) = value.trim().parse() {
                        return Value::Number(number);
                    }
                }
                Rule::SubsetOf(_) => {
                    let items = split_list(value).map(String::from).collect();
                    return Value::List(items);
                }
                _ => (),
            }
        }

        Value::Text(value.trim().to_string())
    }
}

/// A named group of fields, shown together as one step.
#[derive(Debug, Clone)]
pub struct Section {
    name: &'static str,
    fields: Vec<Field>,
}

impl Section {
    #[inline]
    pub fn new(name: &'static str, fields: Vec<Field>) -> Self {
        Section { name, fields }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// All the sections of a form, in order.
#[derive(Debug, Clone)]
pub struct Schema {
    sections: Vec<Section>,
}

impl Schema {
    pub fn new(sections: Vec<Section>) -> Self {
        debug_assert!(!sections.is_empty(), "Schema has no sections");

        Schema { sections }
    }

    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|section| section.fields.iter())
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().find(|field| field.name == name)
    }

    /// Validates every field in the form.
    pub fn validate(
        &self,
        draft: &Map<&'static str, String>,
    ) -> StdResult<ValidValues, FieldErrors> {
        validate_fields(self.fields(), draft)
    }

    /// Validates only the fields belonging to one section.
    pub fn validate_section(
        &self,
        index: usize,
        draft: &Map<&'static str, String>,
    ) -> StdResult<ValidValues, FieldErrors> {
        let fields = self.sections[index].fields.iter();

        validate_fields(fields, draft)
    }
}

fn validate_fields<'a, I>(
    fields: I,
    draft: &Map<&'static str, String>,
) -> StdResult<ValidValues, FieldErrors>
where
    I: Iterator<Item = &'a Field>,
{
    let mut values = Map::new();
    let mut errors = FieldErrors::default();

    for field in fields {
        let raw = draft.get(field.name).map(String::as_str).unwrap_or("");

        match field.validate(raw) {
            Ok(value) => {
                values.insert(field.name, value);
            }
            Err(message) => {
                trace!("Field '{}' failed validation: {}", field.name, message);
                errors.insert(field.name, message);
            }
        }
    }

    if errors.is_empty() {
        Ok(ValidValues { values })
    } else {
        Err(errors)
    }
}

/// The typed output of a successful validation, keyed by field name.
#[derive(Debug, Clone)]
pub struct ValidValues {
    values: Map<&'static str, Value>,
}

impl ValidValues {
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> Result<String> {
        match self.get(name) {
            Some(Value::Text(text)) => Ok(text.clone()),
            _ => Err(Error::UnknownField(name.to_string())),
        }
    }

    /// Gets an optional text field, where blank means `None`.
    pub fn optional_text(&self, name: &str) -> Result<Option<String>> {
        match self.get(name) {
            Some(Value::Missing) => Ok(None),
            Some(Value::Text(text)) => Ok(Some(text.clone())),
            _ => Err(Error::UnknownField(name.to_string())),
        }
    }

    /// Like `optional_text`, but with blank as the empty string.
    pub fn text_or_empty(&self, name: &str) -> Result<String> {
        self.optional_text(name).map(Option::unwrap_or_default)
    }

    pub fn number(&self, name: &str) -> Result<i64> {
        match self.get(name) {
            Some(Value::Number(number)) => Ok(*number),
            _ => Err(Error::UnknownField(name.to_string())),
        }
    }

    pub fn list(&self, name: &str) -> Result<Vec<String>> {
        match self.get(name) {
            Some(Value::Missing) => Ok(Vec::new()),
            Some(Value::List(items)) => Ok(items.clone()),
            _ => Err(Error::UnknownField(name.to_string())),
        }
    }
}

/// Every failing field and its message, in form order.
#[derive(Debug, Clone)]
pub struct FieldErrors {
    errors: Map<&'static str, String>,
}

impl FieldErrors {
    #[inline]
    pub fn new() -> Self {
        FieldErrors { errors: Map::new() }
    }

    #[inline]
    pub fn insert(&mut self, field: &'static str, message: String) {
        self.errors.insert(field, message);
    }

    #[inline]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.get(field).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl Default for FieldErrors {
    #[inline]
    fn default() -> Self {
        FieldErrors::new()
    }
}

impl PartialEq for FieldErrors {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for FieldErrors {}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }

            write!(f, "{}: {}", field, message)?;
        }

        Ok(())
    }
}
