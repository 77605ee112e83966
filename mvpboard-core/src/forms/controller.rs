/*
 * forms/controller.rs
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

use super::{FieldErrors, Form};
use crate::client::SubmissionClient;
use crate::route::Navigator;
use crate::{Error, Result};
use map_vec::Map;
use std::cell::RefCell;
use std::fmt::{self, Debug};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Accepting input. Errors from the last attempt, if any, are kept.
    Editing,

    /// Checking every field before submitting.
    Validating,

    /// A request is in flight, further submits are ignored.
    Submitting,

    /// The record was created. Terminal for this controller.
    Completed,
}

/// Holds the draft of a form across all of its sections and submits it.
///
/// At most one submission is ever in flight: calling `submit()` again
/// before the first one resolves fails fast without contacting the client.
pub struct FormController<F: Form> {
    form: F,
    inner: RefCell<ControllerState>,
}

#[derive(Debug)]
struct ControllerState {
    draft: Map<&'static str, String>,
    section: usize,
    state: FormState,
    errors: FieldErrors,
    notice: Option<String>,
}

impl<F: Form> FormController<F> {
    pub fn new(form: F) -> Self {
        let mut draft = Map::new();
        for field in form.schema().fields() {
            draft.insert(field.name(), String::new());
        }

        FormController {
            form,
            inner: RefCell::new(ControllerState {
                draft,
                section: 0,
                state: FormState::Editing,
                errors: FieldErrors::new(),
                notice: None,
            }),
        }
    }

    #[inline]
    pub fn form(&self) -> &F {
        &self.form
    }

    #[inline]
    pub fn state(&self) -> FormState {
        self.inner.borrow().state
    }

    /// Replaces the whole value of a field.
    pub fn set(&self, field: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();

        if inner.state == FormState::Completed {
            return Err(Error::FormCompleted);
        }

        let name = match self.form.schema().field(field) {
            Some(field) => field.name(),
            None => return Err(Error::UnknownField(field.to_string())),
        };

        trace!("Setting form field '{}'", name);
        inner.draft.insert(name, value.to_string());
        Ok(())
    }

    pub fn get(&self, field: &str) -> Result<String> {
        self.inner
            .borrow()
            .draft
            .get(field)
            .cloned()
            .ok_or_else(|| Error::UnknownField(field.to_string()))
    }

    /// Errors from the last validation, by field.
    #[inline]
    pub fn errors(&self) -> FieldErrors {
        self.inner.borrow().errors.clone()
    }

    /// The top-level message from the last failed submission.
    #[inline]
    pub fn notice(&self) -> Option<String> {
        self.inner.borrow().notice.clone()
    }

    /// Index of the section currently being shown.
    #[inline]
    pub fn section(&self) -> usize {
        self.inner.borrow().section
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.form.schema().sections().len()
    }

    #[inline]
    pub fn is_last_section(&self) -> bool {
        self.section() + 1 == self.section_count()
    }

    /// How far along the form the user is, as a percentage.
    pub fn progress(&self) -> f32 {
        let current = (self.section() + 1) as f32;
        let total = self.section_count() as f32;

        current / total * 100.0
    }

    /// Validates the fields of the current section, and moves to the next one.
    pub fn next_section(&self) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        let section = inner.section;

        if section + 1 >= self.section_count() {
            return Err(Error::StaticMsg("already on the last section"));
        }

        match self.form.schema().validate_section(section, &inner.draft) {
            Ok(_) => {
                inner.errors = FieldErrors::new();
                inner.section += 1;

                debug!("Advancing form to section {}", inner.section);
                Ok(())
            }
            Err(errors) => {
                inner.errors = errors.clone();

                Err(Error::Validation(errors))
            }
        }
    }

    /// Goes back a section. Does nothing on the first one.
    pub fn previous_section(&self) {
        let mut inner = self.inner.borrow_mut();

        if inner.section > 0 {
            inner.section -= 1;

            debug!("Returning form to section {}", inner.section);
        }
    }

    /// Validates every field, and if all pass, creates the record.
    ///
    /// On success the draft is cleared, the controller is finished, and the
    /// navigator is sent to the form's success page. On failure the
    /// controller goes back to editing so the user can try again.
    pub async fn submit<C, N>(&self, client: &C, navigator: &N) -> Result<F::Id>
    where
        C: SubmissionClient<F::Record, Id = F::Id> + ?Sized,
        N: Navigator + ?Sized,
    {
        let record = self.prepare()?;

        info!("Submitting form record");
        let result = client.create(&record).await;

        let mut inner = self.inner.borrow_mut();
        match result {
            Ok(id) => {
                debug!("Form record created with ID {:?}", id);

                for field in self.form.schema().fields() {
                    inner.draft.insert(field.name(), String::new());
                }

                inner.section = 0;
                inner.state = FormState::Completed;
                drop(inner);

                navigator.navigate(self.form.success_route(id));
                Ok(id)
            }
            Err(error) => {
                let message = error.to_string();
                warn!("Form submission failed: {}", message);

                inner.notice = Some(message.clone());
                inner.state = FormState::Editing;

                Err(Error::SubmissionFailed(message))
            }
        }
    }

    /// Runs validation and builds the record, entering `Submitting` if it all succeeds.
    fn prepare(&self) -> Result<F::Record> {
        let mut inner = self.inner.borrow_mut();

        match inner.state {
            FormState::Submitting => {
                debug!("Ignoring submit, request already in flight");
                return Err(Error::SubmissionPending);
            }
            FormState::Completed => return Err(Error::FormCompleted),
            FormState::Editing | FormState::Validating => (),
        }

        inner.state = FormState::Validating;

        let values = match self.form.schema().validate(&inner.draft) {
            Ok(values) => values,
            Err(errors) => {
                debug!("Form has {} invalid field(s)", errors.len());

                inner.errors = errors.clone();
                inner.state = FormState::Editing;
                return Err(Error::Validation(errors));
            }
        };

        let record = match self.form.build(&values) {
            Ok(record) => record,
            Err(error) => {
                inner.state = FormState::Editing;
                return Err(error);
            }
        };

        inner.errors = FieldErrors::new();
        inner.notice = None;
        inner.state = FormState::Submitting;

        Ok(record)
    }
}

impl<F: Form + Debug> Debug for FormController<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FormController")
            .field("form", &self.form)
            .field("inner", &self.inner)
            .finish()
    }
}
