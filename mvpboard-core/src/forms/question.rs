/*
 * forms/question.rs
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
use crate::models::NewQuestion;
use crate::route::Route;
use crate::types::{QuestionId, UserId};
use crate::Result;

lazy_static! {
    static ref SCHEMA: Schema = Schema::new(vec![Section::new(
        "question",
        vec![Field::new("question")
            .rule_with_message(Rule::Required, "Please write your question")],
    )]);
}

#[derive(Debug, Copy, Clone)]
pub struct QuestionForm {
    user_id: UserId,
}

impl QuestionForm {
    #[inline]
    pub fn new(user_id: UserId) -> Self {
        QuestionForm { user_id }
    }
}

impl Form for QuestionForm {
    type Record = NewQuestion;
    type Id = QuestionId;

    #[inline]
    fn schema(&self) -> &Schema {
        &SCHEMA
    }

    fn build(&self, values: &ValidValues) -> Result<NewQuestion> {
        Ok(NewQuestion {
            user_id: self.user_id,
            question: values.text("question")?,
        })
    }

    #[inline]
    fn success_route(&self, _: QuestionId) -> Route {
        Route::QAndA
    }
}
