/*
 * server/question.rs
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

use super::Server;
use crate::manager_prelude::*;
use mvpboard_core::qa;

impl Server {
    #[inline]
    pub async fn ask_question(&self, record: &NewQuestion) -> Result<QuestionId> {
        self.question.create(record).await
    }

    pub async fn get_question(&self, id: QuestionId) -> Result<Question> {
        self.question
            .get(id)
            .await?
            .ok_or(Error::QuestionNotFound)
    }

    /// Gets questions newest first, keeping only those matching the search term if given.
    pub async fn get_questions(&self, search: Option<&str>) -> Result<Vec<Question>> {
        let mut questions = self.question.get_all().await?;

        if let Some(term) = search {
            debug!("Filtering questions with search term '{}'", term);

            questions.retain(|question| qa::matches(question, term));
        }

        qa::newest_first(&mut questions);
        Ok(questions)
    }

    /// Adds a like to a question, returning the new count.
    #[inline]
    pub async fn like_question(&self, id: QuestionId) -> Result<i32> {
        self.question.like(id).await
    }

    #[inline]
    pub async fn answer_question(&self, id: QuestionId, answer: &str) -> Result<()> {
        self.question.answer(id, answer).await
    }
}
