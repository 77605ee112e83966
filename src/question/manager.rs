/*
 * question/manager.rs
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

use super::models::NewQuestionRow;
use crate::manager_prelude::*;
use crate::utils::rows_to_result;

pub struct QuestionManager {
    conn: Arc<PgConnection>,
}

impl QuestionManager {
    #[inline]
    pub fn new(conn: &Arc<PgConnection>) -> Self {
        debug!("Creating question-manager service");

        let conn = Arc::clone(conn);
        QuestionManager { conn }
    }

    pub async fn create(&self, record: &NewQuestion) -> Result<QuestionId> {
        info!("Creating new question from user ID {}", record.user_id);

        let model = NewQuestionRow {
            user_id: record.user_id.into(),
            question: &record.question,
        };

        let question_id = diesel::insert_into(questions::table)
            .values(&model)
            .returning(questions::dsl::question_id)
            .get_result::<QuestionId>(&*self.conn)?;

        Ok(question_id)
    }

    pub async fn get(&self, id: QuestionId) -> Result<Option<Question>> {
        info!("Getting question for ID {}", id);

        let id: i64 = id.into();
        let result = questions::table
            .find(id)
            .first::<Question>(&*self.conn)
            .optional()?;

        Ok(result)
    }

    /// Gets every question, newest first.
    pub async fn get_all(&self) -> Result<Vec<Question>> {
        debug!("Getting all questions");

        let result = questions::table
            .order_by((questions::created_at.desc(), questions::question_id.desc()))
            .load::<Question>(&*self.conn)?;

        Ok(result)
    }

    /// Adds a like, returning the new total.
    pub async fn like(&self, id: QuestionId) -> Result<i32> {
        info!("Liking question ID {}", id);

        let id: i64 = id.into();
        let likes = diesel::update(questions::table.find(id))
            .set(questions::likes.eq(questions::likes + 1))
            .returning(questions::likes)
            .get_result::<i32>(&*self.conn)
            .optional()?;

        likes.ok_or(Error::QuestionNotFound)
    }

    pub async fn answer(&self, id: QuestionId, answer: &str) -> Result<()> {
        info!("Answering question ID {}", id);

        let id: i64 = id.into();
        let rows = diesel::update(questions::table.find(id))
            .set(questions::answer.eq(Some(answer)))
            .execute(&*self.conn)?;

        if rows_to_result(rows) {
            Ok(())
        } else {
            Err(Error::QuestionNotFound)
        }
    }
}

impl Debug for QuestionManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("QuestionManager")
            .field("conn", &"PgConnection { .. }")
            .finish()
    }
}
