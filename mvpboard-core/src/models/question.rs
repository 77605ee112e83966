/*
 * models/question.rs
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

use super::prelude::*;

/// Shown in place of an answer until the team replies.
pub const PENDING_ANSWER: &str = "This question is waiting for an answer from our team.";

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    question_id: QuestionId,
    user_id: UserId,
    question: String,
    answer: Option<String>,
    likes: i32,
    created_at: DateTime<Utc>,
}

impl Question {
    pub fn from_record(id: QuestionId, record: NewQuestion, created_at: DateTime<Utc>) -> Self {
        let NewQuestion { user_id, question } = record;

        Question {
            question_id: id,
            user_id,
            question,
            answer: None,
            likes: 0,
            created_at,
        }
    }

    #[inline]
    pub fn id(&self) -> QuestionId {
        self.question_id
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[inline]
    pub fn answer(&self) -> Option<&str> {
        self.answer.ref_map(|s| s.as_str())
    }

    /// The answer, or the pending placeholder if there isn't one yet.
    #[inline]
    pub fn answer_text(&self) -> &str {
        self.answer().unwrap_or(PENDING_ANSWER)
    }

    #[inline]
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    #[inline]
    pub fn likes(&self) -> i32 {
        self.likes
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub user_id: UserId,
    pub question: String,
}

#[test]
fn pending_answer() {
    let record = NewQuestion {
        user_id: UserId::from_raw(1),
        question: "How do I export feedback?".into(),
    };

    let question = Question::from_record(QuestionId::from_raw(7), record, Utc::now());

    assert_eq!(question.is_answered(), false);
    assert_eq!(question.answer_text(), PENDING_ANSWER);
    assert_eq!(question.likes(), 0);
}
