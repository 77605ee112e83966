/*
 * qa.rs
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

//! Ordering and search for the questions board.

use crate::models::Question;

/// Whether the question, or its displayed answer, contains the term.
/// Matching ignores case, and an empty term matches everything.
pub fn matches(question: &Question, term: &str) -> bool {
    let term = term.trim().to_lowercase();

    term.is_empty()
        || question.question().to_lowercase().contains(&term)
        || question.answer_text().to_lowercase().contains(&term)
}

pub fn search<'a>(questions: &'a [Question], term: &str) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|question| matches(question, term))
        .collect()
}

/// Sorts so the most recently asked question comes first.
/// Questions asked at the same instant keep their relative order.
pub fn newest_first(questions: &mut [Question]) {
    questions.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::{NewQuestion, PENDING_ANSWER};
    use crate::types::{QuestionId, UserId};
    use chrono::prelude::*;

    fn question(id: i64, text: &str, asked_at: i64) -> Question {
        let record = NewQuestion {
            user_id: UserId::from_raw(1),
            question: text.into(),
        };

        Question::from_record(
            QuestionId::from_raw(id),
            record,
            Utc.timestamp(1_580_000_000 + asked_at, 0),
        )
    }

    fn ids(questions: &[&Question]) -> Vec<i64> {
        questions.iter().map(|q| q.id().to_i64()).collect()
    }

    #[test]
    fn question_search() {
        let questions = vec![
            question(1, "How do I pick testers for a B2B tool?", 0),
            question(2, "Can I edit a listing after posting?", 10),
        ];

        assert_eq!(ids(&search(&questions, "")), vec![1, 2]);
        assert_eq!(ids(&search(&questions, "b2b")), vec![1]);
        assert_eq!(ids(&search(&questions, "LISTING")), vec![2]);

        // The placeholder answer is searchable too, as it's what gets shown
        let placeholder = PENDING_ANSWER.split_whitespace().last().unwrap();
        assert_eq!(ids(&search(&questions, placeholder)), vec![1, 2]);
        assert!(search(&questions, "refund").is_empty());
    }

    #[test]
    fn ordering() {
        let mut questions = vec![
            question(1, "Oldest question", 0),
            question(2, "Newest question", 500),
            question(3, "Middle question", 200),
            question(4, "Also middle", 200),
        ];

        newest_first(&mut questions);

        let order: Vec<_> = questions.iter().map(|q| q.id().to_i64()).collect();
        assert_eq!(order, vec![2, 3, 4, 1]);
    }
}
