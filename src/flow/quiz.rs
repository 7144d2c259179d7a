use serde::{Deserialize, Serialize};

pub const QUIZ_LENGTH: usize = 10;
/// Minimum score that unlocks mastery.
pub const PASS_THRESHOLD: usize = 7;

/// Index of the correct option for each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerKey(pub [usize; QUIZ_LENGTH]);

/// Result of submitting a full answer sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub passed: bool,
}

impl QuizOutcome {
    pub fn from_score(score: usize) -> Self {
        Self {
            score,
            total: QUIZ_LENGTH,
            passed: score >= PASS_THRESHOLD,
        }
    }
}

/// Ten-slot answer sheet scored against an [`AnswerKey`].
///
/// A slot is written at most once per attempt; [`QuizState::reset`] starts a
/// new attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    key: AnswerKey,
    answers: [Option<usize>; QUIZ_LENGTH],
}

impl QuizState {
    pub fn new(key: AnswerKey) -> Self {
        Self {
            key,
            answers: [None; QUIZ_LENGTH],
        }
    }

    /// Record `option` for `question`. Returns `false` (and changes nothing)
    /// for an out-of-range question or an already answered slot.
    pub fn answer(&mut self, question: usize, option: usize) -> bool {
        match self.answers.get_mut(question) {
            Some(slot @ None) => {
                *slot = Some(option);
                true
            }
            _ => false,
        }
    }

    pub fn selection(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    pub fn is_correct(&self, question: usize) -> bool {
        match (self.selection(question), self.key.0.get(question)) {
            (Some(selected), Some(&correct)) => selected == correct,
            _ => false,
        }
    }

    pub fn correct_option(&self, question: usize) -> Option<usize> {
        self.key.0.get(question).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == QUIZ_LENGTH
    }

    /// Correct selections so far. Unanswered slots count as incorrect.
    pub fn score(&self) -> usize {
        (0..QUIZ_LENGTH).filter(|&q| self.is_correct(q)).count()
    }

    pub fn submit(&self) -> QuizOutcome {
        QuizOutcome::from_score(self.score())
    }

    pub fn reset(&mut self) {
        self.answers = [None; QUIZ_LENGTH];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: AnswerKey = AnswerKey([0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);

    /// Answer every question, getting exactly `correct` of them right.
    fn sheet_with(correct: usize) -> QuizState {
        let mut quiz = QuizState::new(KEY);
        for q in 0..QUIZ_LENGTH {
            let right = KEY.0[q];
            let option = if q < correct { right } else { (right + 1) % 4 };
            assert!(quiz.answer(q, option));
        }
        quiz
    }

    #[test]
    fn test_pass_iff_seven_or_more() {
        for k in 0..=QUIZ_LENGTH {
            let outcome = sheet_with(k).submit();
            assert_eq!(outcome.score, k);
            assert_eq!(outcome.total, QUIZ_LENGTH);
            assert_eq!(outcome.passed, k >= 7, "k = {k}");
        }
    }

    #[test]
    fn test_slot_written_once() {
        let mut quiz = QuizState::new(KEY);
        assert!(quiz.answer(0, 3));
        assert!(!quiz.answer(0, 0));
        assert_eq!(quiz.selection(0), Some(3));
        assert!(!quiz.is_correct(0));
        assert_eq!(quiz.answered_count(), 1);
    }

    #[test]
    fn test_out_of_range_question_ignored() {
        let mut quiz = QuizState::new(KEY);
        assert!(!quiz.answer(QUIZ_LENGTH, 0));
        assert_eq!(quiz.answered_count(), 0);
        assert_eq!(quiz.selection(42), None);
    }

    #[test]
    fn test_unanswered_counts_as_wrong() {
        let mut quiz = QuizState::new(KEY);
        for q in 0..7 {
            quiz.answer(q, KEY.0[q]);
        }
        assert!(!quiz.is_complete());
        let outcome = quiz.submit();
        assert_eq!(outcome.score, 7);
        assert!(outcome.passed);
    }

    #[test]
    fn test_reset_clears_every_slot() {
        let mut quiz = sheet_with(10);
        assert!(quiz.is_complete());
        quiz.reset();
        assert_eq!(quiz.answered_count(), 0);
        assert!((0..QUIZ_LENGTH).all(|q| quiz.selection(q).is_none()));
        assert!(quiz.answer(0, 0));
    }
}
