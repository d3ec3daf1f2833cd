//! Quiz mini-game: a static question list with a per-question timer.
//!
//! Each question offers four answers and ten seconds. Picking an answer
//! scores and advances; running out of time advances without scoring. After
//! the last question the quiz shows its score until the player exits or
//! retries. Out-of-range answers and input after the end are ignored.

/// Seconds allowed per question.
pub const QUESTION_SECS: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: String,
    pub answers: [String; 4],
    pub correct: usize,
}

impl Question {
    pub fn new(prompt: &str, answers: [&str; 4], correct: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            answers: answers.map(str::to_string),
            correct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Asking,
    Finished,
}

#[derive(Debug, Clone)]
pub struct QuizState {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    remaining: f32,
    phase: QuizPhase,
}

impl QuizState {
    pub fn new(questions: Vec<Question>) -> Self {
        let phase = if questions.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::Asking
        };
        Self {
            questions,
            current: 0,
            score: 0,
            remaining: QUESTION_SECS,
            phase,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// Seconds left on the current question.
    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::Asking => self.questions.get(self.current),
            QuizPhase::Finished => None,
        }
    }

    /// Advance the question timer.
    pub fn tick(&mut self, dt: f32) {
        if self.phase != QuizPhase::Asking {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            // Time up: no point, next question.
            self.advance();
        }
    }

    /// Answer the current question with choice `index` (0..4).
    pub fn answer(&mut self, index: usize) {
        let Some(question) = self.current_question() else {
            return;
        };
        if index >= question.answers.len() {
            return;
        }
        if index == question.correct {
            self.score += 1;
        }
        self.advance();
    }

    /// Reset for another run of the same questions.
    pub fn retry(&mut self) {
        self.current = 0;
        self.score = 0;
        self.remaining = QUESTION_SECS;
        if !self.questions.is_empty() {
            self.phase = QuizPhase::Asking;
        }
    }

    fn advance(&mut self) {
        self.current += 1;
        self.remaining = QUESTION_SECS;
        if self.current >= self.questions.len() {
            self.phase = QuizPhase::Finished;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_questions() -> Vec<Question> {
        vec![
            Question::new("1+1?", ["1", "2", "3", "4"], 1),
            Question::new("2+2?", ["2", "3", "4", "5"], 2),
            Question::new("3+3?", ["4", "5", "6", "7"], 2),
        ]
    }

    #[test]
    fn scoring_and_finish() {
        let mut quiz = QuizState::new(three_questions());
        quiz.answer(1); // right
        quiz.answer(0); // wrong
        quiz.answer(2); // right
        assert_eq!(quiz.phase(), QuizPhase::Finished);
        assert_eq!(quiz.score(), 2);
        assert_eq!(quiz.total(), 3);
    }

    #[test]
    fn timeout_advances_without_scoring() {
        let mut quiz = QuizState::new(three_questions());
        quiz.tick(10.5);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.current_question().unwrap().prompt, "2+2?");
        // Timer resets per question.
        assert!(quiz.remaining() > 9.0);
    }

    #[test]
    fn answers_after_finish_are_ignored() {
        let mut quiz = QuizState::new(three_questions());
        for _ in 0..3 {
            quiz.answer(0);
        }
        let score = quiz.score();
        quiz.answer(1);
        quiz.answer(2);
        assert_eq!(quiz.score(), score);
        assert_eq!(quiz.phase(), QuizPhase::Finished);
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let mut quiz = QuizState::new(three_questions());
        quiz.answer(9);
        assert_eq!(quiz.current_question().unwrap().prompt, "1+1?");
    }

    #[test]
    fn retry_resets_everything() {
        let mut quiz = QuizState::new(three_questions());
        quiz.answer(1);
        quiz.answer(2);
        quiz.answer(0);
        quiz.retry();
        assert_eq!(quiz.phase(), QuizPhase::Asking);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.current_question().unwrap().prompt, "1+1?");
    }
}
