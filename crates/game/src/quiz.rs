//! Session quiz: joining, answering and the start countdown

use athlete_core::{Question, Session, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// The player as entered on the join screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub nickname: String,
    pub email: Option<String>,
    pub session_code: String,
}

impl Player {
    /// Validate join input; the email stays optional and unchecked here
    pub fn join(code: &str, nickname: &str, email: Option<&str>) -> Result<Self> {
        let session_code = code.trim();
        if session_code.is_empty() {
            return Err(GameError::SessionCodeRequired);
        }
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(GameError::NicknameRequired);
        }

        Ok(Self {
            nickname: nickname.to_string(),
            email: email
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            session_code: session_code.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub answer: String,
    pub correct: bool,
}

/// Where the quiz goes after the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved on to the question at this index
    Question(usize),
    /// Last question done, on to the leaderboard
    Finished,
}

/// Progress through the questions of a session
#[derive(Debug, Clone)]
pub struct QuizProgress {
    session: Session,
    index: usize,
    answers: Vec<Answer>,
    finished: bool,
}

impl QuizProgress {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            index: 0,
            answers: Vec::new(),
            finished: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.session.questions.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.session.questions.len()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_last(&self) -> bool {
        self.total() > 0 && self.index == self.total() - 1
    }

    /// Percent of the quiz reached, counting the current question
    pub fn progress_percent(&self) -> u32 {
        if self.total() == 0 {
            return 0;
        }
        (((self.index + 1) * 100) as f64 / self.total() as f64).round() as u32
    }

    /// Whether the current question already has a recorded answer
    pub fn is_answered(&self) -> bool {
        self.current()
            .is_some_and(|q| self.answers.iter().any(|a| a.question_id == q.id))
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    /// Check that `option` can be submitted for the current question
    pub fn check_answer(&self, option: &str) -> Result<&Question> {
        let question = self.current().ok_or(GameError::QuizFinished)?;
        if self.is_answered() {
            return Err(GameError::AlreadyAnswered(question.id.clone()));
        }
        if !question.has_option(option) {
            return Err(GameError::UnknownOption {
                question_id: question.id.clone(),
                option: option.to_string(),
            });
        }
        Ok(question)
    }

    /// Record an acknowledged answer for the current question
    pub fn record(&mut self, option: &str, correct: bool) -> Result<()> {
        let question_id = self.check_answer(option)?.id.clone();
        self.answers.push(Answer {
            question_id,
            answer: option.to_string(),
            correct,
        });
        Ok(())
    }

    /// Move past the answered current question
    pub fn advance(&mut self) -> Result<QuizStep> {
        let question = self.current().ok_or(GameError::QuizFinished)?;
        if !self.is_answered() {
            return Err(GameError::AnswerRequired(question.id.clone()));
        }

        if self.is_last() {
            self.finished = true;
            Ok(QuizStep::Finished)
        } else {
            self.index += 1;
            Ok(QuizStep::Question(self.index))
        }
    }
}

/// Countdown to the session start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    started_at: Timestamp,
    window: chrono::Duration,
}

impl Countdown {
    pub fn new(started_at: Timestamp, window: chrono::Duration) -> Self {
        Self { started_at, window }
    }

    /// Time left at `now`, never negative
    pub fn remaining(&self, now: Timestamp) -> chrono::Duration {
        let elapsed = now - self.started_at;
        (self.window - elapsed).max(chrono::Duration::zero())
    }

    pub fn is_over(&self, now: Timestamp) -> bool {
        self.remaining(now) <= chrono::Duration::zero()
    }

    /// Remaining time as `MM:SS`, whole seconds rounded down
    pub fn display(&self, now: Timestamp) -> String {
        let secs = self.remaining(now).num_seconds();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn question(id: &str, options: &[&str], correct: Option<&str>) -> Question {
        Question {
            id: id.to_string(),
            title: format!("Question {}", id),
            context: None,
            options: options.iter().map(|o| o.to_string()).collect(),
            explanation: None,
            correct: correct.map(str::to_string),
        }
    }

    fn session() -> Session {
        Session {
            code: "DEMO24".to_string(),
            title: "Markets 101".to_string(),
            questions: vec![
                question("q1", &["A", "B"], Some("A")),
                question("q2", &["C", "D"], Some("D")),
                question("q3", &["E", "F"], None),
            ],
        }
    }

    #[test]
    fn test_join_validation() {
        assert!(matches!(
            Player::join("DEMO24", "   ", None),
            Err(GameError::NicknameRequired)
        ));
        assert!(matches!(
            Player::join(" ", "Sam", None),
            Err(GameError::SessionCodeRequired)
        ));

        let player = Player::join(" DEMO24 ", " Sam ", Some("  ")).unwrap();
        assert_eq!(player.nickname, "Sam");
        assert_eq!(player.session_code, "DEMO24");
        assert_eq!(player.email, None);
    }

    #[test]
    fn test_progress_through_quiz() {
        let mut quiz = QuizProgress::new(session());
        assert_eq!(quiz.progress_percent(), 33);
        assert!(!quiz.is_last());

        quiz.record("A", true).unwrap();
        assert_eq!(quiz.advance().unwrap(), QuizStep::Question(1));
        assert_eq!(quiz.progress_percent(), 67);

        quiz.record("C", false).unwrap();
        assert_eq!(quiz.advance().unwrap(), QuizStep::Question(2));
        assert!(quiz.is_last());
        assert_eq!(quiz.progress_percent(), 100);

        quiz.record("E", true).unwrap();
        assert_eq!(quiz.advance().unwrap(), QuizStep::Finished);
        assert!(quiz.is_finished());
        assert!(quiz.current().is_none());
        assert_eq!(quiz.correct_count(), 2);
        assert!(matches!(quiz.advance(), Err(GameError::QuizFinished)));
    }

    #[test]
    fn test_answer_rules() {
        let mut quiz = QuizProgress::new(session());

        assert!(matches!(quiz.advance(), Err(GameError::AnswerRequired(id)) if id == "q1"));
        assert!(matches!(
            quiz.check_answer("Z"),
            Err(GameError::UnknownOption { .. })
        ));

        quiz.record("B", false).unwrap();
        assert!(matches!(
            quiz.record("A", true),
            Err(GameError::AlreadyAnswered(id)) if id == "q1"
        ));
        assert_eq!(quiz.answers().len(), 1);
    }

    #[test]
    fn test_empty_session() {
        let quiz = QuizProgress::new(Session {
            code: "EMPTY".to_string(),
            title: "Nothing".to_string(),
            questions: Vec::new(),
        });
        assert_eq!(quiz.progress_percent(), 0);
        assert!(quiz.current().is_none());
        assert!(!quiz.is_last());
    }

    #[test]
    fn test_countdown() {
        let start = Utc.with_ymd_and_hms(2025, 1, 13, 9, 0, 0).unwrap();
        let countdown = Countdown::new(start, Duration::seconds(45));

        assert_eq!(countdown.remaining(start), Duration::seconds(45));
        assert_eq!(countdown.display(start), "00:45");
        assert_eq!(
            countdown.display(start + Duration::milliseconds(30_500)),
            "00:14"
        );
        assert!(countdown.is_over(start + Duration::seconds(45)));
        assert_eq!(
            countdown.remaining(start + Duration::minutes(5)),
            Duration::zero()
        );

        let long = Countdown::new(start, Duration::seconds(125));
        assert_eq!(long.display(start), "02:05");
    }
}
