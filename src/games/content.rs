use super::GameKind;
use crate::flow::{AnswerKey, FlowShape, PredictionChoice, QUIZ_LENGTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_OPTIONS: usize = 2;
const MAX_OPTIONS: usize = PredictionChoice::ALL.len();

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("unknown lesson '{0}'")]
    UnknownGame(String),

    #[error("lesson content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{section}: expected {min}-{max} options, found {found}", min = MIN_OPTIONS, max = MAX_OPTIONS)]
    OptionCount { section: String, found: usize },

    #[error("{section}: answer {answer} is not one of the {options} options")]
    AnswerOutOfRange {
        section: String,
        answer: usize,
        options: usize,
    },

    #[error("expected {len} test questions, found {0}", len = QUIZ_LENGTH)]
    QuestionCount(usize),

    #[error("lesson has no real-world applications")]
    NoApplications,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPrompt {
    pub question: String,
    pub options: Vec<String>,
    /// Index of the physically correct option, revealed in review.
    pub answer: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: usize,
}

/// Copy for one lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameContent {
    pub title: String,
    pub tagline: String,
    pub hook: String,
    pub predict: PredictionPrompt,
    pub play: String,
    pub review: String,
    pub twist_predict: PredictionPrompt,
    pub twist_play: String,
    pub twist_review: String,
    pub applications: Vec<Application>,
    pub questions: Vec<Question>,
    pub mastery: String,
}

fn check_options(section: &str, options: usize, answer: usize) -> Result<(), ContentError> {
    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options) {
        return Err(ContentError::OptionCount {
            section: section.to_string(),
            found: options,
        });
    }
    if answer >= options {
        return Err(ContentError::AnswerOutOfRange {
            section: section.to_string(),
            answer,
            options,
        });
    }
    Ok(())
}

impl GameContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: GameContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Parse the copy bundled into the binary for `kind`.
    pub fn bundled(kind: GameKind) -> Result<Self, ContentError> {
        Self::from_json(match kind {
            GameKind::Capacitance => include_str!("../../content/capacitance.json"),
            GameKind::DcMotor => include_str!("../../content/dc-motor.json"),
            GameKind::DataCenter => include_str!("../../content/data-center.json"),
            GameKind::Induction => include_str!("../../content/induction.json"),
            GameKind::Fracture => include_str!("../../content/fracture.json"),
            GameKind::WorkPower => include_str!("../../content/work-power.json"),
        })
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        check_options("predict", self.predict.options.len(), self.predict.answer)?;
        check_options(
            "twist_predict",
            self.twist_predict.options.len(),
            self.twist_predict.answer,
        )?;
        if self.applications.is_empty() {
            return Err(ContentError::NoApplications);
        }
        if self.questions.len() != QUIZ_LENGTH {
            return Err(ContentError::QuestionCount(self.questions.len()));
        }
        for (i, q) in self.questions.iter().enumerate() {
            check_options(&format!("question {}", i + 1), q.options.len(), q.answer)?;
        }
        Ok(())
    }

    pub fn shape(&self) -> FlowShape {
        FlowShape {
            prediction_options: self.predict.options.len(),
            twist_options: self.twist_predict.options.len(),
            application_count: self.applications.len(),
        }
    }

    /// Answer key for the test. Content must have passed [`validate`](Self::validate).
    pub fn answer_key(&self) -> AnswerKey {
        let mut key = [0; QUIZ_LENGTH];
        for (slot, q) in key.iter_mut().zip(&self.questions) {
            *slot = q.answer;
        }
        AnswerKey(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bundled_lesson_validates() {
        for kind in GameKind::ALL {
            let content = GameContent::bundled(kind)
                .unwrap_or_else(|e| panic!("{kind}: {e}"));
            let shape = content.shape();
            assert!(shape.application_count >= 1);
            assert_eq!(content.questions.len(), QUIZ_LENGTH);
            assert!(!content.title.is_empty());
        }
    }

    #[test]
    fn test_answer_key_mirrors_questions() {
        let content = GameContent::bundled(GameKind::WorkPower).unwrap();
        let key = content.answer_key();
        for (i, q) in content.questions.iter().enumerate() {
            assert_eq!(key.0[i], q.answer);
        }
    }

    fn sample() -> GameContent {
        GameContent::bundled(GameKind::Capacitance).unwrap()
    }

    #[test]
    fn test_rejects_short_quiz() {
        let mut content = sample();
        content.questions.pop();
        assert!(matches!(content.validate(), Err(ContentError::QuestionCount(9))));
    }

    #[test]
    fn test_rejects_bad_answer_index() {
        let mut content = sample();
        content.questions[3].answer = 7;
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::AnswerOutOfRange { answer: 7, .. }));
        assert!(err.to_string().starts_with("question 4"));
    }

    #[test]
    fn test_rejects_too_many_prediction_options() {
        let mut content = sample();
        content.predict.options = (0..5).map(|i| i.to_string()).collect();
        assert!(matches!(
            content.validate(),
            Err(ContentError::OptionCount { found: 5, .. })
        ));
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert!(matches!(
            GameContent::from_json(r#"{ "title": "x" }"#),
            Err(ContentError::Parse(_))
        ));
    }
}
