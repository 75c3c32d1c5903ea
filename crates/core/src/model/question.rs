use thiserror::Error;

use crate::model::OptionLetter;
use crate::parser::RawRecord;

pub const QUESTION_COLUMN: &str = "Question";
pub const ANSWER_COLUMN: &str = "Answer";
pub const EXPLANATION_COLUMN: &str = "Explanation";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordError {
    #[error("option {0} is missing or empty")]
    MissingOption(OptionLetter),

    #[error("answer {0:?} is not one of A, B, C, D")]
    InvalidAnswer(String),
}

/// A fully validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    prompt: String,
    options: [String; 4],
    correct: OptionLetter,
    explanation: Option<String>,
}

impl QuestionRecord {
    /// Build a question from already split parts.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingOption` if any option is blank.
    pub fn new(
        prompt: impl Into<String>,
        options: [String; 4],
        correct: OptionLetter,
        explanation: Option<String>,
    ) -> Result<Self, RecordError> {
        for letter in OptionLetter::ALL {
            if options[letter.index()].trim().is_empty() {
                return Err(RecordError::MissingOption(letter));
            }
        }

        Ok(Self {
            prompt: prompt.into(),
            options,
            correct,
            explanation: explanation.filter(|text| !text.trim().is_empty()),
        })
    }

    /// Validate one parsed line.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingOption` if one of the `A`..`D` columns is absent
    /// or blank, and `RecordError::InvalidAnswer` if `Answer` is not a single letter.
    pub fn from_raw(record: &RawRecord) -> Result<Self, RecordError> {
        let option = |letter: OptionLetter| {
            record
                .get(letter.as_str())
                .filter(|text| !text.trim().is_empty())
                .map(str::to_string)
                .ok_or(RecordError::MissingOption(letter))
        };
        let options = [
            option(OptionLetter::A)?,
            option(OptionLetter::B)?,
            option(OptionLetter::C)?,
            option(OptionLetter::D)?,
        ];

        let raw_answer = record.get(ANSWER_COLUMN).unwrap_or_default();
        let correct = raw_answer
            .parse::<OptionLetter>()
            .map_err(|_| RecordError::InvalidAnswer(raw_answer.to_string()))?;

        Self::new(
            record.get(QUESTION_COLUMN).unwrap_or_default(),
            options,
            correct,
            record.get(EXPLANATION_COLUMN).map(str::to_string),
        )
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn option(&self, letter: OptionLetter) -> &str {
        &self.options[letter.index()]
    }

    #[must_use]
    pub fn correct(&self) -> OptionLetter {
        self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn is_correct(&self, letter: OptionLetter) -> bool {
        self.correct == letter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawRecord {
        pairs.iter().copied().collect()
    }

    fn full(answer: &str) -> RawRecord {
        raw(&[
            ("Question", "2 + 2?"),
            ("A", "3"),
            ("B", "4"),
            ("C", "5"),
            ("D", "22"),
            ("Answer", answer),
            ("Explanation", ""),
        ])
    }

    #[test]
    fn accepts_lowercase_answer() {
        let question = QuestionRecord::from_raw(&full(" b ")).unwrap();
        assert_eq!(question.correct(), OptionLetter::B);
        assert_eq!(question.option(OptionLetter::B), "4");
        assert_eq!(question.prompt(), "2 + 2?");
    }

    #[test]
    fn blank_explanation_is_dropped() {
        let question = QuestionRecord::from_raw(&full("A")).unwrap();
        assert_eq!(question.explanation(), None);
    }

    #[test]
    fn rejects_unknown_answer() {
        let err = QuestionRecord::from_raw(&full("E")).unwrap_err();
        assert_eq!(err, RecordError::InvalidAnswer("E".into()));

        let err = QuestionRecord::from_raw(&full("")).unwrap_err();
        assert!(matches!(err, RecordError::InvalidAnswer(_)));
    }

    #[test]
    fn rejects_blank_or_missing_option() {
        let blank = raw(&[("A", "x"), ("B", "  "), ("C", "z"), ("D", "w"), ("Answer", "A")]);
        assert_eq!(
            QuestionRecord::from_raw(&blank).unwrap_err(),
            RecordError::MissingOption(OptionLetter::B)
        );

        let missing = raw(&[("A", "x"), ("B", "y"), ("C", "z"), ("Answer", "A")]);
        assert_eq!(
            QuestionRecord::from_raw(&missing).unwrap_err(),
            RecordError::MissingOption(OptionLetter::D)
        );
    }

    #[test]
    fn missing_question_and_answer_columns() {
        let no_answer = raw(&[("A", "x"), ("B", "y"), ("C", "z"), ("D", "w")]);
        assert!(matches!(
            QuestionRecord::from_raw(&no_answer),
            Err(RecordError::InvalidAnswer(_))
        ));

        let no_prompt = raw(&[("A", "x"), ("B", "y"), ("C", "z"), ("D", "w"), ("Answer", "d")]);
        let question = QuestionRecord::from_raw(&no_prompt).unwrap();
        assert_eq!(question.prompt(), "");
    }
}
