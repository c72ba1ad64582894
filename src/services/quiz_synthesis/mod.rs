//! Deterministic quiz synthesis from the built-in question banks.
//!
//! Used when no completion endpoint is configured or when the AI reply
//! cannot be used. Same request in, same quiz out.

pub mod assembly;
pub mod bank;
pub mod classifier;
pub mod difficulty;
pub mod metadata;

use crate::models::domain::{Quiz, QuizRequest};

pub use assembly::{assemble_questions, TopicBanks, BANK_CURSOR_MODULUS};
pub use classifier::{classify_blank_topic, classify_choice_topic, BlankCategory, ChoiceCategory};
pub use difficulty::difficulty_for;

pub fn synthesize_quiz(request: &QuizRequest) -> Quiz {
    let banks = TopicBanks::for_topic(&request.topic);
    let questions = assemble_questions(request, &banks);

    if questions.len() < request.question_count {
        log::warn!(
            "Synthesized {} of {} requested questions for topic '{}'",
            questions.len(),
            request.question_count,
            request.topic
        );
    }

    Quiz {
        title: metadata::quiz_title(&request.topic),
        description: metadata::quiz_description(&request.topic, request.level),
        level: request.level,
        time_limit_minutes: request.time_limit_minutes,
        questions,
        objectives: metadata::quiz_objectives(&request.topic, request.level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::question_banks::{
        TENSES_CHOICE_BANK, TRUE_FALSE_BANK, VOCABULARY_BLANK_BANK, VOCABULARY_CHOICE_BANK,
    };
    use crate::models::domain::{CorrectAnswer, Difficulty, ProficiencyLevel, QuestionType};

    fn request(
        topic: &str,
        level: ProficiencyLevel,
        count: usize,
        types: Vec<QuestionType>,
    ) -> QuizRequest {
        QuizRequest {
            topic: topic.to_string(),
            level,
            question_count: count,
            question_types: types,
            time_limit_minutes: 15,
        }
    }

    #[test]
    fn test_past_tenses_beginner_scenario() {
        let quiz = synthesize_quiz(&request(
            "Past Tenses",
            ProficiencyLevel::Beginner,
            5,
            vec![QuestionType::MultipleChoice],
        ));

        assert_eq!(quiz.questions.len(), 5);
        for (index, question) in quiz.questions.iter().enumerate() {
            assert_eq!(question.question_type, QuestionType::MultipleChoice);
            assert_eq!(question.text, TENSES_CHOICE_BANK.questions[index]);
            assert_eq!(
                question.correct_answer,
                CorrectAnswer::Index(TENSES_CHOICE_BANK.answers[index])
            );
            assert_eq!(question.options.as_ref().map(Vec::len), Some(4));
        }
        let difficulties: Vec<Difficulty> = quiz.questions.iter().map(|q| q.difficulty).collect();
        assert_eq!(
            difficulties,
            vec![
                Difficulty::Easy,
                Difficulty::Easy,
                Difficulty::Easy,
                Difficulty::Medium,
                Difficulty::Hard
            ]
        );
        assert_eq!(quiz.title, "Past Tenses Assessment");
        assert_eq!(quiz.time_limit_minutes, 15);
        assert_eq!(quiz.objectives.len(), 4);
    }

    #[test]
    fn test_idioms_intermediate_scenario() {
        let mut req = request(
            "Idioms",
            ProficiencyLevel::Intermediate,
            3,
            vec![QuestionType::FillInBlank, QuestionType::TrueFalse],
        );
        req.time_limit_minutes = 10;
        let quiz = synthesize_quiz(&req);

        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.questions[0].question_type, QuestionType::FillInBlank);
        assert_eq!(quiz.questions[0].text, VOCABULARY_BLANK_BANK.questions[0]);
        assert_eq!(quiz.questions[1].question_type, QuestionType::TrueFalse);
        assert_eq!(quiz.questions[1].text, TRUE_FALSE_BANK[1].statement);
        assert_eq!(quiz.questions[1].correct_answer, CorrectAnswer::Text("False".into()));
        assert_eq!(quiz.questions[2].question_type, QuestionType::FillInBlank);
        assert_eq!(quiz.questions[2].text, VOCABULARY_BLANK_BANK.questions[2]);

        let difficulties: Vec<Difficulty> = quiz.questions.iter().map(|q| q.difficulty).collect();
        assert_eq!(
            difficulties,
            vec![Difficulty::Easy, Difficulty::Easy, Difficulty::Medium]
        );
        assert_eq!(quiz.time_limit_minutes, 10);
    }

    #[test]
    fn test_unknown_topic_draws_vocabulary_choices() {
        let quiz = synthesize_quiz(&request(
            "Travel",
            ProficiencyLevel::Advanced,
            3,
            vec![QuestionType::MultipleChoice],
        ));

        for (index, question) in quiz.questions.iter().enumerate() {
            assert_eq!(question.text, VOCABULARY_CHOICE_BANK.questions[index]);
        }
    }

    #[test]
    fn test_matching_only_quiz_repeats_one_exercise() {
        let quiz = synthesize_quiz(&request(
            "Anything",
            ProficiencyLevel::Unspecified,
            9,
            vec![QuestionType::Matching],
        ));

        assert_eq!(quiz.questions.len(), 9);
        let first = &quiz.questions[0];
        for (index, question) in quiz.questions.iter().enumerate() {
            assert_eq!(question.id, index as u32 + 1);
            assert_eq!(question.text, first.text);
            assert_eq!(question.options, first.options);
            assert_eq!(question.correct_answer, first.correct_answer);
            assert_eq!(question.difficulty, Difficulty::Medium);
        }
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let req = request(
            "Reading comprehension",
            ProficiencyLevel::Advanced,
            8,
            vec![
                QuestionType::MultipleChoice,
                QuestionType::TrueFalse,
                QuestionType::Matching,
                QuestionType::FillInBlank,
            ],
        );

        let first = serde_json::to_string(&synthesize_quiz(&req)).unwrap();
        let second = serde_json::to_string(&synthesize_quiz(&req)).unwrap();
        assert_eq!(first, second);
    }
}
