use crate::constants::question_banks::{
    FILL_IN_BLANK_SKILLS, MATCHING_ANSWER, MATCHING_EXPLANATION, MATCHING_PROMPT,
    MATCHING_SKILLS, MATCHING_TERMS, MULTIPLE_CHOICE_SKILLS, TRUE_FALSE_BANK, TRUE_FALSE_SKILLS,
};
use crate::models::domain::{
    CorrectAnswer, Difficulty, Question, QuestionType, QuizRequest,
};
use crate::services::quiz_synthesis::bank::{BlankBank, ChoiceBank, TrueFalseEntry};
use crate::services::quiz_synthesis::classifier::{classify_blank_topic, classify_choice_topic};
use crate::services::quiz_synthesis::difficulty::difficulty_for;

/// The bank cursor wraps at this value whatever the bank lengths are.
// TODO: confirm with product whether the cursor should wrap at each bank's own length;
// a bank shorter than this skips slots before the longer ones run out.
pub const BANK_CURSOR_MODULUS: usize = 5;

/// The banks one synthesis call draws from.
#[derive(Clone, Copy, Debug)]
pub struct TopicBanks {
    pub choice: &'static ChoiceBank,
    pub blank: &'static BlankBank,
    pub true_false: &'static [TrueFalseEntry],
}

impl TopicBanks {
    pub fn for_topic(topic: &str) -> Self {
        Self {
            choice: classify_choice_topic(topic).bank(),
            blank: classify_blank_topic(topic).bank(),
            true_false: TRUE_FALSE_BANK,
        }
    }
}

fn skills(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

fn draw_question(
    question_type: QuestionType,
    cursor: usize,
    banks: &TopicBanks,
    id: u32,
    difficulty: Difficulty,
) -> Option<Question> {
    let question = match question_type {
        QuestionType::MultipleChoice => {
            let entry = banks.choice.entry(cursor)?;
            Question {
                id,
                question_type,
                text: entry.question.to_string(),
                options: Some(entry.options.iter().map(|o| o.to_string()).collect()),
                correct_answer: CorrectAnswer::Index(entry.answer),
                difficulty,
                explanation: entry.explanation.to_string(),
                skills: skills(&MULTIPLE_CHOICE_SKILLS),
            }
        }
        QuestionType::FillInBlank => {
            let entry = banks.blank.entry(cursor)?;
            Question {
                id,
                question_type,
                text: entry.question.to_string(),
                options: None,
                correct_answer: CorrectAnswer::Text(entry.answer.to_string()),
                difficulty,
                explanation: entry.explanation.to_string(),
                skills: skills(&FILL_IN_BLANK_SKILLS),
            }
        }
        QuestionType::TrueFalse => {
            let entry = banks.true_false.get(cursor)?;
            Question {
                id,
                question_type,
                text: entry.statement.to_string(),
                options: None,
                correct_answer: CorrectAnswer::Text(entry.answer_label().to_string()),
                difficulty,
                explanation: entry.explanation.to_string(),
                skills: skills(&TRUE_FALSE_SKILLS),
            }
        }
        // matching ignores the cursor, every matching slot is the same exercise
        QuestionType::Matching => Question {
            id,
            question_type,
            text: MATCHING_PROMPT.to_string(),
            options: Some(MATCHING_TERMS.iter().map(|t| t.to_string()).collect()),
            correct_answer: CorrectAnswer::Text(MATCHING_ANSWER.to_string()),
            difficulty,
            explanation: MATCHING_EXPLANATION.to_string(),
            skills: skills(&MATCHING_SKILLS),
        },
    };

    Some(question)
}

/// Builds up to `request.question_count` questions.
///
/// The type for output position `k` is `question_types[k % len]`, while the
/// bank cursor advances once per iteration, including iterations whose slot
/// was skipped because the cursor ran past the bank. When a whole cursor
/// cycle passes without progress the result is returned short.
pub fn assemble_questions(request: &QuizRequest, banks: &TopicBanks) -> Vec<Question> {
    let fallback_types = [QuestionType::MultipleChoice];
    let types: &[QuestionType] = if request.question_types.is_empty() {
        &fallback_types
    } else {
        &request.question_types
    };

    let mut questions: Vec<Question> = Vec::with_capacity(request.question_count);
    let mut cursor = 0;
    let mut stalled = 0;

    while questions.len() < request.question_count {
        let position = questions.len();
        let question_type = types[position % types.len()];
        let difficulty = difficulty_for(request.level, position);

        match draw_question(question_type, cursor, banks, position as u32 + 1, difficulty) {
            Some(question) => {
                questions.push(question);
                stalled = 0;
            }
            None => {
                stalled += 1;
                if stalled >= BANK_CURSOR_MODULUS {
                    log::debug!(
                        "Question banks exhausted for {} after {} of {} questions",
                        question_type,
                        questions.len(),
                        request.question_count
                    );
                    break;
                }
            }
        }

        cursor = (cursor + 1) % BANK_CURSOR_MODULUS;
    }

    questions
}
