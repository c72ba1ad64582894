/// Multiple-choice templates stored as parallel arrays; index `i` of every
/// array belongs to the same question.
#[derive(Debug)]
pub struct ChoiceBank {
    pub questions: &'static [&'static str],
    pub options: &'static [[&'static str; 4]],
    pub answers: &'static [usize],
    pub explanations: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceEntry {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: usize,
    pub explanation: &'static str,
}

impl ChoiceBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<ChoiceEntry> {
        Some(ChoiceEntry {
            question: self.questions.get(index)?,
            options: *self.options.get(index)?,
            answer: *self.answers.get(index)?,
            explanation: self.explanations.get(index)?,
        })
    }

    pub fn is_aligned(&self) -> bool {
        let len = self.len();
        self.options.len() == len && self.answers.len() == len && self.explanations.len() == len
    }
}

/// Fill-in-blank templates with literal answers.
#[derive(Debug)]
pub struct BlankBank {
    pub questions: &'static [&'static str],
    pub answers: &'static [&'static str],
    pub explanations: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlankEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub explanation: &'static str,
}

impl BlankBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<BlankEntry> {
        Some(BlankEntry {
            question: self.questions.get(index)?,
            answer: self.answers.get(index)?,
            explanation: self.explanations.get(index)?,
        })
    }

    pub fn is_aligned(&self) -> bool {
        let len = self.len();
        self.answers.len() == len && self.explanations.len() == len
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrueFalseEntry {
    pub statement: &'static str,
    pub answer: bool,
    pub explanation: &'static str,
}

impl TrueFalseEntry {
    pub fn answer_label(&self) -> &'static str {
        if self.answer {
            "True"
        } else {
            "False"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::question_banks::*;

    #[test]
    fn test_every_bank_has_aligned_parallel_arrays() {
        for bank in [&TENSES_CHOICE_BANK, &VOCABULARY_CHOICE_BANK, &READING_CHOICE_BANK] {
            assert!(bank.is_aligned());
            assert_eq!(bank.len(), 5);
        }
        for bank in [&GRAMMAR_BLANK_BANK, &VOCABULARY_BLANK_BANK] {
            assert!(bank.is_aligned());
            assert_eq!(bank.len(), 5);
        }
        assert_eq!(TRUE_FALSE_BANK.len(), 5);
    }

    #[test]
    fn test_choice_answers_point_inside_their_options() {
        for bank in [&TENSES_CHOICE_BANK, &VOCABULARY_CHOICE_BANK, &READING_CHOICE_BANK] {
            for index in 0..bank.len() {
                let entry = bank.entry(index).unwrap();
                assert!(entry.answer < entry.options.len());
            }
        }
    }

    #[test]
    fn test_entry_out_of_range_is_none() {
        assert!(TENSES_CHOICE_BANK.entry(5).is_none());
        assert!(GRAMMAR_BLANK_BANK.entry(99).is_none());
    }

    #[test]
    fn test_grammar_blank_entries_stay_paired() {
        let entry = GRAMMAR_BLANK_BANK.entry(1).unwrap();
        assert!(entry.question.contains("modal verb"));
        assert_eq!(entry.answer, "should");
        assert!(entry.explanation.starts_with("\"Should\""));
    }

    #[test]
    fn test_true_false_answer_labels() {
        assert_eq!(TRUE_FALSE_BANK[0].answer_label(), "True");
        assert_eq!(TRUE_FALSE_BANK[1].answer_label(), "False");
    }
}
