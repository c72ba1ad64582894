use crate::services::quiz_synthesis::bank::{BlankBank, ChoiceBank, TrueFalseEntry};

pub static TENSES_CHOICE_BANK: ChoiceBank = ChoiceBank {
    questions: &[
        r#"Choose the correct form of the verb to complete the sentence: "She _____ to the store yesterday.""#,
        r#"Which tense is used in the following sentence: "I have been studying English for five years.""#,
        r#"Select the correct verb form: "By the time we arrived, the movie _____ already.""#,
        r#"Identify the tense used in: "This time tomorrow, I will be flying to London.""#,
        r#"Which form correctly completes this sentence: "If I _____ rich, I would buy a big house.""#,
    ],
    options: &[
        ["go", "goes", "went", "has gone"],
        ["Present Perfect Progressive", "Past Simple", "Present Perfect", "Future Perfect"],
        ["started", "has started", "had started", "would start"],
        ["Future Continuous", "Present Continuous", "Future Perfect", "Present Perfect Continuous"],
        ["am", "was", "were", "would be"],
    ],
    answers: &[2, 0, 2, 0, 2],
    explanations: &[
        r#"The sentence requires the past simple tense "went" because of the time marker "yesterday.""#,
        r#"The sentence "I have been studying English for five years" uses the Present Perfect Progressive tense, which shows an action that started in the past and continues to the present."#,
        r#"The sentence requires the past perfect tense "had started" to indicate an action completed before another past action."#,
        r#"The phrase "This time tomorrow" indicates a future action in progress, requiring the Future Continuous tense."#,
        r#"In second conditional sentences (hypothetical present/future), we use "were" for all persons after "if"."#,
    ],
};

pub static VOCABULARY_CHOICE_BANK: ChoiceBank = ChoiceBank {
    questions: &[
        r#"Which word best completes this sentence: "The professor gave a _____ lecture on climate change.""#,
        r#"Choose the synonym for "ubiquitous":"#,
        r#"What is the meaning of the idiom "to beat around the bush"?"#,
        "Select the word that does NOT belong in this group:",
        "Which collocation is correct?",
    ],
    options: &[
        ["fascinating", "fascinated", "fascinate", "fascination"],
        ["rare", "widespread", "unique", "special"],
        ["to physically attack a shrub", "to avoid the main topic", "to win easily", "to go hiking"],
        ["jubilant", "ecstatic", "elated", "depressed"],
        ["make a decision", "do a decision", "take a decision", "have a decision"],
    ],
    answers: &[0, 1, 1, 3, 0],
    explanations: &[
        r#""Fascinating" is the correct adjective to describe an interesting lecture. "Fascinated" describes a person's feeling, "fascinate" is a verb, and "fascination" is a noun."#,
        r#""Ubiquitous" means appearing everywhere or being very common, making "widespread" the closest synonym."#,
        r#"The idiom "to beat around the bush" means to avoid discussing the main topic or the point of a conversation, often by talking about unrelated issues."#,
        r#""Depressed" means sad or despondent, while all the other words describe states of extreme happiness or joy."#,
        r#"In English, we "make a decision" - this is the correct collocation. The other combinations are not standard in English."#,
    ],
};

pub static READING_CHOICE_BANK: ChoiceBank = ChoiceBank {
    questions: &[
        "Read the passage and answer: What is the main idea of the text?",
        "According to the passage, why did the author decide to learn a second language?",
        "Which of these statements can be inferred from the text?",
        r#"What does the word "proficiency" mean in the context of the passage?"#,
        "What type of text is this most likely to be?",
    ],
    options: &[
        [
            "The difficulty of learning languages",
            "The benefits of bilingualism",
            "The history of language education",
            "Problems with language learning apps",
        ],
        [
            "To advance professionally",
            "To communicate with family members",
            "To travel more easily",
            "To appreciate literature in its original form",
        ],
        [
            "Language learning becomes more difficult with age",
            "Children learn languages faster than adults",
            "Language immersion is the only effective method",
            "Grammar study is unnecessary for fluency",
        ],
        [
            "Interest or enjoyment",
            "Skill or competence",
            "Progress or advancement",
            "Teaching or instruction",
        ],
        [
            "A personal blog post",
            "An academic research paper",
            "A news article",
            "A language textbook introduction",
        ],
    ],
    answers: &[1, 0, 1, 1, 0],
    explanations: &[
        r#"The passage primarily discusses how knowing multiple languages offers cognitive, cultural, and professional advantages - making "The benefits of bilingualism" the main idea."#,
        "The author explicitly mentions that learning a second language was motivated by career advancement opportunities in paragraph 2.",
        "While not directly stated, the text provides examples of children's language acquisition that support the inference that children learn languages faster than adults.",
        r#"In the context of language learning, "proficiency" refers to the level of skill or competence one has achieved in using the language."#,
        "The informal tone, first-person perspective, and personal anecdotes suggest this is from a personal blog post rather than a formal academic or news piece.",
    ],
};

pub static GRAMMAR_BLANK_BANK: BlankBank = BlankBank {
    questions: &[
        r#"Complete the sentence with the correct form of the verb: "If it _____ (rain) tomorrow, we will cancel the picnic.""#,
        r#"Fill in the blank with the appropriate modal verb: "You _____ wear a helmet when riding a bicycle for safety.""#,
        r#"Complete the sentence with the correct preposition: "The book is _____ the table.""#,
        r#"Use the correct article: "She bought _____ new dress for the party.""#,
        r#"Fill in the correct form of the comparative adjective: "This exercise is _____ (difficult) than the previous one.""#,
    ],
    answers: &["rains", "should", "on", "a", "more difficult"],
    explanations: &[
        r#"In first conditional sentences (possible future condition), we use present simple after "if" and will + infinitive in the main clause."#,
        r#""Should" expresses recommendation or advice, which is appropriate for safety guidelines."#,
        r#""On" is the correct preposition to indicate that something is positioned on the surface of something else."#,
        r#"We use the indefinite article "a" before singular countable nouns when mentioning them for the first time."#,
        r#"To form the comparative of adjectives with two or more syllables, we typically use "more" before the adjective."#,
    ],
};

pub static VOCABULARY_BLANK_BANK: BlankBank = BlankBank {
    questions: &[
        r#"Complete the sentence with a suitable word: "The doctor prescribed _____ for my headache.""#,
        r#"Fill in the blank with an appropriate synonym for "big": "The elephant is a _____ animal.""#,
        r#"Complete the collocation: "make a _____" (something you create or decide)"#,
        r#"Add the missing word in this fixed expression: "It's _____ or never.""#,
        r#"Complete the idiom: "To be in hot _____." (meaning to be in trouble)"#,
    ],
    answers: &["medication", "huge", "decision", "now", "water"],
    explanations: &[
        r#""Medication" is the appropriate term for medicine prescribed by a doctor."#,
        r#""Huge" is a synonym for "big" and correctly describes the size of an elephant."#,
        r#"The collocation "make a decision" is a standard expression for the act of deciding something."#,
        r#"The fixed expression "It's now or never" indicates that something must be done immediately or not at all."#,
        r#"The idiom "to be in hot water" means to be in trouble or a difficult situation."#,
    ],
};

pub static TRUE_FALSE_BANK: &[TrueFalseEntry] = &[
    TrueFalseEntry {
        statement: "In English, we can use the present continuous tense to talk about future arrangements.",
        answer: true,
        explanation: r#"The present continuous can indeed be used to express planned future actions, especially when they are arrangements. For example: "I'm meeting John tomorrow.""#,
    },
    TrueFalseEntry {
        statement: r#"The words "affect" and "effect" have the same meaning and can be used interchangeably."#,
        answer: false,
        explanation: r#""Affect" is typically a verb meaning to influence something, while "effect" is typically a noun referring to the result of an action. They have different meanings and uses."#,
    },
    TrueFalseEntry {
        statement: r#"In academic English writing, it's best to use contractions like "don't" and "can't" to sound more natural."#,
        answer: false,
        explanation: "In formal academic writing, contractions are generally avoided. Full forms (do not, cannot) are preferred for a more formal tone.",
    },
    TrueFalseEntry {
        statement: r#"The suffix "-tion" is commonly used to form nouns from verbs in English."#,
        answer: true,
        explanation: r#"The suffix "-tion" is indeed commonly used to transform verbs into nouns, as in: create → creation, educate → education, inform → information."#,
    },
    TrueFalseEntry {
        statement: r#"In English conditionals, we always use "would" in the main clause of second conditional sentences."#,
        answer: true,
        explanation: r#"In second conditional sentences (hypothetical present/future), we typically use "would" in the main clause. Example: "If I had more time, I would learn Chinese.""#,
    },
];

pub const MATCHING_PROMPT: &str = "Match these words with their definitions:";
pub const MATCHING_TERMS: [&str; 4] = ["Ambiguous", "Concise", "Redundant", "Pragmatic"];
pub const MATCHING_ANSWER: &str = "A=2, B=0, C=3, D=1";
pub const MATCHING_EXPLANATION: &str = "Ambiguous means unclear or having multiple interpretations. Concise means brief but comprehensive. Redundant means unnecessary or superfluous. Pragmatic means practical or focused on facts.";

pub const MULTIPLE_CHOICE_SKILLS: [&str; 3] = [
    "Reading comprehension",
    "Grammar analysis",
    "Vocabulary knowledge",
];
pub const FILL_IN_BLANK_SKILLS: [&str; 3] = ["Vocabulary", "Grammar application", "Language patterns"];
pub const TRUE_FALSE_SKILLS: [&str; 3] = [
    "Critical thinking",
    "Language rules knowledge",
    "Reading comprehension",
];
pub const MATCHING_SKILLS: [&str; 3] = [
    "Vocabulary",
    "Reading comprehension",
    "Word-definition pairing",
];
