use crate::models::domain::{CefrLevel, Enhancement, QuestionType, QuizRequest};

pub const API_KEY_PROBE_PROMPT: &str =
    "Hello, this is a test message to verify API key functionality.";

pub fn quiz_prompt(request: &QuizRequest) -> String {
    let level = request.level.as_str();
    let types = request
        .question_types
        .iter()
        .map(QuestionType::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are an expert language teacher. Create an educational quiz on "{topic}" for {level} level English learners.

The quiz should have {count} questions, with a time limit of {time_limit} minutes.
Include question types: {types}.

Create realistic, educational assessment questions that test actual language knowledge and skills.
For multiple-choice questions, include plausible distractors that reflect common misconceptions.

Format your response as a JSON object exactly like this:
{{
  "title": "Quiz title related to the topic",
  "description": "Brief description of what this quiz assesses",
  "level": "{level}",
  "timeLimit": {time_limit},
  "questions": [
    {{
      "id": 1,
      "type": "multiple-choice",
      "text": "Question text here",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": 0,
      "difficulty": "medium",
      "explanation": "Detailed explanation of why this answer is correct",
      "skills": ["Skill being tested", "Another skill"]
    }},
    {{
      "id": 2,
      "type": "fill-in-blank",
      "text": "Text with a ____ to fill in",
      "correctAnswer": "correct word",
      "difficulty": "easy",
      "explanation": "Explanation of the answer",
      "skills": ["Vocabulary", "Grammar"]
    }}
  ],
  "objectives": ["Learning objective 1", "Learning objective 2", "Learning objective 3"]
}}

For each question:
- Ensure text is clear and appropriate for {level} level
- For "multiple-choice" questions, provide realistic options with only one correct answer (indicated by index 0-3)
- For "fill-in-blank" questions, use underscores to indicate blanks and provide the exact answer
- For "true-false" questions, make correctAnswer either "True" or "False"
- Vary difficulty across "easy", "medium", and "hard" based on the {level} level
- Provide educational explanations that teach the concept
- List 1-3 skills being tested (e.g., "Vocabulary", "Reading Comprehension", "Grammar")

Most importantly, create REALISTIC educational questions suitable for actual language learning assessment. Do not generate nonsensical, trivial, or overly simplified questions.

Return ONLY the JSON object without any additional text or markdown."#,
        topic = request.topic,
        level = level,
        count = request.question_count,
        time_limit = request.time_limit_minutes,
        types = types,
    )
}

/// Reply shape requested by [`lesson_plan_prompt`]. Parses as a `LessonPlan`.
pub const LESSON_PLAN_REPLY_EXAMPLE: &str = r#"{
  "title": "Lesson title related to the topic",
  "level": "B1",
  "duration": 60,
  "objectives": ["Students will be able to ...", "Students will be able to ..."],
  "activities": [
    {
      "name": "Warm-up Discussion",
      "type": "warm-up",
      "duration": 10,
      "description": "What the teacher and students do",
      "materials": ["Flashcards"]
    }
  ],
  "assessment": "How learning is checked",
  "differentiation": {
    "struggling": "Support for struggling students",
    "advanced": "Extension for advanced students"
  },
  "materials": ["Everything needed for the lesson"],
  "reflection": ["Reflection question for the teacher"]
}"#;

pub fn lesson_plan_prompt(topic: &str, level: CefrLevel, outcomes: &str, duration: u32) -> String {
    format!(
        "Create a detailed lesson plan with the following parameters:
- Topic: {topic}
- Proficiency level: {level}
- Learning outcomes: {outcomes}
- Duration: {duration} minutes

Format your response as a JSON object exactly like this:
{example}

Rules:
- \"level\" is \"{level}\" and \"duration\" is the whole number {duration}
- every activity has a whole-number \"duration\" in minutes; \"type\" is one of warm-up, presentation, practice, production
- \"differentiation\" is an object with exactly the keys \"struggling\" and \"advanced\"
- \"materials\" on an activity may be omitted when none are needed

Provide the JSON object only, without any additional comments.",
        example = LESSON_PLAN_REPLY_EXAMPLE,
    )
}

/// Reply shape requested by [`feedback_prompt`]. Parses as a `FeedbackReport`.
pub const FEEDBACK_REPLY_EXAMPLE: &str = r#"{
  "overallScore": 78,
  "strengths": ["Good use of transitional phrases"],
  "summary": "Overall feedback in two or three sentences",
  "details": {
    "grammar": {"score": 75, "count": 4},
    "vocabulary": {"score": 85, "count": 2},
    "structure": {"score": 70, "count": 3},
    "coherence": {"score": 82, "count": 1},
    "style": {"score": 78, "count": 2}
  },
  "items": [
    {
      "type": "grammar",
      "severity": "high",
      "issue": "Subject-verb agreement error",
      "location": {"start": 10, "end": 25},
      "suggestion": "The student needs to arrive early",
      "explanation": "A singular subject takes a singular verb."
    }
  ]
}"#;

pub fn feedback_prompt(text: &str) -> String {
    format!(
        "Analyze the following English text and provide detailed feedback:
{text}

Format your response as a JSON object exactly like this:
{example}

Rules:
- all scores are whole numbers from 0 to 100
- each entry in \"details\" is an object with \"score\" and \"count\" (number of issues found in that category)
- \"type\" is one of grammar, vocabulary, structure, coherence, style
- \"severity\" is one of high, medium, low
- \"location\" gives zero-based character offsets into the text as {{\"start\": n, \"end\": n}}

Provide the JSON object only, without any additional comments.",
        example = FEEDBACK_REPLY_EXAMPLE,
    )
}

pub fn enhance_content_prompt(
    text: &str,
    enhancement: Enhancement,
    target_level: CefrLevel,
    additional_instructions: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Enhance the following educational content with these parameters:
- Enhancement type: {}
- Target language level: {}
",
        enhancement.as_str(),
        target_level
    );

    if let Some(instructions) = additional_instructions.map(str::trim).filter(|i| !i.is_empty()) {
        prompt.push_str(&format!("- Additional instructions: {}\n", instructions));
    }

    prompt.push_str(&format!(
        "
Original content:
{}

Apply the requested enhancement and return only the enhanced content.",
        text
    ));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{FeedbackReport, LessonPlan, ProficiencyLevel};
    use crate::services::completion_service::parse_json_reply;

    #[test]
    fn test_quiz_prompt_embeds_request_parameters() {
        let request = QuizRequest {
            topic: "Modal Verbs".to_string(),
            level: ProficiencyLevel::Advanced,
            question_count: 7,
            question_types: vec![QuestionType::MultipleChoice, QuestionType::TrueFalse],
            time_limit_minutes: 25,
        };

        let prompt = quiz_prompt(&request);
        assert!(prompt.contains(r#"quiz on "Modal Verbs" for advanced level"#));
        assert!(prompt.contains("should have 7 questions, with a time limit of 25 minutes"));
        assert!(prompt.contains("Include question types: multiple-choice, true-false."));
        assert!(prompt.contains(r#""timeLimit": 25,"#));
        assert!(prompt.contains(r#""level": "advanced","#));
    }

    #[test]
    fn test_lesson_prompt_embeds_parameters() {
        let prompt = lesson_plan_prompt("Food", CefrLevel::A2, "Order a meal", 45);
        assert!(prompt.contains("- Topic: Food"));
        assert!(prompt.contains("- Proficiency level: A2"));
        assert!(prompt.contains("- Learning outcomes: Order a meal"));
        assert!(prompt.contains("- Duration: 45 minutes"));
    }

    #[test]
    fn test_enhance_prompt_includes_instructions_only_when_present() {
        let with = enhance_content_prompt(
            "Text",
            Enhancement::CulturalContext,
            CefrLevel::C1,
            Some("Use British spelling"),
        );
        assert!(with.contains("- Enhancement type: culturalContext"));
        assert!(with.contains("- Target language level: C1"));
        assert!(with.contains("- Additional instructions: Use British spelling"));

        let without = enhance_content_prompt("Text", Enhancement::Visual, CefrLevel::B1, Some("  "));
        assert!(!without.contains("Additional instructions"));
        assert!(without.contains("Original content:\nText\n"));
    }

    #[test]
    fn test_feedback_prompt_embeds_text() {
        let prompt = feedback_prompt("My essay.");
        assert!(prompt.contains("provide detailed feedback:\nMy essay.\n"));
        assert!(prompt.contains(FEEDBACK_REPLY_EXAMPLE));
        assert!(prompt.contains(r#"{"start": n, "end": n}"#));
    }

    #[test]
    fn test_feedback_reply_in_requested_shape_parses() {
        let report: FeedbackReport = parse_json_reply(FEEDBACK_REPLY_EXAMPLE).unwrap();

        assert_eq!(report.overall_score, 78);
        assert_eq!(report.details.structure.count, 3);
        assert_eq!(report.items[0].location.end, 25);
    }

    #[test]
    fn test_lesson_reply_in_requested_shape_parses() {
        let prompt = lesson_plan_prompt("Food", CefrLevel::B1, "", 60);
        assert!(prompt.contains(LESSON_PLAN_REPLY_EXAMPLE));

        let plan: LessonPlan = parse_json_reply(LESSON_PLAN_REPLY_EXAMPLE).unwrap();
        assert_eq!(plan.differentiation.advanced, "Extension for advanced students");
        assert_eq!(plan.activity_minutes(), 10);
    }
}
