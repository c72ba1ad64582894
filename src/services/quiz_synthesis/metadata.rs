use crate::models::domain::ProficiencyLevel;

pub fn level_descriptor(level: ProficiencyLevel) -> &'static str {
    match level {
        ProficiencyLevel::Beginner => "foundational skills in",
        ProficiencyLevel::Intermediate => "applied knowledge of",
        ProficiencyLevel::Advanced => "advanced mastery of",
        ProficiencyLevel::Unspecified => "understanding of",
    }
}

pub fn quiz_title(topic: &str) -> String {
    format!("{} Assessment", topic)
}

pub fn quiz_description(topic: &str, level: ProficiencyLevel) -> String {
    format!(
        "This quiz evaluates {} {} with a focus on practical language application.",
        level_descriptor(level),
        topic
    )
}

/// Three shared objectives plus one for the level, when the level is known.
pub fn quiz_objectives(topic: &str, level: ProficiencyLevel) -> Vec<String> {
    let descriptor = level_descriptor(level);
    let mut objectives = vec![
        format!("Assess {} {} concepts and terminology", descriptor, topic),
        format!("Evaluate ability to apply {} principles in context", topic),
        format!("Test comprehension of key {} structures and patterns", topic),
    ];

    match level {
        ProficiencyLevel::Beginner => {
            objectives.push(format!("Build confidence with basic {} concepts", topic))
        }
        ProficiencyLevel::Intermediate => {
            objectives.push(format!("Strengthen analytical skills related to {}", topic))
        }
        ProficiencyLevel::Advanced => objectives.push(format!(
            "Challenge critical thinking through complex {} scenarios",
            topic
        )),
        ProficiencyLevel::Unspecified => {}
    }

    objectives
}
