use crate::models::domain::{Difficulty, ProficiencyLevel};

/// Difficulty for the question at zero-based `position` in the output.
///
/// Lower levels front-load easy items, advanced quizzes turn hard early.
/// Unrecognised levels are always medium.
pub fn difficulty_for(level: ProficiencyLevel, position: usize) -> Difficulty {
    let (easy_below, medium_below) = match level {
        ProficiencyLevel::Beginner => (3, 4),
        ProficiencyLevel::Intermediate => (2, 4),
        ProficiencyLevel::Advanced => (1, 3),
        ProficiencyLevel::Unspecified => return Difficulty::Medium,
    };

    if position < easy_below {
        Difficulty::Easy
    } else if position < medium_below {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}
