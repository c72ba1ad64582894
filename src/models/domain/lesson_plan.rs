use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Activity {
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub duration: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Differentiation {
    pub struggling: String,
    pub advanced: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LessonPlan {
    pub title: String,
    pub level: String,
    pub duration: u32,
    pub objectives: Vec<String>,
    pub activities: Vec<Activity>,
    pub assessment: String,
    pub differentiation: Differentiation,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub reflection: Vec<String>,
}

impl LessonPlan {
    /// Total minutes across all activities.
    pub fn activity_minutes(&self) -> u32 {
        self.activities.iter().map(|a| a.duration).sum()
    }

    pub fn to_markdown(&self) -> String {
        let mut text = format!("# {}\n\n", self.title);
        let _ = writeln!(text, "Level: {}", self.level);
        let _ = writeln!(text, "Duration: {} minutes\n", self.duration);

        text.push_str("## Objectives\n");
        for objective in &self.objectives {
            let _ = writeln!(text, "- {}", objective);
        }
        text.push('\n');

        text.push_str("## Activities\n");
        for activity in &self.activities {
            let _ = writeln!(
                text,
                "### {} ({} mins) - {}",
                activity.name, activity.duration, activity.activity_type
            );
            let _ = writeln!(text, "{}", activity.description);
            if let Some(materials) = &activity.materials {
                let _ = writeln!(text, "Materials: {}", materials.join(", "));
            }
            text.push('\n');
        }

        let _ = write!(text, "## Assessment\n{}\n\n", self.assessment);

        text.push_str("## Differentiation\n");
        let _ = writeln!(
            text,
            "For struggling students: {}",
            self.differentiation.struggling
        );
        let _ = write!(
            text,
            "For advanced students: {}\n\n",
            self.differentiation.advanced
        );

        text.push_str("## Materials\n");
        for material in &self.materials {
            let _ = writeln!(text, "- {}", material);
        }
        text.push('\n');

        text.push_str("## Teacher Reflection Questions\n");
        for item in &self.reflection {
            let _ = writeln!(text, "- {}", item);
        }

        text
    }
}
