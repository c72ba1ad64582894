use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Enhancement {
    #[default]
    Simplify,
    Enrich,
    CulturalContext,
    Interactive,
    Visual,
}

impl Enhancement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Enhancement::Simplify => "simplify",
            Enhancement::Enrich => "enrich",
            Enhancement::CulturalContext => "culturalContext",
            Enhancement::Interactive => "interactive",
            Enhancement::Visual => "visual",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Enhancement::Simplify => "Make complex text easier to understand",
            Enhancement::Enrich => "Add more advanced vocabulary to the text",
            Enhancement::CulturalContext => "Include cultural notes and explanations",
            Enhancement::Interactive => "Add questions and activities related to the text",
            Enhancement::Visual => "Include emoji and formatting to aid comprehension",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnhancedContent {
    pub enhanced_text: String,
    pub enhancement: Enhancement,
}
