use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Grammar,
    Vocabulary,
    Structure,
    Coherence,
    Style,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Character span in the submitted text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedbackItem {
    #[serde(rename = "type")]
    pub category: FeedbackCategory,
    pub severity: Severity,
    pub issue: String,
    pub location: TextSpan,
    pub suggestion: String,
    pub explanation: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "CategoryScoreRepr")]
pub struct CategoryScore {
    pub score: u8,
    pub count: u32,
}

/// Models sometimes answer a category with a bare score.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryScoreRepr {
    Bare(u8),
    Full {
        score: u8,
        #[serde(default)]
        count: u32,
    },
}

impl From<CategoryScoreRepr> for CategoryScore {
    fn from(repr: CategoryScoreRepr) -> Self {
        match repr {
            CategoryScoreRepr::Bare(score) => CategoryScore { score, count: 0 },
            CategoryScoreRepr::Full { score, count } => CategoryScore { score, count },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedbackDetails {
    pub grammar: CategoryScore,
    pub vocabulary: CategoryScore,
    pub structure: CategoryScore,
    pub coherence: CategoryScore,
    pub style: CategoryScore,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReport {
    pub overall_score: u8,
    pub strengths: Vec<String>,
    pub summary: String,
    pub details: FeedbackDetails,
    #[serde(default)]
    pub items: Vec<FeedbackItem>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            ScoreBand::Strong
        } else if score >= 70 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }
}

/// Band per feedback category, mirroring [`FeedbackDetails`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryBands {
    pub grammar: ScoreBand,
    pub vocabulary: ScoreBand,
    pub structure: ScoreBand,
    pub coherence: ScoreBand,
    pub style: ScoreBand,
}

impl FeedbackDetails {
    pub fn bands(&self) -> CategoryBands {
        CategoryBands {
            grammar: ScoreBand::from_score(self.grammar.score),
            vocabulary: ScoreBand::from_score(self.vocabulary.score),
            structure: ScoreBand::from_score(self.structure.score),
            coherence: ScoreBand::from_score(self.coherence.score),
            style: ScoreBand::from_score(self.style.score),
        }
    }
}

impl FeedbackReport {
    pub fn overall_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score)
    }
}
