use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SectionCategory {
    Nutrition,
    Risk,
    Recommendation,
    General,
}

const NUTRITION_KEYWORDS: &[&str] = &["nutrition", "calories", "macro"];
const RISK_KEYWORDS: &[&str] = &["risk", "danger", "warning"];
const RECOMMENDATION_KEYWORDS: &[&str] = &["alternative", "healthy", "recommend"];

impl SectionCategory {
    /// Case-insensitive keyword match on a section title. Earlier rules win.
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| title.contains(k));

        if matches(NUTRITION_KEYWORDS) {
            SectionCategory::Nutrition
        } else if matches(RISK_KEYWORDS) {
            SectionCategory::Risk
        } else if matches(RECOMMENDATION_KEYWORDS) {
            SectionCategory::Recommendation
        } else {
            SectionCategory::General
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionLine {
    Bullet { text: String },
    KeyValue { key: String, value: String },
    Plain { text: String },
}

const BULLET_MARKERS: &[char] = &['•', '-'];

impl SectionLine {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(BULLET_MARKERS) {
            return SectionLine::Bullet {
                text: rest.trim().to_string(),
            };
        }

        match line.split_once(':') {
            Some((key, value)) => SectionLine::KeyValue {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => SectionLine::Plain {
                text: line.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattedSection {
    pub title: String,
    pub category: SectionCategory,
    pub lines: Vec<SectionLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub message: String,
}

impl ChatMessage {
    pub fn bot(message: &str) -> Self {
        Self {
            role: ChatRole::Bot,
            message: message.to_string(),
        }
    }
}
