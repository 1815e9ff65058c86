use crate::domain::{
    nutrition::entities::GenerationResult,
    report::entities::{ChatMessage, ChatRole, FormattedSection, SectionCategory, SectionLine},
};

pub const ANALYSIS_FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't analyze this image. Please try with a clearer food image.";

pub const ANALYSIS_ERROR_MESSAGE: &str = "Error analyzing image. Please try again.";

pub const CHAT_FALLBACK_MESSAGE: &str = "Sorry, I couldn't process that. Please try again.";

pub const CHAT_ERROR_MESSAGE: &str = "Sorry, there was an error. Please try again.";

pub const CHAT_GREETING: &str =
    "Hi! I'm your nutrition assistant. Ask me anything about food, health, or nutrition!";

/// Splits answer text into sections separated by blank lines.
///
/// The first non-blank line of each section becomes its title and picks the
/// [`SectionCategory`]; the remaining lines are parsed with [`SectionLine::parse`].
pub fn format_analysis(text: &str) -> Vec<FormattedSection> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            sections.extend(build_section(&current));
            current.clear();
        } else {
            current.push(line);
        }
    }
    sections.extend(build_section(&current));

    sections
}

fn build_section(lines: &[&str]) -> Option<FormattedSection> {
    let (title, body) = lines.split_first()?;

    Some(FormattedSection {
        title: title.to_string(),
        category: SectionCategory::classify(title),
        lines: body.iter().map(|line| SectionLine::parse(line)).collect(),
    })
}

/// Text to display for an image analysis request.
///
/// A failed request shows [`ANALYSIS_ERROR_MESSAGE`]; a response without an
/// answer shows [`ANALYSIS_FALLBACK_MESSAGE`].
pub fn analysis_text<E>(outcome: &Result<GenerationResult, E>) -> &str {
    match outcome {
        Ok(result) => result.answer_text().unwrap_or(ANALYSIS_FALLBACK_MESSAGE),
        Err(_) => ANALYSIS_ERROR_MESSAGE,
    }
}

pub fn render_analysis<E>(outcome: &Result<GenerationResult, E>) -> Vec<FormattedSection> {
    format_analysis(analysis_text(outcome))
}

/// Text to display for a chat request, from the `answer` field of the reply.
pub fn chat_reply<'a, E>(outcome: &Result<Option<&'a str>, E>) -> &'a str {
    match outcome {
        Ok(Some(answer)) if !answer.is_empty() => *answer,
        Ok(_) => CHAT_FALLBACK_MESSAGE,
        Err(_) => CHAT_ERROR_MESSAGE,
    }
}

/// Conversation shown to the user, opened by the assistant's greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(CHAT_GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Records the user's question. Blank questions are ignored.
    pub fn ask(&mut self, question: &str) -> bool {
        if question.trim().is_empty() {
            return false;
        }

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            message: question.to_string(),
        });
        true
    }

    pub fn receive<E>(&mut self, outcome: &Result<Option<&str>, E>) {
        self.messages.push(ChatMessage::bot(chat_reply(outcome)));
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}
