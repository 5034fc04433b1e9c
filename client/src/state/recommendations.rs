//! Care-recommendation text parsing and progressive reveal.
//!
//! The assistance endpoint returns loosely formatted text where `**` marks
//! section boundaries and `Title: body` introduces a titled section.

#[cfg(test)]
#[path = "recommendations_test.rs"]
mod recommendations_test;

/// Delay between revealing consecutive sections.
pub const REVEAL_INTERVAL_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationSection {
    /// Display title, already numbered for sections after the first.
    pub title: Option<String>,
    /// Markdown body.
    pub body: String,
}

/// Split recommendation text into display sections.
pub fn parse_recommendations(text: &str) -> Vec<RecommendationSection> {
    text.split("**")
        .filter(|piece| !piece.trim().is_empty())
        .enumerate()
        .map(|(index, piece)| match piece.split_once(':') {
            Some((title, body)) => {
                let title = title.trim();
                let title = match (title.is_empty(), index) {
                    (true, _) => None,
                    (false, 0) => Some(title.to_owned()),
                    (false, _) => Some(format!("{index}. {title}")),
                };
                // Nothing after the colon: show the whole piece.
                let body = match body.trim() {
                    "" => piece.trim(),
                    body => body,
                };
                RecommendationSection { title, body: body.to_owned() }
            }
            None => RecommendationSection { title: None, body: piece.trim().to_owned() },
        })
        .collect()
}

/// Sections parsed once, shown a few at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub sections: Vec<RecommendationSection>,
    pub visible: usize,
}

impl RevealState {
    pub fn new(text: &str) -> Self {
        Self { sections: parse_recommendations(text), visible: 0 }
    }

    /// Reveal one more section. Returns `false` once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.visible < self.sections.len() {
            self.visible += 1;
        }
        self.visible < self.sections.len()
    }

    pub fn shown(&self) -> &[RecommendationSection] {
        &self.sections[..self.visible.min(self.sections.len())]
    }

    pub fn is_complete(&self) -> bool {
        self.visible >= self.sections.len()
    }
}
