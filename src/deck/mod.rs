//! Slide deck model
//!
//! A deck is the fixed, ordered sequence of slides established at startup.
//! Slides are never created or destroyed once the session is running.

mod loader;

pub use loader::{SLIDE_SEPARATOR, load_deck, parse_deck, sanitize_line};

/// One full-screen panel of presented content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slide {
    pub title: Option<String>,
    pub body: Vec<String>,
}

impl Slide {
    pub fn new(title: Option<String>, body: Vec<String>) -> Self {
        Self { title, body }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.iter().all(|line| line.trim().is_empty())
    }
}

/// The immutable, ordered slide sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    name: String,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(name: impl Into<String>, slides: Vec<Slide>) -> Self {
        Self {
            name: name.into(),
            slides,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_slide_is_empty() {
        let slide = Slide::new(None, vec!["   ".to_string(), String::new()]);
        assert!(slide.is_empty());
        assert!(!Slide::new(Some("T".to_string()), vec![]).is_empty());
    }

    #[test]
    fn test_deck_accessors() {
        let deck = Deck::new("talk", vec![Slide::default(), Slide::default()]);
        assert_eq!(deck.name(), "talk");
        assert_eq!(deck.len(), 2);
        assert!(deck.get(1).is_some());
        assert!(deck.get(2).is_none());
    }
}
