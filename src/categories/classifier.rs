//! Fallback question classifier
//!
//! Used when the backend sends no categorized payload. Each suggestion goes
//! to the first question word it matches, in `QuestionWord::ALL` order, and
//! suggestions matching none are left out.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionWord {
    What,
    How,
    Why,
    Where,
    When,
    Who,
    Which,
    Are,
}

impl QuestionWord {
    /// Priority order: first match wins
    pub const ALL: [QuestionWord; 8] = [
        QuestionWord::What,
        QuestionWord::How,
        QuestionWord::Why,
        QuestionWord::Where,
        QuestionWord::When,
        QuestionWord::Who,
        QuestionWord::Which,
        QuestionWord::Are,
    ];

    pub fn word(self) -> &'static str {
        match self {
            QuestionWord::What => "what",
            QuestionWord::How => "how",
            QuestionWord::Why => "why",
            QuestionWord::Where => "where",
            QuestionWord::When => "when",
            QuestionWord::Who => "who",
            QuestionWord::Which => "which",
            QuestionWord::Are => "are",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            QuestionWord::What => "What",
            QuestionWord::How => "How",
            QuestionWord::Why => "Why",
            QuestionWord::Where => "Where",
            QuestionWord::When => "When",
            QuestionWord::Who => "Who",
            QuestionWord::Which => "Which",
            QuestionWord::Are => "Are",
        }
    }

    /// `lowered` must already be lower-cased
    fn matches(self, lowered: &str) -> bool {
        let word = self.word();
        lowered.starts_with(word) || lowered.contains(&format!("{} ", word))
    }
}

/// Bucket for one suggestion, `None` if no question word matches
pub fn classify(suggestion: &str) -> Option<QuestionWord> {
    let lowered = suggestion.to_lowercase();
    QuestionWord::ALL.into_iter().find(|q| q.matches(&lowered))
}

/// Suggestions grouped by question word, always holding all eight buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionGroups {
    groups: Vec<(QuestionWord, Vec<String>)>,
}

impl QuestionGroups {
    pub fn group<S: AsRef<str>>(suggestions: &[S]) -> Self {
        let mut groups: Vec<(QuestionWord, Vec<String>)> = QuestionWord::ALL
            .into_iter()
            .map(|q| (q, Vec::new()))
            .collect();

        for suggestion in suggestions {
            let suggestion = suggestion.as_ref();
            if let Some(word) = classify(suggestion)
                && let Some((_, bucket)) = groups.iter_mut().find(|(q, _)| *q == word)
            {
                bucket.push(suggestion.to_string());
            }
        }

        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionWord, &[String])> {
        self.groups.iter().map(|(q, items)| (*q, items.as_slice()))
    }

    pub fn get(&self, word: QuestionWord) -> &[String] {
        self.groups
            .iter()
            .find(|(q, _)| *q == word)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod classifier_tests;
