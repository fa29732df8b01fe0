use crate::common::{PageContent, PageText};

use super::casing::transfer_casing;
use super::types::{CorrectionConfig, SpellingService};

/// Swaps each token for its top suggestion. Empty tokens and misses are
/// kept as they are.
pub fn correct_words(
    tokens: &[String],
    speller: &dyn SpellingService,
    config: &CorrectionConfig,
) -> Vec<String> {
    tokens
        .iter()
        .map(|token| {
            if token.is_empty() {
                return token.clone();
            }
            match speller.lookup_top(token) {
                Some(suggestion) if config.transfer_casing => {
                    transfer_casing(token, &suggestion.term)
                }
                Some(suggestion) => suggestion.term,
                None => {
                    log::trace!("No suggestion for {:?}", token);
                    token.clone()
                }
            }
        })
        .collect()
}

/// Corrects each line of `text` as a whole, so words can be split or
/// merged. Line breaks and blank lines are preserved.
pub fn correct_compound(
    text: &str,
    speller: &dyn SpellingService,
    config: &CorrectionConfig,
) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                return line.to_string();
            }
            match speller
                .lookup_compound(line, config.max_edit_distance)
                .into_iter()
                .next()
            {
                Some(suggestion) if config.transfer_casing => {
                    transfer_casing(line, &suggestion.term)
                }
                Some(suggestion) => suggestion.term,
                None => line.to_string(),
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn correct_page(
    page: &PageText,
    speller: &dyn SpellingService,
    config: &CorrectionConfig,
) -> PageText {
    let content = match &page.content {
        PageContent::Words(tokens) => PageContent::Words(correct_words(tokens, speller, config)),
        PageContent::Whole(text) => PageContent::Whole(correct_compound(text, speller, config)),
    };
    page.with_content(content)
}

pub fn correct_pages(
    pages: Vec<PageText>,
    speller: &dyn SpellingService,
    config: &CorrectionConfig,
) -> Vec<PageText> {
    log::info!("Auto-correcting {} page(s) in {} mode", pages.len(), config.mode);
    pages
        .iter()
        .map(|page| correct_page(page, speller, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::Suggestion;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct TableSpeller {
        words: HashMap<&'static str, &'static str>,
        lines: HashMap<&'static str, &'static str>,
    }

    impl TableSpeller {
        fn new() -> Self {
            Self {
                words: HashMap::from([("helo", "hello"), ("Wrold", "world")]),
                lines: HashMap::from([("Helo wrold", "hello world"), ("thisis fine", "this is fine")]),
            }
        }
    }

    fn suggestion(term: &str) -> Suggestion {
        Suggestion {
            term: term.to_string(),
            distance: 1,
            count: 1,
        }
    }

    impl SpellingService for TableSpeller {
        fn lookup_top(&self, word: &str) -> Option<Suggestion> {
            self.words.get(word).map(|term| suggestion(term))
        }

        fn lookup_compound(&self, text: &str, max_edit_distance: i64) -> Vec<Suggestion> {
            assert_eq!(max_edit_distance, 2);
            self.lines.get(text).map(|term| suggestion(term)).into_iter().collect()
        }
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_words_fall_back_to_original() {
        let corrected = correct_words(
            &tokens(&["helo", "Wrold", "", "zzz\n"]),
            &TableSpeller::new(),
            &CorrectionConfig::words(),
        );
        assert_eq!(corrected, tokens(&["hello", "world", "", "zzz\n"]));
    }

    #[test]
    fn test_compound_per_line_with_casing() {
        let corrected = correct_compound(
            "Helo wrold\n\nthisis fine\nunknown line",
            &TableSpeller::new(),
            &CorrectionConfig::compound(),
        );
        assert_eq!(corrected, "Hello world\n\nthis is fine\nunknown line");
    }

    #[test]
    fn test_correct_page_keeps_path() {
        let page = PageText::new(
            PathBuf::from("/scans/a.png"),
            PageContent::Whole("Helo wrold".into()),
        );
        let corrected = correct_page(&page, &TableSpeller::new(), &CorrectionConfig::compound());
        assert_eq!(corrected.path, PathBuf::from("/scans/a.png"));
        assert_eq!(corrected.content, PageContent::Whole("Hello world".into()));
    }
}
