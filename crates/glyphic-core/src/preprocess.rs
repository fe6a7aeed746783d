use crate::language::Token;

pub trait Preprocessor {
    /// Lowercase a word, drop everything that is not an ASCII letter, ASCII
    /// digit or whitespace, collapse whitespace runs.
    fn normalize(&self, word: &str) -> String {
        let cleaned: String = word
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect();

        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Split on runs of whitespace.
    ///
    /// Leading or trailing whitespace produces an empty first or last token
    /// and an empty input produces a single empty token.
    fn split_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let pieces: Vec<&str> = text.split(char::is_whitespace).collect();
        let last = pieces.len() - 1;

        pieces
            .into_iter()
            .enumerate()
            .filter(|(i, piece)| !piece.is_empty() || *i == 0 || *i == last)
            .map(|(_, piece)| piece)
            .collect()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.split_words(text)
            .into_iter()
            .enumerate()
            .map(|(position, surface)| Token {
                surface: surface.to_string(),
                normalized: self.normalize(surface),
                position,
            })
            .collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
