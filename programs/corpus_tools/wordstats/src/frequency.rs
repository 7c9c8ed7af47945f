use crate::{ChoiceError, Token};
use fnv::FnvHashMap;
use std::fmt;
use std::str::FromStr;

/// Occurrence counts per token, iterated in order of first occurrence.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    entries: Vec<(Token, usize)>,
    index: FnvHashMap<Token, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: &Token) {
        if let Some(&i) = self.index.get(token) {
            self.entries[i].1 += 1;
        } else {
            self.index.insert(token.clone(), self.entries.len());
            self.entries.push((token.clone(), 1));
        }
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that went in.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, usize)> + '_ {
        self.entries.iter().map(|(token, count)| (token, *count))
    }
}

pub fn count_words(tokens: &[Token]) -> FrequencyTable {
    let mut freqs = FrequencyTable::new();
    tokens.iter().for_each(|token| freqs.add(token));
    freqs
}

/// Tokens at least `min_length` characters long, in input order, repeats kept.
pub fn find_long_words(tokens: &[Token], min_length: usize) -> Vec<&Token> {
    tokens
        .iter()
        .filter(|token| token.chars().count() >= min_length)
        .collect()
}

/// How [`top_n`] orders tokens with the same count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The token seen first in the input comes first.
    #[default]
    FirstSeen,
    Alphabetical,
}

impl FromStr for TieBreak {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-seen" | "first_seen" => Ok(TieBreak::FirstSeen),
            "alphabetical" => Ok(TieBreak::Alphabetical),
            _ => Err(ChoiceError {
                got: s.to_string(),
                expected: "first-seen, alphabetical",
            }),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::FirstSeen => write!(f, "first-seen"),
            TieBreak::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

/// The `n` most frequent tokens, highest count first. Returns every token
/// when there are fewer than `n`.
pub fn top_n(freqs: &FrequencyTable, n: usize, tie_break: TieBreak) -> Vec<(&Token, usize)> {
    let mut ranked: Vec<_> = freqs.iter().collect();
    // sort_by is stable, so equal counts keep first-occurrence order
    match tie_break {
        TieBreak::FirstSeen => ranked.sort_by(|a, b| b.1.cmp(&a.1)),
        TieBreak::Alphabetical => ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))),
    }
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn ranked(top: &[(&Token, usize)]) -> Vec<(String, usize)> {
        top.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    fn pairs(list: &[(&str, usize)]) -> Vec<(String, usize)> {
        list.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn counts_example_sentence() {
        let tokens = tokenize("The cat sat on the mat. The cat ran.");
        let freqs = count_words(&tokens);
        assert_eq!(freqs.len(), 6);
        assert_eq!(freqs.total(), 9);
        assert_eq!(freqs.get("the"), Some(3));
        assert_eq!(freqs.get("cat"), Some(2));
        assert_eq!(freqs.get("mat."), Some(1));
        assert_eq!(freqs.get("mat"), None);
        let order: Vec<_> = freqs.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(order, vec!["the", "cat", "sat", "on", "mat.", "ran."]);
    }

    #[test]
    fn empty_table() {
        let freqs = count_words(&[]);
        assert!(freqs.is_empty());
        assert_eq!(freqs.total(), 0);
        assert!(top_n(&freqs, 5, TieBreak::FirstSeen).is_empty());
    }

    #[test]
    fn long_words_keep_order_and_repeats() {
        let tokens = tokenize("ran. mat. the ran. on");
        let long: Vec<_> = find_long_words(&tokens, 4).iter().map(|t| t.as_str()).collect();
        assert_eq!(long, vec!["ran.", "mat.", "ran."]);
    }

    #[test]
    fn long_words_measure_characters() {
        // four characters, eight bytes
        let tokens = tokenize("ñáéí abc");
        assert_eq!(find_long_words(&tokens, 4).len(), 1);
        assert_eq!(find_long_words(&tokens, 5).len(), 0);
        assert_eq!(find_long_words(&tokens, 0).len(), 2);
    }

    #[test]
    fn top_n_first_seen_ties() {
        let tokens = tokenize("The cat sat on the mat. The cat ran.");
        let freqs = count_words(&tokens);
        assert_eq!(
            ranked(&top_n(&freqs, 5, TieBreak::FirstSeen)),
            pairs(&[("the", 3), ("cat", 2), ("sat", 1), ("on", 1), ("mat.", 1)])
        );
    }

    #[test]
    fn top_n_alphabetical_ties() {
        let tokens = tokenize("The cat sat on the mat. The cat ran.");
        let freqs = count_words(&tokens);
        assert_eq!(
            ranked(&top_n(&freqs, 5, TieBreak::Alphabetical)),
            pairs(&[("the", 3), ("cat", 2), ("mat.", 1), ("on", 1), ("ran.", 1)])
        );
    }

    #[test]
    fn top_n_shorter_than_n() {
        let tokens = tokenize("b a b");
        let freqs = count_words(&tokens);
        assert_eq!(ranked(&top_n(&freqs, 5, TieBreak::FirstSeen)), pairs(&[("b", 2), ("a", 1)]));
        assert!(top_n(&freqs, 0, TieBreak::FirstSeen).is_empty());
    }

    #[test]
    fn tie_break_from_str() {
        assert_eq!("first-seen".parse(), Ok(TieBreak::FirstSeen));
        assert_eq!("alphabetical".parse(), Ok(TieBreak::Alphabetical));
        assert!("random".parse::<TieBreak>().is_err());
        assert_eq!(TieBreak::default(), TieBreak::FirstSeen);
        assert_eq!(TieBreak::Alphabetical.to_string(), "alphabetical");
    }
}
