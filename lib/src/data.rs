use crate::results::*;
use std::fmt;
use std::fmt::Write;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// A five-letter word, normalized to lower case.
///
/// Words order lexicographically, which is the order used to break ties between equally good
/// guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Constructs a word from the given text, converting it to lower case.
    ///
    /// ```
    /// use wordle_autoplay::*;
    ///
    /// assert_eq!(Word::new("CRANE")?.to_string(), "crane");
    /// assert!(Word::new("cranes").is_err());
    /// # Ok::<(), WordleError>(())
    /// ```
    pub fn new(word: &str) -> Result<Word, WordleError> {
        let length = word.chars().count();
        if length != WORD_LENGTH {
            return Err(WordleError::InvalidWordLength {
                word: word.to_string(),
                length,
            });
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (letter, c) in letters.iter_mut().zip(word.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordleError::UnsupportedCharacter(c));
            }
            *letter = c.to_ascii_lowercase() as u8;
        }
        Ok(Word(letters))
    }

    /// The letters of this word, as lower-case ASCII bytes.
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Whether the word contains the given lower-case ASCII letter.
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Whether any letter appears more than once.
    pub fn has_repeated_letters(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(index, letter)| self.0[..index].contains(letter))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            f.write_char(letter as char)?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.to_string()
    }
}

/// Contains all the possible words for this Wordle game.
///
/// The words are sorted and deduplicated on construction, then shared read-only. Cloning a bank
/// is cheap, and a bank can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Arc<[Word]>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Surrounding whitespace is trimmed, empty lines
    /// are skipped, and each word is converted to lower case.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let mut words = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            words.push(Word::new(word)?);
        }
        Ok(WordBank::from_words(words))
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    ///
    /// Words are trimmed and converted to lower case, and empty strings are skipped.
    ///
    /// ```
    /// use wordle_autoplay::*;
    ///
    /// let bank = WordBank::from_iterator(["crane", "", "SLATE", "crane"])?;
    ///
    /// assert_eq!(bank.len(), 2);
    /// # Ok::<(), WordleError>(())
    /// ```
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                if word.is_empty() {
                    return None;
                }
                Some(Word::new(word))
            })
            .collect::<Result<Vec<Word>, WordleError>>()?;
        Ok(WordBank::from_words(words))
    }

    fn from_words(mut words: Vec<Word>) -> Self {
        words.sort_unstable();
        words.dedup();
        WordBank {
            all_words: Arc::from(words),
        }
    }

    /// Whether the given word is in the bank.
    pub fn contains(&self, word: &Word) -> bool {
        self.all_words.binary_search(word).is_ok()
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// The words that are still consistent with every guess result seen so far.
///
/// A candidate set is never modified in place. Narrowing it with [`CandidateSet::filter`] returns
/// a new set, and the words stay in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Arc<[Word]>,
}

impl CandidateSet {
    /// Every word in the bank is a candidate.
    pub fn from_bank(bank: &WordBank) -> CandidateSet {
        CandidateSet {
            words: Arc::clone(&bank.all_words),
        }
    }

    /// Returns the candidates that would have produced `feedback` if they were the secret word and
    /// `guess` was played against them.
    ///
    /// Replaying the guess covers every kind of clue, including repeated letters. An empty result
    /// means that no candidate matches the feedback.
    ///
    /// ```
    /// use wordle_autoplay::*;
    ///
    /// let bank = WordBank::from_iterator(["crane", "slate", "trace", "crate"])?;
    /// let guess = Word::new("crane")?;
    ///
    /// let remaining = CandidateSet::from_bank(&bank).filter(&guess, &"ggg.g".parse()?);
    ///
    /// assert_eq!(&*remaining, &[Word::new("crate")?]);
    /// # Ok::<(), WordleError>(())
    /// ```
    pub fn filter(&self, guess: &Word, feedback: &Feedback) -> CandidateSet {
        CandidateSet {
            words: self
                .words
                .iter()
                .filter(|candidate| evaluate(guess, candidate) == *feedback)
                .copied()
                .collect(),
        }
    }

    /// Whether the given word is still a candidate.
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }
}

impl Deref for CandidateSet {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        let mut words: Vec<Word> = iter.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        CandidateSet {
            words: Arc::from(words),
        }
    }
}

/// A letter along with its location in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocatedLetter {
    /// A lower-case ASCII letter.
    pub letter: u8,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: u8,
}

impl LocatedLetter {
    pub fn new(letter: u8, location: u8) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// Counts the number of words that have letters in certain locations.
#[derive(Clone, Debug)]
pub struct WordCounter {
    num_words: u32,
    num_words_by_ll: [[u32; 26]; WORD_LENGTH],
    num_words_by_letter: [u32; 26],
}

impl WordCounter {
    /// Creates a new word counter based on the given word list.
    pub fn new(words: &[Word]) -> WordCounter {
        let mut num_words_by_ll = [[0; 26]; WORD_LENGTH];
        let mut num_words_by_letter = [0; 26];
        for word in words {
            let letters = word.letters();
            for (index, letter) in letters.iter().enumerate() {
                let letter_index = (letter - b'a') as usize;
                num_words_by_ll[index][letter_index] += 1;
                if !letters[..index].contains(letter) {
                    num_words_by_letter[letter_index] += 1;
                }
            }
        }
        WordCounter {
            num_words: words.len() as u32,
            num_words_by_ll,
            num_words_by_letter,
        }
    }

    /// The number of words that were counted.
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    /// Retrieves the count of words with the given letter at the given location.
    pub fn num_words_with_located_letter(&self, ll: &LocatedLetter) -> u32 {
        self.num_words_by_ll[ll.location as usize][(ll.letter - b'a') as usize]
    }

    /// Retrieves the count of words that contain the given letter.
    pub fn num_words_with_letter(&self, letter: u8) -> u32 {
        self.num_words_by_letter[(letter - b'a') as usize]
    }
}
