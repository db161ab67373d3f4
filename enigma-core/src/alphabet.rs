//! Alphabet — tabela caractere ↔ índice
//!
//! The engine works on symbol indices only. The alphabet translates text in
//! and out, and rejects characters it does not know instead of handing the
//! machine a sentinel index.

use crate::error::{EnigmaError, EnigmaResult};
use crate::machine::Enigma;
use crate::mapping::Symbol;
use std::collections::HashMap;
use std::fmt;

/// Lowercase latin letters followed by a space
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz ";

/// Conjunto ordenado de caracteres distintos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    indices: HashMap<char, Symbol>,
}

impl Alphabet {
    pub fn new(chars: impl IntoIterator<Item = char>) -> EnigmaResult<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(EnigmaError::Config("alphabet must not be empty".into()));
        }

        let mut indices = HashMap::with_capacity(chars.len());
        for (index, &c) in chars.iter().enumerate() {
            if indices.insert(c, index).is_some() {
                return Err(EnigmaError::DuplicateCharacter(c));
            }
        }

        Ok(Self { chars, indices })
    }

    pub fn index_of(&self, c: char) -> EnigmaResult<Symbol> {
        self.indices
            .get(&c)
            .copied()
            .ok_or(EnigmaError::UnsupportedCharacter(c))
    }

    pub fn char_at(&self, symbol: Symbol) -> EnigmaResult<char> {
        self.chars
            .get(symbol)
            .copied()
            .ok_or(EnigmaError::IndexOutOfRange {
                index: symbol,
                size: self.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.indices.contains_key(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let chars: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let indices = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { chars, indices }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Encrypts `text` character by character.
///
/// Every character is looked up before any rotor moves, so an unsupported
/// character aborts the whole operation with the machine untouched.
pub fn encrypt_text(machine: &mut Enigma, alphabet: &Alphabet, text: &str) -> EnigmaResult<String> {
    if alphabet.len() != machine.alphabet_size() {
        return Err(EnigmaError::mismatch(
            "alphabet",
            machine.alphabet_size(),
            alphabet.len(),
        ));
    }

    let symbols = text
        .chars()
        .map(|c| alphabet.index_of(c))
        .collect::<EnigmaResult<Vec<_>>>()?;

    machine
        .encrypt_all(&symbols)?
        .into_iter()
        .map(|symbol| alphabet.char_at(symbol))
        .collect()
}
