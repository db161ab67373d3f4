//! Tipos de erro para enigma-core

use thiserror::Error;

/// Resultado customizado para operações do motor de rotores
pub type EnigmaResult<T> = Result<T, EnigmaError>;

/// Erros que podem ocorrer ao montar ou operar a máquina
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Wrong length, duplicate value or out-of-range value in a permutation
    #[error("Malformed mapping: {reason}")]
    MalformedMapping { reason: String },

    #[error("Index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Invalid symbol {symbol}: alphabet has {size} symbols")]
    InvalidSymbol { symbol: usize, size: usize },

    /// Component sizes disagree across plugboard, reflector, rotors and alphabet
    #[error("Configuration mismatch: {component} has size {found}, expected {expected}")]
    ConfigurationMismatch {
        component: String,
        expected: usize,
        found: usize,
    },

    #[error("Reflector is not an involution: {symbol} -> {image} does not map back")]
    ReflectorNotInvolution { symbol: usize, image: usize },

    #[error("Unsupported character: {0:?}")]
    UnsupportedCharacter(char),

    #[error("Duplicate character in alphabet: {0:?}")]
    DuplicateCharacter(char),

    #[error("Config error: {0}")]
    Config(String),
}

impl EnigmaError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedMapping {
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(component: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ConfigurationMismatch {
            component: component.into(),
            expected,
            found,
        }
    }
}
