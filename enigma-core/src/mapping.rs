//! PermutationMapping — bijection over `[0, N)`
//!
//! A substitution table where every value in `[0, N)` appears exactly once.
//! The inverse is derived once at construction by direct assignment
//! (`inverse[forward[i]] = i`), so both lookups are O(1).

use crate::error::{EnigmaError, EnigmaResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Índice de símbolo no alfabeto configurado
pub type Symbol = usize;

/// Permutação validada com inversa em cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct PermutationMapping {
    forward: Vec<Symbol>,
    inverse: Vec<Symbol>,
}

impl PermutationMapping {
    /// Builds a mapping whose size is the length of `values`.
    pub fn new(values: Vec<Symbol>) -> EnigmaResult<Self> {
        let size = values.len();
        Self::with_size(values, size)
    }

    /// Builds a mapping with a declared domain size `size`.
    ///
    /// Fails with [`EnigmaError::MalformedMapping`] when the length differs from
    /// `size`, when a value is `>= size`, or when a value repeats.
    pub fn with_size(values: Vec<Symbol>, size: usize) -> EnigmaResult<Self> {
        if size == 0 {
            return Err(EnigmaError::malformed("mapping must not be empty"));
        }
        if values.len() != size {
            return Err(EnigmaError::malformed(format!(
                "expected {size} values, found {}",
                values.len()
            )));
        }

        let mut inverse = vec![usize::MAX; size];
        for (index, &value) in values.iter().enumerate() {
            if value >= size {
                return Err(EnigmaError::malformed(format!(
                    "value {value} at index {index} is outside [0, {size})"
                )));
            }
            if inverse[value] != usize::MAX {
                return Err(EnigmaError::malformed(format!(
                    "value {value} appears at both index {} and index {index}",
                    inverse[value]
                )));
            }
            inverse[value] = index;
        }

        Ok(Self {
            forward: values,
            inverse,
        })
    }

    /// Identity permutation of size `size`
    pub fn identity(size: usize) -> EnigmaResult<Self> {
        Self::new((0..size).collect())
    }

    /// `mapping[index]`
    pub fn forward(&self, index: Symbol) -> EnigmaResult<Symbol> {
        self.forward
            .get(index)
            .copied()
            .ok_or(EnigmaError::IndexOutOfRange {
                index,
                size: self.len(),
            })
    }

    /// The index `j` with `mapping[j] == value`.
    pub fn inverse(&self, value: Symbol) -> EnigmaResult<Symbol> {
        match self.inverse.get(value) {
            Some(&index) if index < self.len() => Ok(index),
            Some(_) => Err(EnigmaError::malformed(format!(
                "no index maps to {value}"
            ))),
            None => Err(EnigmaError::IndexOutOfRange {
                index: value,
                size: self.len(),
            }),
        }
    }

    /// Tamanho do domínio (N)
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Always false for a constructed mapping
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.forward
    }

    /// True when applying the mapping twice yields the identity.
    pub fn is_involution(&self) -> bool {
        self.first_non_involutive().is_none()
    }

    /// First `(symbol, image)` pair where `mapping[image] != symbol`.
    pub(crate) fn first_non_involutive(&self) -> Option<(Symbol, Symbol)> {
        self.forward
            .iter()
            .enumerate()
            .find(|&(symbol, &image)| self.forward[image] != symbol)
            .map(|(symbol, &image)| (symbol, image))
    }
}

impl TryFrom<Vec<Symbol>> for PermutationMapping {
    type Error = EnigmaError;

    fn try_from(values: Vec<Symbol>) -> EnigmaResult<Self> {
        Self::new(values)
    }
}

impl From<PermutationMapping> for Vec<Symbol> {
    fn from(mapping: PermutationMapping) -> Self {
        mapping.forward
    }
}

impl fmt::Display for PermutationMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.forward.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
