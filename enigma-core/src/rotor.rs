//! Rotor — disco de substituição com posição rotacional
//!
//! A rotor is an immutable value. Stepping never mutates the receiver: it
//! returns a new `Rotor` at the advanced position, with its reverse table
//! rebuilt for that offset.
//!
//! Forward and reverse lookups are deliberately asymmetric:
//!
//! - `substitution(p)` adds the live offset: `wiring[(current + p) mod N]`
//! - `reverse_substitution(p)` does not: `reverse[p]`, where `reverse` already
//!   inverts `{i -> wiring[(current + i) mod N]}` for the current offset
//!
//! Together they are exact inverses of each other at every position.

use crate::error::{EnigmaError, EnigmaResult};
use crate::mapping::{PermutationMapping, Symbol};
use std::sync::Arc;

/// Rotor com fiação, posição inicial e posição atual
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    /// Fiação compartilhada entre todas as posições do mesmo rotor
    wiring: Arc<PermutationMapping>,
    /// Reverse table for `current_position`
    reverse_mappings: Vec<Symbol>,
    starting_position: usize,
    current_position: usize,
    number_of_mappings: usize,
    full_rotation_completed: bool,
}

impl Rotor {
    /// Cria rotor na posição inicial; N é o tamanho da fiação
    pub fn new(starting_position: usize, wiring: PermutationMapping) -> EnigmaResult<Self> {
        let size = wiring.len();
        Self::with_size(starting_position, wiring, size)
    }

    /// Cria rotor com número de posições declarado.
    ///
    /// `number_of_mappings` must equal the wiring size; a rotor over a partial
    /// wiring would not be a bijection.
    pub fn with_size(
        starting_position: usize,
        wiring: PermutationMapping,
        number_of_mappings: usize,
    ) -> EnigmaResult<Self> {
        if number_of_mappings != wiring.len() {
            return Err(EnigmaError::mismatch(
                "rotor wiring",
                number_of_mappings,
                wiring.len(),
            ));
        }
        if starting_position >= number_of_mappings {
            return Err(EnigmaError::IndexOutOfRange {
                index: starting_position,
                size: number_of_mappings,
            });
        }

        Ok(Self::at_position(
            Arc::new(wiring),
            starting_position,
            starting_position,
            false,
        ))
    }

    /// Internal constructor; `current_position < wiring.len()` must hold.
    fn at_position(
        wiring: Arc<PermutationMapping>,
        starting_position: usize,
        current_position: usize,
        full_rotation_completed: bool,
    ) -> Self {
        let number_of_mappings = wiring.len();
        let offset_wiring = &wiring.as_slice()[current_position..];
        let wrapped_wiring = &wiring.as_slice()[..current_position];

        let mut reverse_mappings = vec![0; number_of_mappings];
        for (i, &value) in offset_wiring.iter().chain(wrapped_wiring).enumerate() {
            reverse_mappings[value] = i;
        }

        Self {
            wiring,
            reverse_mappings,
            starting_position,
            current_position,
            number_of_mappings,
            full_rotation_completed,
        }
    }

    /// Advances by `positions` and returns the new rotor state.
    ///
    /// The returned rotor reports a completed rotation iff it landed back on
    /// its starting position.
    #[must_use]
    pub fn move_by(&self, positions: usize) -> Self {
        let new_position =
            self.mapping_index(self.current_position + (positions % self.number_of_mappings));
        let full_rotation_completed = new_position == self.starting_position;

        Self::at_position(
            Arc::clone(&self.wiring),
            self.starting_position,
            new_position,
            full_rotation_completed,
        )
    }

    /// Avança uma posição
    #[must_use]
    pub fn step(&self) -> Self {
        self.move_by(1)
    }

    /// Forward lookup relative to the live offset.
    pub fn substitution(&self, position: Symbol) -> EnigmaResult<Symbol> {
        self.check_position(position)?;
        let index = self.mapping_index(self.current_position + position);
        Ok(self.wiring.as_slice()[index])
    }

    /// Reverse lookup; the offset is already baked into the reverse table.
    pub fn reverse_substitution(&self, position: Symbol) -> EnigmaResult<Symbol> {
        self.check_position(position)?;
        Ok(self.reverse_mappings[self.mapping_index(position)])
    }

    pub fn has_completed_full_rotation(&self) -> bool {
        self.full_rotation_completed
    }

    pub fn starting_position(&self) -> usize {
        self.starting_position
    }

    pub fn current_position(&self) -> usize {
        self.current_position
    }

    pub fn number_of_mappings(&self) -> usize {
        self.number_of_mappings
    }

    pub fn wiring(&self) -> &PermutationMapping {
        &self.wiring
    }

    /// Same wiring and starting position, back at the start with no rotation recorded.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::at_position(
            Arc::clone(&self.wiring),
            self.starting_position,
            self.starting_position,
            false,
        )
    }

    fn check_position(&self, position: Symbol) -> EnigmaResult<()> {
        if position >= self.number_of_mappings {
            return Err(EnigmaError::IndexOutOfRange {
                index: position,
                size: self.number_of_mappings,
            });
        }
        Ok(())
    }

    fn mapping_index(&self, position: usize) -> usize {
        position % self.number_of_mappings
    }
}
