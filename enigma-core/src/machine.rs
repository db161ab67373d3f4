//! Enigma — plugboard, pilha de rotores e refletor
//!
//! Per symbol, in order:
//!
//! 1. step the rotors (odometer carry, evaluated on pre-step state)
//! 2. plugboard forward
//! 3. rotors forward, index 0 first
//! 4. reflector
//! 5. rotors reverse, last index first
//! 6. plugboard inverse
//!
//! The machine is owned exclusively by one encryption stream: `encrypt` takes
//! `&mut self` and commits the new rotor state only after the whole pass has
//! succeeded, so the state is never partially updated.

use crate::error::{EnigmaError, EnigmaResult};
use crate::mapping::{PermutationMapping, Symbol};
use crate::rotor::Rotor;
use tracing::{debug, trace};

/// Máquina completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enigma {
    /// Index 0 is the fast rotor next to the plugboard; the last one sits next to the reflector.
    rotors: Vec<Rotor>,
    plugboard: PermutationMapping,
    reflector: PermutationMapping,
}

impl Enigma {
    /// Monta a máquina.
    ///
    /// Every component must share the plugboard's domain size, and the
    /// reflector must be an involution so that the machine is self-inverse.
    pub fn new(
        plugboard: PermutationMapping,
        reflector: PermutationMapping,
        rotors: Vec<Rotor>,
    ) -> EnigmaResult<Self> {
        let size = plugboard.len();

        if reflector.len() != size {
            return Err(EnigmaError::mismatch("reflector", size, reflector.len()));
        }
        for (index, rotor) in rotors.iter().enumerate() {
            if rotor.number_of_mappings() != size {
                return Err(EnigmaError::mismatch(
                    format!("rotor {index}"),
                    size,
                    rotor.number_of_mappings(),
                ));
            }
        }
        if let Some((symbol, image)) = reflector.first_non_involutive() {
            return Err(EnigmaError::ReflectorNotInvolution { symbol, image });
        }

        debug!(alphabet_size = size, rotor_count = rotors.len(), "machine assembled");

        Ok(Self {
            rotors,
            plugboard,
            reflector,
        })
    }

    /// Encrypts one symbol, advancing the rotors first.
    ///
    /// A symbol outside `[0, N)` fails with [`EnigmaError::InvalidSymbol`] and
    /// leaves the rotors where they were.
    pub fn encrypt(&mut self, symbol: Symbol) -> EnigmaResult<Symbol> {
        self.check_symbol(symbol)?;

        let rotors = advance_rotors(&self.rotors);
        let encrypted = self.substitute(&rotors, symbol)?;
        self.rotors = rotors;

        trace!(symbol, encrypted, "symbol encrypted");
        Ok(encrypted)
    }

    /// Encrypts a sequence as one unit: either every symbol is encrypted and
    /// the rotor state advances, or nothing changes and no output is returned.
    pub fn encrypt_all(&mut self, symbols: &[Symbol]) -> EnigmaResult<Vec<Symbol>> {
        let mut rotors = self.rotors.clone();
        let mut output = Vec::with_capacity(symbols.len());

        for &symbol in symbols {
            self.check_symbol(symbol)?;
            rotors = advance_rotors(&rotors);
            output.push(self.substitute(&rotors, symbol)?);
        }

        self.rotors = rotors;
        Ok(output)
    }

    /// Volta todos os rotores à posição inicial
    pub fn reset(&mut self) {
        self.rotors = self.rotors.iter().map(Rotor::reset).collect();
        debug!(positions = ?self.rotor_positions(), "rotors reset");
    }

    /// Tamanho do alfabeto (N)
    pub fn alphabet_size(&self) -> usize {
        self.plugboard.len()
    }

    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn rotor_positions(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::current_position).collect()
    }

    pub fn plugboard(&self) -> &PermutationMapping {
        &self.plugboard
    }

    pub fn reflector(&self) -> &PermutationMapping {
        &self.reflector
    }

    fn check_symbol(&self, symbol: Symbol) -> EnigmaResult<()> {
        if symbol >= self.alphabet_size() {
            return Err(EnigmaError::InvalidSymbol {
                symbol,
                size: self.alphabet_size(),
            });
        }
        Ok(())
    }

    /// Plugboard -> rotors -> reflector -> rotors (reversed) -> plugboard inverse
    fn substitute(&self, rotors: &[Rotor], symbol: Symbol) -> EnigmaResult<Symbol> {
        let mut value = self.plugboard.forward(symbol)?;

        for rotor in rotors {
            value = rotor.substitution(value)?;
        }

        value = self.reflector.forward(value)?;

        for rotor in rotors.iter().rev() {
            value = rotor.reverse_substitution(value)?;
        }

        self.plugboard.inverse(value)
    }
}

/// Odometer stepping.
///
/// Rotor 0 always steps. Rotor `k > 0` steps iff rotor `k - 1` reported a
/// completed rotation *before* this call, so a carry lands on the call after
/// the one that completed the revolution.
fn advance_rotors(rotors: &[Rotor]) -> Vec<Rotor> {
    rotors
        .iter()
        .enumerate()
        .map(|(index, rotor)| {
            let carry = index == 0 || rotors[index - 1].has_completed_full_rotation();
            if !carry {
                return rotor.clone();
            }

            let stepped = rotor.step();
            trace!(
                rotor = index,
                position = stepped.current_position(),
                full_rotation = stepped.has_completed_full_rotation(),
                "rotor stepped"
            );
            stepped
        })
        .collect()
}
