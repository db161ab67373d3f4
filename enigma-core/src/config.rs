//! Machine configuration (enigma.toml)
//!
//! Handles parsing, validation and assembly of a machine from its
//! configuration file.

use crate::alphabet::{Alphabet, DEFAULT_ALPHABET};
use crate::error::{EnigmaError, EnigmaResult};
use crate::machine::Enigma;
use crate::mapping::PermutationMapping;
use crate::presets;
use crate::rotor::Rotor;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Machine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Characters in symbol order (default: `a`-`z` followed by space)
    #[serde(default = "default_alphabet")]
    pub alphabet: String,

    pub plugboard: PermutationMapping,

    pub reflector: PermutationMapping,

    /// Rotors in stepping order; the first one is the fast rotor
    #[serde(default)]
    pub rotors: Vec<RotorConfig>,
}

/// One rotor section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorConfig {
    #[serde(default)]
    pub starting_position: usize,

    pub wiring: PermutationMapping,
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

impl MachineConfig {
    /// The built-in two-rotor machine over the default alphabet.
    pub fn preset() -> EnigmaResult<Self> {
        let rotor = |starting_position, wiring: &[usize]| -> EnigmaResult<RotorConfig> {
            Ok(RotorConfig {
                starting_position,
                wiring: PermutationMapping::new(wiring.to_vec())?,
            })
        };

        Ok(Self {
            alphabet: default_alphabet(),
            plugboard: PermutationMapping::new(presets::PLUGBOARD.to_vec())?,
            reflector: PermutationMapping::new(presets::REFLECTOR.to_vec())?,
            rotors: vec![
                rotor(presets::ROTOR_I_START, &presets::ROTOR_I[..])?,
                rotor(presets::ROTOR_II_START, &presets::ROTOR_II[..])?,
            ],
        })
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> EnigmaResult<Self> {
        toml::from_str(content)
            .map_err(|e| EnigmaError::Config(format!("Failed to parse machine config: {e}")))
    }

    /// Load configuration from a file path
    pub fn from_file(path: &Path) -> EnigmaResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EnigmaError::Config(format!("Failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml_string(&self) -> EnigmaResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| EnigmaError::Config(format!("Failed to serialize machine config: {e}")))
    }

    pub fn alphabet(&self) -> EnigmaResult<Alphabet> {
        Alphabet::new(self.alphabet.chars())
    }

    /// Assembles a machine with every rotor at its starting position.
    pub fn build(&self) -> EnigmaResult<Enigma> {
        let alphabet = self.alphabet()?;
        if alphabet.len() != self.plugboard.len() {
            return Err(EnigmaError::mismatch(
                "alphabet",
                self.plugboard.len(),
                alphabet.len(),
            ));
        }

        let rotors = self
            .rotors
            .iter()
            .map(|rotor| Rotor::new(rotor.starting_position, rotor.wiring.clone()))
            .collect::<EnigmaResult<Vec<_>>>()?;

        Enigma::new(self.plugboard.clone(), self.reflector.clone(), rotors)
    }
}
