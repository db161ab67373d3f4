//! # 🔐 enigma-core — Rotor Cipher Engine
//!
//! Simulates an electromechanical polyalphabetic substitution cipher: a fixed
//! plugboard, an ordered stack of stepping rotors and a reflector, composed
//! into one symbol-level function that is its own inverse.
//!
//! The engine only ever sees symbol indices in `[0, N)`. Mapping characters to
//! indices is the job of [`Alphabet`].
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         Enigma                                  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Plugboard (PermutationMapping + inverse) │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Rotor stack (odometer stepping)          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Reflector (involution)                   │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Computational Complexity
//!
//! - Mapping construction: O(N) validation and inverse derivation
//! - Rotor step: O(N), the reverse table is rebuilt for the new offset
//! - `encrypt`: O(R·N) for R rotors (dominated by stepping)
//!
//! ## Exemplo
//!
//! ```
//! use enigma_core::{MachineConfig, encrypt_text};
//!
//! let config = MachineConfig::preset()?;
//! let alphabet = config.alphabet()?;
//!
//! let mut sender = config.build()?;
//! let ciphertext = encrypt_text(&mut sender, &alphabet, "attack at dawn")?;
//!
//! let mut receiver = config.build()?;
//! let plaintext = encrypt_text(&mut receiver, &alphabet, &ciphertext)?;
//! assert_eq!(plaintext, "attack at dawn");
//! # Ok::<(), enigma_core::EnigmaError>(())
//! ```

pub mod alphabet;
pub mod config;
pub mod error;
pub mod machine;
pub mod mapping;
pub mod presets;
pub mod rotor;

pub use alphabet::{Alphabet, encrypt_text};
pub use config::{MachineConfig, RotorConfig};
pub use error::{EnigmaError, EnigmaResult};
pub use machine::Enigma;
pub use mapping::{PermutationMapping, Symbol};
pub use rotor::Rotor;

#[cfg(test)]
mod tests;
