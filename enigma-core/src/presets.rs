//! Fiação padrão da máquina
//!
//! Two rotors over the 27-symbol default alphabet (`a`-`z` and space), a
//! plugboard, and a reflector that swaps adjacent pairs and leaves the space
//! fixed.

use crate::mapping::Symbol;

pub const ALPHABET_SIZE: usize = 27;

pub const ROTOR_I: [Symbol; ALPHABET_SIZE] = [
    14, 25, 11, 21, 7, 13, 16, 23, 4, 5, 9, 22, 15, 3, 20, 2, 12, 24, 0, 8, 19, 26, 1, 10, 17, 18, 6,
];
pub const ROTOR_I_START: usize = 0;

pub const ROTOR_II: [Symbol; ALPHABET_SIZE] = [
    5, 25, 20, 6, 24, 19, 10, 16, 8, 21, 2, 11, 13, 12, 22, 18, 17, 7, 26, 14, 3, 15, 0, 23, 9, 4, 1,
];
pub const ROTOR_II_START: usize = 1;

pub const PLUGBOARD: [Symbol; ALPHABET_SIZE] = [
    9, 0, 21, 10, 4, 8, 24, 12, 1, 11, 23, 5, 20, 3, 19, 17, 16, 25, 7, 26, 13, 18, 15, 6, 2, 14, 22,
];

pub const REFLECTOR: [Symbol; ALPHABET_SIZE] = [
    1, 0, 3, 2, 5, 4, 7, 6, 9, 8, 11, 10, 13, 12, 15, 14, 17, 16, 19, 18, 21, 20, 23, 22, 25, 24, 26,
];
