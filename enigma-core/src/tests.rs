//! Testes integrados para enigma-core

use crate::*;

fn preset_machine() -> Enigma {
    MachineConfig::preset().unwrap().build().unwrap()
}

#[test]
fn test_self_inverse_round_trip() {
    let mut machine_a = preset_machine();
    let mut machine_b = preset_machine();

    let input: Vec<Symbol> = (0..200).map(|i| (i * 7 + 3) % 27).collect();
    let ciphertext = machine_a.encrypt_all(&input).unwrap();
    let decrypted = machine_b.encrypt_all(&ciphertext).unwrap();

    assert_eq!(decrypted, input);
}

#[test]
fn test_round_trip_after_reset() {
    let mut machine = preset_machine();
    let input = vec![0, 0, 0, 1, 2, 26, 13, 5];

    let ciphertext = machine.encrypt_all(&input).unwrap();
    machine.reset();
    assert_eq!(machine.encrypt_all(&ciphertext).unwrap(), input);
}

#[test]
fn test_determinism() {
    let input: Vec<Symbol> = (0..100).map(|i| i % 27).collect();
    let first = preset_machine().encrypt_all(&input).unwrap();
    let second = preset_machine().encrypt_all(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_self_encryption_without_reflector_fixed_points() {
    // reflector (0 1)(2 3)(4 5) has no fixed point
    let mapping = |v: Vec<usize>| PermutationMapping::new(v).unwrap();
    let mut machine = Enigma::new(
        mapping(vec![3, 5, 1, 0, 2, 4]),
        mapping(vec![1, 0, 3, 2, 5, 4]),
        vec![
            Rotor::new(0, mapping(vec![4, 2, 0, 5, 1, 3])).unwrap(),
            Rotor::new(3, mapping(vec![1, 3, 5, 0, 2, 4])).unwrap(),
        ],
    )
    .unwrap();

    for i in 0..60 {
        let symbol = i % 6;
        assert_ne!(machine.encrypt(symbol).unwrap(), symbol);
    }
}

#[test]
fn test_repeated_symbol_changes_output() {
    let mut machine = preset_machine();
    let output = machine.encrypt_all(&[0; 27]).unwrap();
    let first = output[0];
    assert!(output.iter().any(|&s| s != first));
}

#[test]
fn test_out_of_range_symbol() {
    let mut machine = preset_machine();
    assert_eq!(
        machine.encrypt(27),
        Err(EnigmaError::InvalidSymbol { symbol: 27, size: 27 })
    );
}

#[test]
fn test_fast_rotor_carry_period() {
    let mut machine = preset_machine();

    for _ in 0..26 {
        machine.encrypt(0).unwrap();
    }
    // rotor 0 went 0 -> 26, rotor 1 has not moved
    assert_eq!(machine.rotor_positions(), vec![26, 1]);

    machine.encrypt(0).unwrap();
    assert_eq!(machine.rotor_positions(), vec![0, 1]);
    assert!(machine.rotors()[0].has_completed_full_rotation());

    machine.encrypt(0).unwrap();
    assert_eq!(machine.rotor_positions(), vec![1, 2]);
}

#[test]
fn test_text_round_trip() {
    let config = MachineConfig::preset().unwrap();
    let alphabet = config.alphabet().unwrap();

    let mut sender = config.build().unwrap();
    let mut receiver = config.build().unwrap();

    let plaintext = "the quick brown fox jumps over the lazy dog";
    let ciphertext = encrypt_text(&mut sender, &alphabet, plaintext).unwrap();
    assert_ne!(ciphertext, plaintext);
    assert_eq!(ciphertext.chars().count(), plaintext.chars().count());

    let decrypted = encrypt_text(&mut receiver, &alphabet, &ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_text_with_unsupported_character_is_rejected() {
    let config = MachineConfig::preset().unwrap();
    let alphabet = config.alphabet().unwrap();
    let mut machine = config.build().unwrap();

    let result = encrypt_text(&mut machine, &alphabet, "hello, world");
    assert_eq!(result, Err(EnigmaError::UnsupportedCharacter(',')));
    // no rotor moved
    assert_eq!(machine.rotor_positions(), vec![0, 1]);
}

#[test]
fn test_text_alphabet_size_mismatch() {
    let mut machine = preset_machine();
    let alphabet = Alphabet::new("abc".chars()).unwrap();
    assert!(matches!(
        encrypt_text(&mut machine, &alphabet, "abc"),
        Err(EnigmaError::ConfigurationMismatch { .. })
    ));
}

#[test]
fn test_custom_config_round_trip() {
    let config = MachineConfig::from_toml_str(
        r#"
alphabet = "abcdef"
plugboard = [3, 5, 1, 0, 2, 4]
reflector = [1, 0, 3, 2, 5, 4]

[[rotors]]
starting_position = 4
wiring = [4, 2, 0, 5, 1, 3]

[[rotors]]
starting_position = 1
wiring = [1, 3, 5, 0, 2, 4]

[[rotors]]
wiring = [5, 4, 3, 2, 1, 0]
"#,
    )
    .unwrap();
    let alphabet = config.alphabet().unwrap();

    let plaintext = "abcdeffedcbaaaaaabbbbbb";
    let ciphertext = encrypt_text(&mut config.build().unwrap(), &alphabet, plaintext).unwrap();
    let decrypted = encrypt_text(&mut config.build().unwrap(), &alphabet, &ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_preset_known_answer() {
    let config = MachineConfig::preset().unwrap();
    let alphabet = config.alphabet().unwrap();
    let mut machine = config.build().unwrap();

    let ciphertext =
        encrypt_text(&mut machine, &alphabet, "the quick brown fox jumps over the lazy dog").unwrap();
    assert_eq!(ciphertext, "skifhqmfyicfryrqgy uplxiuv geesuroffwflgxuq");
}

#[test]
fn test_preset_first_symbols() {
    let mut machine = preset_machine();
    let output = machine.encrypt_all(&[0; 6]).unwrap();
    assert_eq!(output, vec![14, 13, 10, 25, 12, 1]);
}
