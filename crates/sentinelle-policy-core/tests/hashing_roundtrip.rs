#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Integration tests for Argon2id hashing and hardware calibration.

use sentinelle_policy_core::{
    hash_password, recommend_params, verify_password, Argon2idParams, HashPreset,
};

/// Small params so the roundtrip tests stay fast.
const TEST_PARAMS: Argon2idParams = Argon2idParams {
    m_cost: 64,
    t_cost: 1,
    p_cost: 1,
};

#[test]
fn hash_verify_roundtrip() {
    let encoded = hash_password("correct horse battery staple", &TEST_PARAMS)
        .expect("hash should succeed");
    assert!(verify_password("correct horse battery staple", &encoded));
    assert!(!verify_password("correct horse battery stapler", &encoded));
}

#[test]
fn unicode_passwords_roundtrip() {
    let encoded = hash_password("périmètre-sécurité-ünïcode", &TEST_PARAMS)
        .expect("hash should succeed");
    assert!(verify_password("périmètre-sécurité-ünïcode", &encoded));
    assert!(!verify_password("perimetre-securite-unicode", &encoded));
}

#[test]
fn verify_never_panics_on_fuzz_like_input() {
    for garbage in [
        "",
        "$",
        "$argon2id$",
        "$argon2id$v=19$m=0,t=0,p=0$$",
        "plain text",
        "$2b$12$bcrypt-shaped-but-not-argon2",
    ] {
        assert!(!verify_password("password", garbage));
    }
}

#[test]
fn calibration_succeeds_on_current_hardware() {
    let presets = recommend_params().expect("calibration should succeed on any reasonable host");

    for params in [&presets.interactive, &presets.moderate, &presets.sensitive] {
        assert!(params.m_cost > 0, "m_cost should be positive");
        assert!(params.t_cost > 0, "t_cost should be positive");
        assert!(params.p_cost > 0, "p_cost should be positive");
    }

    // Tiers never decrease in memory.
    assert!(presets.moderate.m_cost >= presets.interactive.m_cost);
    assert!(presets.sensitive.m_cost >= presets.moderate.m_cost);

    // The interactive tier never exceeds its own target.
    assert!(presets.interactive.m_cost <= HashPreset::Interactive.default_params().m_cost);
}

#[test]
fn calibrated_interactive_params_actually_hash() {
    let presets = recommend_params().expect("calibration should succeed");
    let encoded =
        hash_password("calibration-check", &presets.interactive).expect("hash should succeed");
    assert!(verify_password("calibration-check", &encoded));
}
