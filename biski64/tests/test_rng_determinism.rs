//! Determinism Tests
//!
//! Same seed → same sequence, bit for bit. The golden vectors below were
//! computed once from the reference recurrence and must never change.

use biski64::{init, next, next_n, step, Biski64, State};

const GOLDEN_SEED_12345: [u64; 8] = [
    0xa588_1069_3c7f_5a81,
    0x7d1e_5690_f3e0_3f1a,
    0xa2a3_3a54_f233_567e,
    0xe283_c2d5_3ce1_023e,
    0xd07d_da60_fd59_541a,
    0xf096_1a8a_ce0c_848a,
    0x977e_bf96_a6dc_e567,
    0x6d72_6c8c_2bb3_1319,
];

const GOLDEN_SEED_0: [u64; 8] = [
    0x0e70_e8a6_06d3_96d6,
    0xa6c9_e600_0ee8_d879,
    0x0b70_6e11_ed9c_d6ee,
    0x931e_8312_febd_fd06,
    0x53fa_5fb4_71b1_d790,
    0xc5f0_76bb_950e_8451,
    0x4a04_1c8c_b5ba_c8e4,
    0x6f13_da56_d252_f5c3,
];

#[test]
fn test_golden_vector_seed_12345() {
    let mut rng = Biski64::new(12345);
    let outputs: Vec<u64> = (0..8).map(|_| rng.next_u64()).collect();
    assert_eq!(outputs, GOLDEN_SEED_12345.to_vec());
}

#[test]
fn test_golden_vector_seed_0() {
    let (outputs, _) = next_n(init(0), 8);
    assert_eq!(outputs, GOLDEN_SEED_0.to_vec());
}

#[test]
fn test_seeded_state_seed_12345() {
    assert_eq!(
        init(12345),
        State::from_raw(
            0x1e9a_57bc_80e6_721d,
            0x346e_dce5_f713_f8ed,
            0x2211_8258_a9d1_11a0,
        )
    );
}

#[test]
fn test_same_seed_same_sequence() {
    let mut rng1 = Biski64::new(42);
    let mut rng2 = Biski64::new(42);

    for _ in 0..1000 {
        assert_eq!(rng1.next_u64(), rng2.next_u64());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = Biski64::new(42);
    let mut rng2 = Biski64::new(43);

    let a = rng1.next_n(16);
    let b = rng2.next_n(16);
    assert_ne!(a, b);
}

#[test]
fn test_step_repeatable_for_fixed_state() {
    let state = init(99);
    let first = step(state);
    for _ in 0..10 {
        assert_eq!(step(state), first);
    }
}

#[test]
fn test_next_n_equals_looped_next() {
    let start = init(2024);

    let (bulk, bulk_end) = next_n(start, 257);

    let mut state = start;
    let mut looped = Vec::new();
    for _ in 0..257 {
        let (output, successor) = next(state);
        looped.push(output);
        state = successor;
    }

    assert_eq!(bulk, looped);
    assert_eq!(bulk_end, state);
}

#[test]
fn test_next_n_zero_is_identity() {
    let state = init(5);
    let (outputs, end) = next_n(state, 0);
    assert!(outputs.is_empty());
    assert_eq!(end, state);
}

#[test]
fn test_replay_from_recorded_state() {
    let mut rng = Biski64::new(777);
    rng.next_n(500);

    let recorded = *rng.state();
    let expected = rng.next_n(32);

    let mut replay = Biski64::from_state(recorded);
    assert_eq!(replay.next_n(32), expected);
}

#[test]
fn test_all_zero_state_rejected_but_steppable() {
    // Seeding refuses the all-zero vector. Stepped by hand, fast_loop == 0
    // bumps slow_loop on the first call, so the vector does not map to itself.
    assert!(State::from_words(0, 0, 0).is_err());

    let (output, next_state) = step(State::from_raw(0, 0, 0));
    assert_eq!(output, 0);
    assert_eq!(next_state.fast_loop, biski64::GR);
    assert_eq!(next_state.slow_loop, biski64::GR);
    assert_eq!(next_state.mix, biski64::GR.rotate_left(59));
}
