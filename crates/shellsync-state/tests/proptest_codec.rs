//! ShellState / ShellStateDiff のプロパティテスト
//!
//! 1. ShellState: decode(encode(s)) == s
//! 2. ShellState: 同じ値のハッシュは常に一致する
//! 3. ShellState: JSON 経由でも往復できる
//! 4. ShellStateDiff: decode(encode(d)) == d
//! 5. 任意の位置で切ったバッファはパニックせずエラーになる
//! 6. 任意のバイト列をデコードしてもパニックしない

use proptest::prelude::*;

use shellsync_state::{
    EncodedLineDiff, EncodedMapDiff, ShellState, ShellStateDiff, StateError, StateHash,
};

fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..200)
}

fn arb_state() -> impl Strategy<Value = ShellState> {
    (
        ".{0,12}",
        ".{0,40}",
        arb_bytes(),
        ".{0,60}",
        ".{0,60}",
        ".{0,20}",
    )
        .prop_map(|(version, cwd, shell_vars, aliases, funcs, error)| ShellState {
            version,
            cwd,
            shell_vars,
            aliases,
            funcs,
            error,
        })
}

fn arb_diff() -> impl Strategy<Value = ShellStateDiff> {
    (
        ".{0,12}",
        "[A-Za-z0-9+/]{27}=",
        ".{0,40}",
        arb_bytes(),
        arb_bytes(),
        arb_bytes(),
        ".{0,20}",
    )
        .prop_map(
            |(version, base_hash, cwd, vars_diff, aliases_diff, funcs_diff, error)| ShellStateDiff {
                version,
                base_hash: StateHash::from(base_hash),
                cwd,
                vars_diff: EncodedMapDiff::from(vars_diff),
                aliases_diff: EncodedLineDiff::from(aliases_diff),
                funcs_diff: EncodedLineDiff::from(funcs_diff),
                error,
            },
        )
}

proptest! {
    #[test]
    fn state_round_trip(state in arb_state()) {
        let decoded = ShellState::decode(&state.encode()).unwrap();
        prop_assert_eq!(decoded, state);
    }

    #[test]
    fn state_hash_is_deterministic(state in arb_state()) {
        let (hash1, packed1) = state.encode_and_hash();
        let (hash2, packed2) = state.clone().encode_and_hash();
        prop_assert_eq!(&hash1, &hash2);
        prop_assert_eq!(packed1, packed2);
        prop_assert_eq!(hash1.as_str().len(), 28);
    }

    #[test]
    fn state_json_round_trip(state in arb_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let back: ShellState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, state);
    }

    #[test]
    fn diff_round_trip(diff in arb_diff()) {
        let decoded = ShellStateDiff::decode(&diff.encode()).unwrap();
        prop_assert_eq!(decoded, diff);
    }

    #[test]
    fn truncated_state_fails(state in arb_state(), cut in any::<prop::sample::Index>()) {
        let packed = state.encode();
        let truncated = &packed[..cut.index(packed.len())];
        prop_assert!(matches!(ShellState::decode(truncated), Err(StateError::Pack(_))));
    }

    #[test]
    fn truncated_diff_fails(diff in arb_diff(), cut in any::<prop::sample::Index>()) {
        let packed = diff.encode();
        let truncated = &packed[..cut.index(packed.len())];
        prop_assert!(matches!(ShellStateDiff::decode(truncated), Err(StateError::Pack(_))));
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let _ = ShellState::decode(&bytes);
        let _ = ShellStateDiff::decode(&bytes);
    }
}
