// Host-side tests for page query overrides of the stage parameters.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod interp {
        include!("../src/core/interp.rs");
    }
    pub mod curtain {
        include!("../src/core/curtain.rs");
    }
    pub mod oscillators {
        include!("../src/core/oscillators.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
}

use crate::core::oscillators::PoseTransition;
use crate::core::params::*;

#[test]
fn empty_query_keeps_defaults() {
    let mut p = StageParams::default();
    p.apply_query("").expect("empty query");
    p.apply_query("?").expect("bare question mark");
    assert_eq!(p, StageParams::default());
}

#[test]
fn seed_pose_and_rate_are_applied() {
    let mut p = StageParams::default();
    p.apply_query("?seed=42&pose=snap&rate=5.5").expect("valid query");
    assert_eq!(p.seed, Some(42));
    assert_eq!(p.prop.transition, PoseTransition::Snap);
    assert_eq!(p.curtain.rate, 5.5);

    p.apply_query("pose=smooth").expect("valid query");
    assert_eq!(p.prop.transition, PoseTransition::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let mut p = StageParams::default();
    p.apply_query("utm_source=mail&debug&seed=3").expect("valid query");
    assert_eq!(p.seed, Some(3));
}

#[test]
fn malformed_values_are_rejected() {
    for (query, key, value) in [
        ("seed=abc", "seed", "abc"),
        ("pose=wobbly", "pose", "wobbly"),
        ("rate=0", "rate", "0"),
        ("rate=-2", "rate", "-2"),
        ("rate=inf", "rate", "inf"),
        ("rate=NaN", "rate", "NaN"),
    ] {
        let mut p = StageParams::default();
        assert_eq!(
            p.apply_query(query),
            Err(ParamError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            }),
            "{query}"
        );
    }
}

#[test]
fn error_message_names_the_key() {
    let mut p = StageParams::default();
    let err = p.apply_query("rate=fast").expect_err("invalid rate");
    assert_eq!(err.to_string(), "invalid value \"fast\" for `rate`");
}
