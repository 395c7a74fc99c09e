//! Property-based tests using proptest.
//!
//! Random schemas and random candidates, checked against the per-combinator
//! rules: optional, union, array and tuple must compose the same way at any
//! nesting depth.

use json_conform::batch::check_all;
use json_conform::field::{any_of_constants, array, optional, simple, tuple, union_or};
use json_conform::{conforms_to_type, Policy, Schema, Type};
use proptest::prelude::*;
use serde_json::{Map, Value};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Non-null scalars.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        (-1000i64..1000).prop_map(Value::from),
        (-1000i64..1000).prop_map(|i| Value::from(i as f64)),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::from),
    ]
}

/// Literals for constant sets; null included so a wrapped set can list it.
fn constant_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        1 => Just(Value::Null),
        6 => scalar_strategy(),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        1 => Just(Value::Null),
        6 => scalar_strategy(),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>())),
        ]
    })
}

/// A candidate that may also be absent.
fn candidate_strategy() -> impl Strategy<Value = Option<Value>> {
    proptest::option::of(value_strategy())
}

fn type_strategy() -> impl Strategy<Value = Type> {
    prop::sample::select(Type::ALL.to_vec())
}

fn schema_strategy() -> impl Strategy<Value = Schema> {
    let leaf = prop_oneof![
        4 => type_strategy().prop_map(Schema::from),
        1 => prop::collection::vec(constant_strategy(), 1..3).prop_map(|cs| any_of_constants(cs)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|s| optional(s)),
            prop::collection::vec(inner.clone(), 1..3).prop_map(|alts| union_or(alts)),
            inner.clone().prop_map(|s| array(s)),
            prop::collection::vec(inner.clone(), 0..3).prop_map(|elems| tuple(elems)),
            prop::collection::btree_map("[a-d]", inner, 0..3).prop_map(|fields| Schema::object(fields)),
        ]
    })
}

/// Reference reading of the primitive rules.
fn primitive_oracle(t: Type, v: &Value) -> bool {
    match (t, v) {
        (Type::String, Value::String(_)) => true,
        (Type::Integer, Value::Number(n)) => n.as_f64().is_some_and(|f| f.fract() == 0.0),
        (Type::Float, Value::Number(_)) => true,
        (Type::Boolean, Value::Bool(_)) => true,
        (Type::Object, Value::Object(_)) => true,
        (Type::Array, Value::Array(_)) => true,
        _ => false,
    }
}

// ============================================================================
// PRIMITIVE PROPERTIES
// ============================================================================

proptest! {
    /// Property: the primitive matcher agrees with the runtime-kind rules.
    #[test]
    fn prop_simple_matches_kind_rules(t in type_strategy(), v in value_strategy()) {
        prop_assert_eq!(simple(t, &v), primitive_oracle(t, &v), "{} vs {}", t, v);
    }

    /// Property: no primitive accepts null or absence.
    #[test]
    fn prop_primitives_reject_null_and_absent(t in type_strategy()) {
        prop_assert!(!simple(t, &Value::Null));
        prop_assert!(conforms_to_type(None, &Schema::from(t)).is_err());
    }
}

// ============================================================================
// COMBINATOR PROPERTIES
// ============================================================================

proptest! {
    /// Property: optional(S) accepts absence whatever S is.
    #[test]
    fn prop_optional_accepts_absent(s in schema_strategy()) {
        prop_assert!(optional(s).accepts(None));
    }

    /// Property: optional(S) rejects null whatever S is.
    #[test]
    fn prop_optional_rejects_null(s in schema_strategy()) {
        prop_assert!(!optional(s).accepts(Some(&Value::Null)));
    }

    /// Property: optional(S) agrees with S on every present non-null value.
    #[test]
    fn prop_optional_is_transparent_when_present(s in schema_strategy(), v in value_strategy()) {
        let expected = !v.is_null() && s.accepts(Some(&v));
        prop_assert_eq!(optional(s).accepts(Some(&v)), expected);
    }

    /// Property: a union accepts exactly the set union of its alternatives.
    #[test]
    fn prop_union_is_set_union(a in schema_strategy(), b in schema_strategy(), v in candidate_strategy()) {
        let either = a.accepts(v.as_ref()) || b.accepts(v.as_ref());
        prop_assert_eq!(union_or([a, b]).accepts(v.as_ref()), either);
    }

    /// Property: a union of primitives never accepts absence.
    #[test]
    fn prop_union_of_primitives_rejects_absent(a in type_strategy(), b in type_strategy()) {
        prop_assert!(!union_or([a, b]).accepts(None));
    }

    /// Property: array(S) accepts [] and otherwise needs every element.
    #[test]
    fn prop_array_is_universal(s in schema_strategy(), xs in prop::collection::vec(value_strategy(), 0..5)) {
        let schema = array(s.clone());
        prop_assert!(schema.accepts(Some(&Value::Array(vec![]))));
        let all = xs.iter().all(|x| s.accepts(Some(x)));
        prop_assert_eq!(schema.accepts(Some(&Value::Array(xs))), all);
    }

    /// Property: tuple([S1..Sn]) needs length n and each position.
    #[test]
    fn prop_tuple_is_positional(
        elems in prop::collection::vec(schema_strategy(), 0..4),
        xs in prop::collection::vec(value_strategy(), 0..5),
    ) {
        let expected = xs.len() == elems.len()
            && xs.iter().zip(&elems).all(|(x, s)| s.accepts(Some(x)));
        prop_assert_eq!(tuple(elems).accepts(Some(&Value::Array(xs))), expected);
    }

    /// Property: non-arrays never pass array or tuple schemas.
    #[test]
    fn prop_containers_need_arrays(s in schema_strategy(), v in scalar_strategy()) {
        prop_assert!(!array(s.clone()).accepts(Some(&v)));
        prop_assert!(!tuple([s]).accepts(Some(&v)));
    }
}

// ============================================================================
// CHECKER PROPERTIES
// ============================================================================

proptest! {
    /// Property: the checker is a pure function of its inputs.
    #[test]
    fn prop_check_is_deterministic(s in schema_strategy(), v in candidate_strategy()) {
        let first = conforms_to_type(v.as_ref(), &s);
        let second = conforms_to_type(v.as_ref(), &s);
        prop_assert_eq!(first, second);
    }

    /// Property: checking in parallel gives the sequential answers, in order.
    #[test]
    fn prop_batch_matches_sequential(s in schema_strategy(), vs in prop::collection::vec(value_strategy(), 0..16)) {
        let parallel = check_all(&s, &Policy::default(), &vs);
        let sequential: Vec<_> = vs.iter().map(|v| conforms_to_type(Some(v), &s)).collect();
        prop_assert_eq!(parallel, sequential);
    }

    /// Property: a present value that fails reports a path rooted at `$`.
    #[test]
    fn prop_mismatch_path_is_rooted(s in schema_strategy(), v in value_strategy()) {
        if let Err(m) = conforms_to_type(Some(&v), &s) {
            prop_assert!(m.to_string().starts_with('$'), "{}", m);
        }
    }
}
