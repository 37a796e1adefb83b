//! Property- and scenario-style tests drawn from SPEC_FULL.md §8, exercised
//! at the parse level (complementing `kestrelc-lex`'s token-level cousins).

use crate::ast::{Expr, Fingerprint, Param, TypeNode};
use crate::{parse, ParseError};
use kestrelc_util::Symbol;

#[test]
fn scenario_s1_conditional_expression_full_parse() {
    let module = parse("example t = t > 6 ? t + 5 : t").unwrap();
    let f = &module.functions[0];
    assert_eq!(f.name.as_str(), "example");
    match &f.clauses[0].body {
        Expr::Conditional { cond, then_branch, else_branch } => {
            assert!(matches!(**cond, Expr::Binary { .. }));
            assert!(matches!(**then_branch, Expr::Binary { .. }));
            assert_eq!(**else_branch, Expr::Var { name: Symbol::intern("t") });
        },
        other => panic!("expected Conditional, got {other:?}"),
    }
}

#[test]
fn scenario_s3_signature_list_return_round_trips_through_module() {
    let module = parse("example takes Nothing returns [Integer]\nexample = [1, 2, 3]").unwrap();
    let f = &module.functions[0];
    let sig = f.signature.as_ref().unwrap();
    assert_eq!(sig.returns, TypeNode::List { element: Box::new(TypeNode::Integer) });
    assert_eq!(f.clauses[0].body, Expr::ListPair {
        head: Box::new(Expr::IntLit { value: 1 }),
        tail: Box::new(Expr::ListPair {
            head: Box::new(Expr::IntLit { value: 2 }),
            tail: Box::new(Expr::ListPair {
                head: Box::new(Expr::IntLit { value: 3 }),
                tail: Box::new(Expr::NothingLit),
            }),
        }),
    });
}

#[test]
fn scenario_s4_imports_precede_the_module_clause() {
    let module = parse("import Hyperion except a\nimport Ocellus only map\nmodule M where\nexample x = x").unwrap();
    assert!(module.importable);
    assert_eq!(module.name, "M");
    assert_eq!(
        module.depends,
        vec![Fingerprint::except("Hyperion", "a"), Fingerprint::only("Ocellus", "map")]
    );
}

#[test]
fn scenario_s5_multi_clause_pattern_match_base_and_general_case() {
    let module = parse("fact 0 = 1\nfact n = n * fact(n - 1)").unwrap();
    let f = &module.functions[0];
    assert_eq!(f.clauses.len(), 2);
    assert_eq!(f.clauses[0].params, vec![Param::IntLit { value: 0 }]);
    assert_eq!(f.clauses[1].params, vec![Param::Var { name: Symbol::intern("n") }]);
    // The recursive call is classified as Call on syntactic grounds (the
    // parenthesized argument list) even though `fact` isn't fully defined
    // yet while its own clauses are being parsed.
    match &f.clauses[1].body {
        Expr::Binary { root, rhs, .. } => {
            assert_eq!(root, "*");
            assert!(matches!(**rhs, Expr::Call { .. }));
        },
        other => panic!("expected Binary, got {other:?}"),
    }
}

#[test]
fn scenario_s6_datatype_constructors_are_usable_as_literals_in_later_functions() {
    let module = parse(
        "datatype Shape = Circle Float or Rectangle Float Float\narea s = s",
    )
    .unwrap();
    assert_eq!(module.datatypes[0].options.len(), 2);
    assert_eq!(module.functions[0].name.as_str(), "area");
}

#[test]
fn property_module_declarations_preserve_source_order() {
    let module = parse("type A = Integer\ntype B = Boolean\nf x = x\ng x = x").unwrap();
    assert_eq!(module.types[0].name.as_str(), "A");
    assert_eq!(module.types[1].name.as_str(), "B");
    assert_eq!(module.functions[0].name.as_str(), "f");
    assert_eq!(module.functions[1].name.as_str(), "g");
}

#[test]
fn property_list_literal_is_a_cons_chain_walkable_by_tail() {
    let module = parse("xs = [1, 2]").unwrap();
    let mut cursor = &module.functions[0].clauses[0].body;
    let mut collected = Vec::new();
    loop {
        match cursor {
            Expr::ListPair { head, tail } => {
                collected.push((**head).clone());
                cursor = tail;
            },
            Expr::NothingLit => break,
            other => panic!("expected ListPair or NothingLit tail, got {other:?}"),
        }
    }
    assert_eq!(collected, vec![Expr::IntLit { value: 1 }, Expr::IntLit { value: 2 }]);
}

#[test]
fn property_anonymous_module_has_empty_deterministic_name() {
    let a = parse("x = 1").unwrap();
    let b = parse("x = 1").unwrap();
    assert_eq!(a.name, "");
    assert_eq!(b.name, "");
    assert!(!a.importable && !b.importable);
}

#[test]
fn property_duplicate_type_definition_is_an_error() {
    let err = parse("type A = Integer\ntype A = Boolean\nf x = x").unwrap_err();
    assert!(matches!(err, ParseError::DuplicateDefinition { .. }));
}

#[test]
fn property_unterminated_string_propagates_as_lex_error() {
    let err = parse("f x = \"unterminated").unwrap_err();
    assert!(matches!(err, ParseError::Lex(_)));
}

#[test]
fn private_function_with_signature_and_docstring() {
    let module = parse(
        "private square takes Integer returns Integer\n`Squares a number.`\nsquare n = n * n",
    )
    .unwrap();
    let f = &module.functions[0];
    assert!(f.private);
    assert_eq!(f.docstring.as_deref(), Some("Squares a number."));
    assert_eq!(f.signature.as_ref().unwrap().returns, TypeNode::Integer);
}

#[test]
fn where_bound_helper_is_scoped_to_a_single_call() {
    let module = parse("f x = g(x) where g y = y + 1").unwrap();
    match &module.functions[0].clauses[0].body {
        Expr::Call { name, where_fn, .. } => {
            assert_eq!(name.as_str(), "g");
            let helper = where_fn.as_ref().expect("expected a where-bound helper");
            assert_eq!(helper.name.as_str(), "g");
            assert_eq!(helper.clauses.len(), 1);
        },
        other => panic!("expected Call, got {other:?}"),
    }
}
