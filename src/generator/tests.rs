use std::collections::HashSet;

use crate::expression::parser::parse;
use crate::expression::{BinaryOp, Node};
use crate::generator::{BlockGenerator, Digits, Shape, operator_triples};

#[test]
fn test_operator_triples_cover_all_choices() {
    let triples = operator_triples();
    assert_eq!(triples.len(), 64);
    assert_eq!(triples.first(), Some(&[BinaryOp::Add; 3]));
    assert_eq!(triples.last(), Some(&[BinaryOp::Div; 3]));
    let distinct: HashSet<_> = triples.iter().collect();
    assert_eq!(distinct.len(), 64);
}

#[test]
fn test_shapes_bracket_differently() {
    let leaves = Digits::default().literals();
    let ops = [BinaryOp::Sub, BinaryOp::Sub, BinaryOp::Sub];
    let texts: Vec<String> = Shape::ALL
        .iter()
        .filter_map(|s| s.build(&leaves, ops))
        .map(|n| n.text().to_string())
        .collect();
    assert_eq!(
        texts,
        vec!["9-1-7-8", "9-(1-7)-8", "9-1-(7-8)", "9-(1-7-8)", "9-(1-(7-8))"]
    );
}

#[test]
fn test_shape_aborts_on_division_by_zero() {
    let leaves = Digits::new([9, 1, 1, 8]).map(|d| d.literals());
    assert!(leaves.is_ok());
    if let Ok(leaves) = leaves {
        let ops = [BinaryOp::Div, BinaryOp::Sub, BinaryOp::Add];
        // 9/(1-1)+8
        assert!(Shape::InnerLeft.build(&leaves, ops).is_none());
        // ((9/1)-1)+8 is fine
        assert!(Shape::LeftFold.build(&leaves, ops).is_some());
    }
}

#[test]
fn test_first_entry_is_plain_sum() {
    let base = BlockGenerator::default().generate();
    let first = base.entries().first();
    assert!(first.is_some_and(|n| n.text() == "9+1+7+8" && n.to_f64() == 25.0));
}

#[test]
fn test_base_set_is_deduplicated_and_exact() {
    let base = BlockGenerator::default().generate();
    assert!(!base.is_empty());
    assert!(base.len() <= 64 * 5);

    let keys: HashSet<_> = base.iter().map(Node::key).collect();
    assert_eq!(keys.len(), base.len());
    assert!(base.iter().all(|n| n.value().is_exact() && !n.is_from_unary()));
}

#[test]
fn test_base_set_contains_known_values() {
    let base = BlockGenerator::default().generate();
    assert!(base.iter().any(|n| n.to_f64() == 0.0));
    assert!(base.iter().any(|n| n.to_f64() == 504.0));
    // (9-1)*7+8 renders with the first value found for 64
    assert!(base.iter().any(|n| n.to_f64() == 64.0));
}

#[test]
fn test_base_set_text_matches_values() {
    let base = BlockGenerator::default().generate();
    for node in &base {
        let parsed = parse(node.text());
        assert!(parsed.is_ok(), "{:?}", parsed);
        if let Ok(ast) = parsed {
            assert!((ast.eval() - node.to_f64()).abs() < 1e-9, "{}", node);
        }
        assert_eq!(node.text().matches(char::is_numeric).count(), 4);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let first = BlockGenerator::default().generate();
    let second = BlockGenerator::default().generate();
    assert_eq!(first, second);
    let texts: Vec<_> = first.iter().map(|n| n.text().to_string()).collect();
    let again: Vec<_> = second.iter().map(|n| n.text().to_string()).collect();
    assert_eq!(texts, again);
}

#[test]
fn test_digits_parse_and_display() {
    let digits: Result<Digits, _> = "9178".parse();
    assert_eq!(digits, Ok(Digits::default()));
    assert_eq!(Digits::default().to_string(), "9178");
    assert!("917".parse::<Digits>().is_err());
    assert!("91a8".parse::<Digits>().is_err());
    assert!(Digits::new([1, 2, 3, 10]).is_err());
}
