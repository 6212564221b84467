mod common;
use common::*;
use msx::mach::{evaluate, Runtime, Val, Var};

#[test]
fn test_precedence() {
    let mut r = Runtime::default();
    r.enter("?1+2*3");
    assert_eq!(exec(&mut r), "7\n");
    r.enter("?(1+2)*3");
    assert_eq!(exec(&mut r), "9\n");
}

#[test]
fn test_left_assoc() {
    let mut r = Runtime::default();
    r.enter("?1.5/2*3");
    assert_eq!(exec(&mut r), "2.25\n");
    r.enter("?8-3-2");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_unary_minus() {
    let mut r = Runtime::default();
    r.enter("?-2*-3");
    assert_eq!(exec(&mut r), "6\n");
    r.enter("?--1");
    assert_eq!(exec(&mut r), "1\n");
    r.enter("?2-(-1)");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_comparison_results() {
    let mut r = Runtime::default();
    r.enter("?1<2;1>2;2=2;2<>2");
    assert_eq!(exec(&mut r), "-1 0 -1 0\n");
    r.enter("?1+1=2");
    assert_eq!(exec(&mut r), "-1\n");
}

#[test]
fn test_string_operations() {
    let mut r = Runtime::default();
    r.enter("?\"A\"+1");
    assert_eq!(exec(&mut r), "A1\n");
    r.enter("?\"ABC\"<\"ABD\"");
    assert_eq!(exec(&mut r), "-1\n");
    r.enter("?\"10\"*2");
    assert_eq!(exec(&mut r), "20\n");
    r.enter("?\"X\"*2");
    assert_eq!(exec(&mut r), "0\n");
}

#[test]
fn test_unset_variables() {
    let mut r = Runtime::default();
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "0\n");
    r.enter("PRINT \"[\"+X$+\"]\"");
    assert_eq!(exec(&mut r), "[]\n");
}

#[test]
fn test_division_by_zero() {
    let mut r = Runtime::default();
    r.enter("?1/0");
    assert_eq!(exec(&mut r), "?DIVISION BY ZERO\n");
}

#[test]
fn test_mismatched_parentheses() {
    let mut r = Runtime::default();
    r.enter("?(1+2");
    assert_eq!(exec(&mut r), "?MISMATCHED PARENTHESES\n");
    r.enter("?1+2)");
    assert_eq!(exec(&mut r), "?MISMATCHED PARENTHESES\n");
}

#[test]
fn test_missing_operand() {
    let mut r = Runtime::default();
    r.enter("?1+");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n");
}

#[test]
fn test_unterminated_string() {
    let mut r = Runtime::default();
    r.enter("?\"OPEN");
    assert_eq!(exec(&mut r), "?UNTERMINATED STRING\n");
}

#[test]
fn test_number_display() {
    let vars = Var::new();
    let show = |s: &str| evaluate(s, &vars).unwrap().to_string();
    assert_eq!(show("0.1+0.2"), "0.30000000000000004");
    assert_eq!(show("1/3*3"), "1");
    assert_eq!(show("1000000*1000000*1000000*1000"), "1e+21");
    assert_eq!(show("-0"), "0");
}

#[test]
fn test_blank_expression() {
    let vars = Var::new();
    assert_eq!(evaluate("   ", &vars).unwrap(), Val::Number(0.0));
}
