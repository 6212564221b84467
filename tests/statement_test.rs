mod common;
use common::*;
use msx::mach::{Halt, Runtime, State};

#[test]
fn test_for_next_counts() {
    let mut r = Runtime::default();
    r.enter("10 FOR I=1 TO 3");
    r.enter("20 PRINT I");
    r.enter("30 NEXT I");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n2\n3\n");
    assert_eq!(r.last_halt(), Some(Halt::NormalEnd));
}

#[test]
fn test_for_loop_assign_step_after_var() {
    let mut r = Runtime::default();
    r.enter("10 I=1");
    r.enter("20 FOR I=3 TO 9 STEP I");
    r.enter("30 PRINT I;");
    r.enter("40 NEXT");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "3 \n4 \n5 \n6 \n7 \n8 \n9 \n");
}

#[test]
fn test_gosub_return() {
    let mut r = Runtime::default();
    r.enter("10 GOSUB 100");
    r.enter("20 PRINT \"DONE\"");
    r.enter("30 END");
    r.enter("100 PRINT \"SUB\"");
    r.enter("110 RETURN");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "SUB\nDONE\n");
}

#[test]
fn test_let_keyword_optional() {
    let mut r = Runtime::default();
    r.enter("LET A=1");
    r.enter("B = A+1");
    r.enter("let c$=\"X\"");
    r.enter("PRINT A;B;C$");
    assert_eq!(exec(&mut r), "1 2 X\n");
}

#[test]
fn test_let_type_mismatch_keeps_value() {
    let mut r = Runtime::default();
    r.enter("A=5");
    r.enter("A=\"HELLO\"");
    r.enter("PRINT A");
    assert_eq!(exec(&mut r), "?TYPE MISMATCH\n5\n");
    r.enter("A=\"42\"");
    r.enter("PRINT A+1");
    assert_eq!(exec(&mut r), "43\n");
}

#[test]
fn test_string_variable_takes_text() {
    let mut r = Runtime::default();
    r.enter("A$=12");
    r.enter("PRINT A$+\"!\"");
    assert_eq!(exec(&mut r), "12!\n");
}

#[test]
fn test_print_separators() {
    let mut r = Runtime::default();
    r.enter("PRINT \"A;B\",\"C,D\";1");
    assert_eq!(exec(&mut r), "A;B C,D 1\n");
    r.enter("PRINT");
    assert_eq!(exec(&mut r), "\n");
}

#[test]
fn test_rem_and_end() {
    let mut r = Runtime::default();
    r.enter("10 REM PRINT \"NOT PRINTED\"");
    r.enter("20 PRINT 1");
    r.enter("30 STOP");
    r.enter("40 PRINT 2");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_illegal_direct() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    for s in &["GOTO 10", "GOSUB 10", "RETURN", "FOR I=1 TO 2", "NEXT"] {
        r.enter(s);
        assert_eq!(exec(&mut r), "?ILLEGAL DIRECT\n");
    }
    r.enter("IF 1 THEN 10");
    assert_eq!(exec(&mut r), "?ILLEGAL DIRECT\n");
    assert_eq!(r.state(), State::Idle);
}

#[test]
fn test_unknown_statement() {
    let mut r = Runtime::default();
    r.enter("PAINT \"X\"");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n");
    r.enter("10 PAINT \"X\"");
    r.enter("20 PRINT \"NOT HERE\"");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR IN 10\n");
    assert_eq!(r.last_halt(), Some(Halt::Error));
}

#[test]
fn test_goto_undefined_line() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 500");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "?UNDEFINED LINE IN 10; 500\n");
    assert_eq!(r.last_halt(), Some(Halt::UndefinedLine));
}

#[test]
fn test_cls() {
    let mut r = Runtime::default();
    r.enter("10 CLS");
    r.enter("20 PRINT 1");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "<CLS>\n1\n");
    r.enter("CLS");
    assert_eq!(exec(&mut r), "<CLS>\n");
}

#[test]
fn test_gosub_recursion_runs_out_of_memory() {
    let mut r = Runtime::default();
    r.enter("10 GOSUB 10");
    r.enter("RUN");
    let out = exec_n(&mut r, 100_000);
    assert_eq!(out, "?OUT OF MEMORY IN 10; GOSUB NESTED TOO DEEPLY\n");
    assert_eq!(r.gosub_depth(), 0);
}

#[test]
fn test_slice_size_does_not_change_output() {
    let program = [
        "10 FOR I=1 TO 4",
        "20 GOSUB 100",
        "30 NEXT",
        "40 END",
        "100 IF I=2 THEN PRINT \"TWO\"",
        "110 PRINT I*10",
        "120 RETURN",
    ];
    let mut outputs = vec![];
    for cycles in &[1, 3, 20, 5000] {
        let mut r = Runtime::default();
        for line in &program {
            r.enter(line);
        }
        r.enter("RUN");
        outputs.push(exec_n(&mut r, *cycles));
    }
    assert_eq!(outputs[0], "10\nTWO\n20\n30\n40\n");
    assert!(outputs.iter().all(|o| *o == outputs[0]));
}
