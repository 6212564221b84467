mod common;
use common::*;
use msx::mach::{Event, Runtime};

#[test]
fn test_input_program() {
    let mut r = Runtime::default();
    r.enter("10 INPUT \"NAME\";N$");
    r.enter("20 INPUT \"AGE\";A");
    r.enter("30 PRINT N$;A+1");
    r.enter("RUN");
    assert_eq!(
        exec_with(&mut r, 20, &["ADA", "36"]),
        "NAME ADA\nAGE 36\nADA 37\n"
    );
}

#[test]
fn test_input_prompt_event() {
    let mut r = Runtime::default();
    r.enter("INPUT X");
    assert_eq!(r.execute(20), Event::Input("?".to_string()));
    assert_eq!(r.execute(20), Event::Input("?".to_string()));
    r.enter("5");
    assert_eq!(r.execute(20), Event::Stopped);
    r.enter("?X");
    assert_eq!(exec(&mut r), "5\n");
}

#[test]
fn test_input_mismatch() {
    let mut r = Runtime::default();
    r.enter("10 INPUT A");
    r.enter("20 PRINT A");
    r.enter("RUN");
    assert_eq!(exec_with(&mut r, 20, &["TEN"]), "? TEN\n?TYPE MISMATCH IN 10\n");
}

#[test]
fn test_input_cancelled() {
    let mut r = Runtime::default();
    r.enter("10 INPUT A$");
    r.enter("20 PRINT \"<\"+A$+\">\"");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "?");
    r.cancel_input();
    assert_eq!(exec(&mut r), "<>\n");
}
