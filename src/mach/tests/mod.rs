use crate::error;
use crate::mach::{Event, Halt, Runtime, State};


fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&format!("{}\n", ps));
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
            Event::Cls => {}
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}

#[test]
fn test_run_to_end_of_program() {
    let mut r = Runtime::default();
    r.enter("10 A=2");
    r.enter("20 PRINT A*3");
    r.enter("RUN");
    assert_eq!(run(&mut r), "6\n");
    assert_eq!(r.state(), State::Idle);
    assert_eq!(r.last_halt(), Some(Halt::NormalEnd));
}

#[test]
fn test_undefined_jump_target() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 500");
    r.enter("RUN");
    assert_eq!(run(&mut r), "?UNDEFINED LINE IN 10; 500\n");
    assert_eq!(r.last_halt(), Some(Halt::UndefinedLine));
}

#[test]
fn test_error_halts_run() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1/0");
    r.enter("20 PRINT \"NOT HERE\"");
    r.enter("RUN");
    assert_eq!(run(&mut r), "?DIVISION BY ZERO IN 10\n");
    assert_eq!(r.last_halt(), Some(Halt::Error));
}

#[test]
fn test_yields_between_lines() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 10");
    r.enter("RUN");
    assert_eq!(r.execute(3), Event::Running);
    assert_eq!(r.current_line(), Some(10));
    assert_eq!(r.state(), State::Running);
    r.enter("NEW");
    assert_eq!(r.execute(3), Event::Stopped);
}

#[test]
fn test_output_independent_of_slice() {
    let program = ["10 FOR I=1 TO 5", "20 PRINT I;I*I", "30 NEXT", "40 PRINT \"OK\""];
    let mut outputs = vec![];
    for cycles in &[1, 2, 7, 5000] {
        let mut r = Runtime::default();
        for line in &program {
            r.enter(line);
        }
        r.enter("RUN");
        outputs.push(run_cycles(&mut r, *cycles));
    }
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(outputs[0], "1 1\n2 4\n3 9\n4 16\n5 25\nOK\n");
}

#[test]
fn test_run_while_running() {
    let mut r = Runtime::default();
    r.enter("10 FOR I=1 TO 2");
    r.enter("20 GOSUB 40");
    r.enter("30 END");
    r.enter("40 GOTO 40");
    r.enter("RUN");
    assert_eq!(r.execute(3), Event::Running);
    let before = (r.current_line(), r.for_depth(), r.gosub_depth());
    assert_eq!(before, (Some(40), 1, 1));
    r.enter("RUN");
    assert_eq!(r.execute(1), Event::Error(error!(AlreadyRunning)));
    assert_eq!(r.state(), State::Running);
    assert_eq!((r.current_line(), r.for_depth(), r.gosub_depth()), before);
    assert_eq!(r.execute(1), Event::Running);
    assert_eq!(r.current_line(), Some(40));
}

#[test]
fn test_edit_while_running_keeps_snapshot() {
    let mut r = Runtime::default();
    r.enter("10 PRINT \"A\"");
    r.enter("20 PRINT \"B\"");
    r.enter("RUN");
    r.enter("20 PRINT \"C\"");
    assert_eq!(run(&mut r), "A\nB\n");
    r.enter("RUN");
    assert_eq!(run(&mut r), "A\nC\n");
}

#[test]
fn test_interrupt_stops_run() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 20");
    r.enter("20 GOTO 10");
    r.enter("RUN");
    assert_eq!(r.execute(5), Event::Running);
    r.interrupt();
    assert_eq!(run(&mut r), "BREAK IN 10\n");
    assert_eq!(r.state(), State::Idle);
}
