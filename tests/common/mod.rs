use msx::mach::{Event, Runtime};

#[allow(dead_code)]
pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

#[allow(dead_code)]
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    exec_with(runtime, cycles, &[])
}

/// Pumps the runtime until it stops and returns everything it displayed.
/// Each INPUT prompt is answered from `answers`; when they run out
/// the transcript ends at the prompt.
pub fn exec_with(runtime: &mut Runtime, cycles: usize, answers: &[&str]) -> String {
    let mut answers = answers.iter();
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
                if prev_running && cycles >= 5000 {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&format!("{}\n", ps));
            }
            Event::Input(ps) => {
                s.push_str(ps);
                match answers.next() {
                    Some(answer) => {
                        s.push_str(&format!(" {}\n", answer));
                        runtime.enter(answer);
                    }
                    None => break,
                }
            }
            Event::Cls => {
                s.push_str("<CLS>\n");
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
