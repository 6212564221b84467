use super::command::command;
use super::statement::{handler, is_assignment, split_word, Control};
use super::{ForFrame, GosubFrame, Library, Listing, MemoryLibrary, Stack, Val, Var};
use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Program lines executed per `execute` call by a host that
/// has no better idea. Yielding this often keeps the host responsive.
pub const YIELD_INTERVAL: usize = 20;

/// ## Events for the host
///
/// `execute` returns one of these per call. Output events come out
/// in the order the program produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Idle. The host should `enter` a line.
    Stopped,
    /// A program is running. Call `execute` again.
    Running,
    /// One line of output.
    Print(String),
    /// A diagnostic.
    Error(Error),
    /// Prompt for one line of text. Answer with `enter` or `cancel_input`.
    Input(String),
    /// Clear the display.
    Cls,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum State {
    Idle,
    Running,
}

/// Why the last run stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Halt {
    NormalEnd,
    Error,
    UndefinedLine,
}

/// Program order captured when RUN starts.
struct Run {
    listing: Listing,
    order: Vec<LineNumber>,
    index: HashMap<LineNumber, usize>,
    pc: usize,
}

impl Run {
    fn new(listing: Listing) -> Run {
        let order = listing.sorted_lines();
        let index = order.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        Run {
            listing,
            order,
            index,
            pc: 0,
        }
    }
}

struct InputRequest {
    prompt: String,
    var: Rc<str>,
}

/// ## The interpreter
///
/// Owns the program, the variables, and the control-flow stacks.
/// The host drives it with `enter` and `execute`.
pub struct Runtime {
    pub(super) listing: Listing,
    pub(super) vars: Var,
    pub(super) for_stack: Stack<ForFrame>,
    pub(super) gosub_stack: Stack<GosubFrame>,
    pub(super) library: Box<dyn Library>,
    pub(super) current: Option<LineNumber>,
    pub(super) depth: usize,
    run: Option<Run>,
    events: VecDeque<Event>,
    input: Option<InputRequest>,
    halted: Option<Halt>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Box::new(MemoryLibrary::new()))
    }
}

impl Runtime {
    pub fn new(library: Box<dyn Library>) -> Runtime {
        Runtime {
            listing: Listing::default(),
            vars: Var::new(),
            for_stack: Stack::new("FOR NESTED TOO DEEPLY"),
            gosub_stack: Stack::new("GOSUB NESTED TOO DEEPLY"),
            library,
            current: None,
            depth: 0,
            run: None,
            events: VecDeque::new(),
            input: None,
            halted: None,
        }
    }

    pub fn state(&self) -> State {
        if self.run.is_some() {
            State::Running
        } else {
            State::Idle
        }
    }

    /// Reason the most recent run halted, if any run has.
    pub fn last_halt(&self) -> Option<Halt> {
        self.halted
    }

    pub fn current_line(&self) -> Option<LineNumber> {
        self.current
    }

    pub fn is_awaiting_input(&self) -> bool {
        self.input.is_some()
    }

    pub fn for_depth(&self) -> usize {
        self.for_stack.len()
    }

    pub fn gosub_depth(&self) -> usize {
        self.gosub_stack.len()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Submits one line of user text.
    pub fn enter(&mut self, s: &str) {
        if let Some(request) = self.input.take() {
            self.answer(request, s);
            return;
        }
        let line = match Line::new(s) {
            Ok(line) => line,
            Err(error) => return self.report(error),
        };
        if line.is_direct() {
            if !line.is_empty() {
                self.direct(&line.text().clone());
            }
        } else {
            self.listing.insert(line);
        }
    }

    /// Answers a pending INPUT as cancelled, which reads as empty text.
    pub fn cancel_input(&mut self) {
        if let Some(request) = self.input.take() {
            self.answer(request, "");
        }
    }

    /// Ctrl-C from the host. Stops a running program where it is.
    pub fn interrupt(&mut self) {
        self.input = None;
        if self.run.is_some() {
            match self.current {
                Some(line) => self.print(&format!("BREAK IN {}", line)),
                None => self.print("BREAK"),
            }
            self.halt(Halt::NormalEnd);
        }
    }

    /// Advances by at most `cycles` program lines.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        if let Some(request) = &self.input {
            return Event::Input(request.prompt.clone());
        }
        if self.run.is_none() {
            return Event::Stopped;
        }
        for _ in 0..cycles {
            self.step();
            if self.run.is_none() || self.input.is_some() || !self.events.is_empty() {
                return self.execute(0);
            }
        }
        Event::Running
    }

    fn step(&mut self) {
        let next = match &self.run {
            Some(run) => run.order.get(run.pc).and_then(|n| {
                let line = run.listing.get(*n)?;
                Some((*n, line.text().clone()))
            }),
            None => return,
        };
        let (line_number, text) = match next {
            Some(next) => next,
            None => return self.halt(Halt::NormalEnd),
        };
        self.current = Some(line_number);
        match self.statement(&text, false) {
            Control::Continue => {
                if let Some(run) = &mut self.run {
                    run.pc += 1;
                }
            }
            Control::Jump(target) => {
                let pc = match &self.run {
                    Some(run) => run.index.get(&target).copied(),
                    None => return,
                };
                match pc {
                    Some(pc) => {
                        if let Some(run) = &mut self.run {
                            run.pc = pc;
                        }
                    }
                    None => {
                        self.report(error!(UndefinedLine, line_number; &target.to_string()));
                        self.halt(Halt::UndefinedLine);
                    }
                }
            }
            Control::End => self.halt(Halt::NormalEnd),
            Control::Error => self.halt(Halt::Error),
        }
    }

    fn halt(&mut self, reason: Halt) {
        self.run = None;
        self.current = None;
        self.for_stack.clear();
        self.gosub_stack.clear();
        self.halted = Some(reason);
    }

    /// Starts the stored program at its first line or at `start`.
    pub(super) fn run(&mut self, start: Option<LineNumber>) -> Result<()> {
        if self.run.is_some() {
            return Err(error!(AlreadyRunning));
        }
        if self.listing.is_empty() {
            self.print("NO PROGRAM");
            return Ok(());
        }
        let mut run = Run::new(self.listing.clone());
        if let Some(start) = start {
            match run.index.get(&start) {
                Some(pc) => run.pc = *pc,
                None => return Err(error!(UndefinedLine; &start.to_string())),
            }
        }
        self.for_stack.clear();
        self.gosub_stack.clear();
        self.halted = None;
        self.run = Some(run);
        Ok(())
    }

    pub(super) fn new_program(&mut self) {
        if self.run.is_some() {
            self.halt(Halt::NormalEnd);
        }
        self.listing.clear();
        self.vars.clear();
        self.for_stack.clear();
        self.gosub_stack.clear();
    }

    /// The line after `line` in the order of the running program.
    pub(super) fn line_after(&self, line: LineNumber) -> Option<LineNumber> {
        let run = self.run.as_ref()?;
        let pc = run.index.get(&line)?;
        run.order.get(pc + 1).copied()
    }

    /// Console output. Text with line breaks becomes several lines.
    pub(super) fn print(&mut self, text: &str) {
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.events.push_back(Event::Print(line.to_string()));
        }
    }

    pub(super) fn cls(&mut self) {
        self.events.push_back(Event::Cls);
    }

    pub(super) fn request_input(&mut self, prompt: &str, var: &str) {
        self.input = Some(InputRequest {
            prompt: prompt.to_string(),
            var: var.to_ascii_uppercase().into(),
        });
    }

    fn report(&mut self, error: Error) {
        let error = match self.current {
            Some(line) if self.run.is_some() => error.in_line_number(line),
            _ => error,
        };
        self.events.push_back(Event::Error(error));
    }

    fn answer(&mut self, request: InputRequest, text: &str) {
        if let Err(error) = self.vars.store(&request.var, Val::String(text.into())) {
            self.report(error);
            if self.run.is_some() {
                self.halt(Halt::Error);
            }
        }
    }

    fn direct(&mut self, text: &str) {
        let (word, args) = split_word(text);
        if !is_assignment(text) {
            if let Some(command) = command(&word.to_ascii_uppercase()) {
                if let Err(error) = command(self, args) {
                    self.events.push_back(Event::Error(error));
                }
                return;
            }
        }
        let saved = self.current.take();
        if let Control::Jump(_) = self.statement(text, true) {
            self.events.push_back(Event::Error(error!(IllegalDirect)));
        }
        if self.run.is_some() {
            self.current = saved;
        }
    }

    /// Runs one statement, reporting any error it raises.
    pub(super) fn statement(&mut self, text: &str, direct: bool) -> Control {
        match self.dispatch(text, direct) {
            Ok(control) => control,
            Err(error) => {
                self.report(error);
                Control::Error
            }
        }
    }

    pub(super) fn dispatch(&mut self, text: &str, direct: bool) -> Result<Control> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Control::Continue);
        }
        if is_assignment(text) {
            return handler("LET").map_or(Err(error!(SyntaxError)), |h| h(self, text, direct));
        }
        let (word, args) = split_word(text);
        match handler(&word.to_ascii_uppercase()) {
            Some(h) => h(self, args, direct),
            None => Err(error!(SyntaxError)),
        }
    }
}
