use crate::error;
use crate::lang::{Error, Line, LineNumber, MAX_LINE_NUMBER};
use std::collections::{btree_map::Values, BTreeMap};
use std::ops::RangeInclusive;
use std::rc::Rc;

/// ## Program source
///
/// Sparse map of line number to source text. Iteration is always
/// in ascending line order. Cloning is cheap; the map is shared
/// until one of the clones is modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    source: Rc<BTreeMap<LineNumber, Line>>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source = Rc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Stores a numbered line. A line with no text deletes
    /// any line of the same number.
    pub fn insert(&mut self, line: Line) -> Option<Line> {
        let number = line.number()?;
        if line.is_empty() {
            return self.remove(number);
        }
        Rc::make_mut(&mut self.source).insert(number, line)
    }

    pub fn remove(&mut self, ln: LineNumber) -> Option<Line> {
        if !self.source.contains_key(&ln) {
            return None;
        }
        Rc::make_mut(&mut self.source).remove(&ln)
    }

    pub fn set_line(&mut self, ln: LineNumber, text: &str) -> Result<(), Error> {
        let line = Line::new(&format!("{} {}", ln, text))?;
        self.insert(line);
        Ok(())
    }

    pub fn get(&self, ln: LineNumber) -> Option<&Line> {
        self.source.get(&ln)
    }

    pub fn lines(&self) -> Values<'_, LineNumber, Line> {
        self.source.values()
    }

    pub fn sorted_lines(&self) -> Vec<LineNumber> {
        self.source.keys().copied().collect()
    }

    /// Lines selected by a LIST argument: empty for everything,
    /// `n` for one line, or `n-m` with either side optional.
    pub fn list(&self, args: &str) -> Result<Vec<String>, Error> {
        let range = Listing::parse_range(args)?;
        if range.start() > range.end() {
            return Ok(vec![]);
        }
        Ok(self
            .source
            .range(range)
            .map(|(_, line)| line.to_string())
            .collect())
    }

    fn parse_range(args: &str) -> Result<RangeInclusive<LineNumber>, Error> {
        fn bound(s: &str, default: LineNumber) -> Result<LineNumber, Error> {
            let s = s.trim();
            if s.is_empty() {
                return Ok(default);
            }
            if !s.chars().all(|c| c.is_ascii_digit()) {
                return Err(error!(SyntaxError));
            }
            Ok(s.parse::<u32>()
                .map(|n| n.min(MAX_LINE_NUMBER as u32) as LineNumber)
                .unwrap_or(MAX_LINE_NUMBER))
        }
        let args = args.trim();
        if args.is_empty() {
            return Ok(0..=MAX_LINE_NUMBER);
        }
        match args.find('-') {
            Some(i) => {
                let start = bound(&args[..i], 0)?;
                let end = bound(&args[i + 1..], MAX_LINE_NUMBER)?;
                Ok(start..=end)
            }
            None => {
                let n = bound(args, 0)?;
                Ok(n..=n)
            }
        }
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        let line = Line::new(line)?;
        if line.is_direct() {
            if line.is_empty() {
                return Ok(());
            }
            return Err(error!(SyntaxError; "DIRECT STATEMENT IN FILE"));
        }
        self.insert(line);
        Ok(())
    }
}
