use crate::error;
use crate::lang::Error;
use crate::mach::{normalize, Library, Listing};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;

const EXTENSION: &str = "BAS";

/// Programs kept as `<NAME>.BAS` text files, one program line per file line.
pub struct DiskLibrary {
    dir: PathBuf,
}

impl DiskLibrary {
    pub fn new<P: Into<PathBuf>>(dir: P) -> DiskLibrary {
        DiskLibrary { dir: dir.into() }
    }

    /// Names are plain file stems. Anything that could leave `dir` is refused.
    fn file_name(name: &str) -> Result<String, Error> {
        let name = normalize(name);
        let plain = !name.is_empty()
            && !name.contains("..")
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "_-. ".contains(c));
        if plain {
            Ok(format!("{}.{}", name, EXTENSION))
        } else {
            Err(error!(SyntaxError; "BAD FILE NAME"))
        }
    }

    fn path(&self, name: &str) -> Result<PathBuf, Error> {
        Ok(self.dir.join(DiskLibrary::file_name(name)?))
    }

    /// Finds an existing program file, matching the name without regard to case.
    fn find(&self, name: &str) -> Result<PathBuf, Error> {
        let path = self.path(name)?;
        if path.exists() {
            return Ok(path);
        }
        let wanted = DiskLibrary::file_name(name)?;
        for entry in fs::read_dir(&self.dir).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            if entry.file_name().to_string_lossy().eq_ignore_ascii_case(&wanted) {
                return Ok(entry.path());
            }
        }
        Err(error!(FileNotFound))
    }
}

fn io_error(error: std::io::Error) -> Error {
    match error.kind() {
        ErrorKind::NotFound => error!(FileNotFound),
        _ => error!(DiskNotMounted; &error.to_string()),
    }
}

impl Library for DiskLibrary {
    fn save(&mut self, name: &str, listing: &Listing) -> Result<(), Error> {
        let path = self.path(name)?;
        fs::create_dir_all(&self.dir).map_err(|e| error!(DiskNotMounted; &e.to_string()))?;
        let mut file = File::create(path).map_err(io_error)?;
        for line in listing.lines() {
            writeln!(file, "{}", line).map_err(io_error)?;
        }
        Ok(())
    }

    fn load(&mut self, name: &str) -> Result<Listing, Error> {
        let reader = BufReader::new(File::open(self.find(name)?).map_err(io_error)?);
        let mut listing = Listing::default();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(io_error)?;
            if let Err(error) = listing.load_str(&line) {
                return Err(error.message(&format!("(LINE {})", index + 1)));
            }
        }
        Ok(listing)
    }

    fn list(&mut self) -> Result<Vec<String>, Error> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(error) => return Err(io_error(error)),
        };
        let mut names = vec![];
        for entry in entries {
            let path = entry.map_err(io_error)?.path();
            let is_basic = path
                .extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case(EXTENSION));
            if let (true, Some(stem)) = (is_basic, path.file_stem()) {
                names.push(normalize(&stem.to_string_lossy()));
            }
        }
        names.sort();
        Ok(names)
    }
}
