use super::Listing;
use crate::error;
use crate::lang::Error;
use std::collections::BTreeMap;

/// ## Named program storage
///
/// Keeps whole program snapshots under case-insensitive names.
/// Implementations report a missing program as FILE NOT FOUND and
/// an unusable store as DISK NOT MOUNTED.
pub trait Library {
    fn save(&mut self, name: &str, listing: &Listing) -> Result<(), Error>;
    fn load(&mut self, name: &str) -> Result<Listing, Error>;
    fn list(&mut self) -> Result<Vec<String>, Error>;
}

/// Canonical form of a program name.
pub fn normalize(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}

/// Programs kept for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryLibrary {
    programs: BTreeMap<String, Listing>,
}

impl MemoryLibrary {
    pub fn new() -> MemoryLibrary {
        MemoryLibrary::default()
    }
}

impl Library for MemoryLibrary {
    fn save(&mut self, name: &str, listing: &Listing) -> Result<(), Error> {
        self.programs.insert(normalize(name), listing.clone());
        Ok(())
    }

    fn load(&mut self, name: &str) -> Result<Listing, Error> {
        match self.programs.get(&normalize(name)) {
            Some(listing) => Ok(listing.clone()),
            None => Err(error!(FileNotFound)),
        }
    }

    fn list(&mut self) -> Result<Vec<String>, Error> {
        Ok(self.programs.keys().cloned().collect())
    }
}

/// A store that is never available.
#[derive(Debug, Default)]
pub struct NoLibrary;

impl Library for NoLibrary {
    fn save(&mut self, _name: &str, _listing: &Listing) -> Result<(), Error> {
        Err(error!(DiskNotMounted))
    }

    fn load(&mut self, _name: &str) -> Result<Listing, Error> {
        Err(error!(DiskNotMounted))
    }

    fn list(&mut self) -> Result<Vec<String>, Error> {
        Err(error!(DiskNotMounted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_case_insensitive_names() {
        let mut lib = MemoryLibrary::new();
        let mut listing = Listing::default();
        listing.set_line(10, "PRINT 1").unwrap();
        lib.save("game", &listing).unwrap();
        assert_eq!(lib.load("GAME").unwrap(), listing);
        assert_eq!(lib.list().unwrap(), vec!["GAME".to_string()]);
    }

    #[test]
    fn test_failure_kinds() {
        let e = MemoryLibrary::new().load("NOPE").unwrap_err();
        assert!(e.is(ErrorCode::FileNotFound));
        let e = NoLibrary.load("NOPE").unwrap_err();
        assert!(e.is(ErrorCode::DiskNotMounted));
    }
}
