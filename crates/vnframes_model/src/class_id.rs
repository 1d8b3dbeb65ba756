//! Class id helpers.
//!
//! Class ids have the shape `name-n.n.n-s-s-s`: a class name, a dotted
//! numeric code, and optional subclass numbers, e.g. `give-13.1-1`.

use std::fmt;
use std::str::FromStr;

use vnframes_foundation::{Error, Result};

/// A parsed view over a class id string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId {
    raw: String,
    int_code: u32,
}

impl ClassId {
    /// Parses a class id.
    ///
    /// # Errors
    ///
    /// Returns an invalid class id error if there is no numeric code segment.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut segments = raw.split('-');
        let name = segments.next().unwrap_or_default();
        let code = segments.next().unwrap_or_default();
        if name.is_empty() {
            return Err(Error::invalid_class_id(raw));
        }
        let int_code = code
            .split('.')
            .next()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| Error::invalid_class_id(raw))?;
        Ok(Self {
            raw: raw.to_string(),
            int_code,
        })
    }

    /// Returns the full id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the class name, e.g. `give`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    /// Returns the numeric code, e.g. `13.1`.
    #[must_use]
    pub fn code(&self) -> &str {
        self.segments().nth(1).unwrap_or_default()
    }

    /// Returns the first two numeric components as a float, e.g. `13.1`.
    #[must_use]
    pub fn code_float(&self) -> f64 {
        let mut parts = self.code().split('.');
        let major = parts.next().unwrap_or("0");
        let minor = parts.next().unwrap_or("0");
        format!("{major}.{minor}")
            .parse()
            .unwrap_or(f64::from(self.int_code))
    }

    /// Returns the integer part of the numeric code, e.g. `13`.
    #[must_use]
    pub fn code_int(&self) -> u32 {
        self.int_code
    }

    /// Returns the first two dash segments joined, e.g. `give13.1`.
    #[must_use]
    pub fn toplevel_key(&self) -> String {
        self.segments().take(2).collect()
    }

    /// Returns the seven-level hierarchy tuple.
    ///
    /// Missing levels are filled with `0`: `give-13.1-1` yields
    /// `13, 13.1, 13.1.0, give, 1, 1-0, 1-0-0`. With `full_leaf`, the last
    /// element is the full id instead.
    #[must_use]
    pub fn hierarchy_tuple(&self, full_leaf: bool) -> [String; 7] {
        let code: Vec<&str> = self.code().split('.').collect();
        let c = |i: usize| code.get(i).copied().unwrap_or("0");
        let subclasses: Vec<&str> = self.segments().skip(2).collect();
        let s = |i: usize| subclasses.get(i).copied().unwrap_or("0");
        [
            c(0).to_string(),
            format!("{}.{}", c(0), c(1)),
            format!("{}.{}.{}", c(0), c(1), c(2)),
            self.name().to_string(),
            s(0).to_string(),
            format!("{}-{}", s(0), s(1)),
            if full_leaf {
                self.raw.clone()
            } else {
                format!("{}-{}-{}", s(0), s(1), s(2))
            },
        ]
    }

    fn segments(&self) -> std::str::Split<'_, char> {
        self.raw.split('-')
    }
}

impl FromStr for ClassId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Returns the class id of a `verb#class-id` member key.
#[must_use]
pub fn class_of_member(member: &str) -> Option<&str> {
    member.split_once('#').map(|(_, class)| class)
}
