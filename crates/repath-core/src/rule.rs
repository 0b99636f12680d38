use regex::{NoExpand, Regex};
use std::borrow::Cow;

pub const SOURCE_PREFIX: &str = "\"github.com/biogo/hts";
pub const TARGET_PREFIX: &str = "\"github.com/grailbio/hts";

/// A fixed literal substitution applied one line at a time.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    target: String,
}

impl Rule {
    /// The source string is matched literally, so regex metacharacters
    /// in it carry no meaning.
    pub fn new(source: &str, target: &str) -> Self {
        let pattern = Regex::new(&regex::escape(source)).unwrap();
        Self {
            pattern,
            target: target.to_string(),
        }
    }

    /// The import rewrite this tool exists for: quoted biogo/hts path
    /// prefixes become their grailbio/hts counterparts.
    pub fn hts_imports() -> Self {
        Self::new(SOURCE_PREFIX, TARGET_PREFIX)
    }

    /// Replaces every non-overlapping occurrence within the line.
    /// Borrows the input unchanged when nothing matched.
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(line, NoExpand(&self.target))
    }
}
