//! Location of a mismatch inside the candidate value.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// object key
    Key(String),
    /// array element or tuple position
    Index(usize),
}

/// Rendered `$`, `$.nested.field`, `$[1][0]`, `$.points[2].x`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    pub fn root() -> Self { Self::default() }
    pub fn segments(&self) -> &[Segment] { &self.0 }
    pub fn is_root(&self) -> bool { self.0.is_empty() }
    pub(crate) fn push(&mut self, segment: Segment) { self.0.push(segment); }
    pub(crate) fn pop(&mut self) { self.0.pop(); }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self { Self(segments) }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(ix) => write!(f, "[{ix}]")?,
            }
        }
        Ok(())
    }
}
