use crate::parser::{Phase, QueryComparers};

/// Character cursor over a single query line.
///
/// The whole input is ASCII-lowercased up front so clause keywords, aggregate
/// names and connectors match case-insensitively. This also lower-cases user
/// field names and literal values; that is a documented limitation of the
/// query dialect, not an accident (restriction values get their first letter
/// re-capitalized, see `Restriction`).
#[derive(Debug, Default)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub text: String,
    pub phase: Phase,

    pub comparers: QueryComparers,
}

impl QueryParser {
    pub fn new(query: &str) -> Self {
        let text = query.to_ascii_lowercase();
        let text_v: Vec<char> = text.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            text,
            comparers: QueryComparers::new(),
            ..Default::default()
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        if self.position < self.length {
            return self.text_v[self.position];
        }

        '\0'
    }

    pub fn next(&mut self) {
        self.position += 1;
    }

    pub fn next_non_whitespace(&mut self) {
        while self.current().is_whitespace() {
            self.next();
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    /// Skips whitespace, then moves to the phase of whichever clause keyword
    /// sits at the cursor. Returns true when the phase changed (or the input
    /// ended); false means the current clause has more content.
    ///
    /// Phases only move forward, so a keyword belonging to an earlier phase
    /// is left in place for the current clause parser to choke on.
    pub fn check_next_phase(&mut self) -> bool {
        self.next_non_whitespace();

        if self.eof() {
            self.phase = Phase::EOF;
            return true;
        }

        if self.phase < Phase::OrderBy && self.comparers.order_by.compare(self) {
            self.phase = Phase::OrderBy;
            return true;
        }

        if self.phase < Phase::GroupBy && self.comparers.group_by.compare(self) {
            self.phase = Phase::GroupBy;
            return true;
        }

        if self.phase < Phase::Criteria && self.comparers.r#where.compare(self) {
            self.phase = Phase::Criteria;
            return true;
        }

        false
    }
}
