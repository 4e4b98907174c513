//! `CalendarSystem` — the two civil calendar systems the library models.

/// A civil calendar system.
///
/// Every year value carries one of these tags, and calendars refuse to
/// operate on years tagged with the other system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSystem {
    /// The Julian calendar: every fourth year is a leap year.
    Julian,
    /// The Gregorian calendar: the Julian rule minus three leap years
    /// every four centuries.
    Gregorian,
}

impl CalendarSystem {
    /// Human-readable name (`"Julian"` / `"Gregorian"`).
    pub fn name(&self) -> &'static str {
        match self {
            CalendarSystem::Julian => "Julian",
            CalendarSystem::Gregorian => "Gregorian",
        }
    }
}

impl std::fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
