use std::fmt;

use chrono::Weekday::{self, Fri, Mon, Sat, Sun, Thu, Tue, Wed};

/// Sunday-first, matching the stored `0..=6` numbering.
const WEEKDAYS: [Weekday; 7] = [Sun, Mon, Tue, Wed, Thu, Fri, Sat];

/// Set of weekdays for weekly rules, kept as a 7-bit mask where bit 0 is Sunday.
///
/// Storage keeps the set as a comma-separated list such as `"1,3,5"`. Parsing is
/// lenient: rows written before validation existed may carry blanks or stray
/// values, and those tokens are dropped instead of failing the whole rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaysOfWeek(u8);

impl DaysOfWeek {
    pub const EMPTY: DaysOfWeek = DaysOfWeek(0);

    pub fn parse_lenient(s: &str) -> Self {
        s.split(',')
            .filter_map(|token| token.trim().parse::<u8>().ok())
            .filter_map(Self::weekday_from_index)
            .collect()
    }

    pub fn weekday_from_index(index: u8) -> Option<Weekday> {
        WEEKDAYS.get(usize::from(index)).copied()
    }

    pub fn with(mut self, weekday: Weekday) -> Self {
        self.insert(weekday);
        self
    }

    pub fn insert(&mut self, weekday: Weekday) {
        self.0 |= Self::bit(weekday);
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0 & Self::bit(weekday) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Weekdays in Sunday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> {
        let days = *self;
        WEEKDAYS
            .into_iter()
            .filter(move |weekday| days.contains(*weekday))
    }

    fn bit(weekday: Weekday) -> u8 {
        1 << weekday.num_days_from_sunday()
    }
}

impl FromIterator<Weekday> for DaysOfWeek {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DaysOfWeek::EMPTY, |days, weekday| days.with(weekday))
    }
}

impl From<&str> for DaysOfWeek {
    fn from(value: &str) -> Self {
        Self::parse_lenient(value)
    }
}

impl fmt::Display for DaysOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indexes = self
            .iter()
            .map(|weekday| weekday.num_days_from_sunday().to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", indexes.join(","))
    }
}
