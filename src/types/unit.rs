/// One of the six supported time granularities, finest to coarsest.
///
/// Each unit carries exactly one ASCII tag character used in change tokens:
/// `s`, `m`, `h`, `d`, `M`, `y`. Tags are case-sensitive — lowercase `m` is
/// minute, uppercase `M` is month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    Second = 0,
    Minute = 1,
    Hour = 2,
    Day = 3,
    Month = 4,
    Year = 5,
}

impl Unit {
    /// All units in apply order: finest first.
    pub const ASCENDING: [Unit; 6] = [
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Month,
        Unit::Year,
    ];

    /// The single-character tag of this unit in the textual grammar.
    pub fn tag(self) -> char {
        match self {
            Unit::Second => 's',
            Unit::Minute => 'm',
            Unit::Hour => 'h',
            Unit::Day => 'd',
            Unit::Month => 'M',
            Unit::Year => 'y',
        }
    }

    /// Maps a tag character back to its unit. Case-sensitive.
    pub fn from_tag(tag: char) -> Option<Unit> {
        match tag {
            's' => Some(Unit::Second),
            'm' => Some(Unit::Minute),
            'h' => Some(Unit::Hour),
            'd' => Some(Unit::Day),
            'M' => Some(Unit::Month),
            'y' => Some(Unit::Year),
            _ => None,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Month => "month",
            Unit::Year => "year",
        };
        f.write_str(label)
    }
}

/// Set of units named (explicitly or by cascade) in a change token.
///
/// Backed by a bitmask indexed by `Unit` discriminant. The set is monotonic
/// downward: inserting a unit always inserts every finer unit with it, so a
/// coarse override also pins the finer fields below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitSet(u8);

impl UnitSet {
    pub const EMPTY: UnitSet = UnitSet(0);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, unit: Unit) -> bool {
        (self.0 >> unit as u8) & 1 == 1
    }

    /// Inserts `unit` and every finer unit below it (cascade-down rule).
    pub fn insert_through(&mut self, unit: Unit) {
        self.0 |= (1u8 << (unit as u8 + 1)) - 1;
    }
}
