//! `Country` — countries with a recorded Julian→Gregorian cutover.

/// A country whose civil-calendar history the library knows about.
///
/// Binding one of these to a [`GregorianCalendar`](crate::GregorianCalendar)
/// makes day counts honour the days removed from that country's civil
/// calendar when it adopted the Gregorian reform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// Italy — adopted the reform at its 1582 promulgation.
    Italy,
    /// Spain — adopted the reform at its 1582 promulgation.
    Spain,
    /// Portugal — adopted the reform at its 1582 promulgation.
    Portugal,
    /// Poland — adopted the reform at its 1582 promulgation.
    Poland,
    /// France — adopted in December 1582.
    France,
    /// Germany (Catholic regions, Augsburg cutover) — adopted in 1583.
    Germany,
    /// Great Britain and its colonies — adopted in September 1752.
    GreatBritain,
    /// Sweden — adopted in 1753 after the abandoned gradual transition.
    Sweden,
    /// Russia — adopted in 1918 under the Soviet decree.
    Russia,
    /// Greece — the last European adoption, in 1923.
    Greece,
}

impl Country {
    /// All countries in the adoption table, in table order.
    pub const ALL: [Country; 10] = [
        Country::Italy,
        Country::Spain,
        Country::Portugal,
        Country::Poland,
        Country::France,
        Country::Germany,
        Country::GreatBritain,
        Country::Sweden,
        Country::Russia,
        Country::Greece,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Country::Italy => "Italy",
            Country::Spain => "Spain",
            Country::Portugal => "Portugal",
            Country::Poland => "Poland",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::GreatBritain => "Great Britain",
            Country::Sweden => "Sweden",
            Country::Russia => "Russia",
            Country::Greece => "Greece",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
