use std::fmt;

// ---------------------------------------------------------------------------
// BaseStats – the six base attributes
// ---------------------------------------------------------------------------

/// Base stats of one Pokemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    /// Build from `[hp, attack, defense, sp_attack, sp_defense, speed]`.
    pub const fn from_array(values: [u32; 6]) -> Self {
        let [hp, attack, defense, sp_attack, sp_defense, speed] = values;
        BaseStats {
            hp,
            attack,
            defense,
            sp_attack,
            sp_defense,
            speed,
        }
    }

    pub fn total(&self) -> u32 {
        self.hp + self.attack + self.defense + self.sp_attack + self.sp_defense + self.speed
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the catalog
// ---------------------------------------------------------------------------

/// One catalog entry.
///
/// Optional fields are `None` when absent; an empty string never stands in
/// for "no value". `total_stats` is fixed at construction and `stats` is
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    /// The form this one evolves from.
    pub prior_form: Option<String>,
    /// The form this one evolves into; `None` marks a final form.
    pub next_form: Option<String>,
    stats: BaseStats,
    total_stats: u32,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        primary_type: impl Into<String>,
        secondary_type: Option<&str>,
        prior_form: Option<&str>,
        next_form: Option<&str>,
        stats: BaseStats,
    ) -> Self {
        Record {
            name: name.into(),
            primary_type: primary_type.into(),
            secondary_type: non_empty(secondary_type),
            prior_form: non_empty(prior_form),
            next_form: non_empty(next_form),
            total_stats: stats.total(),
            stats,
        }
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    /// Sum of the six base stats.
    pub fn total_stats(&self) -> u32 {
        self.total_stats
    }

    /// A final form has nothing to evolve into.
    pub fn is_final_form(&self) -> bool {
        self.next_form.is_none()
    }

    /// Primary type followed by the secondary type, if any.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_type.as_str()).chain(self.secondary_type.as_deref())
    }

    /// True when either type is `ty`.
    pub fn has_type(&self, ty: &str) -> bool {
        self.types().any(|t| t == ty)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.secondary_type {
            Some(second) => write!(
                f,
                "{} ({}/{}) {}",
                self.name, self.primary_type, second, self.total_stats
            ),
            None => write!(f, "{} ({}) {}", self.name, self.primary_type, self.total_stats),
        }
    }
}
