use std::collections::BTreeSet;
use std::sync::OnceLock;

use super::filter::distinct_categories;
use super::model::{BaseStats, Record};

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// name, type 1, type 2, previous evolution, next evolution,
/// [hp, attack, defense, sp. attack, sp. defense, speed]
type SeedRow = (
    &'static str,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
    [u32; 6],
);

/// Pokemon available in Ultra Sun, a sample from generations 1 to 7.
#[rustfmt::skip]
const SEED: &[SeedRow] = &[
    ("Bulbasaur", "Grass", Some("Poison"), None, Some("Ivysaur"), [45, 49, 49, 65, 65, 45]),
    ("Ivysaur", "Grass", Some("Poison"), Some("Bulbasaur"), Some("Venusaur"), [60, 62, 63, 80, 80, 60]),
    ("Venusaur", "Grass", Some("Poison"), Some("Ivysaur"), None, [80, 82, 83, 100, 100, 80]),
    ("Charmander", "Fire", None, None, Some("Charmeleon"), [39, 52, 43, 60, 50, 65]),
    ("Charmeleon", "Fire", None, Some("Charmander"), Some("Charizard"), [58, 64, 58, 80, 65, 80]),
    ("Charizard", "Fire", Some("Flying"), Some("Charmeleon"), None, [78, 84, 78, 109, 85, 100]),
    ("Squirtle", "Water", None, None, Some("Wartortle"), [44, 48, 65, 50, 64, 43]),
    ("Wartortle", "Water", None, Some("Squirtle"), Some("Blastoise"), [59, 63, 80, 65, 80, 58]),
    ("Blastoise", "Water", None, Some("Wartortle"), None, [79, 83, 100, 85, 105, 78]),
    ("Pikachu", "Electric", None, Some("Pichu"), Some("Raichu"), [35, 55, 40, 50, 50, 90]),
    ("Raichu", "Electric", None, Some("Pikachu"), None, [60, 90, 55, 90, 80, 110]),
    ("Meowth", "Normal", None, None, Some("Persian"), [40, 45, 35, 40, 40, 90]),
    ("Persian", "Normal", None, Some("Meowth"), None, [65, 70, 60, 65, 65, 115]),
    ("Psyduck", "Water", None, None, Some("Golduck"), [50, 52, 48, 65, 50, 55]),
    ("Golduck", "Water", None, Some("Psyduck"), None, [80, 82, 78, 95, 80, 85]),
    ("Machop", "Fighting", None, None, Some("Machoke"), [70, 80, 50, 35, 35, 35]),
    ("Machoke", "Fighting", None, Some("Machop"), Some("Machamp"), [80, 100, 70, 50, 60, 45]),
    ("Machamp", "Fighting", None, Some("Machoke"), None, [90, 130, 80, 65, 85, 55]),
    ("Geodude", "Rock", Some("Ground"), None, Some("Graveler"), [40, 80, 100, 30, 30, 20]),
    ("Graveler", "Rock", Some("Ground"), Some("Geodude"), Some("Golem"), [55, 95, 115, 45, 45, 35]),
    ("Golem", "Rock", Some("Ground"), Some("Graveler"), None, [80, 120, 130, 55, 65, 45]),
    ("Gastly", "Ghost", Some("Poison"), None, Some("Haunter"), [30, 35, 30, 100, 35, 80]),
    ("Haunter", "Ghost", Some("Poison"), Some("Gastly"), Some("Gengar"), [45, 50, 45, 115, 55, 95]),
    ("Gengar", "Ghost", Some("Poison"), Some("Haunter"), None, [60, 65, 60, 130, 75, 110]),
    ("Magikarp", "Water", None, None, Some("Gyarados"), [20, 10, 55, 15, 20, 80]),
    ("Gyarados", "Water", Some("Flying"), Some("Magikarp"), None, [95, 125, 79, 60, 100, 81]),
    ("Eevee", "Normal", None, None, Some("Vaporeon"), [55, 55, 50, 45, 65, 55]),
    ("Vaporeon", "Water", None, Some("Eevee"), None, [130, 65, 60, 110, 95, 65]),
    ("Jolteon", "Electric", None, Some("Eevee"), None, [65, 65, 60, 110, 95, 130]),
    ("Flareon", "Fire", None, Some("Eevee"), None, [65, 130, 60, 95, 110, 65]),
    ("Dratini", "Dragon", None, None, Some("Dragonair"), [41, 64, 45, 50, 50, 50]),
    ("Dragonair", "Dragon", None, Some("Dratini"), Some("Dragonite"), [61, 84, 65, 70, 70, 70]),
    ("Dragonite", "Dragon", Some("Flying"), Some("Dragonair"), None, [91, 134, 95, 100, 100, 80]),
    ("Mewtwo", "Psychic", None, None, None, [106, 110, 90, 154, 90, 130]),
    ("Mew", "Psychic", None, None, None, [100, 100, 100, 100, 100, 100]),
    ("Chikorita", "Grass", None, None, Some("Bayleef"), [45, 49, 65, 49, 65, 45]),
    ("Bayleef", "Grass", None, Some("Chikorita"), Some("Meganium"), [60, 62, 80, 63, 80, 60]),
    ("Meganium", "Grass", None, Some("Bayleef"), None, [80, 82, 100, 83, 100, 80]),
    ("Cyndaquil", "Fire", None, None, Some("Quilava"), [39, 52, 43, 60, 50, 65]),
    ("Quilava", "Fire", None, Some("Cyndaquil"), Some("Typhlosion"), [58, 64, 58, 80, 65, 80]),
    ("Typhlosion", "Fire", None, Some("Quilava"), None, [78, 84, 78, 109, 85, 100]),
    ("Totodile", "Water", None, None, Some("Croconaw"), [50, 65, 64, 44, 48, 43]),
    ("Croconaw", "Water", None, Some("Totodile"), Some("Feraligatr"), [65, 80, 80, 59, 63, 58]),
    ("Feraligatr", "Water", None, Some("Croconaw"), None, [85, 105, 100, 79, 83, 78]),
    ("Pichu", "Electric", None, None, Some("Pikachu"), [20, 40, 15, 35, 35, 60]),
    ("Togepi", "Fairy", None, None, Some("Togetic"), [35, 20, 65, 40, 65, 20]),
    ("Togetic", "Fairy", Some("Flying"), Some("Togepi"), Some("Togekiss"), [55, 40, 85, 80, 105, 40]),
    ("Mareep", "Electric", None, None, Some("Flaaffy"), [55, 40, 40, 65, 45, 35]),
    ("Flaaffy", "Electric", None, Some("Mareep"), Some("Ampharos"), [70, 55, 55, 80, 60, 45]),
    ("Ampharos", "Electric", None, Some("Flaaffy"), None, [90, 75, 85, 115, 90, 55]),
    ("Espeon", "Psychic", None, Some("Eevee"), None, [65, 65, 60, 130, 95, 110]),
    ("Umbreon", "Dark", None, Some("Eevee"), None, [95, 65, 110, 60, 130, 65]),
    ("Tyranitar", "Rock", Some("Dark"), Some("Pupitar"), None, [100, 134, 110, 95, 100, 61]),
    ("Lugia", "Psychic", Some("Flying"), None, None, [106, 90, 130, 90, 154, 110]),
    ("Ho Oh", "Fire", Some("Flying"), None, None, [106, 130, 90, 110, 154, 90]),
    ("Treecko", "Grass", None, None, Some("Grovyle"), [40, 45, 35, 65, 55, 70]),
    ("Grovyle", "Grass", None, Some("Treecko"), Some("Sceptile"), [50, 65, 45, 85, 65, 95]),
    ("Sceptile", "Grass", None, Some("Grovyle"), None, [70, 85, 65, 105, 85, 120]),
    ("Torchic", "Fire", None, None, Some("Combusken"), [45, 60, 40, 70, 50, 45]),
    ("Combusken", "Fire", Some("Fighting"), Some("Torchic"), Some("Blaziken"), [60, 85, 60, 85, 60, 55]),
    ("Blaziken", "Fire", Some("Fighting"), Some("Combusken"), None, [80, 120, 70, 110, 70, 80]),
    ("Mudkip", "Water", None, None, Some("Marshtomp"), [50, 70, 50, 50, 50, 40]),
    ("Marshtomp", "Water", Some("Ground"), Some("Mudkip"), Some("Swampert"), [70, 85, 70, 60, 70, 50]),
    ("Swampert", "Water", Some("Ground"), Some("Marshtomp"), None, [100, 110, 90, 85, 90, 60]),
    ("Ralts", "Psychic", Some("Fairy"), None, Some("Kirlia"), [28, 25, 25, 45, 35, 40]),
    ("Kirlia", "Psychic", Some("Fairy"), Some("Ralts"), Some("Gardevoir"), [38, 35, 35, 65, 55, 50]),
    ("Gardevoir", "Psychic", Some("Fairy"), Some("Kirlia"), None, [68, 65, 65, 125, 115, 80]),
    ("Aggron", "Steel", Some("Rock"), Some("Lairon"), None, [70, 110, 180, 60, 60, 50]),
    ("Flygon", "Ground", Some("Dragon"), Some("Vibrava"), None, [80, 100, 80, 80, 80, 100]),
    ("Metagross", "Steel", Some("Psychic"), Some("Metang"), None, [80, 135, 130, 95, 90, 70]),
    ("Rayquaza", "Dragon", Some("Flying"), None, None, [105, 150, 90, 150, 90, 95]),
    ("Kyogre", "Water", None, None, None, [100, 100, 90, 150, 140, 90]),
    ("Groudon", "Ground", None, None, None, [100, 150, 140, 100, 90, 90]),
    ("Turtwig", "Grass", None, None, Some("Grotle"), [55, 68, 64, 45, 55, 31]),
    ("Grotle", "Grass", None, Some("Turtwig"), Some("Torterra"), [75, 89, 85, 55, 65, 36]),
    ("Torterra", "Grass", Some("Ground"), Some("Grotle"), None, [95, 109, 105, 75, 85, 56]),
    ("Chimchar", "Fire", None, None, Some("Monferno"), [44, 58, 44, 58, 44, 61]),
    ("Monferno", "Fire", Some("Fighting"), Some("Chimchar"), Some("Infernape"), [64, 78, 52, 78, 52, 81]),
    ("Infernape", "Fire", Some("Fighting"), Some("Monferno"), None, [76, 104, 71, 104, 71, 108]),
    ("Piplup", "Water", None, None, Some("Prinplup"), [53, 51, 53, 61, 56, 40]),
    ("Prinplup", "Water", None, Some("Piplup"), Some("Empoleon"), [64, 66, 68, 81, 76, 50]),
    ("Empoleon", "Water", Some("Steel"), Some("Prinplup"), None, [84, 86, 88, 111, 101, 60]),
    ("Luxray", "Electric", None, Some("Luxio"), None, [80, 120, 79, 95, 79, 70]),
    ("Garchomp", "Dragon", Some("Ground"), Some("Gabite"), None, [108, 130, 95, 80, 85, 102]),
    ("Lucario", "Fighting", Some("Steel"), Some("Riolu"), None, [70, 110, 70, 115, 70, 90]),
    ("Leafeon", "Grass", None, Some("Eevee"), None, [65, 110, 130, 60, 65, 95]),
    ("Glaceon", "Ice", None, Some("Eevee"), None, [65, 60, 110, 130, 95, 65]),
    ("Togekiss", "Fairy", Some("Flying"), Some("Togetic"), None, [85, 50, 95, 120, 115, 80]),
    ("Dialga", "Steel", Some("Dragon"), None, None, [100, 120, 120, 150, 100, 90]),
    ("Palkia", "Water", Some("Dragon"), None, None, [90, 120, 100, 150, 120, 100]),
    ("Giratina", "Ghost", Some("Dragon"), None, None, [150, 100, 120, 100, 120, 90]),
    ("Arceus", "Normal", None, None, None, [120, 120, 120, 120, 120, 120]),
    ("Snivy", "Grass", None, None, Some("Servine"), [45, 45, 55, 45, 55, 63]),
    ("Servine", "Grass", None, Some("Snivy"), Some("Serperior"), [60, 60, 75, 60, 75, 83]),
    ("Serperior", "Grass", None, Some("Servine"), None, [75, 75, 95, 75, 95, 113]),
    ("Tepig", "Fire", None, None, Some("Pignite"), [65, 63, 45, 45, 45, 45]),
    ("Pignite", "Fire", Some("Fighting"), Some("Tepig"), Some("Emboar"), [90, 93, 55, 70, 55, 55]),
    ("Emboar", "Fire", Some("Fighting"), Some("Pignite"), None, [110, 123, 65, 100, 65, 65]),
    ("Oshawott", "Water", None, None, Some("Dewott"), [55, 55, 45, 63, 45, 45]),
    ("Dewott", "Water", None, Some("Oshawott"), Some("Samurott"), [75, 75, 60, 83, 60, 60]),
    ("Samurott", "Water", None, Some("Dewott"), None, [95, 100, 85, 108, 70, 70]),
    ("Zoroark", "Dark", None, Some("Zorua"), None, [60, 105, 60, 120, 60, 105]),
    ("Hydreigon", "Dark", Some("Dragon"), Some("Zweilous"), None, [92, 105, 90, 125, 90, 98]),
    ("Reshiram", "Dragon", Some("Fire"), None, None, [100, 120, 100, 150, 120, 90]),
    ("Zekrom", "Dragon", Some("Electric"), None, None, [100, 150, 120, 120, 100, 90]),
    ("Kyurem", "Dragon", Some("Ice"), None, None, [125, 130, 90, 130, 90, 95]),
    ("Chespin", "Grass", None, None, Some("Quilladin"), [56, 61, 65, 48, 45, 38]),
    ("Quilladin", "Grass", None, Some("Chespin"), Some("Chesnaught"), [61, 78, 95, 56, 58, 57]),
    ("Chesnaught", "Grass", Some("Fighting"), Some("Quilladin"), None, [88, 107, 122, 74, 75, 64]),
    ("Fennekin", "Fire", None, None, Some("Braixen"), [40, 45, 40, 62, 60, 60]),
    ("Braixen", "Fire", None, Some("Fennekin"), Some("Delphox"), [59, 59, 58, 90, 70, 73]),
    ("Delphox", "Fire", Some("Psychic"), Some("Braixen"), None, [75, 69, 72, 114, 100, 104]),
    ("Froakie", "Water", None, None, Some("Frogadier"), [41, 56, 40, 62, 44, 71]),
    ("Frogadier", "Water", None, Some("Froakie"), Some("Greninja"), [54, 63, 52, 83, 56, 97]),
    ("Greninja", "Water", Some("Dark"), Some("Frogadier"), None, [72, 95, 67, 103, 71, 122]),
    ("Sylveon", "Fairy", None, Some("Eevee"), None, [95, 65, 65, 110, 130, 60]),
    ("Goodra", "Dragon", None, Some("Sliggoo"), None, [90, 100, 70, 110, 150, 80]),
    ("Xerneas", "Fairy", None, None, None, [126, 131, 95, 131, 98, 99]),
    ("Yveltal", "Dark", Some("Flying"), None, None, [126, 131, 95, 131, 98, 99]),
    ("Rowlet", "Grass", Some("Flying"), None, Some("Dartrix"), [68, 55, 55, 50, 50, 42]),
    ("Dartrix", "Grass", Some("Flying"), Some("Rowlet"), Some("Decidueye"), [78, 75, 75, 70, 70, 52]),
    ("Decidueye", "Grass", Some("Ghost"), Some("Dartrix"), None, [78, 107, 75, 100, 100, 70]),
    ("Litten", "Fire", None, None, Some("Torracat"), [45, 65, 40, 60, 40, 70]),
    ("Torracat", "Fire", None, Some("Litten"), Some("Incineroar"), [65, 85, 50, 80, 50, 90]),
    ("Incineroar", "Fire", Some("Dark"), Some("Torracat"), None, [95, 115, 90, 80, 90, 60]),
    ("Popplio", "Water", None, None, Some("Brionne"), [50, 54, 54, 66, 56, 40]),
    ("Brionne", "Water", None, Some("Popplio"), Some("Primarina"), [60, 69, 69, 91, 81, 50]),
    ("Primarina", "Water", Some("Fairy"), Some("Brionne"), None, [80, 74, 74, 126, 116, 60]),
    ("Lycanroc", "Rock", None, Some("Rockruff"), None, [75, 115, 65, 55, 65, 112]),
    ("Mimikyu", "Ghost", Some("Fairy"), None, None, [55, 90, 80, 50, 105, 96]),
    ("Kommo O", "Dragon", Some("Fighting"), Some("Hakamo O"), None, [75, 110, 125, 100, 105, 85]),
    ("Solgaleo", "Psychic", Some("Steel"), Some("Cosmoem"), None, [137, 137, 107, 113, 89, 97]),
    ("Lunala", "Psychic", Some("Ghost"), Some("Cosmoem"), None, [137, 113, 89, 137, 107, 97]),
    ("Necrozma", "Psychic", None, None, None, [97, 107, 101, 127, 89, 79]),
    ("Alakazam", "Psychic", None, Some("Kadabra"), None, [55, 50, 45, 135, 95, 120]),
    ("Slowbro", "Water", Some("Psychic"), Some("Slowpoke"), None, [95, 75, 110, 100, 80, 30]),
    ("Lapras", "Water", Some("Ice"), None, None, [130, 85, 80, 85, 95, 60]),
    ("Snorlax", "Normal", None, Some("Munchlax"), None, [160, 110, 65, 65, 110, 30]),
    ("Articuno", "Ice", Some("Flying"), None, None, [90, 85, 100, 95, 125, 85]),
    ("Zapdos", "Electric", Some("Flying"), None, None, [90, 90, 85, 125, 90, 100]),
    ("Moltres", "Fire", Some("Flying"), None, None, [90, 100, 90, 125, 85, 90]),
    ("Scizor", "Bug", Some("Steel"), Some("Scyther"), None, [70, 130, 100, 55, 80, 65]),
    ("Heracross", "Bug", Some("Fighting"), None, None, [80, 125, 75, 40, 95, 85]),
    ("Kingdra", "Water", Some("Dragon"), Some("Seadra"), None, [75, 95, 95, 95, 95, 85]),
    ("Milotic", "Water", None, Some("Feebas"), None, [95, 60, 79, 100, 125, 81]),
    ("Salamence", "Dragon", Some("Flying"), Some("Shelgon"), None, [95, 135, 80, 110, 80, 100]),
    ("Breloom", "Grass", Some("Fighting"), Some("Shroomish"), None, [60, 130, 80, 60, 60, 70]),
    ("Slaking", "Normal", None, Some("Vigoroth"), None, [150, 160, 100, 95, 65, 100]),
    ("Absol", "Dark", None, None, None, [65, 130, 60, 75, 60, 75]),
];

/// Build the catalog records from the compiled-in seed.
///
/// Every call returns a fresh, equivalent vector. Use [`Catalog::shared`]
/// to avoid rebuilding it.
pub fn load() -> Vec<Record> {
    SEED.iter()
        .map(|&(name, primary, secondary, prior, next, stats)| {
            Record::new(
                name,
                primary,
                secondary,
                prior,
                next,
                BaseStats::from_array(stats),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Catalog – records plus the type index
// ---------------------------------------------------------------------------

/// The loaded records together with every type that appears in them.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All records, in seed order.
    pub records: Vec<Record>,
    /// Sorted set of primary and secondary types.
    pub categories: BTreeSet<String>,
}

impl Catalog {
    /// Build the type index from the given records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let categories = distinct_categories(&records);
        Catalog {
            records,
            categories,
        }
    }

    /// Process-wide catalog, built on first access.
    pub fn shared() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let catalog = Catalog::from_records(load());
            log::info!(
                "Loaded {} Pokemon across {} types",
                catalog.len(),
                catalog.categories.len()
            );
            catalog
        })
    }

    /// Look a record up by name. Evolution references may point outside the
    /// catalog, in which case this returns `None`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let records = load();
        let names: BTreeSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), records.len());
        assert_eq!(records.len(), 149);
    }

    #[test]
    fn test_load_is_repeatable() {
        assert_eq!(load(), load());
        assert_eq!(Catalog::shared().records, load());
        assert!(std::ptr::eq(Catalog::shared(), Catalog::shared()));
    }

    #[test]
    fn test_starters_have_expected_totals() {
        let catalog = Catalog::shared();
        let total = |name: &str| catalog.find(name).map(Record::total_stats);
        assert_eq!(total("Bulbasaur"), Some(318));
        assert_eq!(total("Ivysaur"), Some(405));
        assert_eq!(total("Venusaur"), Some(525));
        assert_eq!(total("Missingno"), None);
    }

    #[test]
    fn test_evolution_links_can_be_followed() {
        let catalog = Catalog::shared();
        let ivysaur = catalog.find("Ivysaur").unwrap();
        let next = ivysaur.next_form.as_deref().and_then(|n| catalog.find(n));
        assert_eq!(next.map(|r| r.name.as_str()), Some("Venusaur"));
        assert!(next.unwrap().is_final_form());

        // Kadabra is referenced but not part of the seed.
        let alakazam = catalog.find("Alakazam").unwrap();
        assert_eq!(alakazam.prior_form.as_deref(), Some("Kadabra"));
        assert!(catalog.find("Kadabra").is_none());
    }

    #[test]
    fn test_category_index_matches_records() {
        let catalog = Catalog::shared();
        assert!(catalog.categories.contains("Fairy"));
        assert!(catalog.categories.contains("Steel"));
        for r in &catalog.records {
            for ty in r.types() {
                assert!(catalog.categories.contains(ty), "{ty} missing");
            }
        }
    }
}
