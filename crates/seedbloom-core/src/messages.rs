//! Petal message catalog.
//!
//! Five affirmations, one per petal. Petals 0, 2 and 4 have a variant that
//! opens with the visitor's name; 1 and 3 are always shown as written.

use crate::error::GardenError;

/// Number of petals on the flower.
pub const PETAL_COUNT: usize = 5;

const NAME_PLACEHOLDER: &str = "{name}";

/// A catalog entry: the generic text and, for some petals, a named variant.
struct Template {
    generic: &'static str,
    named: Option<&'static str>,
}

const CATALOG: [Template; PETAL_COUNT] = [
    Template {
        generic: "You carry a kind of purity that doesn't need to prove itself. It radiates from you quietly, touching everything around you with a grace that asks for nothing in return.",
        named: Some("{name}, you carry a kind of purity that doesn't need to prove itself. It radiates from you quietly, touching everything around you with a grace that asks for nothing in return."),
    },
    Template {
        generic: "There is a gentleness in you that the world has never managed to stain. Despite everything you've faced, you remain soft where others have hardened, and that is a rare and beautiful strength.",
        named: None,
    },
    Template {
        generic: "I admire how your heart chooses what is right, even when it's hard. You navigate this world with a moral compass that never wavers, and that integrity is something truly precious.",
        named: Some("{name}, I admire how your heart chooses what is right, even when it's hard. You navigate this world with a moral compass that never wavers, and that integrity is something truly precious."),
    },
    Template {
        generic: "Your presence alone makes things feel more honest, more clean. You bring clarity to confusion and peace to chaos, simply by being exactly who you are.",
        named: None,
    },
    Template {
        generic: "I hold you with respect, care, and a love that never crosses its bounds. You are cherished in a way that honors your wholeness, your autonomy, and the sacred space you occupy in this world.",
        named: Some("{name}, I hold you with respect, care, and a love that never crosses its bounds. You are cherished in a way that honors your wholeness, your autonomy, and the sacred space you occupy in this world."),
    },
];

const BONUS: Template = Template {
    generic: "You are a garden of endless beauty, and I am grateful to witness your bloom. Every petal of your being unfolds with such grace, and the world is more beautiful because you're in it.",
    named: Some("{name}, you are a garden of endless beauty, and I am grateful to witness your bloom. Every petal of your being unfolds with such grace, and the world is more beautiful because you're in it."),
};

impl Template {
    fn render(&self, name: &str) -> String {
        match self.named {
            Some(named) if !name.is_empty() => named.replacen(NAME_PLACEHOLDER, name, 1),
            _ => self.generic.to_string(),
        }
    }
}

/// Index of a petal, guaranteed to be in `0..PETAL_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PetalIndex(usize);

impl PetalIndex {
    /// All petals in display order.
    pub fn all() -> impl Iterator<Item = PetalIndex> {
        (0..PETAL_COUNT).map(PetalIndex)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Whether this petal's message opens with the visitor's name.
    pub fn is_personalized(self) -> bool {
        CATALOG[self.0].named.is_some()
    }
}

impl TryFrom<usize> for PetalIndex {
    type Error = GardenError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < PETAL_COUNT {
            Ok(PetalIndex(index))
        } else {
            Err(GardenError::PetalOutOfRange(index))
        }
    }
}

/// Resolve the message for a petal. An empty name yields the generic text.
pub fn personalized_message(index: PetalIndex, name: &str) -> String {
    CATALOG[index.0].render(name)
}

/// The easter-egg message.
pub fn bonus_message(name: &str) -> String {
    BONUS.render(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn petal(i: usize) -> PetalIndex {
        PetalIndex::try_from(i).unwrap()
    }

    fn template(index: PetalIndex) -> &'static str {
        CATALOG[index.0].generic
    }

    #[test]
    fn test_named_variant_keeps_clause() {
        let msg = personalized_message(petal(0), "Amy");
        assert!(msg.starts_with("Amy,"));
        // Same clause, first letter lowercased after the name
        assert!(msg.ends_with(&template(petal(0))[1..]));
    }

    #[test]
    fn test_first_person_variants_keep_capital_i() {
        assert!(personalized_message(petal(2), "Amy").starts_with("Amy, I admire"));
        assert!(personalized_message(petal(4), "Amy").starts_with("Amy, I hold"));
    }

    #[test]
    fn test_unparameterized_petals_ignore_name() {
        assert_eq!(personalized_message(petal(1), "Amy"), template(petal(1)));
        assert_eq!(personalized_message(petal(3), "Amy"), template(petal(3)));
    }

    #[test]
    fn test_empty_name_uses_generic() {
        for index in PetalIndex::all() {
            assert_eq!(personalized_message(index, ""), template(index));
        }
    }

    #[test]
    fn test_personalized_set() {
        let named: Vec<usize> = PetalIndex::all()
            .filter(|p| p.is_personalized())
            .map(PetalIndex::get)
            .collect();
        assert_eq!(named, vec![0, 2, 4]);
    }

    #[test]
    fn test_placeholder_in_name_is_literal() {
        let msg = personalized_message(petal(0), "{name}");
        assert!(msg.starts_with("{name}, you carry"));
    }

    #[test]
    fn test_bonus_message() {
        assert!(bonus_message("").starts_with("You are a garden"));
        assert!(bonus_message("Amy").starts_with("Amy, you are a garden"));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            PetalIndex::try_from(5),
            Err(GardenError::PetalOutOfRange(5))
        ));
    }
}
