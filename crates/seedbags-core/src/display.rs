//! Display text for seed bags.
//!
//! A bag's name and lore are never stored as independent state: they are
//! recomputed from `(kind, count)` on every count change, so two bags with
//! the same kind and count always look identical no matter how they got
//! there.

use seedbags_types::SeedKind;

/// Label used when a bag's kind cannot be read.
pub const UNKNOWN_SEED_LABEL: &str = "Unknown Seed";

/// The rendered name and lore of a bag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BagDisplay {
    /// Item name, e.g. `Seed Bag - Wheat Seeds (12)`.
    pub name: String,
    /// Descriptive lines shown under the name.
    pub lore: Vec<String>,
}

/// Render the display of a bag holding `count` units of `kind`.
///
/// `radius` is the dispensing radius configured for the kind and `capacity`
/// the bag's maximum count; both are fixed for a given configuration, which
/// keeps this a pure function of `(kind, count)`.
pub fn render(kind: Option<SeedKind>, count: u32, radius: u32, capacity: u32) -> BagDisplay {
    let side = radius.saturating_mul(2).saturating_add(1);
    BagDisplay {
        name: format!("Seed Bag - {} ({count})", label(kind)),
        lore: vec![
            format!("Plants crops in a {side}x{side} area."),
            String::from(" "),
            format!("{count}/{}", group_thousands(capacity)),
        ],
    }
}

/// Human-readable label for a kind, e.g. `Nether Wart`.
pub fn label(kind: Option<SeedKind>) -> String {
    kind.map_or_else(
        || UNKNOWN_SEED_LABEL.to_owned(),
        |kind| normalize_identifier(kind.id()),
    )
}

/// Turn `SOME_IDENTIFIER` into `Some Identifier`.
pub fn normalize_identifier(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format `n` with comma thousands separators: `128000` becomes `128,000`.
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len().saturating_add(digits.len() / 3));
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
