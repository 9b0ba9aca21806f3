use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A catalog entry. Read-only once decoded.
///
/// `id` is minted on every decode and never written back out, so two
/// monsters compare equal when their stat blocks match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,

    #[serde(flatten)]
    pub stats: StatBlock,
}

impl PartialEq for Monster {
    fn eq(&self, other: &Self) -> bool {
        self.stats == other.stats
    }
}

impl From<StatBlock> for Monster {
    fn from(stats: StatBlock) -> Self {
        Self {
            id: Uuid::new_v4(),
            stats,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBlock {
    pub name: Option<String>,
    pub size: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subtype: Option<String>,
    pub alignment: Option<String>,

    pub armor_class: Option<i64>,
    pub hit_points: Option<i64>,
    pub hit_dice: Option<String>,
    pub speed: Option<String>,
    pub speed_json: Option<Speed>,

    pub strength: Option<i64>,
    pub dexterity: Option<i64>,
    pub constitution: Option<i64>,
    pub intelligence: Option<i64>,
    pub wisdom: Option<i64>,
    pub charisma: Option<i64>,

    pub constitution_save: Option<i64>,
    pub intelligence_save: Option<i64>,
    pub wisdom_save: Option<i64>,
    pub history: Option<i64>,
    pub perception: Option<i64>,

    pub damage_vulnerabilities: Option<String>,
    pub damage_resistances: Option<String>,
    pub damage_immunities: Option<String>,
    pub condition_immunities: Option<String>,
    pub senses: Option<String>,
    pub languages: Option<String>,
    pub challenge_rating: Option<String>,
    pub armor_desc: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub special_abilities: Vec<SpecialAbility>,
    #[serde(deserialize_with = "null_as_default")]
    pub actions: Vec<Action>,
    pub legendary_desc: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub legendary_actions: Vec<LegendaryAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Speed {
    pub walk: Option<i64>,
    pub swim: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialAbility {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub attack_bonus: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub attack_bonus: Option<i64>,
    pub damage_dice: Option<String>,
    pub damage_bonus: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendaryAction {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub attack_bonus: Option<i64>,
}

/// Catalog data writes `null` for empty collections as often as it omits them.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub const UNKNOWN: &str = "Unknown";
pub const DEFAULT_HIT_POINTS: i64 = 100;

/* =========================
   Display defaults
   ========================= */

impl Monster {
    pub fn display_name(&self) -> &str {
        self.stats.name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn kind(&self) -> &str {
        self.stats.kind.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn alignment(&self) -> &str {
        self.stats.alignment.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn speed(&self) -> &str {
        self.stats.speed.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn armor_class(&self) -> i64 {
        self.stats.armor_class.unwrap_or(0)
    }

    pub fn hit_points(&self) -> i64 {
        self.stats.hit_points.unwrap_or(DEFAULT_HIT_POINTS)
    }

    pub fn challenge_rating(&self) -> &str {
        self.stats.challenge_rating.as_deref().unwrap_or("0")
    }

    /// The six ability scores in sheet order, absent scores shown as 0.
    pub fn ability_scores(&self) -> [(&'static str, i64); 6] {
        let s = &self.stats;
        [
            ("Strength", s.strength.unwrap_or(0)),
            ("Dexterity", s.dexterity.unwrap_or(0)),
            ("Constitution", s.constitution.unwrap_or(0)),
            ("Intelligence", s.intelligence.unwrap_or(0)),
            ("Wisdom", s.wisdom.unwrap_or(0)),
            ("Charisma", s.charisma.unwrap_or(0)),
        ]
    }

    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim();
        filter.is_empty()
            || self
                .display_name()
                .to_lowercase()
                .contains(&filter.to_lowercase())
    }
}
