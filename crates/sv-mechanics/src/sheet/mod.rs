//! Derived sheet values.
//!
//! [`SheetView`] is what a sheet displays for an actor under the current
//! settings: thresholds, combat attributes resolved through their links, the
//! wound layout, and whether the sorcery section and backlash track show.
//! It is recomputed from the document on every render and never stored.

pub mod track;
pub mod wounds;

pub use track::Track;
pub use wounds::{Circle, WoundGrid, WoundGroup};

use serde::{Deserialize, Serialize};
use sv_core::{Actor, ActorKind, Attribute, CombatAttribute, Skill, SorceryKind};

use crate::config::SystemSettings;
use crate::rules::{RuleVariant, attribute_threshold, skill_threshold};

/// Circles on the backlash track.
pub const BACKLASH_MAX: u32 = 10;

/// A base attribute row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRow {
    /// Which attribute.
    pub attribute: Attribute,
    /// Rating.
    pub value: u32,
    /// Threshold under the current modifier.
    pub threshold: i32,
}

/// A skill row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRow {
    /// Which skill.
    pub skill: Skill,
    /// Rating.
    pub value: u32,
    /// Tens explode.
    pub specialized: bool,
    /// Only shown in the standard variant.
    pub threshold: Option<i32>,
}

/// A combat attribute row, resolved through its link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRow {
    /// Which combat attribute.
    pub combat: CombatAttribute,
    /// The base attribute it borrows from.
    pub linked: Attribute,
    /// Borrowed rating.
    pub value: u32,
    /// Borrowed threshold.
    pub threshold: i32,
}

/// How wounds are laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoundLayout {
    /// Full sheets: groups of circles closed by dramatic stars.
    Grid(WoundGrid),
    /// Henchmen: a single row sized by power.
    Row(Vec<Circle>),
}

/// Everything a sheet displays for one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetView {
    /// Actor name.
    pub name: String,
    /// Sheet type.
    pub kind: ActorKind,
    /// Variant the thresholds were computed under.
    pub variant: RuleVariant,
    /// Base attributes.
    pub attributes: Vec<AttributeRow>,
    /// Skills.
    pub skills: Vec<SkillRow>,
    /// Combat attributes.
    pub combat: Vec<CombatRow>,
    /// Wound layout.
    pub wounds: WoundLayout,
    /// Heroism points.
    pub heroism: u32,
    /// The sorcery section is shown.
    pub show_sorcery: bool,
    /// Backlash, for Sorte practitioners only.
    pub backlash: Option<Track>,
}

impl SheetView {
    /// Compute the view of `actor` under `settings`.
    pub fn build(actor: &Actor, settings: &SystemSettings) -> Self {
        let modifier = settings.threshold_modifier;

        let attributes = Attribute::ALL
            .iter()
            .map(|&attribute| {
                let value = actor.attribute(attribute);
                AttributeRow {
                    attribute,
                    value,
                    threshold: attribute_threshold(value, modifier),
                }
            })
            .collect();

        let skills = Skill::ALL
            .iter()
            .map(|&skill| {
                let rating = actor.skill(skill);
                SkillRow {
                    skill,
                    value: rating.value,
                    specialized: rating.specialized,
                    threshold: (settings.variant == RuleVariant::Standard)
                        .then(|| skill_threshold(rating.value, modifier)),
                }
            })
            .collect();

        let combat = CombatAttribute::ALL
            .iter()
            .map(|&combat| {
                let linked = actor.combat_link(combat);
                let value = actor.attribute(linked);
                CombatRow {
                    combat,
                    linked,
                    value,
                    threshold: attribute_threshold(value, modifier),
                }
            })
            .collect();

        let wounds = match actor.kind {
            ActorKind::Henchman => WoundLayout::Row(wounds::henchman_row(actor)),
            _ => WoundLayout::Grid(WoundGrid::build(actor)),
        };

        let backlash = (actor.sorcery.kind == Some(SorceryKind::Sorte))
            .then(|| Track::new("Contrecoup", actor.sorcery.backlash, BACKLASH_MAX));

        Self {
            name: actor.name.clone(),
            kind: actor.kind,
            variant: settings.variant,
            attributes,
            skills,
            combat,
            wounds,
            heroism: actor.heroism,
            show_sorcery: shows_sorcery(actor),
            backlash,
        }
    }

    /// The row for one attribute.
    pub fn attribute(&self, attribute: Attribute) -> Option<&AttributeRow> {
        self.attributes.iter().find(|r| r.attribute == attribute)
    }

    /// The row for one skill.
    pub fn skill(&self, skill: Skill) -> Option<&SkillRow> {
        self.skills.iter().find(|r| r.skill == skill)
    }

    /// The row for one combat attribute.
    pub fn combat(&self, combat: CombatAttribute) -> Option<&CombatRow> {
        self.combat.iter().find(|r| r.combat == combat)
    }
}

/// Whether the sorcery section shows: the right kind of actor with at least
/// one point in Sorcery.
pub fn shows_sorcery(actor: &Actor) -> bool {
    actor.kind.can_wield_sorcery() && actor.skill(Skill::Sorcery).value > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_core::SkillRating;

    fn aurore() -> Actor {
        let mut actor = Actor::new(ActorKind::PlayerCharacter, "Aurore");
        actor.attributes.insert(Attribute::Finesse, 3);
        actor.attributes.insert(Attribute::Resolve, 2);
        actor.skills.insert(
            Skill::MeleeWeapons,
            SkillRating {
                value: 2,
                specialized: true,
            },
        );
        actor
    }

    #[test]
    fn attribute_thresholds_apply_modifier() {
        let settings = SystemSettings::default().with_threshold_modifier(1);
        let view = SheetView::build(&aurore(), &settings);
        let finesse = view.attribute(Attribute::Finesse).unwrap();
        assert_eq!(finesse.value, 3);
        assert_eq!(finesse.threshold, 6);
    }

    #[test]
    fn skill_thresholds_only_in_standard_variant() {
        let house = SheetView::build(&aurore(), &SystemSettings::default());
        assert_eq!(house.skill(Skill::MeleeWeapons).unwrap().threshold, None);

        let standard = SystemSettings::default().with_variant(RuleVariant::Standard);
        let view = SheetView::build(&aurore(), &standard);
        let melee = view.skill(Skill::MeleeWeapons).unwrap();
        assert_eq!(melee.threshold, Some(8));
        assert!(melee.specialized);
    }

    #[test]
    fn combat_rows_borrow_linked_values() {
        let view = SheetView::build(&aurore(), &SystemSettings::default());
        let attack = view.combat(CombatAttribute::Attack).unwrap();
        assert_eq!(attack.linked, Attribute::Finesse);
        assert_eq!(attack.value, 3);
        assert_eq!(attack.threshold, 7);
    }

    #[test]
    fn full_sheet_has_grid_henchman_has_row() {
        let view = SheetView::build(&aurore(), &SystemSettings::default());
        match view.wounds {
            WoundLayout::Grid(grid) => assert_eq!(grid.group_size, 2),
            WoundLayout::Row(_) => panic!("expected grid"),
        }

        let mut brute = Actor::new(ActorKind::Henchman, "Brute");
        brute.power = 4;
        let view = SheetView::build(&brute, &SystemSettings::default());
        assert!(matches!(view.wounds, WoundLayout::Row(ref row) if row.len() == 4));
    }

    #[test]
    fn sorcery_visibility() {
        let mut actor = aurore();
        assert!(!shows_sorcery(&actor));
        actor.skills.insert(
            Skill::Sorcery,
            SkillRating {
                value: 1,
                specialized: false,
            },
        );
        assert!(shows_sorcery(&actor));

        actor.kind = ActorKind::Henchman;
        assert!(!shows_sorcery(&actor));
    }

    #[test]
    fn backlash_only_for_sorte() {
        let mut actor = aurore();
        let view = SheetView::build(&actor, &SystemSettings::default());
        assert!(view.backlash.is_none());

        actor.sorcery.kind = Some(SorceryKind::Sorte);
        actor.sorcery.backlash = 3;
        let view = SheetView::build(&actor, &SystemSettings::default());
        let track = view.backlash.unwrap();
        assert_eq!(track.current, 3);
        assert_eq!(track.max, BACKLASH_MAX);

        actor.sorcery.kind = Some(SorceryKind::Glamour);
        assert!(SheetView::build(&actor, &SystemSettings::default()).backlash.is_none());
    }
}
