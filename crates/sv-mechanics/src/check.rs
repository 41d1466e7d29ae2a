//! The skill roll: from a sheet and a filled-in roll dialog to a message.

use serde::{Deserialize, Serialize};
use sv_core::{Actor, Attribute, Skill};
use tracing::{debug, info};

use crate::config::SystemSettings;
use crate::dice::{DicePool, DieSource};
use crate::error::MechResult;
use crate::message::RollMessage;
use crate::resolution::{RollRequest, resolve};
use crate::rules::{RollChoice, roll_threshold, wound_penalty};

/// Difficulty the roll dialog starts with.
pub const DEFAULT_DIFFICULTY: u32 = 2;

/// What the player entered in the roll dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheck {
    /// Skill being tested.
    pub skill: Skill,
    /// Attribute (or combat attribute) paired with it.
    pub attribute: RollChoice,
    /// Extra dice. May be negative.
    pub bonus: i32,
    /// Dice set aside.
    pub wager: u32,
    /// Successes needed, if any.
    pub difficulty: Option<u32>,
}

impl SkillCheck {
    /// A check with the dialog's defaults: no bonus, no wager, difficulty 2.
    pub fn new(skill: Skill, attribute: RollChoice) -> Self {
        Self {
            skill,
            attribute,
            bonus: 0,
            wager: 0,
            difficulty: Some(DEFAULT_DIFFICULTY),
        }
    }

    /// Set the bonus dice.
    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    /// Set the wager.
    pub fn with_wager(mut self, wager: u32) -> Self {
        self.wager = wager;
        self
    }

    /// Set or clear the difficulty.
    pub fn with_difficulty(mut self, difficulty: Option<u32>) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// Build the resolver request for `check` on `actor` under `settings`.
pub fn build_request(actor: &Actor, check: &SkillCheck, settings: &SystemSettings) -> RollRequest {
    let base: Attribute = check.attribute.base(actor);
    let attribute_value = actor.attribute(base);
    let skill = actor.skill(check.skill);

    let pool = DicePool::new(attribute_value, skill.value)
        .with_bonus(check.bonus)
        .with_wager(check.wager)
        .with_wound_penalty(wound_penalty(settings, actor.wounds.dramatic));
    let threshold = roll_threshold(settings, attribute_value, skill.value);

    RollRequest::new(pool, threshold)
        .specialized(skill.specialized)
        .with_difficulty(check.difficulty)
}

/// Roll `check` for `actor`.
///
/// An empty pool fails with [`crate::MechError::InvalidPool`] before any die
/// is drawn; the caller should tell the player to adjust the dialog.
pub fn roll_skill(
    actor: &Actor,
    check: &SkillCheck,
    settings: &SystemSettings,
    source: &mut impl DieSource,
) -> MechResult<RollMessage> {
    let request = build_request(actor, check, settings);
    debug!(actor = %actor.id, skill = check.skill.key(), pool = %request.pool, "skill roll");

    let outcome = resolve(&request, source)?;
    let message = RollMessage {
        speaker: actor.name.clone(),
        title: format!("{} - {}", check.attribute.label(), check.skill.label()),
        wager: check.wager,
        difficulty: check.difficulty,
        outcome,
    };
    info!(
        actor = %actor.id,
        title = %message.title,
        successes = message.outcome.success_count,
        "roll posted"
    );
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::error::MechError;
    use crate::rules::RuleVariant;
    use sv_core::{ActorKind, CombatAttribute, SkillRating};

    fn aurore() -> Actor {
        let mut actor = Actor::new(ActorKind::PlayerCharacter, "Aurore");
        actor.attributes.insert(Attribute::Finesse, 3);
        actor.attributes.insert(Attribute::Wits, 2);
        actor.skills.insert(
            Skill::MeleeWeapons,
            SkillRating {
                value: 2,
                specialized: true,
            },
        );
        actor
    }

    fn melee(choice: RollChoice) -> SkillCheck {
        SkillCheck::new(Skill::MeleeWeapons, choice)
    }

    #[test]
    fn house_variant_uses_attribute_threshold_and_wounds() {
        let mut actor = aurore();
        actor.wounds.dramatic = 1;
        let settings = SystemSettings::default();
        let request = build_request(
            &actor,
            &melee(RollChoice::Attribute(Attribute::Finesse)),
            &settings,
        );
        assert_eq!(request.pool_size(), 4);
        assert_eq!(request.threshold, 7);
        assert!(request.specialized);
        assert_eq!(request.difficulty, Some(2));
    }

    #[test]
    fn standard_variant_uses_skill_threshold_and_ignores_wounds() {
        let mut actor = aurore();
        actor.wounds.dramatic = 3;
        let settings = SystemSettings::default()
            .with_variant(RuleVariant::Standard)
            .with_threshold_modifier(1);
        let request = build_request(
            &actor,
            &melee(RollChoice::Attribute(Attribute::Finesse)),
            &settings,
        );
        assert_eq!(request.pool_size(), 5);
        assert_eq!(request.threshold, 7);
    }

    #[test]
    fn combat_attribute_borrows_linked_attribute() {
        let actor = aurore();
        let request = build_request(
            &actor,
            &melee(RollChoice::Combat(CombatAttribute::Attack)),
            &SystemSettings::default(),
        );
        // Attack links to Finesse (3).
        assert_eq!(request.pool.attribute, 3);
        assert_eq!(request.threshold, 7);
    }

    #[test]
    fn roll_produces_message() {
        let actor = aurore();
        let check = melee(RollChoice::Attribute(Attribute::Finesse)).with_wager(0);
        let mut dice = ScriptedDice::new([2, 9, 10, 4, 1, 3]);
        let message = roll_skill(&actor, &check, &SystemSettings::default(), &mut dice).unwrap();

        assert_eq!(message.title, "Finesse - Armes blanches");
        assert_eq!(message.outcome.dice.faces, vec![2, 9, 10, 4, 1, 3]);
        assert_eq!(message.outcome.success_count, 2);
        assert_eq!(message.outcome.passed, Some(true));
        assert_eq!(message.status().as_deref(), Some("Réussite (Difficulté 2)"));
    }

    #[test]
    fn combat_label_in_title() {
        let actor = aurore();
        let check = melee(RollChoice::Combat(CombatAttribute::Attack)).with_difficulty(None);
        let mut dice = ScriptedDice::new([5, 5, 5, 5, 5]);
        let message = roll_skill(&actor, &check, &SystemSettings::default(), &mut dice).unwrap();
        assert_eq!(message.title, "Attaque - Armes blanches");
        assert_eq!(message.outcome.passed, None);
    }

    #[test]
    fn empty_pool_rolls_nothing() {
        let actor = aurore();
        let check = melee(RollChoice::Attribute(Attribute::Wits))
            .with_bonus(-1)
            .with_wager(3);
        let mut dice = ScriptedDice::new([10; 8]);
        let err = roll_skill(&actor, &check, &SystemSettings::default(), &mut dice).unwrap_err();
        assert!(matches!(err, MechError::InvalidPool { size: 0 }));
        assert_eq!(dice.drawn(), 0);
    }
}
