//! Typed sheet mutations.
//!
//! A click on a sheet becomes a [`SheetAction`]. [`plan`] turns the action
//! into one or more [`FieldCommand`]s against the current document (a single
//! click can touch several fields, e.g. marking a wound circle also marks the
//! stars before it). [`apply`] writes a command through the
//! [`DocumentStore`]; [`dispatch`] writes all of a click's commands in one
//! update, so linked fields never end up half written. Every writable field
//! is listed in [`Field`].

use std::fmt;

use serde::{Deserialize, Serialize};
use sv_core::{
    Actor, ActorId, ActorKind, AdvantageCategory, Attribute, CombatAttribute, CoreError,
    DocumentStore, Item, ItemId, ItemType, Skill, SorceryKind,
};
use tracing::debug;

use crate::error::{MechError, MechResult};
use crate::sheet::BACKLASH_MAX;
use crate::sheet::track::toggle_value;
use crate::sheet::wounds;

/// Highest attribute or skill rating a sheet shows circles for.
pub const MAX_RATING: u32 = 5;

/// A writable field of an actor document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Rating of a base attribute.
    AttributeValue(Attribute),
    /// Rating of a skill.
    SkillValue(Skill),
    /// Specialization flag of a skill.
    SkillSpecialized(Skill),
    /// Base attribute a combat attribute links to.
    CombatLink(CombatAttribute),
    /// Marked normal wounds.
    NormalWounds,
    /// Marked dramatic wounds.
    DramaticWounds,
    /// Heroism points.
    Heroism,
    /// Sorcery school.
    SorceryKind,
    /// Marked backlash.
    Backlash,
    /// Henchman power.
    Power,
    /// Name of an embedded item.
    ItemName(ItemId),
    /// Rules text of an advantage, power or flaw.
    ItemDescription(ItemId),
    /// Category of an advantage.
    AdvantageCategory(ItemId),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributeValue(a) => write!(f, "attributes.{}.value", a.key()),
            Self::SkillValue(s) => write!(f, "skills.{}.value", s.key()),
            Self::SkillSpecialized(s) => write!(f, "skills.{}.specialized", s.key()),
            Self::CombatLink(c) => write!(f, "combat.{}.linked_attribute", c.key()),
            Self::NormalWounds => write!(f, "wounds.normal"),
            Self::DramaticWounds => write!(f, "wounds.dramatic"),
            Self::Heroism => write!(f, "heroism"),
            Self::SorceryKind => write!(f, "sorcery.kind"),
            Self::Backlash => write!(f, "sorcery.backlash"),
            Self::Power => write!(f, "power"),
            Self::ItemName(id) => write!(f, "items.{id}.name"),
            Self::ItemDescription(id) => write!(f, "items.{id}.description"),
            Self::AdvantageCategory(id) => write!(f, "items.{id}.category"),
        }
    }
}

/// A value written to a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Ratings and counters.
    Number(u32),
    /// Flags.
    Flag(bool),
    /// Combat links.
    Attribute(Attribute),
    /// Sorcery school, or none.
    Sorcery(Option<SorceryKind>),
    /// Names and rules text.
    Text(String),
    /// Advantage categories.
    Category(AdvantageCategory),
}

/// Set one field of one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCommand {
    /// Target actor.
    pub actor: ActorId,
    /// Target field.
    pub field: Field,
    /// New value.
    pub value: FieldValue,
}

impl FieldCommand {
    /// Build a command.
    pub fn new(actor: ActorId, field: Field, value: FieldValue) -> Self {
        Self {
            actor,
            field,
            value,
        }
    }
}

/// Heroism button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroismStep {
    /// +1.
    Increase,
    /// -1, not below zero.
    Decrease,
}

/// Something a user did on a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetAction {
    /// Click attribute circle `index`.
    AttributeCircle {
        /// Attribute row.
        attribute: Attribute,
        /// 1-based circle.
        index: u32,
    },
    /// Click skill circle `index`.
    SkillCircle {
        /// Skill row.
        skill: Skill,
        /// 1-based circle.
        index: u32,
    },
    /// Flip a skill's specialization.
    ToggleSpecialized(Skill),
    /// Relink a combat attribute.
    LinkCombat {
        /// Combat attribute.
        combat: CombatAttribute,
        /// New base attribute.
        attribute: Attribute,
    },
    /// Click wound circle `index` (full sheets and henchmen alike).
    WoundCircle(u32),
    /// Click dramatic star `index`.
    DramaticStar(u32),
    /// Click backlash circle `index`.
    BacklashCircle(u32),
    /// Heroism +/-.
    Heroism(HeroismStep),
    /// Choose a sorcery school.
    SetSorcery(Option<SorceryKind>),
    /// Set henchman power.
    SetPower(u32),
    /// Rename an embedded item.
    RenameItem {
        /// Item to rename.
        item: ItemId,
        /// New name.
        name: String,
    },
    /// Edit the rules text on an advantage, power or flaw sheet.
    DescribeItem {
        /// Item to edit.
        item: ItemId,
        /// New rules text.
        description: String,
    },
    /// Pick the category on an advantage sheet.
    CategorizeAdvantage {
        /// Advantage to edit.
        item: ItemId,
        /// New category.
        category: AdvantageCategory,
    },
}

/// Commands that carry out `action` on `actor` as it currently stands.
pub fn plan(actor: &Actor, action: &SheetAction) -> MechResult<Vec<FieldCommand>> {
    let id = actor.id;
    let number = |field, value| FieldCommand::new(id, field, FieldValue::Number(value));

    let commands = match action {
        SheetAction::AttributeCircle { attribute, index } => {
            check_index(*index, MAX_RATING)?;
            vec![number(Field::AttributeValue(*attribute), *index)]
        }
        SheetAction::SkillCircle { skill, index } => {
            check_index(*index, MAX_RATING)?;
            let current = actor.skill(*skill).value;
            let value = if current == *index && *index == 1 {
                0
            } else {
                *index
            };
            vec![number(Field::SkillValue(*skill), value)]
        }
        SheetAction::ToggleSpecialized(skill) => vec![FieldCommand::new(
            id,
            Field::SkillSpecialized(*skill),
            FieldValue::Flag(!actor.skill(*skill).specialized),
        )],
        SheetAction::LinkCombat { combat, attribute } => vec![FieldCommand::new(
            id,
            Field::CombatLink(*combat),
            FieldValue::Attribute(*attribute),
        )],
        SheetAction::WoundCircle(index) => match actor.kind {
            ActorKind::Henchman => vec![number(
                Field::NormalWounds,
                wounds::mark_henchman(actor, *index)?,
            )],
            _ => {
                let next = wounds::mark_normal(actor, *index)?;
                let mut commands = vec![number(Field::NormalWounds, next.normal)];
                if next.dramatic != actor.wounds.dramatic {
                    commands.push(number(Field::DramaticWounds, next.dramatic));
                }
                commands
            }
        },
        SheetAction::DramaticStar(_) if actor.kind == ActorKind::Henchman => {
            return Err(MechError::NotOnSheet {
                control: "dramatic wounds",
                reason: "henchmen only track normal wounds",
            });
        }
        SheetAction::DramaticStar(index) => {
            let next = wounds::mark_dramatic(actor, *index)?;
            let mut commands = vec![number(Field::DramaticWounds, next.dramatic)];
            if next.normal != actor.wounds.normal {
                commands.push(number(Field::NormalWounds, next.normal));
            }
            commands
        }
        SheetAction::BacklashCircle(_) if actor.sorcery.kind != Some(SorceryKind::Sorte) => {
            return Err(MechError::NotOnSheet {
                control: "backlash",
                reason: "only Sorte sorcerers track it",
            });
        }
        SheetAction::BacklashCircle(index) => vec![number(
            Field::Backlash,
            toggle_value(actor.sorcery.backlash, *index, BACKLASH_MAX)?,
        )],
        SheetAction::Heroism(step) => {
            let value = match step {
                HeroismStep::Increase => actor.heroism.saturating_add(1),
                HeroismStep::Decrease => actor.heroism.saturating_sub(1),
            };
            vec![number(Field::Heroism, value)]
        }
        SheetAction::SetSorcery(kind) => vec![FieldCommand::new(
            id,
            Field::SorceryKind,
            FieldValue::Sorcery(*kind),
        )],
        SheetAction::SetPower(power) => vec![number(Field::Power, (*power).max(1))],
        SheetAction::RenameItem { item, name } => {
            find_item(actor, *item)?;
            vec![FieldCommand::new(
                id,
                Field::ItemName(*item),
                FieldValue::Text(name.clone()),
            )]
        }
        SheetAction::DescribeItem { item, description } => {
            if find_item(actor, *item)?.kind.description().is_none() {
                return Err(no_description());
            }
            vec![FieldCommand::new(
                id,
                Field::ItemDescription(*item),
                FieldValue::Text(description.clone()),
            )]
        }
        SheetAction::CategorizeAdvantage { item, category } => {
            if find_item(actor, *item)?.kind.item_type() != ItemType::Advantage {
                return Err(no_category());
            }
            vec![FieldCommand::new(
                id,
                Field::AdvantageCategory(*item),
                FieldValue::Category(*category),
            )]
        }
    };
    Ok(commands)
}

fn check_index(index: u32, max: u32) -> MechResult<()> {
    if index == 0 || index > max {
        return Err(MechError::InvalidIndex { index, max });
    }
    Ok(())
}

fn find_item(actor: &Actor, item: ItemId) -> MechResult<&Item> {
    actor.item(item).ok_or_else(|| {
        MechError::from(CoreError::ItemNotFound {
            actor: actor.id,
            item,
        })
    })
}

fn no_description() -> MechError {
    MechError::NotOnSheet {
        control: "description",
        reason: "equipment has no rules text",
    }
}

fn no_category() -> MechError {
    MechError::NotOnSheet {
        control: "category",
        reason: "only advantages have one",
    }
}

/// Write one command onto a document. Fails without touching it.
fn write(actor: &mut Actor, command: &FieldCommand) -> MechResult<()> {
    let field = command.field;
    match (field, &command.value) {
        (Field::AttributeValue(a), FieldValue::Number(v)) => {
            actor.attributes.insert(a, *v);
        }
        (Field::SkillValue(s), FieldValue::Number(v)) => {
            actor.skills.entry(s).or_default().value = *v;
        }
        (Field::SkillSpecialized(s), FieldValue::Flag(b)) => {
            actor.skills.entry(s).or_default().specialized = *b;
        }
        (Field::CombatLink(c), FieldValue::Attribute(a)) => {
            actor.combat_links.insert(c, *a);
        }
        (Field::NormalWounds, FieldValue::Number(v)) => actor.wounds.normal = *v,
        (Field::DramaticWounds, FieldValue::Number(v)) => actor.wounds.dramatic = *v,
        (Field::Heroism, FieldValue::Number(v)) => actor.heroism = *v,
        (Field::SorceryKind, FieldValue::Sorcery(kind)) => actor.sorcery.kind = *kind,
        (Field::Backlash, FieldValue::Number(v)) => actor.sorcery.backlash = *v,
        (Field::Power, FieldValue::Number(v)) => actor.power = *v,
        (Field::ItemName(item), FieldValue::Text(name)) => {
            item_mut(actor, item)?.name = name.clone();
        }
        (Field::ItemDescription(item), FieldValue::Text(text)) => {
            let description = item_mut(actor, item)?
                .kind
                .description_mut()
                .ok_or_else(no_description)?;
            *description = text.clone();
        }
        (Field::AdvantageCategory(item), FieldValue::Category(category)) => {
            let current = item_mut(actor, item)?
                .kind
                .category_mut()
                .ok_or_else(no_category)?;
            *current = *category;
        }
        (field, _) => {
            return Err(MechError::FieldType {
                field: field.to_string(),
                expected: expected_type(field),
            });
        }
    }
    Ok(())
}

fn item_mut(actor: &mut Actor, item: ItemId) -> MechResult<&mut Item> {
    let id = actor.id;
    actor
        .item_mut(item)
        .ok_or_else(|| MechError::from(CoreError::ItemNotFound { actor: id, item }))
}

fn expected_type(field: Field) -> &'static str {
    match field {
        Field::SkillSpecialized(_) => "a flag",
        Field::CombatLink(_) => "an attribute",
        Field::SorceryKind => "a sorcery school",
        Field::ItemName(_) | Field::ItemDescription(_) => "text",
        Field::AdvantageCategory(_) => "an advantage category",
        _ => "a number",
    }
}

/// Write one command through the store.
pub fn apply(store: &mut impl DocumentStore, command: &FieldCommand) -> MechResult<()> {
    apply_all(store, command.actor, std::slice::from_ref(command))
}

/// Write `commands` onto `actor` in a single update: either every command
/// lands or the document is left as it was.
fn apply_all(
    store: &mut impl DocumentStore,
    actor: ActorId,
    commands: &[FieldCommand],
) -> MechResult<()> {
    store.update(actor, |doc| -> MechResult<()> {
        let mut next = doc.clone();
        for command in commands {
            debug!(
                actor = %actor,
                field = %command.field,
                value = ?command.value,
                "apply field command"
            );
            write(&mut next, command)?;
        }
        *doc = next;
        Ok(())
    })?
}

/// Plan `action` against the stored actor and apply every resulting command.
/// Returns the commands that were applied.
pub fn dispatch(
    store: &mut impl DocumentStore,
    actor: ActorId,
    action: &SheetAction,
) -> MechResult<Vec<FieldCommand>> {
    let current = store.get(actor).ok_or(CoreError::ActorNotFound(actor))?;
    let commands = plan(current, action)?;
    apply_all(store, actor, &commands)?;
    Ok(commands)
}
