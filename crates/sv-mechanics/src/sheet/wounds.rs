//! Wound grid and its click rules.
//!
//! A full sheet shows one group per dramatic wound the actor can take. Each
//! group holds `group_size` normal circles followed by a dramatic star.
//! Circle indices run continuously across groups. Marking a circle also
//! marks every star before its group; marking a star also marks every circle
//! up to the end of its group.

use serde::{Deserialize, Serialize};
use sv_core::{Actor, Attribute, CombatAttribute, Wounds};

use super::track::toggle_value;
use crate::error::MechResult;

/// Normal circles per group: Toughness, else Resolve, else 1.
pub fn group_size(actor: &Actor) -> u32 {
    [
        actor.combat_value(CombatAttribute::Toughness),
        actor.attribute(Attribute::Resolve),
    ]
    .into_iter()
    .find(|v| *v > 0)
    .unwrap_or(1)
}

/// One wound circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    /// 1-based index.
    pub index: u32,
    /// Marked.
    pub filled: bool,
}

/// A group of normal circles closed by a dramatic star.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoundGroup {
    /// 1-based index of the group and its star.
    pub index: u32,
    /// The group's normal circles.
    pub normals: Vec<Circle>,
    /// The star is marked.
    pub dramatic: bool,
}

/// The wound grid of a full sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoundGrid {
    /// Circles per group.
    pub group_size: u32,
    /// Groups, first to last.
    pub groups: Vec<WoundGroup>,
}

impl WoundGrid {
    /// Lay out the grid for an actor.
    pub fn build(actor: &Actor) -> Self {
        let size = group_size(actor);
        let Wounds { normal, dramatic } = actor.wounds;
        let groups = (1..=actor.kind.max_dramatic_wounds())
            .map(|i| WoundGroup {
                index: i,
                normals: (1..=size)
                    .map(|j| {
                        let index = (i - 1) * size + j;
                        Circle {
                            index,
                            filled: normal >= index,
                        }
                    })
                    .collect(),
                dramatic: dramatic >= i,
            })
            .collect();
        Self {
            group_size: size,
            groups,
        }
    }

    /// Total normal circles on the grid.
    pub fn circle_count(&self) -> u32 {
        self.group_size * self.groups.len() as u32
    }
}

/// Wounds after clicking normal circle `index` on a full sheet.
pub fn mark_normal(actor: &Actor, index: u32) -> MechResult<Wounds> {
    let size = group_size(actor);
    let max = size * actor.kind.max_dramatic_wounds();
    let current = actor.wounds;
    let normal = toggle_value(current.normal, index, max)?;

    let required_dramatic = index.div_ceil(size) - 1;
    let dramatic = if normal > current.normal && current.dramatic < required_dramatic {
        required_dramatic
    } else {
        current.dramatic
    };
    Ok(Wounds { normal, dramatic })
}

/// Wounds after clicking dramatic star `index` on a full sheet.
pub fn mark_dramatic(actor: &Actor, index: u32) -> MechResult<Wounds> {
    let size = group_size(actor);
    let current = actor.wounds;
    let dramatic = toggle_value(current.dramatic, index, actor.kind.max_dramatic_wounds())?;

    let required_normal = index * size;
    let normal = if dramatic > current.dramatic && current.normal < required_normal {
        required_normal
    } else {
        current.normal
    };
    Ok(Wounds { normal, dramatic })
}

/// The henchman wound row: one circle per point of power.
pub fn henchman_row(actor: &Actor) -> Vec<Circle> {
    (1..=actor.power.max(1))
        .map(|index| Circle {
            index,
            filled: actor.wounds.normal >= index,
        })
        .collect()
}

/// Normal wounds after clicking circle `index` on a henchman row.
pub fn mark_henchman(actor: &Actor, index: u32) -> MechResult<u32> {
    toggle_value(actor.wounds.normal, index, actor.power.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechError;
    use sv_core::ActorKind;

    fn hero(resolve: u32) -> Actor {
        let mut actor = Actor::new(ActorKind::PlayerCharacter, "Aurore");
        actor.attributes.insert(Attribute::Resolve, resolve);
        actor
    }

    #[test]
    fn group_size_uses_toughness_link() {
        let mut actor = hero(3);
        assert_eq!(group_size(&actor), 3);
        actor
            .combat_links
            .insert(CombatAttribute::Toughness, Attribute::Brawn);
        actor.attributes.insert(Attribute::Brawn, 4);
        assert_eq!(group_size(&actor), 4);
    }

    #[test]
    fn group_size_falls_back() {
        let mut actor = hero(0);
        assert_eq!(group_size(&actor), 1);
        actor
            .combat_links
            .insert(CombatAttribute::Toughness, Attribute::Brawn);
        actor.attributes.insert(Attribute::Brawn, 0);
        actor.attributes.insert(Attribute::Resolve, 2);
        assert_eq!(group_size(&actor), 2);
    }

    #[test]
    fn grid_layout() {
        let mut actor = hero(3);
        actor.wounds = Wounds {
            normal: 4,
            dramatic: 1,
        };
        let grid = WoundGrid::build(&actor);
        assert_eq!(grid.groups.len(), 4);
        assert_eq!(grid.circle_count(), 12);
        let second = &grid.groups[1];
        assert_eq!(
            second.normals.iter().map(|c| c.index).collect::<Vec<_>>(),
            vec![4, 5, 6]
        );
        assert!(second.normals[0].filled);
        assert!(!second.normals[1].filled);
        assert!(grid.groups[0].dramatic);
        assert!(!second.dramatic);
    }

    #[test]
    fn lieutenant_has_two_groups() {
        let mut actor = hero(2);
        actor.kind = ActorKind::Lieutenant;
        assert_eq!(WoundGrid::build(&actor).groups.len(), 2);
        assert!(mark_dramatic(&actor, 3).is_err());
    }

    #[test]
    fn marking_a_circle_marks_earlier_stars() {
        let actor = hero(3);
        // Circle 7 sits in group 3, so stars 1 and 2 are marked too.
        let w = mark_normal(&actor, 7).unwrap();
        assert_eq!(
            w,
            Wounds {
                normal: 7,
                dramatic: 2
            }
        );
    }

    #[test]
    fn unmarking_a_circle_leaves_stars() {
        let mut actor = hero(3);
        actor.wounds = Wounds {
            normal: 7,
            dramatic: 2,
        };
        let w = mark_normal(&actor, 7).unwrap();
        assert_eq!(
            w,
            Wounds {
                normal: 6,
                dramatic: 2
            }
        );
    }

    #[test]
    fn marking_a_star_marks_its_group() {
        let actor = hero(3);
        let w = mark_dramatic(&actor, 2).unwrap();
        assert_eq!(
            w,
            Wounds {
                normal: 6,
                dramatic: 2
            }
        );
    }

    #[test]
    fn unmarking_a_star_keeps_circles() {
        let mut actor = hero(3);
        actor.wounds = Wounds {
            normal: 6,
            dramatic: 2,
        };
        let w = mark_dramatic(&actor, 2).unwrap();
        assert_eq!(
            w,
            Wounds {
                normal: 6,
                dramatic: 1
            }
        );
    }

    #[test]
    fn circle_index_out_of_range() {
        let actor = hero(2);
        assert!(matches!(
            mark_normal(&actor, 9),
            Err(MechError::InvalidIndex { index: 9, max: 8 })
        ));
    }

    #[test]
    fn henchman_row_follows_power() {
        let mut actor = Actor::new(ActorKind::Henchman, "Brute");
        actor.power = 3;
        actor.wounds.normal = 1;
        let row = henchman_row(&actor);
        assert_eq!(row.len(), 3);
        assert!(row[0].filled && !row[1].filled);
        assert_eq!(mark_henchman(&actor, 3).unwrap(), 3);
        assert_eq!(mark_henchman(&actor, 1).unwrap(), 0);
        assert!(mark_henchman(&actor, 4).is_err());
    }
}
