//! Deck editor boundary policy.
//!
//! The aggregate's saved deck is a free sequence; the min/max size
//! rules live at the facade and surface as rejected actions.

use deck_battle::battle::DeckBattleSystem;
use deck_battle::cards::{SkillCatalog, SkillDefinition, SkillId};
use deck_battle::core::{ActorId, BattleConfig, DeckError};

fn catalog_of(count: u32) -> SkillCatalog {
    let mut catalog = SkillCatalog::new();
    for i in 1..=count {
        catalog.register(SkillDefinition::new(SkillId::new(i), format!("Skill {i}")));
    }
    catalog
}

fn editor_system(min: usize, max: usize, learned: u32) -> (DeckBattleSystem, ActorId) {
    let config = BattleConfig::new().with_deck_limits(min, max);
    let mut system = DeckBattleSystem::with_seed(config, catalog_of(learned), 42);
    let actor = ActorId::new(1);
    system.register_actor(actor, (1..=learned).map(SkillId::new).collect());
    (system, actor)
}

#[test]
fn test_toggle_add_and_remove() {
    let (mut system, actor) = editor_system(1, 30, 6);

    assert!(system.is_skill_in_deck(actor, SkillId::new(3)));
    assert_eq!(system.toggle_deck_skill(actor, SkillId::new(3)), Ok(false));
    assert!(!system.is_skill_in_deck(actor, SkillId::new(3)));
    assert_eq!(system.deck_size(actor), 5);

    assert_eq!(system.toggle_deck_skill(actor, SkillId::new(3)), Ok(true));
    assert!(system.is_skill_in_deck(actor, SkillId::new(3)));
    assert_eq!(system.deck_size(actor), 6);
}

/// Scenario: the saved deck sits at exactly the maximum. Adding a new
/// card is refused; membership and size stay unchanged.
#[test]
fn test_add_refused_at_max_size() {
    let (mut system, actor) = editor_system(1, 6, 7);

    // Learned 7, but deck derives to 7 which is over max; trim one off
    // first so the deck sits at exactly the maximum.
    system.toggle_deck_skill(actor, SkillId::new(7)).unwrap();
    assert_eq!(system.deck_size(actor), 6);

    assert_eq!(
        system.toggle_deck_skill(actor, SkillId::new(7)),
        Err(DeckError::DeckAtMaxSize { max: 6 })
    );
    assert!(!system.is_skill_in_deck(actor, SkillId::new(7)));
    assert_eq!(system.deck_size(actor), 6);
}

#[test]
fn test_remove_refused_at_min_size() {
    let (mut system, actor) = editor_system(5, 30, 5);

    assert_eq!(system.deck_size(actor), 5);
    assert_eq!(
        system.toggle_deck_skill(actor, SkillId::new(1)),
        Err(DeckError::DeckAtMinSize { min: 5 })
    );
    assert!(system.is_skill_in_deck(actor, SkillId::new(1)));
    assert_eq!(system.deck_size(actor), 5);
}

/// Removing a card already outside the deck is a plain add path, and
/// adding below max always succeeds regardless of the min bound.
#[test]
fn test_policy_checks_direction_of_toggle() {
    let (mut system, actor) = editor_system(5, 10, 8);

    // At 8 cards, removal is allowed (above min)...
    assert_eq!(system.toggle_deck_skill(actor, SkillId::new(8)), Ok(false));
    // ...and re-adding is allowed (below max).
    assert_eq!(system.toggle_deck_skill(actor, SkillId::new(8)), Ok(true));
}

#[test]
fn test_excluded_skills_never_derive_into_deck() {
    let config = BattleConfig::new()
        .with_deck_limits(1, 30)
        .with_excluded([SkillId::new(1), SkillId::new(2)]);
    let mut system = DeckBattleSystem::with_seed(config, catalog_of(6), 42);
    let actor = ActorId::new(1);
    system.register_actor(actor, (1..=6).map(SkillId::new).collect());

    assert_eq!(system.deck_size(actor), 4);
    assert!(!system.is_skill_in_deck(actor, SkillId::new(1)));

    let listed: Vec<_> = system
        .editable_skills(actor)
        .iter()
        .map(|s| s.id)
        .collect();
    assert!(!listed.contains(&SkillId::new(1)));
    assert!(!listed.contains(&SkillId::new(2)));
    assert_eq!(listed.len(), 4);
}

#[test]
fn test_editable_skills_resolves_against_catalog() {
    // Actor learned skills the catalog doesn't know (host removed them).
    let (mut system, _) = editor_system(1, 30, 4);
    let actor = ActorId::new(2);
    system.register_actor(
        actor,
        vec![SkillId::new(1), SkillId::new(2), SkillId::new(99)],
    );

    let listed = system.editable_skills(actor);
    assert_eq!(listed.len(), 2);
}

#[test]
fn test_unknown_actor_editor_surface() {
    let (mut system, _) = editor_system(5, 30, 6);
    let ghost = ActorId::new(77);

    assert_eq!(system.deck_size(ghost), 0);
    assert!(!system.is_skill_in_deck(ghost, SkillId::new(1)));
    assert_eq!(
        system.toggle_deck_skill(ghost, SkillId::new(1)),
        Err(DeckError::UnknownActor(ghost))
    );
}
