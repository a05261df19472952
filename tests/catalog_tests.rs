//! Tests for reference data loading and selection resolution.
//!
//! These tests verify:
//! - Loading and validating reference data from JSON
//! - Resolution of raw selections into engine inputs
//! - Silent skipping of unknown selections
//! - A full resolve-then-evaluate run
//! - Null stat fields in reference data

use buildscore::*;

const REFERENCE: &str = include_str!("data/reference.json");

fn reference() -> ReferenceData {
    ReferenceData::from_json(REFERENCE).unwrap()
}

fn archer_selection() -> BuildSelection {
    BuildSelection {
        role_id: "ARCHER RALLY - SKILL DMG".into(),
        vip_level: Some(15),
        civilisation: Some("Korea".into()),
        spending_tier: Some("Whale".into()),
        city_skin: Some("Dragon Lair".into()),
        equipment_pieces: vec![
            EquipmentSelection {
                equipment_id: "db-bow".into(),
                iconic_level: "V".into(),
            },
            EquipmentSelection {
                equipment_id: "db-helm".into(),
                iconic_level: "Iconic V".into(),
            },
            EquipmentSelection {
                equipment_id: "ghost-ring".into(),
                iconic_level: "V".into(),
            },
            EquipmentSelection {
                equipment_id: "db-bow".into(),
                iconic_level: "VI".into(),
            },
        ],
        formation: Some("Wedge".into()),
        special_inscriptions: vec!["fearless".into()],
        rare_inscriptions: vec!["rallying-cry".into()],
        common_inscriptions: vec!["bulwark".into(), "missing".into()],
        armament_attributes: ArmamentAttributes {
            attack: 1.0,
            all_dmg: 1.0,
            ..Default::default()
        },
    }
}

/// Test loading reference data from JSON.
#[test]
fn test_load_reference_data() {
    let data = reference();
    assert_eq!(data.roles.len(), 2);
    assert!(data.role("INF GARRISON - DEFENSE").is_some());
    assert!(data.role("CAV RALLY").is_none());

    let archer = data.role("ARCHER RALLY - SKILL DMG").unwrap();
    assert!(archer.scoring_scales.layer_3.is_some());
    assert_eq!(archer.role_type, RoleType::Rally);

    let infantry = data.role("INF GARRISON - DEFENSE").unwrap();
    assert!(infantry.scoring_scales.layer_3.is_none());
    assert_eq!(infantry.tier_thresholds, TierThresholds::default());
}

/// Test that prefixed level labels are normalized on load.
#[test]
fn test_equipment_levels_are_normalized_on_load() {
    let data = reference();
    let bow = data
        .equipment
        .iter()
        .find(|e| e.equipment_id == "db-bow")
        .unwrap();
    assert!(bow.at_level(IconicLevel::V).is_some());
    assert!(bow.at_level(IconicLevel::IV).is_some());
    assert!(bow.at_level(IconicLevel::I).is_none());
}

/// Test that invalid roles and malformed JSON are rejected.
#[test]
fn test_invalid_reference_is_rejected() {
    let zero_reference = REFERENCE.replace(
        "\"highest_score_reference\": 100",
        "\"highest_score_reference\": 0",
    );
    assert!(matches!(
        ReferenceData::from_json(&zero_reference),
        Err(ScoreError::InvalidRole { .. })
    ));

    assert!(matches!(
        ReferenceData::from_json("{\"roles\": 5}"),
        Err(ScoreError::InvalidReferenceData(_))
    ));
}

/// Test that an unknown role fails resolution.
#[test]
fn test_unknown_role_is_an_error() {
    let selection = BuildSelection {
        role_id: "SIEGE RALLY".into(),
        ..Default::default()
    };
    assert_eq!(
        reference().resolve(&selection),
        Err(ScoreError::RoleNotFound("SIEGE RALLY".into()))
    );
}

/// Test that unknown selections are dropped during resolution.
#[test]
fn test_resolve_skips_unknown_selections() {
    let inputs = reference().resolve(&archer_selection()).unwrap();

    assert_eq!(inputs.equipment.len(), 2);
    assert!(inputs.equipment.iter().all(|p| p.iconic_level == IconicLevel::V));
    assert_eq!(inputs.set_bonuses.len(), 1);

    let ids: Vec<&str> = inputs
        .formation
        .inscriptions
        .iter()
        .map(|i| i.inscription_id.as_str())
        .collect();
    assert_eq!(ids, vec!["fearless", "rallying-cry", "bulwark"]);
    assert_eq!(inputs.formation.formation.as_ref().unwrap().name, "Wedge");
}

/// Test a full resolve-then-evaluate run.
#[test]
fn test_resolve_then_evaluate() {
    let inputs = reference().resolve(&archer_selection()).unwrap();
    let result = evaluate(&inputs);

    let layer_1 = &result.layer_1.stats;
    assert_eq!(layer_1.attack, 11.0);
    assert_eq!(layer_1.all_dmg, 2.0);
    assert_eq!(layer_1.na, 1.0);
    assert_eq!(layer_1.skill_dmg, 3.0);
    assert_eq!(result.layer_1.score, 24.0);

    let layer_2 = &result.layer_2.layer;
    assert_eq!(layer_2.stats.attack, 13.0);
    assert_eq!(layer_2.stats.defense, 6.0);
    assert_eq!(layer_2.stats.skill_dmg, 3.0);
    assert_eq!(layer_2.score, 22.0);
    assert_eq!(result.layer_2.set_bonuses[0].pieces_count, 2);

    let layer_3 = &result.layer_3;
    assert_eq!(layer_3.stats.attack, 6.0);
    assert_eq!(layer_3.stats.defense, 0.0);
    assert_eq!(layer_3.stats.skill_dmg, 3.0);
    assert_eq!(layer_3.score, 7.0);

    assert_eq!(result.summary.total_score, 53.0);
    assert_eq!(result.summary.percentage_of_max, 26.5);
    assert_eq!(result.summary.tier, Tier::C);
}

/// Test inscription scoping for a garrison role.
#[test]
fn test_garrison_role_uses_garrison_inscriptions() {
    let selection = BuildSelection {
        role_id: "INF GARRISON - DEFENSE".into(),
        civilisation: Some("Korea".into()),
        ..archer_selection()
    };
    let inputs = reference().resolve(&selection).unwrap();
    assert_eq!(inputs.player.civilisation.attack, 1.0);

    let result = evaluate(&inputs);
    assert_eq!(result.layer_3.stats.defense, 3.0);
    assert_eq!(result.layer_3.stats.skill_dmg, 0.0);
    assert_eq!(result.layer_3.multipliers, Some(DamageMultipliers::NONE));
    assert_eq!(result.layer_3.score, 3.0);
}

/// Test that null stat fields in reference data load as zero.
#[test]
fn test_null_stat_fields_do_not_reject_reference() {
    let data = ReferenceData::from_json(
        r#"{"vip_bonuses": [{"vip_level": 1, "attack": 5, "skill_dmg": null}]}"#,
    )
    .unwrap();
    assert_eq!(data.vip_bonuses[0].stats.attack, 5.0);
    assert_eq!(data.vip_bonuses[0].stats.skill_dmg, 0.0);
}
