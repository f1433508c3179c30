//! Campaign runs end to end: YAML in, report and regression-seed artifact out.

use test_amplifier::prelude::*;

const CAMPAIGN: &str = r#"
name: "pow_edge_cases"
description: "Amplify powDecimal inputs toward edge-case classes"
seed:
  base: "0"
  exponent: 0
iterations: 1000
rng_seed: 42
"#;

#[test]
fn test_campaign_run_produces_report() {
    let config = parse_campaign(CAMPAIGN).unwrap();
    let report = CampaignExecutor::new().execute(&config).unwrap();

    assert!(report.success);
    assert_eq!(report.campaign_name, "pow_edge_cases");
    assert_eq!(report.iterations, 1000);
    assert_eq!(report.rng_seed, 42);
    assert!(report.best_fitness >= FitnessScore::new(2));
    assert!(report.best_fitness >= report.seed_fitness);
    // 0^0 survives as the winner and probes to one.
    assert_eq!(report.probe_result, Decimal::ONE);
    assert!(!report.log.is_empty());
}

#[test]
fn test_campaign_artifact_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = parse_campaign(CAMPAIGN).unwrap();
    let report = CampaignExecutor::new()
        .with_artifact_dir(temp_dir.path())
        .execute(&config)
        .unwrap();

    let path = report.artifact_path.expect("artifact should be saved");
    let artifact = load_artifact(&path).unwrap();

    validate_artifact(&artifact).unwrap();
    assert_eq!(artifact.metadata.campaign_name, "pow_edge_cases");
    assert_eq!(artifact.metadata.rng_seed, Some(42));
    assert_eq!(artifact.metadata.iterations, 1000);
    assert_eq!(artifact.best_case, report.best_case);
    assert_eq!(artifact.best_fitness, report.best_fitness);

    let cmd = get_replay_command(&artifact);
    assert!(cmd.contains("AMPLIFIER_TEST_SEED=0x000000000000002a"));
    assert!(cmd.contains("pow_edge_cases"));
}

#[test]
fn test_campaign_reruns_identically() {
    let config = parse_campaign(CAMPAIGN).unwrap();
    let a = CampaignExecutor::new().execute(&config).unwrap();
    let b = CampaignExecutor::new().execute(&config).unwrap();

    assert_eq!(a.best_case, b.best_case);
    assert_eq!(a.best_fitness, b.best_fitness);
    assert_eq!(a.improvements, b.improvements);
}

#[test]
fn test_campaign_with_low_scoring_seed_improves() {
    let config = parse_campaign(
        r#"
name: "uninteresting_seed"
seed:
  base: "321.654"
  exponent: 9
iterations: 1000
rng_seed: 7
"#,
    )
    .unwrap();

    let report = CampaignExecutor::new().execute(&config).unwrap();
    assert_eq!(report.seed_fitness, FitnessScore::ZERO);
    assert!(report.best_fitness > FitnessScore::ZERO);
    assert!(!report.improvements.is_empty());

    // The trajectory climbs strictly.
    let mut last = report.seed_fitness;
    for step in &report.improvements {
        assert!(step.fitness > last);
        last = step.fitness;
    }
    assert_eq!(last, report.best_fitness);
}

#[test]
fn test_campaign_rejects_zero_iterations() {
    let err = parse_campaign(
        r#"
name: "no_budget"
seed:
  base: "0"
  exponent: 0
iterations: 0
"#,
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AmplifierError>(),
        Some(AmplifierError::InvalidArgument(_))
    ));
}

#[test]
fn test_campaign_rejects_seed_outside_domain() {
    for base in ["1e77", "-5", "garbage"] {
        let yaml = format!(
            r#"
name: "bad_seed"
seed:
  base: "{base}"
  exponent: 0
iterations: 10
"#
        );
        assert!(
            parse_campaign(&yaml).is_err(),
            "seed base {:?} should be rejected",
            base
        );
    }
}
