use competeintel_core::Environment;

use super::*;

fn test_config(mock_seed: u64, mock_segment_size: usize) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        log_level: "warn".to_string(),
        api_title: "CompeteIntel API".to_string(),
        api_version: "1.0.0".to_string(),
        cors_origins: Vec::new(),
        mock_seed,
        mock_segment_size,
    }
}

fn run(args: &[&str]) -> anyhow::Result<Value> {
    let cli = Cli::try_parse_from(args.iter().copied()).expect("expected valid cli args");
    execute(&cli.command, &test_config(42, 30))
}

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from(["competeintel-cli", "search", "Padaria", "São Paulo"])
        .expect("expected valid cli args");

    let Commands::Search(args) = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(args.category, "Padaria");
    assert_eq!(args.city, "São Paulo");
    assert!((args.radius_km - DEFAULT_RADIUS_KM).abs() < f64::EPSILON);
    assert_eq!(args.max_results, DEFAULT_MAX_RESULTS);
    assert!(args.lat.is_none());
}

#[test]
fn parses_search_filters() {
    let cli = Cli::try_parse_from([
        "competeintel-cli",
        "search",
        "Cafeteria",
        "Recife",
        "--radius-km",
        "2.5",
        "--cep",
        "50000-000",
        "--business-name",
        "Café Central",
        "--lat",
        "-8.05",
        "--lng",
        "-34.88",
    ])
    .expect("expected valid cli args");

    let Commands::Search(args) = cli.command else {
        panic!("expected search command");
    };
    let req = args.to_request();
    assert!((req.radius_km - 2.5).abs() < f64::EPSILON);
    assert_eq!(req.cep.as_deref(), Some("50000-000"));
    assert_eq!(req.business_name.as_deref(), Some("Café Central"));
    let origin = req.coordinates.expect("coordinates");
    assert!((origin.latitude + 8.05).abs() < f64::EPSILON);
}

#[test]
fn lat_without_lng_is_rejected() {
    let result = Cli::try_parse_from([
        "competeintel-cli",
        "search",
        "Padaria",
        "Curitiba",
        "--lat",
        "-25.4",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_cnpj_command() {
    let cli = Cli::try_parse_from(["competeintel-cli", "cnpj", "11222333000181"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Cnpj { ref cnpj } if cnpj == "11222333000181"));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["competeintel-cli"]).is_err());
}

#[test]
fn categories_output_has_eight_entries() {
    let value = execute(&Commands::Categories, &test_config(42, 30)).expect("categories");
    assert_eq!(value["categories"].as_array().map(Vec::len), Some(8));
}

#[test]
fn cities_output_has_ten_entries() {
    let value = execute(&Commands::Cities, &test_config(42, 30)).expect("cities");
    assert_eq!(value["cities"].as_array().map(Vec::len), Some(10));
    assert_eq!(value["cities"][1]["state"], "RJ");
}

#[test]
fn search_rejects_small_radius() {
    let err = run(&[
        "competeintel-cli",
        "search",
        "Padaria",
        "São Paulo",
        "--radius-km",
        "0.3",
    ])
    .expect_err("radius below minimum");
    assert!(format!("{err:#}").contains("radius_km"));
}

#[test]
fn search_prints_competitors_and_analytics() {
    let value = run(&[
        "competeintel-cli",
        "search",
        "Padaria",
        "São Paulo",
        "--seed",
        "7",
        "--segment-size",
        "12",
    ])
    .expect("search");
    assert!(value["competitors"].is_array());
    assert!(value["analytics"]["summary"].is_string());
}

#[test]
fn catalog_settings_come_from_config_unless_overridden() {
    let cli = Cli::try_parse_from(["competeintel-cli", "search", "Padaria", "São Paulo"])
        .expect("expected valid cli args");
    let from_config = execute(&cli.command, &test_config(7, 3)).expect("search");
    assert!(from_config["total_found"].as_u64().is_some_and(|n| n <= 3));

    let overridden = run(&[
        "competeintel-cli",
        "search",
        "Padaria",
        "São Paulo",
        "--seed",
        "7",
        "--segment-size",
        "3",
    ])
    .expect("search");
    assert_eq!(from_config, overridden);
}

#[test]
fn zero_segment_size_override_is_rejected() {
    let err = run(&[
        "competeintel-cli",
        "search",
        "Padaria",
        "São Paulo",
        "--segment-size",
        "0",
    ])
    .expect_err("empty catalog");
    assert!(err.to_string().contains("--segment-size"));
}

#[test]
fn cnpj_with_bad_digits_fails() {
    let err = execute(
        &Commands::Cnpj {
            cnpj: "11222333000100".to_string(),
        },
        &test_config(42, 30),
    )
    .expect_err("bad check digits");
    assert!(err.to_string().contains("invalid CNPJ"));
}
