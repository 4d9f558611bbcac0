use genalign::config::{AlignConfig, ConfigManager, LengthPolicy};
use genalign::GenalignError;
use std::io::Write;

#[test]
fn test_defaults_when_no_file() {
    let manager = ConfigManager::new();
    assert_eq!(manager.get().align, AlignConfig::default());
    assert!((manager.get().align.percent_crossover() - 0.7).abs() < 1e-9);
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let manager = ConfigManager::from_toml_str(
        r#"
        [align]
        population_size = 40
        num_generations = 5
        length_policy = "strict"
        seed = 99
        "#,
    )
    .unwrap();
    let align = &manager.get().align;
    assert_eq!(align.population_size, 40);
    assert_eq!(align.num_generations, 5);
    assert_eq!(align.length_policy, LengthPolicy::Strict);
    assert_eq!(align.seed, Some(99));
    assert_eq!(align.mutation_rate, AlignConfig::default().mutation_rate);
}

#[test]
fn test_invalid_toml_values_are_rejected() {
    let result = ConfigManager::from_toml_str(
        r#"
        [align]
        mutation_rate = 1.5
        "#,
    );
    assert!(matches!(result, Err(GenalignError::Configuration(_))));
}

#[test]
fn test_update_keeps_previous_config_on_error() {
    let mut manager = ConfigManager::new();
    let result = manager.update(|c| c.align.population_size = 0);
    assert!(result.is_err());
    assert_eq!(manager.get().align.population_size, 100);

    manager.update(|c| c.align.population_size = 50).unwrap();
    assert_eq!(manager.get().align.population_size, 50);
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("genalign.toml");

    let mut manager = ConfigManager::new();
    manager
        .update(|c| {
            c.align.population_size = 64;
            c.align.percent_gene_swap = 0.25;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let reloaded = ConfigManager::from_toml_str(&contents).unwrap();
    assert_eq!(reloaded.get(), manager.get());
}

// The only test here that reads the environment.
#[test]
fn test_load_layers_file_then_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("genalign.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[align]\npopulation_size = 40\nnum_generations = 7").unwrap();

    std::env::set_var("GENALIGN_ALIGN__NUM_GENERATIONS", "12");
    let loaded = ConfigManager::load(Some(&path));
    std::env::remove_var("GENALIGN_ALIGN__NUM_GENERATIONS");

    let manager = loaded.unwrap();
    assert_eq!(manager.get().align.population_size, 40);
    assert_eq!(manager.get().align.num_generations, 12);

    let missing = ConfigManager::load(Some(&dir.path().join("absent.toml")));
    assert!(matches!(missing, Err(GenalignError::Configuration(_))));
}
