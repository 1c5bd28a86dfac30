//! `rollcall config show|init`.

use predicates::prelude::*;
use rollcall_testing::TestWorld;

#[test]
fn test_config_show_defaults() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "show"])?;
    assert!(result.success());

    let shown: toml::Value = toml::from_str(result.stdout())?;
    assert_eq!(shown["pagination"]["page_size"].as_integer(), Some(30));
    assert_eq!(shown["pagination"]["window"]["style"].as_str(), Some("sliding"));
    assert_eq!(shown["filter"]["delay_ms"].as_integer(), Some(200));

    Ok(())
}

#[test]
fn test_config_show_reports_repairs() -> anyhow::Result<()> {
    let world = TestWorld::new().with_config("[pagination]\npage_size = 25\n");

    let result = world.run(&["config", "show"])?;
    assert!(result.success());

    let shown: toml::Value = toml::from_str(result.stdout())?;
    let options: Vec<i64> = shown["pagination"]["page_size_options"]
        .as_array()
        .map(|values| values.iter().filter_map(toml::Value::as_integer).collect())
        .unwrap_or_default();
    assert_eq!(options, vec![30, 50, 100, 25]);
    assert!(predicate::str::contains("not in page_size_options").eval(result.stderr()));

    Ok(())
}

#[test]
fn test_config_init_writes_once() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "init"])?;
    assert!(result.success());
    assert!(world.config_path().exists());

    let result = world.run(&["config", "init"])?;
    assert!(!result.success());
    assert!(predicate::str::contains("--force").eval(result.stderr()));

    let result = world.run(&["config", "init", "--force"])?;
    assert!(result.success());

    Ok(())
}

#[test]
fn test_config_env_var_is_ignored_when_flag_given() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_config("[filter]\ndelay_ms = 5\n")
        .with_env("ROLLCALL_CONFIG", "/nonexistent/rollcall.toml");

    let result = world.run(&["config", "show"])?;
    let shown: toml::Value = toml::from_str(result.stdout())?;
    assert_eq!(shown["filter"]["delay_ms"].as_integer(), Some(5));

    Ok(())
}
