//! End-to-end tests for the CLI commands.
//!
//! Each test writes a JSON document to a temporary file and runs the
//! command in-process.

use clap::Parser;
use recipecost::cmd::{cost_cmd, menu_cmd};
use recipecost_engine::CostError;
use recipecost_menu::MenuError;
use std::io::Write;
use tempfile::NamedTempFile;

const BREAD: &str = r#"{
    "recipes": [{
        "id": "bread",
        "inputs": [
            {"item": {"id": "flour", "unitCost": "0.02"}, "quantity": "500", "unit": "g"},
            {"item": {"id": "water", "unitCost": "0.001"}, "quantity": "300", "unit": "ml"}
        ],
        "output": {"item": "loaf", "quantity": "10", "unit": "unit"},
        "costConfig": {"overheadPercentage": "10"}
    }],
    "options": {}
}"#;

const MENU: &str = r#"{
    "recipes": [
        {"id": "burger", "inputs": [{"item": {"id": "patty", "unitCost": "3"}, "quantity": "1", "unit": "u"}],
         "output": {"item": "burger", "quantity": "1", "unit": "u"}},
        {"id": "salad", "inputs": [{"item": {"id": "greens", "unitCost": "4"}, "quantity": "1", "unit": "u"}],
         "output": {"item": "salad", "quantity": "1", "unit": "u"}}
    ],
    "sales": [
        {"recipeId": "burger", "name": "Burger", "unitsSold": 120, "sellingPrice": "12"},
        {"recipeId": "salad", "name": "Salad", "unitsSold": 30, "sellingPrice": "9"},
        {"recipeId": "pasta", "unitsSold": 12, "sellingPrice": "14"}
    ],
    "config": {"centralTendency": "median"}
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run_cost(contents: &str, extra: &[&str]) -> anyhow::Result<String> {
    let file = write_temp(contents);
    let path = file.path().to_str().unwrap();
    let mut argv = vec!["recipecost-cost", path];
    argv.extend_from_slice(extra);
    let args = cost_cmd::Args::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    cost_cmd::execute(&args, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn run_menu(contents: &str, extra: &[&str]) -> anyhow::Result<String> {
    let file = write_temp(contents);
    let path = file.path().to_str().unwrap();
    let mut argv = vec!["recipecost-menu", path];
    argv.extend_from_slice(extra);
    let args = menu_cmd::Args::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    menu_cmd::execute(&args, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_cost_text_report() {
    let text = run_cost(BREAD, &[]).unwrap();
    assert!(text.contains("Recipe: bread"));
    assert!(text.contains("11.33"));
    assert!(!text.contains("Profitability"));
}

#[test]
fn test_cost_json_with_selling_price() {
    let json = run_cost(BREAD, &["--format", "json", "--selling-price", "4"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["recipeId"], "bread");
    assert_eq!(value[0]["totalCost"], "11.33");
    assert_eq!(value[0]["profitability"]["sellingPrice"], "4");
}

#[test]
fn test_cost_scaled() {
    let json = run_cost(BREAD, &["-f", "json", "--scale", "2"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["totalCost"], "22.66");
    assert_eq!(value[0]["costPerUnit"], "1.133");
}

const TRIMMED: &str = r#"{
    "recipes": [{
        "id": "trimmed",
        "inputs": [
            {"item": "trim", "quantity": "100", "unit": "g", "wastePercentage": "20", "unitCostOverride": "0.2"},
            {"item": {"id": "salt", "unitCost": "5"}, "quantity": "1", "unit": "g"}
        ],
        "output": {"item": "trimmed", "quantity": "1", "unit": "unit"}
    }]
}"#;

#[test]
fn test_cost_quick_estimate() {
    let text = run_cost(TRIMMED, &["--quick"]).unwrap();
    assert!(text.starts_with("Quick Estimates\n"));
    // 100 x 0.2 / 0.8; salt has no override
    assert!(text.contains(&format!("{:<24} {:>12}", "trimmed", "25.00")));

    let json = run_cost(TRIMMED, &["--quick", "-f", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["recipeId"], "trimmed");
    assert_eq!(value[0]["estimatedCost"], "25");
}

#[test]
fn test_cost_quick_estimate_without_overrides() {
    let text = run_cost(BREAD, &["--quick"]).unwrap();
    assert!(text.contains(&format!("{:<24} {:>12}", "bread", "0.00")));
}

#[test]
fn test_cost_single_recipe_document() {
    let recipe = r#"{"id": "tea", "inputs": [{"item": "leaves", "quantity": "2", "unit": "g", "unitCostOverride": "0.5"}],
                    "output": {"item": "tea", "quantity": "1", "unit": "cup"}}"#;
    let json = run_cost(recipe, &["-f", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["recipeId"], "tea");
    assert_eq!(value[0]["totalCost"], "1");
}

#[test]
fn test_cost_invalid_percentage_is_a_calculation_error() {
    let bad = r#"{"recipes": [{"id": "bad",
        "inputs": [{"item": {"id": "x", "unitCost": "1"}, "quantity": "1", "unit": "u", "yieldPercentage": "150"}],
        "output": {"item": "bad", "quantity": "1", "unit": "u"}}]}"#;
    let err = run_cost(bad, &[]).unwrap_err();
    assert!(err.downcast_ref::<CostError>().is_some());
}

#[test]
fn test_cost_malformed_json_is_an_io_error() {
    let err = run_cost("{not json", &[]).unwrap_err();
    assert!(err.downcast_ref::<CostError>().is_none());
    assert!(format!("{err:#}").contains("failed to parse"));
}

#[test]
fn test_quick_conflicts_with_scale() {
    let argv = ["recipecost-cost", "f.json", "--quick", "--scale", "2"];
    assert!(cost_cmd::Args::try_parse_from(argv).is_err());
}

#[test]
fn test_menu_text_report() {
    let text = run_menu(MENU, &[]).unwrap();
    assert!(text.starts_with("Menu Engineering (median)"));
    assert!(text.contains("Burger"));
    assert!(text.contains("Consider discontinuation (salad)"));
    assert!(text.contains("Skipped sales with no recipe cost: pasta"));
}

#[test]
fn test_menu_json() {
    let json = run_menu(MENU, &["--format", "json", "--central-tendency", "mean"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["items"][0]["recipeId"], "burger");
    assert_eq!(value["items"][0]["category"], "star");
    assert_eq!(value["items"][1]["category"], "dog");
    assert_eq!(value["unmatchedRecipeIds"][0], "pasta");
    assert_eq!(value["summary"]["totalUnitsSold"], 150);
}

#[test]
fn test_menu_rejects_bad_popularity_factor() {
    let err = run_menu(MENU, &["--popularity-factor", "0"]).unwrap_err();
    assert!(err.downcast_ref::<MenuError>().is_some());
}

#[test]
fn test_missing_file() {
    let args =
        menu_cmd::Args::try_parse_from(["recipecost-menu", "/nonexistent/menu.json"]).unwrap();
    let err = menu_cmd::execute(&args, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read"));
}
