//! Plain-text reports.

use crate::cmd::cost_cmd::QuickEstimate;
use anyhow::Result;
use recipecost_core::{RecipeCostResult, RecipeProfitability};
use recipecost_menu::{MenuEngineeringAnalysis, MenuEngineeringConfig};
use std::io::Write;

/// Write a cost breakdown for every result.
pub fn write_cost_report<W: Write>(writer: &mut W, results: &[RecipeCostResult]) -> Result<()> {
    if results.is_empty() {
        writeln!(writer, "No recipes found.")?;
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        write_cost_result(writer, result)?;
    }
    Ok(())
}

fn write_cost_result<W: Write>(writer: &mut W, result: &RecipeCostResult) -> Result<()> {
    writeln!(writer, "Recipe: {}", result.recipe_id)?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer, "  Materials:      {:>12.2}", result.materials_cost)?;
    writeln!(writer, "  Labor:          {:>12.2}", result.labor_cost)?;
    writeln!(writer, "  Overhead:       {:>12.2}", result.overhead_cost)?;
    writeln!(writer, "  Packaging:      {:>12.2}", result.packaging_cost)?;
    writeln!(writer, "  Total:          {:>12.2}", result.total_cost)?;
    writeln!(writer, "  Cost per unit:  {:>12.4}", result.cost_per_unit)?;

    if !result.inputs_breakdown.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "  Inputs:")?;
        for line in &result.inputs_breakdown {
            writeln!(
                writer,
                "    {:<20} {:>10} x {:>10.4} = {:>10.2}  ({:>6.2}%)",
                line.item_id,
                line.quantity,
                line.unit_cost,
                line.yield_adjusted_cost,
                line.percentage_of_total
            )?;
        }
    }

    let y = &result.yield_analysis;
    writeln!(writer)?;
    writeln!(
        writer,
        "  Yield: {} of {} ({:.2}%), efficiency {:.2}",
        y.actual_yield, y.theoretical_yield, y.yield_percentage, y.efficiency_score
    )?;

    if let Some(p) = &result.profitability {
        write_profitability(writer, p)?;
    }
    Ok(())
}

fn write_profitability<W: Write>(writer: &mut W, p: &RecipeProfitability) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "  Profitability:")?;
    writeln!(writer, "    Selling price:  {:>12.2}", p.selling_price)?;
    writeln!(
        writer,
        "    Margin:         {:>12.2}  ({:.2}%)",
        p.profit_margin, p.profit_percentage
    )?;
    writeln!(writer, "    Break-even:     {:>12.2}", p.break_even_price)?;
    write!(
        writer,
        "    Food cost:      {:>11.2}%",
        p.actual_food_cost_percentage
    )?;
    match (p.target_food_cost_percentage, p.meets_target()) {
        (Some(target), Some(true)) => writeln!(writer, "  (target {target:.2}%, met)")?,
        (Some(target), _) => writeln!(writer, "  (target {target:.2}%, missed)")?,
        (None, _) => writeln!(writer)?,
    }
    if let Some(price) = p.suggested_price {
        writeln!(writer, "    Suggested:      {price:>12.2}")?;
    }
    Ok(())
}

/// Write the quick material estimate per recipe.
pub fn write_quick_estimates<W: Write>(writer: &mut W, estimates: &[QuickEstimate]) -> Result<()> {
    writeln!(writer, "Quick Estimates")?;
    writeln!(writer, "{}", "=".repeat(40))?;
    for estimate in estimates {
        writeln!(
            writer,
            "{:<24} {:>12.2}",
            estimate.recipe_id, estimate.estimated_cost
        )?;
    }
    Ok(())
}

/// Write the menu engineering report.
pub fn write_menu_report<W: Write>(
    writer: &mut W,
    analysis: &MenuEngineeringAnalysis,
    config: &MenuEngineeringConfig,
) -> Result<()> {
    writeln!(writer, "Menu Engineering ({})", config.central_tendency)?;
    writeln!(writer, "{}", "=".repeat(78))?;
    writeln!(
        writer,
        "Thresholds: popularity {:.2}, profitability {:.2}",
        analysis.popularity_threshold, analysis.profitability_threshold
    )?;
    writeln!(writer)?;

    writeln!(
        writer,
        "{:<22} {:>7} {:>7} {:>9} {:>8} {:>8}  Category",
        "Item", "Units", "Mix %", "Margin", "Pop.", "Prof."
    )?;
    writeln!(writer, "{}", "-".repeat(78))?;
    for item in &analysis.items {
        writeln!(
            writer,
            "{:<22} {:>7} {:>7.2} {:>9.2} {:>8.2} {:>8.2}  {}",
            item.name,
            item.units_sold,
            item.menu_mix_percentage,
            item.contribution_margin,
            item.popularity_score,
            item.profitability_score,
            item.category
        )?;
    }

    let s = &analysis.summary;
    writeln!(writer)?;
    writeln!(writer, "Summary:")?;
    writeln!(writer, "  Items:              {:>12}", s.item_count)?;
    writeln!(writer, "  Units sold:         {:>12}", s.total_units_sold)?;
    writeln!(writer, "  Revenue:            {:>12.2}", s.total_revenue)?;
    writeln!(writer, "  Food cost:          {:>12.2}", s.total_food_cost)?;
    writeln!(writer, "  Contribution:       {:>12.2}", s.total_contribution)?;
    writeln!(
        writer,
        "  Avg. margin:        {:>12.2}",
        s.average_contribution_margin
    )?;
    writeln!(
        writer,
        "  Stars: {}  Cash cows: {}  Puzzles: {}  Dogs: {}",
        s.stars, s.cash_cows, s.puzzles, s.dogs
    )?;

    if !analysis.recommendations.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "Recommendations:")?;
        for rec in &analysis.recommendations {
            writeln!(
                writer,
                "  [{}] {}: {} ({})",
                rec.priority,
                rec.category,
                rec.title,
                rec.recipe_ids.join(", ")
            )?;
            writeln!(writer, "      {}", rec.action)?;
        }
    }

    if !analysis.unmatched_recipe_ids.is_empty() {
        writeln!(writer)?;
        writeln!(
            writer,
            "Skipped sales with no recipe cost: {}",
            analysis.unmatched_recipe_ids.join(", ")
        )?;
    }
    Ok(())
}
