use crate::analysis::rating::Arrow;
use crate::analysis::summary::{EfficiencyValue, Position, ProfileSummary, RatingBlock};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    stat: String,
    value: String,
}

#[derive(Tabled)]
struct RatingRow {
    category: String,
    #[tabled(rename = "position")]
    position_now: String,
    #[tabled(rename = "before")]
    position_before: String,
    #[tabled(rename = "value")]
    value_now: String,
    #[tabled(rename = "before")]
    value_before: String,
    trend: String,
}

#[derive(Tabled)]
struct SupplyRow {
    supply: String,
    usages: String,
}

fn stat(stat: &str, value: impl ToString) -> StatRow {
    StatRow {
        stat: stat.to_string(),
        value: value.to_string(),
    }
}

fn position(position: Position) -> String {
    match position {
        Position::Unranked => "0".to_string(),
        Position::Ranked(n) => n.to_string(),
    }
}

fn trend(arrow: Arrow) -> String {
    match arrow {
        Arrow::Up => arrow.symbol().green().to_string(),
        Arrow::Down => arrow.symbol().red().to_string(),
        Arrow::Flat => arrow.symbol().dimmed().to_string(),
    }
}

fn rating_row(category: &str, block: &RatingBlock) -> RatingRow {
    RatingRow {
        category: category.to_string(),
        position_now: position(block.position.now),
        position_before: position(block.position.before),
        value_now: block.value.now.to_string(),
        value_before: block.value.before.to_string(),
        trend: trend(block.value.arrow),
    }
}

pub fn display_profile_summary(summary: &ProfileSummary) {
    println!(
        "\n{}",
        format!("🪖 {} ({})", summary.name, summary.rank).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let playtime = format!(
        "{}h {}m {}s",
        summary.playtime.hours, summary.playtime.minutes, summary.playtime.seconds
    );
    let rows = vec![
        stat("Premium", &summary.premium),
        stat("Rank insignia", &summary.rank_img),
        stat("Experience", format!("{} / {}", summary.exp.exp_now, summary.exp.exp_next)),
        stat("Experience left", summary.exp.exp_left),
        stat("Crystals earned", summary.crystals),
        stat("Golds caught", summary.golds),
        stat("Kills", summary.kills),
        stat("Deaths", summary.deaths),
        stat("K/D", summary.kd.to_string()),
        stat("Gear score", summary.gear_score),
        stat("Turrets played", summary.turrets_played),
        stat("Resistance modules", summary.resistance_modules),
        stat("Playtime", playtime),
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "📊 RATINGS".bold().cyan());
    let rating = &summary.rating;
    let efficiency = match rating.efficiency.value.now {
        EfficiencyValue::Unranked => "0".to_string(),
        EfficiencyValue::Value(n) => n.to_string(),
    };
    let rows = vec![
        rating_row("Experience", &rating.experience),
        rating_row("Golds", &rating.golds),
        rating_row("Crystals", &rating.crystals),
        RatingRow {
            category: "Efficiency".to_string(),
            position_now: position(rating.efficiency.position.now),
            position_before: "-".to_string(),
            value_now: efficiency,
            value_before: "-".to_string(),
            trend: "-".to_string(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "🧰 SUPPLIES".bold().cyan());
    if summary.supplies.usages.is_empty() {
        println!("{}", "No supplies used yet".yellow());
    } else {
        let mut rows: Vec<SupplyRow> = summary
            .supplies
            .usages
            .iter()
            .map(|(name, usages)| SupplyRow {
                supply: name.clone(),
                usages: usages.to_string(),
            })
            .collect();
        rows.push(SupplyRow {
            supply: "Total".bold().to_string(),
            usages: summary.supplies.total_usages.to_string().bold().to_string(),
        });

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    println!();
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
