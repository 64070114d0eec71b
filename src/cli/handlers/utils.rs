use crate::model::{Quadrant, Score, ScoredItem, ScoringMethod};
use colored::Colorize;

/// Format a quadrant with color coding
pub fn format_quadrant(quadrant: Quadrant) -> colored::ColoredString {
    match quadrant {
        Quadrant::QuickWins => "quick_wins".green().bold(),
        Quadrant::MajorProjects => "major_projects".yellow(),
        Quadrant::FillIns => "fill_ins".blue(),
        Quadrant::Questionable => "questionable".red(),
    }
}

/// Format a scoring method with color coding
pub fn format_method(method: ScoringMethod) -> colored::ColoredString {
    match method {
        ScoringMethod::Rice => "rice".magenta(),
        ScoringMethod::ValueEffort => "value_effort".cyan(),
        ScoringMethod::Custom => "custom".white(),
    }
}

/// One-line summary of an item's score
pub fn score_summary(item: &ScoredItem) -> String {
    match &item.score {
        Score::Rice(rice) => format!("{}", rice.score),
        Score::ValueEffort(matrix) => format!(
            "{} ({}/{})",
            format_quadrant(matrix.quadrant),
            matrix.value,
            matrix.effort
        ),
        Score::Custom(value) => format!("{}", value),
    }
}

/// Print a single item with details
pub fn print_item(item: &ScoredItem) {
    println!("{} {}", format!("#{}", item.rank).bold(), item.id.cyan().bold());
    println!("Type:       {}", format!("{}", item.item_type).blue());
    println!("Method:     {}", format_method(item.method()));

    match &item.score {
        Score::Rice(rice) => {
            println!("Reach:      {}", rice.reach);
            println!("Impact:     {}", rice.impact);
            println!("Confidence: {}", rice.confidence);
            println!("Effort:     {}", rice.effort);
            println!("Score:      {}", rice.score.to_string().bold());
        }
        Score::ValueEffort(matrix) => {
            println!("Value:      {} ({})", matrix.value, matrix.value_input);
            println!("Effort:     {} ({})", matrix.effort, matrix.effort_input);
            println!("Quadrant:   {}", format_quadrant(matrix.quadrant));
        }
        Score::Custom(value) => {
            println!("Score:      {}", value.to_string().bold());
        }
    }
}

/// Print items in the given order (compact format)
pub fn print_item_list(items: &[&ScoredItem]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    for item in items {
        println!(
            "{:>3}. {} [{}] {} {}",
            item.rank,
            item.id.cyan(),
            format!("{}", item.item_type).blue(),
            format_method(item.method()),
            score_summary(item)
        );
    }
}
