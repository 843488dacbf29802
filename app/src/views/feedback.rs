use super::{read_line, Flow};
use crate::{errors::AppResult, session::Session};
use studio_mentor::AnalysisResult;

/// Tier classification for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Mid,
    Low,
}

impl ScoreTier {
    /// `>= 80` high, `>= 60` mid, else low.
    #[must_use]
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Mid
        } else {
            Self::Low
        }
    }

    /// Accent color for the tier, as a hex code. Terminal output stays
    /// monochrome; richer frontends read this.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#0df2f2",
            Self::Mid => "#facc15",
            Self::Low => "#f87171",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
        }
    }
}

pub async fn run(session: &mut Session) -> AppResult<Flow> {
    if let Some(result) = session.last_analysis() {
        render(result);
    }

    loop {
        let input = read_line("[n]ew quest, [d]ashboard > ")?;
        match input.to_lowercase().as_str() {
            "n" => {
                println!();
                println!("  Generating your path...");
                session.request_new_challenge().await?;
                return Ok(Flow::Continue);
            }
            "d" => {
                session.close_feedback()?;
                return Ok(Flow::Continue);
            }
            _ => println!("Unknown choice."),
        }
    }
}

fn render(result: &AnalysisResult) {
    let tier = ScoreTier::for_score(result.overall_score);
    println!();
    println!("  AI Performance Scan");
    println!();
    println!(
        "  Skill Index: {} / 100 ({})",
        result.overall_score,
        tier.label()
    );
    println!("  {}", result.potential_status);
    println!("  Evaluation based on booking intent & aesthetic.");
    println!();
    println!("  Category Breakdown");
    for (label, category) in result.breakdown.entries() {
        println!(
            "  {label:<12} {:>3}/100 [{}]",
            category.score,
            score_bar(category.score)
        );
        println!("               {}", category.feedback);
    }
}

fn score_bar(score: u8) -> String {
    let filled = (usize::from(score) / 5).min(20);
    format!("{}{}", "#".repeat(filled), "-".repeat(20 - filled))
}
