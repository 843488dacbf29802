use super::{read_line, Flow};
use crate::{errors::AppResult, profile::ANALYSIS_XP_REWARD, session::Session};

/// Static academy modules shown under the quest card.
const ACADEMY_PATH: [(&str, &str, u8); 3] = [
    ("The Hook Factor", "Module 1", 100),
    ("Lighting Mastery", "Module 2", 65),
    ("Direct Booking CTAs", "Module 3", 0),
];

/// Render a count with thousands separators, e.g. `1250` -> `"1,250"`.
#[must_use]
pub fn format_xp(xp: u64) -> String {
    let digits = xp.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub async fn run(session: &mut Session) -> AppResult<Flow> {
    if session.needs_challenge() {
        println!();
        println!("  Generating your path...");
        session.reconcile().await;
    }

    render(session);

    loop {
        let has_challenge = session.active_challenge().is_some();
        let input = if has_challenge {
            read_line("[s]tart training, [q]uit > ")?
        } else {
            read_line("[r]egenerate quest, [q]uit > ")?
        };
        match input.to_lowercase().as_str() {
            "s" if has_challenge => {
                session.start_challenge()?;
                return Ok(Flow::Continue);
            }
            "r" if !has_challenge => {
                println!();
                println!("  Generating your path...");
                session.load_new_challenge().await;
                return Ok(Flow::Continue);
            }
            "q" => return Ok(Flow::Quit),
            _ => println!("Unknown choice."),
        }
    }
}

fn render(session: &Session) {
    let Some(profile) = session.profile() else {
        return;
    };

    println!();
    println!("  Welcome back");
    if profile.studio_name.is_empty() {
        println!("  {}", profile.name);
    } else {
        println!("  {} @ {}", profile.name, profile.studio_name);
    }
    println!();
    println!(
        "  Streak: {} Days    Total XP: {}",
        profile.streak,
        format_xp(profile.xp)
    );
    println!();
    println!("  Daily Quest    LVL UP +{ANALYSIS_XP_REWARD} XP");
    if let Some(challenge) = session.active_challenge() {
        println!("  [{} Challenge] {}", challenge.platform, challenge.title);
        println!("  {}", challenge.description);
        println!("  {}", challenge.image_url);
        println!("  START TRAINING when ready.");
    } else {
        println!("  No quest loaded. Regenerate to get a new one.");
    }
    println!();
    println!("  Your Academy Path");
    for (title, module, progress) in ACADEMY_PATH {
        println!("  [{}] {title} ({module}, {progress}%)", progress_bar(progress));
    }
}

fn progress_bar(progress: u8) -> String {
    let filled = (usize::from(progress) / 10).min(10);
    format!("{}{}", "#".repeat(filled), "-".repeat(10 - filled))
}
