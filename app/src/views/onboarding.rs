use super::{read_choice, read_line};
use crate::{
    errors::AppResult,
    onboarding::{OnboardingForm, SPECIALTIES},
    profile::SkillLevel,
    session::Session,
};

/// Drive the onboarding wizard to completion and enter the dashboard.
pub fn run(session: &mut Session) -> AppResult<()> {
    println!();
    println!("  STUDIO SOCIAL");
    println!("  Master the art of booking via AI mentorship.");
    println!();

    let mut form = OnboardingForm::new();

    println!("What's your name?");
    loop {
        form.name = read_line("Name: ")?;
        if form.can_advance() {
            break;
        }
        println!("A name is required to continue.");
    }
    form.studio_name = read_line("Studio name (optional): ")?;
    form.advance();

    println!();
    println!("What's your specialty?");
    let index = read_choice("Specialty [1]: ", &SPECIALTIES, 0)?;
    form.specialty = SPECIALTIES[index].to_string();
    form.advance();

    println!();
    println!("Current skill level?");
    let levels: Vec<&str> = SkillLevel::ALL.iter().map(|l| l.as_str()).collect();
    let index = read_choice("Level [1]: ", &levels, 0)?;
    form.level = SkillLevel::ALL[index];

    // The wizard is on its last step here, so finish() always yields.
    if let Some(profile) = form.finish() {
        session.complete_onboarding(profile)?;
    }
    Ok(())
}
