use super::{read_line, Flow};
use crate::{
    errors::{AppResult, SessionError},
    session::Session,
    submission::SubmissionForm,
};
use std::fs;
use studio_mentor::{Challenge, ImageAttachment};
use tracing::warn;

pub async fn run(session: &mut Session) -> AppResult<Flow> {
    let Some(challenge) = session.active_challenge() else {
        return Err(SessionError::NoActiveChallenge.into());
    };
    let platform = challenge.platform;
    render_brief(challenge);

    let mut form = SubmissionForm::new();

    loop {
        render_form(&form);
        let input = read_line("[c]aption, [i]mage, [s]ubmit, [b]ack > ")?;
        match input.to_lowercase().as_str() {
            "c" => {
                form.caption = read_line("Caption: ")?;
            }
            "i" => {
                let path = read_line("Image path (enter to clear): ")?;
                if path.is_empty() {
                    form.image = None;
                    continue;
                }
                match fs::read(&path) {
                    Ok(bytes) => match ImageAttachment::from_bytes(&bytes) {
                        Ok(attachment) => {
                            println!("Attached {} ({} bytes).", attachment.mime_type, bytes.len());
                            form.image = Some(attachment);
                        }
                        Err(error) => println!("Could not attach: {error}"),
                    },
                    Err(error) => println!("Could not read {path}: {error}"),
                }
            }
            "s" => {
                if !form.can_submit(platform) {
                    if form.caption.trim().is_empty() {
                        println!("Write a caption first.");
                    } else {
                        println!("{platform} posts need an image. Attach one first.");
                    }
                    continue;
                }

                println!();
                println!("  Analyzing your work...");
                println!("  Our AI mentor is evaluating your visuals, copy, and strategy.");
                match session
                    .submit_for_analysis(&form.caption, form.image.as_ref())
                    .await
                {
                    Ok(()) => return Ok(Flow::Continue),
                    Err(error) => {
                        warn!(%error, "analysis failed");
                        println!();
                        println!("  Something went wrong with the AI analysis. Please try again.");
                    }
                }
            }
            "b" => {
                session.abandon_challenge()?;
                return Ok(Flow::Continue);
            }
            _ => println!("Unknown choice."),
        }
    }
}

fn render_brief(challenge: &Challenge) {
    println!();
    println!("  Training Ground");
    println!();
    println!("  The Brief: {}  [{}]", challenge.title, challenge.platform);
    println!("  {}", challenge.description);
    for requirement in &challenge.requirements {
        println!("    - {requirement}");
    }
}

fn render_form(form: &SubmissionForm) {
    println!();
    if form.caption.is_empty() {
        println!("  Caption: (write a caption that stops the scroll)");
    } else {
        println!("  Caption: {}", form.caption);
    }
    let image = form
        .image
        .as_ref()
        .map_or("none", |attachment| attachment.mime_type.as_str());
    println!("  {}  |  image: {image}", form.caption_counter());
}
