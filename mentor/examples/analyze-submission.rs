use dotenvy::dotenv;
use studio_mentor::{ImageAttachment, Platform};

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let image_url = "https://picsum.photos/seed/studio/800/600";
    let image_res = reqwest::get(image_url)
        .await
        .expect("failed to fetch image");
    let image_bytes = image_res.bytes().await.expect("failed to read bytes");
    let image = ImageAttachment::from_bytes(&image_bytes).expect("unrecognized image format");

    let mentor = common::get_mentor();

    let analysis = mentor
        .analyze_submission(
            Platform::Instagram,
            "Fresh balayage for the weekend. Book your spot below!",
            Some(&image),
        )
        .await
        .expect("mentor.analyze_submission failed");

    println!("{analysis:#?}");
}
