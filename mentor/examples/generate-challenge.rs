use dotenvy::dotenv;

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let mentor = common::get_mentor();

    let specialty = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Tattoo Studio".to_string());

    let challenge = mentor
        .generate_challenge(&specialty)
        .await
        .expect("mentor.generate_challenge failed");

    println!("{challenge:#?}");
}
