use studio_mentor::{
    mentor_test::{MockAnalysisResult, MockChallengeResult, MockMentor},
    AnalysisResult, CategoryScore, Challenge, ImageAttachment, Mentor, MentorError, Platform,
    ScoreBreakdown,
};

fn challenge(id: &str) -> Challenge {
    Challenge {
        id: id.to_string(),
        title: "Glow Up Reel".to_string(),
        description: "Film a 10-second transformation.".to_string(),
        platform: Platform::TikTok,
        requirements: vec!["Before/after cut".to_string()],
        image_url: format!("https://picsum.photos/seed/{id}/800/600"),
        category: "Video".to_string(),
    }
}

fn analysis(overall_score: u8) -> AnalysisResult {
    let category = |score: u8| CategoryScore {
        score,
        feedback: "Solid.".to_string(),
    };
    AnalysisResult {
        overall_score,
        potential_status: "Growing Reach".to_string(),
        breakdown: ScoreBreakdown {
            visuals: category(70),
            copywriting: category(72),
            strategy: category(68),
            engagement: category(75),
        },
    }
}

#[tokio::test]
async fn mock_mentor_tracks_challenge_inputs_and_returns_results() {
    let mentor = MockMentor::new();

    mentor
        .enqueue_challenge(challenge("c1"))
        .enqueue_challenge(MockChallengeResult::error(MentorError::InvalidInput(
            "challenge error".to_string(),
        )))
        .enqueue_challenge(challenge("c3"));

    let res1 = mentor
        .generate_challenge("Hair Salon")
        .await
        .expect("first generate should succeed");
    assert_eq!(res1.id, "c1");
    let tracked = mentor.tracked_challenge_inputs();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].specialty, "Hair Salon");

    let err = mentor
        .generate_challenge("Nail Art")
        .await
        .expect_err("second generate should error");
    match err {
        MentorError::InvalidInput(msg) => assert_eq!(msg, "challenge error"),
        other => panic!("unexpected error variant: {other:?}"),
    }
    assert_eq!(mentor.tracked_challenge_inputs().len(), 2);

    let res3 = mentor
        .generate_challenge("Barber Shop")
        .await
        .expect("third generate should succeed");
    assert_eq!(res3.id, "c3");
    assert_eq!(mentor.tracked_challenge_inputs().len(), 3);

    mentor.reset();
    assert!(mentor.tracked_challenge_inputs().is_empty());

    mentor.enqueue_challenge(challenge("after-reset"));

    mentor.restore();
    assert!(mentor.tracked_challenge_inputs().is_empty());

    let err = mentor
        .generate_challenge("Hair Salon")
        .await
        .expect_err("generate after restore should fail");
    match err {
        MentorError::Invariant(provider, message) => {
            assert_eq!(provider, "mock");
            assert_eq!(message, "no mocked challenge results available");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn mock_mentor_tracks_analysis_inputs_and_returns_results() {
    let mentor = MockMentor::new();

    mentor
        .enqueue_analysis(analysis(81))
        .enqueue_analysis(MockAnalysisResult::error(MentorError::Refusal(
            "analysis refused".to_string(),
        )));

    let image = ImageAttachment::new("aGVsbG8=", "image/jpeg");
    let res1 = mentor
        .analyze_submission(Platform::Instagram, "Fresh set, link in bio.", Some(&image))
        .await
        .expect("first analysis should succeed");
    assert_eq!(res1.overall_score, 81);

    let tracked = mentor.tracked_analysis_inputs();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].platform, Platform::Instagram);
    assert_eq!(tracked[0].caption, "Fresh set, link in bio.");
    assert_eq!(tracked[0].image.as_ref(), Some(&image));

    let err = mentor
        .analyze_submission(Platform::GoogleBusinessProfile, "Open late Fridays.", None)
        .await
        .expect_err("second analysis should error");
    match err {
        MentorError::Refusal(msg) => assert_eq!(msg, "analysis refused"),
        other => panic!("unexpected error variant: {other:?}"),
    }

    let tracked = mentor.tracked_analysis_inputs();
    assert_eq!(tracked.len(), 2);
    assert_eq!(tracked[1].image, None);

    let err = mentor
        .analyze_submission(Platform::Facebook, "One more.", None)
        .await
        .expect_err("exhausted queue should fail");
    match err {
        MentorError::Invariant(provider, message) => {
            assert_eq!(provider, "mock");
            assert_eq!(message, "no mocked analysis results available");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}
