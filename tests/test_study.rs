//! Study configuration round-trip: password policy and email templates.

use bridge::types::Role;

mod helpers;
use helpers::{create_and_sign_in_user, AnyResult};

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a running Bridge server"]
async fn test_study_round_trip() -> AnyResult {
    let researcher = create_and_sign_in_user("studytest", &[Role::Researcher]).await;
    let client = researcher.session.researcher();

    let mut study = client.get_study().await?;
    let original_min_length = study.password_policy.min_length;

    study.password_policy.min_length = original_min_length + 1;
    study.support_email = Some("support@example.com".to_string());
    let holder = client.update_study(&study).await?;
    assert!(holder.version > study.version);

    let study = client.get_study().await?;
    assert_eq!(study.password_policy.min_length, original_min_length + 1);
    assert_eq!(study.support_email.as_deref(), Some("support@example.com"));

    // put the policy back for whoever runs next
    let mut study = study;
    study.password_policy.min_length = original_min_length;
    client.update_study(&study).await?;

    researcher.sign_out_and_delete().await;
    Ok(())
}
