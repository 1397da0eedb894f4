// system-tests/tests/suites/wave_export.rs
// ============================================================================
// Module: Wave Export Scenario
// Description: Export a migration wave to the issue tracker and verify it.
// Purpose: Cover the cross-system workflow end to end.
// Dependencies: helpers, waypoint-ui, waypoint-jira, waypoint-data
// ============================================================================

//! ## Overview
//! The planner exports one issue per application in the wave. The tracker is
//! eventually consistent, so verification is a bounded poll against its REST
//! API: re-query until every application has a matching issue or the budget
//! expires. Created issues and fixtures are removed in teardown, instances
//! before their credential.

use std::time::Duration;

use helpers::artifacts::TestReporter;
use helpers::browser;
use helpers::consistency::poll_until_some;
use helpers::fixtures;
use helpers::timeouts;
use time::Duration as TimeDuration;
use time::OffsetDateTime;
use waypoint_data::CredentialKind;
use waypoint_data::random_credential;
use waypoint_data::random_word;
use waypoint_ui::models::Jira;
use waypoint_ui::models::JiraCredential;
use waypoint_ui::models::JiraKind;
use waypoint_ui::models::MigrationWave;

use crate::helpers;

/// Budget for the tracker to materialize exported issues.
const EXPORT_CONSISTENCY_TIMEOUT: Duration = Duration::from_secs(120);

#[tokio::test(flavor = "multi_thread")]
#[allow(clippy::too_many_lines, reason = "Scenario exercises the full export workflow.")]
async fn export_wave_to_issue_manager() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("export_wave_to_issue_manager")?;
    let config = browser::load_config()?;
    let tracker = browser::tracker_client(&config)?;
    let session = browser::admin_session(&config).await?;

    let applications = fixtures::create_applications(&session, 2).await?;
    let app_names: Vec<String> =
        applications.iter().map(|application| application.name.clone()).collect();

    let start = OffsetDateTime::now_utc().date() + TimeDuration::days(1);
    // Leap-day starts cannot shift a whole year; fall back to 365 days.
    let end = start
        .replace_year(start.year() + 1)
        .unwrap_or(start + TimeDuration::days(365));
    let wave = MigrationWave::new(
        Some(format!("wave-{}", random_word(8))),
        start,
        end,
        app_names.clone(),
    );
    wave.create(&session).await?;

    let payload = random_credential(
        CredentialKind::JiraBasic,
        Some(config.require_jira_cloud_email()?),
        Some(config.require_jira_cloud_token()?),
    );
    let credential = JiraCredential::new(payload.name, payload.email, payload.token);
    credential.create(&session).await?;

    let instance = Jira::new(
        format!("jira-{}", random_word(5)),
        config.require_jira_cloud_url()?,
        credential.name.clone(),
        JiraKind::Cloud,
    );
    instance.create(&session).await?;

    let project = tracker.first_project().await?;
    let task_type = tracker.issue_type_by_name("Task").await?;

    wave.export_to_issue_manager(
        &session,
        JiraKind::Cloud,
        &instance.name,
        &project.name,
        task_type.wire_name(),
    )
    .await?;

    let export_timeout = timeouts::resolve_timeout(EXPORT_CONSISTENCY_TIMEOUT);
    let exported = {
        let tracker = tracker.clone();
        let project_key = project.key.clone();
        let expected = app_names.clone();
        poll_until_some("one tracker issue per exported application", export_timeout, move || {
            let tracker = tracker.clone();
            let project_key = project_key.clone();
            let expected = expected.clone();
            async move {
                let issues = tracker
                    .issues_in_project(&project_key)
                    .await
                    .map_err(|err| err.to_string())?;
                let complete = expected.iter().all(|name| {
                    issues.iter().any(|issue| issue.fields.summary.contains(name))
                });
                Ok(complete.then_some(issues))
            }
        })
        .await?
    };

    for name in &app_names {
        require(
            exported.iter().any(|issue| issue.fields.summary.contains(name)),
            format!("no tracker issue mentions application {name}"),
        )?;
    }
    reporter.artifacts().write_json("exported_issues.json", &exported)?;

    let issue_ids: Vec<String> = exported.iter().map(|issue| issue.id.clone()).collect();
    tracker.delete_issues(&issue_ids).await?;

    let mut notes = vec![format!(
        "exported {} applications as {} tracker issues",
        app_names.len(),
        exported.len()
    )];
    if let Err(err) = wave.delete(&session).await {
        notes.push(format!("teardown: failed to delete wave: {err}"));
    }
    if let Err(err) = instance.delete(&session).await {
        notes.push(format!("teardown: failed to delete instance: {err}"));
    }
    if let Err(err) = credential.delete(&session).await {
        notes.push(format!("teardown: failed to delete credential: {err}"));
    }
    notes.extend(fixtures::delete_applications(&session, &applications).await);
    if let Err(err) = session.quit().await {
        notes.push(format!("teardown: failed to quit session: {err}"));
    }

    reporter.finish(
        "pass",
        notes,
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "exported_issues.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}

fn require(condition: bool, message: impl Into<String>) -> Result<(), Box<dyn std::error::Error>> {
    if condition { Ok(()) } else { Err(message.into().into()) }
}
