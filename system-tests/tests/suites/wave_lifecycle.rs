// system-tests/tests/suites/wave_lifecycle.rs
// ============================================================================
// Module: Wave Lifecycle Scenarios
// Description: Create, edit, manage applications on, and delete waves.
// Purpose: Cover wave CRUD independently of the tracker.
// Dependencies: helpers, waypoint-ui, waypoint-data
// ============================================================================

//! ## Overview
//! Wave CRUD against a live planner. Unnamed waves render as their date
//! range, so the second scenario exercises the range-keyed row lookup.

use helpers::artifacts::TestReporter;
use helpers::browser;
use helpers::fixtures;
use time::Duration as TimeDuration;
use time::OffsetDateTime;
use waypoint_data::random_word;
use waypoint_ui::models::MigrationWave;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn rename_and_reschedule_wave() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("rename_and_reschedule_wave")?;
    let config = browser::load_config()?;
    let session = browser::admin_session(&config).await?;

    let start = OffsetDateTime::now_utc().date() + TimeDuration::days(1);
    let end = start + TimeDuration::days(90);
    let mut wave = MigrationWave::new(Some(format!("wave-{}", random_word(8))), start, end, vec![]);
    wave.create(&session).await?;

    let new_name = format!("wave-{}", random_word(8));
    let new_start = start + TimeDuration::days(7);
    let new_end = end + TimeDuration::days(7);
    wave.edit(&session, Some(new_name.clone()), new_start, new_end).await?;
    require_eq(&wave.display_name()?, &new_name, "wave row key after rename")?;

    let mut notes = vec!["wave renamed and rescheduled".to_string()];
    if let Err(err) = wave.delete(&session).await {
        notes.push(format!("teardown: failed to delete wave: {err}"));
    }
    if let Err(err) = session.quit().await {
        notes.push(format!("teardown: failed to quit session: {err}"));
    }

    reporter.finish("pass", notes, vec!["summary.json".to_string(), "summary.md".to_string()])?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unnamed_wave_manages_applications() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("unnamed_wave_manages_applications")?;
    let config = browser::load_config()?;
    let session = browser::admin_session(&config).await?;

    let applications = fixtures::create_applications(&session, 2).await?;
    let app_names: Vec<String> =
        applications.iter().map(|application| application.name.clone()).collect();

    let start = OffsetDateTime::now_utc().date() + TimeDuration::days(1);
    let end = start + TimeDuration::days(30);
    let mut wave = MigrationWave::new(None, start, end, vec![]);
    wave.create(&session).await?;

    wave.add_applications(&session, &app_names).await?;
    require_eq(&wave.applications.len(), &2, "applications on the wave after add")?;

    let removed = vec![app_names[0].clone()];
    wave.remove_applications(&session, &removed).await?;
    require_eq(&wave.applications.len(), &1, "applications on the wave after remove")?;
    require(
        !wave.applications.contains(&app_names[0]),
        "removed application still tracked on the wave",
    )?;

    let mut notes = vec!["unnamed wave keyed by date range".to_string()];
    if let Err(err) = wave.delete(&session).await {
        notes.push(format!("teardown: failed to delete wave: {err}"));
    }
    notes.extend(fixtures::delete_applications(&session, &applications).await);
    if let Err(err) = session.quit().await {
        notes.push(format!("teardown: failed to quit session: {err}"));
    }

    reporter.finish("pass", notes, vec!["summary.json".to_string(), "summary.md".to_string()])?;
    drop(reporter);
    Ok(())
}

fn require(condition: bool, message: impl Into<String>) -> Result<(), Box<dyn std::error::Error>> {
    if condition { Ok(()) } else { Err(message.into().into()) }
}

fn require_eq<T: PartialEq + std::fmt::Debug>(
    left: &T,
    right: &T,
    context: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if left == right {
        Ok(())
    } else {
        Err(format!("{context}: left={left:?} right={right:?}").into())
    }
}
