//! Tests for workload-aware personnel selection and accounting.

use super::support::{Harness, harness, seed_loaded_personnel, seed_personnel};
use crate::assignment::domain::ApplicableLaw;
use crate::personnel::domain::{PersonnelId, Specialization};
use crate::personnel::ports::PersonnelDirectory;
use crate::workflow::domain::WorkflowError;
use eyre::ensure;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn eligibility_accepts_matching_specialization(harness: Harness) -> eyre::Result<()> {
    let inspector =
        seed_personnel(&harness, "Maria Santos", Specialization::AirQuality, 5).await?;
    let person = harness
        .engine
        .balancer()
        .eligible_for(ApplicableLaw::CleanAirAct, inspector)
        .await?;
    ensure!(person.id() == inspector);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn eligibility_rejects_mismatched_specialization(harness: Harness) -> eyre::Result<()> {
    let inspector =
        seed_personnel(&harness, "Jose Ramos", Specialization::SolidWaste, 5).await?;
    let result = harness
        .engine
        .balancer()
        .eligible_for(ApplicableLaw::ToxicSubstances, inspector)
        .await;
    ensure!(matches!(
        result,
        Err(WorkflowError::IneligiblePersonnel {
            required: Specialization::ToxicHazardous,
            held: Specialization::SolidWaste,
            ..
        })
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn eligibility_reports_missing_personnel(harness: Harness) -> eyre::Result<()> {
    let missing = PersonnelId::new();
    let result = harness
        .engine
        .balancer()
        .eligible_for(ApplicableLaw::CleanAirAct, missing)
        .await;
    ensure!(matches!(
        result,
        Err(WorkflowError::PersonnelNotFound(id)) if id == missing
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recommendation_prefers_the_least_loaded_under_capacity(
    harness: Harness,
) -> eyre::Result<()> {
    let busy =
        seed_loaded_personnel(&harness, "Ana Reyes", Specialization::WaterQuality, 4, 5).await?;
    let idle =
        seed_loaded_personnel(&harness, "Ben Ocampo", Specialization::WaterQuality, 1, 5).await?;
    let _ = busy;

    let pick = harness
        .engine
        .balancer()
        .recommend_for(ApplicableLaw::CleanWaterAct)
        .await?;
    ensure!(pick.map(|person| person.id()) == Some(idle));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recommendation_falls_back_when_the_pool_is_saturated(
    harness: Harness,
) -> eyre::Result<()> {
    let less_loaded =
        seed_loaded_personnel(&harness, "Ana Reyes", Specialization::WaterQuality, 5, 5).await?;
    let more_loaded =
        seed_loaded_personnel(&harness, "Ben Ocampo", Specialization::WaterQuality, 7, 5).await?;
    let _ = more_loaded;

    let pick = harness
        .engine
        .balancer()
        .recommend_for(ApplicableLaw::CleanWaterAct)
        .await?;
    ensure!(pick.map(|person| person.id()) == Some(less_loaded));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recommendation_is_empty_without_eligible_personnel(harness: Harness) -> eyre::Result<()> {
    seed_personnel(&harness, "Maria Santos", Specialization::AirQuality, 5).await?;
    let pick = harness
        .engine
        .balancer()
        .recommend_for(ApplicableLaw::CleanWaterAct)
        .await?;
    ensure!(pick.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn record_and_release_round_trip(harness: Harness) -> eyre::Result<()> {
    let inspector =
        seed_personnel(&harness, "Maria Santos", Specialization::AirQuality, 5).await?;
    let warning = harness
        .engine
        .balancer()
        .record_assignment(inspector)
        .await?;
    ensure!(warning.is_none());

    harness
        .engine
        .balancer()
        .release_assignment(inspector)
        .await?;
    let person = harness.directory.find_by_id(inspector).await?;
    ensure!(person.map(|record| record.workload()) == Some(0));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn release_at_zero_workload_is_tolerated(harness: Harness) -> eyre::Result<()> {
    let inspector =
        seed_personnel(&harness, "Maria Santos", Specialization::AirQuality, 5).await?;
    harness
        .engine
        .balancer()
        .release_assignment(inspector)
        .await?;
    let person = harness.directory.find_by_id(inspector).await?;
    ensure!(person.map(|record| record.workload()) == Some(0));
    Ok(())
}
