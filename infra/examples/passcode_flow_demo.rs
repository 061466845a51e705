//! Example demonstrating the full passcode flow over a MySQL store session
//!
//! Wires the MySQL repositories and the mock delivery dispatcher into the
//! core issuer and verifier, then walks through issue, cooldown rejection,
//! a wrong code, and a successful verification. Without a reachable
//! database the session drops into degraded mode outside production, so
//! the demo still runs end to end: issuance reports record id 0 and
//! verification finds no active code.
//!
//! Run with: cargo run --example passcode_flow_demo

use std::sync::Arc;

use anyhow::Result;
use pl_core::domain::entities::passcode::Purpose;
use pl_core::errors::{DomainError, PasscodeError};
use pl_core::services::passcode::{
    PasscodeConfig, PasscodeIssuer, PasscodeVerifier, SubjectVerificationUpdater,
};
use pl_infra::database::{MySqlPasscodeRepository, MySqlSubjectStore};
use pl_infra::delivery::MockDeliveryDispatcher;
use pl_infra::metrics::TracingMetricsSink;
use pl_infra::store_session_from_env;

const SUBJECT: &str = "550e8400-e29b-41d4-a716-446655440000";
const CONTACT: &str = "+8613800138000";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Passlane Passcode Flow Demo ===\n");

    let session = store_session_from_env();
    session.start_health_timer();

    let repository = Arc::new(MySqlPasscodeRepository::new(Arc::clone(&session)));
    let subjects = Arc::new(MySqlSubjectStore::new(Arc::clone(&session)));
    let delivery = Arc::new(MockDeliveryDispatcher::new());
    let metrics = Arc::new(TracingMetricsSink::new());
    let config = PasscodeConfig::from_env();

    let issuer = PasscodeIssuer::new(
        Arc::clone(&repository),
        delivery,
        Arc::clone(&metrics),
        config.clone(),
    );
    let updater = Arc::new(SubjectVerificationUpdater::new(subjects));
    let verifier = PasscodeVerifier::new(repository, updater, metrics, config);

    println!("1. Issuing a login passcode...");
    let outcome = issuer
        .issue_and_send(SUBJECT, Purpose::Login, CONTACT)
        .await?;
    println!(
        "   Issued record {} (expires {})",
        outcome.id, outcome.expires_at
    );

    println!("\n2. Requesting another code inside the cooldown window...");
    match issuer.issue_and_send(SUBJECT, Purpose::Login, CONTACT).await {
        Ok(outcome) => println!("   Issued record {}", outcome.id),
        Err(DomainError::Passcode(PasscodeError::RateLimited { seconds_remaining })) => {
            println!("   Rate limited, retry in {}s", seconds_remaining)
        }
        Err(e) => println!("   Failed: {}", e),
    }

    println!("\n3. Submitting a wrong code...");
    match verifier.verify(SUBJECT, "000000", Purpose::Login).await {
        Ok(matched) => println!("   Matched: {}", matched),
        Err(e) => println!("   Rejected: {}", e),
    }
    let remaining = verifier.remaining_attempts(SUBJECT, Purpose::Login).await?;
    println!("   Attempts remaining: {}", remaining);

    println!("\n4. Submitting the issued code...");
    match verifier.verify(SUBJECT, &outcome.code, Purpose::Login).await {
        Ok(matched) => println!("   Matched: {}", matched),
        Err(e) => println!("   Rejected: {}", e),
    }

    println!("\n{}", session.stats().await);

    session.close().await;
    println!("\n=== Demo complete ===");
    Ok(())
}
