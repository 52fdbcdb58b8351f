//! Command-line client that computes an estimate and submits a lead to a
//! running relay. Exercises the client half of the pipeline end to end.
//!
//! Usage:
//!   submit_lead <relay-url> <time-unit> <period> <process-time> <process-count> <wage> <name> <email>
//!
//! Example:
//!   submit_lead http://localhost:3000/api/send-leads Seconds Day 45 50 32.03 "Jane Doe" jane@example.com

use process_cost_api::estimator::{CalculatorInputs, Period, TimeUnit};
use process_cost_api::submitter::{build_lead_record, LeadSubmitter};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [relay_url, unit_label, period_label, process_time, process_count, wage, name, email] =
        args.as_slice()
    else {
        anyhow::bail!(
            "usage: submit_lead <relay-url> <time-unit> <period> <process-time> <process-count> <wage> <name> <email>"
        );
    };

    // Unknown labels would estimate to zero in the calculator UI; here we
    // refuse them so a typo does not silently submit a zero-cost lead.
    let time_unit = TimeUnit::parse_label(unit_label)
        .ok_or_else(|| anyhow::anyhow!("unknown time unit '{}' (Seconds, Minutes, Hours)", unit_label))?;
    let period = Period::parse_label(period_label).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown period '{}' (Work Day, Day, Work Week, Week, Month, Quarter, Year)",
            period_label
        )
    })?;

    let inputs = CalculatorInputs {
        time_unit,
        period,
        process_time: process_time.parse()?,
        process_count: process_count.parse()?,
        wage: wage.parse()?,
    };

    let total_cost = inputs.estimate();
    tracing::info!("Estimated process cost: {:.2} per {:?}", total_cost, period);

    let record = build_lead_record(name, email, Some(total_cost));
    let submitter = LeadSubmitter::new(relay_url.clone())?;

    match submitter.submit(&record).await {
        Ok(ack) => {
            tracing::info!("Relay acknowledged: {}", ack.message);
            Ok(())
        }
        Err(e) => {
            // Single attempt only; rerun the command to retry.
            anyhow::bail!("submission failed: {}", e)
        }
    }
}
