//! Dates command implementation.
//!
//! Shows what ride dates and intent a post body would be annotated with.

use chrono::{DateTime, FixedOffset, Utc};
use ridesearch_core::dates::infer_ride_dates_on;
use ridesearch_core::filter::Intent;
use ridesearch_core::post::parse_graph_time;

use super::{CommandContext, CommandError, Result};
use crate::output::{format_inferred_dates_json, format_inferred_dates_table, InferredDates};
use crate::zone::Zone;

/// Options for the dates command.
#[derive(Debug, Default)]
pub struct DatesOptions {
    /// Post body.
    pub text: String,
    /// Reference time; defaults to now.
    pub at: Option<String>,
    /// IANA zone from `--tz`.
    pub tz: Option<String>,
}

/// Parses `--at`, or takes the current time.
fn reference_time(at: Option<&str>) -> Result<DateTime<FixedOffset>> {
    match at {
        Some(raw) => parse_graph_time(raw.trim()).map_err(|e| {
            CommandError::Config(format!("Invalid reference time '{}': {}", raw, e))
        }),
        None => Ok(Utc::now().fixed_offset()),
    }
}

/// Infers dates and intent for `opts.text`.
pub fn infer(opts: &DatesOptions, configured_tz: Option<&str>) -> Result<InferredDates> {
    let zone = Zone::resolve(opts.tz.as_deref(), configured_tz)?;
    let time = reference_time(opts.at.as_deref())?;
    let reference = zone.date_of(&time);

    tracing::debug!(%reference, zone = %zone.name(), "inferring ride dates");

    Ok(InferredDates {
        reference,
        intent: Intent::classify(&opts.text),
        ride_dates: infer_ride_dates_on(&opts.text, reference),
    })
}

/// Executes the dates command.
pub fn execute(ctx: &CommandContext, opts: &DatesOptions, configured_tz: Option<&str>) -> Result<()> {
    let inferred = infer(opts, configured_tz)?;

    if ctx.json_output {
        println!("{}", format_inferred_dates_json(&inferred)?);
    } else {
        print!("{}", format_inferred_dates_table(&inferred, ctx.use_colors));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 5, day).unwrap()
    }

    fn opts(text: &str, at: &str, tz: &str) -> DatesOptions {
        DatesOptions {
            text: text.to_string(),
            at: Some(at.to_string()),
            tz: Some(tz.to_string()),
        }
    }

    #[test]
    fn test_infer_weekday() {
        let inferred = infer(&opts("Driving to SF friday", "2019-05-22T12:00:00Z", "UTC"), None).unwrap();
        assert_eq!(inferred.reference, may(22));
        assert_eq!(inferred.intent, Intent::Offering);
        assert_eq!(inferred.ride_dates, vec![may(24)]);
    }

    #[test]
    fn test_infer_reads_reference_in_zone() {
        let inferred = infer(
            &opts("looking for a ride tonight", "2019-05-23T03:00:00+0000", "America/Los_Angeles"),
            None,
        )
        .unwrap();
        assert_eq!(inferred.reference, may(22));
        assert_eq!(inferred.intent, Intent::Seeking);
        assert_eq!(inferred.ride_dates, vec![may(22)]);
    }

    #[test]
    fn test_infer_uses_configured_zone() {
        let options = DatesOptions {
            text: "today".to_string(),
            at: Some("2019-05-23T03:00:00Z".to_string()),
            tz: None,
        };
        let inferred = infer(&options, Some("America/Los_Angeles")).unwrap();
        assert_eq!(inferred.ride_dates, vec![may(22)]);
    }

    #[test]
    fn test_infer_rejects_bad_reference() {
        let result = infer(&opts("today", "yesterday", "UTC"), None);
        assert!(matches!(result, Err(CommandError::Config(_))));
    }

    #[test]
    fn test_infer_rejects_bad_zone() {
        let result = infer(&opts("today", "2019-05-22T12:00:00Z", "Nowhere/City"), None);
        assert!(matches!(result, Err(CommandError::Config(_))));
    }
}
