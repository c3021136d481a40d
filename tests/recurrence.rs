use chrono::{NaiveDate, NaiveTime, Weekday};
use nordbook_reporting::domain::appointment::{Appointment, ServiceRef};
use nordbook_reporting::domain::status::AppointmentStatus;
use nordbook_reporting::services::ServiceError;
use nordbook_reporting::services::booking::expand_recurrence;

fn template(date: Option<NaiveDate>) -> Appointment {
    Appointment {
        id: "tpl-1".to_string(),
        date,
        start_time: NaiveTime::from_hms_opt(10, 0, 0),
        end_time: NaiveTime::from_hms_opt(11, 0, 0),
        status: AppointmentStatus::Booked,
        client: None,
        service: Some(ServiceRef {
            id: Some("s-1".to_string()),
            name: "Konsultation".to_string(),
            duration_minutes: Some(60),
            price: Some(500.0),
            price_incl_vat: None,
        }),
        staff: None,
        participants: Vec::new(),
        created_at: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn anchor_weekday_in_week_zero_yields_the_anchor_date() {
    // 2024-06-03 is a Monday.
    let tpl = template(Some(date(2024, 6, 3)));
    let series = expand_recurrence(&tpl, &[Weekday::Mon], 1).unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].date, Some(date(2024, 6, 3)));
}

#[test]
fn siblings_share_payload_but_not_id_or_date() {
    let tpl = template(Some(date(2024, 6, 3)));
    let series = expand_recurrence(&tpl, &[Weekday::Mon, Weekday::Thu], 2).unwrap();

    assert_eq!(series.len(), 4);
    let dates: Vec<_> = series.iter().filter_map(|a| a.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2024, 6, 3),
            date(2024, 6, 10),
            date(2024, 6, 6),
            date(2024, 6, 13),
        ]
    );
    for sibling in &series {
        assert_ne!(sibling.id, tpl.id);
        assert_eq!(sibling.start_time, tpl.start_time);
        assert_eq!(sibling.end_time, tpl.end_time);
        assert_eq!(sibling.service, tpl.service);
    }
    // Fresh ids are distinct across the series too.
    assert_ne!(series[0].id, series[1].id);
}

#[test]
fn empty_weekday_selection_defaults_to_monday() {
    // Anchor Wednesday; the default Monday lands in the following week.
    let tpl = template(Some(date(2024, 6, 5)));
    let series = expand_recurrence(&tpl, &[], 1).unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].date, Some(date(2024, 6, 10)));
}

#[test]
fn week_count_clamps_to_one() {
    let tpl = template(Some(date(2024, 6, 3)));
    let series = expand_recurrence(&tpl, &[Weekday::Mon], 0).unwrap();
    assert_eq!(series.len(), 1);
}

#[test]
fn template_without_date_is_an_error() {
    let tpl = template(None);
    assert!(matches!(
        expand_recurrence(&tpl, &[Weekday::Mon], 1),
        Err(ServiceError::MissingAnchorDate)
    ));
}
