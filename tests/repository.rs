use chrono::NaiveDate;
use nordbook_reporting::domain::status::StatusGroup;
use nordbook_reporting::period::DateRange;
use nordbook_reporting::repository::snapshot::SnapshotRepository;
use nordbook_reporting::repository::{
    AppointmentListQuery, AppointmentReader, CatalogReader, ClientReader, SaleListQuery,
    SaleReader,
};
use serde_json::json;

mod common;
use common::{ACCOUNT, appointment_doc, client_doc, sale_doc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn appointments_sort_start_ascending_with_undated_last() {
    let mut repo = SnapshotRepository::new(ACCOUNT);
    let kept = repo
        .load_appointments(vec![
            appointment_doc("a-2", "02-06-2024", "Booket", 500.0),
            json!({ "id": "a-x", "status": "Booket" }), // no date at all
            appointment_doc("a-1", "01-06-2024", "Booket", 500.0),
            json!({ "status": "Booket" }), // no id: dropped
        ])
        .unwrap();
    assert_eq!(kept, 3);

    let appointments = repo
        .list_appointments(AppointmentListQuery::new(ACCOUNT))
        .unwrap();
    let ids: Vec<_> = appointments.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a-1", "a-2", "a-x"]);
}

#[test]
fn appointment_range_filter_excludes_undated_records() {
    let mut repo = SnapshotRepository::new(ACCOUNT);
    repo.load_appointments(vec![
        appointment_doc("a-1", "01-06-2024", "Booket", 500.0),
        appointment_doc("a-2", "15-06-2024", "Booket", 500.0),
        json!({ "id": "a-x", "status": "Booket" }),
    ])
    .unwrap();

    let range = DateRange::over_days(date(2024, 6, 1), date(2024, 6, 10));
    let in_range = repo
        .list_appointments(AppointmentListQuery::new(ACCOUNT).range(range))
        .unwrap();
    assert_eq!(in_range.len(), 1);
    assert_eq!(in_range[0].id, "a-1");
}

#[test]
fn appointment_status_group_filter() {
    let mut repo = SnapshotRepository::new(ACCOUNT);
    repo.load_appointments(vec![
        appointment_doc("a-1", "01-06-2024", "Booket", 500.0),
        appointment_doc("a-2", "02-06-2024", "Aflyst", 700.0),
    ])
    .unwrap();

    let cancelled = repo
        .list_appointments(
            AppointmentListQuery::new(ACCOUNT).status_group(StatusGroup::Cancelled),
        )
        .unwrap();
    assert_eq!(cancelled.len(), 1);
    assert_eq!(cancelled[0].id, "a-2");
}

#[test]
fn sales_sort_completion_descending_and_filter_by_status() {
    let mut repo = SnapshotRepository::new(ACCOUNT);
    repo.load_sales(vec![
        sale_doc("s-1", "2024-06-01T10:00:00", 100.0),
        sale_doc("s-2", "2024-06-03T10:00:00", 250.0),
        {
            let mut draft = sale_doc("s-3", "2024-06-02T10:00:00", 50.0);
            draft["status"] = json!("draft");
            draft
        },
    ])
    .unwrap();

    let completed = repo
        .list_sales(SaleListQuery::new(ACCOUNT).status("completed"))
        .unwrap();
    let ids: Vec<_> = completed.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s-2", "s-1"]);

    let all = repo.list_sales(SaleListQuery::new(ACCOUNT)).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn queries_for_another_account_return_empty() {
    let mut repo = SnapshotRepository::new(ACCOUNT);
    repo.load_appointments(vec![appointment_doc("a-1", "01-06-2024", "Booket", 500.0)])
        .unwrap();
    repo.load_clients(vec![client_doc("c-1", "Mette", "2024-06-01")])
        .unwrap();

    assert!(
        repo.list_appointments(AppointmentListQuery::new("other"))
            .unwrap()
            .is_empty()
    );
    assert!(repo.list_clients("other").unwrap().is_empty());
    assert_eq!(repo.earliest_appointment("other").unwrap(), None);
}

#[test]
fn earliest_appointment_supplies_the_since_start_floor() {
    let mut repo = SnapshotRepository::new(ACCOUNT);
    repo.load_appointments(vec![
        appointment_doc("a-1", "05-06-2024", "Booket", 500.0),
        appointment_doc("a-2", "01-03-2023", "Booket", 500.0),
    ])
    .unwrap();

    let earliest = repo.earliest_appointment(ACCOUNT).unwrap().unwrap();
    assert_eq!(earliest.date(), date(2023, 3, 1));
}

#[test]
fn malformed_documents_are_dropped_without_failing_the_snapshot() {
    let mut repo = SnapshotRepository::new(ACCOUNT);
    let kept = repo
        .load_appointments(vec![
            appointment_doc("a-1", "01-06-2024", "Booket", 500.0),
            // Wrong-typed createdAt on a legacy record.
            json!({ "id": "a-2", "date": "02-06-2024", "status": "Booket", "createdAt": true }),
            appointment_doc("a-3", "03-06-2024", "Booket", 500.0),
        ])
        .unwrap();
    assert_eq!(kept, 2);

    let ids: Vec<_> = repo
        .list_appointments(AppointmentListQuery::new(ACCOUNT))
        .unwrap()
        .iter()
        .map(|a| a.id.clone())
        .collect();
    assert_eq!(ids, vec!["a-1", "a-3"]);

    let kept = repo
        .load_sales(vec![
            sale_doc("s-1", "2024-06-01T10:00:00", 100.0),
            json!({ "id": "s-2", "items": "not a list" }),
        ])
        .unwrap();
    assert_eq!(kept, 1);
}

#[test]
fn catalog_documents_normalize_durations_and_prices() {
    let mut repo = SnapshotRepository::new(ACCOUNT);
    repo.load_services(vec![
        json!({
            "id": "s-1",
            "name": "Konsultation",
            "duration": "1 time 30 minutter",
            "price": "450,00",
            "priceInclVat": 562.50,
            "color": "#aabbcc"
        }),
        json!({ "name": "no id, dropped" }),
    ])
    .unwrap();
    repo.load_programs(vec![json!({
        "id": "p-1",
        "name": "Rygforløb",
        "sessions": 8,
        "weeks": 4,
        "price": "3.200,00"
    })])
    .unwrap();

    let services = repo.list_services(ACCOUNT).unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].duration_minutes, Some(90));
    assert_eq!(services[0].price, Some(450.0));
    assert_eq!(services[0].price_incl_vat, Some(562.50));

    let programs = repo.list_programs(ACCOUNT).unwrap();
    assert_eq!(programs.len(), 1);
    assert_eq!(programs[0].sessions, 8);
    assert_eq!(programs[0].weeks, 4);
    assert_eq!(programs[0].price, Some(3200.0));
}

#[test]
fn reloading_replaces_the_snapshot() {
    let mut repo = SnapshotRepository::new(ACCOUNT);
    repo.load_appointments(vec![appointment_doc("a-1", "01-06-2024", "Booket", 500.0)])
        .unwrap();
    repo.load_appointments(vec![appointment_doc("a-2", "02-06-2024", "Booket", 500.0)])
        .unwrap();

    let appointments = repo
        .list_appointments(AppointmentListQuery::new(ACCOUNT))
        .unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].id, "a-2");
}
