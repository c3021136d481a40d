//! Shared snapshot-document builders for the integration tests.

use serde_json::{Value, json};

pub const ACCOUNT: &str = "acct-1";

/// Minimal appointment document: local date string, time strings, free-text
/// status and a priced service reference.
pub fn appointment_doc(id: &str, date: &str, status: &str, price: f64) -> Value {
    json!({
        "id": id,
        "date": date,
        "startTime": "10:00",
        "endTime": "11:00",
        "status": status,
        "client": { "id": "c-1", "name": "Mette Hansen" },
        "service": { "id": "s-1", "name": "Konsultation", "duration": "1 time", "price": price },
        "staff": { "id": "e-1", "name": "Lars", "color": "#aabbcc" }
    })
}

/// Completed sale document with a single line and frozen totals.
pub fn sale_doc(id: &str, completed_at: &str, total: f64) -> Value {
    json!({
        "id": id,
        "items": [
            { "name": "Konsultation", "price": total, "quantity": 1, "source": "appointment" }
        ],
        "totals": { "subtotal": total, "vat": 0, "total": total },
        "paymentMethod": "card",
        "employee": { "id": "e-1", "name": "Lars" },
        "customer": { "id": "c-1", "name": "Mette Hansen" },
        "status": "completed",
        "createdAt": completed_at,
        "completedAt": completed_at
    })
}

pub fn client_doc(id: &str, name: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", id),
        "phone": "+4520304050",
        "createdAt": created_at
    })
}
