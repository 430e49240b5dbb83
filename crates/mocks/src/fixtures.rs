//! Canned list payloads
//!
//! The agenda fixtures deliberately use different field names and status
//! encodings per item, the way the real backend has been seen to do.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

pub static AGENDAS: Lazy<Value> = Lazy::new(|| {
    json!([
        {
            "id": 1,
            "title": "Opening Ceremony",
            "description": "Welcome address by the chairman",
            "datetime": "2025-01-10T09:00:00",
            "location": "Main Hall",
            "image_url": null,
            "status": true
        },
        {
            "id": 2,
            "title": "Product Showcase",
            "desc": "Live demos of new digital products",
            "date_time": "2025-01-10T11:30:00",
            "place": "Hall B",
            "image": "/static/showcase.jpg",
            "approved": 0
        },
        {
            "id": "3",
            "title": "Networking Lunch",
            "description": "Buffet lunch with partners",
            "dateTime": "2025-01-10T13:00:00",
            "location": "Terrace",
            "is_approved": "true"
        },
        {
            "id": 4,
            "title": "Closing Remarks",
            "description": "Summary and vote of thanks",
            "datetime": "2025-01-10T17:00:00",
            "location": "Main Hall",
            "registration_Status": "0"
        }
    ])
});

pub static NEWS: Lazy<Value> = Lazy::new(|| {
    json!([
        { "id": 1, "content": "Mocked News 1", "created_at": "2025-01-01T10:20:00", "status": true },
        { "id": 2, "content": "Mocked News 2", "created_at": "2025-01-02T11:35:00", "status": false }
    ])
});

pub static USERS: Lazy<Value> = Lazy::new(|| {
    json!([
        {
            "id": 1,
            "pf_id": 1234567,
            "name": "Nithin",
            "department": "Innovation Hub",
            "location": "Belapur",
            "mobile": 9876543210_i64,
            "status": true
        },
        {
            "id": 2,
            "pf_id": 1088599,
            "name": "Anurag",
            "department": "IT Innovation",
            "location": "Belapur",
            "mobile": 9123456789_i64,
            "status": false
        }
    ])
});
