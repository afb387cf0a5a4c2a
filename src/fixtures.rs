//! Demo datasets the collections are seeded from on every bootstrap.
//! Only the credential store is durable; everything here resets.

use chrono::NaiveDate;

use crate::models::{
    Activity, ActivityKind, Contact, ContactStatus, Deal, DealStage, Task, TaskPriority,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "c1".to_string(),
            name: "Sarah Connor".to_string(),
            company: "Skynet Cyberdyne".to_string(),
            email: "sarah@skynet.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            status: ContactStatus::Active,
            last_contact: date(2023, 10, 25),
            avatar: "https://picsum.photos/id/1011/200/200".to_string(),
            notes: Some(
                "Key decision maker for the AI infrastructure project. Interested in scalable solutions."
                    .to_string(),
            ),
        },
        Contact {
            id: "c2".to_string(),
            name: "John Anderson".to_string(),
            company: "MetaCortex".to_string(),
            email: "neo@metacortex.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            status: ContactStatus::New,
            last_contact: date(2023, 10, 26),
            avatar: "https://picsum.photos/id/1005/200/200".to_string(),
            notes: Some("Looking for security software updates.".to_string()),
        },
        Contact {
            id: "c3".to_string(),
            name: "Ellen Ripley".to_string(),
            company: "Weyland-Yutani".to_string(),
            email: "ripley@weyland.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            status: ContactStatus::Negotiation,
            last_contact: date(2023, 10, 24),
            avatar: "https://picsum.photos/id/1027/200/200".to_string(),
            notes: Some(
                "Concerns about safety protocols. Needs reassurance on long-term support."
                    .to_string(),
            ),
        },
        Contact {
            id: "c4".to_string(),
            name: "Rick Deckard".to_string(),
            company: "Tyrell Corp".to_string(),
            email: "deckard@tyrell.com".to_string(),
            phone: "+1 (555) 222-3333".to_string(),
            status: ContactStatus::Inactive,
            last_contact: date(2023, 9, 15),
            avatar: "https://picsum.photos/id/1012/200/200".to_string(),
            notes: Some("Retired. Might return for specific consulting gigs.".to_string()),
        },
        Contact {
            id: "c5".to_string(),
            name: "Dana Scully".to_string(),
            company: "FBI".to_string(),
            email: "scully@fbi.gov".to_string(),
            phone: "+1 (202) 555-0199".to_string(),
            status: ContactStatus::Active,
            last_contact: date(2023, 10, 27),
            avatar: "https://picsum.photos/id/338/200/200".to_string(),
            notes: Some(
                "Investigating anomalies in our data reporting. Strict compliance requirements."
                    .to_string(),
            ),
        },
    ]
}

pub fn deals() -> Vec<Deal> {
    vec![
        Deal {
            id: "d1".to_string(),
            title: "Enterprise AI License".to_string(),
            value: 150_000.0,
            stage: DealStage::Negotiation,
            contact_id: "c1".to_string(),
            contact_name: "Sarah Connor".to_string(),
            expected_close_date: date(2023, 11, 15),
            probability: 80,
        },
        Deal {
            id: "d2".to_string(),
            title: "Security Audit Q4".to_string(),
            value: 45_000.0,
            stage: DealStage::Proposal,
            contact_id: "c2".to_string(),
            contact_name: "John Anderson".to_string(),
            expected_close_date: date(2023, 11, 1),
            probability: 60,
        },
        Deal {
            id: "d3".to_string(),
            title: "Fleet Management System".to_string(),
            value: 850_000.0,
            stage: DealStage::Qualified,
            contact_id: "c3".to_string(),
            contact_name: "Ellen Ripley".to_string(),
            expected_close_date: date(2024, 1, 20),
            probability: 40,
        },
        Deal {
            id: "d4".to_string(),
            title: "Legacy Data Migration".to_string(),
            value: 25_000.0,
            stage: DealStage::ClosedWon,
            contact_id: "c5".to_string(),
            contact_name: "Dana Scully".to_string(),
            expected_close_date: date(2023, 10, 10),
            probability: 100,
        },
        Deal {
            id: "d5".to_string(),
            title: "Cloud Storage Upgrade".to_string(),
            value: 12_000.0,
            stage: DealStage::Lead,
            contact_id: "c4".to_string(),
            contact_name: "Rick Deckard".to_string(),
            expected_close_date: date(2023, 12, 5),
            probability: 20,
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "t1".to_string(),
            title: "Prepare contract for Skynet".to_string(),
            due_date: date(2023, 11, 10),
            priority: TaskPriority::High,
            assigned_to: "Me".to_string(),
            completed: false,
            related_to: Some("d1".to_string()),
        },
        Task {
            id: "t2".to_string(),
            title: "Follow up with Neo".to_string(),
            due_date: date(2023, 10, 30),
            priority: TaskPriority::Medium,
            assigned_to: "Me".to_string(),
            completed: false,
            related_to: Some("c2".to_string()),
        },
        Task {
            id: "t3".to_string(),
            title: "Quarterly Report Review".to_string(),
            due_date: date(2023, 11, 1),
            priority: TaskPriority::Low,
            assigned_to: "Team".to_string(),
            completed: true,
            related_to: None,
        },
    ]
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "a1".to_string(),
            kind: ActivityKind::Call,
            description: "Call with Sarah Connor regarding API limits.".to_string(),
            timestamp: "2 hours ago".to_string(),
            user: "You".to_string(),
        },
        Activity {
            id: "a2".to_string(),
            kind: ActivityKind::Email,
            description: "Sent proposal to John Anderson.".to_string(),
            timestamp: "5 hours ago".to_string(),
            user: "You".to_string(),
        },
        Activity {
            id: "a3".to_string(),
            kind: ActivityKind::Meeting,
            description: "Lunch meeting with Ellen Ripley.".to_string(),
            timestamp: "Yesterday".to_string(),
            user: "You".to_string(),
        },
        Activity {
            id: "a4".to_string(),
            kind: ActivityKind::Note,
            description: "Updated deal value for Fleet Management.".to_string(),
            timestamp: "2 days ago".to_string(),
            user: "System".to_string(),
        },
    ]
}
