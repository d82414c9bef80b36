//! Fixed sample data. There is no backend — every list in the app is a
//! compile-time constant from this module.

use crate::automation::{Automation, AutomationKind};
use crate::projection::TransactionRecord;

/// Dashboard figures, in pence.
pub const BALANCE_PENCE: i64 = 284_750;
pub const SPENT_PENCE: i64 = 125_000;
pub const BUDGET_PENCE: i64 = 200_000;

/// The fixed transaction history.
pub const SAMPLE_TRANSACTIONS: [TransactionRecord; 8] = [
    TransactionRecord {
        id: 1,
        merchant: "Starbucks Coffee",
        code: "STARBUCKS UK*1234",
        category: "Food & Drink",
        amount_pence: -450,
        date: "Today, 9:30 AM",
        icon: "☕",
        location: "London, UK",
    },
    TransactionRecord {
        id: 2,
        merchant: "Uber",
        code: "UBER *TRIP",
        category: "Transport",
        amount_pence: -1280,
        date: "Today, 8:15 AM",
        icon: "🚗",
        location: "London, UK",
    },
    TransactionRecord {
        id: 3,
        merchant: "Tesco Express",
        code: "TESCO STORES 2341",
        category: "Shopping",
        amount_pence: -3245,
        date: "Yesterday, 6:45 PM",
        icon: "🛒",
        location: "London, UK",
    },
    TransactionRecord {
        id: 4,
        merchant: "Netflix",
        code: "NETFLIX.COM",
        category: "Entertainment",
        amount_pence: -1599,
        date: "Yesterday, 12:00 PM",
        icon: "🎬",
        location: "Online",
    },
    TransactionRecord {
        id: 5,
        merchant: "Amazon",
        code: "AMZN MKTP UK*2A6PQ",
        category: "Shopping",
        amount_pence: -6799,
        date: "Jan 28",
        icon: "📦",
        location: "Online",
    },
    TransactionRecord {
        id: 6,
        merchant: "Spotify",
        code: "SPOTIFY UK",
        category: "Entertainment",
        amount_pence: -999,
        date: "Jan 27",
        icon: "🎵",
        location: "Online",
    },
    TransactionRecord {
        id: 7,
        merchant: "Transport for London",
        code: "TFL.GOV.UK",
        category: "Transport",
        amount_pence: -280,
        date: "Jan 27",
        icon: "🚇",
        location: "London, UK",
    },
    TransactionRecord {
        id: 8,
        merchant: "Pret A Manger",
        code: "PRET A MANGER 1234",
        category: "Food & Drink",
        amount_pence: -895,
        date: "Jan 26",
        icon: "🥪",
        location: "London, UK",
    },
];

/// Look up a transaction by id.
pub fn transaction(id: u32) -> Option<&'static TransactionRecord> {
    SAMPLE_TRANSACTIONS.iter().find(|tx| tx.id == id)
}

/// The automation hub's starting list. Runtime-mutable (toggles, newly
/// created entries), so this builds owned values rather than a constant.
pub fn sample_automations() -> Vec<Automation> {
    vec![
        Automation {
            id: 1,
            name: "Rent Payment".to_string(),
            kind: AutomationKind::Recurring,
            amount_pence: 120_000,
            recipient: "Landlord Ltd".to_string(),
            frequency: "Monthly",
            next_date: "Feb 1",
            icon: "🏠",
            active: true,
        },
        Automation {
            id: 2,
            name: "Savings Transfer".to_string(),
            kind: AutomationKind::Scheduled,
            amount_pence: 20_000,
            recipient: "Savings Account".to_string(),
            frequency: "Weekly",
            next_date: "Feb 3",
            icon: "💰",
            active: true,
        },
        Automation {
            id: 3,
            name: "Netflix".to_string(),
            kind: AutomationKind::Recurring,
            amount_pence: 1599,
            recipient: "Netflix".to_string(),
            frequency: "Monthly",
            next_date: "Feb 15",
            icon: "🎬",
            active: true,
        },
        Automation {
            id: 4,
            name: "Gym Membership".to_string(),
            kind: AutomationKind::Recurring,
            amount_pence: 3500,
            recipient: "Pure Gym".to_string(),
            frequency: "Monthly",
            next_date: "Feb 10",
            icon: "💪",
            active: false,
        },
    ]
}

/// One what's-new carousel slide.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub is_new: bool,
}

/// The what's-new tour content.
pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Simplified Mode",
        description: "A new accessibility mode with larger text and simplified \
                      navigation for easier banking.",
        icon: "👁",
        is_new: true,
    },
    Feature {
        title: "Merchant Clarity",
        description: "Now see clear merchant names, logos, and locations for all \
                      your transactions.",
        icon: "🏪",
        is_new: true,
    },
    Feature {
        title: "Smart Automations",
        description: "Set up recurring payments and scheduled transfers with our \
                      new automation hub.",
        icon: "⚡",
        is_new: true,
    },
    Feature {
        title: "Multi-Language Support",
        description: "GlassBank now supports English, Spanish, Polish, and \
                      Mandarin.",
        icon: "🌍",
        is_new: true,
    },
];

/// Format a pence amount as `£1,234.56` (no sign handling — dashboard
/// figures are all positive).
pub fn format_pounds(pence: i64) -> String {
    let abs = pence.unsigned_abs();
    let pounds = abs / 100;
    let rest = abs % 100;
    let mut whole = pounds.to_string();
    let mut with_separators = String::new();
    while whole.len() > 3 {
        let split = whole.len() - 3;
        with_separators = format!(",{}{}", &whole[split..], with_separators);
        whole.truncate(split);
    }
    format!("£{}{}.{:02}", whole, with_separators, rest)
}
