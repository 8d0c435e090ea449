//! Static figures behind the home page cards, charts and project table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    Completed,
    EarlyStages,
    FinalReview,
}

impl ProjectStatus {
    pub fn title(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::EarlyStages => "Early Stages",
            ProjectStatus::FinalReview => "Final Review",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub budget: u64,
    pub spent: u64,
    pub status: ProjectStatus,
    pub progress: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct Series {
    pub name: &'static str,
    pub data: &'static [u64],
}

#[derive(Debug, Clone, Copy)]
pub struct Share {
    pub label: &'static str,
    pub percent: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct BudgetOverview {
    pub total: u64,
    pub income: u64,
    pub expenses: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct Transaction {
    pub number: u32,
    pub day: u32,
    pub amount_cents: u64,
}

pub const BUDGET: BudgetOverview = BudgetOverview {
    total: 24_000,
    income: 12_000,
    expenses: 8_000,
};

pub const RECENT_TRANSACTIONS: [Transaction; 3] = [
    Transaction {
        number: 1,
        day: 21,
        amount_cents: 25_000,
    },
    Transaction {
        number: 2,
        day: 22,
        amount_cents: 25_000,
    },
    Transaction {
        number: 3,
        day: 23,
        amount_cents: 25_000,
    },
];

pub const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Monthly figures in thousands of dollars.
pub const FINANCIAL_PERFORMANCE: [Series; 3] = [
    Series {
        name: "Net Profit",
        data: &[44, 55, 57, 56, 61, 58],
    },
    Series {
        name: "Revenue",
        data: &[76, 85, 101, 98, 87, 105],
    },
    Series {
        name: "Free Cash Flow",
        data: &[35, 41, 36, 26, 45, 48],
    },
];

pub const EXPENSE_DISTRIBUTION: [Share; 4] = [
    Share {
        label: "Operating Expenses",
        percent: 45,
    },
    Share {
        label: "Marketing",
        percent: 25,
    },
    Share {
        label: "Sales",
        percent: 20,
    },
    Share {
        label: "Development",
        percent: 10,
    },
];

/// Days covered by the weekly chart, `YYYY-MM-DD`.
pub const WEEK_DAYS: [&str; 7] = [
    "2024-03-01",
    "2024-03-02",
    "2024-03-03",
    "2024-03-04",
    "2024-03-05",
    "2024-03-06",
    "2024-03-07",
];

pub const WEEKLY: [Series; 2] = [
    Series {
        name: "Revenue",
        data: &[31, 40, 28, 51, 42, 109, 100],
    },
    Series {
        name: "Expenses",
        data: &[11, 32, 45, 32, 34, 52, 41],
    },
];

pub const PROJECTS: [Project; 10] = [
    Project {
        id: 1,
        name: "Website Redesign",
        budget: 125_000,
        spent: 95_000,
        status: ProjectStatus::InProgress,
        progress: 75,
    },
    Project {
        id: 2,
        name: "Mobile App Development",
        budget: 250_000,
        spent: 180_000,
        status: ProjectStatus::InProgress,
        progress: 65,
    },
    Project {
        id: 3,
        name: "Cloud Infrastructure",
        budget: 300_000,
        spent: 300_000,
        status: ProjectStatus::Completed,
        progress: 100,
    },
    Project {
        id: 4,
        name: "Marketing Campaign",
        budget: 85_000,
        spent: 42_500,
        status: ProjectStatus::InProgress,
        progress: 50,
    },
    Project {
        id: 5,
        name: "Data Analytics Platform",
        budget: 175_000,
        spent: 35_000,
        status: ProjectStatus::EarlyStages,
        progress: 20,
    },
    Project {
        id: 6,
        name: "Security Upgrade",
        budget: 120_000,
        spent: 108_000,
        status: ProjectStatus::FinalReview,
        progress: 90,
    },
    Project {
        id: 7,
        name: "CRM Integration",
        budget: 95_000,
        spent: 85_500,
        status: ProjectStatus::FinalReview,
        progress: 90,
    },
    Project {
        id: 8,
        name: "E-commerce Platform",
        budget: 280_000,
        spent: 252_000,
        status: ProjectStatus::InProgress,
        progress: 85,
    },
    Project {
        id: 9,
        name: "Employee Portal",
        budget: 90_000,
        spent: 72_000,
        status: ProjectStatus::InProgress,
        progress: 80,
    },
    Project {
        id: 10,
        name: "Business Intelligence",
        budget: 150_000,
        spent: 15_000,
        status: ProjectStatus::EarlyStages,
        progress: 10,
    },
];

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_dollars(value: u64) -> String {
    format!("${}", group_thousands(value))
}

pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}
