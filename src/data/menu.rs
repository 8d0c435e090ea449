//! Sidebar and header navigation entries.

#[derive(Debug, Clone, Copy)]
pub struct MenuSpec {
    pub label: &'static str,
    pub icon: &'static str,
    pub items: [&'static str; 4],
}

pub const SIDEBAR_MENUS: [MenuSpec; 8] = [
    MenuSpec {
        label: "Projects",
        icon: "▤",
        items: [
            "Active Projects",
            "Completed Projects",
            "Project Timeline",
            "Project Analytics",
        ],
    },
    MenuSpec {
        label: "Budget",
        icon: "$",
        items: ["Overview", "Allocations", "Expenses", "Forecasting"],
    },
    MenuSpec {
        label: "Financing",
        icon: "¤",
        items: ["Revenue", "Investments", "Cash Flow", "Financial Reports"],
    },
    MenuSpec {
        label: "Utilization",
        icon: "☺",
        items: [
            "Resource Planning",
            "Team Utilization",
            "Capacity Planning",
            "Efficiency Metrics",
        ],
    },
    MenuSpec {
        label: "Reports",
        icon: "▥",
        items: [
            "Performance Reports",
            "Financial Reports",
            "Resource Reports",
            "Custom Reports",
        ],
    },
    MenuSpec {
        label: "Estimates",
        icon: "±",
        items: [
            "Create Estimate",
            "Pending Estimates",
            "Approved Estimates",
            "Templates",
        ],
    },
    MenuSpec {
        label: "Contracts",
        icon: "§",
        items: [
            "Active Contracts",
            "Contract Templates",
            "Negotiations",
            "Archive",
        ],
    },
    MenuSpec {
        label: "References",
        icon: "★",
        items: [
            "Client References",
            "Case Studies",
            "Testimonials",
            "Portfolio",
        ],
    },
];

/// Index of the Projects menu; its entries lead to the tree page.
pub const PROJECTS_MENU: usize = 0;

#[derive(Debug, Clone, Copy)]
pub struct NavSpec {
    pub label: &'static str,
    pub entries: [&'static str; 3],
}

pub const HEADER_NAV: [NavSpec; 3] = [
    NavSpec {
        label: "Overview",
        entries: ["Dashboard", "Project Tree", "Activity"],
    },
    NavSpec {
        label: "Analytics",
        entries: ["Trends", "Forecasts", "Benchmarks"],
    },
    NavSpec {
        label: "Reports",
        entries: ["Monthly", "Quarterly", "Annual"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub actions: [&'static str; 3],
}

pub const PROFILE: Profile = Profile {
    name: "Alex Morgan",
    role: "Project Manager",
    email: "alex.morgan@example.com",
    actions: ["Profile", "Settings", "Sign out"],
};
