//! Demo data seeder
//!
//! Loads a fixed set of departments, projects, booking accounts and users
//! through the regular repository `create` operations, so every row passes
//! the same validation and constraint handling as API traffic. Only runs
//! against a store whose department and user tables are both empty.

use tracing::info;

use crate::domain::{
    DomainResult, NewBookingAccount, NewDepartment, NewProject, NewUser, RepositoryProvider,
};

const DEPARTMENTS: [(&str, &str); 5] = [
    ("IoT Solutions", "Internet of Things development and consulting"),
    ("Industry 4.0", "Industrial automation and digitalization"),
    ("App Development", "Mobile and web application development"),
    ("DevOps & Cloud", "DevOps practices and cloud infrastructure"),
    ("Data Analytics", "Business intelligence and data science"),
];

/// (name, customer, description, index into `DEPARTMENTS`)
const PROJECTS: [(&str, &str, &str, usize); 10] = [
    ("BMW Connected Car Platform", "BMW AG", "IoT platform for connected vehicles", 0),
    (
        "Mercedes Production Line Optimization",
        "Mercedes-Benz AG",
        "Industry 4.0 solution for production efficiency",
        1,
    ),
    ("Siemens Mobile Workforce App", "Siemens AG", "Mobile app for field technicians", 2),
    ("Volkswagen CI/CD Pipeline", "Volkswagen AG", "DevOps automation for software delivery", 3),
    (
        "Bosch Production Analytics",
        "Robert Bosch GmbH",
        "Data analytics for manufacturing insights",
        4,
    ),
    ("BASF Smart Factory Initiative", "BASF SE", "IoT sensors and monitoring systems", 0),
    ("SAP Digital Twin Platform", "SAP SE", "Digital twin implementation for Industry 4.0", 1),
    ("Adidas E-Commerce Portal", "Adidas AG", "Next-generation shopping experience", 2),
    ("Deutsche Bank Cloud Migration", "Deutsche Bank AG", "Cloud infrastructure modernization", 3),
    (
        "Bayer Research Data Platform",
        "Bayer AG",
        "Advanced analytics for pharmaceutical research",
        4,
    ),
];

/// Created under every project
const BOOKING_ACCOUNTS: [&str; 5] = [
    "Scrum Meetings",
    "Refinement Sessions",
    "Development Work",
    "Business Analysis",
    "Quality Assurance",
];

const USERS: [(&str, &str, &str, &str); 8] = [
    ("John Doe", "john.doe@example.com", "developer", "engineering"),
    ("Jane Smith", "jane.smith@example.com", "designer", "design"),
    ("Mike Johnson", "mike.johnson@example.com", "manager", "engineering"),
    ("Sarah Wilson", "sarah.wilson@example.com", "analyst", "business"),
    ("David Brown", "david.brown@example.com", "developer", "engineering"),
    ("Emily Davis", "emily.davis@example.com", "tester", "quality assurance"),
    ("Chris Miller", "chris.miller@example.com", "developer", "engineering"),
    ("Lisa Garcia", "lisa.garcia@example.com", "designer", "design"),
];

/// Rows inserted by one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub departments: usize,
    pub projects: usize,
    pub booking_accounts: usize,
    pub users: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.departments + self.projects + self.booking_accounts + self.users
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(SeedSummary),
    /// The store already held departments or users
    Skipped,
}

pub async fn seed_demo_data(repos: &dyn RepositoryProvider) -> DomainResult<SeedOutcome> {
    let existing_departments = repos.departments().list(()).await?.len();
    let existing_users = repos.users().list(()).await?.len();
    if existing_departments > 0 || existing_users > 0 {
        info!(
            "Skipping demo data: store already has {} departments and {} users",
            existing_departments, existing_users
        );
        return Ok(SeedOutcome::Skipped);
    }

    info!("Seeding demo data...");
    let mut summary = SeedSummary::default();

    let mut department_ids = Vec::with_capacity(DEPARTMENTS.len());
    for (name, description) in DEPARTMENTS {
        let department = repos
            .departments()
            .create(NewDepartment::new(name, description))
            .await?;
        department_ids.push(department.id);
        summary.departments += 1;
    }

    for (name, customer, description, department) in PROJECTS {
        let project = repos
            .projects()
            .create(NewProject::new(
                name,
                customer,
                Some(description.to_string()),
                department_ids[department],
            ))
            .await?;
        summary.projects += 1;

        for account in BOOKING_ACCOUNTS {
            repos
                .booking_accounts()
                .create(NewBookingAccount::new(
                    account,
                    Some(format!("{} activities for project", account)),
                    project.id,
                ))
                .await?;
            summary.booking_accounts += 1;
        }
    }

    for (name, email, role, department) in USERS {
        repos
            .users()
            .create(NewUser::new(name, email, role, department))
            .await?;
        summary.users += 1;
    }

    info!(
        "Demo data seeded: {} departments, {} projects, {} booking accounts, {} users",
        summary.departments, summary.projects, summary.booking_accounts, summary.users
    );

    Ok(SeedOutcome::Seeded(summary))
}
