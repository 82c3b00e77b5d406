// src/layout.rs
//! Which chrome the front-end renders for a given path

use serde::Serialize;

const ROLE_AUTH_PAGES: [&str; 4] = ["login", "register", "forgot-password", "reset-password"];
const ADMIN_AUTH_PAGES: [&str; 3] = ["login", "register", "forgot-password"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Marketing,
    JobSeekerAuth,
    JobSeekerDashboard,
    EmployerAuth,
    EmployerDashboard,
    StudentDashboard,
    TeacherDashboard,
    DriverDashboard,
    AdminAuth,
    AdminDashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chrome {
    pub navbar: bool,
    pub footer: bool,
    pub sidebar: bool,
    pub topbar: bool,
}

impl Chrome {
    const PUBLIC: Chrome = Chrome {
        navbar: true,
        footer: true,
        sidebar: false,
        topbar: false,
    };
    const DASHBOARD: Chrome = Chrome {
        navbar: false,
        footer: false,
        sidebar: true,
        topbar: false,
    };
    const BARE: Chrome = Chrome {
        navbar: false,
        footer: false,
        sidebar: false,
        topbar: false,
    };
    const ADMIN: Chrome = Chrome {
        navbar: false,
        footer: false,
        sidebar: true,
        topbar: true,
    };
}

impl Section {
    pub fn classify(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());

        let root = match segments.next() {
            Some(root) => root,
            None => return Section::Marketing,
        };
        let page = segments.next();

        match root {
            "job-seekers" if is_auth_page(page, &ROLE_AUTH_PAGES) => Section::JobSeekerAuth,
            "job-seekers" => Section::JobSeekerDashboard,
            "employers" if is_auth_page(page, &ROLE_AUTH_PAGES) => Section::EmployerAuth,
            "employers" => Section::EmployerDashboard,
            "students" => Section::StudentDashboard,
            "teachers" => Section::TeacherDashboard,
            "drivers" => Section::DriverDashboard,
            "admin" if is_auth_page(page, &ADMIN_AUTH_PAGES) => Section::AdminAuth,
            "admin" => Section::AdminDashboard,
            _ => Section::Marketing,
        }
    }

    pub fn chrome(&self) -> Chrome {
        match self {
            Section::Marketing | Section::JobSeekerAuth | Section::EmployerAuth => Chrome::PUBLIC,
            Section::JobSeekerDashboard
            | Section::EmployerDashboard
            | Section::StudentDashboard
            | Section::TeacherDashboard
            | Section::DriverDashboard => Chrome::DASHBOARD,
            Section::AdminAuth => Chrome::BARE,
            Section::AdminDashboard => Chrome::ADMIN,
        }
    }
}

fn is_auth_page(page: Option<&str>, auth_pages: &[&str]) -> bool {
    page.is_some_and(|page| auth_pages.contains(&page))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutDecision {
    pub section: Section,
    pub chrome: Chrome,
}

pub fn layout_for(path: &str) -> LayoutDecision {
    let section = Section::classify(path);
    LayoutDecision {
        section,
        chrome: section.chrome(),
    }
}
