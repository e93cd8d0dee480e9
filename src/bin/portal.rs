//! Terminal browser for the campus catalog.
//!
//! Resolves the same pages the web portal serves, straight from the catalog
//! API, and prints them to the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show one category with its courses
//! cargo run --bin portal -- category c1
//!
//! # Show a course with related courses from its department
//! cargo run --bin portal -- course k1
//!
//! # Show a department with its courses and faculty
//! cargo run --bin portal -- department "Computer Science"
//!
//! # Navigate interactively
//! cargo run --bin portal -- browse
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_API_URL` (required): Base URL of the catalog API
//! - `HTTP_TIMEOUT_SECONDS` (optional): Request timeout, default 30

use campus_portal::application::services::{
    CategoryPage, CoursePage, DepartmentPage, EntityResolver, ResolutionSource,
};
use campus_portal::application::{LoadState, ViewSession};
use campus_portal::domain::entities::{Category, Course, Department};
use campus_portal::infrastructure::http::HttpCatalogRepository;
use campus_portal::telemetry;
use campus_portal::web::views::fee_label;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};
use std::sync::Arc;
use std::time::Duration;

type Resolver = EntityResolver<HttpCatalogRepository>;

/// Terminal browser for the campus catalog.
#[derive(Parser)]
#[command(name = "portal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log warnings from degraded fetches to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a category and its courses
    Category {
        /// Category identifier
        id: String,
    },

    /// Show a course and related courses
    Course {
        /// Course identifier
        id: String,
    },

    /// Show a department with its courses and faculty
    Department {
        /// Department name (exact, case-sensitive)
        name: String,
    },

    /// Navigate categories, courses and departments interactively
    Browse,
}

/// One screen of the interactive browser, keyed by what it shows.
#[derive(Debug, Clone, PartialEq)]
enum Screen {
    Categories,
    Category(String),
    Course(String),
    Departments,
    Department(String),
}

impl Screen {
    fn key(&self) -> String {
        match self {
            Screen::Categories => "categories".to_string(),
            Screen::Category(id) => format!("category:{}", id),
            Screen::Course(id) => format!("course:{}", id),
            Screen::Departments => "departments".to_string(),
            Screen::Department(name) => format!("department:{}", name),
        }
    }
}

/// Loaded content of a screen.
#[derive(Debug, Clone)]
enum Page {
    Categories(Vec<Category>),
    Category(CategoryPage),
    Course(CoursePage),
    Departments(Vec<Department>),
    Department(DepartmentPage),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose { "warn" } else { "error" };
    telemetry::init_tracing(level, "text");

    let base_url = std::env::var("CATALOG_API_URL").context("CATALOG_API_URL must be set")?;
    let timeout = std::env::var("HTTP_TIMEOUT_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);

    let repository = HttpCatalogRepository::connect(&base_url, Duration::from_secs(timeout))
        .context("Failed to create catalog client")?;
    let resolver = Arc::new(EntityResolver::new(Arc::new(repository)));

    match cli.command {
        Commands::Category { id } => show(&resolver, Screen::Category(id)).await,
        Commands::Course { id } => show(&resolver, Screen::Course(id)).await,
        Commands::Department { name } => show(&resolver, Screen::Department(name)).await,
        Commands::Browse => browse(resolver).await,
    }
}

/// Resolves a single screen and prints it.
async fn show(resolver: &Arc<Resolver>, screen: Screen) -> Result<()> {
    let state = LoadState::from_result(load(Arc::clone(resolver), screen.clone()).await);
    render(&state);

    match state {
        LoadState::Failed(message) => anyhow::bail!(message),
        _ => Ok(()),
    }
}

/// Interactive navigation loop.
///
/// Every navigation remounts the view session with the new screen key, so a
/// slow response for a screen the user already left is never shown.
async fn browse(resolver: Arc<Resolver>) -> Result<()> {
    let mut session: ViewSession<Page> = ViewSession::new();
    let mut history: Vec<Screen> = Vec::new();
    let mut screen = Screen::Categories;

    loop {
        session.mount(screen.key(), load(Arc::clone(&resolver), screen.clone()));
        let state = session.settled().await;
        render(&state);

        // An unresolvable category sends the user back to the listing.
        if matches!(screen, Screen::Category(_)) && !matches!(state, LoadState::Loaded(_)) {
            println!("{}", "Showing all categories instead".bright_black());
            screen = Screen::Categories;
            continue;
        }

        let next = match prompt(&screen, &state)? {
            Navigation::Go(next) => {
                history.push(screen.clone());
                next
            }
            Navigation::Back => match history.pop() {
                Some(previous) => previous,
                None => Screen::Categories,
            },
            Navigation::Quit => break,
        };
        screen = next;
    }

    session.unmount();
    println!("{}", "Bye".bright_black());
    Ok(())
}

async fn load(resolver: Arc<Resolver>, screen: Screen) -> Result<Page, campus_portal::AppError> {
    match screen {
        Screen::Categories => resolver.list_categories().await.map(Page::Categories),
        Screen::Category(id) => resolver
            .resolve_category_with_courses(&id)
            .await
            .map(Page::Category),
        Screen::Course(id) => resolver
            .resolve_course_with_related(&id)
            .await
            .map(Page::Course),
        Screen::Departments => resolver.list_departments().await.map(Page::Departments),
        Screen::Department(name) => resolver
            .resolve_department(&name)
            .await
            .map(Page::Department),
    }
}

enum Navigation {
    Go(Screen),
    Back,
    Quit,
}

/// Offers the links of the current screen plus the fixed menu entries.
fn prompt(screen: &Screen, state: &LoadState<Page>) -> Result<Navigation> {
    let mut labels: Vec<String> = Vec::new();
    let mut targets: Vec<Navigation> = Vec::new();

    if let LoadState::Loaded(page) = state {
        for (label, target) in links(page) {
            labels.push(label);
            targets.push(Navigation::Go(target));
        }
    }

    if *screen != Screen::Categories {
        labels.push("All categories".to_string());
        targets.push(Navigation::Go(Screen::Categories));
    }
    if *screen != Screen::Departments {
        labels.push("All departments".to_string());
        targets.push(Navigation::Go(Screen::Departments));
    }
    labels.push("Open department by name...".to_string());
    targets.push(Navigation::Go(Screen::Department(String::new())));
    labels.push("Back".to_string());
    targets.push(Navigation::Back);
    labels.push("Quit".to_string());
    targets.push(Navigation::Quit);

    let selection = Select::new()
        .with_prompt("Go to")
        .items(&labels)
        .default(0)
        .interact()?;

    match targets.swap_remove(selection) {
        Navigation::Go(Screen::Department(name)) if name.is_empty() => {
            let name: String = Input::new()
                .with_prompt("Department name")
                .interact_text()?;
            Ok(Navigation::Go(Screen::Department(name)))
        }
        navigation => Ok(navigation),
    }
}

fn links(page: &Page) -> Vec<(String, Screen)> {
    let courses = |courses: &[Course]| {
        courses
            .iter()
            .map(|c| (format!("Course: {}", c.name), Screen::Course(c.id.clone())))
            .collect::<Vec<_>>()
    };

    match page {
        Page::Categories(categories) => categories
            .iter()
            .map(|c| (c.name.clone(), Screen::Category(c.id.clone())))
            .collect(),
        Page::Category(page) => courses(&page.courses),
        Page::Course(page) => courses(&page.related),
        Page::Departments(departments) => departments
            .iter()
            .map(|d| (d.name.clone(), Screen::Department(d.name.clone())))
            .collect(),
        Page::Department(page) => courses(&page.courses),
    }
}

fn render(state: &LoadState<Page>) {
    println!();
    match state {
        LoadState::Idle | LoadState::Loading => {
            println!("{}", "Loading...".bright_black());
        }
        LoadState::NotFound(message) => {
            println!("{} {}", "Not found:".yellow().bold(), message);
        }
        LoadState::Failed(message) => {
            println!("{} {}", "Error:".red().bold(), message);
        }
        LoadState::Loaded(page) => render_page(page),
    }
    println!();
}

fn render_page(page: &Page) {
    match page {
        Page::Categories(categories) => {
            println!("{}", "Categories".bright_blue().bold());
            if categories.is_empty() {
                println!("  {}", "No categories".yellow());
            }
            for category in categories {
                println!("  {}", category.name.cyan());
                if let Some(description) = &category.description {
                    println!("    {}", description.bright_black());
                }
            }
        }
        Page::Category(page) => {
            println!("{}", page.category.name.bright_blue().bold());
            if let Some(description) = &page.category.description {
                println!("{}", description);
            }
            println!();
            print_courses("Courses", &page.courses);
        }
        Page::Course(page) => {
            let course = &page.course;
            println!("{}", course.name.bright_blue().bold());
            if let Some(duration) = &course.duration {
                println!("  Duration: {}", duration.cyan());
            }
            let fees = fee_label(course.fee_structure.as_ref());
            if !fees.is_empty() {
                println!("  {}", fees.bright_yellow());
            }
            if let Some(description) = &course.description {
                println!();
                println!("{}", description);
            }
            println!();
            print_courses("Related courses", &page.related);
        }
        Page::Departments(departments) => {
            println!("{}", "Departments".bright_blue().bold());
            if departments.is_empty() {
                println!("  {}", "No departments".yellow());
            }
            for department in departments {
                println!("  {}", department.name.cyan());
            }
        }
        Page::Department(page) => {
            println!("{}", page.department.name.bright_blue().bold());
            if page.source == ResolutionSource::Fallback {
                println!("  {}", "(assembled from course and faculty lists)".bright_black());
            }
            if let Some(description) = &page.department.description {
                println!("{}", description);
            }
            println!();
            print_courses("Courses", &page.courses);
            println!();
            println!("{}", "Faculty".bright_white().bold());
            if page.faculty.is_empty() {
                println!("  {}", "No faculty listed".yellow());
            }
            for member in &page.faculty {
                match &member.designation {
                    Some(designation) => {
                        println!("  {} {}", member.name.cyan(), designation.bright_black())
                    }
                    None => println!("  {}", member.name.cyan()),
                }
            }
        }
    }
}

fn print_courses(title: &str, courses: &[Course]) {
    println!("{}", title.bright_white().bold());
    if courses.is_empty() {
        println!("  {}", "No courses".yellow());
        return;
    }
    for course in courses {
        let fees = fee_label(course.fee_structure.as_ref());
        if fees.is_empty() {
            println!("  {}", course.name.cyan());
        } else {
            println!("  {:<40} {}", course.name.cyan(), fees.bright_black());
        }
    }
}
