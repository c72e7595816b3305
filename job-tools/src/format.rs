//! Renders API results as plain text for an agent or a terminal.
//!
//! Every renderer answers an empty result with a one-line message naming the
//! query, never with an empty string or a bare header.

use adzuna::{
    CategoriesResult, GeodataResult, HistogramResult, HistoricalResult, SearchResult,
    TopCompaniesResult,
};

const NOT_SPECIFIED: &str = "Not Specified";

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole units with a comma thousands separator: `1234567.8` -> `1,234,568`.
pub fn thousands(value: f64) -> String {
    let grouped = group_digits(&format!("{:.0}", value.abs()));
    if value.is_sign_negative() && grouped != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn search_results(query: &str, result: &SearchResult) -> String {
    if result.is_empty() {
        return format!("No jobs found for query: {}", query);
    }

    let mut output = vec![format!("Found {} jobs for '{}':", result.count, query)];
    output.push(String::new());
    for (idx, job) in result.results.iter().enumerate() {
        output.push(format!("{}. {}", idx + 1, job.title));
        let company = job
            .company
            .display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(NOT_SPECIFIED);
        output.push(format!("   Company: {}", company));
        let location = job
            .location
            .display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(NOT_SPECIFIED);
        output.push(format!("   Location: {}", location));
        output.push(format!("   Apply Here: {}", job.apply_url));
        if let Some((min, max)) = job.salary_range() {
            output.push(format!(
                "   Salary: ${} - ${}",
                thousands(min),
                thousands(max)
            ));
        }
        if !job.description.trim().is_empty() {
            output.push(format!("   Description: {}", job.description));
        }
        output.push(String::new());
    }
    output.join("\n")
}

pub fn salary_histogram(job_title: &str, result: &HistogramResult) -> String {
    let total = result.total();
    if result.is_empty() || total == 0 {
        return format!("No salary data available for: {}", job_title);
    }

    let mut output = vec![format!("Salary Analysis for '{}':", job_title)];
    output.push(String::new());
    output.push("Salary Distribution (Annual):".to_owned());
    // BTreeMap<u64, _> already iterates in ascending bucket order
    for (bucket, count) in &result.histogram {
        let percent = *count as f64 * 100.0 / total as f64;
        output.push(format!(
            "  ${}+: {} jobs ({:.1}%)",
            group_digits(&bucket.to_string()),
            count,
            percent
        ));
    }
    output.join("\n")
}

pub fn historical_trends(job_title: &str, result: &HistoricalResult) -> String {
    if result.is_empty() {
        return format!("No historical data available for: {}", job_title);
    }

    let mut output = vec![format!("Historical Trends for '{}':", job_title)];
    output.push(String::new());
    // "YYYY-MM" keys sort chronologically
    for (month, salary) in &result.month {
        output.push(format!("- {}: ${}", month, thousands(*salary)));
    }
    output.join("\n")
}

pub fn top_companies(category: Option<&str>, result: &TopCompaniesResult) -> String {
    if result.is_empty() {
        return format!(
            "No company data available for: {}",
            category.unwrap_or("all categories")
        );
    }

    let mut output = vec!["Top Hiring Companies:".to_owned()];
    output.push(String::new());
    for (idx, company) in result.leaderboard.iter().enumerate() {
        output.push(format!(
            "{}. {} - {} open positions",
            idx + 1,
            company.name,
            company.count
        ));
    }
    output.join("\n")
}

pub fn categories(country: &str, result: &CategoriesResult) -> String {
    let country = country.trim().to_uppercase();
    if result.is_empty() {
        return format!("No categories available for: {}", country);
    }

    let mut output = vec![format!("Available Job Categories for {}:", country)];
    output.push(String::new());
    for category in &result.results {
        output.push(format!("- {} (Tag: {})", category.label, category.tag));
    }
    output.join("\n")
}

pub fn regional_stats(location: Option<&str>, country: &str, result: &GeodataResult) -> String {
    let region = location.unwrap_or(country);
    if result.is_empty() {
        return format!("No regional data available for: {}", region);
    }

    let mut output = vec![format!("Regional Job Stats for '{}':", region)];
    output.push(String::new());
    for entry in &result.locations {
        output.push(format!(
            "- {}: {} jobs",
            entry.location.name().unwrap_or("Unknown"),
            entry.count
        ));
    }
    output.join("\n")
}
