//! Tool surface for an external agent framework: JSON schemas, dispatch by
//! name and the agent profile that bundles them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::JobMarket;
use crate::inputs::{DEFAULT_COUNTRY, DEFAULT_MAX_RESULTS, DEFAULT_MONTHS};
use crate::tools::{ToolOutput, Toolbox};

pub const SEARCH_ADZUNA_JOBS: &str = "search_adzuna_jobs";
pub const ANALYZE_SALARY_TRENDS: &str = "analyze_salary_trends";
pub const GET_TOP_HIRING_COMPANIES: &str = "get_top_hiring_companies";
pub const LIST_JOB_CATEGORIES: &str = "list_job_categories";
pub const GET_REGIONAL_JOB_STATS: &str = "get_regional_job_stats";
pub const GET_HISTORICAL_SALARY_TRENDS: &str = "get_historical_salary_trends";

const AGENT_NAME: &str = "job_search_agent";
const AGENT_DESCRIPTION: &str = "Job search and job market research specialist";
const AGENT_INSTRUCTION: &str = "You are an expert job search specialist.

Your responsibilities:
1. Search for job opportunities and market data using Adzuna tools
2. Extract key insights from job listings
3. Provide analysis of job market trends, salary distributions, and hiring companies

Always use the appropriate tools to retrieve accurate, current information from Adzuna.";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AgentProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub instruction: &'static str,
    pub tools: Vec<ToolDefinition>,
}

fn country_schema() -> Value {
    json!({
        "type": "string",
        "description": "Two-letter country code, e.g. \"us\", \"gb\"",
        "default": DEFAULT_COUNTRY
    })
}

fn location_schema(example: &str) -> Value {
    json!({
        "type": "string",
        "description": format!("Optional location filter, e.g. \"{}\"", example)
    })
}

/// Definitions of all six tools, in a stable order.
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: SEARCH_ADZUNA_JOBS,
            description: "Search current job openings by keywords and location. \
                Returns job listings with titles, companies, locations and salaries.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Keywords to search for, e.g. \"Python developer\""
                    },
                    "location": location_schema("New York"),
                    "country": country_schema(),
                    "max_results": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 50,
                        "default": DEFAULT_MAX_RESULTS
                    },
                    "sort_by": {
                        "type": "string",
                        "enum": ["relevance", "date", "salary"],
                        "default": "relevance"
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: ANALYZE_SALARY_TRENDS,
            description: "Analyze the salary distribution across salary bands for a job title.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "job_title": {
                        "type": "string",
                        "description": "Job title to analyze, e.g. \"Software Engineer\""
                    },
                    "location": location_schema("London"),
                    "country": country_schema()
                },
                "required": ["job_title"]
            }),
        },
        ToolDefinition {
            name: GET_TOP_HIRING_COMPANIES,
            description: "Get the top 5 companies with the most job openings, \
                optionally filtered by category and location.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "job_category": {
                        "type": "string",
                        "description": "Optional category tag from list_job_categories, e.g. \"it-jobs\""
                    },
                    "location": location_schema("Texas"),
                    "country": country_schema()
                }
            }),
        },
        ToolDefinition {
            name: LIST_JOB_CATEGORIES,
            description: "List the job categories of a country. \
                Their tags filter the other job search tools.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "country": country_schema()
                }
            }),
        },
        ToolDefinition {
            name: GET_REGIONAL_JOB_STATS,
            description: "Break down how many jobs are available in the cities or areas \
                within a larger region.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "Parent location, e.g. \"California\", \"Texas\""
                    },
                    "country": country_schema()
                }
            }),
        },
        ToolDefinition {
            name: GET_HISTORICAL_SALARY_TRENDS,
            description: "Get the average advertised salary for a job title month by month.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "job_title": {
                        "type": "string",
                        "description": "Job title to research"
                    },
                    "location": location_schema("Chicago"),
                    "country": country_schema(),
                    "months": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 24,
                        "default": DEFAULT_MONTHS
                    }
                },
                "required": ["job_title"]
            }),
        },
    ]
}

pub fn agent_profile() -> AgentProfile {
    AgentProfile {
        name: AGENT_NAME,
        description: AGENT_DESCRIPTION,
        instruction: AGENT_INSTRUCTION,
        tools: definitions(),
    }
}

fn parse_args<T: DeserializeOwned>(name: &str, args: Value) -> Result<T, ToolOutput> {
    // agents send null for tools whose arguments are all optional
    let args = match args {
        Value::Null => json!({}),
        args => args,
    };
    serde_json::from_value(args)
        .map_err(|e| ToolOutput::failure(&format!("invalid arguments for {}", name), e))
}

impl<M: JobMarket> Toolbox<M> {
    /// Runs the tool called `name` with JSON arguments, as an agent would.
    pub async fn call(&self, name: &str, args: Value) -> ToolOutput {
        log::debug!("Dispatching tool call {} with {}", name, args);
        match name {
            SEARCH_ADZUNA_JOBS => match parse_args(name, args) {
                Ok(input) => self.search_adzuna_jobs(&input).await,
                Err(failure) => failure,
            },
            ANALYZE_SALARY_TRENDS => match parse_args(name, args) {
                Ok(input) => self.analyze_salary_trends(&input).await,
                Err(failure) => failure,
            },
            GET_TOP_HIRING_COMPANIES => match parse_args(name, args) {
                Ok(input) => self.get_top_hiring_companies(&input).await,
                Err(failure) => failure,
            },
            LIST_JOB_CATEGORIES => match parse_args(name, args) {
                Ok(input) => self.list_job_categories(&input).await,
                Err(failure) => failure,
            },
            GET_REGIONAL_JOB_STATS => match parse_args(name, args) {
                Ok(input) => self.get_regional_job_stats(&input).await,
                Err(failure) => failure,
            },
            GET_HISTORICAL_SALARY_TRENDS => match parse_args(name, args) {
                Ok(input) => self.get_historical_salary_trends(&input).await,
                Err(failure) => failure,
            },
            unknown => {
                log::warn!("Agent requested unknown tool {}", unknown);
                ToolOutput::Failure(format!("Error unknown tool: {}", unknown))
            }
        }
    }
}
