use std::process::ExitCode;

use adzuna::{Client, SortBy};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use job_tools::inputs::{
    HistoricalTrendsInput, JobCategoriesInput, JobSearchInput, RegionalStatsInput,
    SalaryAnalysisInput, TopCompaniesInput, DEFAULT_COUNTRY, DEFAULT_MAX_RESULTS, DEFAULT_MONTHS,
};
use job_tools::{agent_profile, ToolOutput, Toolbox};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Tool(ToolCommand),
    /// Print the agent profile and tool schemas as JSON
    Tools {},
}

/// Commands that run one tool against the Adzuna API.
#[derive(Subcommand, Debug)]
enum ToolCommand {
    /// Search current job openings
    Search {
        query: String,
        #[clap(long)]
        location: Option<String>,
        #[clap(long, default_value = DEFAULT_COUNTRY)]
        country: String,
        #[clap(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: u32,
        /// relevance, date or salary
        #[clap(long)]
        sort_by: Option<SortBy>,
    },
    /// Salary distribution for a job title
    Salary {
        job_title: String,
        #[clap(long)]
        location: Option<String>,
        #[clap(long, default_value = DEFAULT_COUNTRY)]
        country: String,
    },
    /// Companies with the most openings
    TopCompanies {
        #[clap(long)]
        category: Option<String>,
        #[clap(long)]
        location: Option<String>,
        #[clap(long, default_value = DEFAULT_COUNTRY)]
        country: String,
    },
    /// Job categories of a country
    Categories {
        #[clap(long, default_value = DEFAULT_COUNTRY)]
        country: String,
    },
    /// Job counts per sub-region
    Regions {
        #[clap(long)]
        location: Option<String>,
        #[clap(long, default_value = DEFAULT_COUNTRY)]
        country: String,
    },
    /// Monthly average salary for a job title
    History {
        job_title: String,
        #[clap(long)]
        location: Option<String>,
        #[clap(long, default_value = DEFAULT_COUNTRY)]
        country: String,
        #[clap(long, default_value_t = DEFAULT_MONTHS)]
        months: u32,
    },
    /// Run a tool by name with JSON arguments
    Call {
        name: String,
        #[clap(default_value = "{}")]
        args: String,
    },
}

async fn run(toolbox: &Toolbox<Client>, command: ToolCommand) -> ToolOutput {
    match command {
        ToolCommand::Search {
            query,
            location,
            country,
            max_results,
            sort_by,
        } => {
            let input = JobSearchInput {
                query,
                location,
                country,
                max_results,
                sort_by,
            };
            toolbox.search_adzuna_jobs(&input).await
        }
        ToolCommand::Salary {
            job_title,
            location,
            country,
        } => {
            let input = SalaryAnalysisInput {
                job_title,
                location,
                country,
            };
            toolbox.analyze_salary_trends(&input).await
        }
        ToolCommand::TopCompanies {
            category,
            location,
            country,
        } => {
            let input = TopCompaniesInput {
                job_category: category,
                location,
                country,
            };
            toolbox.get_top_hiring_companies(&input).await
        }
        ToolCommand::Categories { country } => {
            toolbox
                .list_job_categories(&JobCategoriesInput { country })
                .await
        }
        ToolCommand::Regions { location, country } => {
            toolbox
                .get_regional_job_stats(&RegionalStatsInput { location, country })
                .await
        }
        ToolCommand::History {
            job_title,
            location,
            country,
            months,
        } => {
            let input = HistoricalTrendsInput {
                job_title,
                location,
                country,
                months,
            };
            toolbox.get_historical_salary_trends(&input).await
        }
        ToolCommand::Call { name, args } => match serde_json::from_str(&args) {
            Ok(args) => toolbox.call(&name, args).await,
            Err(e) => ToolOutput::Failure(format!("Error invalid arguments for {}: {}", name, e)),
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();

    let command = match args.command {
        Commands::Tool(command) => command,
        Commands::Tools {} => return print_profile(),
    };

    let client = match Client::from_env() {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to initialize Adzuna client: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let toolbox = Toolbox::new(client);

    let output = run(&toolbox, command).await;
    if output.is_success() {
        println!("{}", output);
        ExitCode::SUCCESS
    } else {
        eprintln!("{}", output);
        ExitCode::FAILURE
    }
}

fn print_profile() -> ExitCode {
    match serde_json::to_string_pretty(&agent_profile()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize agent profile: {}", e);
            ExitCode::FAILURE
        }
    }
}
