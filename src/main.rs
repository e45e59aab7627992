// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! InternMatch portal CLI.
//!
//! Thin command surface over the client library: each command restores
//! the session, applies the same role gate the web portal applies to the
//! matching page, and calls one service operation.

use clap::{Parser, Subcommand};
use internmatch::auth::AccessDecision;
use internmatch::config::Config;
use internmatch::error::{AppError, Result};
use internmatch::gateway::HttpGateway;
use internmatch::models::{
    ApplicationStatus, CompanyProfileInput, CreateJobInput, ExperienceLevel, JobStatus, JobType,
    Role, StudentProfileInput,
};
use internmatch::services::{JobFilter, LoginInput, ResetPasswordInput, SignupInput};
use internmatch::Portal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "internmatch")]
#[command(about = "InternMatch portal client - students, companies, and admins")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login { email: String, password: String },

    /// Create an account
    Signup {
        email: String,
        /// Account role (student, company, admin)
        role: Role,
        password: String,
        confirm_password: String,
    },

    /// Log out and clear the stored credential
    Logout,

    /// Show the current session and the server's view of it
    Whoami,

    /// Request a password reset email
    ForgotPassword { email: String },

    /// Set a new password using a reset token
    ResetPassword {
        token: String,
        new_password: String,
        confirm_password: String,
    },

    /// Browse and manage job postings
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },

    /// Apply to a job (students)
    Apply {
        job_id: String,

        /// Optional cover letter text
        #[arg(long)]
        cover_letter: Option<String>,
    },

    /// Review applications
    Applications {
        #[command(subcommand)]
        command: ApplicationCommands,
    },

    /// Manage your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Administrative operations
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
enum JobCommands {
    /// List jobs
    List {
        /// Filter by status (open, closed)
        #[arg(short, long)]
        status: Option<JobStatus>,

        /// Filter by posting company profile ID
        #[arg(long)]
        company: Option<String>,
    },

    /// Post a new job (companies)
    Create {
        title: String,

        /// Seniority band (intern, junior)
        #[arg(long, default_value = "intern")]
        job_type: JobType,

        /// Required skills, comma separated
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        salary: Option<String>,
    },

    /// Close an open job (companies)
    Close { job_id: String },
}

#[derive(Subcommand)]
enum ApplicationCommands {
    /// List applications
    List,

    /// Move an application to a new status (companies)
    SetStatus {
        application_id: String,
        /// Target status (reviewing, interview_scheduled, accepted, rejected)
        status: ApplicationStatus,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show your profile
    Show,

    /// Create or update your student profile
    Student {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Skills, comma separated
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,

        #[arg(long)]
        cv_url: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        /// Experience band (intern, junior)
        #[arg(long)]
        level: Option<ExperienceLevel>,
    },

    /// Create or update your company profile
    Company {
        company_name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        industry: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        logo_url: Option<String>,

        #[arg(long)]
        website: Option<String>,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// List all registered users
    Users,

    /// Delete a user account
    DeleteUser { user_id: String },

    /// List company profiles
    Companies {
        /// Only show verified companies
        #[arg(long)]
        verified_only: bool,
    },

    /// Verify a company so it can post jobs
    Verify { company_profile_id: String },

    /// List student profiles
    Students,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let portal = Portal::connect(&config)?;

    // Hydrate the session from the stored credential before gating.
    portal.auth().restore();

    if let Err(err) = run(cli, &portal).await {
        tracing::debug!(error = %err, "command failed");
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli, portal: &Portal<HttpGateway>) -> Result<()> {
    match cli.command {
        Commands::Login { email, password } => {
            let user = portal.auth().login(LoginInput { email, password }).await?;
            println!("Logged in as {} ({})", user.email, user.role);
        }

        Commands::Signup {
            email,
            role,
            password,
            confirm_password,
        } => {
            let user = portal
                .auth()
                .signup(SignupInput {
                    email,
                    password,
                    confirm_password,
                    role,
                })
                .await?;
            println!("Account created for {} ({})", user.email, user.role);
        }

        Commands::Logout => {
            portal.auth().logout()?;
            println!("Logged out");
        }

        Commands::Whoami => {
            let Some(claims) = portal.session().claims() else {
                println!("Not logged in");
                return Ok(());
            };
            println!("Session: {} ({})", claims.email, claims.role);
            let user = portal.auth().me().await?;
            println!("Server:  {} ({})", user.email, user.role);
        }

        Commands::ForgotPassword { email } => {
            portal.auth().request_password_reset(&email).await?;
            println!("If {email} has an account, a reset email is on its way");
        }

        Commands::ResetPassword {
            token,
            new_password,
            confirm_password,
        } => {
            portal
                .auth()
                .reset_password(ResetPasswordInput {
                    token,
                    new_password,
                    confirm_password,
                })
                .await?;
            println!("Password updated, you can log in now");
        }

        Commands::Jobs { command } => run_jobs(command, portal).await?,

        Commands::Apply {
            job_id,
            cover_letter,
        } => {
            require(portal, Some(Role::Student))?;
            let job = portal.jobs().find(&job_id).await?;
            let application = portal.applications().apply(&job, cover_letter).await?;
            println!(
                "Applied to {} (status {}, match score {:.2})",
                job.title, application.status, application.match_score
            );
        }

        Commands::Applications { command } => run_applications(command, portal).await?,

        Commands::Profile { command } => run_profile(command, portal).await?,

        Commands::Admin { command } => {
            require(portal, Some(Role::Admin))?;
            run_admin(command, portal).await?;
        }
    }
    Ok(())
}

async fn run_jobs(command: JobCommands, portal: &Portal<HttpGateway>) -> Result<()> {
    match command {
        JobCommands::List { status, company } => {
            require(portal, None)?;
            let jobs = portal
                .jobs()
                .list(&JobFilter {
                    status,
                    company_profile_id: company,
                })
                .await?;
            print_json(&jobs)?;
        }

        JobCommands::Create {
            title,
            job_type,
            skills,
            description,
            location,
            salary,
        } => {
            require(portal, Some(Role::Company))?;
            let job = portal
                .jobs()
                .create(&CreateJobInput {
                    title,
                    description,
                    job_type,
                    required_skills: skills,
                    location,
                    salary_range: salary,
                })
                .await?;
            println!("Posted {} ({})", job.title, job.id);
        }

        JobCommands::Close { job_id } => {
            require(portal, Some(Role::Company))?;
            let job = portal.jobs().find(&job_id).await?;
            let job = portal.jobs().close(&job).await?;
            println!("Closed {} ({})", job.title, job.id);
        }
    }
    Ok(())
}

async fn run_applications(
    command: ApplicationCommands,
    portal: &Portal<HttpGateway>,
) -> Result<()> {
    match command {
        ApplicationCommands::List => {
            require(portal, None)?;
            let applications = portal.applications().list().await?;
            print_json(&applications)?;
        }

        ApplicationCommands::SetStatus {
            application_id,
            status,
        } => {
            require(portal, Some(Role::Company))?;
            let application = portal.applications().find(&application_id).await?;
            let application = portal.applications().update_status(&application, status).await?;
            println!("Application {} is now {}", application.id, application.status);
        }
    }
    Ok(())
}

async fn run_profile(command: ProfileCommands, portal: &Portal<HttpGateway>) -> Result<()> {
    match command {
        ProfileCommands::Show => {
            require(portal, None)?;
            let claims = portal.session().claims();
            match claims.map(|c| c.role) {
                Some(Role::Student) => match portal.profiles().student().await? {
                    Some(profile) => print_json(&profile)?,
                    None => println!("No student profile yet (internmatch profile student)"),
                },
                Some(Role::Company) => match portal.profiles().company().await? {
                    Some(profile) => print_json(&profile)?,
                    None => println!("No company profile yet (internmatch profile company)"),
                },
                _ => println!("Admin accounts have no profile"),
            }
        }

        ProfileCommands::Student {
            first_name,
            last_name,
            skills,
            cv_url,
            bio,
            level,
        } => {
            require(portal, Some(Role::Student))?;
            let input = StudentProfileInput {
                first_name,
                last_name,
                skills,
                cv_url,
                bio,
                experience_level: level,
                education: vec![],
            };
            let profile = if portal.profiles().student().await?.is_some() {
                portal.profiles().update_student(&input).await?
            } else {
                portal.profiles().create_student(&input).await?
            };
            print_json(&profile)?;
        }

        ProfileCommands::Company {
            company_name,
            description,
            industry,
            location,
            logo_url,
            website,
        } => {
            require(portal, Some(Role::Company))?;
            let input = CompanyProfileInput {
                company_name,
                description,
                industry,
                location,
                logo_url,
                website,
            };
            let profile = if portal.profiles().company().await?.is_some() {
                portal.profiles().update_company(&input).await?
            } else {
                portal.profiles().create_company(&input).await?
            };
            print_json(&profile)?;
        }
    }
    Ok(())
}

async fn run_admin(command: AdminCommands, portal: &Portal<HttpGateway>) -> Result<()> {
    match command {
        AdminCommands::Users => print_json(&portal.admin().users().await?)?,

        AdminCommands::DeleteUser { user_id } => {
            let deleted = portal.admin().delete_user(&user_id).await?;
            if deleted {
                println!("Deleted user {user_id}");
            } else {
                println!("User {user_id} was not deleted");
            }
        }

        AdminCommands::Companies { verified_only } => {
            print_json(&portal.admin().company_profiles(verified_only).await?)?;
        }

        AdminCommands::Verify { company_profile_id } => {
            let companies = portal.admin().company_profiles(false).await?;
            let profile = companies
                .iter()
                .find(|profile| profile.id == company_profile_id)
                .ok_or_else(|| {
                    AppError::Validation(format!("no company with ID {company_profile_id}"))
                })?;
            let updated = portal.admin().verify_company(profile).await?;
            println!("{} is verified", updated.company_name);
        }

        AdminCommands::Students => print_json(&portal.admin().student_profiles().await?)?,
    }
    Ok(())
}

/// Apply the gate decision the web portal applies to the matching page.
fn require(portal: &Portal<HttpGateway>, required: Option<Role>) -> Result<()> {
    match portal.session().decide(required) {
        Some(AccessDecision::Allow) => Ok(()),
        Some(AccessDecision::RedirectHome) => Err(AppError::Validation(
            "your account role does not have access to this command".to_string(),
        )),
        _ => Err(AppError::Validation(
            "please log in first (internmatch login <email> <password>)".to_string(),
        )),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("rendering output: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Initialize logging; level comes from `RUST_LOG`, warnings by default.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("internmatch=info".parse().unwrap()),
        )
        .with(format)
        .init();
}
