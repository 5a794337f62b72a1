use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rental-booking")]
#[command(about = "Booking date checks, quotes and account access for the car rental service")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Override the API base URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a booking date range
    Validate { start: String, end: String },
    /// Whole days between two dates (0 if either is unreadable)
    Days { start: String, end: String },
    /// Long display form of a date
    Format { value: Option<String> },
    /// Normalize a date to YYYY-MM-DD
    InputDate { value: String },
    /// Earliest and latest bookable dates
    Range,
    /// Suggested end date for a start date
    Suggest { start: String },
    /// Whether a date falls on a weekend
    Weekend { date: String },
    /// Cost breakdown for a daily rate and day count
    Cost {
        rate: f64,
        #[arg(allow_negative_numbers = true)]
        days: i64,
        #[arg(long)]
        tax_rate: Option<f64>,
    },
    /// Validate dates and price them for a daily rate
    Quote { start: String, end: String, rate: f64 },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "RENTAL_PASSWORD")]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "RENTAL_PASSWORD")]
        password: String,
        #[arg(long)]
        phone: Option<String>,
    },
    Logout,
    /// Show the logged-in user's profile
    Profile,
    /// List pickup locations
    Locations,
}
