use crate::export::ExportFormat;
use crate::models::log_kind::LogKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for reefadmin
/// CLI application to manage restoration areas, logs and review submissions
#[derive(Parser)]
#[command(
    name = "reefadmin",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple admin CLI: manage restoration areas, field logs and review submissions over the program's REST API",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (useful for tests or staging)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init {
        /// API base URL to write into the new config
        #[arg(long = "api-url")]
        api_url: Option<String>,
    },

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// List work areas
    Areas {
        /// Page to show (1-based)
        #[arg(long, short, default_value_t = 1)]
        page: u32,

        #[arg(long, help = "Filter by restoration region (POHANG, ULJIN)")]
        region: Option<String>,

        #[arg(long, help = "Filter by habitat type (ROCKY, MIXED, OTHER)")]
        habitat: Option<String>,

        #[arg(long, help = "Filter by project level (OBSERVATION, SETTLEMENT, GROWTH, MANAGEMENT)")]
        level: Option<String>,

        #[arg(long, help = "Only areas started on or after this date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Only areas started on or before this date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, help = "Search by area name")]
        keyword: Option<String>,
    },

    /// Show one work area with its logs grouped per species
    Area {
        /// Area id
        area_id: i64,

        /// Show only one log kind instead of all four
        #[arg(long = "logs", value_enum)]
        logs: Option<LogKind>,

        /// Hide one species from the grouped view (display-only filter,
        /// nothing is deleted on the server)
        #[arg(long = "without-species", value_name = "SPECIES_ID")]
        without_species: Option<i64>,
    },

    /// Create a new work area
    AddArea {
        #[arg(long)]
        name: String,

        #[arg(long, help = "Restoration region: POHANG or ULJIN")]
        region: String,

        /// Project start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Project end date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        #[arg(long, help = "Habitat type: ROCKY, MIXED or OTHER")]
        habitat: String,

        /// Average depth in meters
        #[arg(long)]
        depth: f64,

        /// Area size in square meters
        #[arg(long = "size")]
        area_size: f64,

        #[arg(long, help = "Project level: OBSERVATION, SETTLEMENT, GROWTH or MANAGEMENT")]
        level: String,

        #[arg(long = "attachment", help = "Attachment trend: STABLE, DECREASED or UNSTABLE")]
        attachment: String,

        #[arg(long)]
        lat: f64,

        #[arg(long)]
        lon: f64,
    },

    /// Delete a work area
    DelArea {
        area_id: i64,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Add a log record to an area
    AddLog {
        area_id: i64,

        #[arg(long = "kind", value_enum)]
        kind: LogKind,

        /// Record date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        // transplant / growth
        #[arg(long, help = "Species id (transplant and growth logs)")]
        species: Option<i64>,

        #[arg(long, help = "Transplant method code, e.g. ROPE or SEEDLING_STRING")]
        method: Option<String>,

        #[arg(long, help = "Quantity in the method's unit")]
        count: Option<i64>,

        #[arg(long = "size", help = "Transplanted area in square meters")]
        area_size: Option<f64>,

        #[arg(long, help = "Grade code: GOOD, NORMAL or POOR")]
        status: Option<String>,

        #[arg(long = "representative", help = "Mark this growth record as representative")]
        representative: bool,

        #[arg(long = "attachment-rate", help = "Attachment rate in percent")]
        attachment_rate: Option<f64>,

        #[arg(long = "survival-rate", help = "Survival rate in percent")]
        survival_rate: Option<f64>,

        #[arg(long = "length", help = "Growth length in centimeters")]
        growth_length: Option<f64>,

        // environment
        #[arg(long, help = "Water temperature in °C")]
        temperature: Option<f64>,

        #[arg(long, help = "Dissolved oxygen in mg/L")]
        oxygen: Option<f64>,

        #[arg(long, help = "Nutrient concentration")]
        nutrient: Option<f64>,

        #[arg(long, help = "Visibility: BAD, NORMAL or GOOD")]
        visibility: Option<String>,

        #[arg(long, help = "Current: BAD, NORMAL or GOOD")]
        current: Option<String>,

        #[arg(long, help = "Surge: BAD, NORMAL or GOOD")]
        surge: Option<String>,

        #[arg(long, help = "Wave: BAD, NORMAL or GOOD")]
        wave: Option<String>,

        // media
        #[arg(long, help = "Media URL (media logs)")]
        url: Option<String>,

        #[arg(long)]
        caption: Option<String>,

        #[arg(long, help = "Media category: PHOTO, VIDEO, DRONE or OTHER")]
        category: Option<String>,
    },

    /// Update an existing log record in place
    EditLog {
        area_id: i64,

        #[arg(long = "kind", value_enum)]
        kind: LogKind,

        #[arg(long = "id", help = "Log id to update")]
        log_id: i64,

        /// Record date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        #[arg(long, help = "Species id (transplant and growth logs)")]
        species: Option<i64>,

        #[arg(long, help = "Transplant method code, e.g. ROPE or SEEDLING_STRING")]
        method: Option<String>,

        #[arg(long, help = "Quantity in the method's unit")]
        count: Option<i64>,

        #[arg(long = "size", help = "Transplanted area in square meters")]
        area_size: Option<f64>,

        #[arg(long, help = "Grade code: GOOD, NORMAL or POOR")]
        status: Option<String>,

        #[arg(long = "representative")]
        representative: bool,

        #[arg(long = "attachment-rate")]
        attachment_rate: Option<f64>,

        #[arg(long = "survival-rate")]
        survival_rate: Option<f64>,

        #[arg(long = "length")]
        growth_length: Option<f64>,

        #[arg(long)]
        temperature: Option<f64>,

        #[arg(long)]
        oxygen: Option<f64>,

        #[arg(long)]
        nutrient: Option<f64>,

        #[arg(long)]
        visibility: Option<String>,

        #[arg(long)]
        current: Option<String>,

        #[arg(long)]
        surge: Option<String>,

        #[arg(long)]
        wave: Option<String>,
    },

    /// Delete a log record from an area
    DelLog {
        area_id: i64,

        #[arg(long = "kind", value_enum)]
        kind: LogKind,

        #[arg(long = "id", help = "Log id to delete")]
        log_id: i64,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Export an area's species-grouped logs to a local CSV file
    LogExport {
        area_id: i64,

        #[arg(long = "kind", value_enum, help = "transplant or growth")]
        kind: LogKind,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the species registry (list by default)
    Species {
        #[arg(long, help = "Add a species with the given name")]
        add: Option<String>,

        #[arg(long, help = "Rename the species with this id (requires --name)")]
        rename: Option<i64>,

        #[arg(long, requires = "rename", help = "New name (used with --rename)")]
        name: Option<String>,

        #[arg(long, help = "Delete the species with this id")]
        del: Option<i64>,
    },

    /// List review submissions
    Submissions {
        /// Page to show (1-based)
        #[arg(long, short, default_value_t = 1)]
        page: u32,

        #[arg(long = "size", help = "Page size (defaults to the configured page_size)")]
        page_size: Option<u32>,

        #[arg(long, default_value = "all", help = "Filter by status: all, PENDING, APPROVED, REJECTED, DELETED")]
        status: String,

        #[arg(long, help = "Search keyword")]
        keyword: Option<String>,

        #[arg(long, help = "Filter by activity type, e.g. TRANSPLANT or MONITORING")]
        activity: Option<String>,

        #[arg(long, help = "Submitted on or after this date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Submitted on or before this date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "sort-by", help = "Sort field (server default when omitted)")]
        sort_by: Option<String>,

        #[arg(long = "sort-dir", help = "asc or desc")]
        sort_dir: Option<String>,
    },

    /// Show one submission in full
    Submission {
        /// Submission id
        id: i64,
    },

    /// Approve one or more submissions
    Approve {
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Reject one or more submissions with a reason
    Reject {
        #[arg(required = true)]
        ids: Vec<i64>,

        #[arg(long, help = "Rejection message sent to the author")]
        message: String,

        #[arg(long, help = "Feedback template code")]
        template: Option<String>,
    },

    /// Delete one or more submissions
    DelSub {
        #[arg(required = true)]
        ids: Vec<i64>,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Download a server-side export of selected submissions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "ids", value_delimiter = ',', required = true)]
        ids: Vec<i64>,

        #[arg(long, value_name = "FILE", help = "Output file (server-suggested name when omitted)")]
        file: Option<String>,

        #[arg(long, help = "Prompt forwarded to the draft-report generator (PDF only)")]
        prompt: Option<String>,

        #[arg(long = "report-type", help = "Report type (PDF only, default INTERNAL_DRAFT)")]
        report_type: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
