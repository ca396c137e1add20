//! Clap derive structures for the `aciscope` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. This
//! file is also compiled by `build.rs` for man pages, so it may only
//! depend on `clap` and `clap_complete`.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// aciscope -- optics and LLDP neighbor inventory for ACI fabrics
#[derive(Debug, Parser)]
#[command(
    name = "aciscope",
    version,
    about = "Inventory optics and LLDP neighbors across an ACI fabric",
    long_about = "Queries the APIC REST API for every leaf and spine switch, lists their\n\
        physical interfaces, and joins each interface's transceiver state with\n\
        its LLDP adjacencies into one report.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller profile to use
    #[arg(long, short = 'p', env = "ACISCOPE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// APIC URL (overrides profile)
    #[arg(long, short = 'c', env = "ACISCOPE_CONTROLLER", global = true)]
    pub controller: Option<String>,

    /// APIC username (overrides profile)
    #[arg(long, short = 'u', env = "ACISCOPE_USERNAME", global = true)]
    pub username: Option<String>,

    /// APIC password (prefer the keyring: `aciscope config set-password`)
    #[arg(long, env = "ACISCOPE_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Fabric pod the switches live in [default: profile, else 1]
    #[arg(long, env = "ACISCOPE_POD", global = true)]
    pub pod: Option<u16>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ACISCOPE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ACISCOPE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: profile, else 30]
    #[arg(long, env = "ACISCOPE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Tab-separated, one row per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// What a failed per-switch or per-interface query does to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorPolicyArg {
    /// Stop at the first failed query and print no report
    FailFast,
    /// Skip the failed switch or interface and report the rest
    BestEffort,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report optics and LLDP neighbors per switch interface
    #[command(alias = "inventory", alias = "inv")]
    Optics(OpticsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  OPTICS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct OpticsArgs {
    /// Only this switch node id (e.g. 101). Not checked against the fabric.
    #[arg(long, short = 's')]
    pub switch: Option<String>,

    /// Only this interface (e.g. eth1/1), on every selected switch
    #[arg(long, short = 'i')]
    pub interface: Option<String>,

    /// Failure handling [default: config `defaults.error_policy`, else fail-fast]
    #[arg(long, value_enum)]
    pub error_policy: Option<ErrorPolicyArg>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (secrets masked)
    Show,

    /// Set a value on the active profile
    Set {
        /// Profile key: controller, username, password_env, pod, insecure, timeout, ca_cert
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store the active profile's APIC password in the system keyring
    SetPassword,

    /// Print the config file location
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
