//! `optics` command: run the inventory and render the report.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use tabled::Tabled;
use tracing::debug;

use aciscope_core::{
    DeviceId, ErrorPolicy, FabricSession, InterfaceName, InventoryRequest, QueryFailure,
    ReportRow, gather,
};

use crate::cli::{ErrorPolicyArg, GlobalOpts, OpticsArgs, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct OpticRow {
    #[tabled(rename = "Switch")]
    switch: String,
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "Optic")]
    optic: String,
    #[tabled(rename = "LLDP Neighbor")]
    neighbor: String,
    #[tabled(rename = "Neighbor Interface")]
    neighbor_interface: String,
}

impl OpticRow {
    fn new(r: &ReportRow) -> Self {
        Self {
            switch: r.switch.to_string(),
            interface: r.interface.to_string(),
            optic: r.optic.clone(),
            neighbor: r.neighbor.clone(),
            neighbor_interface: r.neighbor_interface.clone(),
        }
    }
}

fn plain_line(r: &ReportRow) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        r.switch, r.interface, r.optic, r.neighbor, r.neighbor_interface
    )
}

impl From<ErrorPolicyArg> for ErrorPolicy {
    fn from(arg: ErrorPolicyArg) -> Self {
        match arg {
            ErrorPolicyArg::FailFast => ErrorPolicy::FailFast,
            ErrorPolicyArg::BestEffort => ErrorPolicy::BestEffort,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: OpticsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load_config()?;
    let controller_config = config::build_controller_config(global, &cfg)?;
    let profile_name = config::active_profile_name(global, &cfg);

    let request = InventoryRequest {
        switch: args.switch.map(DeviceId::from),
        interface: args.interface.map(InterfaceName::from),
        policy: args
            .error_policy
            .map_or(cfg.defaults.error_policy, ErrorPolicy::from),
    };
    debug!(?request, "starting inventory");

    let session = FabricSession::connect(&controller_config)
        .await
        .map_err(|e| CliError::from(e).with_profile(&profile_name))?;
    let result = gather(&session, &request).await;
    session.close().await;
    let report = result?;

    let mut out = output::render_list(
        &global.output,
        &report.rows,
        OpticRow::new,
        plain_line,
    )?;
    if global.output == OutputFormat::Table && !out.is_empty() {
        // Blank line after the table.
        out.push('\n');
    }
    output::print_output(&out, global.quiet);

    print_skipped(&report.skipped, output::should_color(&global.color));
    Ok(())
}

/// Summarize units dropped under the best-effort policy on stderr.
fn print_skipped(skipped: &[QueryFailure], color: bool) {
    if skipped.is_empty() {
        return;
    }

    let mut stderr = io::stderr().lock();
    let header = format!("Skipped {} unit(s) after failed queries:", skipped.len());
    if color {
        let _ = writeln!(stderr, "{}", header.yellow().bold());
    } else {
        let _ = writeln!(stderr, "{header}");
    }

    for failure in skipped {
        let _ = writeln!(stderr, "  {failure}");
        if let Some(body) = failure.body.as_deref().filter(|b| !b.trim().is_empty()) {
            if color {
                let _ = writeln!(stderr, "    {}", body.dimmed());
            } else {
                let _ = writeln!(stderr, "    {body}");
            }
        }
    }
}
