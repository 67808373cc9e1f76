mod args;
mod config;
mod reader;
mod writer;

use atm::{input, report::WithdrawalReport, services::AtmService, Result};

use std::path::Path;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let input_args = args::parse_input_args()?;
    log::debug!("Found input args: {input_args:?}");

    let inventory = match &input_args.inventory {
        Some(path) => Some(load_inventory(path)?),
        None => None,
    };

    let mut service = atm::build_atm_service(inventory);

    let reports = process_requests(&mut service, &input_args.requests)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&reports)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

fn load_inventory(path: &Path) -> Result<atm::Limits> {
    let records = reader::read_inventory(path)?;
    log::debug!("Loaded {} inventory records", records.len());

    Ok(input::build_limits(records))
}

/// Read requests file and serve every request in order
fn process_requests(service: &mut AtmService, path: &Path) -> Result<Vec<WithdrawalReport>> {
    let requests = reader::read_requests(path)?;

    let mut reports = Vec::with_capacity(requests.len());

    for request in requests.iter() {
        reports.push(service.process(request)?);
    }

    if let Some(inventory) = service.inventory() {
        log::debug!("Inventory left: {inventory:?}");
    }

    Ok(reports)
}

/// Build report from results, and write report to stdout
fn report_to_std_out(reports: &[WithdrawalReport]) -> Result {
    let output = writer::write_reports(reports)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    Ok(())
}
