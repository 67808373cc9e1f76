use atm::input::{InputRequest, InventoryRecord, WithdrawalRequest};
use atm::Result;

use std::{
    fs::File,
    path::Path,
};

use csv::{Reader, ReaderBuilder, Trim};

fn build_csv_reader(filepath: &Path) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(filepath)?;

    return Ok(reader);
}

/// Reads every well-formed request, logging and skipping the rest
pub fn read_requests(filepath: &Path) -> Result<Vec<WithdrawalRequest>> {
    let mut rdr = build_csv_reader(filepath)?;
    let mut requests = vec![];

    for record in rdr.deserialize::<InputRequest>() {
        log::debug!("Parsing record into InputRequest: {record:?}");
        let input = match record {
            Ok(input) => input,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        match input.parse_request() {
            Ok(request) => requests.push(request),
            Err(e) => log::warn!("{e}"),
        }
    }

    return Ok(requests);
}

pub fn read_inventory(filepath: &Path) -> Result<Vec<InventoryRecord>> {
    let mut rdr = build_csv_reader(filepath)?;

    let records: Vec<InventoryRecord> = rdr
        .deserialize::<InventoryRecord>()
        .filter_map(|record| match record {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        })
        .collect();

    return Ok(records);
}
