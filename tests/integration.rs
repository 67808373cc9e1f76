use atm::report::WithdrawalReport;

use std::{fs, io::Read, path::PathBuf, process::Command};

use csv::{Reader, ReaderBuilder, Trim};

fn read_reports(mut reader: Reader<impl Read>) -> Vec<WithdrawalReport> {
    let mut reports: Vec<WithdrawalReport> = vec![];

    for record in reader.deserialize() {
        reports.push(record.unwrap());
    }

    reports
}

#[test]
fn example_files() {
    let input_dir = PathBuf::from("./resources/test-examples/inputs");
    let expected_dir = PathBuf::from("./resources/test-examples/expected");

    // One requests file per case, inventory files are optional
    let files_to_test = fs::read_dir(input_dir.clone())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("requests_"))
        .count();

    assert!(files_to_test > 0);

    for idx in 1..=files_to_test {
        let requests_file = input_dir.join(format!("requests_{idx}.csv"));
        let inventory_file = input_dir.join(format!("inventory_{idx}.csv"));
        let expected_file = expected_dir.join(format!("reports_{idx}.csv"));

        println!("Testing input: {requests_file:?}");
        println!("Expected: {expected_file:?}");

        let mut command = Command::new(env!("CARGO_BIN_EXE_atm-greedy"));
        command.arg(&requests_file);

        if inventory_file.exists() {
            println!("With inventory: {inventory_file:?}");
            command.arg(&inventory_file);
        }

        let output = command.output().unwrap();

        println!("{}", String::from_utf8(output.stderr).unwrap());
        assert!(output.status.success());

        let output = String::from_utf8(output.stdout).unwrap();

        let actual = read_reports(
            ReaderBuilder::new()
                .trim(Trim::All)
                .from_reader(output.as_bytes()),
        );

        let expected = read_reports(
            ReaderBuilder::new()
                .trim(Trim::All)
                .from_path(expected_file)
                .unwrap(),
        );

        // Order matters, the inventory is depleted request by request
        assert_eq!(actual, expected);
    }
}

#[test]
fn missing_requests_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_atm-greedy"))
        .arg("./resources/test-examples/inputs/does_not_exist.csv")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
