use crate::common::command::{empty_repository_dir, run_lgit_command};
use crate::common::file::write_generated_files;
use crate::common::{read_index_records, sha1_hex};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

const UNSET_HASH: &str = "0000000000000000000000000000000000000000";

#[rstest]
fn add_single_file_to_index_successfully(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = empty_repository_dir.path();
    let files = write_generated_files(dir, 1);
    let file = files.first().unwrap();
    let file_name = file.path.file_name().unwrap().to_string_lossy().to_string();

    run_lgit_command(dir, &["add", &file_name])
        .assert()
        .success();

    let oid = sha1_hex(file.content.as_bytes());
    let records = read_index_records(dir);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.len(), 5);
    assert_eq!(record[0].len(), 14, "mtime has second precision");
    assert_eq!(record[1], oid);
    assert_eq!(record[2], oid);
    assert_eq!(record[3], UNSET_HASH);
    assert_eq!(record[4], file_name);

    let object_path = dir.join(".lgit/objects").join(&oid[..2]).join(&oid[2..]);
    assert_eq!(std::fs::read_to_string(object_path)?, file.content);

    Ok(())
}
