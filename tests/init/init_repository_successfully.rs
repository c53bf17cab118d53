use crate::common::command::{repository_dir, run_lgit_command};
use crate::common::{read_head, read_index_bytes};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let control_dir = repository_dir.path().canonicalize()?.join(".lgit");

    run_lgit_command(repository_dir.path(), &["init"])
        .env("LOGNAME", "alice")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Initialized empty lgit repository in",
        ))
        .stdout(predicate::str::contains(control_dir.display().to_string()));

    for dir in ["objects", "commits", "snapshots", "refs/heads"] {
        assert!(control_dir.join(dir).is_dir(), "missing .lgit/{}", dir);
    }
    assert_eq!(read_head(repository_dir.path()), "ref: refs/heads/master\n");
    assert!(read_index_bytes(repository_dir.path()).is_empty());

    let author = run_lgit_command(repository_dir.path(), &["config"])
        .assert()
        .success();
    assert_eq!(String::from_utf8(author.get_output().stdout.clone())?, "alice\n");

    Ok(())
}

#[rstest]
fn init_repository_at_given_path(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_lgit_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success();

    assert!(
        repository_dir
            .path()
            .join("nested/project/.lgit/HEAD")
            .is_file()
    );

    Ok(())
}
