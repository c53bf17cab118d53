use crate::common::command::{AUTHOR_DATE, init_repository_dir, run_lgit_command, stdout_of};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::{list_records, read_branch_ref, read_index_paths, sha1_hex};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn short_id(id: &str) -> String {
    let digits = id.replace('.', "");
    digits[digits.len() - 7..].to_string()
}

#[rstest]
fn stash_resets_the_working_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head_id = read_branch_ref(dir, "master");
    let short = short_id(&head_id);

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    write_file(FileSpec::new(dir.join("new/4.txt"), "four".to_string()));
    run_lgit_command(dir, &["add", "."]).assert().success();

    let output = stdout_of(
        run_lgit_command(dir, &["stash"]).env("LGIT_AUTHOR_DATE", AUTHOR_DATE),
    );

    assert_eq!(
        output,
        format!(
            "Saved working directory and index state WIP on master: {short} Initial commit\n\
             HEAD is now at {short} Initial commit\n"
        )
    );
    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert!(!dir.join("new").exists());
    assert_eq!(read_index_paths(dir), vec!["1.txt", "a/2.txt", "a/b/3.txt"]);
    assert_eq!(read_branch_ref(dir, "master"), head_id, "stash leaves the branch alone");

    let status = stdout_of(&mut run_lgit_command(dir, &["status", "--porcelain"]));
    assert_eq!(status, "");

    // the stash snapshot holds the staged state
    let snapshots = list_records(dir, "snapshots");
    assert_eq!(snapshots.len(), 2);
    let stash_id = snapshots.last().unwrap();
    let stash_snapshot = std::fs::read_to_string(dir.join(".lgit/snapshots").join(stash_id))?;
    assert!(
        stash_snapshot.contains(&format!("{} 1.txt\n", sha1_hex(b"uno"))),
        "{}",
        stash_snapshot
    );
    assert!(
        stash_snapshot.contains(&format!("{} new/4.txt\n", sha1_hex(b"four"))),
        "{}",
        stash_snapshot
    );

    let listing = stdout_of(&mut run_lgit_command(dir, &["stash", "list"]));
    assert_eq!(
        listing,
        format!("stash@{{{stash_id}}}: WIP on master: {short} Initial commit\n")
    );

    Ok(())
}

#[rstest]
fn stash_list_keeps_storage_order(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    for content in ["first", "second"] {
        write_file(FileSpec::new(dir.join("1.txt"), content.to_string()));
        run_lgit_command(dir, &["add", "1.txt"]).assert().success();
        run_lgit_command(dir, &["stash"]).assert().success();
    }

    let listing = stdout_of(&mut run_lgit_command(dir, &["stash", "list"]));
    let stash_ids = listing
        .lines()
        .map(|line| {
            line.trim_start_matches("stash@{")
                .split('}')
                .next()
                .unwrap()
                .to_string()
        })
        .collect::<Vec<_>>();

    assert_eq!(stash_ids.len(), 2);
    assert!(stash_ids[0] < stash_ids[1], "{:?}", stash_ids);

    Ok(())
}

#[rstest]
fn stash_list_is_empty_without_stashes(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let listing = stdout_of(&mut run_lgit_command(
        init_repository_dir.path(),
        &["stash", "list"],
    ));

    assert_eq!(listing, "");

    Ok(())
}
