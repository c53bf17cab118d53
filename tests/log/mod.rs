mod log_with_no_commits_fails;
mod message_resembling_a_parent_line_is_kept;
