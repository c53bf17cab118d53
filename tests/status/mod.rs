mod list_untracked_directories_not_their_contents;
mod modifying_a_staged_file_leaves_it_not_staged;
