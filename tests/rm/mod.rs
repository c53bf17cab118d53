mod removing_a_tracked_file_successfully;
mod removing_an_untracked_file_fails;
