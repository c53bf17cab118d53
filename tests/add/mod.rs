mod add_single_file_to_index_successfully;
mod adding_a_deleted_tracked_file_removes_its_record;
mod adding_unchanged_content_is_idempotent;
