mod ls_tree_lists_entries;
