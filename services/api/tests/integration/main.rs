
mod entry_test;
