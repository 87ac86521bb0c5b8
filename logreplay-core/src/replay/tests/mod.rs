mod reconstruct_tests;
mod recorder_tests;
mod test_helpers;
