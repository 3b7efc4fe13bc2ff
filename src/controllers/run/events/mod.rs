pub mod run_event;
