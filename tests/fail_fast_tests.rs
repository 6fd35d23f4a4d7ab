mod common;

use std::collections::HashMap;
use std::process::{Command, ExitStatus};
use std::sync::Arc;
use db_registry::database::structs::database_client::DatabaseClient;
use db_registry::registry::structs::connection_registry::ConnectionRegistry;
use common::CountingOpener;

const FAIL_FAST_CASE: &str = "DB_REGISTRY_FAIL_FAST_CASE";

fn run_fail_fast_case(case: &str) -> ExitStatus {
    let executable = std::env::current_exe().unwrap();
    Command::new(executable)
        .args(["fail_fast_case", "--exact", "--nocapture", "--test-threads=1"])
        .env(FAIL_FAST_CASE, case)
        .status()
        .unwrap()
}

/// Runs one `_or_exit` call when re-invoked by the tests below; a no-op otherwise.
#[test]
fn fail_fast_case() {
    let Ok(case) = std::env::var(FAIL_FAST_CASE) else {
        return;
    };

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
    match case.as_str() {
        "get_missing" => {
            let registry = ConnectionRegistry::new(Arc::new(HashMap::<String, String>::new()), DatabaseClient);
            registry.get_or_exit("missing");
        }
        "ensure_unconfigured" => {
            let registry = ConnectionRegistry::new(Arc::new(HashMap::<String, String>::new()), DatabaseClient);
            runtime.block_on(registry.ensure_or_exit("unconfigured"));
        }
        "ensure_configured" => {
            let registry = common::create_test_registry(&["db1"], CountingOpener::default());
            let handle = runtime.block_on(registry.ensure_or_exit("db1"));
            let fetched = registry.get_or_exit("db1");
            assert!(Arc::ptr_eq(&handle, &fetched));
        }
        other => panic!("unknown fail-fast case '{other}'"),
    }
    std::process::exit(0);
}

#[test]
fn test_get_or_exit_terminates_on_missing_name() {
    assert_eq!(run_fail_fast_case("get_missing").code(), Some(1));
}

#[test]
fn test_ensure_or_exit_terminates_on_unconfigured_name() {
    assert_eq!(run_fail_fast_case("ensure_unconfigured").code(), Some(1));
}

#[test]
fn test_or_exit_variants_return_on_success() {
    assert_eq!(run_fail_fast_case("ensure_configured").code(), Some(0));
}
