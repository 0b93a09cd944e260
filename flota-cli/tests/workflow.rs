//! End-to-end CLI tests covering the rental workflow.
//!
//! These tests drive the binary the way a user would: register users,
//! build a catalog, request and manage reservations, and read the
//! notifications the transitions produce.

mod common;

use common::{date, TestEnv};
use predicates::prelude::*;

/// **What this tests:** The full happy path from catalog to completed
/// rental, checking output and exit codes at each step.
#[test]
fn test_full_rental_workflow() {
    let env = TestEnv::new();
    env.add_user("admin", true);
    env.add_user("carla", false);
    let item_id = env.add_item("admin");

    let reservation_id = env.request("carla", item_id, &date(7), &date(10));

    env.command_as("admin")
        .arg("confirm")
        .arg(reservation_id.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("[confirmed]"))
        .stdout(predicate::str::contains("Reservation confirmed"));

    env.command_as("admin")
        .arg("begin")
        .arg(reservation_id.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("[in_progress]"));

    env.command_as("admin")
        .arg("complete")
        .arg(reservation_id.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("[completed]"))
        .stdout(predicate::str::contains("Thank you for your preference."));

    // Three transitions, three unread notifications for the owner
    env.command_as("carla")
        .arg("notifications")
        .arg("--unread")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reservation confirmed"))
        .stdout(predicate::str::contains("Rental started"))
        .stdout(predicate::str::contains("Rental completed"));

    env.command_as("carla")
        .arg("mark-read")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 notifications marked read"));

    env.command_as("carla")
        .arg("notifications")
        .arg("--unread")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

/// **What this tests:** A conflicting request fails with exit code 1 and
/// the date-conflict message, and the priced total appears in the winning
/// reservation's output.
#[test]
fn test_conflicting_request_rejected() {
    let env = TestEnv::new();
    env.add_user("admin", true);
    env.add_user("carla", false);
    env.add_user("diego", false);
    let item_id = env.add_item("admin");

    env.command_as("carla")
        .arg("request")
        .arg("--item")
        .arg(item_id.to_string())
        .arg("--start")
        .arg(date(7))
        .arg("--end")
        .arg(date(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("$150.000"))
        .stdout(predicate::str::contains("[pending]"));

    env.command_as("diego")
        .arg("request")
        .arg("--item")
        .arg(item_id.to_string())
        .arg("--start")
        .arg(date(9))
        .arg("--end")
        .arg(date(12))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already reserved"));
}

/// **What this tests:** Catalog mutations are admin-gated at the CLI
/// boundary too.
#[test]
fn test_catalog_requires_admin() {
    let env = TestEnv::new();
    env.add_user("carla", false);

    env.command_as("carla")
        .arg("add-item")
        .arg("--name")
        .arg("Hilux")
        .arg("--model")
        .arg("Toyota Hilux")
        .arg("--year")
        .arg("2022")
        .arg("--category")
        .arg("vehicle")
        .arg("--price-per-day")
        .arg("50000")
        .arg("--fuel-efficiency")
        .arg("11.5")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("only administrators"));
}

/// **What this tests:** Delisting an item hides it from `list` and makes
/// new requests fail, while `list --all` still shows it.
#[test]
fn test_delist_hides_item_and_blocks_requests() {
    let env = TestEnv::new();
    env.add_user("admin", true);
    env.add_user("carla", false);
    let item_id = env.add_item("admin");

    env.command_as("admin")
        .arg("update-item")
        .arg(item_id.to_string())
        .arg("--delist")
        .assert()
        .success()
        .stdout(predicate::str::contains("[delisted]"));

    env.command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));

    env.command()
        .arg("list")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hilux"));

    env.command_as("carla")
        .arg("request")
        .arg("--item")
        .arg(item_id.to_string())
        .arg("--start")
        .arg(date(7))
        .arg("--end")
        .arg(date(10))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not available"));
}

/// **What this tests:** Cancellation is admin-gated like the other
/// transitions; once an admin cancels with a reason, the reason reaches
/// the notification and the dates are freed.
#[test]
fn test_cancel_is_admin_gated_and_frees_dates() {
    let env = TestEnv::new();
    env.add_user("admin", true);
    env.add_user("carla", false);
    let item_id = env.add_item("admin");
    let reservation_id = env.request("carla", item_id, &date(7), &date(10));

    // The owner cannot withdraw their own booking
    env.command_as("carla")
        .arg("cancel")
        .arg(reservation_id.to_string())
        .arg("--reason")
        .arg("change of plans")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("only administrators"));

    env.command_as("admin")
        .arg("cancel")
        .arg(reservation_id.to_string())
        .arg("--reason")
        .arg("vehicle recalled")
        .assert()
        .success()
        .stdout(predicate::str::contains("[cancelled]"))
        .stdout(predicate::str::contains("vehicle recalled"));

    // The freed dates can be rebooked
    env.request("carla", item_id, &date(7), &date(10));
}

/// **What this tests:** Structured output. `list --format json` emits a
/// parseable array and `reservations --all` is admin-gated.
#[test]
fn test_structured_output_and_listing() {
    let env = TestEnv::new();
    env.add_user("admin", true);
    env.add_user("carla", false);
    let item_id = env.add_item("admin");
    env.request("carla", item_id, &date(7), &date(10));

    let output = env
        .command()
        .arg("list")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run list");
    assert!(output.status.success());
    let items: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list output is not JSON");
    assert_eq!(items.as_array().expect("expected array").len(), 1);

    env.command_as("carla")
        .arg("reservations")
        .arg("--all")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("only administrators"));

    env.command_as("admin")
        .arg("reservations")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("[pending]"));

    env.command_as("carla")
        .arg("reservations")
        .assert()
        .success()
        .stdout(predicate::str::contains("[pending]"));
}
