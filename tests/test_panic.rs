// Re-runs this test binary as a child that panics on a rayon worker, since
// the hook ends whatever process it is installed in.

use oxidized_plugin_lint::error::{install_panic_hook, EXIT_INTERNAL};
use rayon::prelude::*;
use std::process::Command;

const CHILD_ENV: &str = "OXIDIZED_PLUGIN_LINT_PANIC_CHILD";

#[test]
fn worker_panic_exits_with_internal_code() {
    if std::env::var_os(CHILD_ENV).is_some() {
        install_panic_hook();
        let _: Vec<u32> = (0..4u32)
            .into_par_iter()
            .map(|i| if i == 3 { panic!("worker failed") } else { i })
            .collect();
        unreachable!("panic hook did not exit");
    }

    let output = Command::new(std::env::current_exe().unwrap())
        .args(["--exact", "worker_panic_exits_with_internal_code", "--nocapture"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(EXIT_INTERNAL));
    assert!(String::from_utf8_lossy(&output.stderr).contains("worker failed"));
}
