/*
 * main.rs
 *
 * Demo binary: install the hook, then fail on demand. The integration
 * tests drive this to observe real exit statuses and real stderr; it
 * doubles as a by-hand smoke test (`crashguard panic`, watch it die
 * with one report and status 1).
 */

fn main() {
    std::process::exit(i32::from(run_main()));
}

fn run_main() -> u8 {
    crashguard::install();

    let mode = std::env::args().nth(1).unwrap_or_default();
    match mode.as_str() {
        "" | "ok" => {
            println!("ok");
            0
        }
        "env" => {
            println!(
                "native={} browser={}",
                crashguard::env::is_native(),
                crashguard::env::is_browser()
            );
            0
        }
        "double-install" => {
            /* second call must be a silent no-op */
            crashguard::install();
            println!("installed={}", crashguard::is_installed());
            0
        }
        "panic" => panic!("boom"),
        "panic-any" => std::panic::panic_any(7_i32),
        "fail-payload" => std::panic::panic_any(crashguard::Fail::new("nope")),
        "thread" => {
            /* the failure nobody joins: without the hook this thread
             * would die alone and the process would carry on */
            let worker = std::thread::spawn(|| panic!("worker gave up"));
            let _ = worker.join();
            /* unreachable once the hook is installed */
            println!("survived");
            0
        }
        other => {
            eprintln!("crashguard: unknown mode '{other}'");
            eprintln!(
                "usage: crashguard [ok|env|double-install|panic|panic-any|fail-payload|thread]"
            );
            2
        }
    }
}
