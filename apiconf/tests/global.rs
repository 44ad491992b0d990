//! The process-wide API base URL.

use apiconf::{api_base_url, settings, ENV_VAR};
use std::env;
use std::thread;

#[test]
fn test_api_base_url_is_stable() {
    env::remove_var(ENV_VAR);

    let first = api_base_url().unwrap();
    assert_eq!(first, "http://localhost:5000/api");

    // Later changes to the variable do not affect the resolved value
    env::set_var(ENV_VAR, "staging");
    let second = api_base_url().unwrap();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second));

    let from_threads: Vec<&'static str> = (0..4)
        .map(|_| thread::spawn(|| api_base_url().unwrap()))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    assert!(from_threads.iter().all(|url| std::ptr::eq(*url, first)));

    assert!(settings::get().is_some());
    env::remove_var(ENV_VAR);
}
