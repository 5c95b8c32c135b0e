use blossom_picture::utils::logger::{init_logger, log_config, LogConfig};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_init_logger_installs_once() {
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                init_logger(Some(LogConfig {
                    console_output: true,
                    file_output: false,
                    ..LogConfig::default()
                }))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    assert!(log_config().is_some());
    assert!(init_logger(None).is_ok());
}
