// demos/nested.rs
// Walks through nested blocks, a forced end and the shared timer.
//
// Run with: cargo run --example nested

use std::thread;
use std::time::Duration;

use blocktimer::BlockTimer;
use env_logger::Env;

fn work(millis: u64) {
    thread::sleep(Duration::from_millis(millis));
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let timer = BlockTimer::with_tag("Demo");

    timer.begin_with_message("load", "assets.bin");
    work(3);
    timer.log("opened archive");
    {
        let decode = timer.scoped("decode");
        work(12);
        decode.log("notes");
        work(1);
    }
    work(2);
    timer.end_named("load");

    // Leaving "inner" open: ending "outer" closes it first and says so.
    timer.begin("outer");
    timer.begin("inner");
    work(4);
    timer.end_named("outer");

    // Misuse is logged, never fatal.
    timer.end();
    timer.end_named("never-begun");

    // The first shared log reports time since the shared timer was created.
    blocktimer::log("shared timer ready");
    blocktimer::begin("startup");
    work(5);
    blocktimer::end_named("startup");
}
