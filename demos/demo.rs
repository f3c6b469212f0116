//! Predicate dump for two sample hands.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=trace` to see parsing and classification logs.

use hand_kind::{Hand, HandReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let h1: Hand = "2S 2D 2H 4D 4C".parse()?;
    let h2: Hand = "2D 3D 5D 4D 6D".parse()?;

    println!("{}", h1.has_n_kind(2));
    println!("{}", h1.has_n_kind(3));
    println!("{}", h2.is_straight());
    println!("{}", h2.is_flush());

    for h in [&h1, &h2] {
        println!("{}", HandReport::from_hand(h).to_json_pretty()?);
    }
    println!("{} vs {}: {:?}", h1.kind(), h2.kind(), h1.compare(&h2));
    Ok(())
}
