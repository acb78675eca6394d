//! # Entity Check Example
//!
//! Prints the member and product comparisons, then walks a wizard through
//! healing a hero. Run with `RUST_LOG=debug` to see every field assignment.

use identity_values::entities::{Hero, Member, Product, Wand, Wizard};
use identity_values::{ChargeCounter, Limits};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    // Members compare by ID, ignoring case
    let m = Member::new("M001", 500)?;
    let n = Member::new("m001", 100)?;
    let o = Member::new("M002", 500)?;
    println!("{}", m);
    println!("{}", m == n);
    println!("{}", m == o);

    // Products compare by code, ignoring surrounding whitespace
    let p = Product::new("A001", 980)?;
    let q = Product::new(" A001 ", 100)?;
    let r = Product::new("B002", 980)?;
    println!("{}", p);
    println!("{}", p == q);
    println!("{}", p == r);

    // Invalid assignments are refused and leave the wand as it was
    let mut wand = Wand::blank(&Limits::default())?;
    wand.set_name("Elder")?;
    wand.set_power(2.5)?;
    if let Err(e) = wand.set_power(150.0) {
        log::warn!("{}", e);
    }
    println!("{}", wand);

    let wizard = Wizard::new("Merlin", Arc::new(wand))?;
    let mut hero = Hero::new("Minato")?;
    hero.set_hp(-5)?;
    println!("{}", hero);

    let mut charges = ChargeCounter::new(2, 1)?;
    while let Some(recovered) = wizard.cast_heal(&mut hero, &mut charges)? {
        println!("recovered {} -> {}", recovered, hero);
    }

    Ok(())
}
